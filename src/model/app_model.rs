//! Main application model with state management

use std::sync::Arc;
use ratatui::layout::Rect;
use tokio::sync::Mutex;

use crate::config::AppConfig;
use crate::error::GalleryError;
use super::captcha::{CaptchaGate, Verification};
use super::catalog_client::CatalogClient;
use super::store::{LoadStatus, Product, ProductStore, paginate, total_pages};
use super::types::{DropEffect, Focus, GalleryPage, Screen, UiState};

/// Main application model containing all state
pub struct AppModel {
    pub catalog: Option<CatalogClient>,
    config: AppConfig,
    gate: Arc<Mutex<CaptchaGate>>,
    store: Arc<Mutex<ProductStore>>,
    pub ui_state: Arc<Mutex<UiState>>,
    pub should_quit: Arc<Mutex<bool>>,
}

impl AppModel {
    pub fn new(config: AppConfig) -> Result<Self, GalleryError> {
        Ok(Self::with_gate(config, CaptchaGate::new()?))
    }

    pub fn with_gate(config: AppConfig, gate: CaptchaGate) -> Self {
        Self {
            catalog: None,
            config,
            gate: Arc::new(Mutex::new(gate)),
            store: Arc::new(Mutex::new(ProductStore::new())),
            ui_state: Arc::new(Mutex::new(UiState::default())),
            should_quit: Arc::new(Mutex::new(false)),
        }
    }

    pub fn set_catalog_client(&mut self, client: CatalogClient) {
        self.catalog = Some(client);
    }

    pub fn get_catalog_client(&self) -> Option<CatalogClient> {
        self.catalog.clone()
    }

    pub fn page_size(&self) -> usize {
        self.config.page_size
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }

    // ========================================================================
    // CAPTCHA gate
    // ========================================================================

    pub async fn is_verified(&self) -> bool {
        self.gate.lock().await.is_verified()
    }

    pub async fn captcha_push_char(&self, c: char) {
        self.gate.lock().await.push_char(c);
    }

    pub async fn captcha_backspace(&self) {
        self.gate.lock().await.backspace();
    }

    pub async fn captcha_clear_input(&self) {
        self.gate.lock().await.clear_input();
    }

    /// Check the typed code. A mismatch raises the blocking alert.
    pub async fn submit_captcha(&self) -> Result<Verification, GalleryError> {
        let result = self.gate.lock().await.submit_input();
        if let Err(ref e) = result {
            self.show_alert(e.to_string()).await;
        }
        result
    }

    // ========================================================================
    // Product store
    // ========================================================================

    pub async fn begin_catalog_load(&self) -> bool {
        self.store.lock().await.begin_load()
    }

    pub async fn finish_catalog_load(&self, result: Result<Vec<Product>, GalleryError>) {
        self.store.lock().await.finish_load(result);
    }

    pub async fn load_status(&self) -> LoadStatus {
        self.store.lock().await.status().clone()
    }

    pub async fn get_products(&self) -> Vec<Product> {
        self.store.lock().await.products().to_vec()
    }

    // ========================================================================
    // Derived views
    // ========================================================================

    pub async fn get_ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    pub async fn get_gallery_page(&self) -> GalleryPage {
        let (query, current_page) = {
            let state = self.ui_state.lock().await;
            (state.search_query.clone(), state.current_page)
        };
        let filtered = self.store.lock().await.filter(&query);
        GalleryPage {
            items: paginate(&filtered, current_page, self.config.page_size).to_vec(),
            current_page,
            total_pages: total_pages(filtered.len(), self.config.page_size),
            match_count: filtered.len(),
        }
    }

    pub async fn get_screen(&self) -> Screen {
        {
            let gate = self.gate.lock().await;
            if !gate.is_verified() {
                return Screen::Captcha {
                    code: gate.code().to_string(),
                    input: gate.input().to_string(),
                };
            }
        }
        match self.load_status().await {
            LoadStatus::Idle | LoadStatus::Loading => Screen::Loading,
            LoadStatus::Failed(msg) => Screen::Error(msg),
            LoadStatus::Ready => Screen::Gallery(self.get_gallery_page().await),
        }
    }

    // ========================================================================
    // Gallery view state
    // ========================================================================

    pub async fn set_focus(&self, focus: Focus) {
        self.ui_state.lock().await.focus = focus;
        if focus == Focus::Grid {
            self.clamp_selection().await;
        }
    }

    pub async fn set_search_query(&self, query: String) {
        self.ui_state.lock().await.search_query = query;
        self.clamp_selection().await;
    }

    pub async fn append_to_search(&self, c: char) {
        self.ui_state.lock().await.search_query.push(c);
        self.clamp_selection().await;
    }

    pub async fn backspace_search(&self) {
        self.ui_state.lock().await.search_query.pop();
        self.clamp_selection().await;
    }

    /// Keep the selection and any drag inside the cards currently shown
    async fn clamp_selection(&self) {
        let visible = self.get_gallery_page().await.items.len();
        let mut state = self.ui_state.lock().await;
        state.selected = state.selected.min(visible.saturating_sub(1));
        if state.drag_source.is_some_and(|source| source >= visible) {
            state.drag_source = None;
            state.drop_target = None;
        }
        if state.drop_target.is_some_and(|target| target >= visible) {
            state.drop_target = None;
        }
    }

    pub async fn set_page(&self, page: usize) {
        let mut state = self.ui_state.lock().await;
        state.current_page = page;
        state.selected = 0;
        state.drag_source = None;
        state.drop_target = None;
    }

    /// Step one page, staying within what the pagination control offers
    pub async fn step_page(&self, forward: bool) {
        let page = self.get_gallery_page().await;
        if page.total_pages == 0 {
            return;
        }
        let target = if forward {
            if page.current_page >= page.total_pages {
                return;
            }
            page.current_page + 1
        } else {
            page.current_page.saturating_sub(1).clamp(1, page.total_pages)
        };
        if target != page.current_page {
            self.set_page(target).await;
        }
    }

    pub async fn move_selection(&self, delta: isize) {
        let visible = self.get_gallery_page().await.items.len();
        let mut state = self.ui_state.lock().await;
        if visible == 0 {
            state.selected = 0;
            return;
        }
        let next = (state.selected as isize + delta).clamp(0, visible as isize - 1);
        state.selected = next as usize;
        if state.drag_source.is_some() {
            state.drop_target = Some(state.selected);
        }
    }

    pub async fn set_viewport(&self, area: Rect) {
        self.ui_state.lock().await.viewport = area;
    }

    // ========================================================================
    // Drag and drop
    // ========================================================================

    /// Pick up the card at `index`. Returns false when no such card is shown.
    pub async fn drag_start(&self, index: usize) -> bool {
        let visible = self.get_gallery_page().await.items.len();
        if index >= visible {
            tracing::debug!(index, visible, "Drag start outside the visible page ignored");
            return false;
        }
        let mut state = self.ui_state.lock().await;
        state.drag_source = Some(index);
        state.drop_target = None;
        state.selected = index;
        tracing::debug!(index, "Drag started");
        true
    }

    /// Accept the hovered card as a drop target
    pub async fn drag_over(&self, index: usize) -> DropEffect {
        let visible = self.get_gallery_page().await.items.len();
        let mut state = self.ui_state.lock().await;
        if state.drag_source.is_none() || index >= visible {
            return DropEffect::None;
        }
        state.drop_target = Some(index);
        state.selected = index;
        DropEffect::Move
    }

    /// Drop the dragged card onto `index`. Returns false when nothing was dragged.
    pub async fn drop_on(&self, index: usize) -> bool {
        let (source, query, current_page) = {
            let mut state = self.ui_state.lock().await;
            let Some(source) = state.drag_source.take() else {
                return false;
            };
            state.drop_target = None;
            state.selected = index;
            (source, state.search_query.clone(), state.current_page)
        };
        self.store
            .lock()
            .await
            .reorder(&query, current_page, self.config.page_size, source, index);
        true
    }

    pub async fn cancel_drag(&self) {
        let mut state = self.ui_state.lock().await;
        state.drag_source = None;
        state.drop_target = None;
    }

    pub async fn is_dragging(&self) -> bool {
        self.ui_state.lock().await.drag_source.is_some()
    }

    // ========================================================================
    // Overlays
    // ========================================================================

    pub async fn show_alert(&self, message: String) {
        self.ui_state.lock().await.alert = Some(message);
    }

    pub async fn dismiss_alert(&self) {
        self.ui_state.lock().await.alert = None;
    }

    pub async fn has_alert(&self) -> bool {
        self.ui_state.lock().await.alert.is_some()
    }

    pub async fn toggle_help_popup(&self) {
        let mut state = self.ui_state.lock().await;
        state.show_help_popup = !state.show_help_popup;
    }

    pub async fn hide_help_popup(&self) {
        self.ui_state.lock().await.show_help_popup = false;
    }

    pub async fn is_help_popup_open(&self) -> bool {
        self.ui_state.lock().await.show_help_popup
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::model::captcha::tests::SequenceSource;
    use crate::model::store::tests::product;

    /// Source yielding `index` forever, so the code is six copies of one symbol
    pub(crate) fn fixed_gate(index: usize) -> CaptchaGate {
        CaptchaGate::with_source(Box::new(SequenceSource::new(vec![index]))).unwrap()
    }

    /// A model past the gate with `products` already loaded
    pub(crate) async fn model_with_products(products: Vec<Product>) -> AppModel {
        let model = AppModel::with_gate(AppConfig::default(), fixed_gate(1));
        for c in "111111".chars() {
            model.captcha_push_char(c).await;
        }
        model.submit_captcha().await.unwrap();
        model.begin_catalog_load().await;
        model.finish_catalog_load(Ok(products)).await;
        model
    }

    fn ids(products: &[Product]) -> Vec<u64> {
        products.iter().map(|p| p.id).collect()
    }

    #[tokio::test]
    async fn unverified_model_shows_captcha() {
        let model = AppModel::with_gate(AppConfig::default(), fixed_gate(10));
        match model.get_screen().await {
            Screen::Captcha { code, input } => {
                assert_eq!(code, "AAAAAA");
                assert!(input.is_empty());
            }
            other => panic!("unexpected screen {other:?}"),
        }
    }

    #[tokio::test]
    async fn failed_submission_raises_alert() {
        let model = AppModel::with_gate(AppConfig::default(), fixed_gate(10));
        model.captcha_push_char('x').await;
        assert_eq!(model.submit_captcha().await, Err(GalleryError::ChallengeFailed));
        assert!(model.has_alert().await);
        assert!(!model.is_verified().await);
    }

    #[tokio::test]
    async fn failed_load_shows_error_screen() {
        let model = AppModel::with_gate(AppConfig::default(), fixed_gate(2));
        for c in "222222".chars() {
            model.captcha_push_char(c).await;
        }
        model.submit_captcha().await.unwrap();
        assert!(matches!(model.get_screen().await, Screen::Loading));

        model.begin_catalog_load().await;
        model
            .finish_catalog_load(Err(GalleryError::CatalogFetchFailed(
                "Failed to fetch products".into(),
            )))
            .await;

        match model.get_screen().await {
            Screen::Error(msg) => assert_eq!(msg, "Failed to fetch products"),
            other => panic!("unexpected screen {other:?}"),
        }
        assert!(model.get_products().await.is_empty());
    }

    #[tokio::test]
    async fn search_does_not_reset_page() {
        let model = model_with_products((1..=25).map(|i| product(i, "Ring")).collect()).await;
        model.set_page(3).await;
        model.set_search_query("ring 1".into()).await;
        let page = model.get_gallery_page().await;
        assert_eq!(page.current_page, 3);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);

        model.set_search_query("rin".into()).await;
        let page = model.get_gallery_page().await;
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 5);
    }

    #[tokio::test]
    async fn page_out_of_range_after_search_shows_empty_page() {
        let mut products: Vec<Product> = (1..=25).map(|i| product(i, "Ring")).collect();
        products[0].title = "Backpack".into();
        let model = model_with_products(products).await;

        model.set_page(2).await;
        model.set_search_query("backpack".into()).await;
        let page = model.get_gallery_page().await;
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.current_page, 2);
        assert!(page.items.is_empty());
    }

    #[tokio::test]
    async fn drop_without_drag_is_noop() {
        let model = model_with_products(vec![product(1, "A"), product(2, "B")]).await;
        assert!(!model.drop_on(1).await);
        assert_eq!(ids(&model.get_products().await), vec![1, 2]);
    }

    #[tokio::test]
    async fn drag_over_requires_active_drag() {
        let model = model_with_products(vec![product(1, "A"), product(2, "B")]).await;
        assert_eq!(model.drag_over(1).await, DropEffect::None);
        assert!(model.drag_start(0).await);
        assert_eq!(model.drag_over(1).await, DropEffect::Move);
        assert_eq!(model.drag_over(7).await, DropEffect::None);
        assert_eq!(model.get_ui_state().await.drop_target, Some(1));
    }

    #[tokio::test]
    async fn drag_and_drop_reorders_visible_page() {
        let model = model_with_products(vec![
            product(1, "A"),
            product(2, "B"),
            product(3, "C"),
            product(4, "D"),
        ])
        .await;
        model.drag_start(0).await;
        model.drag_over(2).await;
        assert!(model.drop_on(2).await);
        assert_eq!(ids(&model.get_products().await), vec![2, 3, 1, 4]);
        assert!(!model.is_dragging().await);
    }

    #[tokio::test]
    async fn step_page_stays_in_offered_range() {
        let model = model_with_products((1..=25).map(|i| product(i, "Ring")).collect()).await;
        model.step_page(false).await;
        assert_eq!(model.get_ui_state().await.current_page, 1);
        for _ in 0..5 {
            model.step_page(true).await;
        }
        assert_eq!(model.get_ui_state().await.current_page, 3);
    }

    #[tokio::test]
    async fn selection_is_clamped_to_visible_cards() {
        let model = model_with_products((1..=3).map(|i| product(i, "Ring")).collect()).await;
        model.move_selection(10).await;
        assert_eq!(model.get_ui_state().await.selected, 2);
        model.move_selection(-10).await;
        assert_eq!(model.get_ui_state().await.selected, 0);
    }

    #[tokio::test]
    async fn drag_start_rejects_cards_off_the_page() {
        let model = model_with_products(vec![product(1, "A"), product(2, "B")]).await;
        assert!(!model.drag_start(2).await);
        assert!(!model.is_dragging().await);
        assert!(!model.drop_on(0).await);
        assert_eq!(ids(&model.get_products().await), vec![1, 2]);
    }

    #[tokio::test]
    async fn narrowing_search_clamps_selection_and_drag() {
        let model = model_with_products(vec![
            product(1, "Cotton Shirt"),
            product(2, "Backpack"),
            product(3, "T-Shirt"),
            product(4, "Jacket"),
            product(5, "Ring"),
        ])
        .await;
        model.move_selection(4).await;
        assert!(model.drag_start(4).await);

        model.set_search_query("shirt".into()).await;
        let state = model.get_ui_state().await;
        assert_eq!(state.selected, 1);
        assert_eq!(state.drag_source, None);
        assert_eq!(state.drop_target, None);

        model.set_search_query(String::new()).await;
        assert_eq!(model.get_ui_state().await.selected, 1);
    }

    #[tokio::test]
    async fn step_forward_past_the_end_stays_put() {
        let mut products: Vec<Product> = (1..=25).map(|i| product(i, "Ring")).collect();
        products[0].title = "Backpack".into();
        let model = model_with_products(products).await;
        model.set_page(3).await;
        model.set_search_query("backpack".into()).await;

        model.step_page(true).await;
        assert_eq!(model.get_ui_state().await.current_page, 3);

        model.step_page(false).await;
        assert_eq!(model.get_ui_state().await.current_page, 1);
    }
}
