//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::{Focus, Screen};
use crate::view::layout::{gallery_areas, grid_columns};
use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let model = self.model.lock().await;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            model.set_should_quit(true).await;
            return Ok(());
        }

        // Blocking alert swallows everything until dismissed
        if model.has_alert().await {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                model.dismiss_alert().await;
            }
            return Ok(());
        }

        if model.is_help_popup_open().await {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H')) {
                model.hide_help_popup().await;
            }
            return Ok(());
        }

        let screen = model.get_screen().await;
        match screen {
            Screen::Captcha { .. } => {
                match key.code {
                    KeyCode::Enter => {
                        drop(model);
                        let _ = self.submit_captcha().await;
                    }
                    KeyCode::Esc => model.captcha_clear_input().await,
                    KeyCode::Backspace => model.captcha_backspace().await,
                    KeyCode::Char(c) if is_plain_text(&key) => model.captcha_push_char(c).await,
                    _ => {}
                }
                return Ok(());
            }
            Screen::Loading | Screen::Error(_) => {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) {
                    model.set_should_quit(true).await;
                }
                return Ok(());
            }
            Screen::Gallery(_) => {}
        }

        let ui_state = model.get_ui_state().await;

        if ui_state.focus == Focus::Search {
            match key.code {
                KeyCode::Tab | KeyCode::Down | KeyCode::Enter => model.set_focus(Focus::Grid).await,
                KeyCode::Esc => model.set_search_query(String::new()).await,
                KeyCode::Backspace => model.backspace_search().await,
                KeyCode::Char(c) if is_plain_text(&key) => model.append_to_search(c).await,
                _ => {}
            }
            return Ok(());
        }

        let columns = grid_columns(gallery_areas(ui_state.viewport).grid.width) as isize;
        let dragging = ui_state.drag_source.is_some();

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                model.set_should_quit(true).await;
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Char('/') => {
                model.cancel_drag().await;
                model.set_focus(Focus::Search).await;
            }
            KeyCode::Left => model.move_selection(-1).await,
            KeyCode::Right => model.move_selection(1).await,
            KeyCode::Up => {
                if !dragging && (ui_state.selected as isize) < columns {
                    model.set_focus(Focus::Search).await;
                } else {
                    model.move_selection(-columns).await;
                }
            }
            KeyCode::Down => model.move_selection(columns).await,
            KeyCode::Char(' ') => {
                if dragging {
                    model.cancel_drag().await;
                } else if !model.get_gallery_page().await.items.is_empty() {
                    model.drag_start(ui_state.selected).await;
                }
            }
            KeyCode::Enter => {
                model.drop_on(ui_state.selected).await;
            }
            KeyCode::Esc => model.cancel_drag().await,
            KeyCode::PageDown | KeyCode::Char(']') => model.step_page(true).await,
            KeyCode::PageUp | KeyCode::Char('[') => model.step_page(false).await,
            KeyCode::Char(c @ '1'..='9') => {
                let number = c as usize - '0' as usize;
                if number <= model.get_gallery_page().await.total_pages {
                    model.set_page(number).await;
                }
            }
            KeyCode::Char('h') | KeyCode::Char('H') => model.toggle_help_popup().await,
            _ => {}
        }
        Ok(())
    }
}

/// Printable keys without Ctrl/Alt chords; Shift is part of the character
fn is_plain_text(key: &KeyEvent) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use ratatui::layout::Rect;
    use tokio::sync::Mutex;

    use crate::config::AppConfig;
    use crate::model::store::tests::product;
    use crate::model::{AppModel, Product, fixed_gate, model_with_products};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    async fn gallery_controller(products: Vec<Product>) -> AppController {
        let model = model_with_products(products).await;
        model.set_viewport(Rect::new(0, 0, 120, 40)).await;
        AppController::new(Arc::new(Mutex::new(model)))
    }

    async fn type_text(controller: &AppController, text: &str) {
        for c in text.chars() {
            controller.handle_key_event(press(KeyCode::Char(c))).await.unwrap();
        }
    }

    async fn ids(controller: &AppController) -> Vec<u64> {
        let model = controller.model.lock().await;
        model.get_products().await.iter().map(|p| p.id).collect()
    }

    #[tokio::test]
    async fn alert_blocks_until_dismissed() {
        let model = AppModel::with_gate(AppConfig::default(), fixed_gate(4));
        let controller = AppController::new(Arc::new(Mutex::new(model)));

        type_text(&controller, "nope").await;
        controller.handle_key_event(press(KeyCode::Enter)).await.unwrap();
        assert!(controller.model.lock().await.has_alert().await);

        // Typing is swallowed while the alert is up
        type_text(&controller, "44").await;
        {
            let model = controller.model.lock().await;
            match model.get_screen().await {
                Screen::Captcha { input, .. } => assert!(input.is_empty()),
                other => panic!("unexpected screen {other:?}"),
            }
        }

        controller.handle_key_event(press(KeyCode::Esc)).await.unwrap();
        assert!(!controller.model.lock().await.has_alert().await);
    }

    #[tokio::test]
    async fn typing_filters_without_resetting_page() {
        let mut products: Vec<Product> = (1..=25).map(|i| product(i, "Ring")).collect();
        products[24].title = "Slim Shirt".into();
        let controller = gallery_controller(products).await;

        controller.handle_key_event(press(KeyCode::Tab)).await.unwrap();
        controller.handle_key_event(press(KeyCode::Char('3'))).await.unwrap();
        controller.handle_key_event(press(KeyCode::Char('/'))).await.unwrap();
        type_text(&controller, "shirt").await;

        let model = controller.model.lock().await;
        let page = model.get_gallery_page().await;
        assert_eq!(page.match_count, 1);
        assert_eq!(page.current_page, 3);
        assert!(page.items.is_empty());
    }

    #[tokio::test]
    async fn keyboard_drag_and_drop_reorders() {
        let controller = gallery_controller(vec![
            product(1, "A"),
            product(2, "B"),
            product(3, "C"),
            product(4, "D"),
        ])
        .await;

        controller.handle_key_event(press(KeyCode::Down)).await.unwrap();
        controller.handle_key_event(press(KeyCode::Char(' '))).await.unwrap();
        controller.handle_key_event(press(KeyCode::Right)).await.unwrap();
        controller.handle_key_event(press(KeyCode::Right)).await.unwrap();
        controller.handle_key_event(press(KeyCode::Enter)).await.unwrap();

        assert_eq!(ids(&controller).await, vec![2, 3, 1, 4]);
    }

    #[tokio::test]
    async fn reorder_while_searching_keeps_only_matches() {
        let controller = gallery_controller(vec![
            product(1, "Cotton Shirt"),
            product(2, "Backpack"),
            product(3, "T-Shirt"),
            product(4, "Jacket"),
        ])
        .await;

        type_text(&controller, "shirt").await;
        controller.handle_key_event(press(KeyCode::Tab)).await.unwrap();
        controller.handle_key_event(press(KeyCode::Char(' '))).await.unwrap();
        controller.handle_key_event(press(KeyCode::Right)).await.unwrap();
        controller.handle_key_event(press(KeyCode::Enter)).await.unwrap();

        assert_eq!(ids(&controller).await, vec![3, 1]);
    }

    #[tokio::test]
    async fn enter_without_drag_does_nothing() {
        let controller = gallery_controller(vec![product(1, "A"), product(2, "B")]).await;
        controller.handle_key_event(press(KeyCode::Tab)).await.unwrap();
        controller.handle_key_event(press(KeyCode::Right)).await.unwrap();
        controller.handle_key_event(press(KeyCode::Enter)).await.unwrap();
        assert_eq!(ids(&controller).await, vec![1, 2]);
    }

    #[tokio::test]
    async fn page_digits_respect_offered_pages() {
        let controller = gallery_controller((1..=25).map(|i| product(i, "Ring")).collect()).await;
        controller.handle_key_event(press(KeyCode::Tab)).await.unwrap();

        controller.handle_key_event(press(KeyCode::Char('5'))).await.unwrap();
        assert_eq!(controller.model.lock().await.get_ui_state().await.current_page, 1);

        controller.handle_key_event(press(KeyCode::Char('2'))).await.unwrap();
        assert_eq!(controller.model.lock().await.get_ui_state().await.current_page, 2);

        controller.handle_key_event(press(KeyCode::PageDown)).await.unwrap();
        controller.handle_key_event(press(KeyCode::PageDown)).await.unwrap();
        assert_eq!(controller.model.lock().await.get_ui_state().await.current_page, 3);
    }

    #[tokio::test]
    async fn q_types_in_search_but_quits_from_grid() {
        let controller = gallery_controller(vec![product(1, "A")]).await;
        type_text(&controller, "q").await;
        assert!(!controller.model.lock().await.should_quit().await);

        controller.handle_key_event(press(KeyCode::Tab)).await.unwrap();
        controller.handle_key_event(press(KeyCode::Char('q'))).await.unwrap();
        assert!(controller.model.lock().await.should_quit().await);
    }

    #[tokio::test]
    async fn drag_after_narrowing_search_uses_a_visible_card() {
        let controller = gallery_controller(vec![
            product(1, "Cotton Shirt"),
            product(2, "Backpack"),
            product(3, "T-Shirt"),
            product(4, "Jacket"),
            product(5, "Ring"),
        ])
        .await;

        controller.handle_key_event(press(KeyCode::Tab)).await.unwrap();
        for _ in 0..4 {
            controller.handle_key_event(press(KeyCode::Right)).await.unwrap();
        }
        assert_eq!(controller.model.lock().await.get_ui_state().await.selected, 4);

        controller.handle_key_event(press(KeyCode::Char('/'))).await.unwrap();
        type_text(&controller, "shirt").await;
        controller.handle_key_event(press(KeyCode::Tab)).await.unwrap();
        controller.handle_key_event(press(KeyCode::Char(' '))).await.unwrap();
        {
            let model = controller.model.lock().await;
            let state = model.get_ui_state().await;
            assert_eq!(model.get_gallery_page().await.items.len(), 2);
            assert_eq!(state.selected, 1);
            assert_eq!(state.drag_source, Some(1));
        }

        controller.handle_key_event(press(KeyCode::Left)).await.unwrap();
        controller.handle_key_event(press(KeyCode::Enter)).await.unwrap();
        assert_eq!(ids(&controller).await, vec![3, 1]);
    }

    #[tokio::test]
    async fn modifier_chords_are_not_typed() {
        let controller = gallery_controller(vec![product(1, "A")]).await;
        for modifiers in [KeyModifiers::ALT, KeyModifiers::CONTROL] {
            controller
                .handle_key_event(KeyEvent::new(KeyCode::Char('x'), modifiers))
                .await
                .unwrap();
        }
        controller
            .handle_key_event(KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT))
            .await
            .unwrap();
        assert_eq!(controller.model.lock().await.get_ui_state().await.search_query, "R");

        let model = AppModel::with_gate(AppConfig::default(), fixed_gate(4));
        let controller = AppController::new(Arc::new(Mutex::new(model)));
        controller
            .handle_key_event(KeyEvent::new(KeyCode::Char('v'), KeyModifiers::CONTROL))
            .await
            .unwrap();
        type_text(&controller, "4").await;
        match controller.model.lock().await.get_screen().await {
            Screen::Captcha { input, .. } => assert_eq!(input, "4"),
            other => panic!("unexpected screen {other:?}"),
        }
    }
}
