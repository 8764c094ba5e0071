//! In-memory product store and the derived gallery views

use serde::Deserialize;

use crate::error::GalleryError;

/// A product as served by the catalog; unknown fields are ignored
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub image: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadStatus {
    /// Gate not passed yet, nothing requested
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

#[derive(Clone, Debug, Default)]
pub struct ProductStore {
    products: Vec<Product>,
    status: LoadStatus,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Moves `Idle` to `Loading`. Returns false if a load was already started.
    pub fn begin_load(&mut self) -> bool {
        if self.status != LoadStatus::Idle {
            return false;
        }
        self.status = LoadStatus::Loading;
        true
    }

    /// Settle the one-shot load with the fetch outcome
    pub fn finish_load(&mut self, result: Result<Vec<Product>, GalleryError>) {
        match result {
            Ok(products) => {
                self.products = products;
                self.status = LoadStatus::Ready;
            }
            Err(e) => {
                self.products.clear();
                self.status = LoadStatus::Failed(e.to_string());
            }
        }
    }

    pub fn filter(&self, query: &str) -> Vec<Product> {
        filter_products(&self.products, query)
    }

    /// Move a card within the visible page of the filtered list.
    ///
    /// The reordered *filtered* list becomes the canonical order, so products
    /// hidden by an active search are discarded from the store.
    pub fn reorder(&mut self, query: &str, current_page: usize, page_size: usize, from: usize, to: usize) {
        let mut filtered = self.filter(query);
        let offset = current_page.saturating_sub(1) * page_size;
        let from_abs = offset + from;
        if from_abs >= filtered.len() {
            return;
        }

        let moved = filtered.remove(from_abs);
        let to_abs = (offset + to).min(filtered.len());
        filtered.insert(to_abs, moved);

        let dropped = self.products.len() - filtered.len();
        if dropped > 0 {
            tracing::warn!(
                dropped,
                query,
                "Reorder under an active search discarded non-matching products"
            );
        }
        tracing::debug!(from = from_abs, to = to_abs, "Products reordered");
        self.products = filtered;
    }
}

/// Products whose title contains `query`, ignoring case, in current order
pub fn filter_products(products: &[Product], query: &str) -> Vec<Product> {
    if query.is_empty() {
        return products.to_vec();
    }
    let query_lower = query.to_lowercase();
    products
        .iter()
        .filter(|p| p.title.to_lowercase().contains(&query_lower))
        .cloned()
        .collect()
}

/// The 1-based `page`-th slice of `items`; empty when out of range
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

pub fn total_pages(item_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    item_count.div_ceil(page_size)
}
