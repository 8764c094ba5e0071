//! Model module - Application state and data types
//!
//! - `types`: UI state and the derived screen/page snapshots
//! - `captcha`: the CAPTCHA gate state machine
//! - `store`: product list, load status and the filter/paginate/reorder views
//! - `catalog_client`: HTTP client for the product catalog
//! - `app_model`: main application model with state management methods

mod types;
pub mod captcha;
pub mod store;
mod catalog_client;
mod app_model;

pub use types::{DropEffect, Focus, GalleryPage, Screen, UiState};

pub use captcha::Verification;

pub use store::Product;

pub use catalog_client::CatalogClient;

pub use app_model::AppModel;

#[cfg(test)]
pub(crate) use app_model::tests::{fixed_gate, model_with_products};
#[cfg(test)]
pub(crate) use catalog_client::tests::{CATALOG_BODY, spawn_catalog};
