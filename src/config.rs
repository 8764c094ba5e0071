//! Application constants and runtime configuration

use std::time::Duration;

/// Public product catalog endpoint
pub const CATALOG_URL: &str = "https://fakestoreapi.com/products";

/// Products shown per gallery page
pub const PAGE_SIZE: usize = 10;

/// Length of a CAPTCHA challenge code
pub const CODE_LENGTH: usize = 6;

/// How long the UI loop waits for input before redrawing
pub const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

pub const LOG_DIR: &str = ".logs";
pub const LOG_FILE_PREFIX: &str = "product-gallery";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub catalog_url: String,
    pub page_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_url: CATALOG_URL.to_string(),
            page_size: PAGE_SIZE,
        }
    }
}

impl AppConfig {
    pub fn with_catalog_url(mut self, url: impl Into<String>) -> Self {
        self.catalog_url = url.into();
        self
    }
}
