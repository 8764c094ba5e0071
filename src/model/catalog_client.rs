use anyhow::Result;
use reqwest::Client;

use crate::error::GalleryError;
use crate::log_fetch_result;
use super::store::Product;

/// Thin wrapper around the catalog REST endpoint
#[derive(Clone)]
pub struct CatalogClient {
    http: Client,
    url: String,
}

impl CatalogClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn get_products(&self) -> Result<Vec<Product>> {
        let response = self.http.get(&self.url).send().await?;
        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), url = %self.url, "Catalog returned an error status");
            anyhow::bail!("Failed to fetch products");
        }
        Ok(response.json::<Vec<Product>>().await?)
    }

    /// Fetch the whole catalog in the order the server returns it
    pub async fn fetch_products(&self) -> Result<Vec<Product>, GalleryError> {
        crate::log_fetch_request!("fetch_products", url = %self.url);
        let result = self.get_products().await;
        log_fetch_result!("fetch_products", result);
        result.map_err(|e| GalleryError::CatalogFetchFailed(e.to_string()))
    }
}
