//! Catalog loading, attached to the unverified → verified edge of the gate

use tokio::task::JoinHandle;

use crate::error::GalleryError;
use crate::model::Verification;
use super::AppController;

impl AppController {
    /// Submit the typed code; a fresh verification starts the catalog load
    pub async fn submit_captcha(&self) -> Option<JoinHandle<()>> {
        let model = self.model.lock().await;
        match model.submit_captcha().await {
            Ok(Verification::JustVerified) => {
                drop(model);
                Some(self.spawn_catalog_load())
            }
            Ok(Verification::AlreadyVerified) => None,
            Err(e) => {
                tracing::debug!(error = %e, "CAPTCHA rejected, new challenge issued");
                None
            }
        }
    }

    pub fn spawn_catalog_load(&self) -> JoinHandle<()> {
        let controller = self.clone();
        tokio::spawn(async move {
            controller.load_catalog().await;
        })
    }

    /// Fetch the catalog once; later calls are ignored
    pub async fn load_catalog(&self) {
        let model = self.model.lock().await;
        if !model.begin_catalog_load().await {
            tracing::debug!("Catalog load already started, ignoring");
            return;
        }

        let Some(catalog) = model.get_catalog_client() else {
            tracing::error!("No catalog client configured");
            model
                .finish_catalog_load(Err(GalleryError::CatalogFetchFailed(
                    "No catalog client configured".to_string(),
                )))
                .await;
            return;
        };
        drop(model);

        tracing::info!(url = catalog.url(), "Loading product catalog");
        let result = catalog.fetch_products().await;

        let model = self.model.lock().await;
        model.finish_catalog_load(result).await;
    }
}
