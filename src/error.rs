//! Failure kinds the gallery distinguishes

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    /// The typed code did not match the current challenge
    #[error("Incorrect CAPTCHA. Please try again.")]
    ChallengeFailed,
    /// Transport error, non-success status or unreadable body from the catalog
    #[error("{0}")]
    CatalogFetchFailed(String),
    /// OS entropy could not be read while issuing a challenge
    #[error("Random source unavailable: {0}")]
    RandomSource(String),
}
