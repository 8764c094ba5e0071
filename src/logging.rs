//! Tracing setup for the gallery
//!
//! The TUI owns the terminal, so events go to a daily log file instead of
//! stdout. `RUST_LOG` overrides [`DEFAULT_FILTER`].

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LOG_FILE_PREFIX;

/// Gallery events at debug, HTTP client at info, everything else at warn
pub const DEFAULT_FILTER: &str = "product_gallery=debug,reqwest=info,warn";

fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber writing to `<log_dir>/product-gallery.<date>.log`.
///
/// Buffered lines are flushed when the returned guard drops, so the caller
/// holds it until shutdown.
pub fn init_logging(log_dir: &Path) -> anyhow::Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .build(log_dir)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(log_filter())
        .with(file_layer)
        .try_init()?;

    tracing::info!(dir = %log_dir.display(), "Logging initialized");
    Ok(guard)
}

/// Log the outcome of a catalog request, with the item count on success
#[macro_export]
macro_rules! log_fetch_result {
    ($operation:expr, $result:expr) => {
        match &$result {
            Ok(items) => tracing::info!(operation = $operation, count = items.len(), "Catalog request successful"),
            Err(e) => tracing::error!(operation = $operation, error = %e, "Catalog request failed"),
        }
    };
}

#[macro_export]
macro_rules! log_fetch_request {
    ($operation:expr, $($field:tt)*) => {
        tracing::debug!(operation = $operation, $($field)*, "Catalog request started");
    };
}
