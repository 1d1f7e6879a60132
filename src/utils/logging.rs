//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the FormDesk application.

use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::LoggingConfig;
use crate::utils::errors::{FormDeskError, Result};

/// Initialize logging based on configuration.
///
/// The returned guard flushes the file writer on drop and must be held for
/// the lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| FormDeskError::Config(format!("Invalid log filter: {}", e)))?;

    let stdout_layer = if config.json {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().with_target(false).compact().boxed()
    };

    let (file_layer, guard) = match config.directory.as_deref() {
        Some(directory) if !directory.is_empty() => {
            let file_appender = tracing_appender::rolling::daily(directory, &config.file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking)
                .boxed();
            (Some(layer), Some(guard))
        }
        _ => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| FormDeskError::Config(format!("Logging already initialized: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log the result of validating a form submission
pub fn log_submission(form: &str, valid: bool, error_count: usize) {
    if valid {
        info!(form = form, "Form submission accepted");
    } else {
        info!(
            form = form,
            error_count = error_count,
            "Form submission rejected"
        );
    }
}

/// Log a stored upload
pub fn log_upload_stored(form: &str, file_name: &str, size_bytes: usize) {
    info!(
        form = form,
        file_name = file_name,
        size_bytes = size_bytes,
        "Upload stored"
    );
}

/// Log a rejected upload
pub fn log_upload_rejected(form: &str, reason: &str) {
    debug!(form = form, reason = reason, "Upload rejected");
}

/// Log a client hitting the submission rate limit
pub fn log_rate_limited(client: &str, path: &str) {
    warn!(client = client, path = path, "Rate limit exceeded");
}
