//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Configurable log levels
//! - Console output for interactive runs
//! - Local JSON file logging with rotation
//!
//! Log records never carry original identifiers. Documents are named by
//! their redacted output name and substitutions are reported as counts.
//!
//! # Example
//!
//! ```no_run
//! use solix_export::logging::init_logging;
//! use solix_export::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Export started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the completion of an export run
///
/// # Example
///
/// ```no_run
/// use solix_export::log_export_complete;
/// use std::time::Duration;
///
/// let written = 12;
/// let duration = Duration::from_millis(250);
/// log_export_complete!(written, duration);
/// ```
#[macro_export]
macro_rules! log_export_complete {
    ($count:expr, $duration:expr) => {
        tracing::info!(
            count = $count,
            duration_ms = $duration.as_millis(),
            "Export completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use solix_export::log_error_with_context;
/// use solix_export::domain::SolixError;
///
/// let error = SolixError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}

/// Log per-document progress
///
/// # Example
///
/// ```no_run
/// use solix_export::log_document_progress;
///
/// log_document_progress!(3, 12);
/// ```
#[macro_export]
macro_rules! log_document_progress {
    ($current:expr, $total:expr) => {
        tracing::debug!(
            current = $current,
            total = $total,
            progress_pct = ($current as f64 / $total as f64 * 100.0),
            "Processing document"
        );
    };
}
