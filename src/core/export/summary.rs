//! Export summary and reporting
//!
//! This module defines structures for tracking and reporting export results.

use std::time::Duration;

/// Summary of an export run
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Number of documents offered by the source
    pub total_documents: usize,

    /// Number of files written
    pub written: usize,

    /// Number of files written with anonymization applied
    pub anonymized: usize,

    /// Number of empty documents skipped
    pub skipped_empty: usize,

    /// Number of documents whose file could not be written
    pub failed_writes: usize,

    /// Number of documents the source could not provide
    pub fetch_errors: usize,

    /// Whether the run stopped early on a shutdown signal
    pub interrupted: bool,

    /// Duration of the run
    pub duration: Duration,

    /// Errors encountered during the run
    pub errors: Vec<ExportError>,
}

impl ExportSummary {
    /// Create a new empty export summary
    pub fn new() -> Self {
        Self {
            total_documents: 0,
            written: 0,
            anonymized: 0,
            skipped_empty: 0,
            failed_writes: 0,
            fetch_errors: 0,
            interrupted: false,
            duration: Duration::from_secs(0),
            errors: Vec::new(),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Add an error
    pub fn add_error(&mut self, error: ExportError) {
        self.errors.push(error);
    }

    /// Number of documents that were handled, whatever the outcome
    pub fn processed(&self) -> usize {
        self.written + self.skipped_empty + self.failed_writes + self.fetch_errors
    }

    /// Check if the run was successful (no failures)
    pub fn is_successful(&self) -> bool {
        self.failed_writes == 0 && self.fetch_errors == 0 && self.errors.is_empty()
    }

    /// Get success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        let attempted = self.processed() - self.skipped_empty;
        if attempted == 0 {
            return 100.0;
        }
        (self.written as f64 / attempted as f64) * 100.0
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            total_documents = self.total_documents,
            written = self.written,
            anonymized = self.anonymized,
            skipped_empty = self.skipped_empty,
            failed_writes = self.failed_writes,
            fetch_errors = self.fetch_errors,
            interrupted = self.interrupted,
            duration_ms = self.duration.as_millis(),
            success_rate = format!("{:.2}%", self.success_rate()),
            "Export run finished"
        );

        if !self.errors.is_empty() {
            tracing::warn!(error_count = self.errors.len(), "Export completed with errors");
            for error in &self.errors {
                tracing::warn!(
                    error_type = ?error.error_type,
                    message = %error.message,
                    "Export error"
                );
            }
        }
    }
}

impl Default for ExportSummary {
    fn default() -> Self {
        Self::new()
    }
}

/// Type of export error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportErrorType {
    /// The source could not provide a document
    Source,
    /// Writing the export file failed
    Write,
    /// Appending to the audit log failed
    Audit,
}

/// Export error with context
#[derive(Debug, Clone)]
pub struct ExportError {
    /// Type of error
    pub error_type: ExportErrorType,

    /// Error message
    pub message: String,

    /// Optional context (e.g., redacted document name)
    pub context: Option<String>,
}

impl ExportError {
    /// Create a new export error
    pub fn new(error_type: ExportErrorType, message: String) -> Self {
        Self {
            error_type,
            message,
            context: None,
        }
    }

    /// Add context to the error
    pub fn with_context(mut self, context: String) -> Self {
        self.context = Some(context);
        self
    }
}
