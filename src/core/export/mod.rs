//! Export orchestration
//!
//! This module provides the export logic, including:
//! - Single-document sanitizing and writing
//! - Export run coordination
//! - Summary and reporting

pub mod coordinator;
pub mod exporter;
pub mod summary;

pub use coordinator::ExportCoordinator;
pub use exporter::{DocumentExporter, ExportOptions, ExportOutcome};
pub use summary::{ExportError, ExportErrorType, ExportSummary};
