//! Result type alias for the exporter
//!
//! This module provides a convenient Result type alias that uses
//! [`SolixError`] as the error type.

use super::errors::SolixError;

/// Result type alias for exporter operations
///
/// # Examples
///
/// ```
/// use solix_export::domain::result::Result;
/// use solix_export::domain::errors::SolixError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(SolixError::Export("Write failed".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, SolixError>;
