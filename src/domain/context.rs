//! Error context extension trait
//!
//! Adds `.context()` / `.with_context()` to results whose error converts into
//! [`SolixError`], so library code can annotate failures without switching to
//! `anyhow`.
//!
//! # Examples
//!
//! ```rust
//! use solix_export::domain::Result;
//! use solix_export::domain::context::ResultExt;
//!
//! fn read_capture(path: &str) -> Result<String> {
//!     std::fs::read_to_string(path).with_context(|| format!("Failed to read capture {path}"))
//! }
//! ```

use crate::domain::errors::SolixError;
use crate::domain::result::Result;

/// Extension trait for adding context to `Result` types
pub trait ResultExt<T> {
    /// Add context to an error
    ///
    /// The context is evaluated eagerly; prefer `.with_context()` when it is
    /// built with `format!`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: std::fmt::Display + Send + Sync + 'static;

    /// Add context to an error using a closure (lazy evaluation)
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: std::fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<SolixError>,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: std::fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| wrap(e.into(), context))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: std::fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|e| wrap(e.into(), f()))
    }
}

/// Keep the variant so callers can still match on the error kind
fn wrap(error: SolixError, context: impl std::fmt::Display) -> SolixError {
    match error {
        SolixError::Configuration(m) => SolixError::Configuration(format!("{context}: {m}")),
        SolixError::Export(m) => SolixError::Export(format!("{context}: {m}")),
        SolixError::Serialization(m) => SolixError::Serialization(format!("{context}: {m}")),
        SolixError::Io(m) => SolixError::Io(format!("{context}: {m}")),
        SolixError::Audit(m) => SolixError::Audit(format!("{context}: {m}")),
        other => SolixError::Other(format!("{context}: {other}")),
    }
}
