//! Domain types shared across the exporter.
//!
//! The domain layer provides:
//! - **Error types** ([`SolixError`], [`SourceError`])
//! - **Result type alias** ([`Result`])
//! - **Error context** ([`context::ResultExt`])
//!
//! All fallible library operations return [`Result<T, SolixError>`]:
//!
//! ```rust
//! use solix_export::domain::{Result, SolixError};
//!
//! fn example() -> Result<()> {
//!     Err(SolixError::Export("disk full".to_string()))
//! }
//! ```

pub mod context;
pub mod errors;
pub mod result;

pub use errors::{SolixError, SourceError};
pub use result::Result;
