//! Document source trait definition
//!
//! This module defines the `DocumentSource` trait that abstracts where API
//! responses come from. A capture folder, a live cloud client, or a test
//! fixture can all feed the same export run.

pub mod directory;

use crate::domain::errors::SourceError;
use async_trait::async_trait;
use serde_json::Value;

/// Trait for API response providers
///
/// Implementations return documents in a stable order. A failure to fetch
/// one document must not poison the source; the run skips that document and
/// asks for the next one.
///
/// # Example
///
/// ```no_run
/// use solix_export::adapters::{DirectorySource, DocumentSource};
///
/// # async fn example() -> solix_export::domain::Result<()> {
/// let source = DirectorySource::new("./captures");
/// let names = source.list().await?;
/// if let Some(first) = names.first() {
///     let document = source.fetch(first).await?;
///     println!("{}", serde_json::to_string_pretty(&document)?);
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Human-readable description of the source, used in logs
    fn describe(&self) -> String;

    /// List the names of all available documents, in export order
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Unavailable`] if the source cannot be listed.
    async fn list(&self) -> Result<Vec<String>, SourceError>;

    /// Fetch one document by name
    ///
    /// # Errors
    ///
    /// Returns an error if the document is missing, unreadable, or not JSON.
    async fn fetch(&self, name: &str) -> Result<Value, SourceError>;
}
