//! Document sources for the exporter.
//!
//! The export run obtains raw API responses through the [`DocumentSource`]
//! trait. The shipped implementation reads captured responses from a folder:
//!
//! - [`DirectorySource`] - one `*.json` file per API response
//!
//! # Example
//!
//! ```rust,no_run
//! use solix_export::adapters::{DirectorySource, DocumentSource};
//!
//! # async fn example() -> solix_export::domain::Result<()> {
//! let source = DirectorySource::new("./captures");
//! for name in source.list().await? {
//!     let document = source.fetch(&name).await?;
//!     println!("{name}: {}", document.is_object());
//! }
//! # Ok(())
//! # }
//! ```

pub mod source;

pub use source::directory::DirectorySource;
pub use source::DocumentSource;
