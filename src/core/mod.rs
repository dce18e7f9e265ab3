//! Core export logic.
//!
//! # Modules
//!
//! - [`export`] - Document export, run coordination, and summary
//!
//! # Export Workflow
//!
//! 1. **List**: Ask the document source for the available API responses
//! 2. **Fetch**: Obtain each response in order
//! 3. **Sanitize**: Replace identifiers through the run's anonymization context
//! 4. **Write**: Store indented JSON under a redacted file name
//! 5. **Audit**: Append a hashed audit entry per anonymized document
//! 6. **Report**: Return the summary and the substitution report
//!
//! # Example
//!
//! ```rust,no_run
//! use solix_export::adapters::DirectorySource;
//! use solix_export::config::load_config;
//! use solix_export::core::export::ExportCoordinator;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("solix-export.toml")?;
//! let source = DirectorySource::new(&config.export.input_dir);
//!
//! let (_shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
//! let coordinator = ExportCoordinator::new(&config, Box::new(source), shutdown_rx)?;
//!
//! let (summary, report) = coordinator.run().await?;
//! println!("Written: {}", summary.written);
//! println!("Substitutions: {}", report.len());
//! # Ok(())
//! # }
//! ```

pub mod export;
