//! Configuration management.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! The exporter reads a TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `SOLIX_<SECTION>_<KEY>` environment overrides
//! - Default values for optional settings
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use solix_export::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("solix-export.toml")?;
//! println!("Exporting {} -> {}", config.export.input_dir.display(), config.export.output_dir.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Application settings (log level)
//! - [`ExportConfig`] - Input/output folders, anonymization switches, report path
//! - [`AuditConfig`](crate::anonymization::AuditConfig) - Hashed audit log
//! - [`LoggingConfig`] - Local file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [export]
//! input_dir = "./captures"
//! output_dir = "${HOME}/solix-exports/my-account"
//! anonymize = true
//! skip_anonymize = ["api_sites.json", "api_devices.json"]
//!
//! [audit]
//! enabled = true
//! log_path = "./audit/export.log"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{ApplicationConfig, ExportConfig, LoggingConfig, SolixConfig};
