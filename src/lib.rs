// Solix Export - Anonymizing exporter for Solix cloud API responses
// Copyright (c) 2025 Solix Export Contributors
// Licensed under the MIT License

//! # Solix Export - anonymized API response exports
//!
//! Solix Export takes raw JSON responses captured from the Solix cloud API and
//! writes them into an export folder with every personal identifier replaced
//! by a random value of the same shape, so the files can be shared for
//! debugging and device support.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Sanitizing** serials, site/trace IDs, Bluetooth addresses and wifi names
//! - **Keeping** consistency: one original always maps to one substitute per run
//! - **Exporting** each response as indented JSON under a redacted file name
//! - **Reporting** the substitution mapping and a hashed audit trail
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Export run coordination and per-document export
//! - [`anonymization`] - Substitution policies, context, report and audit
//! - [`adapters`] - Document sources (capture folder)
//! - [`domain`] - Error types
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use solix_export::adapters::DirectorySource;
//! use solix_export::config::load_config;
//! use solix_export::core::export::ExportCoordinator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("solix-export.toml")?;
//!     let source = DirectorySource::new(&config.export.input_dir);
//!     let (_tx, shutdown_rx) = tokio::sync::watch::channel(false);
//!
//!     let coordinator = ExportCoordinator::new(&config, Box::new(source), shutdown_rx)?;
//!     let (summary, report) = coordinator.run().await?;
//!
//!     println!("Exported {} documents, {} substitutions", summary.written, report.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Sanitizing a single document
//!
//! ```rust
//! use solix_export::anonymization::AnonymizationContext;
//! use serde_json::json;
//!
//! let mut context = AnonymizationContext::new(true);
//! let mut doc = json!({
//!     "device_sn": "9JVB42LJK8J0P5RY",
//!     "device_name": "Solarbank 2 E1600 Pro",
//!     "devices": [{"device_sn": "9JVB42LJK8J0P5RY"}]
//! });
//! context.sanitize(&mut doc);
//!
//! assert_ne!(doc["device_sn"], "9JVB42LJK8J0P5RY");
//! assert_eq!(doc["device_sn"], doc["devices"][0]["device_sn"]);
//! assert_eq!(doc["device_name"], "Solarbank 2 E1600 Pro");
//! ```
//!
//! ## Error Handling
//!
//! The library uses [`domain::SolixError`] for all errors; the CLI wraps them
//! with `anyhow`.

pub mod adapters;
pub mod anonymization;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
