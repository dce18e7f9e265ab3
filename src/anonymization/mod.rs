//! Anonymization of exported API responses
//!
//! This module replaces personal identifiers found in raw cloud API responses
//! (device serials, site and trace IDs, Bluetooth addresses, wifi names, and
//! schedule blobs that embed them) with random substitutes that keep the
//! original format.
//!
//! # Architecture
//!
//! - **Detection**: fixed sensitive-key patterns ([`detector`])
//! - **Policies**: ordered key → policy rules and random generators ([`anonymizer`])
//! - **Context**: run-scoped substitution table and traversal ([`engine`])
//! - **Reporting**: substitution report and hashed audit log ([`report`], [`audit`])
//!
//! # Usage
//!
//! ```rust
//! use solix_export::anonymization::AnonymizationContext;
//! use serde_json::json;
//!
//! let mut context = AnonymizationContext::new(true);
//! let mut doc = json!({"site_id": "26e56751-fe51-40a6-8fb0-b9ce5d6c8700"});
//! context.sanitize(&mut doc);
//!
//! let segments: Vec<usize> = doc["site_id"].as_str().unwrap().split('-').map(str::len).collect();
//! assert_eq!(segments, vec![8, 4, 4, 4, 12]);
//! ```

pub mod anonymizer;
pub mod audit;
pub mod config;
pub mod detector;
pub mod engine;
pub mod report;
pub mod table;
pub mod visitor;

// Re-export main types
pub use anonymizer::{policy_for_key, SubstitutionPolicy};
pub use config::AuditConfig;
pub use engine::{AnonymizationContext, AppliedSubstitution};
pub use report::SubstitutionReport;
pub use table::SubstitutionTable;
