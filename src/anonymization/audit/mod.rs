//! Audit logging module
//!
//! Provides structured audit logging for anonymized exports.

pub mod logger;

pub use logger::AuditLogger;
