//! Configuration schema types
//!
//! This module defines the configuration structure mapped from the TOML file.

use crate::anonymization::config::AuditConfig;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// Main exporter configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolixConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Export settings
    pub export: ExportConfig,

    /// Audit log settings
    #[serde(default)]
    pub audit: AuditConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SolixConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.export.validate()?;
        self.audit.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Export run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory holding the captured API responses (`*.json`)
    pub input_dir: PathBuf,

    /// Export folder receiving the sanitized documents
    pub output_dir: PathBuf,

    /// Randomize serials, IDs and other personal values
    #[serde(default = "default_true")]
    pub anonymize: bool,

    /// Documents written as-is even when anonymization is on
    #[serde(default)]
    pub skip_anonymize: Vec<String>,

    /// Documents whose mapping keys are renamed through the substitution table
    #[serde(default)]
    pub anonymize_keys: Vec<String>,

    /// Where to write the original → substitute mapping (JSON)
    #[serde(default)]
    pub report_path: Option<PathBuf>,
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.input_dir.as_os_str().is_empty() {
            return Err("export.input_dir cannot be empty".to_string());
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err("export.output_dir cannot be empty".to_string());
        }
        let output_dir = normalize_path(&self.output_dir);
        if normalize_path(&self.input_dir) == output_dir {
            return Err("export.output_dir must differ from export.input_dir".to_string());
        }
        if let Some(ref report_path) = self.report_path {
            if normalize_path(report_path).starts_with(&output_dir) {
                return Err(
                    "export.report_path must not be inside export.output_dir (it lists original values)"
                        .to_string(),
                );
            }
        }
        Ok(())
    }

    /// Check whether the named document is exported without anonymization
    pub fn skips_anonymize(&self, document: &str) -> bool {
        matches_document(&self.skip_anonymize, document)
    }

    /// Check whether the named document gets its mapping keys renamed
    pub fn renames_keys(&self, document: &str) -> bool {
        matches_document(&self.anonymize_keys, document)
    }
}

/// Entries may name the file (`api_sites.json`) or its stem (`api_sites`)
fn matches_document(entries: &[String], document: &str) -> bool {
    let stem = Path::new(document)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(document);
    entries.iter().any(|e| e == document || e == stem)
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

/// Absolute form of `path` with `.` and `..` folded away, without touching the filesystem
fn normalize_path(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
