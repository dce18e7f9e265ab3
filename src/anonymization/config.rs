//! Anonymization audit configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Audit logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Enable audit logging
    #[serde(default = "default_audit_enabled")]
    pub enabled: bool,

    /// Audit log file path
    #[serde(default = "default_audit_log_path")]
    pub log_path: PathBuf,

    /// Use JSON format for audit logs
    #[serde(default = "default_audit_json_format")]
    pub json_format: bool,
}

fn default_audit_enabled() -> bool {
    true
}

fn default_audit_log_path() -> PathBuf {
    PathBuf::from("./audit/export.log")
}

fn default_audit_json_format() -> bool {
    true
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: default_audit_enabled(),
            log_path: default_audit_log_path(),
            json_format: default_audit_json_format(),
        }
    }
}

impl AuditConfig {
    /// Validate audit configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.enabled && self.log_path.as_os_str().is_empty() {
            return Err("audit.log_path cannot be empty when audit is enabled".to_string());
        }
        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("SOLIX_AUDIT_ENABLED") {
            self.enabled = val.parse().context("Invalid SOLIX_AUDIT_ENABLED value")?;
        }

        if let Ok(val) = std::env::var("SOLIX_AUDIT_LOG_PATH") {
            self.log_path = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("SOLIX_AUDIT_JSON_FORMAT") {
            self.json_format = val
                .parse()
                .context("Invalid SOLIX_AUDIT_JSON_FORMAT value")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AuditConfig::default();
        assert!(config.enabled);
        assert!(config.json_format);
        assert_eq!(config.log_path, PathBuf::from("./audit/export.log"));
    }

    #[test]
    fn test_empty_log_path_rejected() {
        let config = AuditConfig {
            log_path: PathBuf::new(),
            ..AuditConfig::default()
        };
        assert!(config.validate().is_err());

        let disabled = AuditConfig {
            enabled: false,
            log_path: PathBuf::new(),
            ..AuditConfig::default()
        };
        assert!(disabled.validate().is_ok());
    }
}
