//! Audit logger for anonymized exports

use crate::anonymization::engine::AppliedSubstitution;
use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Audit log entry
#[derive(Debug, Serialize)]
struct AuditLogEntry {
    timestamp: String,
    document: String,
    output_file: String,
    substitutions_count: usize,
    substitutions: Vec<AuditSubstitution>,
}

/// Audit substitution entry (with hashed original)
#[derive(Debug, Serialize)]
struct AuditSubstitution {
    key: String,
    /// SHA-256 hash of original value (never log plaintext PII)
    value_hash: String,
}

/// Audit logger for anonymized exports
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
    enabled: bool,
}

impl AuditLogger {
    /// Create a new audit logger
    pub fn new(log_path: PathBuf, json_format: bool, enabled: bool) -> Result<Self> {
        if enabled {
            if let Some(parent) = log_path.parent() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create audit log directory: {}", parent.display())
                })?;
            }
        }

        Ok(Self {
            log_path,
            json_format,
            enabled,
        })
    }

    /// Log the substitutions applied to one exported document
    pub fn log_document(
        &self,
        document: &str,
        output_file: &str,
        applied: &[AppliedSubstitution],
    ) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let entry = AuditLogEntry {
            timestamp: Utc::now().to_rfc3339(),
            document: document.to_string(),
            output_file: output_file.to_string(),
            substitutions_count: applied.len(),
            substitutions: applied
                .iter()
                .map(|a| AuditSubstitution {
                    key: a.key.clone(),
                    value_hash: hash_value(&a.original),
                })
                .collect(),
        };

        self.write_entry(&entry)
    }

    /// Write an audit entry to the log file
    fn write_entry(&self, entry: &AuditLogEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to open audit log: {}", self.log_path.display()))?;

        if self.json_format {
            let json_line =
                serde_json::to_string(entry).context("Failed to serialize audit entry")?;
            writeln!(file, "{json_line}").context("Failed to write audit entry")?;
        } else {
            writeln!(
                file,
                "[{}] Output: {} | Substitutions: {}",
                entry.timestamp, entry.output_file, entry.substitutions_count
            )
            .context("Failed to write audit entry")?;
        }

        Ok(())
    }
}

/// Hash a sensitive value using SHA-256
fn hash_value(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let result = hasher.finalize();
    format!("{result:x}")
}
