//! Export coordinator - main orchestrator for the export run
//!
//! This module drives one run: it lists the source, exports each document
//! through a single anonymization context, appends audit entries, and hands
//! back the summary together with the substitution report.

use crate::adapters::DocumentSource;
use crate::anonymization::audit::AuditLogger;
use crate::anonymization::{AnonymizationContext, SubstitutionReport};
use crate::config::{ExportConfig, SolixConfig};
use crate::core::export::exporter::{DocumentExporter, ExportOptions, ExportOutcome};
use crate::core::export::summary::{ExportError, ExportErrorType, ExportSummary};
use crate::domain::context::ResultExt;
use crate::domain::{Result, SolixError};
use std::time::Instant;
use tokio::sync::watch;

/// Export coordinator
pub struct ExportCoordinator {
    config: ExportConfig,
    source: Box<dyn DocumentSource>,
    exporter: DocumentExporter,
    context: AnonymizationContext,
    audit_logger: AuditLogger,
    /// Shutdown signal receiver for graceful shutdown
    shutdown_signal: watch::Receiver<bool>,
}

impl ExportCoordinator {
    /// Create a new export coordinator
    ///
    /// # Errors
    ///
    /// Returns an error if the audit log cannot be prepared.
    pub fn new(
        config: &SolixConfig,
        source: Box<dyn DocumentSource>,
        shutdown_signal: watch::Receiver<bool>,
    ) -> Result<Self> {
        let audit_logger = AuditLogger::new(
            config.audit.log_path.clone(),
            config.audit.json_format,
            config.audit.enabled && config.export.anonymize,
        )
        .map_err(|e| SolixError::Audit(format!("{e:#}")))?;

        Ok(Self {
            exporter: DocumentExporter::new(&config.export.output_dir),
            context: AnonymizationContext::new(config.export.anonymize),
            config: config.export.clone(),
            source,
            audit_logger,
            shutdown_signal,
        })
    }

    /// Replace the anonymization context, e.g. with a seeded one
    pub fn with_context(mut self, context: AnonymizationContext) -> Self {
        self.context = context;
        self
    }

    /// Check if shutdown signal has been received
    fn is_shutdown_requested(&self) -> bool {
        *self.shutdown_signal.borrow()
    }

    /// Execute the export run
    ///
    /// Documents are exported in source order. Fetch and write failures are
    /// counted and the run moves on; a shutdown signal stops the run between
    /// documents.
    ///
    /// # Errors
    ///
    /// Returns an error if the export folder cannot be created or the source
    /// cannot be listed.
    pub async fn run(mut self) -> Result<(ExportSummary, SubstitutionReport)> {
        let start_time = Instant::now();
        let mut summary = ExportSummary::new();

        tracing::info!(
            source = %self.source.describe(),
            anonymize = self.context.is_enabled(),
            "Starting export run"
        );

        tokio::fs::create_dir_all(self.exporter.output_dir())
            .await
            .with_context(|| {
                format!(
                    "Failed to create export folder {}",
                    self.exporter.output_dir().display()
                )
            })?;

        let names = self.source.list().await?;
        summary.total_documents = names.len();

        for (index, name) in names.iter().enumerate() {
            if self.is_shutdown_requested() {
                tracing::warn!(
                    remaining = names.len() - index,
                    "Shutdown requested, stopping export run"
                );
                summary.interrupted = true;
                break;
            }

            crate::log_document_progress!(index + 1, names.len());
            self.export_one(name, &mut summary).await;
        }

        let report = SubstitutionReport::from_table(self.context.table());
        let summary = summary.with_duration(start_time.elapsed());
        summary.log_summary();
        crate::log_export_complete!(summary.written, summary.duration);

        Ok((summary, report))
    }

    async fn export_one(&mut self, name: &str, summary: &mut ExportSummary) {
        let document = match self.source.fetch(name).await {
            Ok(document) => document,
            Err(e) => {
                // Source errors carry the file name, which may embed an ID
                let redacted = self.context.redact_file_name(name);
                let message = e.to_string().replace(name, &redacted);
                tracing::error!(document = %redacted, error = %message, "Failed to fetch document");
                summary.fetch_errors += 1;
                summary.add_error(
                    ExportError::new(ExportErrorType::Source, message).with_context(redacted),
                );
                return;
            }
        };

        let options = ExportOptions {
            skip_anonymize: self.config.skips_anonymize(name),
            anonymize_keys: self.config.renames_keys(name),
        };

        match self
            .exporter
            .export(&mut self.context, name, document, options)
            .await
        {
            ExportOutcome::Written {
                output_file,
                applied,
            } => {
                summary.written += 1;
                if !self.context.is_enabled() || options.skip_anonymize {
                    return;
                }
                summary.anonymized += 1;

                let document_name = self.context.redact_file_name(name);
                if let Err(e) = self
                    .audit_logger
                    .log_document(&document_name, &output_file, &applied)
                {
                    tracing::error!(file = %output_file, error = %e, "Failed to write audit entry");
                    summary.add_error(
                        ExportError::new(ExportErrorType::Audit, format!("{e:#}"))
                            .with_context(output_file),
                    );
                }
            }
            ExportOutcome::SkippedEmpty => summary.skipped_empty += 1,
            ExportOutcome::Failed { output_file, error } => {
                summary.failed_writes += 1;
                summary.add_error(
                    ExportError::new(ExportErrorType::Write, error).with_context(output_file),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::SourceError;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use tempfile::TempDir;

    struct StaticSource {
        documents: Vec<(String, Option<Value>)>,
    }

    #[async_trait]
    impl DocumentSource for StaticSource {
        fn describe(&self) -> String {
            "static".to_string()
        }

        async fn list(&self) -> std::result::Result<Vec<String>, SourceError> {
            Ok(self.documents.iter().map(|(n, _)| n.clone()).collect())
        }

        async fn fetch(&self, name: &str) -> std::result::Result<Value, SourceError> {
            self.documents
                .iter()
                .find(|(n, _)| n == name)
                .and_then(|(_, d)| d.clone())
                .ok_or_else(|| SourceError::NotFound(name.to_string()))
        }
    }

    fn config(dir: &TempDir) -> SolixConfig {
        toml::from_str(&format!(
            r#"
[export]
input_dir = "{input}"
output_dir = "{output}"
skip_anonymize = ["api_sites.json"]

[audit]
log_path = "{audit}"
"#,
            input = dir.path().join("in").display(),
            output = dir.path().join("out").display(),
            audit = dir.path().join("audit/export.log").display(),
        ))
        .unwrap()
    }

    #[tokio::test]
    async fn test_run_counts_outcomes() {
        let dir = TempDir::new().unwrap();
        let source = StaticSource {
            documents: vec![
                ("api_sites.json".to_string(), Some(json!({"site_id": "abc-123"}))),
                ("bind_devices.json".to_string(), Some(json!({"device_sn": "ABC123"}))),
                ("empty.json".to_string(), Some(json!([]))),
                ("missing.json".to_string(), None),
            ],
        };
        let (_tx, rx) = watch::channel(false);

        let coordinator = ExportCoordinator::new(&config(&dir), Box::new(source), rx)
            .unwrap()
            .with_context(AnonymizationContext::with_seed(true, 3));
        let (summary, report) = coordinator.run().await.unwrap();

        assert_eq!(summary.total_documents, 4);
        assert_eq!(summary.written, 2);
        assert_eq!(summary.anonymized, 1);
        assert_eq!(summary.skipped_empty, 1);
        assert_eq!(summary.fetch_errors, 1);
        assert!(!summary.is_successful());
        assert_eq!(report.len(), 1);

        let skipped = std::fs::read_to_string(dir.path().join("out/api_sites.json")).unwrap();
        assert!(skipped.contains("abc-123"));

        let audit = std::fs::read_to_string(dir.path().join("audit/export.log")).unwrap();
        assert_eq!(audit.lines().count(), 1);
        assert!(!audit.contains("ABC123"));
    }

    #[tokio::test]
    async fn test_run_stops_on_shutdown() {
        let dir = TempDir::new().unwrap();
        let source = StaticSource {
            documents: vec![("a.json".to_string(), Some(json!({"a": 1})))],
        };
        let (tx, rx) = watch::channel(false);
        tx.send(true).unwrap();

        let coordinator = ExportCoordinator::new(&config(&dir), Box::new(source), rx).unwrap();
        let (summary, _) = coordinator.run().await.unwrap();

        assert!(summary.interrupted);
        assert_eq!(summary.written, 0);
        assert!(dir.path().join("out").exists());
    }
}
