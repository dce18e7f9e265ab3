//! Single-document export
//!
//! Sanitizes one API response with the run's anonymization context and writes
//! it as indented JSON into the export folder.

use crate::anonymization::{AnonymizationContext, AppliedSubstitution};
use crate::domain::context::ResultExt;
use crate::domain::Result;
use serde_json::Value;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Per-document switches chosen from the configured file-name lists
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportOptions {
    /// Write the document as-is even when anonymization is on
    pub skip_anonymize: bool,

    /// Rename mapping keys that are known originals
    pub anonymize_keys: bool,
}

/// Result of exporting one document
#[derive(Debug)]
pub enum ExportOutcome {
    /// The document was written
    Written {
        /// File name inside the export folder
        output_file: String,
        /// Substitutions made while sanitizing this document
        applied: Vec<AppliedSubstitution>,
    },

    /// The document was empty and nothing was written
    SkippedEmpty,

    /// Serializing or writing failed; the run continues
    Failed {
        /// File name that could not be written
        output_file: String,
        /// Failure description
        error: String,
    },
}

impl ExportOutcome {
    /// Check whether a file was written
    pub fn is_written(&self) -> bool {
        matches!(self, ExportOutcome::Written { .. })
    }
}

/// Writes sanitized documents into one export folder
///
/// Output names written during the run are remembered; a second document
/// resolving to the same name fails instead of replacing the first.
#[derive(Debug, Clone)]
pub struct DocumentExporter {
    output_dir: PathBuf,
    written: HashSet<String>,
}

impl DocumentExporter {
    /// Create an exporter writing into `output_dir`
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            written: HashSet::new(),
        }
    }

    /// Export folder
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Export one document under `name`
    ///
    /// The document is sanitized first, so the output file name can embed the
    /// substitutes of identifiers it contains instead of the originals.
    pub async fn export(
        &mut self,
        context: &mut AnonymizationContext,
        name: &str,
        mut document: Value,
        options: ExportOptions,
    ) -> ExportOutcome {
        if is_empty_document(&document) {
            tracing::warn!(document = %context.redact_file_name(name), "No data received, skipping export");
            return ExportOutcome::SkippedEmpty;
        }

        let applied = prepare(context, &mut document, options);
        let output_file = context.redact_file_name(name);
        if self.written.contains(&output_file) {
            tracing::error!(file = %output_file, "Output name already written in this run");
            return ExportOutcome::Failed {
                error: format!("{output_file} was already written by another document"),
                output_file,
            };
        }
        let path = self.output_dir.join(&output_file);

        match write_document(&path, &document).await {
            Ok(()) => {
                self.written.insert(output_file.clone());
                tracing::info!(
                    file = %output_file,
                    substitutions = applied.len(),
                    anonymized = context.is_enabled() && !options.skip_anonymize,
                    "Exported document"
                );
                ExportOutcome::Written {
                    output_file,
                    applied,
                }
            }
            Err(e) => {
                tracing::error!(file = %output_file, error = %e, "Failed to write export file");
                ExportOutcome::Failed {
                    output_file,
                    error: e.to_string(),
                }
            }
        }
    }
}

/// Documents without content are not exported
pub fn is_empty_document(document: &Value) -> bool {
    match document {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Sanitize and optionally rename keys according to `options`
pub fn prepare(
    context: &mut AnonymizationContext,
    document: &mut Value,
    options: ExportOptions,
) -> Vec<AppliedSubstitution> {
    if !context.is_enabled() || options.skip_anonymize {
        return Vec::new();
    }

    let applied = context.sanitize_recorded(document);
    if options.anonymize_keys {
        context.rename_keys(document);
    }
    applied
}

/// Two-space indented JSON with a trailing newline
pub fn render(document: &Value) -> Result<String> {
    let mut text = serde_json::to_string_pretty(document)?;
    text.push('\n');
    Ok(text)
}

async fn write_document(path: &Path, document: &Value) -> Result<()> {
    let text = render(document)?;
    tokio::fs::write(path, text)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;
    use test_case::test_case;

    #[test_case(json!(null), true ; "null")]
    #[test_case(json!({}), true ; "empty map")]
    #[test_case(json!([]), true ; "empty list")]
    #[test_case(json!({"a": 1}), false ; "map")]
    #[test_case(json!([0]), false ; "list")]
    #[test_case(json!(""), false ; "empty string")]
    fn test_is_empty_document(document: Value, expected: bool) {
        assert_eq!(is_empty_document(&document), expected);
    }

    #[test]
    fn test_render_format() {
        let text = render(&json!({"b": 1, "a": [true]})).unwrap();
        assert_eq!(text, "{\n  \"b\": 1,\n  \"a\": [\n    true\n  ]\n}\n");
    }

    #[test]
    fn test_render_keeps_large_integers_exact() {
        let document: Value =
            serde_json::from_str(r#"{"energy": 12345678901234567890123, "ratio": 0.1}"#).unwrap();
        let text = render(&document).unwrap();
        assert!(text.contains("\"energy\": 12345678901234567890123"));
        assert!(text.contains("\"ratio\": 0.1"));
    }

    #[test]
    fn test_prepare_skip() {
        let mut context = AnonymizationContext::with_seed(true, 7);
        let mut doc = json!({"device_sn": "9JVB42LJK8J0P5RY"});
        let applied = prepare(
            &mut context,
            &mut doc,
            ExportOptions {
                skip_anonymize: true,
                anonymize_keys: false,
            },
        );
        assert!(applied.is_empty());
        assert_eq!(doc["device_sn"], "9JVB42LJK8J0P5RY");
        assert!(context.table().is_empty());
    }

    #[test]
    fn test_prepare_renames_keys() {
        let mut context = AnonymizationContext::with_seed(true, 7);
        let mut doc = json!({
            "device_sn": "9JVB42LJK8J0P5RY",
            "9JVB42LJK8J0P5RY": {"power": 120}
        });
        let applied = prepare(
            &mut context,
            &mut doc,
            ExportOptions {
                skip_anonymize: false,
                anonymize_keys: true,
            },
        );
        assert_eq!(applied.len(), 1);

        let substitute = doc["device_sn"].as_str().unwrap().to_string();
        let keys: Vec<&String> = doc.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["device_sn", substitute.as_str()]);
    }

    #[tokio::test]
    async fn test_export_skips_empty() {
        let dir = TempDir::new().unwrap();
        let mut exporter = DocumentExporter::new(dir.path());
        let mut context = AnonymizationContext::with_seed(true, 1);

        let outcome = exporter
            .export(&mut context, "empty.json", json!({}), ExportOptions::default())
            .await;

        assert!(matches!(outcome, ExportOutcome::SkippedEmpty));
        assert!(!dir.path().join("empty.json").exists());
    }

    #[tokio::test]
    async fn test_export_names_file_with_substitute() {
        let dir = TempDir::new().unwrap();
        let mut exporter = DocumentExporter::new(dir.path());
        let mut context = AnonymizationContext::with_seed(true, 1);
        let site_id = "26e56751-fe51-40a6-8fb0-b9ce5d6c8700";

        let outcome = exporter
            .export(
                &mut context,
                &format!("scene_{site_id}.json"),
                json!({"site_id": site_id}),
                ExportOptions::default(),
            )
            .await;

        let ExportOutcome::Written { output_file, .. } = outcome else {
            panic!("expected a written document");
        };
        assert!(!output_file.contains(site_id));
        assert!(output_file.starts_with("scene_"));
        assert!(dir.path().join(&output_file).exists());
    }

    #[tokio::test]
    async fn test_short_originals_do_not_rename_other_files() {
        let dir = TempDir::new().unwrap();
        let mut exporter = DocumentExporter::new(dir.path());
        let mut context = AnonymizationContext::with_seed(true, 1);

        let first = exporter
            .export(
                &mut context,
                "site_list.json",
                json!({"wifi_name": "json", "trace_id": "e"}),
                ExportOptions::default(),
            )
            .await;
        let second = exporter
            .export(
                &mut context,
                "scene_info.json",
                json!({"a": 1}),
                ExportOptions::default(),
            )
            .await;

        let ExportOutcome::Written { output_file, .. } = first else {
            panic!("expected a written document");
        };
        assert_eq!(output_file, "site_list.json");
        let ExportOutcome::Written { output_file, .. } = second else {
            panic!("expected a written document");
        };
        assert_eq!(output_file, "scene_info.json");
        assert!(dir.path().join("site_list.json").exists());
        assert!(dir.path().join("scene_info.json").exists());
    }

    #[tokio::test]
    async fn test_same_output_name_is_not_overwritten() {
        let dir = TempDir::new().unwrap();
        let mut exporter = DocumentExporter::new(dir.path());
        let mut context = AnonymizationContext::with_seed(true, 1);
        let site_id = "26e56751-fe51-40a6-8fb0-b9ce5d6c8700";

        let first = exporter
            .export(
                &mut context,
                &format!("scene_{site_id}.json"),
                json!({"site_id": site_id, "order": 1}),
                ExportOptions::default(),
            )
            .await;
        let ExportOutcome::Written { output_file, .. } = first else {
            panic!("expected a written document");
        };

        // A capture already named after the substitute resolves to the same file
        let second = exporter
            .export(
                &mut context,
                &output_file,
                json!({"order": 2}),
                ExportOptions::default(),
            )
            .await;
        assert!(matches!(second, ExportOutcome::Failed { .. }));

        let written = std::fs::read_to_string(dir.path().join(&output_file)).unwrap();
        assert!(written.contains("\"order\": 1"));
    }

    #[tokio::test]
    async fn test_export_write_failure() {
        let dir = TempDir::new().unwrap();
        let mut exporter = DocumentExporter::new(dir.path().join("missing"));
        let mut context = AnonymizationContext::with_seed(false, 1);

        let outcome = exporter
            .export(&mut context, "a.json", json!({"a": 1}), ExportOptions::default())
            .await;

        assert!(matches!(outcome, ExportOutcome::Failed { .. }));
    }
}
