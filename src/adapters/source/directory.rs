//! Capture folder source
//!
//! Reads one API response per `*.json` file from a directory.

use super::DocumentSource;
use crate::domain::errors::SourceError;
use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Document source backed by a directory of JSON files
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Create a source reading from the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory this source reads from
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn is_document(path: &Path) -> bool {
        path.is_file()
            && path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    }
}

#[async_trait]
impl DocumentSource for DirectorySource {
    fn describe(&self) -> String {
        format!("directory {}", self.root.display())
    }

    async fn list(&self) -> Result<Vec<String>, SourceError> {
        let mut entries = tokio::fs::read_dir(&self.root).await.map_err(|e| {
            SourceError::Unavailable(format!("{}: {}", self.root.display(), e))
        })?;

        let mut names = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| SourceError::Unavailable(format!("{}: {}", self.root.display(), e)))?
        {
            let path = entry.path();
            if !Self::is_document(&path) {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                names.push(name.to_string());
            }
        }

        names.sort();
        Ok(names)
    }

    async fn fetch(&self, name: &str) -> Result<Value, SourceError> {
        let path = self.root.join(name);
        let contents = match tokio::fs::read(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(SourceError::NotFound(name.to_string()));
            }
            Err(e) => {
                return Err(SourceError::ReadFailed {
                    name: name.to_string(),
                    message: e.to_string(),
                });
            }
        };

        serde_json::from_slice(&contents).map_err(|e| SourceError::InvalidDocument {
            name: name.to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_list_returns_sorted_json_files() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("site_list.json"), "{}").unwrap();
        std::fs::write(dir.path().join("api_devices.json"), "[]").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        std::fs::create_dir(dir.path().join("nested.json")).unwrap();

        let source = DirectorySource::new(dir.path());
        let names = source.list().await.unwrap();
        assert_eq!(names, vec!["api_devices.json", "site_list.json"]);
    }

    #[tokio::test]
    async fn test_list_missing_directory() {
        let dir = TempDir::new().unwrap();
        let source = DirectorySource::new(dir.path().join("missing"));
        let err = source.list().await.unwrap_err();
        assert!(matches!(err, SourceError::Unavailable(_)));
    }

    #[tokio::test]
    async fn test_fetch_keeps_key_order() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("bind_devices.json"),
            r#"{"zeta": 1, "alpha": 2, "device_sn": "9JVB42LJK8J0P5RY"}"#,
        )
        .unwrap();

        let source = DirectorySource::new(dir.path());
        let doc = source.fetch("bind_devices.json").await.unwrap();
        let keys: Vec<&String> = doc.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "device_sn"]);
    }

    #[tokio::test]
    async fn test_fetch_errors() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("broken.json"), "{not json").unwrap();

        let source = DirectorySource::new(dir.path());
        assert!(matches!(
            source.fetch("broken.json").await.unwrap_err(),
            SourceError::InvalidDocument { .. }
        ));
        assert!(matches!(
            source.fetch("absent.json").await.unwrap_err(),
            SourceError::NotFound(_)
        ));
    }
}
