//! Substitution reporting
//!
//! At the end of a run the operator gets the full original → substitute
//! mapping so the exported files can be reviewed by hand before sharing.
//! The report contains personal data and is never written into the export
//! folder unless the operator asks for it.

use crate::anonymization::table::SubstitutionTable;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Original → substitute mapping captured from a finished run
#[derive(Debug, Clone, Default)]
pub struct SubstitutionReport {
    /// Entries in the order they were first substituted
    pub entries: Vec<(String, String)>,
}

impl SubstitutionReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the current content of a substitution table
    pub fn from_table(table: &SubstitutionTable) -> Self {
        Self {
            entries: table
                .iter()
                .map(|(original, substitute)| (original.to_string(), substitute.to_string()))
                .collect(),
        }
    }

    /// Number of substitutions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether nothing was substituted
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Format report for console output
    pub fn format_console(&self) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push_str("                    SUBSTITUTION REPORT                        \n");
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        if self.entries.is_empty() {
            output.push_str("  No values were substituted.\n");
        } else {
            output.push_str(&format!(
                "  Randomized trace/site IDs, SNs and addresses: {}\n",
                self.entries.len()
            ));
            output.push_str("───────────────────────────────────────────────────────────────\n");

            let width = self
                .entries
                .iter()
                .map(|(original, _)| original.chars().count())
                .max()
                .unwrap_or(0)
                .min(48);

            for (original, substitute) in &self.entries {
                output.push_str(&format!("  {original:width$} -> {substitute}\n"));
            }
        }

        output.push('\n');
        output.push_str("═══════════════════════════════════════════════════════════════\n");

        output
    }

    /// Format report as an indented JSON object
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write report to file
    pub fn write_to_file(&self, path: &std::path::Path) -> std::io::Result<()> {
        let json = self
            .format_json()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, json)
    }
}

impl Serialize for SubstitutionReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (original, substitute) in &self.entries {
            map.serialize_entry(original, substitute)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_report() -> SubstitutionReport {
        let mut table = SubstitutionTable::new();
        table.insert("AB12CD34", "QW98ER76");
        table.insert("site-0001", "beef-0a1b");
        SubstitutionReport::from_table(&table)
    }

    #[test]
    fn test_from_table_keeps_order() {
        let report = sample_report();
        assert_eq!(report.len(), 2);
        assert_eq!(report.entries[0].0, "AB12CD34");
        assert_eq!(report.entries[1].1, "beef-0a1b");
    }

    #[test]
    fn test_format_console() {
        let output = sample_report().format_console();
        assert!(output.contains("SUBSTITUTION REPORT"));
        assert!(output.contains("AB12CD34"));
        assert!(output.contains("-> QW98ER76"));
    }

    #[test]
    fn test_format_console_empty() {
        let output = SubstitutionReport::new().format_console();
        assert!(output.contains("No values were substituted"));
    }

    #[test]
    fn test_format_json_is_ordered_object() {
        let json = sample_report().format_json().unwrap();
        let first = json.find("AB12CD34").unwrap();
        let second = json.find("site-0001").unwrap();
        assert!(first < second);

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["AB12CD34"], "QW98ER76");
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reports").join("substitutions.json");

        sample_report().write_to_file(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"site-0001\": \"beef-0a1b\""));
    }
}
