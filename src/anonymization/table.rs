//! Run-scoped substitution table
//!
//! Maps every original sensitive value seen during one export run to the
//! substitute generated for it. Insertion order is kept: embedded blobs are
//! rewritten in that order and the final report lists entries in it.

use indexmap::IndexMap;
use zeroize::Zeroize;

/// Original → substitute mapping for one run
///
/// The originals are personal data. `Debug` only prints the entry count and
/// every string is zeroized when the table is dropped.
#[derive(Default)]
pub struct SubstitutionTable {
    entries: IndexMap<String, String>,
}

impl SubstitutionTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Substitute previously recorded for `original`
    pub fn get(&self, original: &str) -> Option<&str> {
        self.entries.get(original).map(String::as_str)
    }

    /// Check whether `original` has a substitute
    pub fn contains(&self, original: &str) -> bool {
        self.entries.contains_key(original)
    }

    /// Record a substitute; an existing entry keeps its position
    pub fn insert(&mut self, original: impl Into<String>, substitute: impl Into<String>) {
        self.entries.insert(original.into(), substitute.into());
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of recorded originals
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace every known original occurring in `text` by its substitute
    ///
    /// Originals for which `skip` returns true are left in place.
    pub fn replace_known(&self, text: &str, skip: impl Fn(&str) -> bool) -> String {
        let mut result = text.to_string();
        for (original, substitute) in self.iter() {
            if original.is_empty() || skip(original) {
                continue;
            }
            if result.contains(original) {
                result = result.replace(original, substitute);
            }
        }
        result
    }
}

impl std::fmt::Debug for SubstitutionTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubstitutionTable")
            .field("entries", &self.entries.len())
            .finish()
    }
}

impl Drop for SubstitutionTable {
    fn drop(&mut self) {
        for (mut original, mut substitute) in self.entries.drain(..) {
            original.zeroize();
            substitute.zeroize();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut table = SubstitutionTable::new();
        table.insert("AB12CD34", "ZZ99YY88");

        assert_eq!(table.get("AB12CD34"), Some("ZZ99YY88"));
        assert!(table.contains("AB12CD34"));
        assert_eq!(table.get("unknown"), None);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_insertion_order() {
        let mut table = SubstitutionTable::new();
        table.insert("b", "2");
        table.insert("a", "1");
        table.insert("c", "3");

        let originals: Vec<&str> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(originals, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_replace_known() {
        let mut table = SubstitutionTable::new();
        table.insert("SN0001", "XK41QZ");
        table.insert("0123456789abcdef0123456789abcdef", "trace-substitute");

        let blob = r#"{"sn":"SN0001","trace":"0123456789abcdef0123456789abcdef"}"#;
        let replaced = table.replace_known(blob, |original| original.len() == 32);

        assert!(replaced.contains("XK41QZ"));
        assert!(!replaced.contains("SN0001"));
        assert!(replaced.contains("0123456789abcdef0123456789abcdef"));
    }

    #[test]
    fn test_debug_hides_originals() {
        let mut table = SubstitutionTable::new();
        table.insert("AB12CD34", "ZZ99YY88");

        let debug = format!("{table:?}");
        assert!(!debug.contains("AB12CD34"));
        assert!(debug.contains("entries: 1"));
    }
}
