//! Anonymization context
//!
//! This module provides [`AnonymizationContext`], the per-run object that
//! owns the substitution table and the random generator. The caller creates
//! one context per export run, passes it to every export, and drops it when
//! the run is over.
//!
//! # Examples
//!
//! ```
//! use solix_export::anonymization::AnonymizationContext;
//! use serde_json::json;
//!
//! let mut context = AnonymizationContext::new(true);
//! let mut doc = json!({"sn": "AB12CD34", "device_name": "Kitchen"});
//! context.sanitize(&mut doc);
//!
//! assert_ne!(doc["sn"], "AB12CD34");
//! assert_eq!(doc["device_name"], "Kitchen");
//! ```

use crate::anonymization::{
    anonymizer::{generator::group_pairs, policy_for_key, RandomGenerator, SubstitutionPolicy},
    detector::is_sensitive_key,
    table::SubstitutionTable,
    visitor::{walk_mut, NodeVisitor},
};
use serde_json::{Map, Value};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Length of trace-id-like tokens, which are never rewritten inside blobs
const TRACE_ID_LEN: usize = 32;

/// One value replaced while sanitizing a document
#[derive(Debug, Clone, Zeroize, ZeroizeOnDrop)]
pub struct AppliedSubstitution {
    /// Key under which the value appeared
    pub key: String,
    /// The original value
    pub original: String,
}

/// Per-run anonymization state
///
/// # Thread Safety
///
/// A context is driven by a single export run and is not shared; every
/// mutating operation takes `&mut self`.
pub struct AnonymizationContext {
    enabled: bool,
    table: SubstitutionTable,
    generator: RandomGenerator,
    wifi_names_issued: usize,
}

impl AnonymizationContext {
    /// Create a context with an entropy-seeded generator
    pub fn new(enabled: bool) -> Self {
        Self::with_generator(enabled, RandomGenerator::new())
    }

    /// Create a context whose substitutes are reproducible
    pub fn with_seed(enabled: bool, seed: u64) -> Self {
        Self::with_generator(enabled, RandomGenerator::with_seed(seed))
    }

    fn with_generator(enabled: bool, generator: RandomGenerator) -> Self {
        Self {
            enabled,
            table: SubstitutionTable::new(),
            generator,
            wifi_names_issued: 0,
        }
    }

    /// Check if anonymization is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Substitutions recorded so far
    pub fn table(&self) -> &SubstitutionTable {
        &self.table
    }

    /// Produce the substitute for `value` seen under `key`
    ///
    /// Returns `value` unchanged when the context is disabled, when the key
    /// is exempt, or when nothing could be generated (empty input). A value
    /// substituted earlier in the run always gets the same substitute.
    pub fn substitute(&mut self, value: &str, key: &str) -> String {
        if !self.enabled {
            return value.to_string();
        }

        let policy = policy_for_key(key);
        if policy == SubstitutionPolicy::Exempt {
            return value.to_string();
        }

        if let Some(existing) = self.table.get(value) {
            return existing.to_string();
        }

        if value.is_empty() {
            return String::new();
        }

        let substitute = match policy {
            SubstitutionPolicy::Exempt => return value.to_string(),
            SubstitutionPolicy::Serial => self.generator.serial(value),
            SubstitutionPolicy::BluetoothAddress => self.bluetooth_address(value),
            SubstitutionPolicy::Identifier => self.generator.identifier(value),
            SubstitutionPolicy::WifiName => {
                self.wifi_names_issued += 1;
                format!("wifi-network-{}", self.wifi_names_issued)
            }
            SubstitutionPolicy::EmbeddedBlob => {
                // Derived text, never recorded as an entry of its own
                return self
                    .table
                    .replace_known(value, |original| original.chars().count() == TRACE_ID_LEN);
            }
            SubstitutionPolicy::Alphabetic => self.generator.alphabetic(value),
        };

        if substitute.is_empty() {
            return value.to_string();
        }

        tracing::trace!(key = %key, policy = ?policy, "Generated substitute");
        self.table.insert(value, substitute.clone());
        substitute
    }

    /// Hex substitute for a Bluetooth address, with or without colons
    ///
    /// The colon-free form is looked up and recorded as well, so both
    /// spellings of one address map to the same digits.
    fn bluetooth_address(&mut self, value: &str) -> String {
        let compact: String = value.chars().filter(|c| *c != ':').collect();
        let random = match self.table.get(&compact) {
            Some(existing) => existing.to_string(),
            None => self.generator.hex_upper(compact.chars().count()),
        };

        if value.contains(':') {
            if !compact.is_empty() {
                self.table.insert(compact, random.clone());
            }
            group_pairs(&random)
        } else {
            random
        }
    }

    /// Replace the values of all sensitive keys in `document`, in place
    ///
    /// Children are processed before the entry that contains them. Only
    /// string values are substituted; other values under a sensitive key are
    /// left as they are.
    pub fn sanitize<'a>(&mut self, document: &'a mut Value) -> &'a mut Value {
        self.sanitize_recorded(document);
        document
    }

    /// Like [`sanitize`](Self::sanitize), returning what was replaced
    pub fn sanitize_recorded(&mut self, document: &mut Value) -> Vec<AppliedSubstitution> {
        let mut sanitizer = Sanitizer {
            context: self,
            applied: Vec::new(),
        };
        if sanitizer.context.enabled {
            walk_mut(document, &mut sanitizer);
        }
        sanitizer.applied
    }

    /// Rename mapping keys that are themselves known originals
    ///
    /// Applies to the root keys and to the keys of every map found at
    /// `document[root_key][nested_key]`. Entry positions are kept.
    pub fn rename_keys(&self, document: &mut Value) {
        let Value::Object(root) = document else {
            return;
        };

        for value in root.values_mut() {
            if let Value::Object(children) = value {
                for nested in children.values_mut() {
                    if let Value::Object(grandchildren) = nested {
                        self.rename_map_keys(grandchildren);
                    }
                }
            }
        }

        self.rename_map_keys(root);
    }

    fn rename_map_keys(&self, map: &mut Map<String, Value>) {
        if !map.keys().any(|k| self.table.contains(k)) {
            return;
        }

        let entries = std::mem::take(map);
        *map = entries
            .into_iter()
            .map(|(key, value)| match self.table.get(&key) {
                Some(substitute) => (substitute.to_string(), value),
                None => (key, value),
            })
            .collect();
    }

    /// Rewrite a document file name so it embeds substitutes, not originals
    ///
    /// Only the stem is touched. Each `_`-separated segment of the stem that
    /// is itself a recorded original is replaced by its substitute; partial
    /// matches and the extension are left alone.
    pub fn redact_file_name(&self, name: &str) -> String {
        if !self.enabled || self.table.is_empty() {
            return name.to_string();
        }

        let (stem, extension) = match name.rfind('.') {
            Some(dot) if dot > 0 => name.split_at(dot),
            _ => (name, ""),
        };

        let stem = stem
            .split('_')
            .map(|segment| self.table.get(segment).unwrap_or(segment))
            .collect::<Vec<_>>()
            .join("_");

        format!("{stem}{extension}")
    }
}

struct Sanitizer<'c> {
    context: &'c mut AnonymizationContext,
    applied: Vec<AppliedSubstitution>,
}

impl NodeVisitor for Sanitizer<'_> {
    fn visit_entry(&mut self, key: &str, value: &mut Value) {
        if !is_sensitive_key(key) {
            return;
        }

        match value {
            Value::String(original) => {
                let replacement = self.context.substitute(original, key);
                if replacement != *original {
                    let original = std::mem::replace(original, replacement);
                    self.applied.push(AppliedSubstitution {
                        key: key.to_string(),
                        original,
                    });
                }
            }
            other => {
                tracing::debug!(
                    key = %key,
                    kind = value_kind(other),
                    "Sensitive key holds a non-string value, left unchanged"
                );
            }
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
