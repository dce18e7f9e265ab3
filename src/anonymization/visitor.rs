//! Post-order traversal of nested documents
//!
//! A document is a `serde_json::Value`: scalars, arrays (lists) and objects
//! (maps). [`walk_mut`] visits every map entry after all of its descendants
//! have been visited, so a visitor that rewrites a value never sees a
//! half-processed subtree.

use serde_json::Value;

/// Callback invoked for every map entry
pub trait NodeVisitor {
    /// Visit one `key: value` entry; the value may be rewritten in place
    fn visit_entry(&mut self, key: &str, value: &mut Value);
}

/// Walk `node` depth-first, children before their containing entry
pub fn walk_mut<V: NodeVisitor + ?Sized>(node: &mut Value, visitor: &mut V) {
    match node {
        Value::Object(map) => {
            for (key, value) in map.iter_mut() {
                walk_mut(value, visitor);
                visitor.visit_entry(key, value);
            }
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                walk_mut(item, visitor);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Recorder {
        keys: Vec<String>,
    }

    impl NodeVisitor for Recorder {
        fn visit_entry(&mut self, key: &str, _value: &mut Value) {
            self.keys.push(key.to_string());
        }
    }

    #[test]
    fn test_children_visited_first() {
        let mut doc = json!({
            "outer": {"inner": 1},
            "list": [{"item": true}, 3],
            "leaf": "x"
        });
        let mut recorder = Recorder { keys: Vec::new() };
        walk_mut(&mut doc, &mut recorder);

        assert_eq!(recorder.keys, vec!["inner", "outer", "item", "list", "leaf"]);
    }

    #[test]
    fn test_scalar_root_is_not_visited() {
        let mut doc = json!("plain");
        let mut recorder = Recorder { keys: Vec::new() };
        walk_mut(&mut doc, &mut recorder);
        assert!(recorder.keys.is_empty());
    }

    #[test]
    fn test_nested_lists() {
        let mut doc = json!([[{"a": 1}], [[{"b": 2}]]]);
        let mut recorder = Recorder { keys: Vec::new() };
        walk_mut(&mut doc, &mut recorder);
        assert_eq!(recorder.keys, vec!["a", "b"]);
    }
}
