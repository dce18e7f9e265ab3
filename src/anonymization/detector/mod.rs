//! Sensitive-key detection
//!
//! Decides which mapping keys of an API response carry values that must be
//! anonymized. Matching is purely on the key name: the value is never
//! inspected here.

/// A single matcher against a mapping key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPattern {
    /// Key contains the fragment anywhere
    Contains(&'static str),
    /// Key is exactly this string
    Exact(&'static str),
}

impl KeyPattern {
    /// Check whether `key` satisfies this pattern
    pub fn matches(&self, key: &str) -> bool {
        match self {
            Self::Contains(fragment) => key.contains(fragment),
            Self::Exact(name) => key == *name,
        }
    }
}

/// Keys whose values are candidates for substitution
///
/// `device_name` is listed so the policy layer sees it, but its policy is
/// exempt and the value is never changed.
pub const SENSITIVE_KEY_PATTERNS: &[KeyPattern] = &[
    KeyPattern::Contains("_sn"),
    KeyPattern::Contains("site_id"),
    KeyPattern::Contains("trace_id"),
    KeyPattern::Contains("bt_ble_"),
    KeyPattern::Contains("wifi_name"),
    KeyPattern::Contains("home_load_data"),
    KeyPattern::Contains("param_data"),
    KeyPattern::Contains("device_name"),
    KeyPattern::Exact("sn"),
];

/// Check whether a mapping key is sensitive
pub fn is_sensitive_key(key: &str) -> bool {
    SENSITIVE_KEY_PATTERNS.iter().any(|p| p.matches(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("device_sn" ; "serial suffix")]
    #[test_case("solarbank_sn" ; "prefixed serial")]
    #[test_case("sn" ; "bare serial")]
    #[test_case("site_id" ; "site id")]
    #[test_case("trace_id" ; "trace id")]
    #[test_case("bt_ble_mac" ; "bluetooth mac")]
    #[test_case("wifi_name" ; "wifi name")]
    #[test_case("home_load_data" ; "schedule blob")]
    #[test_case("param_data" ; "parameter blob")]
    #[test_case("device_name" ; "device name")]
    fn test_sensitive_keys(key: &str) {
        assert!(is_sensitive_key(key));
    }

    #[test_case("sns" ; "sn is exact only")]
    #[test_case("device_pn" ; "product number")]
    #[test_case("battery_power" ; "plain metric")]
    #[test_case("user_id" ; "id outside pattern list")]
    #[test_case("" ; "empty key")]
    fn test_plain_keys(key: &str) {
        assert!(!is_sensitive_key(key));
    }

    #[test]
    fn test_exact_pattern() {
        assert!(KeyPattern::Exact("sn").matches("sn"));
        assert!(!KeyPattern::Exact("sn").matches("snapshot"));
    }
}
