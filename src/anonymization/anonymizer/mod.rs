//! Substitution policies
//!
//! A key hint is mapped to a [`SubstitutionPolicy`] by walking
//! [`POLICY_RULES`] in order; the first matching rule wins. The order is
//! fixed and must not be rearranged: keys such as `trace_id` or `device_sn`
//! satisfy more than one predicate.

pub mod generator;

pub use generator::RandomGenerator;

/// How a sensitive value is replaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubstitutionPolicy {
    /// Never substituted (device names are not treated as sensitive)
    Exempt,
    /// Same-length `[A-Z0-9]` string
    Serial,
    /// Same-length uppercase hex, colon grouping preserved
    BluetoothAddress,
    /// Each `-` separated segment replaced by same-length lowercase hex
    Identifier,
    /// Sequential `wifi-network-N` names
    WifiName,
    /// Text blob in which already-known originals are replaced
    EmbeddedBlob,
    /// Same-length `[A-Za-z]` string
    Alphabetic,
}

/// Predicate half of a policy rule
#[derive(Debug, Clone, Copy)]
pub enum KeyPredicate {
    /// Key equals one of the names
    Equals(&'static [&'static str]),
    /// Key contains the fragment or equals one of the names
    ContainsOrEquals(&'static str, &'static [&'static str]),
    /// Key contains the fragment
    Contains(&'static str),
}

impl KeyPredicate {
    fn matches(&self, key: &str) -> bool {
        match self {
            Self::Equals(names) => names.contains(&key),
            Self::ContainsOrEquals(fragment, names) => {
                key.contains(fragment) || names.contains(&key)
            }
            Self::Contains(fragment) => key.contains(fragment),
        }
    }
}

/// Ordered (predicate, policy) pairs; the fallback is [`SubstitutionPolicy::Alphabetic`]
pub const POLICY_RULES: &[(KeyPredicate, SubstitutionPolicy)] = &[
    (
        KeyPredicate::Equals(&["device_name"]),
        SubstitutionPolicy::Exempt,
    ),
    (
        KeyPredicate::ContainsOrEquals("_sn", &["sn"]),
        SubstitutionPolicy::Serial,
    ),
    (
        KeyPredicate::Contains("bt_ble_"),
        SubstitutionPolicy::BluetoothAddress,
    ),
    (
        KeyPredicate::Contains("_id"),
        SubstitutionPolicy::Identifier,
    ),
    (
        KeyPredicate::Contains("wifi_name"),
        SubstitutionPolicy::WifiName,
    ),
    (
        KeyPredicate::Equals(&["home_load_data", "param_data"]),
        SubstitutionPolicy::EmbeddedBlob,
    ),
];

/// Select the substitution policy for a key hint
pub fn policy_for_key(key: &str) -> SubstitutionPolicy {
    POLICY_RULES
        .iter()
        .find(|(predicate, _)| predicate.matches(key))
        .map(|(_, policy)| *policy)
        .unwrap_or(SubstitutionPolicy::Alphabetic)
}
