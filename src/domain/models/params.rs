//! Query parameters for catalog requests.
//!
//! A [`ParameterSet`] keeps insertion order (that is the order the query
//! string is sent in) while comparing like a map: two sets holding the same
//! keys and values are equal regardless of how they were assembled.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Numeric value, e.g. an artist id or `limit`.
    Integer(i64),
    /// Any other value.
    Text(String),
}

impl ParamValue {
    /// Falsy values are treated as "not given" by lookups.
    pub fn is_falsy(&self) -> bool {
        match self {
            Self::Integer(n) => *n == 0,
            Self::Text(s) => s.is_empty() || s == "0",
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

/// Ordered mapping from parameter names to values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<(String, ParamValue)>", into = "Vec<(String, ParamValue)>")]
pub struct ParameterSet {
    entries: Vec<(String, ParamValue)>,
}

impl ParameterSet {
    /// Empty set.
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Set `key`, replacing an existing value in place or appending a new entry.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set holds no parameters.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Merge `overrides` on top of `self`.
    ///
    /// Keys already present keep their position but take the overriding
    /// value; new keys are appended in the order they appear in `overrides`.
    #[must_use]
    pub fn merge(mut self, overrides: Self) -> Self {
        for (key, value) in overrides.entries {
            self.insert(key, value);
        }
        self
    }

    /// Query pairs in insertion order, as sent on the wire.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), v.to_string()))
            .collect()
    }

    /// Form-urlencoded query with pairs sorted by key then value.
    ///
    /// Identical logical parameter sets always encode identically.
    pub fn canonical_query(&self) -> String {
        let mut pairs = self.to_query_pairs();
        pairs.sort();
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(pairs)
            .finish()
    }
}

impl PartialEq for ParameterSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl Eq for ParameterSet {}

impl<K, V> FromIterator<(K, V)> for ParameterSet
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (key, value) in iter {
            set.insert(key, value);
        }
        set
    }
}

impl From<Vec<(String, ParamValue)>> for ParameterSet {
    fn from(entries: Vec<(String, ParamValue)>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<ParameterSet> for Vec<(String, ParamValue)> {
    fn from(set: ParameterSet) -> Self {
        set.entries
    }
}

/// Build a [`ParameterSet`] from `key => value` pairs.
///
/// ```
/// use itunes_agent::params;
/// let p = params! { "term" => "jack johnson", "limit" => 25 };
/// assert_eq!(p.len(), 2);
/// ```
#[macro_export]
macro_rules! params {
    () => { $crate::domain::models::ParameterSet::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut set = $crate::domain::models::ParameterSet::new();
        $( set.insert($key, $value); )+
        set
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut set = params! { "term" => "a", "limit" => 50 };
        set.insert("term", "b");

        let keys: Vec<&str> = set.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["term", "limit"]);
        assert_eq!(set.get("term"), Some(&ParamValue::from("b")));
    }

    #[test]
    fn test_merge_override_wins_and_appends() {
        let base = params! { "limit" => 50, "term" => "colorado" };
        let merged = base.merge(params! { "country" => "Lebanon", "limit" => 10 });

        assert_eq!(merged.get("limit"), Some(&ParamValue::Integer(10)));
        let keys: Vec<&str> = merged.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["limit", "term", "country"]);
    }

    #[test]
    fn test_equality_ignores_order() {
        let a = params! { "term" => "x", "media" => "music" };
        let b = params! { "media" => "music", "term" => "x" };
        assert_eq!(a, b);
        assert_ne!(a, params! { "term" => "x" });
    }

    #[test]
    fn test_canonical_query_is_sorted_and_encoded() {
        let set = params! { "term" => "abou ali", "country" => "LB", "limit" => 50 };
        assert_eq!(set.canonical_query(), "country=LB&limit=50&term=abou+ali");
    }

    #[test]
    fn test_falsy_values() {
        assert!(ParamValue::from("").is_falsy());
        assert!(ParamValue::from("0").is_falsy());
        assert!(ParamValue::Integer(0).is_falsy());
        assert!(!ParamValue::from("12345").is_falsy());
    }

    #[test]
    fn test_serde_preserves_order() {
        let set = params! { "term" => "x", "limit" => 3 };
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"[["term","x"],["limit",3]]"#);
        let back: ParameterSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_query_pairs(), set.to_query_pairs());
    }

    proptest! {
        #[test]
        fn prop_canonical_query_independent_of_insertion_order(
            pairs in proptest::collection::btree_map("[a-z]{1,6}", "[a-zA-Z0-9 ]{0,8}", 0..8)
        ) {
            let forward: ParameterSet = pairs.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
            let reversed: ParameterSet = pairs.iter().rev().map(|(k, v)| (k.clone(), v.clone())).collect();
            prop_assert_eq!(forward.canonical_query(), reversed.canonical_query());
            prop_assert_eq!(forward, reversed);
        }

        #[test]
        fn prop_merge_keeps_every_override(
            base in proptest::collection::btree_map("[a-z]{1,4}", 0i64..100, 0..6),
            overrides in proptest::collection::btree_map("[a-z]{1,4}", 0i64..100, 0..6)
        ) {
            let merged = base.iter().map(|(k, v)| (k.clone(), *v)).collect::<ParameterSet>()
                .merge(overrides.iter().map(|(k, v)| (k.clone(), *v)).collect());
            for (k, v) in &overrides {
                prop_assert_eq!(merged.get(k), Some(&ParamValue::Integer(*v)));
            }
            for (k, v) in base.iter().filter(|(k, _)| !overrides.contains_key(*k)) {
                prop_assert_eq!(merged.get(k), Some(&ParamValue::Integer(*v)));
            }
        }
    }
}
