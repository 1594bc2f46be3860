//! Ordered, case-insensitive map of parameter values.

use std::str::FromStr;

use indexmap::IndexMap;
use indexmap::map::Entry;

/// Folds a command or parameter name for case-insensitive comparison.
///
/// Every name matcher in the workspace compares folded forms, so names that
/// register as distinct also look up as distinct.
pub fn fold_case(name: &str) -> String {
    name.to_lowercase()
}

/// Parameter values keyed by name, kept in insertion order.
///
/// Used both for raw values straight out of the tokenizer (keyed by the
/// name as typed or by a synthesized position) and for resolved values
/// handed to a command action (keyed by canonical parameter name). Keys
/// compare case-insensitively; inserting an existing key replaces its value
/// and keeps its original position.
///
/// # Examples
///
/// ```
/// use command_dispatch_core::ParameterMap;
///
/// let mut params = ParameterMap::new();
/// params.insert("count", "3");
/// params.insert("verbose", "");
///
/// assert_eq!(params.get("COUNT"), Some("3"));
/// assert_eq!(params.parse::<u32>("count"), Some(Ok(3)));
/// assert!(params.flag("verbose"));
/// assert!(!params.flag("quiet"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterMap {
    /// Folded key to `(key as first inserted, value)`.
    entries: IndexMap<String, (String, String)>,
}

impl ParameterMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a value.
    ///
    /// A replaced entry keeps its position and the spelling of the key it
    /// was first inserted with.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.entry(fold_case(&key)) {
            Entry::Occupied(mut entry) => entry.get_mut().1 = value,
            Entry::Vacant(entry) => {
                entry.insert((key, value));
            }
        }
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(&fold_case(key)).map(|(_, v)| v.as_str())
    }

    /// Parses the value stored under `key`.
    ///
    /// Returns `None` when the key is absent.
    pub fn parse<T: FromStr>(&self, key: &str) -> Option<Result<T, T::Err>> {
        self.get(key).map(str::parse)
    }

    /// Returns `true` if `key` is present with an empty value or any casing
    /// of `true`.
    pub fn flag(&self, key: &str) -> bool {
        self.get(key)
            .is_some_and(|v| v.is_empty() || v.eq_ignore_ascii_case("true"))
    }

    /// Returns `true` if a value is stored under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(&fold_case(key))
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.values().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for ParameterMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}
