//! Header map shared by requests and responses.

use std::collections::BTreeMap;

/// HTTP header map with case-insensitive keys that remembers how each key was
/// spelled.
///
/// Entries iterate in byte-wise ascending order of the original key spelling,
/// which is the order the RSA-SHA256 canonical signing input relies on.
/// Inserting a key that differs only in ASCII case from an existing key
/// replaces that entry (and its spelling).
///
/// # Examples
///
/// ```
/// use mapi_core::Headers;
///
/// let headers = Headers::new()
///     .with("X-Mcash-User", "pos-user")
///     .with("Accept", "application/json");
///
/// assert_eq!(headers.get("x-mcash-user"), Some("pos-user"));
/// let names: Vec<&str> = headers.iter().map(|(name, _)| name).collect();
/// assert_eq!(names, ["Accept", "X-Mcash-User"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers(BTreeMap<String, String>);

impl Headers {
    /// Create an empty header map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy of this map with `name` set to `value`.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set `name` to `value`, returning the value it replaced.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let previous = self.remove(&name);
        self.0.insert(name, value.into());
        previous
    }

    /// Remove the entry whose key matches `name` ignoring ASCII case.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let key = self.find_key(name)?.to_owned();
        self.0.remove(&key)
    }

    /// Look up a header value ignoring ASCII case.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        let key = self.find_key(name)?;
        self.0.get(key).map(String::as_str)
    }

    /// Whether a header with this name is present (ignoring ASCII case).
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.find_key(name).is_some()
    }

    /// Copy every entry of `other` into this map, overriding existing keys.
    pub fn merge(&mut self, other: &Self) {
        for (name, value) in other.iter() {
            self.insert(name, value);
        }
    }

    /// Iterate over `(name, value)` pairs in byte-wise key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn find_key(&self, name: &str) -> Option<&str> {
        if let Some((key, _)) = self.0.get_key_value(name) {
            return Some(key.as_str());
        }
        self.0
            .keys()
            .find(|key| key.eq_ignore_ascii_case(name))
            .map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for Headers
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Self::new();
        for (name, value) in iter {
            headers.insert(name, value);
        }
        headers
    }
}
