//! Ordered request parameters.
//!
//! SendGrid's v2 API takes flat form-style parameters, with the exception
//! of a few list-valued fields (such as the IPs assigned to a subuser)
//! which travel as repeated `key[]=value` pairs.

/// A single parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// A scalar value
    Single(String),
    /// A list value, encoded as repeated `key[]` pairs
    List(Vec<String>),
}

impl ParamValue {
    /// Get the value as a string slice, if it is a scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Single(s) => Some(s),
            ParamValue::List(_) => None,
        }
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Single(s)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Single(s.to_string())
    }
}

impl From<&String> for ParamValue {
    fn from(s: &String) -> Self {
        ParamValue::Single(s.clone())
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Single(if b { "1" } else { "0" }.to_string())
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(v: Vec<String>) -> Self {
        ParamValue::List(v)
    }
}

/// An insertion-ordered parameter mapping.
///
/// Keys are unique: setting a key that is already present replaces its
/// value without moving it.
///
/// # Example
///
/// ```
/// use sendgrid_subusers::Params;
///
/// let settings = Params::new()
///     .with("url", "https://example.com/events")
///     .with("bounce", true)
///     .with("open", false);
///
/// assert_eq!(settings.get_str("bounce"), Some("1"));
/// assert_eq!(settings.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(String, ParamValue)>,
}

impl Params {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` and return the mapping, for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set `key` to a list value and return the mapping, for chaining.
    pub fn with_list<I, S>(self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        self.with(key, values)
    }

    /// Set `key`, replacing any existing value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Overlay `other` onto this mapping. Values in `other` win.
    pub fn merge(mut self, other: &Params) -> Self {
        for (key, value) in &other.entries {
            self.insert(key.clone(), value.clone());
        }
        self
    }

    /// Look up a value.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Look up a scalar value.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ParamValue::as_str)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Flatten into wire pairs. Lists expand to one `key[]` pair per item.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.entries.len());
        for (key, value) in &self.entries {
            match value {
                ParamValue::Single(s) => pairs.push((key.clone(), s.clone())),
                ParamValue::List(items) => {
                    let list_key = format!("{}[]", key);
                    pairs.extend(items.iter().map(|item| (list_key.clone(), item.clone())));
                }
            }
        }
        pairs
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}
