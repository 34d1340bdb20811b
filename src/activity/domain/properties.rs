//! Free-form structured context attached to activity records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Ordered mapping from string keys to JSON values.
///
/// Keys are unique; inserting an existing key replaces its value in place
/// and keeps its original position.
///
/// Conversion from an arbitrary [`Value`] follows collection coercion rules:
/// objects are taken as-is, `null` yields an empty mapping, arrays are keyed
/// by index, and any other scalar lands under key `"0"`.
///
/// # Examples
///
/// ```
/// use activitylog::activity::domain::Properties;
/// use serde_json::json;
///
/// let mut properties = Properties::from(json!({"a": 1}));
/// properties.insert("a", 2);
/// properties.insert("b", "x");
///
/// assert_eq!(properties.len(), 2);
/// assert_eq!(properties.get("a"), Some(&json!(2)));
/// assert_eq!(Properties::from(json!(["x"])).get("0"), Some(&json!("x")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties(Map<String, Value>);

impl Properties {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a single key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no keys are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Returns the underlying map.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Returns the mapping as a JSON object for path lookups.
    #[must_use]
    pub fn to_structure(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

impl From<Map<String, Value>> for Properties {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Value> for Properties {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            Value::Null => Self::default(),
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| (index.to_string(), item))
                .collect(),
            scalar => Self(Map::from_iter([("0".to_owned(), scalar)])),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Properties
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl From<Properties> for Value {
    fn from(properties: Properties) -> Self {
        Self::Object(properties.0)
    }
}
