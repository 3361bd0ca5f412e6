//! Ordered property bags.

use serde_json::Value;

use crate::error::{ConfigError, ConfigResult};
use crate::value::{json_kind, PropValue};

/// An ordered map from setter name to value.
///
/// Keys are unique and iterate in insertion order, which is the order
/// setters are applied in. Re-inserting a key replaces its value without
/// moving it.
///
/// # Example
///
/// ```rust
/// use chartkit_props::PropertyBag;
///
/// let props = PropertyBag::new()
///     .with("domain", vec![0.0, 100.0])
///     .with("range", vec![0.0, 500.0])
///     .with("domain", vec![0.0, 10.0]);
///
/// assert_eq!(props.keys().collect::<Vec<_>>(), ["domain", "range"]);
/// ```
#[derive(Debug, Default)]
pub struct PropertyBag {
    entries: Vec<(String, PropValue)>,
}

impl PropertyBag {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a property, builder style.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds or replaces a property, returning the previous value.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<PropValue>,
    ) -> Option<PropValue> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns true if the bag holds `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns the number of properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the bag is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over keys in application order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Parses a JSON object into a bag, keeping key order.
    ///
    /// Numbers become `f64`, booleans `bool`, strings `String` and arrays of
    /// numbers `Vec<f64>`. Anything else, including `null`, is kept as a
    /// [`serde_json::Value`] for the setter to interpret.
    pub fn from_json(json: &Value) -> ConfigResult<Self> {
        let Value::Object(map) = json else {
            return Err(ConfigError::invalid_bag(format!(
                "expected a JSON object, found {}",
                json_kind(json)
            )));
        };

        Ok(map
            .iter()
            .map(|(key, value)| (key.clone(), json_to_prop(value)))
            .collect())
    }

    /// Parses a JSON string into a bag.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| ConfigError::invalid_bag(e.to_string()))?;
        Self::from_json(&value)
    }
}

fn json_to_prop(value: &Value) -> PropValue {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(f) => PropValue::new(f),
            None => PropValue::new(value.clone()),
        },
        Value::Bool(b) => PropValue::new(*b),
        Value::String(s) => PropValue::new(s.clone()),
        Value::Array(items) => {
            let numbers: Option<Vec<f64>> = items.iter().map(Value::as_f64).collect();
            match numbers {
                Some(list) => PropValue::new(list),
                None => PropValue::new(value.clone()),
            }
        }
        Value::Null | Value::Object(_) => PropValue::new(value.clone()),
    }
}

impl<K: Into<String>, V: Into<PropValue>> FromIterator<(K, V)> for PropertyBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bag = Self::new();
        for (k, v) in iter {
            bag.insert(k, v);
        }
        bag
    }
}

impl<K: Into<String>, V: Into<PropValue>> Extend<(K, V)> for PropertyBag {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl IntoIterator for PropertyBag {
    type Item = (String, PropValue);
    type IntoIter = std::vec::IntoIter<(String, PropValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
