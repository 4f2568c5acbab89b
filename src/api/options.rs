use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Prefix marking an option value as a JavaScript callback to emit unquoted.
pub const RAW_EXPRESSION_PREFIX: &str = "function(";

/// Returns `true` when `value` is a string starting with `function(`, ignoring ASCII case.
#[must_use]
pub fn is_raw_expression(value: &Value) -> bool {
    match value {
        Value::String(text) => text
            .get(..RAW_EXPRESSION_PREFIX.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(RAW_EXPRESSION_PREFIX)),
        _ => false,
    }
}

/// Caller-supplied top-level chart options.
///
/// Keys keep insertion order; merging overwrites a key in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChartOptions {
    entries: IndexMap<String, Value>,
}

impl ChartOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flat merge: keys in `patch` replace existing keys of the same name.
    pub fn merge<I, K, V>(&mut self, patch: I) -> &Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        for (key, value) in patch {
            self.entries.insert(key.into(), value.into());
        }
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.entries.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ChartOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = Self::new();
        options.merge(iter);
        options
    }
}

impl<'a> IntoIterator for &'a ChartOptions {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
