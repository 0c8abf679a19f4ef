//! Submitted Form Data
//!
//! Opaque mapping from field name to raw value, as produced by a form
//! decoder: string, bool, and number leaves. The module never owns the
//! source; callers hand a decoded request body (or a hand-built map) in.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::account::AccountId;

/// Raw submitted values, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmittedData(BTreeMap<String, Value>);

impl SubmittedData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Text rendition of a value, if the key is present.
    ///
    /// Booleans render as `"1"` / `""` so checkbox submissions behave like
    /// the string values a form encoder produces; an unchecked box counts as
    /// empty for required-field purposes.
    pub fn text(&self, name: &str) -> Option<String> {
        self.0.get(name).map(Self::render)
    }

    /// Text rendition of a value, empty string when absent.
    pub fn text_or_empty(&self, name: &str) -> String {
        self.text(name).unwrap_or_default()
    }

    /// Whether the value is present and affirmative.
    ///
    /// Affirmative: `true`, a nonzero number, or a non-empty string other
    /// than `"0"`, `"no"`, `"false"`, `"off"` (case-insensitive).
    pub fn is_truthy(&self, name: &str) -> bool {
        match self.0.get(name) {
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            Some(Value::String(s)) => {
                let s = s.trim();
                !s.is_empty() && !matches!(s.to_ascii_lowercase().as_str(), "0" | "no" | "false" | "off")
            }
            _ => false,
        }
    }

    /// Read a value as an account id (integer or numeric string).
    pub fn account_id(&self, name: &str) -> Option<AccountId> {
        match self.0.get(name)? {
            Value::Number(n) => n.as_i64().filter(|id| *id > 0).map(AccountId::new),
            Value::String(s) => s.trim().parse::<i64>().ok().filter(|id| *id > 0).map(AccountId::new),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn render(value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            Value::Bool(true) => "1".to_string(),
            Value::Bool(false) => String::new(),
            Value::Number(n) => n.to_string(),
            _ => String::new(),
        }
    }
}

impl From<BTreeMap<String, Value>> for SubmittedData {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for SubmittedData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
