//! Field lookup for configuration documents.
//!
//! The document reader only collects raw text. Deciding whether a field falls
//! back to a default or is reported as missing happens here, through an
//! explicit `FieldValue` rather than by matching on error conditions.

use std::collections::BTreeMap;

use super::ConfigError;

/// Outcome of looking a field up in a configuration document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// The field exists and has non-blank text (already trimmed).
    Present(String),
    /// The element exists but its text is blank.
    Empty,
    /// The element does not exist.
    Missing,
}

impl FieldValue {
    /// Apply a registered default for `Empty` and `Missing`.
    pub fn or_default(self, default: &str) -> String {
        match self {
            FieldValue::Present(value) => value,
            FieldValue::Empty | FieldValue::Missing => default.to_string(),
        }
    }

    /// Require a value, reporting which field was missing or empty.
    pub fn required(self, field: &'static str) -> Result<String, ConfigError> {
        match self {
            FieldValue::Present(value) => Ok(value),
            FieldValue::Empty => Err(ConfigError::EmptyField { field }),
            FieldValue::Missing => Err(ConfigError::MissingField { field }),
        }
    }
}

/// Top-level fields of a configuration document, keyed by element name.
///
/// Only the first occurrence of each element is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFields {
    values: BTreeMap<String, String>,
}

impl ConfigFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a field unless it was already seen.
    pub fn insert_first(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.values.entry(name.into()).or_insert_with(|| text.into());
    }

    /// Append text to an already recorded field.
    pub(crate) fn append_text(&mut self, name: &str, text: &str) {
        if let Some(value) = self.values.get_mut(name) {
            value.push_str(text);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Look up a field as trimmed text.
    pub fn lookup(&self, name: &str) -> FieldValue {
        match self.values.get(name) {
            None => FieldValue::Missing,
            Some(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    FieldValue::Empty
                } else {
                    FieldValue::Present(trimmed.to_string())
                }
            }
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ConfigFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = ConfigFields::new();
        for (name, text) in iter {
            fields.insert_first(name, text);
        }
        fields
    }
}
