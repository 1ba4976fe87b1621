//! Error types for fields and forms.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

/// Errors raised around the field core.
///
/// Validation failures are never reported through this type: they are
/// collected as messages on the field itself.
#[derive(Debug, Error)]
pub enum FormError {
    /// No field with the given name is registered.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// A field with the same name is already registered in the form.
    #[error("duplicate field: {0}")]
    DuplicateField(String),

    /// A user-supplied validation pattern failed to compile.
    #[error("invalid validation pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Collected errors could not be serialized.
    #[error("failed to serialize validation errors: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Validation messages collected from several fields, keyed by field name.
///
/// Keys are ordered so that serialized output is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    /// Messages keyed by field name.
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a message for a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Appends every message of `messages` for a field. Empty input is a no-op.
    pub fn extend(&mut self, field: &str, messages: &[String]) {
        if messages.is_empty() {
            return;
        }
        self.errors
            .entry(field.to_string())
            .or_default()
            .extend(messages.iter().cloned());
    }

    /// Returns whether no field has errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of fields with errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns the messages for one field.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(Vec::as_slice)
    }

    /// Returns all messages as `(field, message)` pairs.
    pub fn all_errors(&self) -> Vec<(&str, &str)> {
        self.errors
            .iter()
            .flat_map(|(field, messages)| {
                messages
                    .iter()
                    .map(move |msg| (field.as_str(), msg.as_str()))
            })
            .collect()
    }

    /// Serializes the collection as a JSON object of message arrays.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (field, messages) in &self.errors {
            for message in messages {
                writeln!(f, "{field}: {message}")?;
            }
        }
        Ok(())
    }
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get() {
        let mut errors = ValidationErrors::new();
        errors.add("email", "Enter a valid email address.");
        errors.add("email", "Too long.");

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("email").map(<[String]>::len), Some(2));
        assert!(errors.get("name").is_none());
    }

    #[test]
    fn test_extend_ignores_empty() {
        let mut errors = ValidationErrors::new();
        errors.extend("name", &[]);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_to_json_is_ordered() {
        let mut errors = ValidationErrors::new();
        errors.add("zip", "Required.");
        errors.add("city", "Required.");

        let json = errors.to_json().unwrap();
        assert_eq!(json, r#"{"city":["Required."],"zip":["Required."]}"#);
    }

    #[test]
    fn test_display() {
        let mut errors = ValidationErrors::new();
        errors.add("name", "This field is required.");
        assert_eq!(errors.to_string(), "name: This field is required.\n");
    }
}
