//! Field validators.
//!
//! A validator is a stateless rule over a field's string value. Validators
//! hold no mutable state, so a single instance can be shared between fields
//! and threads through an `Arc<dyn Validator>`.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;

// Local part: alphanumeric runs joined by a single `.`, `_` or `-`.
// Domain: two or more dot-separated alphanumeric labels, inner hyphens allowed.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9]+(?:[._-][A-Za-z0-9]+)*@[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*(?:\.[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*)+$",
    )
    .expect("EMAIL_REGEX: invalid regex pattern")
});

static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^https?://[a-zA-Z0-9]([a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])?(\.[a-zA-Z0-9]([a-zA-Z0-9\-]*[a-zA-Z0-9])?)*(:[0-9]{1,5})?(/[^\s?#]*)?(\?[^\s#]*)?(#[^\s]*)?$",
    )
    .expect("URL_REGEX: invalid regex pattern")
});

/// How a validator takes part in a field's validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatorKind {
    /// Guards "must be non-empty". A failing required validator suppresses
    /// every other validator of the field for that pass.
    Required,
    /// Checks the shape or content of a value. Failures accumulate.
    Format,
}

/// Trait for field validators.
pub trait Validator: Send + Sync {
    /// Validates a value and returns the error message if it is invalid.
    fn validate(&self, value: &str) -> std::result::Result<(), String>;

    /// Returns the error message for this validator.
    fn message(&self) -> &str;

    /// Returns how this validator takes part in validation.
    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Format
    }
}

/// Validator that requires a value that is non-empty once trimmed.
#[derive(Debug, Clone)]
pub struct RequiredValidator {
    message: String,
}

impl RequiredValidator {
    /// Creates a new RequiredValidator with default message.
    pub fn new() -> Self {
        Self {
            message: "This field is required.".to_string(),
        }
    }

    /// Creates a new RequiredValidator with custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for RequiredValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for RequiredValidator {
    fn validate(&self, value: &str) -> std::result::Result<(), String> {
        if value.trim().is_empty() {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Required
    }
}

/// Validator for email addresses.
///
/// Accepts a practical subset of addresses, not the full RFC 5322 grammar:
///
/// ```
/// use oxide_fields::validation::{EmailValidator, Validator};
///
/// let v = EmailValidator::new();
/// assert!(v.validate("aa.bb@example.com").is_ok());
/// assert!(v.validate("aa.@xx.com").is_err());
/// assert!(v.validate("aa@example").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct EmailValidator {
    message: String,
}

impl EmailValidator {
    /// Creates a new EmailValidator with default message.
    pub fn new() -> Self {
        Self {
            message: "Enter a valid email address.".to_string(),
        }
    }

    /// Creates a new EmailValidator with custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for EmailValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for EmailValidator {
    fn validate(&self, value: &str) -> std::result::Result<(), String> {
        if EMAIL_REGEX.is_match(value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator that enforces a maximum length, counted in characters.
#[derive(Debug, Clone)]
pub struct MaxLengthValidator {
    max_length: usize,
    message: String,
}

impl MaxLengthValidator {
    /// Creates a new MaxLengthValidator.
    pub fn new(max_length: usize) -> Self {
        Self {
            max_length,
            message: format!("Ensure this value has at most {max_length} characters."),
        }
    }

    /// Creates a new MaxLengthValidator with custom message.
    pub fn with_message(max_length: usize, message: impl Into<String>) -> Self {
        Self {
            max_length,
            message: message.into(),
        }
    }
}

impl Validator for MaxLengthValidator {
    fn validate(&self, value: &str) -> std::result::Result<(), String> {
        if value.chars().count() > self.max_length {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator that enforces a minimum length, counted in characters.
#[derive(Debug, Clone)]
pub struct MinLengthValidator {
    min_length: usize,
    message: String,
}

impl MinLengthValidator {
    /// Creates a new MinLengthValidator.
    pub fn new(min_length: usize) -> Self {
        Self {
            min_length,
            message: format!("Ensure this value has at least {min_length} characters."),
        }
    }

    /// Creates a new MinLengthValidator with custom message.
    pub fn with_message(min_length: usize, message: impl Into<String>) -> Self {
        Self {
            min_length,
            message: message.into(),
        }
    }
}

impl Validator for MinLengthValidator {
    fn validate(&self, value: &str) -> std::result::Result<(), String> {
        if value.chars().count() < self.min_length {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator for http and https URLs.
#[derive(Debug, Clone)]
pub struct UrlValidator {
    message: String,
}

impl UrlValidator {
    /// Creates a new UrlValidator with default message.
    pub fn new() -> Self {
        Self {
            message: "Enter a valid URL.".to_string(),
        }
    }

    /// Creates a new UrlValidator with custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for UrlValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for UrlValidator {
    fn validate(&self, value: &str) -> std::result::Result<(), String> {
        if URL_REGEX.is_match(value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator using a custom regex pattern.
///
/// The pattern is searched, not anchored; add `^`/`$` for a full match.
#[derive(Debug, Clone)]
pub struct RegexValidator {
    pattern: Regex,
    message: String,
}

impl RegexValidator {
    /// Creates a new RegexValidator.
    ///
    /// Fails with [`FormError::InvalidPattern`](crate::FormError::InvalidPattern)
    /// when the pattern does not compile.
    pub fn new(pattern: &str, message: impl Into<String>) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            message: message.into(),
        })
    }
}

impl Validator for RegexValidator {
    fn validate(&self, value: &str) -> std::result::Result<(), String> {
        if self.pattern.is_match(value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator that accepts only values from a fixed set.
#[derive(Debug, Clone)]
pub struct AnyOfValidator {
    values: Vec<String>,
    message: String,
}

impl AnyOfValidator {
    /// Creates a new AnyOfValidator with default message.
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
            message: "Select a valid choice.".to_string(),
        }
    }

    /// Replaces the error message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl Validator for AnyOfValidator {
    fn validate(&self, value: &str) -> std::result::Result<(), String> {
        if self.values.iter().any(|v| v == value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}
