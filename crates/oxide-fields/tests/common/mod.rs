#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use oxide_fields::validation::{EmailValidator, RequiredValidator, Validator, ValidatorKind};
use oxide_fields::{Field, TextField};

pub const REQUIRED_MESSAGE: &str = "This field is required.";
pub const EMAIL_MESSAGE: &str = "Enter a valid email address.";

/// A text field guarded by Required then Email.
pub fn email_field(value: &str) -> TextField {
    TextField::new("email", "Email", value)
        .validator(RequiredValidator::new())
        .validator(EmailValidator::new())
}

/// Validator that always fails and counts its invocations.
pub struct CountingValidator {
    pub calls: Arc<AtomicUsize>,
    message: String,
}

impl CountingValidator {
    pub fn failing(message: &str) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let validator = Self {
            calls: Arc::clone(&calls),
            message: message.to_string(),
        };
        (validator, calls)
    }
}

impl Validator for CountingValidator {
    fn validate(&self, _value: &str) -> Result<(), String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(self.message.clone())
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Custom "must be non-empty" rule that opts into the required short-circuit.
pub struct NotBlank;

impl Validator for NotBlank {
    fn validate(&self, value: &str) -> Result<(), String> {
        if value.is_empty() {
            Err("Must not be blank.".to_string())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        "Must not be blank."
    }

    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Required
    }
}
