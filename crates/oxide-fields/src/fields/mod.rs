//! Form field types.
//!
//! Every variant composes a [`FieldCore`] holding the shared state (name,
//! label, value, validators, errors) and implements [`Field`] by supplying
//! its own input markup.

mod hidden;
mod select;
mod text;

pub use hidden::HiddenField;
pub use select::{Choice, SelectField};
pub use text::{PasswordField, TextArea, TextField};

use std::sync::Arc;

use ironhtml::html;
use tracing::{debug, trace};

use crate::markup::{extra_attrs, html_escape};
use crate::validation::{Validator, ValidatorKind};

/// State shared by every field variant.
pub struct FieldCore {
    name: String,
    label: String,
    value: String,
    validators: Vec<Arc<dyn Validator>>,
    errors: Vec<String>,
}

impl std::fmt::Debug for FieldCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldCore")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("value", &self.value)
            .field("validators", &self.validators.len())
            .field("errors", &self.errors)
            .finish()
    }
}

impl FieldCore {
    /// Creates the state for a field without validators.
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            value: value.into(),
            validators: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub(crate) fn push_validator(&mut self, validator: Arc<dyn Validator>) {
        self.validators.push(validator);
    }

    /// Returns the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the current value.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Returns the validators in declaration order.
    pub fn validators(&self) -> &[Arc<dyn Validator>] {
        &self.validators
    }

    /// Returns the error messages in the order they were added.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Appends an error message.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Discards every error message.
    pub fn reset_errors(&mut self) {
        self.errors.clear();
    }

    /// Runs the validator chain over the current value.
    ///
    /// Errors from a previous pass are discarded first. A failing
    /// [`ValidatorKind::Required`] validator records only its own message and
    /// stops the pass. Otherwise every validator runs in order and each
    /// failure records its message.
    pub fn validate(&mut self) -> bool {
        self.errors.clear();

        let required_failure = self
            .validators
            .iter()
            .filter(|v| v.kind() == ValidatorKind::Required)
            .find_map(|v| v.validate(&self.value).err());

        if let Some(message) = required_failure {
            trace!(field = %self.name, "required value missing, skipping other validators");
            self.errors.push(message);
            return false;
        }

        for validator in &self.validators {
            if let Err(message) = validator.validate(&self.value) {
                self.errors.push(message);
            }
        }

        if !self.errors.is_empty() {
            debug!(field = %self.name, errors = self.errors.len(), "field failed validation");
        }

        self.errors.is_empty()
    }

    /// Renders `<label for="name" ...>label</label>`.
    pub fn render_label(&self, attrs: &[&str]) -> String {
        format!(
            r#"<label for="{}"{}>{}</label>"#,
            html_escape(&self.name),
            extra_attrs(attrs),
            html_escape(&self.label)
        )
    }

    /// Renders each error as its own `<span class="help-block">`.
    pub fn render_errors(&self) -> String {
        self.errors
            .iter()
            .map(|error| {
                let message = error.clone();
                html! { span.class("help-block") { #message } }.render()
            })
            .collect()
    }
}

/// A named, labeled form input that renders itself and validates its value.
///
/// Fields hold per-request state (value and errors) and are meant to live
/// for one request. Validators are shared through `Arc` and may outlive them.
///
/// Names, labels, values and error messages are HTML-escaped when rendered.
/// Extra attributes passed to the `render_*` methods are raw markup
/// fragments, emitted verbatim.
pub trait Field: Send + Sync {
    /// Returns the shared field state.
    fn core(&self) -> &FieldCore;

    /// Returns the shared field state mutably.
    fn core_mut(&mut self) -> &mut FieldCore;

    /// Renders the variant-specific input element.
    fn render_input(&self, attrs: &[&str]) -> String;

    /// Returns the HTML input type (`text`, `password`, `textarea`, ...).
    fn input_type(&self) -> &'static str;

    /// Returns whether the field is rendered without label or group wrapper.
    fn is_hidden(&self) -> bool {
        false
    }

    /// Adds a validator while building the field.
    #[must_use]
    fn validator(self, validator: impl Validator + 'static) -> Self
    where
        Self: Sized,
    {
        self.shared_validator(Arc::new(validator))
    }

    /// Adds a validator instance that may also be used by other fields.
    #[must_use]
    fn shared_validator(mut self, validator: Arc<dyn Validator>) -> Self
    where
        Self: Sized,
    {
        self.core_mut().push_validator(validator);
        self
    }

    fn name(&self) -> &str {
        self.core().name()
    }

    fn label(&self) -> &str {
        self.core().label()
    }

    fn render_label(&self, attrs: &[&str]) -> String {
        self.core().render_label(attrs)
    }

    /// Validates the current value. See [`FieldCore::validate`].
    fn validate(&mut self) -> bool {
        self.core_mut().validate()
    }

    fn value(&self) -> &str {
        self.core().value()
    }

    /// Stores the value verbatim.
    fn set_value(&mut self, value: &str) {
        self.core_mut().set_value(value);
    }

    /// Returns whether this field is identified by `name`.
    fn is_name(&self, name: &str) -> bool {
        self.core().name() == name
    }

    fn has_errors(&self) -> bool {
        !self.core().errors().is_empty()
    }

    fn errors(&self) -> &[String] {
        self.core().errors()
    }

    fn render_errors(&self) -> String {
        self.core().render_errors()
    }

    /// Records an error that no validator produced, such as a cross-field
    /// check. The next [`validate`](Field::validate) call discards it.
    fn add_error(&mut self, message: &str) {
        self.core_mut().add_error(message);
    }

    fn reset_errors(&mut self) {
        self.core_mut().reset_errors();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{EmailValidator, MinLengthValidator, RequiredValidator};

    #[test]
    fn test_core_validate_without_validators() {
        let mut core = FieldCore::new("note", "Note", "");
        assert!(core.validate());
        assert!(core.errors().is_empty());
    }

    #[test]
    fn test_core_required_short_circuit() {
        let mut core = FieldCore::new("email", "Email", "   ");
        core.push_validator(Arc::new(EmailValidator::new()));
        core.push_validator(Arc::new(RequiredValidator::new()));

        assert!(!core.validate());
        assert_eq!(core.errors(), ["This field is required."]);
    }

    #[test]
    fn test_core_collects_all_format_failures() {
        let mut core = FieldCore::new("email", "Email", "x");
        core.push_validator(Arc::new(EmailValidator::new()));
        core.push_validator(Arc::new(MinLengthValidator::new(3)));

        assert!(!core.validate());
        assert_eq!(
            core.errors(),
            [
                "Enter a valid email address.",
                "Ensure this value has at least 3 characters."
            ]
        );
    }

    #[test]
    fn test_core_render_label() {
        let core = FieldCore::new("email", "E-mail <required>", "");
        assert_eq!(
            core.render_label(&[r#"class="control-label""#]),
            r#"<label for="email" class="control-label">E-mail &lt;required&gt;</label>"#
        );
        assert_eq!(
            core.render_label(&[]),
            r#"<label for="email">E-mail &lt;required&gt;</label>"#
        );
    }

    #[test]
    fn test_core_render_errors_is_empty_without_errors() {
        let core = FieldCore::new("email", "Email", "");
        assert_eq!(core.render_errors(), "");
    }

    #[test]
    fn test_core_debug_hides_validators() {
        let mut core = FieldCore::new("email", "Email", "");
        core.push_validator(Arc::new(EmailValidator::new()));
        let debug = format!("{core:?}");
        assert!(debug.contains("validators: 1"));
    }
}
