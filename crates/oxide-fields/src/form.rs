//! Form container and field group rendering.

use std::collections::HashMap;

use ironhtml::html;
use tracing::debug;

use crate::error::{FormError, Result, ValidationErrors};
use crate::fields::Field;

/// An ordered set of fields bound and validated together.
///
/// Submitted values are routed to fields by name through [`Field::is_name`].
/// Names are unique within a form.
#[derive(Default)]
pub struct Form {
    fields: Vec<Box<dyn Field>>,
}

impl std::fmt::Debug for Form {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Form")
            .field(
                "fields",
                &self.fields.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Form {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field to the form.
    ///
    /// Fails with [`FormError::DuplicateField`] when a field with the same
    /// name is already registered.
    pub fn field(mut self, field: impl Field + 'static) -> Result<Self> {
        if self.get(field.name()).is_some() {
            return Err(FormError::DuplicateField(field.name().to_string()));
        }
        self.fields.push(Box::new(field));
        Ok(self)
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns whether the form has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over the fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &(dyn Field + 'static)> {
        self.fields.iter().map(AsRef::as_ref)
    }

    /// Returns the field identified by `name`.
    pub fn get(&self, name: &str) -> Option<&dyn Field> {
        self.fields
            .iter()
            .find(|f| f.is_name(name))
            .map(AsRef::as_ref)
    }

    /// Returns the field identified by `name` mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut (dyn Field + 'static)> {
        self.fields
            .iter_mut()
            .find(|f| f.is_name(name))
            .map(AsMut::as_mut)
    }

    fn require_mut(&mut self, name: &str) -> Result<&mut (dyn Field + 'static)> {
        self.get_mut(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }

    /// Returns the current value of a field.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name).map(|field| field.value())
    }

    /// Sets the value of one field.
    pub fn set_value(&mut self, name: &str, value: &str) -> Result<()> {
        self.require_mut(name)?.set_value(value);
        Ok(())
    }

    /// Copies submitted values onto the fields.
    ///
    /// Fields without a submitted value keep their current value. Submitted
    /// keys that match no field are ignored.
    pub fn bind(&mut self, data: &HashMap<String, String>) {
        for (key, value) in data {
            match self.get_mut(key) {
                Some(field) => field.set_value(value),
                None => debug!(key = %key, "ignoring submitted value for unknown field"),
            }
        }
    }

    /// Validates every field. Returns whether all of them passed.
    pub fn validate(&mut self) -> bool {
        self.fields
            .iter_mut()
            .fold(true, |valid, field| field.validate() && valid)
    }

    /// Records an error on a field, typically from a cross-field check run
    /// after [`validate`](Form::validate).
    pub fn add_error(&mut self, name: &str, message: &str) -> Result<()> {
        self.require_mut(name)?.add_error(message);
        Ok(())
    }

    /// Returns whether any field has errors.
    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|f| f.has_errors())
    }

    /// Collects the current errors of every field.
    pub fn errors(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for field in &self.fields {
            errors.extend(field.name(), field.errors());
        }
        errors
    }

    /// Collects the current errors as a JSON object keyed by field name.
    pub fn errors_json(&self) -> Result<String> {
        self.errors().to_json()
    }

    /// Renders one field as a group. See [`render_field`].
    pub fn render_field(&self, name: &str, attrs: &[&str]) -> Result<String> {
        self.get(name)
            .map(|field| render_field(field, attrs))
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }

    /// Renders every field as a group, in declaration order.
    pub fn render_fields(&self) -> String {
        self.fields
            .iter()
            .map(|field| render_field(field.as_ref(), &[]))
            .collect()
    }
}

/// Renders a field as label, input and errors inside a group wrapper.
///
/// The wrapper carries `has-error` when the field has errors. Hidden fields
/// are rendered without wrapper or label: the bare input followed by its
/// errors. `attrs` go to the input element.
pub fn render_field(field: &dyn Field, attrs: &[&str]) -> String {
    if field.is_hidden() {
        return format!("{}{}", field.render_input(attrs), field.render_errors());
    }

    let group_class = if field.has_errors() {
        "form-group has-error".to_string()
    } else {
        "form-group".to_string()
    };

    html! { div.class(#group_class) }
        .raw(field.render_label(&[r#"class="control-label""#]))
        .raw(field.render_input(attrs))
        .raw(field.render_errors())
        .render()
}
