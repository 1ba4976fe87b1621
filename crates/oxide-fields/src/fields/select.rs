//! Select field type.

use serde::{Deserialize, Serialize};

use super::{Field, FieldCore};
use crate::markup::{extra_attrs, html_escape};
use crate::validation::AnyOfValidator;

/// A selectable option: submitted value and display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl Choice {
    /// Creates a choice from its submitted value and display label.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

impl<V: Into<String>, L: Into<String>> From<(V, L)> for Choice {
    fn from((value, label): (V, L)) -> Self {
        Self::new(value, label)
    }
}

/// Dropdown over a fixed list of choices.
///
/// The option whose value equals the field value is rendered `selected`.
#[derive(Debug)]
pub struct SelectField {
    core: FieldCore,
    choices: Vec<Choice>,
}

impl SelectField {
    /// Creates a select field with its choices and default value.
    pub fn new<I, C>(
        name: impl Into<String>,
        label: impl Into<String>,
        choices: I,
        default_value: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Choice>,
    {
        Self {
            core: FieldCore::new(name, label, default_value),
            choices: choices.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the choices in declaration order.
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Rejects submitted values that are not one of the declared choices.
    #[must_use]
    pub fn restrict_to_choices(self) -> Self {
        let allowed = AnyOfValidator::new(self.choices.iter().map(|c| c.value.clone()));
        self.validator(allowed)
    }
}

impl Field for SelectField {
    fn core(&self) -> &FieldCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FieldCore {
        &mut self.core
    }

    fn render_input(&self, attrs: &[&str]) -> String {
        let name = html_escape(self.core.name());
        let options: String = self
            .choices
            .iter()
            .map(|choice| {
                let selected = if choice.value == self.core.value() {
                    " selected"
                } else {
                    ""
                };
                format!(
                    r#"<option value="{}"{selected}>{}</option>"#,
                    html_escape(&choice.value),
                    html_escape(&choice.label)
                )
            })
            .collect();

        format!(
            r#"<select id="{name}" name="{name}"{}>{options}</select>"#,
            extra_attrs(attrs)
        )
    }

    fn input_type(&self) -> &'static str {
        "select"
    }
}
