//! Text field types.

use super::{Field, FieldCore};
use crate::markup::{extra_attrs, html_escape};

/// Single-line text input.
#[derive(Debug)]
pub struct TextField {
    core: FieldCore,
}

impl TextField {
    /// Creates a text field with an initial value.
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            core: FieldCore::new(name, label, value),
        }
    }
}

impl Field for TextField {
    fn core(&self) -> &FieldCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FieldCore {
        &mut self.core
    }

    fn render_input(&self, attrs: &[&str]) -> String {
        let name = html_escape(self.core.name());
        format!(
            r#"<input type="text" value="{}" name="{name}" id="{name}"{}>"#,
            html_escape(self.core.value()),
            extra_attrs(attrs)
        )
    }

    fn input_type(&self) -> &'static str {
        "text"
    }
}

/// Password input.
///
/// The submitted value is kept for validation but never rendered back.
#[derive(Debug)]
pub struct PasswordField {
    core: FieldCore,
}

impl PasswordField {
    /// Creates an empty password field.
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            core: FieldCore::new(name, label, ""),
        }
    }
}

impl Field for PasswordField {
    fn core(&self) -> &FieldCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FieldCore {
        &mut self.core
    }

    fn render_input(&self, attrs: &[&str]) -> String {
        let name = html_escape(self.core.name());
        format!(
            r#"<input type="password" name="{name}" id="{name}"{}>"#,
            extra_attrs(attrs)
        )
    }

    fn input_type(&self) -> &'static str {
        "password"
    }
}

/// Multi-line text input. The value is rendered as element content.
#[derive(Debug)]
pub struct TextArea {
    core: FieldCore,
}

impl TextArea {
    /// Creates a textarea with an initial value.
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            core: FieldCore::new(name, label, value),
        }
    }
}

impl Field for TextArea {
    fn core(&self) -> &FieldCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FieldCore {
        &mut self.core
    }

    fn render_input(&self, attrs: &[&str]) -> String {
        let name = html_escape(self.core.name());
        format!(
            r#"<textarea id="{name}" name="{name}"{}>{}</textarea>"#,
            extra_attrs(attrs),
            html_escape(self.core.value())
        )
    }

    fn input_type(&self) -> &'static str {
        "textarea"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{MinLengthValidator, RequiredValidator};

    #[test]
    fn test_text_field_render_input() {
        let field = TextField::new("username", "Username", "alice");
        assert_eq!(
            field.render_input(&[r#"class="form-control""#]),
            r#"<input type="text" value="alice" name="username" id="username" class="form-control">"#
        );
    }

    #[test]
    fn test_text_field_is_not_hidden() {
        assert!(!TextField::new("username", "Username", "").is_hidden());
        assert!(!PasswordField::new("password", "Password").is_hidden());
    }

    #[test]
    fn test_text_field_escapes_value() {
        let mut field = TextField::new("q", "Search", "");
        field.set_value(r#""><script>alert(1)</script>"#);
        let html = field.render_input(&[]);
        assert!(html.contains(r#"value="&quot;&gt;&lt;script&gt;alert(1)&lt;/script&gt;""#));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_password_field_never_renders_value() {
        let mut field = PasswordField::new("password", "Password")
            .validator(RequiredValidator::new())
            .validator(MinLengthValidator::new(8));
        field.set_value("hunter2hunter2");

        assert!(field.validate());
        assert_eq!(
            field.render_input(&[]),
            r#"<input type="password" name="password" id="password">"#
        );
        assert_eq!(field.value(), "hunter2hunter2");
    }

    #[test]
    fn test_textarea_renders_content() {
        let field = TextArea::new("bio", "Bio", "a < b");
        assert_eq!(
            field.render_input(&[r#"rows="4""#]),
            r#"<textarea id="bio" name="bio" rows="4">a &lt; b</textarea>"#
        );
        assert_eq!(field.input_type(), "textarea");
    }
}
