//! Tests for field markup.

mod common;
use common::*;

use oxide_fields::{Choice, Field, HiddenField, PasswordField, SelectField, TextArea, TextField};

#[test]
fn label_references_field_name() {
    let field = TextField::new("email", "Email address", "");
    assert_eq!(
        field.render_label(&[r#"class="control-label""#]),
        r#"<label for="email" class="control-label">Email address</label>"#
    );
}

#[test]
fn text_input_presets_value() {
    let field = TextField::new("city", "City", "Ghent");
    assert_eq!(
        field.render_input(&[]),
        r#"<input type="text" value="Ghent" name="city" id="city">"#
    );
}

#[test]
fn extra_attrs_are_appended_in_order() {
    let field = TextField::new("city", "City", "");
    let html = field.render_input(&["required", r#"placeholder="City""#]);
    assert!(html.ends_with(r#" required placeholder="City">"#));
}

#[test]
fn password_value_is_write_only() {
    let mut field = PasswordField::new("password", "Password");
    field.set_value("s3cret");
    let html = field.render_input(&[]);
    assert!(!html.contains("s3cret"));
    assert!(!html.contains("value="));
}

#[test]
fn textarea_value_is_element_content() {
    let field = TextArea::new("body", "Body", "Hello");
    assert_eq!(
        field.render_input(&[]),
        r#"<textarea id="body" name="body">Hello</textarea>"#
    );
}

#[test]
fn select_marks_default_choice() {
    let field = SelectField::new(
        "num",
        "Number",
        [Choice::new("1", "One"), Choice::new("2", "Two")],
        "2",
    );
    let html = field.render_input(&[]);

    assert!(html.contains(r#"<option value="2" selected>Two</option>"#));
    assert!(html.contains(r#"<option value="1">One</option>"#));
    assert_eq!(html.matches("selected").count(), 1);
}

#[test]
fn hidden_input_carries_value() {
    let field = HiddenField::new("id", "42");
    assert_eq!(
        field.render_input(&[]),
        r#"<input type="hidden" value="42" name="id" id="id">"#
    );
}

#[test]
fn errors_render_one_span_each() {
    let mut field = TextField::new("code", "Code", "x");
    field.add_error("first");
    field.add_error("second");

    let html = field.render_errors();
    assert_eq!(html.matches("help-block").count(), 2);
    assert!(html.find("first").unwrap() < html.find("second").unwrap());
}

#[test]
fn markup_in_value_is_escaped_but_stored_verbatim() {
    let payload = "<script>alert(1);</script>";
    let mut field = email_field(payload);

    assert_eq!(field.value(), payload);
    assert!(!field.render_input(&[]).contains(payload));
    assert!(field.render_input(&[]).contains("&lt;script&gt;"));

    assert!(!field.validate());
    assert_eq!(field.errors(), [EMAIL_MESSAGE]);
}
