//! # oxide-fields
//!
//! Form fields for server-rendered HTML forms.
//!
//! This crate provides:
//! - Field types: text, password, textarea, select and hidden
//! - Validator chains with a required short-circuit
//! - A small [`Form`] container that routes submitted values by field name
//! - Markup fragments for labels, inputs and error messages
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_fields::{Field, TextField};
//! use oxide_fields::validation::{EmailValidator, RequiredValidator};
//!
//! let mut email = TextField::new("email", "Email", "")
//!     .validator(RequiredValidator::new())
//!     .validator(EmailValidator::new());
//!
//! // An empty value only reports the required message.
//! assert!(!email.validate());
//! assert_eq!(email.errors(), ["This field is required."]);
//!
//! email.set_value("user@example.com");
//! assert!(email.validate());
//! assert!(!email.has_errors());
//!
//! let html = email.render_input(&[r#"class="form-control""#]);
//! assert!(html.contains(r#"value="user@example.com""#));
//! ```
//!
//! ## Forms
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use oxide_fields::{Choice, Field, Form, PasswordField, SelectField, TextField};
//! use oxide_fields::validation::{MinLengthValidator, RequiredValidator};
//!
//! # fn main() -> oxide_fields::Result<()> {
//! let mut form = Form::new()
//!     .field(TextField::new("username", "Username", "").validator(RequiredValidator::new()))?
//!     .field(
//!         PasswordField::new("password", "Password")
//!             .validator(RequiredValidator::new())
//!             .validator(MinLengthValidator::new(8)),
//!     )?
//!     .field(SelectField::new(
//!         "role",
//!         "Role",
//!         [Choice::new("user", "User"), Choice::new("admin", "Administrator")],
//!         "user",
//!     ))?;
//!
//! let data = HashMap::from([
//!     ("username".to_string(), "alice".to_string()),
//!     ("password".to_string(), "short".to_string()),
//! ]);
//! form.bind(&data);
//!
//! assert!(!form.validate());
//! assert_eq!(
//!     form.errors_json()?,
//!     r#"{"password":["Ensure this value has at least 8 characters."]}"#
//! );
//! # Ok(())
//! # }
//! ```
//!
//! Field names are unique within a form: adding a second field with a name
//! already in use fails with [`FormError::DuplicateField`].
//!
//! ## Escaping
//!
//! Field names, labels, values, choices and error messages are HTML-escaped
//! when rendered. Extra attributes passed to `render_label` and
//! `render_input` are raw markup fragments and are emitted verbatim; escape
//! any untrusted content in them before passing it in.
//!
//! ## Sharing validators
//!
//! Validators are stateless and `Send + Sync`. Wrap one in an `Arc` to reuse
//! the same instance across fields:
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use oxide_fields::{Field, TextField};
//! use oxide_fields::validation::{RequiredValidator, Validator};
//!
//! let required: Arc<dyn Validator> = Arc::new(RequiredValidator::new());
//! let first = TextField::new("first_name", "First name", "").shared_validator(required.clone());
//! let last = TextField::new("last_name", "Last name", "").shared_validator(required);
//! # let _ = (first, last);
//! ```

mod error;
pub mod fields;
mod form;
pub mod markup;
pub mod validation;

pub use error::{FormError, Result, ValidationErrors};
pub use fields::{
    Choice, Field, FieldCore, HiddenField, PasswordField, SelectField, TextArea, TextField,
};
pub use form::{render_field, Form};
pub use validation::{Validator, ValidatorKind};
