//! Signup Form Example
//!
//! Binds a simulated submission to a signup form, validates it, runs a
//! cross-field check and prints the rendered markup.
//!
//! Run with: cargo run --example signup_form
//! Trace validation with: cargo run --example signup_form -- --verbose

use std::collections::HashMap;
use std::sync::Arc;

use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use oxide_fields::validation::{
    EmailValidator, MaxLengthValidator, MinLengthValidator, RequiredValidator, Validator,
};
use oxide_fields::{
    Choice, Field, Form, HiddenField, PasswordField, SelectField, TextArea, TextField,
};

#[derive(Parser)]
#[command(name = "signup_form")]
#[command(about = "Validate a sample signup submission")]
struct Cli {
    /// Log every validation step
    #[arg(short, long)]
    verbose: bool,
}

fn signup_form() -> oxide_fields::Result<Form> {
    let required: Arc<dyn Validator> = Arc::new(RequiredValidator::new());

    Form::new()
        .field(
            TextField::new("username", "Username", "")
                .shared_validator(Arc::clone(&required))
                .validator(MinLengthValidator::new(3))
                .validator(MaxLengthValidator::new(30)),
        )?
        .field(
            TextField::new("email", "Email", "")
                .shared_validator(Arc::clone(&required))
                .validator(EmailValidator::new()),
        )?
        .field(
            PasswordField::new("password", "Password")
                .shared_validator(Arc::clone(&required))
                .validator(MinLengthValidator::new(8)),
        )?
        .field(PasswordField::new("password_confirm", "Confirm password").shared_validator(required))?
        .field(
            SelectField::new(
                "plan",
                "Plan",
                [Choice::new("free", "Free"), Choice::new("pro", "Pro")],
                "free",
            )
            .restrict_to_choices(),
        )?
        .field(TextArea::new("about", "About you", "").validator(MaxLengthValidator::new(500)))?
        .field(HiddenField::new("next", "/welcome"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::TRACE
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut form = signup_form()?;

    let submission = HashMap::from([
        ("username".to_string(), "al".to_string()),
        ("email".to_string(), "al@example".to_string()),
        ("password".to_string(), "correct horse".to_string()),
        ("password_confirm".to_string(), "battery staple".to_string()),
        ("plan".to_string(), "enterprise".to_string()),
        ("submit".to_string(), "Sign up".to_string()),
    ]);
    form.bind(&submission);

    let mut valid = form.validate();

    if form.value("password") != form.value("password_confirm") {
        form.add_error("password_confirm", "The two passwords do not match.")?;
        valid = false;
    }

    info!(valid, fields = form.len(), "signup form validated");

    if !valid {
        println!("Errors:\n{}", form.errors());
        println!("As JSON: {}", form.errors_json()?);
    }

    println!("\nRendered fields:\n{}", form.render_fields());

    let username = form.render_field("username", &[r#"class="form-control""#, "autofocus"])?;
    println!("\nUsername with attributes:\n{username}");

    Ok(())
}
