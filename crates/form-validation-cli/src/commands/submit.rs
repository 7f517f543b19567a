use anyhow::Result;
use colored::Colorize;
use form_validation_core::{Config, Field, FormController, SubmitOutcome};

use crate::reporter::TerminalReporter;

/// Field values supplied on the command line
pub struct Values {
    pub email: String,
    pub country: Option<String>,
    pub postal_code: String,
    pub password: String,
    pub confirm_password: String,
}

pub fn execute(config: &Config, values: Values) -> Result<bool> {
    let mut form = FormController::new(config)?;

    form.set_value(Field::Email, values.email);
    if let Some(country) = values.country {
        form.set_value(Field::Country, country);
    }
    form.set_value(Field::PostalCode, values.postal_code);
    form.set_value(Field::Password, values.password);
    form.set_value(Field::ConfirmPassword, values.confirm_password);

    println!("{}", "Submitting form...".green().bold());
    println!();

    let mut reporter = TerminalReporter::default();
    let outcome = form.submit(&mut reporter);
    println!();

    match outcome {
        SubmitOutcome::Accepted => {
            println!("{}", "Form accepted".green().bold());
            Ok(true)
        }
        SubmitOutcome::Blocked { invalid } => {
            let ids: Vec<&str> = invalid.iter().map(|f| f.id()).collect();
            println!(
                "{} ({} of {} fields invalid: {})",
                "Submission blocked".red().bold(),
                reporter.failures(),
                Field::ALL.len(),
                ids.join(", ")
            );
            Ok(false)
        }
    }
}
