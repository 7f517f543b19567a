//! Form controller
//!
//! Models the event wiring of the signup form without touching a DOM: the
//! host feeds in field values and events, the controller runs the matching
//! validators and hands every result to a [`FieldReporter`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::email::EmailRule;
use crate::error::ValidationError;
use crate::password::{validate_confirmation, PasswordStrength};
use crate::postal::CountryCode;
use crate::report::FieldReporter;
use crate::result::ValidationResult;

pub const EMPTY_POSTAL_CODE: &str = "Postal code field cannot be empty";
pub const UNSUPPORTED_COUNTRY: &str = "Please select a supported country";

/// Inputs of the form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Field {
    Email,
    Country,
    PostalCode,
    Password,
    ConfirmPassword,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Email,
        Field::Country,
        Field::PostalCode,
        Field::Password,
        Field::ConfirmPassword,
    ];

    /// Element id of the input
    pub fn id(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Country => "country",
            Field::PostalCode => "postal-code",
            Field::Password => "password",
            Field::ConfirmPassword => "confirm-password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Field {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.id() == s)
            .ok_or_else(|| ValidationError::UnknownField(s.to_string()))
    }
}

/// Events forwarded from the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    Change(Field),
    FocusOut(Field),
    Submit,
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    /// Submission prevented; fields listed in display order
    Blocked { invalid: Vec<Field> },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted)
    }
}

/// Live validation state for one form
#[derive(Debug, Clone)]
pub struct FormController {
    email_rule: EmailRule,
    strength: PasswordStrength,
    values: [String; 5],
    touched: [bool; 5],
}

impl FormController {
    pub fn new(config: &Config) -> Result<Self, ValidationError> {
        let mut values: [String; 5] = Default::default();
        values[Field::Country as usize] = config.form.default_country.as_str().to_string();

        Ok(Self {
            email_rule: EmailRule::new(&config.email)?,
            strength: config.password.strength,
            values,
            touched: [false; 5],
        })
    }

    pub fn value(&self, field: Field) -> &str {
        &self.values[field as usize]
    }

    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        self.values[field as usize] = value.into();
    }

    /// Validate a field against the current values without reporting
    pub fn evaluate(&self, field: Field) -> ValidationResult {
        let value = self.value(field);
        match field {
            Field::Email => self.email_rule.validate(value),
            Field::Country => match value.parse::<CountryCode>() {
                Ok(_) => ValidationResult::valid(),
                Err(_) => ValidationResult::invalid(UNSUPPORTED_COUNTRY),
            },
            Field::PostalCode => {
                if value.is_empty() {
                    return ValidationResult::invalid(EMPTY_POSTAL_CODE);
                }
                match self.value(Field::Country).parse::<CountryCode>() {
                    Ok(country) => country.validate(value),
                    Err(_) => ValidationResult::invalid(UNSUPPORTED_COUNTRY),
                }
            }
            Field::Password => self.strength.validate(value),
            Field::ConfirmPassword => {
                validate_confirmation(self.value(Field::Password), value)
            }
        }
    }

    /// Validate a field, remember it was shown, and report the result
    pub fn check(&mut self, field: Field, reporter: &mut dyn FieldReporter) -> ValidationResult {
        let result = self.evaluate(field);
        self.touched[field as usize] = true;
        reporter.report(field, &result);
        result
    }

    /// Input lost focus
    pub fn focus_out(&mut self, field: Field, reporter: &mut dyn FieldReporter) {
        self.check(field, reporter);
        self.check_dependents(field, reporter);
    }

    /// Input value changed
    ///
    /// The country selector always re-validates; text fields re-validate once
    /// they have been shown to the user.
    pub fn change(&mut self, field: Field, reporter: &mut dyn FieldReporter) {
        if field == Field::Country || self.touched[field as usize] {
            self.check(field, reporter);
        }
        self.check_dependents(field, reporter);
    }

    // Fields whose constraint reads another field's value
    fn check_dependents(&mut self, field: Field, reporter: &mut dyn FieldReporter) {
        let dependent = match field {
            Field::Country => Field::PostalCode,
            Field::Password => Field::ConfirmPassword,
            _ => return,
        };
        if !self.value(dependent).is_empty() {
            self.check(dependent, reporter);
        }
    }

    /// Validate every field; any failure blocks submission
    pub fn submit(&mut self, reporter: &mut dyn FieldReporter) -> SubmitOutcome {
        let invalid: Vec<Field> = Field::ALL
            .into_iter()
            .filter(|&field| !self.check(field, reporter).matched)
            .collect();

        if invalid.is_empty() {
            tracing::info!("form accepted");
            SubmitOutcome::Accepted
        } else {
            tracing::info!(?invalid, "form submission blocked");
            SubmitOutcome::Blocked { invalid }
        }
    }

    /// Dispatch a page event; only `Submit` yields an outcome
    pub fn handle(&mut self, event: FormEvent, reporter: &mut dyn FieldReporter) -> Option<SubmitOutcome> {
        match event {
            FormEvent::Change(field) => self.change(field, reporter),
            FormEvent::FocusOut(field) => self.focus_out(field, reporter),
            FormEvent::Submit => return Some(self.submit(reporter)),
        }
        None
    }

    /// True when every field currently satisfies its constraint
    pub fn is_submittable(&self) -> bool {
        Field::ALL.into_iter().all(|field| self.evaluate(field).matched)
    }
}
