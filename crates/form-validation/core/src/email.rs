//! Company email validation
//!
//! Addresses must be a fixed number of ASCII letters/digits followed by the
//! company domain, e.g. `ab12@thecompany.com`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::EmailConfig;
use crate::error::ValidationError;
use crate::result::ValidationResult;

pub const EMPTY_EMAIL: &str = "Email field cannot be empty";

static DEFAULT_RULE: Lazy<EmailRule> = Lazy::new(|| {
    EmailRule::new(&EmailConfig::default()).expect("default email rule must compile")
});

/// Compiled email rule for one domain
#[derive(Debug, Clone)]
pub struct EmailRule {
    pattern: Regex,
    domain: String,
    local_length: usize,
}

impl EmailRule {
    pub fn new(config: &EmailConfig) -> Result<Self, ValidationError> {
        let source = format!(
            "^[a-zA-Z0-9]{{{}}}@{}$",
            config.local_length,
            regex::escape(&config.domain)
        );
        let pattern = Regex::new(&source)?;

        Ok(Self {
            pattern,
            domain: config.domain.clone(),
            local_length: config.local_length,
        })
    }

    /// Rule for the default company domain
    pub fn default_rule() -> &'static EmailRule {
        &DEFAULT_RULE
    }

    /// Pattern source, usable as an HTML `pattern` attribute
    pub fn pattern_source(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.pattern.is_match(value)
    }

    pub fn mismatch_message(&self) -> String {
        format!(
            "Email must have {} letters/numbers before @{}",
            self.local_length, self.domain
        )
    }

    pub fn validate(&self, value: &str) -> ValidationResult {
        let result = if value.is_empty() {
            ValidationResult::invalid(EMPTY_EMAIL)
        } else if !self.is_match(value) {
            ValidationResult::invalid(self.mismatch_message())
        } else {
            ValidationResult::valid()
        };

        tracing::debug!(matched = result.matched, "email checked");
        result
    }
}
