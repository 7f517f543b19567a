use anyhow::Result;
use colored::Colorize;
use form_validation_core::{Config, EmailRule};

use crate::reporter::print_result;

pub fn execute(config: &Config, value: &str) -> Result<bool> {
    let rule = EmailRule::new(&config.email)?;
    let result = rule.validate(value);
    print_result(&format!("email {}", value.cyan()), &result);

    Ok(result.matched)
}
