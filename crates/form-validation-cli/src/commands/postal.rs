use anyhow::{Context, Result};
use colored::Colorize;
use form_validation_core::CountryCode;

use crate::reporter::print_result;

pub fn execute(country: &str, code: &str) -> Result<bool> {
    let country: CountryCode = country
        .parse()
        .context("Run `formcheck countries` for the supported list")?;

    let result = country.validate(code);
    print_result(&format!("{} postal code {}", country.as_str().to_uppercase(), code.cyan()), &result);

    Ok(result.matched)
}
