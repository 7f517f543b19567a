use colored::Colorize;
use form_validation_core::{validate_confirmation, PasswordStrength};

use crate::reporter::print_result;

pub fn execute(strength: PasswordStrength, value: &str, confirm: Option<&str>) -> bool {
    let result = strength.validate(value);
    print_result(&format!("password ({} tier)", strength.as_str().cyan()), &result);

    let mut passed = result.matched;
    if let Some(confirm) = confirm {
        let confirmation = validate_confirmation(value, confirm);
        print_result("confirmation", &confirmation);
        passed &= confirmation.matched;
    }

    passed
}
