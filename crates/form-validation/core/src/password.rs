//! Password and confirm-password validation

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::result::ValidationResult;

pub const EMPTY_PASSWORD: &str = "Password field cannot be empty";
pub const EMPTY_CONFIRMATION: &str = "Please confirm your password";
pub const MISMATCH: &str = "Passwords do not match";

/// Password strength tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordStrength {
    /// 6+ characters minimum
    Basic,
    /// 8+ chars with uppercase, lowercase, and digit
    #[default]
    Medium,
    /// 8+ chars with uppercase, lowercase, digit, and special character
    Strong,
}

impl PasswordStrength {
    pub fn as_str(self) -> &'static str {
        match self {
            PasswordStrength::Basic => "basic",
            PasswordStrength::Medium => "medium",
            PasswordStrength::Strong => "strong",
        }
    }

    /// Check a password against this tier, returning the first unmet rule
    pub fn check(self, password: &str) -> Result<(), String> {
        if password.is_empty() {
            return Err(EMPTY_PASSWORD.to_string());
        }

        match self {
            PasswordStrength::Basic => validate_basic(password),
            PasswordStrength::Medium => validate_medium(password),
            PasswordStrength::Strong => validate_strong(password),
        }
    }

    pub fn validate(self, password: &str) -> ValidationResult {
        ValidationResult::from_result(self.check(password))
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PasswordStrength {
    type Err = ValidationError;

    /// # Examples
    /// ```
    /// use form_validation_core::PasswordStrength;
    /// assert_eq!("strong".parse::<PasswordStrength>().unwrap(), PasswordStrength::Strong);
    /// assert!("custom".parse::<PasswordStrength>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(PasswordStrength::Basic),
            "medium" => Ok(PasswordStrength::Medium),
            "strong" => Ok(PasswordStrength::Strong),
            other => Err(ValidationError::InvalidStrength(other.to_string())),
        }
    }
}

fn char_count(password: &str) -> usize {
    password.chars().count()
}

/// Basic password validation: 6+ characters
fn validate_basic(password: &str) -> Result<(), String> {
    if char_count(password) >= 6 {
        Ok(())
    } else {
        Err("Password must be at least 6 characters".to_string())
    }
}

/// Medium password validation: 8+ chars with uppercase, lowercase, and digit
fn validate_medium(password: &str) -> Result<(), String> {
    if char_count(password) < 8 {
        return Err("Password must be at least 8 characters".to_string());
    }

    let has_uppercase = password.chars().any(|c| c.is_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !has_uppercase || !has_lowercase || !has_digit {
        return Err("Password must contain uppercase, lowercase, and digit".to_string());
    }

    Ok(())
}

/// Strong password validation: medium rules plus a special character
fn validate_strong(password: &str) -> Result<(), String> {
    validate_medium(password)?;

    let has_special = password.chars().any(|c| {
        matches!(c, '@' | '$' | '!' | '%' | '*' | '?' | '&' | '#' | '-' | '_' | '+' | '=' | '.' | ',')
    });

    if !has_special {
        return Err("Password must contain at least one special character (@$!%*?&#-_+=.,)".to_string());
    }

    Ok(())
}

/// Confirm-password validation: must be present and equal the password
pub fn validate_confirmation(password: &str, confirmation: &str) -> ValidationResult {
    if confirmation.is_empty() {
        ValidationResult::invalid(EMPTY_CONFIRMATION)
    } else if password != confirmation {
        ValidationResult::invalid(MISMATCH)
    } else {
        ValidationResult::valid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password() {
        for tier in [PasswordStrength::Basic, PasswordStrength::Medium, PasswordStrength::Strong] {
            assert_eq!(tier.check(""), Err(EMPTY_PASSWORD.to_string()));
        }
    }

    #[test]
    fn test_basic_password() {
        assert!(PasswordStrength::Basic.check("simple").is_ok());
        assert!(PasswordStrength::Basic.check("123456").is_ok());
        assert!(PasswordStrength::Basic.check("short").is_err());
    }

    #[test]
    fn test_medium_password() {
        assert!(PasswordStrength::Medium.check("Password123").is_ok());
        assert!(PasswordStrength::Medium.check("Test1234").is_ok());
        assert!(PasswordStrength::Medium.check("lowercase1").is_err());
        assert!(PasswordStrength::Medium.check("UPPERCASE1").is_err());
        assert!(PasswordStrength::Medium.check("NoDigits").is_err());
        assert!(PasswordStrength::Medium.check("Short1A").is_err());
    }

    #[test]
    fn test_strong_password() {
        assert!(PasswordStrength::Strong.check("Password123!").is_ok());
        assert!(PasswordStrength::Strong.check("Secure@Pass1").is_ok());
        assert!(PasswordStrength::Strong.check("NoSpecial123").is_err());
        assert!(PasswordStrength::Strong.check("nouppercas!1").is_err());
        assert!(PasswordStrength::Strong.check("NoDigits!Aa").is_err());
    }

    #[test]
    fn test_length_counts_characters() {
        // 6 characters, 12 bytes
        assert!(PasswordStrength::Basic.check("éèàüöç").is_ok());
        // 3 characters, 6 bytes
        assert!(PasswordStrength::Basic.check("ééé").is_err());
        // 7 characters, 10 bytes
        assert_eq!(
            PasswordStrength::Medium.check("Ünïcöd1"),
            Err("Password must be at least 8 characters".to_string())
        );
    }

    #[test]
    fn test_only_ascii_digits_count() {
        // Arabic-Indic digits are numeric but not ASCII
        assert_eq!(
            PasswordStrength::Medium.check("Passwort١٢"),
            Err("Password must contain uppercase, lowercase, and digit".to_string())
        );
        assert!(PasswordStrength::Medium.check("Passwort12").is_ok());
        assert!(PasswordStrength::Strong.check("Passwort١٢!").is_err());
    }

    #[test]
    fn test_confirmation() {
        assert!(validate_confirmation("Secret123", "Secret123").is_valid());
        assert_eq!(
            validate_confirmation("Secret123", "").message.as_deref(),
            Some(EMPTY_CONFIRMATION)
        );
        assert_eq!(
            validate_confirmation("Secret123", "Secret124").message.as_deref(),
            Some(MISMATCH)
        );
    }
}
