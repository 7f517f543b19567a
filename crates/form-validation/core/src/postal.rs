//! Postal code constraints by country
//!
//! The country selector drives which pattern the postal code field must
//! match. Each supported country has exactly one entry in a static table of
//! (pattern, message) pairs; patterns are compiled once on first use.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::result::ValidationResult;

/// Countries offered by the selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum CountryCode {
    /// Switzerland
    Ch,
    /// France
    Fr,
    /// Germany
    De,
    /// Netherlands
    Nl,
}

impl CountryCode {
    /// All supported countries, in table order
    pub const ALL: [CountryCode; 4] = [
        CountryCode::Ch,
        CountryCode::Fr,
        CountryCode::De,
        CountryCode::Nl,
    ];

    /// Selector value for this country
    pub fn as_str(self) -> &'static str {
        match self {
            CountryCode::Ch => "ch",
            CountryCode::Fr => "fr",
            CountryCode::De => "de",
            CountryCode::Nl => "nl",
        }
    }

    pub fn constraint(self) -> &'static PostalConstraint {
        &TABLE[self as usize]
    }

    /// Test a postal code against this country's pattern
    pub fn validate(self, candidate: &str) -> ValidationResult {
        let constraint = self.constraint();
        let matched = constraint.pattern().is_match(candidate);

        tracing::debug!(country = %self, candidate, matched, "postal code checked");

        if matched {
            ValidationResult::valid()
        } else {
            ValidationResult::invalid(constraint.message)
        }
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CountryCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        CountryCode::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(code))
            .ok_or_else(|| ValidationError::UnsupportedCountry(s.to_string()))
    }
}

impl TryFrom<String> for CountryCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One row of the constraint table
///
/// Rows exist only in the static table; obtain them through
/// [`CountryCode::constraint`] or [`constraint_table`].
#[derive(Debug)]
pub struct PostalConstraint {
    country: CountryCode,
    source: &'static str,
    message: &'static str,
    example: &'static str,
}

impl PostalConstraint {
    pub fn country(&self) -> CountryCode {
        self.country
    }

    /// Pattern source, usable as an HTML `pattern` attribute
    pub fn source(&self) -> &'static str {
        self.source
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    /// Documented example that satisfies the pattern
    pub fn example(&self) -> &'static str {
        self.example
    }

    /// Compiled pattern for this row
    pub fn pattern(&self) -> &'static Regex {
        &COMPILED[self.country as usize]
    }
}

// Indexed by `CountryCode as usize`; order must follow the enum.
static TABLE: [PostalConstraint; 4] = [
    PostalConstraint {
        country: CountryCode::Ch,
        source: r"^(CH-)?[0-9]{4}$",
        message: "Swiss postal codes must have exactly 4 digits: e.g. CH-1950 or 1950",
        example: "CH-1950",
    },
    PostalConstraint {
        country: CountryCode::Fr,
        source: r"^(F-)?[0-9]{5}$",
        message: "French postal codes must have exactly 5 digits: e.g. F-75012 or 75012",
        example: "F-75012",
    },
    PostalConstraint {
        country: CountryCode::De,
        source: r"^(D-)?[0-9]{5}$",
        message: "German postal codes must have exactly 5 digits: e.g. D-12345 or 12345",
        example: "D-12345",
    },
    PostalConstraint {
        country: CountryCode::Nl,
        source: r"^(NL-)?[0-9]{4}\s*([A-RT-Z][A-Z]|S[BCE-RT-Z])$",
        message: "Dutch postal codes must have exactly 4 digits, followed by 2 letters except SA, SD and SS",
        example: "NL-1234 AB",
    },
];

static COMPILED: Lazy<[Regex; 4]> = Lazy::new(|| {
    std::array::from_fn(|i| Regex::new(TABLE[i].source).expect("postal pattern table entry must compile"))
});

/// Iterate the whole constraint table in selector order
pub fn constraint_table() -> impl Iterator<Item = &'static PostalConstraint> {
    TABLE.iter()
}

/// Resolve the compiled pattern for a selector value
pub fn pattern_for(country_code: &str) -> Result<&'static Regex, ValidationError> {
    let country = resolve(country_code)?;
    Ok(country.constraint().pattern())
}

/// Validate a postal code for the given selector value
///
/// # Examples
/// ```
/// use form_validation_core::postal::validate;
/// assert!(validate("ch", "1950").unwrap().matched);
/// assert!(!validate("ch", "19500").unwrap().matched);
/// ```
pub fn validate(country_code: &str, candidate: &str) -> Result<ValidationResult, ValidationError> {
    let country = resolve(country_code)?;
    Ok(country.validate(candidate))
}

fn resolve(country_code: &str) -> Result<CountryCode, ValidationError> {
    country_code.parse::<CountryCode>().inspect_err(|_| {
        tracing::warn!(country_code, "no postal constraint for country");
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_enum() {
        for (i, constraint) in TABLE.iter().enumerate() {
            assert_eq!(constraint.country as usize, i);
            assert_eq!(CountryCode::ALL[i], constraint.country);
        }
    }

    #[test]
    fn test_every_example_matches() {
        for constraint in constraint_table() {
            assert!(
                constraint.pattern().is_match(constraint.example),
                "{} example {:?} should match",
                constraint.country,
                constraint.example
            );
        }
    }

    #[test]
    fn test_swiss_codes() {
        assert!(validate("ch", "1950").unwrap().matched);
        assert!(validate("ch", "CH-1950").unwrap().matched);

        let failed = validate("ch", "19500").unwrap();
        assert!(!failed.matched);
        assert_eq!(failed.message.as_deref(), Some(CountryCode::Ch.constraint().message()));
    }

    #[test]
    fn test_dutch_letter_pairs() {
        assert!(validate("nl", "1234AB").unwrap().matched);
        assert!(validate("nl", "1234 AB").unwrap().matched);
        assert!(validate("nl", "1234 SB").unwrap().matched);
        assert!(!validate("nl", "1234 SA").unwrap().matched);
        assert!(!validate("nl", "1234 SD").unwrap().matched);
        assert!(!validate("nl", "1234 SS").unwrap().matched);
        assert!(!validate("nl", "1234 ab").unwrap().matched);
    }

    #[test]
    fn test_country_parsing() {
        assert_eq!("de".parse::<CountryCode>().unwrap(), CountryCode::De);
        assert_eq!(" FR ".parse::<CountryCode>().unwrap(), CountryCode::Fr);
        assert!(matches!(
            "us".parse::<CountryCode>(),
            Err(ValidationError::UnsupportedCountry(code)) if code == "us"
        ));
    }

    #[test]
    fn test_deserialize_ignores_case() {
        #[derive(Deserialize)]
        struct Selection {
            country: CountryCode,
        }

        let selection: Selection = toml::from_str(r#"country = " CH ""#).unwrap();
        assert_eq!(selection.country, CountryCode::Ch);
        assert!(toml::from_str::<Selection>(r#"country = "us""#).is_err());
    }

    #[test]
    fn test_compiled_pattern_matches_source() {
        for constraint in constraint_table() {
            assert_eq!(constraint.pattern().as_str(), constraint.source());
        }
    }

    #[test]
    fn test_unknown_country() {
        assert!(pattern_for("xx").is_err());
        assert!(validate("", "1950").is_err());
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        // Arabic-Indic digits are \d in Unicode regex but not in browsers
        assert!(!validate("ch", "١٩٥٠").unwrap().matched);
    }
}
