//! Error types for the validation core.

use thiserror::Error;

/// Errors raised when a caller hands the validators something outside the
/// form's known vocabulary. Failing a constraint is not an error; that is a
/// [`crate::ValidationResult`] with `matched == false`.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Country code has no entry in the postal constraint table.
    #[error("unsupported country code: {0:?}")]
    UnsupportedCountry(String),

    /// Field id does not name one of the form's inputs.
    #[error("unknown form field: {0:?}")]
    UnknownField(String),

    /// Password strength tier name is not one of basic, medium or strong.
    #[error("invalid password strength tier: {0:?} (expected basic, medium or strong)")]
    InvalidStrength(String),

    /// A configured pattern failed to compile.
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}
