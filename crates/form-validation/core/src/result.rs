//! Outcome of validating a single value

use serde::{Deserialize, Serialize};

/// Whether a value satisfied its constraint, and the message to show if not.
///
/// `message` is present only when `matched` is false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub matched: bool,
    pub message: Option<String>,
}

impl ValidationResult {
    /// Create a passing result
    pub fn valid() -> Self {
        Self {
            matched: true,
            message: None,
        }
    }

    /// Create a failing result carrying the user-facing message
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            matched: false,
            message: Some(message.into()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.matched
    }

    /// Message to hand to the UI: empty string clears a field's custom error.
    pub fn display_message(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }

    /// Convert from the `Result<(), String>` shape used by the field validators
    pub fn from_result(result: Result<(), String>) -> Self {
        match result {
            Ok(()) => Self::valid(),
            Err(message) => Self::invalid(message),
        }
    }
}
