//! Form Validation Core
//!
//! Pure Rust validation for the signup form: country-dependent postal codes,
//! company email addresses, password strength and confirmation, plus a
//! DOM-independent controller that decides when the form may be submitted.
//! Used by both the `formcheck` CLI and the WASM client-side bindings.

pub mod config;
pub mod email;
pub mod error;
pub mod form;
pub mod password;
pub mod postal;
pub mod report;
pub mod result;

pub use config::{Config, EmailConfig, FormConfig, PasswordConfig};
pub use email::EmailRule;
pub use error::ValidationError;
pub use form::{Field, FormController, FormEvent, SubmitOutcome};
pub use password::{validate_confirmation, PasswordStrength};
pub use postal::{constraint_table, pattern_for, validate, CountryCode, PostalConstraint};
pub use report::{FieldReport, FieldReporter, ReportCollector};
pub use result::ValidationResult;
