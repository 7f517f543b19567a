//! Form Validation WASM
//!
//! WebAssembly bindings for the signup form validation.
//! The page script keeps its own event listeners and forwards values and
//! events here; results come back as `{ field, matched, message }` objects
//! ready for `setCustomValidity` / `reportValidity`.

use form_validation_core as core;
use form_validation_core::{Field, ReportCollector};
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    let message = err.to_string();
    web_sys::console::warn_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}

fn parse_field(field: &str) -> Result<Field, JsValue> {
    field.parse::<Field>().map_err(to_js_error)
}

/// Validate a postal code for the selected country
///
/// # Example (JavaScript)
/// ```javascript
/// const result = validatePostalCode('ch', '1950');
/// postalInput.setCustomValidity(result.message ?? '');
/// ```
#[wasm_bindgen(js_name = validatePostalCode)]
pub fn validate_postal_code(country: &str, code: &str) -> Result<JsValue, JsValue> {
    let result = core::validate(country, code).map_err(to_js_error)?;
    Ok(serde_wasm_bindgen::to_value(&result)?)
}

/// Pattern source for a country, suitable for an input's `pattern` attribute
#[wasm_bindgen(js_name = postalPatternFor)]
pub fn postal_pattern_for(country: &str) -> Result<String, JsValue> {
    let pattern = core::pattern_for(country).map_err(to_js_error)?;
    Ok(pattern.as_str().to_string())
}

/// Fixed error message for a country
#[wasm_bindgen(js_name = postalMessageFor)]
pub fn postal_message_for(country: &str) -> Result<String, JsValue> {
    let country = country.parse::<core::CountryCode>().map_err(to_js_error)?;
    Ok(country.constraint().message().to_string())
}

/// Selector values with a postal constraint
#[wasm_bindgen(js_name = supportedCountries)]
pub fn supported_countries() -> Vec<String> {
    core::constraint_table()
        .map(|c| c.country().as_str().to_string())
        .collect()
}

/// Quick email validation against the default company domain
#[wasm_bindgen(js_name = validateEmail)]
pub fn validate_email(value: &str) -> Option<String> {
    core::EmailRule::default_rule().validate(value).message
}

/// Quick password validation; returns the message on failure
#[wasm_bindgen(js_name = validatePassword)]
pub fn validate_password(password: &str, tier: &str) -> Result<Option<String>, JsValue> {
    let strength = tier.parse::<core::PasswordStrength>().map_err(to_js_error)?;
    Ok(strength.check(password).err())
}

/// Stateful controller for one form
#[wasm_bindgen]
pub struct FormController {
    inner: core::FormController,
}

#[wasm_bindgen]
impl FormController {
    /// Create a controller; `config` is an optional object shaped like
    /// `form-validation.toml` (`{ email: { domain }, password: { strength } }`)
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<FormController, JsValue> {
        let config: core::Config = if config.is_undefined() || config.is_null() {
            core::Config::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))?
        };

        let inner = core::FormController::new(&config).map_err(to_js_error)?;
        Ok(FormController { inner })
    }

    #[wasm_bindgen(js_name = setValue)]
    pub fn set_value(&mut self, field: &str, value: &str) -> Result<(), JsValue> {
        let field = parse_field(field)?;
        self.inner.set_value(field, value);
        Ok(())
    }

    /// `focusout` listener; returns the reports produced
    #[wasm_bindgen(js_name = focusOut)]
    pub fn focus_out(&mut self, field: &str) -> Result<JsValue, JsValue> {
        let field = parse_field(field)?;
        let mut reports = ReportCollector::new();
        self.inner.focus_out(field, &mut reports);
        Ok(serde_wasm_bindgen::to_value(reports.reports())?)
    }

    /// `change` listener; returns the reports produced
    pub fn change(&mut self, field: &str) -> Result<JsValue, JsValue> {
        let field = parse_field(field)?;
        let mut reports = ReportCollector::new();
        self.inner.change(field, &mut reports);
        Ok(serde_wasm_bindgen::to_value(reports.reports())?)
    }

    /// `submit` listener; call `preventDefault` when any report failed
    pub fn submit(&mut self) -> Result<JsValue, JsValue> {
        let mut reports = ReportCollector::new();
        self.inner.submit(&mut reports);
        Ok(serde_wasm_bindgen::to_value(reports.reports())?)
    }

    /// Drives the submit button's `disabled` state
    #[wasm_bindgen(js_name = isSubmittable)]
    pub fn is_submittable(&self) -> bool {
        self.inner.is_submittable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use form_validation_core::ValidationResult;
    use serde::Deserialize;
    use wasm_bindgen_test::*;

    #[derive(Deserialize, Debug)]
    struct Report {
        field: String,
        matched: bool,
        message: Option<String>,
    }

    fn reports(value: JsValue) -> Vec<Report> {
        serde_wasm_bindgen::from_value(value).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_validate_postal_code() {
        let result: ValidationResult =
            serde_wasm_bindgen::from_value(validate_postal_code("ch", "19500").unwrap()).unwrap();
        assert!(!result.matched);
        assert_eq!(
            result.message.as_deref(),
            Some("Swiss postal codes must have exactly 4 digits: e.g. CH-1950 or 1950")
        );

        let result: ValidationResult =
            serde_wasm_bindgen::from_value(validate_postal_code("ch", "1950").unwrap()).unwrap();
        assert!(result.matched);
        assert_eq!(result.message, None);

        assert!(validate_postal_code("us", "12345").is_err());
    }

    #[wasm_bindgen_test]
    fn test_postal_message() {
        assert_eq!(
            postal_message_for("ch").unwrap(),
            "Swiss postal codes must have exactly 4 digits: e.g. CH-1950 or 1950"
        );
        assert!(postal_message_for("be").is_err());
    }

    #[wasm_bindgen_test]
    fn test_submit_empty_form() {
        let mut form = FormController::new(JsValue::UNDEFINED).unwrap();
        let reports = reports(form.submit().unwrap());

        assert_eq!(reports.len(), 5);
        let failing: Vec<&str> = reports
            .iter()
            .filter(|r| !r.matched)
            .map(|r| r.field.as_str())
            .collect();
        assert_eq!(failing, vec!["email", "postal-code", "password", "confirm-password"]);
        assert!(reports.iter().filter(|r| !r.matched).all(|r| r.message.is_some()));
    }

    #[wasm_bindgen_test]
    fn test_country_change_reports_postal_code() {
        let mut form = FormController::new(JsValue::UNDEFINED).unwrap();
        form.set_value("postal-code", "75012").unwrap();
        form.set_value("country", "fr").unwrap();

        let reports = reports(form.change("country").unwrap());
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].field, "country");
        assert!(reports[0].matched);
        assert_eq!(reports[1].field, "postal-code");
        assert!(reports[1].matched);
    }

    #[wasm_bindgen_test]
    fn test_focus_out_reports_field() {
        let mut form = FormController::new(JsValue::UNDEFINED).unwrap();
        form.set_value("email", "abc").unwrap();

        let reports = reports(form.focus_out("email").unwrap());
        assert_eq!(reports.len(), 1);
        assert_eq!(
            reports[0].message.as_deref(),
            Some("Email must have 4 letters/numbers before @thecompany.com")
        );
    }

    #[wasm_bindgen_test]
    fn test_postal_pattern() {
        assert_eq!(postal_pattern_for("ch").unwrap(), r"^(CH-)?[0-9]{4}$");
        assert!(postal_pattern_for("us").is_err());
    }

    #[wasm_bindgen_test]
    fn test_supported_countries() {
        assert_eq!(supported_countries(), vec!["ch", "fr", "de", "nl"]);
    }

    #[wasm_bindgen_test]
    fn test_email_validation() {
        assert!(validate_email("ab12@thecompany.com").is_none());
        assert!(validate_email("someone@gmail.com").is_some());
    }

    #[wasm_bindgen_test]
    fn test_password_validation() {
        assert_eq!(validate_password("simple", "basic").unwrap(), None);
        assert!(validate_password("weak", "strong").unwrap().is_some());
        assert!(validate_password("anything", "extreme").is_err());
    }

    #[wasm_bindgen_test]
    fn test_controller_gating() {
        let mut form = FormController::new(JsValue::UNDEFINED).unwrap();
        assert!(!form.is_submittable());

        form.set_value("email", "ab12@thecompany.com").unwrap();
        form.set_value("postal-code", "CH-1950").unwrap();
        form.set_value("password", "Password123").unwrap();
        form.set_value("confirm-password", "Password123").unwrap();
        assert!(form.is_submittable());

        assert!(form.set_value("zip", "1950").is_err());
    }
}
