// File: src/config.rs
// Purpose: Configuration parsing from form-validation.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::password::PasswordStrength;
use crate::postal::CountryCode;

/// Validation configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub email: EmailConfig,

    #[serde(default)]
    pub password: PasswordConfig,

    #[serde(default)]
    pub form: FormConfig,
}

/// Company email address rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    /// Domain every address must use (matched literally)
    #[serde(default = "default_domain")]
    pub domain: String,

    /// Exact number of letters/digits before the `@`
    #[serde(default = "default_local_length")]
    pub local_length: usize,
}

/// Password rules
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PasswordConfig {
    #[serde(default)]
    pub strength: PasswordStrength,
}

/// Form behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    /// Country preselected in the selector
    #[serde(default = "default_country")]
    pub default_country: CountryCode,
}

// Default values
fn default_domain() -> String {
    "thecompany.com".to_string()
}

fn default_local_length() -> usize {
    4
}

fn default_country() -> CountryCode {
    CountryCode::Ch
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            domain: default_domain(),
            local_length: default_local_length(),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            default_country: default_country(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            tracing::debug!(?path, "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./form-validation.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("form-validation.toml")
    }
}
