//! Validation thresholds.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading [`ValidationRules`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse rules: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid rules: {0}")]
    Invalid(String),
}

/// Thresholds used by the field validators.
///
/// Missing keys in a rules file fall back to the defaults.
///
/// # Example
///
/// ```
/// use signup_core::ValidationRules;
///
/// let rules = ValidationRules::default()
///     .with_name_min_length(3)
///     .with_password_min_length(12);
/// assert_eq!(rules.phone_digits, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationRules {
    /// Minimum trimmed length of the full name.
    ///
    /// Default: 5
    pub name_min_length: usize,

    /// Minimum length of the password.
    ///
    /// Default: 8
    pub password_min_length: usize,

    /// Exact number of digits in a phone number.
    ///
    /// Default: 10
    pub phone_digits: usize,

    /// Digit strings rejected as sequential placeholders.
    pub reserved_phone_numbers: Vec<String>,

    /// Passwords rejected outright on top of the literal "password",
    /// compared case-insensitively.
    pub banned_passwords: Vec<String>,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            name_min_length: 5,
            password_min_length: 8,
            phone_digits: 10,
            reserved_phone_numbers: ["123456789", "1234567890", "0123456789", "12345678901"]
                .into_iter()
                .map(String::from)
                .collect(),
            banned_passwords: Vec::new(),
        }
    }
}

impl ValidationRules {
    /// Sets the minimum name length.
    pub fn with_name_min_length(mut self, len: usize) -> Self {
        self.name_min_length = len;
        self
    }

    /// Sets the minimum password length.
    pub fn with_password_min_length(mut self, len: usize) -> Self {
        self.password_min_length = len;
        self
    }

    /// Sets the required phone digit count.
    pub fn with_phone_digits(mut self, digits: usize) -> Self {
        self.phone_digits = digits;
        self
    }

    /// Adds a reserved placeholder phone number.
    pub fn with_reserved_phone_number(mut self, number: impl Into<String>) -> Self {
        self.reserved_phone_numbers.push(number.into());
        self
    }

    /// Adds a banned password.
    pub fn with_banned_password(mut self, password: impl Into<String>) -> Self {
        self.banned_passwords.push(password.into());
        self
    }

    /// Parse rules from JSON and check them.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let rules: Self = serde_json::from_str(json)?;
        rules.check()?;
        Ok(rules)
    }

    /// Load rules from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load rules from a JSON file, using the defaults if it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("no rules file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let rules = Self::load(path)?;
        log::info!("loaded validation rules from {}", path.display());
        Ok(rules)
    }

    /// Reject thresholds no input could ever satisfy.
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.name_min_length == 0 {
            return Err(ConfigError::Invalid("name_min_length must be at least 1".into()));
        }
        if self.password_min_length == 0 {
            return Err(ConfigError::Invalid(
                "password_min_length must be at least 1".into(),
            ));
        }
        if self.phone_digits == 0 {
            return Err(ConfigError::Invalid("phone_digits must be at least 1".into()));
        }
        if let Some(bad) = self
            .reserved_phone_numbers
            .iter()
            .find(|n| n.is_empty() || !n.chars().all(|c| c.is_ascii_digit()))
        {
            return Err(ConfigError::Invalid(format!(
                "reserved phone number {bad:?} must be digits only"
            )));
        }
        Ok(())
    }
}
