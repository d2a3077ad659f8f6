//! Validation policy settings loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::validation::{
    DEFAULT_MINIMUM_AGE_YEARS, DEFAULT_MINIMUM_PASSWORD_LENGTH, ValidationPolicy,
};

/// Thresholds applied by registration and password reset validation.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SANJIBOOK")]
pub struct PolicySettings {
    /// Minimum age, in whole years, to register.
    pub minimum_age_years: Option<u32>,
    /// Minimum password length used when length checks are enforced.
    pub minimum_password_length: Option<usize>,
    /// Reject registration and reset passwords shorter than the minimum.
    #[ortho_config(default = false)]
    pub enforce_password_length: bool,
}

impl PolicySettings {
    /// Return the configured minimum age, falling back to the default.
    pub fn minimum_age_years(&self) -> u32 {
        self.minimum_age_years.unwrap_or(DEFAULT_MINIMUM_AGE_YEARS)
    }

    /// Return the configured minimum password length, falling back to the default.
    pub fn minimum_password_length(&self) -> usize {
        self.minimum_password_length
            .unwrap_or(DEFAULT_MINIMUM_PASSWORD_LENGTH)
    }

    /// Build the validation policy these settings describe.
    pub fn policy(&self) -> ValidationPolicy {
        ValidationPolicy {
            minimum_age_years: self.minimum_age_years(),
            minimum_password_length: self.minimum_password_length(),
            enforce_password_length: self.enforce_password_length,
        }
    }
}
