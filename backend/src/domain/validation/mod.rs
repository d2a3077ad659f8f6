//! Form-input validation for account flows.
//!
//! Purpose: check registration, login, and password-reset input before any
//! port is touched, and report every violation at once as [`FieldErrors`].
//! Nothing here performs I/O or keeps state between calls; the current date
//! and the active [`ValidationPolicy`] arrive through [`ValidationContext`].
//!
//! Public surface:
//! - [`validate_email_password`] and [`is_valid_password`] for login input.
//! - [`validate_registration`] and [`RegistrationValidator`] for sign-up.
//! - [`validate_password_reset`] for password recovery.
//! - [`Validable`], the shared capability implemented by each input record.

mod birth_date;
mod email;
mod field_errors;
mod password_reset;
mod registration;
mod validable;

pub use birth_date::{
    BIRTH_DATE_FORMAT, BirthDateError, adulthood_threshold, is_at_least, parse_birth_date,
};
pub use email::is_valid_email;
pub use field_errors::{Field, FieldErrors};
pub use password_reset::{PasswordReset, validate_password_reset};
pub use registration::{Candidate, RegistrationValidator, validate_registration};
pub use validable::Validable;

use chrono::NaiveDate;

/// Stable messages attached to [`FieldErrors`] entries.
pub mod messages {
    /// Email left blank.
    pub const EMAIL_REQUIRED: &str = "email is required";
    /// Email does not look like an address.
    pub const EMAIL_INVALID: &str = "invalid email format";
    /// Login password left blank.
    pub const PASSWORD_REQUIRED: &str = "password is required";
    /// Password or its confirmation left blank.
    pub const PASSWORDS_REQUIRED: &str = "both passwords are required";
    /// Password and confirmation differ.
    pub const PASSWORDS_MISMATCH: &str = "passwords do not match";
    /// Generic required-field message.
    pub const REQUIRED: &str = "required";
    /// Birth date could not be parsed.
    pub const DATE_INVALID: &str = "invalid date";
    /// Terms were not accepted.
    pub const TERMS_REQUIRED: &str = "must accept the terms";

    /// Birth date is too recent for the configured minimum age.
    pub fn too_young(minimum_age_years: u32) -> String {
        format!("must be {minimum_age_years} or older")
    }

    /// Password is shorter than the configured minimum.
    pub fn password_too_short(minimum_length: usize) -> String {
        format!("password must be at least {minimum_length} characters")
    }
}

/// Minimum age accepted at registration.
pub const DEFAULT_MINIMUM_AGE_YEARS: u32 = 18;
/// Minimum password length used by [`is_valid_password`].
pub const DEFAULT_MINIMUM_PASSWORD_LENGTH: usize = 6;

/// Tunable thresholds for the validation rules.
///
/// The password length rule is available on its own through
/// [`ValidationPolicy::accepts_password`]; registration and password reset
/// only apply it when `enforce_password_length` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Applicants must be strictly older than this many years.
    pub minimum_age_years: u32,
    /// Shortest password, in characters, that counts as strong enough.
    pub minimum_password_length: usize,
    /// Apply the length rule during registration and password reset.
    pub enforce_password_length: bool,
}

impl ValidationPolicy {
    /// Return `true` when `password` is non-blank and long enough.
    pub fn accepts_password(&self, password: &str) -> bool {
        !is_blank(password) && password.chars().count() >= self.minimum_password_length
    }
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            minimum_age_years: DEFAULT_MINIMUM_AGE_YEARS,
            minimum_password_length: DEFAULT_MINIMUM_PASSWORD_LENGTH,
            enforce_password_length: false,
        }
    }
}

/// Everything a validation pass needs besides the input itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationContext {
    /// Calendar date used for age checks.
    pub today: NaiveDate,
    /// Active thresholds.
    pub policy: ValidationPolicy,
}

impl ValidationContext {
    /// Build a context with the default policy.
    pub fn on(today: NaiveDate) -> Self {
        Self {
            today,
            policy: ValidationPolicy::default(),
        }
    }

    /// Replace the policy.
    #[must_use]
    pub fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Return `true` when `password` is non-blank and at least six characters.
///
/// # Examples
/// ```
/// use sanjibook::domain::validation::is_valid_password;
///
/// assert!(is_valid_password("secret"));
/// assert!(!is_valid_password("12345"));
/// ```
pub fn is_valid_password(password: &str) -> bool {
    ValidationPolicy::default().accepts_password(password)
}

/// Validate login input. Only presence and email shape are checked.
///
/// # Examples
/// ```
/// use sanjibook::domain::validation::{Field, messages, validate_email_password};
///
/// let errors = validate_email_password("abc", "");
/// assert_eq!(errors.get(Field::Email), Some(messages::EMAIL_INVALID));
/// assert_eq!(errors.get(Field::Password), Some(messages::PASSWORD_REQUIRED));
/// ```
pub fn validate_email_password(email: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    check_email(&mut errors, email);
    if is_blank(password) {
        errors.insert(Field::Password, messages::PASSWORD_REQUIRED);
    }
    errors
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub(crate) fn check_email(errors: &mut FieldErrors, email: &str) {
    if is_blank(email) {
        errors.insert(Field::Email, messages::EMAIL_REQUIRED);
    } else if !is_valid_email(email) {
        errors.insert(Field::Email, messages::EMAIL_INVALID);
    }
}

pub(crate) fn check_password_pair(
    errors: &mut FieldErrors,
    password: &str,
    confirmation: &str,
    policy: &ValidationPolicy,
) {
    if is_blank(password) || is_blank(confirmation) {
        errors.insert(Field::Password, messages::PASSWORDS_REQUIRED);
    } else if password != confirmation {
        errors.insert(Field::Password, messages::PASSWORDS_MISMATCH);
    } else if policy.enforce_password_length && !policy.accepts_password(password) {
        errors.insert(
            Field::Password,
            messages::password_too_short(policy.minimum_password_length),
        );
    }
}

#[cfg(test)]
mod tests;
