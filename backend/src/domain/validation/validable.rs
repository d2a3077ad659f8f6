//! Shared validation capability for the account input records.

use super::{
    Candidate, FieldErrors, PasswordReset, ValidationContext, ValidationPolicy, is_valid_email,
    validate_email_password, validate_password_reset, validate_registration,
};
use crate::domain::Credentials;

/// Capability shared by every input record that carries an email and a password.
///
/// Each record implements its own rule set; callers pick the implementation
/// statically through the record type.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use sanjibook::domain::Credentials;
/// use sanjibook::domain::validation::{Validable, ValidationContext, ValidationPolicy};
///
/// fn ready<V: Validable>(input: &V, context: &ValidationContext) -> bool {
///     input.validate(context).is_empty()
/// }
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
/// let credentials = Credentials::new("ana@demo.com", "1234");
/// assert!(ready(&credentials, &ValidationContext::on(today)));
/// assert!(credentials.check_email());
/// assert!(!credentials.check_password(&ValidationPolicy::default()));
/// ```
pub trait Validable {
    /// Return `true` when the record's email has an address shape.
    fn check_email(&self) -> bool;

    /// Return `true` when the record's password satisfies the length rule.
    fn check_password(&self, policy: &ValidationPolicy) -> bool;

    /// Run the record's complete rule set.
    fn validate(&self, context: &ValidationContext) -> FieldErrors;
}

impl Validable for Credentials {
    fn check_email(&self) -> bool {
        is_valid_email(self.email())
    }

    fn check_password(&self, policy: &ValidationPolicy) -> bool {
        policy.accepts_password(self.password())
    }

    fn validate(&self, _context: &ValidationContext) -> FieldErrors {
        validate_email_password(self.email(), self.password())
    }
}

impl Validable for Candidate {
    fn check_email(&self) -> bool {
        is_valid_email(&self.email)
    }

    fn check_password(&self, policy: &ValidationPolicy) -> bool {
        policy.accepts_password(&self.password)
    }

    fn validate(&self, context: &ValidationContext) -> FieldErrors {
        validate_registration(self, context)
    }
}

impl Validable for PasswordReset {
    fn check_email(&self) -> bool {
        is_valid_email(&self.email)
    }

    fn check_password(&self, policy: &ValidationPolicy) -> bool {
        policy.accepts_password(&self.password)
    }

    fn validate(&self, context: &ValidationContext) -> FieldErrors {
        validate_password_reset(self, &context.policy)
    }
}
