//! Password-recovery form validation.

use std::fmt;

use super::{FieldErrors, ValidationPolicy, check_email, check_password_pair};

/// Request to replace the password of the account registered under `email`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct PasswordReset {
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

impl fmt::Debug for PasswordReset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordReset")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("password_confirmation", &"<redacted>")
            .finish()
    }
}

/// Validate a password reset request.
///
/// Uses the registration rules for the email and the password pair.
pub fn validate_password_reset(reset: &PasswordReset, policy: &ValidationPolicy) -> FieldErrors {
    let mut errors = FieldErrors::new();
    check_email(&mut errors, &reset.email);
    check_password_pair(
        &mut errors,
        &reset.password,
        &reset.password_confirmation,
        policy,
    );
    errors
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::validation::{Field, messages};
    use rstest::rstest;

    fn reset(email: &str, password: &str, confirmation: &str) -> PasswordReset {
        PasswordReset {
            email: email.to_owned(),
            password: password.to_owned(),
            password_confirmation: confirmation.to_owned(),
        }
    }

    #[rstest]
    fn accepts_matching_pair() {
        let errors = validate_password_reset(
            &reset("ana@demo.com", "n3w-secret", "n3w-secret"),
            &ValidationPolicy::default(),
        );
        assert!(errors.is_empty(), "unexpected errors: {errors}");
    }

    #[rstest]
    #[case("", "a", "a", Field::Email, messages::EMAIL_REQUIRED)]
    #[case("ana", "a", "a", Field::Email, messages::EMAIL_INVALID)]
    #[case("ana@demo.com", "", "a", Field::Password, messages::PASSWORDS_REQUIRED)]
    #[case("ana@demo.com", "a", " ", Field::Password, messages::PASSWORDS_REQUIRED)]
    #[case("ana@demo.com", "a", "b", Field::Password, messages::PASSWORDS_MISMATCH)]
    fn reports_single_violation(
        #[case] email: &str,
        #[case] password: &str,
        #[case] confirmation: &str,
        #[case] field: Field,
        #[case] message: &str,
    ) {
        let errors = validate_password_reset(
            &reset(email, password, confirmation),
            &ValidationPolicy::default(),
        );
        assert_eq!(errors.len(), 1, "unexpected errors: {errors}");
        assert_eq!(errors.get(field), Some(message));
    }

    #[rstest]
    fn debug_output_hides_both_passwords() {
        let rendered = format!("{:?}", reset("ana@demo.com", "hunter22", "hunter23"));
        assert!(rendered.contains("ana@demo.com"));
        assert!(!rendered.contains("hunter22"));
        assert!(!rendered.contains("hunter23"));
    }

    #[rstest]
    fn length_rule_follows_policy() {
        let request = reset("ana@demo.com", "1234", "1234");
        assert!(validate_password_reset(&request, &ValidationPolicy::default()).is_empty());

        let strict = ValidationPolicy {
            enforce_password_length: true,
            ..ValidationPolicy::default()
        };
        let errors = validate_password_reset(&request, &strict);
        assert_eq!(
            errors.get(Field::Password),
            Some(messages::password_too_short(6).as_str())
        );
    }
}
