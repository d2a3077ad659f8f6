//! Registration form validation.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use mockable::Clock;

use super::{
    Field, FieldErrors, ValidationContext, ValidationPolicy, check_email, check_password_pair,
    is_at_least, is_blank, messages, parse_birth_date,
};

/// Unsaved registration input exactly as the user typed it.
///
/// No field is trusted; run [`validate_registration`] (or
/// [`RegistrationValidator::validate`]) before using any of them.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Candidate {
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    pub given_name: String,
    pub family_name: String,
    /// Birth date in `dd/mm/yyyy` form.
    pub birth_date: String,
    /// Free-text sex label; the UI offers a fixed list but any non-blank value passes.
    pub sex: String,
    pub terms_accepted: bool,
}

impl fmt::Debug for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Candidate")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("password_confirmation", &"<redacted>")
            .field("given_name", &self.given_name)
            .field("family_name", &self.family_name)
            .field("birth_date", &self.birth_date)
            .field("sex", &self.sex)
            .field("terms_accepted", &self.terms_accepted)
            .finish()
    }
}

/// Validate a registration candidate against every rule.
///
/// All checks run independently; the returned mapping lists every failing
/// field rather than stopping at the first.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use sanjibook::domain::validation::{
///     Candidate, Field, ValidationContext, messages, validate_registration,
/// };
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
/// let errors = validate_registration(&Candidate::default(), &ValidationContext::on(today));
/// assert_eq!(errors.len(), 7);
/// assert_eq!(errors.get(Field::Terms), Some(messages::TERMS_REQUIRED));
/// ```
pub fn validate_registration(candidate: &Candidate, context: &ValidationContext) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if is_blank(&candidate.given_name) {
        errors.insert(Field::GivenName, messages::REQUIRED);
    }
    if is_blank(&candidate.family_name) {
        errors.insert(Field::FamilyName, messages::REQUIRED);
    }

    check_email(&mut errors, &candidate.email);
    check_password_pair(
        &mut errors,
        &candidate.password,
        &candidate.password_confirmation,
        &context.policy,
    );
    check_birth_date(&mut errors, &candidate.birth_date, context);

    if is_blank(&candidate.sex) {
        errors.insert(Field::Sex, messages::REQUIRED);
    }
    if !candidate.terms_accepted {
        errors.insert(Field::Terms, messages::TERMS_REQUIRED);
    }

    errors
}

fn check_birth_date(errors: &mut FieldErrors, raw: &str, context: &ValidationContext) {
    if is_blank(raw) {
        errors.insert(Field::BirthDate, messages::REQUIRED);
        return;
    }

    match parse_birth_date(raw) {
        Err(_) => errors.insert(Field::BirthDate, messages::DATE_INVALID),
        Ok(birth_date) => {
            let minimum = context.policy.minimum_age_years;
            if !is_at_least(birth_date, context.today, minimum) {
                errors.insert(Field::BirthDate, messages::too_young(minimum));
            }
        }
    }
}

/// Registration validator that reads today's date from a clock.
///
/// # Examples
/// ```
/// # use std::sync::Arc;
/// # use mockable::DefaultClock;
/// use sanjibook::domain::validation::{Candidate, RegistrationValidator, ValidationPolicy};
///
/// let validator = RegistrationValidator::new(Arc::new(DefaultClock), ValidationPolicy::default());
/// assert!(!validator.validate(&Candidate::default()).is_empty());
/// ```
#[derive(Clone)]
pub struct RegistrationValidator {
    clock: Arc<dyn Clock>,
    policy: ValidationPolicy,
}

impl RegistrationValidator {
    /// Create a validator bound to `clock` and `policy`.
    pub fn new(clock: Arc<dyn Clock>, policy: ValidationPolicy) -> Self {
        Self { clock, policy }
    }

    /// Active thresholds.
    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    /// Local calendar date according to the clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.local().date_naive()
    }

    /// Context for a validation pass happening now.
    pub fn context(&self) -> ValidationContext {
        ValidationContext::on(self.today()).with_policy(self.policy)
    }

    /// Validate `candidate` as of the clock's current date.
    pub fn validate(&self, candidate: &Candidate) -> FieldErrors {
        validate_registration(candidate, &self.context())
    }
}
