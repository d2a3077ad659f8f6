//! Tests for registration and login validation rules.

use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;
use rstest::{fixture, rstest};
use rstest_bdd_macros::{given, then, when};

use super::*;
use crate::domain::Credentials;

struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

#[fixture]
fn today() -> NaiveDate {
    date(2026, 10, 18)
}

#[fixture]
fn context(today: NaiveDate) -> ValidationContext {
    ValidationContext::on(today)
}

#[fixture]
fn valid_candidate() -> Candidate {
    Candidate {
        email: "ana@demo.com".to_owned(),
        password: "1234".to_owned(),
        password_confirmation: "1234".to_owned(),
        given_name: "Ana".to_owned(),
        family_name: "Rojas".to_owned(),
        birth_date: "14/03/1990".to_owned(),
        sex: "Femenino".to_owned(),
        terms_accepted: true,
    }
}

#[rstest]
fn valid_candidate_has_no_errors(valid_candidate: Candidate, context: ValidationContext) {
    let errors = validate_registration(&valid_candidate, &context);
    assert!(errors.is_empty(), "unexpected errors: {errors}");
}

#[rstest]
fn empty_candidate_reports_every_field(context: ValidationContext) {
    let errors = validate_registration(&Candidate::default(), &context);
    assert_eq!(errors.get(Field::GivenName), Some(messages::REQUIRED));
    assert_eq!(errors.get(Field::FamilyName), Some(messages::REQUIRED));
    assert_eq!(errors.get(Field::Email), Some(messages::EMAIL_REQUIRED));
    assert_eq!(errors.get(Field::Password), Some(messages::PASSWORDS_REQUIRED));
    assert_eq!(errors.get(Field::BirthDate), Some(messages::REQUIRED));
    assert_eq!(errors.get(Field::Sex), Some(messages::REQUIRED));
    assert_eq!(errors.get(Field::Terms), Some(messages::TERMS_REQUIRED));
}

#[rstest]
#[case("")]
#[case("   ")]
fn blank_email_is_required(
    mut valid_candidate: Candidate,
    context: ValidationContext,
    #[case] email: &str,
) {
    valid_candidate.email = email.to_owned();
    let errors = validate_registration(&valid_candidate, &context);
    assert_eq!(errors.get(Field::Email), Some(messages::EMAIL_REQUIRED));
}

#[rstest]
#[case("abc")]
#[case("a@b")]
#[case("ana@demo")]
fn malformed_email_is_invalid(
    mut valid_candidate: Candidate,
    context: ValidationContext,
    #[case] email: &str,
) {
    valid_candidate.email = email.to_owned();
    let errors = validate_registration(&valid_candidate, &context);
    assert_eq!(errors.get(Field::Email), Some(messages::EMAIL_INVALID));
    assert_eq!(errors.len(), 1);
}

#[rstest]
#[case("ana.rojas@correo.uchile.cl")]
#[case("ANA@DEMO.COM")]
fn permissive_email_shapes_pass(
    mut valid_candidate: Candidate,
    context: ValidationContext,
    #[case] email: &str,
) {
    valid_candidate.email = email.to_owned();
    assert!(!validate_registration(&valid_candidate, &context).contains(Field::Email));
}

#[rstest]
#[case("secret", "Secret")]
#[case("1234", "12345")]
#[case("abc", "abc ")]
fn differing_passwords_mismatch(
    mut valid_candidate: Candidate,
    context: ValidationContext,
    #[case] password: &str,
    #[case] confirmation: &str,
) {
    valid_candidate.password = password.to_owned();
    valid_candidate.password_confirmation = confirmation.to_owned();
    let errors = validate_registration(&valid_candidate, &context);
    assert_eq!(errors.get(Field::Password), Some(messages::PASSWORDS_MISMATCH));
}

#[rstest]
#[case("", "")]
#[case("secret", "")]
#[case("", "secret")]
#[case("  ", "  ")]
fn blank_password_side_requires_both(
    mut valid_candidate: Candidate,
    context: ValidationContext,
    #[case] password: &str,
    #[case] confirmation: &str,
) {
    valid_candidate.password = password.to_owned();
    valid_candidate.password_confirmation = confirmation.to_owned();
    let errors = validate_registration(&valid_candidate, &context);
    assert_eq!(errors.get(Field::Password), Some(messages::PASSWORDS_REQUIRED));
}

#[rstest]
fn short_matching_password_passes_by_default(
    mut valid_candidate: Candidate,
    context: ValidationContext,
) {
    valid_candidate.password = "1".to_owned();
    valid_candidate.password_confirmation = "1".to_owned();
    assert!(!validate_registration(&valid_candidate, &context).contains(Field::Password));
}

#[rstest]
fn length_rule_applies_when_enforced(mut valid_candidate: Candidate, today: NaiveDate) {
    valid_candidate.password = "12345".to_owned();
    valid_candidate.password_confirmation = "12345".to_owned();
    let strict = ValidationContext::on(today).with_policy(ValidationPolicy {
        enforce_password_length: true,
        ..ValidationPolicy::default()
    });
    let errors = validate_registration(&valid_candidate, &strict);
    assert_eq!(
        errors.get(Field::Password),
        Some(messages::password_too_short(6).as_str())
    );
}

#[rstest]
fn mismatch_wins_over_length_rule(mut valid_candidate: Candidate, today: NaiveDate) {
    valid_candidate.password = "1".to_owned();
    valid_candidate.password_confirmation = "2".to_owned();
    let strict = ValidationContext::on(today).with_policy(ValidationPolicy {
        enforce_password_length: true,
        ..ValidationPolicy::default()
    });
    let errors = validate_registration(&valid_candidate, &strict);
    assert_eq!(errors.get(Field::Password), Some(messages::PASSWORDS_MISMATCH));
}

#[rstest]
#[case("31/02/2000")]
#[case("32/01/2000")]
#[case("2000-01-01")]
#[case("yesterday")]
fn unparseable_birth_date_is_invalid(
    mut valid_candidate: Candidate,
    context: ValidationContext,
    #[case] birth_date: &str,
) {
    valid_candidate.birth_date = birth_date.to_owned();
    let errors = validate_registration(&valid_candidate, &context);
    assert_eq!(errors.get(Field::BirthDate), Some(messages::DATE_INVALID));
}

#[rstest]
#[case("18/10/2008", false)]
#[case("17/10/2008", true)]
#[case("19/10/2008", false)]
#[case("01/01/2020", false)]
#[case("01/01/2030", false)]
fn minimum_age_boundary_is_exclusive(
    mut valid_candidate: Candidate,
    context: ValidationContext,
    #[case] birth_date: &str,
    #[case] accepted: bool,
) {
    valid_candidate.birth_date = birth_date.to_owned();
    let errors = validate_registration(&valid_candidate, &context);
    if accepted {
        assert!(!errors.contains(Field::BirthDate), "unexpected errors: {errors}");
    } else {
        assert_eq!(
            errors.get(Field::BirthDate),
            Some(messages::too_young(18).as_str())
        );
    }
}

#[rstest]
fn minimum_age_follows_policy(mut valid_candidate: Candidate, today: NaiveDate) {
    valid_candidate.birth_date = "17/10/2008".to_owned();
    let policy = ValidationPolicy {
        minimum_age_years: 21,
        ..ValidationPolicy::default()
    };
    let errors = validate_registration(
        &valid_candidate,
        &ValidationContext::on(today).with_policy(policy),
    );
    assert_eq!(
        errors.get(Field::BirthDate),
        Some(messages::too_young(21).as_str())
    );
}

#[rstest]
#[case("Masculino")]
#[case("Femenino")]
#[case("Prefiero omitir")]
#[case("otro")]
fn any_non_blank_sex_label_passes(
    mut valid_candidate: Candidate,
    context: ValidationContext,
    #[case] sex: &str,
) {
    valid_candidate.sex = sex.to_owned();
    assert!(!validate_registration(&valid_candidate, &context).contains(Field::Sex));
}

#[rstest]
fn unaccepted_terms_are_reported(mut valid_candidate: Candidate, context: ValidationContext) {
    valid_candidate.terms_accepted = false;
    let errors = validate_registration(&valid_candidate, &context);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(Field::Terms), Some(messages::TERMS_REQUIRED));
}

#[rstest]
fn validation_is_idempotent(context: ValidationContext) {
    let candidate = Candidate {
        email: "a@b".to_owned(),
        password: "x".to_owned(),
        password_confirmation: "y".to_owned(),
        birth_date: "31/02/2000".to_owned(),
        ..Candidate::default()
    };
    let first = validate_registration(&candidate, &context);
    let second = validate_registration(&candidate, &context);
    assert_eq!(first, second);
}

#[rstest]
#[case("", "", &[(Field::Email, messages::EMAIL_REQUIRED), (Field::Password, messages::PASSWORD_REQUIRED)])]
#[case("abc", "pw", &[(Field::Email, messages::EMAIL_INVALID)])]
#[case("ana@demo.com", "  ", &[(Field::Password, messages::PASSWORD_REQUIRED)])]
#[case("ana@demo.com", "1", &[])]
fn email_password_rules(
    #[case] email: &str,
    #[case] password: &str,
    #[case] expected: &[(Field, &str)],
) {
    let errors = validate_email_password(email, password);
    let actual: Vec<(Field, &str)> = errors.iter().collect();
    assert_eq!(actual, expected);
}

#[rstest]
#[case("", false)]
#[case("      ", false)]
#[case("12345", false)]
#[case("123456", true)]
#[case("ñandú!", true)]
fn password_strength_rule(#[case] password: &str, #[case] expected: bool) {
    assert_eq!(is_valid_password(password), expected);
}

#[rstest]
fn validator_reads_date_from_clock(valid_candidate: Candidate) {
    let noon = Utc
        .with_ymd_and_hms(2026, 10, 18, 12, 0, 0)
        .single()
        .expect("valid fixture timestamp");
    let validator = RegistrationValidator::new(
        Arc::new(FixtureClock { utc_now: noon }),
        ValidationPolicy::default(),
    );
    assert_eq!(validator.today(), noon.with_timezone(&Local).date_naive());
    assert!(validator.validate(&valid_candidate).is_empty());
}

#[rstest]
fn validable_dispatches_per_record(valid_candidate: Candidate, context: ValidationContext) {
    let credentials = Credentials::new("ana@demo.com", "");
    let reset = PasswordReset {
        email: "ana@demo.com".to_owned(),
        password: "abcdef".to_owned(),
        password_confirmation: "abcdeg".to_owned(),
    };

    assert_eq!(
        credentials.validate(&context).get(Field::Password),
        Some(messages::PASSWORD_REQUIRED)
    );
    assert_eq!(
        reset.validate(&context).get(Field::Password),
        Some(messages::PASSWORDS_MISMATCH)
    );
    assert!(valid_candidate.validate(&context).is_empty());
    assert!(valid_candidate.check_email());
    assert!(!valid_candidate.check_password(&context.policy));
    assert!(reset.check_password(&context.policy));
}

#[rstest]
fn candidate_debug_hides_passwords(valid_candidate: Candidate) {
    let candidate = Candidate {
        password: "hunter22".to_owned(),
        password_confirmation: "hunter23".to_owned(),
        ..valid_candidate
    };
    let rendered = format!("{candidate:?}");
    assert!(rendered.contains(&candidate.email));
    assert!(!rendered.contains("hunter22"));
    assert!(!rendered.contains("hunter23"));
}

#[given("a candidate born exactly eighteen years ago")]
fn a_candidate_born_exactly_eighteen_years_ago(valid_candidate: Candidate) -> Candidate {
    Candidate {
        birth_date: "18/10/2008".to_owned(),
        ..valid_candidate
    }
}

#[when("the registration form is validated")]
fn the_registration_form_is_validated(
    candidate: Candidate,
    context: ValidationContext,
) -> FieldErrors {
    validate_registration(&candidate, &context)
}

#[then("only the birth date is rejected as too young")]
fn only_the_birth_date_is_rejected_as_too_young(errors: FieldErrors) {
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.get(Field::BirthDate),
        Some(messages::too_young(18).as_str())
    );
}

#[rstest]
fn eighteenth_birthday_is_not_enough(valid_candidate: Candidate, context: ValidationContext) {
    let candidate = a_candidate_born_exactly_eighteen_years_ago(valid_candidate);
    let errors = the_registration_form_is_validated(candidate, context);
    only_the_birth_date_is_rejected_as_too_young(errors);
}
