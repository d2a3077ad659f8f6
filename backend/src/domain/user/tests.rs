//! Tests for the domain user model.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const VALID_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";
const VALID_DIGEST: &str = "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaGhhc2g";

#[fixture]
fn valid_id() -> UserId {
    UserId::new(VALID_ID).expect("valid fixture id")
}

#[fixture]
fn digest() -> PasswordDigest {
    PasswordDigest::new(VALID_DIGEST).expect("valid fixture digest")
}

#[fixture]
fn ana(valid_id: UserId, digest: PasswordDigest) -> User {
    User::new(
        valid_id,
        Email::new("ana@demo.com").expect("valid fixture email"),
        digest,
        UserProfile {
            given_name: "Ana".to_owned(),
            ..UserProfile::default()
        },
        Role::default(),
    )
}

#[rstest]
fn user_id_rejects_empty_input() {
    assert_eq!(UserId::new(""), Err(UserValidationError::EmptyId));
}

#[rstest]
#[case("not-a-uuid")]
#[case(" 3fa85f64-5717-4562-b3fc-2c963f66afa6 ")]
fn user_id_rejects_malformed_input(#[case] raw: &str) {
    assert_eq!(UserId::new(raw), Err(UserValidationError::InvalidId));
}

#[rstest]
fn user_id_from_uuid_avoids_round_trip_parse() {
    let uuid = Uuid::parse_str(VALID_ID).expect("valid UUID");
    let user_id = UserId::from_uuid(uuid);

    assert_eq!(user_id.as_uuid(), &uuid);
    assert_eq!(user_id.as_ref(), VALID_ID);
}

#[rstest]
fn random_user_ids_differ() {
    assert_ne!(UserId::random(), UserId::random());
}

#[rstest]
fn user_id_serialises_as_string(valid_id: UserId) {
    let value = serde_json::to_value(&valid_id).expect("serialise id");
    assert_eq!(value, json!(VALID_ID));
    let restored: UserId = serde_json::from_value(value).expect("deserialise id");
    assert_eq!(restored, valid_id);
}

#[rstest]
#[case("", UserValidationError::EmptyEmail)]
#[case("  ", UserValidationError::EmptyEmail)]
#[case("a@b", UserValidationError::InvalidEmail)]
#[case("abc", UserValidationError::InvalidEmail)]
fn email_rejects_invalid_input(#[case] raw: &str, #[case] expected: UserValidationError) {
    assert_eq!(Email::new(raw), Err(expected));
}

#[rstest]
fn email_deserialisation_validates() {
    let result: Result<Email, _> = serde_json::from_value(json!("nope"));
    assert!(result.is_err());
}

#[rstest]
fn digest_rejects_blank_input() {
    assert_eq!(
        PasswordDigest::new(" "),
        Err(UserValidationError::EmptyPasswordDigest)
    );
}

#[rstest]
fn digest_debug_output_is_redacted(digest: PasswordDigest) {
    let rendered = format!("{digest:?}");
    assert!(!rendered.contains("argon2"));
    assert!(rendered.contains("redacted"));
}

#[rstest]
fn user_debug_output_hides_digest(ana: User) {
    assert!(!format!("{ana:?}").contains(VALID_DIGEST));
}

#[rstest]
fn new_users_default_to_member_role(ana: User) {
    assert_eq!(ana.role(), Role::Member);
}

#[rstest]
fn with_password_digest_keeps_identity(ana: User) {
    let replacement = PasswordDigest::new("$argon2id$replacement").expect("valid digest");
    let updated = ana.clone().with_password_digest(replacement.clone());

    assert_eq!(updated.id(), ana.id());
    assert_eq!(updated.email(), ana.email());
    assert_eq!(updated.password_digest(), &replacement);
    assert_eq!(updated.profile(), ana.profile());
}

#[rstest]
fn profile_serialises_in_camel_case() {
    let profile = UserProfile {
        given_name: "Ana".to_owned(),
        family_name: "Rojas".to_owned(),
        birth_date: NaiveDate::from_ymd_opt(1990, 3, 14),
        sex: "Femenino".to_owned(),
        terms_accepted: true,
    };
    let value = serde_json::to_value(&profile).expect("serialise profile");
    assert_eq!(value["givenName"], json!("Ana"));
    assert_eq!(value["birthDate"], json!("1990-03-14"));
    assert_eq!(value["termsAccepted"], json!(true));
}
