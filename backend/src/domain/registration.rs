//! Registration use-case: validate a candidate and store a new member.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::ports::{PasswordHashError, PasswordHasher, UserLookup, UserPersistenceError, UserStore};
use crate::domain::validation::{
    Candidate, Field, FieldErrors, RegistrationValidator, messages, parse_birth_date,
};
use crate::domain::{Email, Error as DomainError, Role, User, UserId, UserProfile};

/// Failures of [`RegistrationService::register`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// One or more form fields were rejected.
    #[error("registration rejected: {0}")]
    Invalid(FieldErrors),
    /// An account already uses the email.
    #[error("email {email} is already registered")]
    EmailTaken { email: String },
    #[error(transparent)]
    Digest(#[from] PasswordHashError),
    #[error(transparent)]
    Persistence(UserPersistenceError),
}

impl From<UserPersistenceError> for RegistrationError {
    fn from(value: UserPersistenceError) -> Self {
        match value {
            UserPersistenceError::DuplicateEmail { email } => Self::EmailTaken { email },
            other => Self::Persistence(other),
        }
    }
}

impl From<RegistrationError> for DomainError {
    fn from(value: RegistrationError) -> Self {
        match value {
            RegistrationError::Invalid(errors) => {
                Self::invalid_request("invalid registration").with_details(errors.to_details())
            }
            err @ RegistrationError::EmailTaken { .. } => Self::conflict(err.to_string()),
            RegistrationError::Persistence(err @ UserPersistenceError::Connection { .. }) => {
                Self::service_unavailable(err.to_string())
            }
            other => Self::internal(other.to_string()),
        }
    }
}

/// Creates member accounts from validated registration candidates.
pub struct RegistrationService<L, S, H> {
    lookup: Arc<L>,
    store: Arc<S>,
    hasher: Arc<H>,
    validator: RegistrationValidator,
}

impl<L, S, H> RegistrationService<L, S, H> {
    /// Create a registration service.
    pub fn new(
        lookup: Arc<L>,
        store: Arc<S>,
        hasher: Arc<H>,
        validator: RegistrationValidator,
    ) -> Self {
        Self {
            lookup,
            store,
            hasher,
            validator,
        }
    }
}

impl<L, S, H> RegistrationService<L, S, H>
where
    L: UserLookup,
    S: UserStore,
    H: PasswordHasher,
{
    /// Validate `candidate` and store it as a new [`Role::Member`].
    ///
    /// Nothing is written unless every field passes validation and the email
    /// is free.
    pub fn register(&self, candidate: &Candidate) -> Result<User, RegistrationError> {
        self.validator
            .validate(candidate)
            .into_result()
            .map_err(|errors| {
                debug!(fields = errors.len(), "registration rejected");
                RegistrationError::Invalid(errors)
            })?;

        let email = Email::new(candidate.email.as_str()).map_err(|_| {
            let mut errors = FieldErrors::new();
            errors.insert(Field::Email, messages::EMAIL_INVALID);
            RegistrationError::Invalid(errors)
        })?;

        if self.lookup.find_by_email(email.as_ref())?.is_some() {
            return Err(RegistrationError::EmailTaken {
                email: email.into(),
            });
        }

        let profile = UserProfile {
            given_name: candidate.given_name.trim().to_owned(),
            family_name: candidate.family_name.trim().to_owned(),
            birth_date: parse_birth_date(&candidate.birth_date).ok(),
            sex: candidate.sex.trim().to_owned(),
            terms_accepted: candidate.terms_accepted,
        };
        let digest = self.hasher.hash(&candidate.password)?;
        let user = User::new(UserId::random(), email, digest, profile, Role::Member);

        self.store.insert(&user)?;
        info!(user_id = %user.id(), "user registered");
        Ok(user)
    }
}
