//! Password recovery: replace the password of an existing account.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::ports::{PasswordHashError, PasswordHasher, UserLookup, UserPersistenceError, UserStore};
use crate::domain::validation::{FieldErrors, PasswordReset, ValidationPolicy, validate_password_reset};
use crate::domain::{Error as DomainError, User};

/// Failures of [`PasswordResetService::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordResetError {
    #[error("password reset rejected: {0}")]
    Invalid(FieldErrors),
    /// No account is registered under the email.
    #[error("no account is registered under {email}")]
    UnknownEmail { email: String },
    #[error(transparent)]
    Digest(#[from] PasswordHashError),
    #[error(transparent)]
    Persistence(#[from] UserPersistenceError),
}

impl From<PasswordResetError> for DomainError {
    fn from(value: PasswordResetError) -> Self {
        match value {
            PasswordResetError::Invalid(errors) => {
                Self::invalid_request("invalid password reset").with_details(errors.to_details())
            }
            err @ PasswordResetError::UnknownEmail { .. } => Self::not_found(err.to_string()),
            PasswordResetError::Persistence(err @ UserPersistenceError::Connection { .. }) => {
                Self::service_unavailable(err.to_string())
            }
            other => Self::internal(other.to_string()),
        }
    }
}

/// Replaces stored password digests after validating a reset request.
pub struct PasswordResetService<L, S, H> {
    lookup: Arc<L>,
    store: Arc<S>,
    hasher: Arc<H>,
    policy: ValidationPolicy,
}

impl<L, S, H> PasswordResetService<L, S, H> {
    pub fn new(lookup: Arc<L>, store: Arc<S>, hasher: Arc<H>, policy: ValidationPolicy) -> Self {
        Self {
            lookup,
            store,
            hasher,
            policy,
        }
    }
}

impl<L, S, H> PasswordResetService<L, S, H>
where
    L: UserLookup,
    S: UserStore,
    H: PasswordHasher,
{
    /// Validate `request` and store a fresh digest for the account.
    ///
    /// Returns the user as it now stands.
    pub fn reset(&self, request: &PasswordReset) -> Result<User, PasswordResetError> {
        validate_password_reset(request, &self.policy)
            .into_result()
            .map_err(|errors| {
                debug!(fields = errors.len(), "password reset rejected");
                PasswordResetError::Invalid(errors)
            })?;

        let Some(user) = self.lookup.find_by_email(&request.email)? else {
            return Err(PasswordResetError::UnknownEmail {
                email: request.email.clone(),
            });
        };

        let digest = self.hasher.hash(&request.password)?;
        self.store.update_password(user.id(), &digest)?;
        info!(user_id = %user.id(), "password reset");
        Ok(user.with_password_digest(digest))
    }
}
