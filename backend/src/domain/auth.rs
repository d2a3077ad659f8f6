//! Authentication primitives: login credentials and the authenticator.
//!
//! The authenticator answers one question: do these credentials match a
//! stored user? Rejections are ordinary outcomes; only collaborator failures
//! (storage, digest parsing) are errors.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;
use tracing::debug;
use zeroize::Zeroizing;

use crate::domain::ports::{PasswordHashError, PasswordHasher, UserLookup, UserPersistenceError};
use crate::domain::{Error as DomainError, User};

/// Login input exactly as submitted.
///
/// The password is wiped from memory when the credentials are dropped.
/// Validation is a separate step; see
/// [`crate::domain::validation::validate_email_password`].
///
/// # Examples
/// ```
/// use sanjibook::domain::Credentials;
///
/// let creds = Credentials::new("ana@demo.com", "1234");
/// assert_eq!(creds.email(), "ana@demo.com");
/// assert_eq!(creds.password(), "1234");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: Zeroizing<String>,
}

impl Credentials {
    /// Capture raw email/password inputs.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Email used for the user lookup.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Why an authentication attempt was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionReason {
    /// No account is registered under the email.
    UserNotFound,
    /// The account exists but the password does not match.
    WrongPassword,
}

impl RejectionReason {
    /// Stable description, also used in logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UserNotFound => "user not found",
            Self::WrongPassword => "wrong password",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one authentication attempt. Exactly one variant per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Credentials matched the stored user.
    Authenticated(User),
    /// Credentials did not match.
    Rejected(RejectionReason),
}

impl AuthOutcome {
    /// Return `true` for [`AuthOutcome::Authenticated`].
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Collaborator failures surfaced by [`Authenticator::authenticate`].
///
/// Never used for "user not found"; that is [`AuthOutcome::Rejected`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The user lookup failed.
    #[error(transparent)]
    Lookup(#[from] UserPersistenceError),
    /// The stored digest could not be checked.
    #[error(transparent)]
    Digest(#[from] PasswordHashError),
}

impl From<AuthError> for DomainError {
    fn from(value: AuthError) -> Self {
        match value {
            AuthError::Lookup(err @ UserPersistenceError::Connection { .. }) => {
                Self::service_unavailable(err.to_string())
            }
            AuthError::Lookup(other) => Self::internal(other.to_string()),
            AuthError::Digest(err) => Self::internal(err.to_string()),
        }
    }
}

/// Decides whether credentials match a stored user.
///
/// Holds no per-call state; one instance can serve any number of callers.
///
/// # Examples
/// ```
/// # use std::sync::Arc;
/// use sanjibook::domain::ports::FixtureUserLookup;
/// use sanjibook::domain::{AuthOutcome, Authenticator, RejectionReason};
/// use sanjibook::outbound::Argon2PasswordHasher;
///
/// let authenticator = Authenticator::new(
///     Arc::new(FixtureUserLookup),
///     Arc::new(Argon2PasswordHasher::default()),
/// );
/// let outcome = authenticator.authenticate("missing@x.com", "any").unwrap();
/// assert_eq!(outcome, AuthOutcome::Rejected(RejectionReason::UserNotFound));
/// ```
pub struct Authenticator<L, H> {
    lookup: Arc<L>,
    hasher: Arc<H>,
}

impl<L, H> Clone for Authenticator<L, H> {
    fn clone(&self) -> Self {
        Self {
            lookup: Arc::clone(&self.lookup),
            hasher: Arc::clone(&self.hasher),
        }
    }
}

impl<L, H> Authenticator<L, H> {
    /// Create an authenticator over a user lookup and a password hasher.
    pub fn new(lookup: Arc<L>, hasher: Arc<H>) -> Self {
        Self { lookup, hasher }
    }
}

impl<L, H> Authenticator<L, H>
where
    L: UserLookup,
    H: PasswordHasher,
{
    /// Check `password` against the account registered under `email`.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<AuthOutcome, AuthError> {
        let Some(user) = self.lookup.find_by_email(email)? else {
            self.hasher.verify_decoy(password);
            debug!(reason = %RejectionReason::UserNotFound, "authentication rejected");
            return Ok(AuthOutcome::Rejected(RejectionReason::UserNotFound));
        };

        if self.hasher.verify(password, user.password_digest())? {
            debug!(user_id = %user.id(), "authentication succeeded");
            Ok(AuthOutcome::Authenticated(user))
        } else {
            debug!(
                user_id = %user.id(),
                reason = %RejectionReason::WrongPassword,
                "authentication rejected"
            );
            Ok(AuthOutcome::Rejected(RejectionReason::WrongPassword))
        }
    }

    /// [`Authenticator::authenticate`] over a [`Credentials`] value.
    pub fn authenticate_credentials(
        &self,
        credentials: &Credentials,
    ) -> Result<AuthOutcome, AuthError> {
        self.authenticate(credentials.email(), credentials.password())
    }
}
