//! Ports for user persistence adapters and their errors.
//!
//! Lookup and mutation are separate traits so read-only collaborators such as
//! the [`crate::domain::Authenticator`] only ask for what they use.

use crate::domain::{PasswordDigest, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// Another account already uses the email.
        DuplicateEmail { email: String } => "a user with email {email} already exists",
        /// Mutation targeted an account that does not exist.
        MissingUser { id: String } => "user {id} does not exist",
    }
}

/// Read access to stored users, keyed by login email.
#[cfg_attr(test, mockall::automock)]
pub trait UserLookup: Send + Sync {
    /// Fetch the user registered under `email`, if any.
    ///
    /// Emails are compared exactly; callers pass what the user typed.
    fn find_by_email(&self, email: &str) -> Result<Option<User>, UserPersistenceError>;
}

/// Write access to stored users.
#[cfg_attr(test, mockall::automock)]
pub trait UserStore: Send + Sync {
    /// Insert a new user.
    ///
    /// Fails with [`UserPersistenceError::DuplicateEmail`] when the email is
    /// already registered.
    fn insert(&self, user: &User) -> Result<(), UserPersistenceError>;

    /// Replace the password digest of an existing user.
    ///
    /// Fails with [`UserPersistenceError::MissingUser`] for unknown ids.
    fn update_password(
        &self,
        id: &UserId,
        digest: &PasswordDigest,
    ) -> Result<(), UserPersistenceError>;
}

/// Fixture lookup backed by an empty store.
///
/// Every lookup returns `None`. Use it where the user store is not under test.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserLookup;

impl UserLookup for FixtureUserLookup {
    fn find_by_email(&self, _email: &str) -> Result<Option<User>, UserPersistenceError> {
        Ok(None)
    }
}
