//! Authenticated session value.
//!
//! A session is handed back to the caller on login. Nothing in the domain
//! keeps a process-wide "current user"; callers own the session and pass it
//! where it is needed.

use chrono::{DateTime, Utc};

use crate::domain::{User, UserId};

/// A user signed in at a given instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user: User,
    started_at: DateTime<Utc>,
}

impl Session {
    /// Open a session for `user` at `started_at`.
    pub fn start(user: User, started_at: DateTime<Utc>) -> Self {
        Self { user, started_at }
    }

    /// The signed-in user.
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Identifier of the signed-in user.
    pub fn user_id(&self) -> &UserId {
        self.user.id()
    }

    /// When the session began.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Consume the session, returning its user.
    pub fn into_user(self) -> User {
        self.user
    }
}
