//! Driving port for login use-cases.
//!
//! Callers (a UI, the CLI) log users in through this port without knowing
//! which lookup or hashing adapters sit behind it, so their tests can swap in
//! a double instead of wiring storage.

use crate::domain::{Credentials, Error, Session};

/// Domain use-case port for logging in.
#[cfg_attr(test, mockall::automock)]
pub trait LoginService: Send + Sync {
    /// Validate and authenticate `credentials`, returning a fresh session.
    ///
    /// Rejections are uniform: unknown emails and wrong passwords both yield
    /// an `Unauthorized` error with the same message.
    fn login(&self, credentials: &Credentials) -> Result<Session, Error>;
}
