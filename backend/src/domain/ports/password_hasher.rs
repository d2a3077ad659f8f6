//! Port for one-way password hashing.

use crate::domain::PasswordDigest;

use super::define_port_error;

define_port_error! {
    /// Errors raised by password hashing adapters.
    pub enum PasswordHashError {
        /// Producing a digest failed.
        Hash { message: String } => "password hashing failed: {message}",
        /// A stored digest could not be parsed.
        MalformedDigest { message: String } => "stored password digest is malformed: {message}",
    }
}

/// Salted one-way hashing of shared secrets.
///
/// Implementations must never return the plaintext, and `verify` must answer
/// `Ok(false)` for a well-formed digest that does not match.
pub trait PasswordHasher: Send + Sync {
    /// Hash `password` with a fresh salt.
    fn hash(&self, password: &str) -> Result<PasswordDigest, PasswordHashError>;

    /// Check `password` against a stored digest.
    fn verify(&self, password: &str, digest: &PasswordDigest) -> Result<bool, PasswordHashError>;

    /// Spend the cost of a verification without a stored digest.
    ///
    /// Called when no account matches, so unknown emails and wrong passwords
    /// take comparable time. Outcomes and failures are ignored.
    fn verify_decoy(&self, _password: &str) {}
}

/// Non-cryptographic hasher for tests: the digest is the password behind a
/// fixed prefix.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePasswordHasher;

#[cfg(any(test, feature = "test-support"))]
impl FixturePasswordHasher {
    const PREFIX: &'static str = "$fixture$";
}

#[cfg(any(test, feature = "test-support"))]
impl PasswordHasher for FixturePasswordHasher {
    fn hash(&self, password: &str) -> Result<PasswordDigest, PasswordHashError> {
        PasswordDigest::new(format!("{}{password}", Self::PREFIX))
            .map_err(|err| PasswordHashError::hash(err.to_string()))
    }

    fn verify(&self, password: &str, digest: &PasswordDigest) -> Result<bool, PasswordHashError> {
        digest
            .as_ref()
            .strip_prefix(Self::PREFIX)
            .map(|stored| stored == password)
            .ok_or_else(|| PasswordHashError::malformed_digest("missing fixture prefix"))
    }
}
