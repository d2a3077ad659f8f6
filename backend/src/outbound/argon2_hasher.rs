//! Argon2id-backed `PasswordHasher` adapter.
//!
//! Digests are PHC strings, so the algorithm, parameters and salt travel with
//! each stored password and older digests keep verifying after a parameter
//! change.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{self, PasswordHash, SaltString};
use argon2::{Algorithm, Argon2, Params, PasswordHasher as _, PasswordVerifier, Version};
use tracing::warn;

use crate::domain::PasswordDigest;
use crate::domain::ports::{PasswordHashError, PasswordHasher};

const DECOY_PASSWORD: &str = "sanjibook-decoy-password";

/// Password hasher using Argon2id with a fresh random salt per digest.
#[derive(Debug, Clone)]
pub struct Argon2PasswordHasher {
    params: Params,
    /// Digest checked when no account matches the submitted email.
    decoy: Option<String>,
}

impl Default for Argon2PasswordHasher {
    fn default() -> Self {
        Self::with_params(Params::default())
    }
}

impl Argon2PasswordHasher {
    /// Create a hasher with explicit cost parameters.
    ///
    /// The decoy digest is hashed here rather than on first use.
    pub fn with_params(params: Params) -> Self {
        let mut hasher = Self {
            params,
            decoy: None,
        };
        hasher.decoy = match hasher.hash(DECOY_PASSWORD) {
            Ok(digest) => Some(digest.as_ref().to_owned()),
            Err(err) => {
                warn!(error = %err, "decoy digest unavailable");
                None
            }
        };
        hasher
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> Result<PasswordDigest, PasswordHashError> {
        let salt = SaltString::generate(&mut OsRng);
        let phc = self
            .argon2()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|err| PasswordHashError::hash(err.to_string()))?;
        PasswordDigest::new(phc.to_string()).map_err(|err| PasswordHashError::hash(err.to_string()))
    }

    fn verify(&self, password: &str, digest: &PasswordDigest) -> Result<bool, PasswordHashError> {
        let parsed = PasswordHash::new(digest.as_ref())
            .map_err(|err| PasswordHashError::malformed_digest(err.to_string()))?;
        match self.argon2().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(err) => Err(PasswordHashError::malformed_digest(err.to_string())),
        }
    }

    fn verify_decoy(&self, password: &str) {
        let Some(digest) = self.decoy.as_deref() else {
            return;
        };
        if let Ok(parsed) = PasswordHash::new(digest) {
            let _ = self.argon2().verify_password(password.as_bytes(), &parsed);
        }
    }
}
