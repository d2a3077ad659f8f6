//! Login use-case: validate, authenticate, open a session.

use std::sync::Arc;

use mockable::Clock;
use tracing::{debug, info, warn};

use crate::domain::ports::{LoginService, PasswordHasher, UserLookup};
use crate::domain::validation::validate_email_password;
use crate::domain::{AuthOutcome, Authenticator, Credentials, Error, Session};

/// Message returned for every rejected login, whatever the reason.
pub const INVALID_CREDENTIALS: &str = "invalid credentials";

/// Message returned when the login payload fails field validation.
pub const INVALID_LOGIN_PAYLOAD: &str = "invalid login payload";

/// [`LoginService`] backed by an [`Authenticator`] and a clock.
pub struct SessionLoginService<L, H> {
    authenticator: Authenticator<L, H>,
    clock: Arc<dyn Clock>,
}

impl<L, H> SessionLoginService<L, H> {
    /// Create a login service.
    pub fn new(authenticator: Authenticator<L, H>, clock: Arc<dyn Clock>) -> Self {
        Self {
            authenticator,
            clock,
        }
    }
}

impl<L, H> LoginService for SessionLoginService<L, H>
where
    L: UserLookup,
    H: PasswordHasher,
{
    fn login(&self, credentials: &Credentials) -> Result<Session, Error> {
        let errors = validate_email_password(credentials.email(), credentials.password());
        if !errors.is_empty() {
            return Err(Error::invalid_request(INVALID_LOGIN_PAYLOAD).with_details(errors.to_details()));
        }

        match self.authenticator.authenticate_credentials(credentials) {
            Ok(AuthOutcome::Authenticated(user)) => {
                info!(user_id = %user.id(), "session started");
                Ok(Session::start(user, self.clock.utc()))
            }
            Ok(AuthOutcome::Rejected(reason)) => {
                debug!(%reason, "login rejected");
                Err(Error::unauthorized(INVALID_CREDENTIALS))
            }
            Err(err) => {
                warn!(error = %err, "login failed");
                Err(err.into())
            }
        }
    }
}
