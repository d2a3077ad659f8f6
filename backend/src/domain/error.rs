//! The error every domain service hands back to its caller.
//!
//! Port failures, validation results and authentication rejections all
//! collapse into an [`Error`] carrying an [`ErrorCode`]. The CLI prints it
//! as JSON; other front ends are free to pick their own envelope.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error as ThisError;

/// Failure category, stable across releases and serialised in `snake_case`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// A form or payload failed validation; field messages sit in `details`.
    InvalidRequest,
    /// Login refused. Unknown email and wrong password share this code.
    Unauthorized,
    /// The caller is known but does not own the target, e.g. another
    /// member's recipe.
    Forbidden,
    NotFound,
    /// The email is already registered.
    Conflict,
    /// A store could not be reached.
    ServiceUnavailable,
    InternalError,
}

/// Returned when an [`Error`] would be built around a blank message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
#[error("error message must not be blank")]
pub struct BlankMessage;

/// Code, human-readable message and optional structured details.
///
/// The message is never blank; both constructors and deserialisation check
/// it.
///
/// # Examples
/// ```
/// use sanjibook::domain::{Error, ErrorCode};
///
/// let err = Error::new(ErrorCode::NotFound, "recipe not found");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.to_string(), "recipe not found");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WireError", into = "WireError")]
pub struct Error {
    code: ErrorCode,
    message: String,
    details: Option<Value>,
}

macro_rules! shorthand {
    ($($(#[$meta:meta])* $name:ident => $code:ident;)+) => {
        $(
            $(#[$meta])*
            pub fn $name(message: impl Into<String>) -> Self {
                Self::new(ErrorCode::$code, message)
            }
        )+
    };
}

impl Error {
    /// Build an error.
    ///
    /// # Panics
    /// When `message` is blank. Use [`Error::try_new`] for messages that come
    /// from outside the crate.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        match Self::try_new(code, message) {
            Ok(error) => error,
            Err(err) => panic!("{err}"),
        }
    }

    /// Build an error, refusing a blank message.
    pub fn try_new(code: ErrorCode, message: impl Into<String>) -> Result<Self, BlankMessage> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(BlankMessage);
        }
        Ok(Self {
            code,
            message,
            details: None,
        })
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Structured context, such as the per-field validation messages.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Replace the details.
    ///
    /// # Examples
    /// ```
    /// use sanjibook::domain::Error;
    /// use serde_json::json;
    ///
    /// let err = Error::invalid_request("registration rejected")
    ///     .with_details(json!({ "email": "El email es obligatorio" }));
    /// assert_eq!(err.details().unwrap()["email"], "El email es obligatorio");
    /// ```
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    shorthand! {
        /// Validation failure.
        invalid_request => InvalidRequest;
        /// Refused login.
        unauthorized => Unauthorized;
        /// Ownership check failed.
        forbidden => Forbidden;
        not_found => NotFound;
        /// Duplicate email.
        conflict => Conflict;
        /// Unreachable store.
        service_unavailable => ServiceUnavailable;
        internal => InternalError;
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}

/// Serialised shape of [`Error`]; deserialising goes through
/// [`Error::try_new`] so a blank message is rejected.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct WireError {
    code: ErrorCode,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl From<Error> for WireError {
    fn from(error: Error) -> Self {
        let Error {
            code,
            message,
            details,
        } = error;
        Self {
            code,
            message,
            details,
        }
    }
}

impl TryFrom<WireError> for Error {
    type Error = BlankMessage;

    fn try_from(wire: WireError) -> Result<Self, BlankMessage> {
        let error = Error::try_new(wire.code, wire.message)?;
        Ok(match wire.details {
            Some(details) => error.with_details(details),
            None => error,
        })
    }
}
