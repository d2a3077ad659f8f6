//! Domain primitives, use-cases and ports.
//!
//! Purpose: Validate account forms, authenticate users and manage the recipe
//! collection without knowing how users or recipes are stored. Adapters plug
//! in through the traits in [`ports`].
//!
//! Public surface:
//! - Error (alias to `error::Error`): transport-agnostic error payload.
//! - validation: field rules for registration, login and password reset.
//! - Authenticator: decides whether credentials match a stored user.
//! - SessionLoginService, RegistrationService, PasswordResetService,
//!   RecipeCatalogueService: use-cases composed from the ports.

pub mod auth;
pub mod error;
pub mod login;
pub mod password_reset;
pub mod ports;
pub mod recipes;
pub mod registration;
pub mod session;
pub mod user;
pub mod validation;

pub use self::auth::{AuthError, AuthOutcome, Authenticator, Credentials, RejectionReason};
pub use self::error::{BlankMessage, Error, ErrorCode};
pub use self::login::SessionLoginService;
pub use self::password_reset::{PasswordResetError, PasswordResetService};
pub use self::recipes::{
    Recipe, RecipeCatalogueService, RecipeDraft, RecipeId, RecipeValidationError,
};
pub use self::registration::{RegistrationError, RegistrationService};
pub use self::session::Session;
pub use self::user::{Email, PasswordDigest, Role, User, UserId, UserProfile, UserValidationError};

/// Convenient result alias for driving ports.
///
/// # Examples
/// ```
/// use sanjibook::domain::{DomainResult, Error};
///
/// fn handler() -> DomainResult<()> {
///     Err(Error::forbidden("nope"))
/// }
/// assert!(handler().is_err());
/// ```
pub type DomainResult<T> = Result<T, Error>;
