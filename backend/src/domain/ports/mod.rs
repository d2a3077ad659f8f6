//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod login_service;
mod password_hasher;
mod recipe_repository;
mod user_repository;

#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::LoginService;
#[cfg(any(test, feature = "test-support"))]
pub use password_hasher::FixturePasswordHasher;
pub use password_hasher::{PasswordHashError, PasswordHasher};
#[cfg(test)]
pub use recipe_repository::MockRecipeRepository;
pub use recipe_repository::{RecipeRepository, RecipeRepositoryError};
#[cfg(test)]
pub use user_repository::{MockUserLookup, MockUserStore};
pub use user_repository::{FixtureUserLookup, UserLookup, UserPersistenceError, UserStore};
