//! Port for recipe persistence adapters and their errors.

use crate::domain::{Recipe, RecipeId, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by recipe repository adapters.
    pub enum RecipeRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "recipe repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "recipe repository query failed: {message}",
    }
}

/// Storage for the shared recipe collection.
///
/// Listing methods return recipes in insertion order.
#[cfg_attr(test, mockall::automock)]
pub trait RecipeRepository: Send + Sync {
    /// Every stored recipe.
    fn list_all(&self) -> Result<Vec<Recipe>, RecipeRepositoryError>;

    /// Recipes owned by `owner`.
    fn list_by_owner(&self, owner: &UserId) -> Result<Vec<Recipe>, RecipeRepositoryError>;

    /// Recipes whose name contains `fragment`, ignoring case.
    fn search_by_name(&self, fragment: &str) -> Result<Vec<Recipe>, RecipeRepositoryError>;

    /// Fetch a recipe by identifier.
    fn find_by_id(&self, id: &RecipeId) -> Result<Option<Recipe>, RecipeRepositoryError>;

    /// Insert or replace a recipe, keyed by its identifier.
    fn save(&self, recipe: &Recipe) -> Result<(), RecipeRepositoryError>;

    /// Delete a recipe. Returns `false` when nothing was stored under `id`.
    fn delete(&self, id: &RecipeId) -> Result<bool, RecipeRepositoryError>;
}
