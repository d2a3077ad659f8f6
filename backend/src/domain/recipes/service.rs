//! Recipe catalogue use-cases.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::ports::{RecipeRepository, RecipeRepositoryError};
use crate::domain::{Error, Recipe, RecipeDraft, RecipeId, RecipeValidationError, UserId};

impl From<RecipeRepositoryError> for Error {
    fn from(value: RecipeRepositoryError) -> Self {
        match value {
            RecipeRepositoryError::Connection { .. } => Self::service_unavailable(value.to_string()),
            RecipeRepositoryError::Query { .. } => Self::internal(value.to_string()),
        }
    }
}

impl From<RecipeValidationError> for Error {
    fn from(value: RecipeValidationError) -> Self {
        Self::invalid_request(value.to_string())
    }
}

/// Reads and edits the shared recipe collection on behalf of users.
pub struct RecipeCatalogueService<R> {
    recipes: Arc<R>,
}

impl<R> Clone for RecipeCatalogueService<R> {
    fn clone(&self) -> Self {
        Self {
            recipes: Arc::clone(&self.recipes),
        }
    }
}

impl<R: RecipeRepository> RecipeCatalogueService<R> {
    pub fn new(recipes: Arc<R>) -> Self {
        Self { recipes }
    }

    /// Every recipe, in insertion order.
    pub fn list_all(&self) -> Result<Vec<Recipe>, Error> {
        self.recipes.list_all().map_err(Self::storage_failure)
    }

    /// Recipes created by `owner`.
    pub fn list_for_owner(&self, owner: &UserId) -> Result<Vec<Recipe>, Error> {
        self.recipes
            .list_by_owner(owner)
            .map_err(Self::storage_failure)
    }

    /// Recipes whose name contains `fragment`, ignoring case.
    ///
    /// A blank fragment matches everything.
    pub fn find_by_name(&self, fragment: &str) -> Result<Vec<Recipe>, Error> {
        self.recipes
            .search_by_name(fragment.trim())
            .map_err(Self::storage_failure)
    }

    /// Validate `draft` and store it as a new recipe owned by `owner`.
    pub fn add(&self, owner: &UserId, draft: RecipeDraft) -> Result<Recipe, Error> {
        let recipe = Recipe::from_draft(RecipeId::random(), owner.clone(), draft)?;
        self.recipes.save(&recipe).map_err(Self::storage_failure)?;
        info!(recipe_id = %recipe.id(), owner = %owner, "recipe added");
        Ok(recipe)
    }

    /// Replace the contents of recipe `id`. Only its owner may do so.
    pub fn update(&self, id: RecipeId, editor: &UserId, draft: RecipeDraft) -> Result<Recipe, Error> {
        let existing = self.owned_recipe(id, editor)?;
        let recipe = Recipe::from_draft(existing.id(), existing.owner().clone(), draft)?;
        self.recipes.save(&recipe).map_err(Self::storage_failure)?;
        info!(recipe_id = %id, "recipe updated");
        Ok(recipe)
    }

    /// Delete recipe `id`. Only its owner may do so.
    pub fn remove(&self, id: RecipeId, editor: &UserId) -> Result<(), Error> {
        self.owned_recipe(id, editor)?;
        if !self.recipes.delete(&id).map_err(Self::storage_failure)? {
            return Err(Error::not_found(format!("recipe {id} not found")));
        }
        info!(recipe_id = %id, "recipe removed");
        Ok(())
    }

    fn owned_recipe(&self, id: RecipeId, editor: &UserId) -> Result<Recipe, Error> {
        let recipe = self
            .recipes
            .find_by_id(&id)
            .map_err(Self::storage_failure)?
            .ok_or_else(|| Error::not_found(format!("recipe {id} not found")))?;
        if !recipe.is_owned_by(editor) {
            return Err(Error::forbidden("only the owner may change this recipe"));
        }
        Ok(recipe)
    }

    fn storage_failure(err: RecipeRepositoryError) -> Error {
        warn!(error = %err, "recipe repository failed");
        err.into()
    }
}
