//! `RecipeRepository` adapter preserving insertion order.

use std::sync::{PoisonError, RwLock};

use crate::domain::ports::{RecipeRepository, RecipeRepositoryError};
use crate::domain::{Recipe, RecipeId, UserId};

/// Recipe collection held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryRecipeRepository {
    recipes: RwLock<Vec<Recipe>>,
}

impl InMemoryRecipeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn filtered(
        &self,
        keep: impl Fn(&Recipe) -> bool,
    ) -> Result<Vec<Recipe>, RecipeRepositoryError> {
        let recipes = self.recipes.read().map_err(poisoned)?;
        Ok(recipes.iter().filter(|recipe| keep(recipe)).cloned().collect())
    }
}

fn poisoned<T>(_: PoisonError<T>) -> RecipeRepositoryError {
    RecipeRepositoryError::query("recipe store lock poisoned")
}

impl RecipeRepository for InMemoryRecipeRepository {
    fn list_all(&self) -> Result<Vec<Recipe>, RecipeRepositoryError> {
        self.filtered(|_| true)
    }

    fn list_by_owner(&self, owner: &UserId) -> Result<Vec<Recipe>, RecipeRepositoryError> {
        self.filtered(|recipe| recipe.is_owned_by(owner))
    }

    fn search_by_name(&self, fragment: &str) -> Result<Vec<Recipe>, RecipeRepositoryError> {
        let needle = fragment.to_lowercase();
        self.filtered(|recipe| recipe.name().to_lowercase().contains(&needle))
    }

    fn find_by_id(&self, id: &RecipeId) -> Result<Option<Recipe>, RecipeRepositoryError> {
        let recipes = self.recipes.read().map_err(poisoned)?;
        Ok(recipes.iter().find(|recipe| recipe.id() == *id).cloned())
    }

    fn save(&self, recipe: &Recipe) -> Result<(), RecipeRepositoryError> {
        let mut recipes = self.recipes.write().map_err(poisoned)?;
        match recipes.iter_mut().find(|stored| stored.id() == recipe.id()) {
            Some(stored) => *stored = recipe.clone(),
            None => recipes.push(recipe.clone()),
        }
        Ok(())
    }

    fn delete(&self, id: &RecipeId) -> Result<bool, RecipeRepositoryError> {
        let mut recipes = self.recipes.write().map_err(poisoned)?;
        let before = recipes.len();
        recipes.retain(|recipe| recipe.id() != *id);
        Ok(recipes.len() != before)
    }
}
