//! Recipe data model.
//!
//! A recipe belongs to the user who created it; only that user may edit or
//! delete it. Everyone can read every recipe.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::UserId;

mod service;

pub use service::RecipeCatalogueService;

/// Validation errors returned by [`Recipe::from_draft`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeValidationError {
    InvalidId,
    EmptyName,
    EmptyPreparation,
    EmptyCategory,
    NoIngredients,
    BlankIngredient { position: usize },
}

impl fmt::Display for RecipeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId => write!(f, "recipe id must be a valid UUID"),
            Self::EmptyName => write!(f, "recipe name must not be empty"),
            Self::EmptyPreparation => write!(f, "preparation must not be empty"),
            Self::EmptyCategory => write!(f, "category must not be empty"),
            Self::NoIngredients => write!(f, "a recipe needs at least one ingredient"),
            Self::BlankIngredient { position } => {
                write!(f, "ingredient {position} must not be empty")
            }
        }
    }
}

impl std::error::Error for RecipeValidationError {}

/// Stable recipe identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecipeId(Uuid);

impl RecipeId {
    /// Parse a [`RecipeId`] from its hyphenated form.
    pub fn new(id: impl AsRef<str>) -> Result<Self, RecipeValidationError> {
        Uuid::parse_str(id.as_ref())
            .map(Self)
            .map_err(|_| RecipeValidationError::InvalidId)
    }

    /// Generate a new random [`RecipeId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<RecipeId> for String {
    fn from(value: RecipeId) -> Self {
        value.0.to_string()
    }
}

impl TryFrom<String> for RecipeId {
    type Error = RecipeValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Unvalidated recipe input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RecipeDraft {
    pub name: String,
    pub ingredients: Vec<String>,
    pub preparation: String,
    pub category: String,
}

/// Stored recipe.
///
/// ## Invariants
/// - `name`, `preparation` and `category` are non-blank and trimmed.
/// - `ingredients` is non-empty, ordered as entered, with no blank entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    id: RecipeId,
    name: String,
    ingredients: Vec<String>,
    preparation: String,
    category: String,
    owner: UserId,
}

impl Recipe {
    /// Validate `draft` and build a recipe owned by `owner`.
    ///
    /// # Examples
    /// ```
    /// use sanjibook::domain::{Recipe, RecipeDraft, RecipeId, UserId};
    ///
    /// let draft = RecipeDraft {
    ///     name: "Pasta al pesto".into(),
    ///     ingredients: vec!["Pasta".into(), "Pesto".into()],
    ///     preparation: "Cocinar pasta y mezclar con pesto".into(),
    ///     category: "Pastas".into(),
    /// };
    /// let recipe = Recipe::from_draft(RecipeId::random(), UserId::random(), draft).unwrap();
    /// assert_eq!(recipe.ingredients().len(), 2);
    /// ```
    pub fn from_draft(
        id: RecipeId,
        owner: UserId,
        draft: RecipeDraft,
    ) -> Result<Self, RecipeValidationError> {
        let RecipeDraft {
            name,
            ingredients,
            preparation,
            category,
        } = draft;

        let name = non_blank(name, RecipeValidationError::EmptyName)?;
        if ingredients.is_empty() {
            return Err(RecipeValidationError::NoIngredients);
        }
        let ingredients = ingredients
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                non_blank(item, RecipeValidationError::BlankIngredient { position: index + 1 })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let preparation = non_blank(preparation, RecipeValidationError::EmptyPreparation)?;
        let category = non_blank(category, RecipeValidationError::EmptyCategory)?;

        Ok(Self {
            id,
            name,
            ingredients,
            preparation,
            category,
            owner,
        })
    }

    pub fn id(&self) -> RecipeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn preparation(&self) -> &str {
        &self.preparation
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// User who created the recipe.
    pub fn owner(&self) -> &UserId {
        &self.owner
    }

    /// Return `true` when `user` may edit or delete this recipe.
    pub fn is_owned_by(&self, user: &UserId) -> bool {
        &self.owner == user
    }
}

fn non_blank(value: String, error: RecipeValidationError) -> Result<String, RecipeValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(error)
    } else if trimmed.len() == value.len() {
        Ok(value)
    } else {
        Ok(trimmed.to_owned())
    }
}
