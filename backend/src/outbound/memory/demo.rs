//! Demo accounts and recipes for a fresh installation.

use thiserror::Error;
use tracing::info;

use crate::domain::ports::{
    PasswordHashError, PasswordHasher, RecipeRepository, RecipeRepositoryError, UserLookup,
    UserPersistenceError, UserStore,
};
use crate::domain::{
    Email, Recipe, RecipeDraft, RecipeId, RecipeValidationError, Role, User, UserId, UserProfile,
    UserValidationError,
};

/// Password shared by every demo account.
pub const DEMO_PASSWORD: &str = "1234";

const DEMO_USERS: [(&str, &str); 5] = [
    ("Sebastián", "sebastian@demo.com"),
    ("Ana", "ana@demo.com"),
    ("Carlos", "carlos@demo.com"),
    ("Laura", "laura@demo.com"),
    ("Pedro", "pedro@demo.com"),
];

struct DemoRecipe {
    name: &'static str,
    ingredients: &'static [&'static str],
    preparation: &'static str,
    category: &'static str,
    /// Index into [`DEMO_USERS`].
    owner: usize,
}

const DEMO_RECIPES: [DemoRecipe; 2] = [
    DemoRecipe {
        name: "Ensalada César",
        ingredients: &["Lechuga", "Pollo", "Queso"],
        preparation: "Mezclar todo",
        category: "Ensaladas",
        owner: 0,
    },
    DemoRecipe {
        name: "Pasta al pesto",
        ingredients: &["Pasta", "Pesto", "Queso"],
        preparation: "Cocinar pasta y mezclar con pesto",
        category: "Pastas",
        owner: 1,
    },
];

/// Failures while seeding demo data.
#[derive(Debug, Error)]
pub enum DemoSeedError {
    #[error(transparent)]
    Users(#[from] UserPersistenceError),
    #[error(transparent)]
    Recipes(#[from] RecipeRepositoryError),
    #[error(transparent)]
    Digest(#[from] PasswordHashError),
    #[error("invalid demo user: {0}")]
    InvalidUser(#[from] UserValidationError),
    #[error("invalid demo recipe: {0}")]
    InvalidRecipe(#[from] RecipeValidationError),
}

/// Demo data present after seeding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoData {
    pub users: Vec<User>,
    /// Recipes written by this call; empty when they were already present.
    pub created_recipes: Vec<Recipe>,
}

/// Store the demo accounts and recipes.
///
/// Safe to run on every start: accounts already registered under a demo
/// email are kept as they are, and a demo recipe is only added when its owner
/// has no recipe of the same name.
pub fn seed_demo_data<S, R, H>(users: &S, recipes: &R, hasher: &H) -> Result<DemoData, DemoSeedError>
where
    S: UserLookup + UserStore,
    R: RecipeRepository,
    H: PasswordHasher,
{
    let mut seeded = Vec::with_capacity(DEMO_USERS.len());
    for (given_name, email) in DEMO_USERS {
        let user = match users.find_by_email(email)? {
            Some(existing) => existing,
            None => {
                let user = User::new(
                    UserId::random(),
                    Email::new(email)?,
                    hasher.hash(DEMO_PASSWORD)?,
                    UserProfile {
                        given_name: given_name.to_owned(),
                        ..UserProfile::default()
                    },
                    Role::Member,
                );
                users.insert(&user)?;
                user
            }
        };
        seeded.push(user);
    }

    let mut created_recipes = Vec::new();
    for demo in &DEMO_RECIPES {
        let Some(owner) = seeded.get(demo.owner).map(User::id) else {
            continue;
        };
        let exists = recipes
            .list_by_owner(owner)?
            .iter()
            .any(|recipe| recipe.name() == demo.name);
        if exists {
            continue;
        }
        let recipe = Recipe::from_draft(RecipeId::random(), owner.clone(), demo.draft())?;
        recipes.save(&recipe)?;
        created_recipes.push(recipe);
    }

    info!(
        users = seeded.len(),
        recipes = created_recipes.len(),
        "demo data seeded"
    );
    Ok(DemoData {
        users: seeded,
        created_recipes,
    })
}

impl DemoRecipe {
    fn draft(&self) -> RecipeDraft {
        RecipeDraft {
            name: self.name.to_owned(),
            ingredients: self.ingredients.iter().map(|item| (*item).to_owned()).collect(),
            preparation: self.preparation.to_owned(),
            category: self.category.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::FixturePasswordHasher;
    use crate::outbound::memory::{InMemoryRecipeRepository, InMemoryUserRepository};
    use rstest::rstest;

    #[rstest]
    fn seeds_five_members_and_two_recipes() {
        let users = InMemoryUserRepository::new();
        let recipes = InMemoryRecipeRepository::new();

        let data = seed_demo_data(&users, &recipes, &FixturePasswordHasher).expect("seed succeeds");

        assert_eq!(data.users.len(), 5);
        assert!(data.users.iter().all(|user| user.role() == Role::Member));
        assert_eq!(data.created_recipes.len(), 2);
        let ana = users
            .find_by_email("ana@demo.com")
            .expect("lookup succeeds")
            .expect("ana seeded");
        assert!(
            FixturePasswordHasher
                .verify(DEMO_PASSWORD, ana.password_digest())
                .expect("fixture digest parses")
        );
        let pesto = recipes.search_by_name("pesto").expect("search succeeds");
        assert_eq!(pesto.len(), 1);
        assert!(pesto[0].is_owned_by(ana.id()));
    }

    #[rstest]
    fn reseeding_changes_nothing() {
        let users = InMemoryUserRepository::new();
        let recipes = InMemoryRecipeRepository::new();
        let first = seed_demo_data(&users, &recipes, &FixturePasswordHasher).expect("seed succeeds");

        let second =
            seed_demo_data(&users, &recipes, &FixturePasswordHasher).expect("reseed succeeds");

        assert_eq!(second.users, first.users);
        assert!(second.created_recipes.is_empty());
        assert_eq!(users.len(), Ok(5));
        assert_eq!(recipes.list_all().map(|all| all.len()), Ok(2));
    }
}
