//! `UserLookup`/`UserStore` adapter keyed by email.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::domain::ports::{UserLookup, UserPersistenceError, UserStore};
use crate::domain::{PasswordDigest, User, UserId};

/// User store held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users.
    pub fn len(&self) -> Result<usize, UserPersistenceError> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.len())
    }

    /// Return `true` when no user is stored.
    pub fn is_empty(&self) -> Result<bool, UserPersistenceError> {
        self.len().map(|count| count == 0)
    }
}

fn poisoned<T>(_: PoisonError<T>) -> UserPersistenceError {
    UserPersistenceError::query("user store lock poisoned")
}

impl UserLookup for InMemoryUserRepository {
    fn find_by_email(&self, email: &str) -> Result<Option<User>, UserPersistenceError> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.get(email).cloned())
    }
}

impl UserStore for InMemoryUserRepository {
    fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut users = self.users.write().map_err(poisoned)?;
        let key = user.email().as_ref();
        if users.contains_key(key) {
            return Err(UserPersistenceError::duplicate_email(key));
        }
        users.insert(key.to_owned(), user.clone());
        Ok(())
    }

    fn update_password(
        &self,
        id: &UserId,
        digest: &PasswordDigest,
    ) -> Result<(), UserPersistenceError> {
        let mut users = self.users.write().map_err(poisoned)?;
        let entry = users
            .values_mut()
            .find(|user| user.id() == id)
            .ok_or_else(|| UserPersistenceError::missing_user(id.as_ref()))?;
        *entry = entry.clone().with_password_digest(digest.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Email, Role, UserProfile};
    use rstest::{fixture, rstest};

    #[fixture]
    fn carlos() -> User {
        User::new(
            UserId::random(),
            Email::new("carlos@demo.com").expect("valid email"),
            PasswordDigest::new("$fixture$1234").expect("digest"),
            UserProfile::default(),
            Role::Member,
        )
    }

    #[rstest]
    fn inserted_user_is_found_by_exact_email(carlos: User) {
        let repo = InMemoryUserRepository::new();
        repo.insert(&carlos).expect("insert succeeds");

        assert_eq!(repo.find_by_email("carlos@demo.com"), Ok(Some(carlos)));
        assert_eq!(repo.find_by_email("Carlos@demo.com"), Ok(None));
        assert_eq!(repo.len(), Ok(1));
    }

    #[rstest]
    fn duplicate_email_is_refused(carlos: User) {
        let repo = InMemoryUserRepository::new();
        repo.insert(&carlos).expect("first insert succeeds");

        let twin = User::new(
            UserId::random(),
            carlos.email().clone(),
            carlos.password_digest().clone(),
            UserProfile::default(),
            Role::Editor,
        );
        assert_eq!(
            repo.insert(&twin),
            Err(UserPersistenceError::duplicate_email("carlos@demo.com"))
        );
    }

    #[rstest]
    fn password_update_replaces_the_digest(carlos: User) {
        let repo = InMemoryUserRepository::new();
        repo.insert(&carlos).expect("insert succeeds");
        let digest = PasswordDigest::new("$fixture$nueva").expect("digest");

        repo.update_password(carlos.id(), &digest)
            .expect("update succeeds");

        let stored = repo
            .find_by_email("carlos@demo.com")
            .expect("lookup succeeds")
            .expect("user present");
        assert_eq!(stored.password_digest(), &digest);
        assert_eq!(stored.id(), carlos.id());
    }

    #[rstest]
    fn password_update_for_unknown_id_fails() {
        let repo = InMemoryUserRepository::new();
        let id = UserId::random();
        let digest = PasswordDigest::new("$fixture$nueva").expect("digest");

        assert_eq!(
            repo.update_password(&id, &digest),
            Err(UserPersistenceError::missing_user(id.as_ref()))
        );
    }
}
