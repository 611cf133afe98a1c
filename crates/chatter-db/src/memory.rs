use std::collections::HashMap;
use std::collections::hash_map::Entry;

use async_trait::async_trait;
use chatter_core::StoreError;
use chatter_models::{NewUser, User};
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::store::CredentialStore;

/// In-process [`CredentialStore`] keyed by username.
///
/// Enforces username uniqueness at insert, like the database constraint.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    users: RwLock<HashMap<String, User>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn fetch(&self, username: &str) -> Result<User, StoreError> {
        self.users
            .read()
            .await
            .get(username)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.write().await;

        match users.entry(user.username) {
            Entry::Occupied(_) => Err(StoreError::Conflict),
            Entry::Vacant(slot) => {
                let now = Utc::now();
                let record = User {
                    id: Uuid::new_v4(),
                    username: slot.key().clone(),
                    password: user.password_hash,
                    created_at: now,
                    updated_at: now,
                };
                Ok(slot.insert(record).clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(username: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            password_hash: "$2b$12$digest".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_then_fetch() {
        let store = MemoryCredentialStore::new();

        let created = store.create(new_user("testuser")).await.unwrap();
        let fetched = store.fetch("testuser").await.unwrap();

        assert_eq!(created, fetched);
        assert_eq!(fetched.password, "$2b$12$digest");
        assert!(store.exists("testuser").await);
    }

    #[tokio::test]
    async fn test_fetch_missing_is_not_found() {
        let store = MemoryCredentialStore::new();

        assert!(matches!(
            store.fetch("ghost").await,
            Err(StoreError::NotFound)
        ));
        assert!(!store.exists("ghost").await);
    }

    #[tokio::test]
    async fn test_lookup_is_exact_match() {
        let store = MemoryCredentialStore::new();
        store.create(new_user("testuser")).await.unwrap();

        assert!(!store.exists("TestUser").await);
        assert!(!store.exists("testuser ").await);
    }

    #[tokio::test]
    async fn test_duplicate_insert_conflicts() {
        let store = MemoryCredentialStore::new();
        store.create(new_user("testuser")).await.unwrap();

        assert!(matches!(
            store.create(new_user("testuser")).await,
            Err(StoreError::Conflict)
        ));
        assert_eq!(store.len().await, 1);
    }
}
