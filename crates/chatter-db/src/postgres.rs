use async_trait::async_trait;
use chatter_core::StoreError;
use chatter_models::{NewUser, User};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::store::CredentialStore;

const UNIQUE_VIOLATION: &str = "23505";

/// [`CredentialStore`] backed by the `users` table.
#[derive(Clone, Debug)]
pub struct PgCredentialStore {
    db: PgPool,
}

impl PgCredentialStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

fn map_sqlx_error(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::RowNotFound => StoreError::NotFound,
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) => {
            StoreError::Conflict
        }
        other => StoreError::Backend(other.into()),
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    #[instrument(skip(self))]
    async fn fetch(&self, username: &str) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(
            "SELECT id, username, password, created_at, updated_at FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.db)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(StoreError::NotFound)
    }

    #[instrument(skip(self, user), fields(username = %user.username))]
    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (id, username, password)
             VALUES ($1, $2, $3)
             RETURNING id, username, password, created_at, updated_at",
        )
        .bind(Uuid::new_v4())
        .bind(&user.username)
        .bind(&user.password_hash)
        .fetch_one(&self.db)
        .await
        .map_err(map_sqlx_error)
    }

    #[instrument(skip(self))]
    async fn exists(&self, username: &str) -> bool {
        let found = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)",
        )
        .bind(username)
        .fetch_one(&self.db)
        .await;

        match found {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!(username, error = %e, "Lookup failed during existence check");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::RowNotFound),
            StoreError::NotFound
        ));
    }

    #[test]
    fn test_other_errors_map_to_backend() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::PoolTimedOut),
            StoreError::Backend(_)
        ));
    }
}
