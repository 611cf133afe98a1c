use chatter_core::{AuthError, spawn_hash_password, spawn_verify_password};
use chatter_db::CredentialStore;
use chatter_models::{CredentialsRequest, NewUser, User};
use tracing::{info, instrument};

use crate::validator::validate_credentials;

pub struct AuthService;

impl AuthService {
    /// Validate, check for a duplicate, hash, then persist.
    ///
    /// The duplicate check and the insert are not atomic. A registration that
    /// loses the race fails at insert with `StoreWriteFailure`; the store's
    /// uniqueness constraint guarantees no second record is written.
    #[instrument(skip(store, dto), fields(username = %dto.username))]
    pub async fn register_user(
        store: &dyn CredentialStore,
        dto: CredentialsRequest,
    ) -> Result<User, AuthError> {
        validate_credentials(&dto)?;

        if store.exists(&dto.username).await {
            return Err(AuthError::DuplicateUsername);
        }

        let password_hash = spawn_hash_password(dto.password).await?;

        let user = store
            .create(NewUser {
                username: dto.username,
                password_hash,
            })
            .await
            .map_err(AuthError::StoreWriteFailure)?;

        info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// Fetch by username and compare the password against the stored digest.
    ///
    /// Never writes to the store.
    #[instrument(skip(store, dto), fields(username = %dto.username))]
    pub async fn login_user(
        store: &dyn CredentialStore,
        dto: CredentialsRequest,
    ) -> Result<User, AuthError> {
        let user = store
            .fetch(&dto.username)
            .await
            .map_err(AuthError::UserNotFound)?;

        let matched = spawn_verify_password(dto.password, user.password.clone()).await?;
        if !matched {
            return Err(AuthError::InvalidPassword);
        }

        info!(user_id = %user.id, "User logged in");
        Ok(user)
    }
}
