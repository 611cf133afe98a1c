//! Administrative commands behind the `chatter-cli` binary.
//!
//! - [`create_user`]: register one account through the same pipeline as the API
//! - [`seeder`]: bulk fake accounts for local development

pub mod seeder;

use chatter_core::AuthError;
use chatter_db::CredentialStore;
use chatter_models::{CredentialsRequest, User};

use crate::modules::auth::AuthService;

/// Registers an account exactly as `POST /api/v1/register` would.
pub async fn create_user(
    store: &dyn CredentialStore,
    username: &str,
    password: &str,
) -> Result<User, AuthError> {
    AuthService::register_user(store, CredentialsRequest::new(username, password)).await
}
