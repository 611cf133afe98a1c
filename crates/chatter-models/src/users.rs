//! User data models and DTOs.
//!
//! # Core Types
//!
//! - [`User`] - A stored account, as persisted and as echoed back to clients
//! - [`NewUser`] - An account ready to be inserted, password already hashed
//!
//! # Request DTOs
//!
//! - [`CredentialsRequest`] - The `{username, password}` body of register and login

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A registered account.
///
/// `password` always holds a bcrypt digest, never the plaintext.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: Uuid,
    #[schema(example = "testuser")]
    pub username: String,
    #[schema(example = "$2b$12$Qd1lQ0c2xH0pXoQ0b3yS8u5r3cVbV8Xo7qG9ZkJpT0m1n2b3c4d5e")]
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An account about to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}

/// Registration and login payload.
///
/// Unknown fields are rejected outright, so a client cannot smuggle in
/// extra attributes such as `adminAccess`. Absent fields decode as empty
/// strings and are caught by validation during registration.
#[derive(Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
#[serde(default, deny_unknown_fields)]
pub struct CredentialsRequest {
    #[validate(length(min = 1, message = "username is required"))]
    #[schema(example = "testuser")]
    pub username: String,
    #[validate(length(min = 1, message = "password is required"))]
    #[schema(example = "testpass")]
    pub password: String,
}

impl CredentialsRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for CredentialsRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
