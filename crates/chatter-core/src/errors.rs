//! Error types for the credential pipeline.
//!
//! [`AuthError`] is the single error type returned by every registration and
//! login stage. Each variant maps to a fixed status code and a fixed
//! plain-text message; clients rely on both, so neither may change.
//!
//! [`StoreError`] is what a credential store reports back to the pipeline.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors reported by a credential store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,

    /// The store rejected an insert because the username is already taken.
    #[error("username already taken")]
    Conflict,

    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// Terminal outcome of a failed registration or login attempt.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    #[error("username or password missing")]
    IncompleteCredentials,

    #[error("username already registered")]
    DuplicateUsername,

    #[error("password hashing failed: {0}")]
    HashingFailure(#[source] anyhow::Error),

    #[error("password verification failed: {0}")]
    HashVerificationFailure(#[source] anyhow::Error),

    #[error("could not persist user: {0}")]
    StoreWriteFailure(#[source] StoreError),

    #[error("user lookup failed: {0}")]
    UserNotFound(#[source] StoreError),

    #[error("password mismatch")]
    InvalidPassword,
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::MalformedPayload(_) | AuthError::IncompleteCredentials => {
                StatusCode::BAD_REQUEST
            }
            AuthError::DuplicateUsername => StatusCode::CONFLICT,
            AuthError::UserNotFound(_) => StatusCode::NOT_FOUND,
            AuthError::InvalidPassword => StatusCode::UNAUTHORIZED,
            AuthError::HashingFailure(_)
            | AuthError::HashVerificationFailure(_)
            | AuthError::StoreWriteFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message sent to the client.
    pub fn message(&self) -> &'static str {
        match self {
            AuthError::MalformedPayload(_) => "Invalid request payload",
            AuthError::IncompleteCredentials => "Username or Password are missing.",
            AuthError::DuplicateUsername => "Username already registed.",
            AuthError::HashingFailure(_) => "Error setting the password",
            AuthError::HashVerificationFailure(_) => "Error verifying the password",
            AuthError::StoreWriteFailure(_) => "Error creating user",
            AuthError::UserNotFound(_) => "User not found",
            AuthError::InvalidPassword => "Invalid password",
        }
    }

    /// Short label used for metrics and structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AuthError::MalformedPayload(_) => "malformed_payload",
            AuthError::IncompleteCredentials => "incomplete_credentials",
            AuthError::DuplicateUsername => "duplicate_username",
            AuthError::HashingFailure(_) => "hashing_failure",
            AuthError::HashVerificationFailure(_) => "hash_verification_failure",
            AuthError::StoreWriteFailure(_) => "store_write_failure",
            AuthError::UserNotFound(_) => "user_not_found",
            AuthError::InvalidPassword => "invalid_password",
        }
    }

    /// Whether the failure points at the service rather than the caller.
    ///
    /// A login lookup that failed in the backend still answers 404, but is
    /// a fault on our side.
    pub fn is_internal(&self) -> bool {
        matches!(self, AuthError::UserNotFound(StoreError::Backend(_)))
            || self.status().is_server_error()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status();

        if self.is_internal() {
            tracing::error!(kind = self.kind(), cause = %self, "{}", self.message());
        } else {
            tracing::warn!(kind = self.kind(), cause = %self, "{}", self.message());
        }

        (status, format!("{}\n", self.message())).into_response()
    }
}
