use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use chatter_core::AuthError;
use chatter_models::{CredentialsRequest, User};
use chatter_observability::{
    track_login_failure, track_login_success, track_registration_failure, track_user_registered,
};
use tracing::{Span, instrument};

use super::service::AuthService;
use crate::state::AppState;
use crate::validator::CredentialsJson;

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/v1/register",
    request_body = CredentialsRequest,
    responses(
        (status = 201, description = "User registered; the stored record is echoed back", body = User),
        (status = 400, description = "Invalid request payload, or username/password missing", body = String, content_type = "text/plain"),
        (status = 409, description = "Username already registered", body = String, content_type = "text/plain"),
        (status = 500, description = "Hashing or persistence failure", body = String, content_type = "text/plain")
    ),
    tag = "Authentication"
)]
#[instrument(skip_all, fields(username = tracing::field::Empty))]
pub async fn register_user(
    State(state): State<AppState>,
    payload: Result<CredentialsJson<CredentialsRequest>, AuthError>,
) -> Result<(StatusCode, Json<User>), AuthError> {
    let result = match payload {
        Ok(CredentialsJson(dto)) => {
            Span::current().record("username", dto.username.as_str());
            AuthService::register_user(state.store.as_ref(), dto).await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(user) => {
            track_user_registered();
            Ok((StatusCode::CREATED, Json(user)))
        }
        Err(e) => {
            track_registration_failure(e.kind());
            Err(e)
        }
    }
}

/// Log in with username and password
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Login successful; the stored record is echoed back", body = User),
        (status = 400, description = "Invalid request payload", body = String, content_type = "text/plain"),
        (status = 401, description = "Invalid password", body = String, content_type = "text/plain"),
        (status = 404, description = "User not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Stored password digest could not be checked", body = String, content_type = "text/plain")
    ),
    tag = "Authentication"
)]
#[instrument(skip_all, fields(username = tracing::field::Empty))]
pub async fn login_user(
    State(state): State<AppState>,
    payload: Result<CredentialsJson<CredentialsRequest>, AuthError>,
) -> Result<Json<User>, AuthError> {
    let result = match payload {
        Ok(CredentialsJson(dto)) => {
            Span::current().record("username", dto.username.as_str());
            AuthService::login_user(state.store.as_ref(), dto).await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(user) => {
            track_login_success();
            Ok(Json(user))
        }
        Err(e) => {
            track_login_failure(e.kind());
            Err(e)
        }
    }
}
