//! Request decoding and validation.
//!
//! [`CredentialsJson`] is the extractor used by the credential endpoints. Unlike
//! `axum::Json` it does not require a `Content-Type` header: the raw body is
//! decoded as-is and any failure becomes [`AuthError::MalformedPayload`].
//! Strictness about unknown fields comes from the target type
//! (`#[serde(deny_unknown_fields)]`).

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use chatter_core::AuthError;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

fn format_errors(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().filter_map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .or_else(|| Some(format!("{} is invalid", field)))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Decodes a JSON payload, rejecting anything the target type does not accept.
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, AuthError> {
    serde_json::from_slice(body).map_err(|e| AuthError::MalformedPayload(e.to_string()))
}

/// Checks structural completeness; any failed rule is reported as missing credentials.
pub fn validate_credentials<T: Validate>(value: &T) -> Result<(), AuthError> {
    value.validate().map_err(|errors| {
        tracing::warn!(errors = %format_errors(&errors), "Credential validation failed");
        AuthError::IncompleteCredentials
    })
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CredentialsJson<T>(pub T);

impl<T, S> FromRequest<S> for CredentialsJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // The body is buffered in full and dropped once decoding finishes.
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AuthError::MalformedPayload(rejection.body_text()))?;

        decode_json(&body).map(CredentialsJson)
    }
}
