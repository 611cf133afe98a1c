//! Password hashing and verification.
//!
//! Passwords are hashed with bcrypt at [`bcrypt::DEFAULT_COST`]. The cost is
//! not configurable.
//!
//! bcrypt only reads the first 72 bytes of its input. Longer passwords are
//! refused at hashing time instead of being silently truncated, and never
//! match at verification time.
//!
//! bcrypt is deliberately slow, so request handlers go through
//! [`spawn_hash_password`] and [`spawn_verify_password`], which run the work
//! on tokio's blocking pool instead of an executor thread.

use anyhow::anyhow;
use bcrypt::{BcryptError, DEFAULT_COST, non_truncating_hash, non_truncating_verify};

use crate::errors::AuthError;

/// Fails with [`AuthError::HashingFailure`] for passwords over 72 bytes.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    non_truncating_hash(password, DEFAULT_COST).map_err(|e| AuthError::HashingFailure(e.into()))
}

/// Returns `Ok(false)` on a mismatch. Only a malformed digest is an error.
///
/// A password over 72 bytes cannot have produced a stored digest, so it is a
/// mismatch.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    match non_truncating_verify(password, hash) {
        Ok(matched) => Ok(matched),
        Err(BcryptError::Truncation(_)) => Ok(false),
        Err(e) => Err(AuthError::HashVerificationFailure(e.into())),
    }
}

pub async fn spawn_hash_password(password: String) -> Result<String, AuthError> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AuthError::HashingFailure(anyhow!("hashing task failed: {e}")))?
}

pub async fn spawn_verify_password(password: String, hash: String) -> Result<bool, AuthError> {
    tokio::task::spawn_blocking(move || verify_password(&password, &hash))
        .await
        .map_err(|e| AuthError::HashVerificationFailure(anyhow!("verification task failed: {e}")))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_uses_default_cost() {
        let digest = hash_password("testpass").unwrap();
        assert!(digest.starts_with(&format!("$2b${DEFAULT_COST}$")));
    }

    #[test]
    fn test_malformed_digest_is_verification_failure() {
        let result = verify_password("testpass", "plaintext-not-a-digest");
        assert!(matches!(result, Err(AuthError::HashVerificationFailure(_))));
    }

    #[test]
    fn test_overlong_password_is_hashing_failure() {
        let result = hash_password(&"a".repeat(73));
        assert!(matches!(result, Err(AuthError::HashingFailure(_))));
    }

    #[tokio::test]
    async fn test_spawned_hash_verifies() {
        let digest = spawn_hash_password("testpass".to_string()).await.unwrap();

        assert!(
            spawn_verify_password("testpass".to_string(), digest.clone())
                .await
                .unwrap()
        );
        assert!(
            !spawn_verify_password("wrong".to_string(), digest)
                .await
                .unwrap()
        );
    }
}
