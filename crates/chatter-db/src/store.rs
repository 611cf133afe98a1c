use async_trait::async_trait;
use chatter_core::StoreError;
use chatter_models::{NewUser, User};

/// Keyed lookup and insert of accounts by username.
///
/// Implementations must reject a second record for an existing username at
/// insert time with [`StoreError::Conflict`]. Callers run [`exists`] first to
/// produce a clear duplicate outcome, but only the insert is authoritative:
/// two concurrent registrations can both pass the check.
///
/// [`exists`]: CredentialStore::exists
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Returns the record whose username matches exactly.
    async fn fetch(&self, username: &str) -> Result<User, StoreError>;

    /// Persists a new record and returns it with its assigned id and timestamps.
    async fn create(&self, user: NewUser) -> Result<User, StoreError>;

    /// Whether a record with exactly this username is present.
    ///
    /// Lookup failures of any kind count as "not present". A store outage
    /// during registration therefore looks like a free username; the insert
    /// still fails afterwards.
    async fn exists(&self, username: &str) -> bool {
        match self.fetch(username).await {
            Ok(_) => true,
            Err(StoreError::NotFound) => false,
            Err(e) => {
                tracing::warn!(username, error = %e, "Lookup failed during existence check");
                false
            }
        }
    }
}
