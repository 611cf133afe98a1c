use std::sync::Arc;

use chatter_config::CorsConfig;
use chatter_db::CredentialStore;

/// Shared per-request state.
///
/// Handlers see the store only through the [`CredentialStore`] capability.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CredentialStore>,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn CredentialStore>, cors_config: CorsConfig) -> Self {
        Self { store, cors_config }
    }
}
