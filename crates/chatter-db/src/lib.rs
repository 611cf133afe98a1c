//! # Chatter DB
//!
//! The credential store gateway and its backends.
//!
//! Request handlers only ever see [`CredentialStore`]; the concrete backend
//! is chosen at startup:
//!
//! - [`PgCredentialStore`]: PostgreSQL via SQLx. The `users.username` UNIQUE
//!   constraint is the authoritative uniqueness guard.
//! - [`MemoryCredentialStore`]: in-process map, available in tests and with the
//!   `test-utils` feature.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use chatter_db::{init_db_pool, run_migrations, PgCredentialStore, CredentialStore};
//!
//! let pool = init_db_pool(&config.database).await?;
//! run_migrations(&pool).await?;
//! let store: Arc<dyn CredentialStore> = Arc::new(PgCredentialStore::new(pool));
//! ```

#[cfg(any(test, feature = "test-utils"))]
pub mod memory;
pub mod postgres;
pub mod store;

use anyhow::Context;
use chatter_config::DatabaseConfig;
use sqlx::postgres::PgPoolOptions;

#[cfg(any(test, feature = "test-utils"))]
pub use memory::MemoryCredentialStore;
pub use postgres::PgCredentialStore;
pub use store::CredentialStore;

// Re-export PgPool for convenience
pub use sqlx::PgPool;

/// Opens a PostgreSQL connection pool.
///
/// Called once during startup; the pool is cheaply cloneable.
pub async fn init_db_pool(config: &DatabaseConfig) -> anyhow::Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await
        .context("Failed to connect to database")
}

/// Applies the migrations in the workspace `migrations/` directory.
pub async fn run_migrations(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Database migrations applied");
    Ok(())
}
