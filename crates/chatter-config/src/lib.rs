//! # Chatter Config
//!
//! Configuration types for the Chatter API.
//!
//! Every structure is loaded from environment variables once at startup and
//! then passed explicitly into server construction:
//!
//! - [`server`]: listen address
//! - [`database`]: PostgreSQL connection settings
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`metrics`]: Prometheus exporter listener
//!
//! # Example
//!
//! ```ignore
//! use chatter_config::AppConfig;
//!
//! let config = AppConfig::from_env()?;
//! println!("listening on {}", config.server.addr());
//! ```

pub mod cors;
pub mod database;
pub mod metrics;
pub mod server;

use thiserror::Error;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use metrics::MetricsConfig;
pub use server::ServerConfig;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} has an invalid value: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// All configuration needed to start the server.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
    pub metrics: MetricsConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            cors: CorsConfig::from_env(),
            metrics: MetricsConfig::from_env()?,
        })
    }
}

/// Reads an optional variable and parses it, falling back to `default` when unset.
pub(crate) fn parse_var<T: std::str::FromStr>(
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
        Err(_) => Ok(default),
    }
}
