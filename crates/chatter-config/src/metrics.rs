use crate::{ConfigError, parse_var};

pub const DEFAULT_METRICS_PORT: u16 = 9090;

/// Listener for the Prometheus `/metrics` endpoint, kept off the public port.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetricsConfig {
    pub port: u16,
}

impl MetricsConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            port: parse_var("METRICS_PORT", DEFAULT_METRICS_PORT)?,
        })
    }
}
