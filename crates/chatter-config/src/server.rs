use std::env;

use crate::{ConfigError, parse_var};

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Reads `HOST` and `PORT`, defaulting to `localhost:8080`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST")
            .ok()
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        Ok(Self {
            host,
            port: parse_var("PORT", DEFAULT_PORT)?,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        temp_env::with_vars([("HOST", None::<&str>), ("PORT", None)], || {
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config, ServerConfig::default());
            assert_eq!(config.addr(), "localhost:8080");
        });
    }

    #[test]
    fn test_reads_host_and_port() {
        temp_env::with_vars([("HOST", Some("0.0.0.0")), ("PORT", Some("3000"))], || {
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config.addr(), "0.0.0.0:3000");
        });
    }

    #[test]
    fn test_rejects_invalid_port() {
        temp_env::with_vars([("HOST", None), ("PORT", Some("eighty"))], || {
            let err = ServerConfig::from_env().unwrap_err();
            assert_eq!(
                err,
                ConfigError::Invalid {
                    var: "PORT",
                    value: "eighty".to_string()
                }
            );
        });
    }
}
