//! Server configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind, e.g. `127.0.0.1:8080`
    pub addr: String,
    /// Path of the SQLite database file
    pub db_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:8080".to_string(),
            db_path: PathBuf::from("partstock.db"),
        }
    }
}

impl ServerConfig {
    /// Build a configuration from the environment, falling back to
    /// defaults. `PARTSTOCK_ADDR` overrides the bind address and
    /// `PARTSTOCK_DB` the database path.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            addr: std::env::var("PARTSTOCK_ADDR").unwrap_or(defaults.addr),
            db_path: std::env::var("PARTSTOCK_DB")
                .map(PathBuf::from)
                .unwrap_or(defaults.db_path),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.addr.parse::<std::net::SocketAddr>().is_err() {
            return Err(ConfigError::InvalidAddr(self.addr.clone()));
        }
        if self.db_path.as_os_str().is_empty() {
            return Err(ConfigError::MissingField("db_path".to_string()));
        }
        Ok(())
    }
}

/// Configuration validation error
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// Address does not parse as a socket address
    InvalidAddr(String),
    /// Required field is missing
    MissingField(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidAddr(addr) => write!(f, "Invalid bind address: {}", addr),
            ConfigError::MissingField(field) => write!(f, "Missing field: {}", field),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_addr() {
        let config = ServerConfig {
            addr: "not-an-address".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_db_path() {
        let config = ServerConfig {
            db_path: PathBuf::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
