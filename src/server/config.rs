use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// - `DATABASE_URL` (required) - SeaORM connection string, e.g.
    ///   `sqlite://league.db?mode=rwc`
    /// - `BIND_ADDRESS` (optional) - socket address for the HTTP listener, defaults to
    ///   `0.0.0.0:8080`
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_address = std::env::var("BIND_ADDRESS")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = Self::parse_bind_address(&bind_address)?;

        Ok(Self {
            database_url,
            bind_address,
        })
    }

    fn parse_bind_address(value: &str) -> Result<SocketAddr, ConfigError> {
        value
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "BIND_ADDRESS".to_string(),
                value: value.to_string(),
                reason: e.to_string(),
            })
    }
}
