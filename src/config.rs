//! Server configuration from environment variables.

use std::env;
use std::net::SocketAddr;

/// Database used when `DATABASE_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/starwars.db";

/// Server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SQLite connection URL.
    pub database_url: String,
    /// Server port to listen on.
    pub port: u16,
    /// Log level used when `RUST_LOG` is unset.
    pub log_level: String,
    /// CORS allowed origins (comma-separated or "*" for all).
    pub cors_allowed_origins: String,
    /// bcrypt work factor for stored passwords.
    pub bcrypt_cost: u32,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `DATABASE_URL`: SQLite URL (default: [`DEFAULT_DATABASE_URL`])
    /// - `PORT`: Server port (default: 3000)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    /// - `CORS_ALLOWED_ORIGINS`: Allowed CORS origins (default: "*")
    /// - `BCRYPT_COST`: Password hashing cost (default: bcrypt's default)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = match lookup("DATABASE_URL") {
            Some(url) if !url.trim().is_empty() => url,
            _ => DEFAULT_DATABASE_URL.to_string(),
        };

        if !database_url.starts_with("sqlite:") {
            return Err(ConfigError::InvalidValue {
                name: "DATABASE_URL".to_string(),
                reason: format!("unsupported database {:?}, expected a sqlite: URL", database_url),
            });
        }

        let port = parse_or("PORT", lookup("PORT"), 3000)?;
        let bcrypt_cost = parse_or("BCRYPT_COST", lookup("BCRYPT_COST"), bcrypt::DEFAULT_COST)?;

        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        let cors_allowed_origins =
            lookup("CORS_ALLOWED_ORIGINS").unwrap_or_else(|| "*".to_string());

        Ok(Self {
            database_url,
            port,
            log_level,
            cors_allowed_origins,
            bcrypt_cost,
        })
    }

    /// Get the socket address for the server.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn parse_or<T>(name: &str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            name: name.to_string(),
            reason: e.to_string(),
        }),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid environment variable value.
    #[error("invalid value for environment variable {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_default_values() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.port, 3000);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.cors_allowed_origins, "*");
        assert_eq!(config.bcrypt_cost, bcrypt::DEFAULT_COST);
    }

    #[test]
    fn test_explicit_values() {
        let config = config_from(&[
            ("DATABASE_URL", "sqlite://data/catalogue.db"),
            ("PORT", "8080"),
            ("LOG_LEVEL", "debug"),
            ("BCRYPT_COST", "6"),
        ])
        .unwrap();

        assert_eq!(config.database_url, "sqlite://data/catalogue.db");
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.bcrypt_cost, 6);
        assert_eq!(config.socket_addr().port(), 8080);
    }

    #[test]
    fn test_blank_database_url_falls_back_to_file() {
        let config = config_from(&[("DATABASE_URL", "  ")]).unwrap();
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
    }

    #[test]
    fn test_postgres_url_rejected() {
        let err = config_from(&[("DATABASE_URL", "postgres://u:p@localhost/db")]).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn test_invalid_port_rejected() {
        let err = config_from(&[("PORT", "not-a-port")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
