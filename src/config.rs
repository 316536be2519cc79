// src/config.rs
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    max_connections: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://blog.db?mode=rwc".into()
}

fn default_max_connections() -> u32 {
    8
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| default_database_url());
        if database_url.trim().is_empty() {
            return Err(ConfigError::Invalid("DATABASE_URL cannot be empty".into()));
        }

        let max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(raw) => parse_max_connections(&raw)?,
            Err(_) => default_max_connections(),
        };

        Ok(Self {
            database_url,
            max_connections,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn max_connections(&self) -> u32 {
        self.max_connections
    }

    /// Replace the database URL, e.g. from a command line flag.
    pub fn with_database_url(mut self, database_url: impl Into<String>) -> Self {
        self.database_url = database_url.into();
        self
    }
}

fn parse_max_connections(raw: &str) -> Result<u32, ConfigError> {
    match raw.trim().parse::<u32>() {
        Ok(value) if value >= 1 => Ok(value),
        _ => Err(ConfigError::Invalid(format!(
            "DATABASE_MAX_CONNECTIONS must be a positive integer, got '{raw}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_connections_must_be_positive() {
        assert_eq!(parse_max_connections(" 4 ").unwrap(), 4);
        assert!(parse_max_connections("0").is_err());
        assert!(parse_max_connections("many").is_err());
    }

    #[test]
    fn database_url_can_be_overridden() {
        let config = AppConfig {
            database_url: default_database_url(),
            max_connections: default_max_connections(),
        }
        .with_database_url("sqlite::memory:");
        assert_eq!(config.database_url(), "sqlite::memory:");
        assert_eq!(config.max_connections(), 8);
    }
}
