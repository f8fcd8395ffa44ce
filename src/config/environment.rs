// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses ports, database URL, slot interval, and HTTP limits from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Booking Admin Server Contributors

//! Environment-based configuration management

use crate::constants::{defaults, env_vars, slots};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::error::Error as StdError;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Environment type for logging and other deployment-dependent behavior
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database with file path
    SQLite {
        /// Database file
        path: PathBuf,
    },
    /// In-memory `SQLite` (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse from a `sqlite:` URL or a bare file path
    #[must_use]
    pub fn parse_url(s: &str) -> Self {
        let path_str = s
            .strip_prefix("sqlite://")
            .or_else(|| s.strip_prefix("sqlite:"))
            .unwrap_or(s);
        if path_str == ":memory:" {
            Self::Memory
        } else {
            Self::SQLite {
                path: PathBuf::from(path_str),
            }
        }
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from(defaults::DATABASE_PATH),
        }
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Availability engine tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityConfig {
    /// Slot length in minutes (1..=1440)
    pub slot_interval_minutes: u32,
    /// Concurrent staff lookups per service query (at least 1)
    pub max_concurrency: usize,
}

impl Default for AvailabilityConfig {
    fn default() -> Self {
        Self {
            slot_interval_minutes: slots::DEFAULT_INTERVAL_MINUTES,
            max_concurrency: slots::DEFAULT_MAX_CONCURRENCY,
        }
    }
}

/// HTTP layer limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Comma-separated allowed origins, or `*`
    pub cors_allowed_origins: String,
}

impl HttpConfig {
    /// Request timeout as a `Duration`
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: defaults::REQUEST_TIMEOUT_SECS,
            cors_allowed_origins: defaults::CORS_ALLOWED_ORIGINS.to_owned(),
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// HTTP bind address
    pub host: String,
    /// Database location
    pub database_url: DatabaseUrl,
    /// Availability engine tuning
    pub availability: AvailabilityConfig,
    /// HTTP layer limits
    pub http: HttpConfig,
    /// Deployment environment
    pub environment: Environment,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: defaults::HTTP_PORT,
            host: defaults::HOST.to_owned(),
            database_url: DatabaseUrl::default(),
            availability: AvailabilityConfig::default(),
            http: HttpConfig::default(),
            environment: Environment::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed, or if a
    /// parsed value is outside its accepted range
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let http_port = match env_first(&[env_vars::HTTP_PORT, env_vars::SERVER_PORT]) {
            Some(port) => port.parse().context("Invalid HTTP_PORT value")?,
            None => defaults::HTTP_PORT,
        };

        let database_url = if let Ok(url) = env::var(env_vars::DATABASE_URL) {
            DatabaseUrl::parse_url(&url)
        } else if let Ok(path) = env::var(env_vars::DB_PATH) {
            DatabaseUrl::SQLite {
                path: PathBuf::from(path),
            }
        } else {
            DatabaseUrl::default()
        };

        let config = Self {
            http_port,
            host: env::var(env_vars::HOST).unwrap_or_else(|_| defaults::HOST.to_owned()),
            database_url,
            availability: AvailabilityConfig {
                slot_interval_minutes: env_parse_or(
                    env_vars::SLOT_INTERVAL_MINUTES,
                    slots::DEFAULT_INTERVAL_MINUTES,
                )?,
                max_concurrency: env_parse_or(
                    env_vars::AVAILABILITY_MAX_CONCURRENCY,
                    slots::DEFAULT_MAX_CONCURRENCY,
                )?,
            },
            http: HttpConfig {
                request_timeout_secs: env_parse_or(
                    env_vars::REQUEST_TIMEOUT_SECS,
                    defaults::REQUEST_TIMEOUT_SECS,
                )?,
                cors_allowed_origins: env::var(env_vars::CORS_ALLOWED_ORIGINS)
                    .unwrap_or_else(|_| defaults::CORS_ALLOWED_ORIGINS.to_owned()),
            },
            environment: env::var(env_vars::ENVIRONMENT)
                .map(|value| Environment::from_str_or_default(&value))
                .unwrap_or_default(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that parsing alone cannot enforce
    ///
    /// # Errors
    ///
    /// Returns an error naming the first out-of-range setting
    pub fn validate(&self) -> Result<()> {
        let interval = self.availability.slot_interval_minutes;
        if interval == 0 || interval > slots::MINUTES_PER_DAY {
            bail!(
                "{} must be between 1 and {}, got {interval}",
                env_vars::SLOT_INTERVAL_MINUTES,
                slots::MINUTES_PER_DAY
            );
        }
        if self.availability.max_concurrency == 0 {
            bail!("{} must be at least 1", env_vars::AVAILABILITY_MAX_CONCURRENCY);
        }
        if self.http.request_timeout_secs == 0 {
            bail!("{} must be at least 1", env_vars::REQUEST_TIMEOUT_SECS);
        }
        Ok(())
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Booking Admin Server Configuration:\n\
             - HTTP: {}:{}\n\
             - Database: {}\n\
             - Slot Interval: {} minutes\n\
             - Availability Concurrency: {}\n\
             - Request Timeout: {}s\n\
             - CORS Origins: {}\n\
             - Environment: {}",
            self.host,
            self.http_port,
            self.database_url,
            self.availability.slot_interval_minutes,
            self.availability.max_concurrency,
            self.http.request_timeout_secs,
            self.http.cors_allowed_origins,
            self.environment,
        )
    }
}

/// First variable in `keys` that is set
fn env_first(keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| env::var(key).ok())
}

/// Parse an environment variable, falling back to `default` when unset
fn env_parse_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: StdError + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("Invalid {key} value: {value}")),
        Err(_) => Ok(default),
    }
}
