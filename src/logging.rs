// ABOUTME: Logging configuration and structured logging setup for observability and debugging
// ABOUTME: Configures log levels, output format, and noise filters for the tracing subscriber
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Booking Admin Server Contributors

//! Production-ready logging configuration with structured output

use crate::constants::service_names;
use anyhow::{anyhow, Result};
use serde_json::json;
use std::env;
use std::io;
use tracing::{info, Level};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Include span open/close events
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Environment (development, testing, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl LogFormat {
    /// Parse the `LOG_FORMAT` value, defaulting to pretty output
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            include_spans: false,
            service_name: service_names::BOOKING_ADMIN_SERVER.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
        let format = env::var("LOG_FORMAT")
            .map(|value| LogFormat::from_str_or_default(&value))
            .unwrap_or(LogFormat::Pretty);
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        // Production gets location, thread, and span detail by default
        let is_production = environment == "production";

        Self {
            level,
            format,
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: is_production || env::var("LOG_INCLUDE_THREAD").is_ok(),
            include_spans: is_production || env::var("LOG_INCLUDE_SPANS").is_ok(),
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| service_names::BOOKING_ADMIN_SERVER.into()),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment,
        }
    }

    /// Build the filter: the configured level plus fixed noise reduction rules
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        let noise = [
            ("hyper", Level::WARN),
            ("hyper::proto", Level::WARN),
            ("sqlx", Level::WARN),
            ("sqlx::query", Level::WARN),
            ("tower_http", Level::INFO),
        ];

        let filter = noise
            .iter()
            .fold(EnvFilter::new(&self.level), |filter, (target, level)| {
                filter.add_directive(
                    format!("{target}={level}")
                        .parse()
                        .unwrap_or_else(|_| (*level).into()),
                )
            });

        filter.add_directive(
            format!("booking_admin_server={}", self.level)
                .parse()
                .unwrap_or_else(|_| Level::INFO.into()),
        )
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        let installed = match self.format {
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_thread_ids(self.include_thread)
                        .with_thread_names(self.include_thread)
                        .with_target(true)
                        .with_writer(io::stdout)
                        .with_span_events(span_events)
                        .json(),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_thread_ids(self.include_thread)
                        .with_thread_names(self.include_thread)
                        .with_target(true)
                        .with_writer(io::stdout)
                        .with_span_events(span_events),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(false)
                        .with_writer(io::stdout)
                        .with_span_events(FmtSpan::NONE),
                )
                .try_init(),
        };

        installed.map_err(|e| anyhow!("Failed to initialize logging: {e}"))?;
        self.log_startup_info();
        Ok(())
    }

    /// Log structured startup information
    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Booking admin server starting up"
        );

        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
                "features": {
                    "location": self.include_location,
                    "thread": self.include_thread,
                    "spans": self.include_spans
                }
            }
        });

        info!("Logging configured: {}", config_summary);
    }
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!(LogFormat::from_str_or_default("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::from_str_or_default("compact"), LogFormat::Compact);
        assert_eq!(LogFormat::from_str_or_default("fancy"), LogFormat::Pretty);
    }

    #[test]
    fn test_env_filter_accepts_custom_level() {
        let config = LoggingConfig {
            level: "debug".into(),
            ..LoggingConfig::default()
        };

        let filter = config.env_filter().to_string().to_lowercase();
        assert!(filter.contains("booking_admin_server=debug"));
        assert!(filter.contains("sqlx=warn"));
    }
}
