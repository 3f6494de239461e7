//! Configuration for the ORS support helpers.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `ORS_LOG_LEVEL` | info | Log level |
//! | `ORS_HTTP_TIMEOUT` | 60 | Default POST timeout (seconds, 0 disables) |
//! | `ORS_HTTP_VERIFY_TLS` | false | Verify TLS certificates |
//! | `ORS_INFANT_AGE` | 2 | Upper bound (exclusive) on an infant's age |
//! | `ORS_DATE_FORMAT` | %d.%m.%Y | Default date format |
//! | `ORS_DATETIME_FORMAT` | %d.%m.%Y %H:%M:%S | Default date-time format |
//!
//! # Example
//!
//! ```rust
//! use ors_support::SupportConfig;
//!
//! let config = SupportConfig {
//!     http_timeout: 10,
//!     verify_tls: true,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use std::time::Duration;

use clap::Parser;
use ors_crs::{CrsFieldSource, DEFAULT_INFANT_AGE};

use crate::common::dates;

/// Configuration for the ORS support helpers.
///
/// Built from environment variables with [`SupportConfig::from_env`], from
/// command line arguments with [`SupportConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "ors-support")]
#[command(about = "ORS support configuration")]
pub struct SupportConfig {
    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "ORS_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Default timeout for CRS POST requests in seconds (0 disables).
    #[arg(long, env = "ORS_HTTP_TIMEOUT", default_value = "60")]
    pub http_timeout: u64,

    /// Verify TLS certificates of CRS endpoints.
    #[arg(long, env = "ORS_HTTP_VERIFY_TLS", default_value = "false")]
    pub verify_tls: bool,

    /// Upper bound (exclusive) on an infant's age.
    #[arg(long, env = "ORS_INFANT_AGE", default_value = "2")]
    pub infant_age: u32,

    /// Default date format (chrono syntax).
    #[arg(long, env = "ORS_DATE_FORMAT", default_value = "%d.%m.%Y")]
    pub date_format: String,

    /// Default date-time format (chrono syntax).
    #[arg(long, env = "ORS_DATETIME_FORMAT", default_value = "%d.%m.%Y %H:%M:%S")]
    pub datetime_format: String,
}

impl Default for SupportConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            http_timeout: 60,
            verify_tls: false,
            infant_age: DEFAULT_INFANT_AGE,
            date_format: "%d.%m.%Y".to_string(),
            datetime_format: "%d.%m.%Y %H:%M:%S".to_string(),
        }
    }
}

impl SupportConfig {
    /// Creates a configuration from environment variables, falling back to
    /// defaults.
    pub fn from_env() -> Self {
        Self::try_parse_from(["ors-support"]).unwrap_or_default()
    }

    /// Returns the default POST timeout, `None` when disabled.
    pub fn http_timeout(&self) -> Option<Duration> {
        (self.http_timeout > 0).then(|| Duration::from_secs(self.http_timeout))
    }

    /// Counts the infants in `params` below the configured age.
    pub fn infants(&self, params: &impl CrsFieldSource) -> usize {
        params.infants(self.infant_age)
    }

    /// Formats `input` with the configured date format.
    pub fn format_date(&self, input: &str) -> String {
        dates::date(input, &self.date_format)
    }

    /// Formats `input` with the configured date-time format.
    pub fn format_date_time(&self, input: &str) -> String {
        dates::date_time(input, &self.datetime_format)
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !matches!(
            self.log_level.to_ascii_lowercase().as_str(),
            "error" | "warn" | "info" | "debug" | "trace"
        ) {
            errors.push(format!("Unknown log level: {}", self.log_level));
        }

        if self.infant_age == 0 {
            errors.push("Infant age cannot be 0".to_string());
        }

        if self.date_format.trim().is_empty() {
            errors.push("Date format cannot be empty".to_string());
        }

        if self.datetime_format.trim().is_empty() {
            errors.push("Date-time format cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    pub fn for_testing() -> Self {
        Self {
            log_level: "debug".to_string(),
            http_timeout: 5,
            ..Default::default()
        }
    }
}
