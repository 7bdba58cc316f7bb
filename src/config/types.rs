//! Configuration types and CLI option enums.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::constants::{
    DEFAULT_DOH_URL, DEFAULT_ENRICHMENT_URL, DEFAULT_RDAP_URL, DEFAULT_SETTINGS_PATH,
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, MAX_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How the final report is rendered.
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned, colored terminal output
    Plain,
    /// A single JSON object on stdout
    Json,
}

/// A configuration value that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong and what is accepted instead
    pub message: String,
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigValidationError {}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```no_run
/// use domain_insight::Config;
///
/// let config = Config {
///     timeout_seconds: 5,
///     ipinfo_token: Some("abc123".to_string()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Report output format
    pub output: OutputFormat,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// DNS-over-HTTPS JSON endpoint
    pub doh_url: String,

    /// RDAP service base URL
    pub rdap_url: String,

    /// Enrichment service base URL
    pub enrichment_url: String,

    /// Settings file holding the persisted enrichment token
    pub settings_path: PathBuf,

    /// Enrichment token; takes precedence over the persisted one
    pub ipinfo_token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            output: OutputFormat::Plain,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            doh_url: DEFAULT_DOH_URL.to_string(),
            rdap_url: DEFAULT_RDAP_URL.to_string(),
            enrichment_url: DEFAULT_ENRICHMENT_URL.to_string(),
            settings_path: PathBuf::from(DEFAULT_SETTINGS_PATH),
            ipinfo_token: None,
        }
    }
}

impl Config {
    /// Checks that timeouts are in range and that every endpoint is an http(s) URL.
    ///
    /// # Errors
    ///
    /// Returns the first offending field.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.timeout_seconds == 0 {
            return Err(ConfigValidationError {
                field: "timeout_seconds",
                message: "must be greater than 0".to_string(),
            });
        }
        if self.timeout_seconds > MAX_TIMEOUT_SECS {
            return Err(ConfigValidationError {
                field: "timeout_seconds",
                message: format!("must be at most {MAX_TIMEOUT_SECS} seconds"),
            });
        }

        for (field, value) in [
            ("doh_url", &self.doh_url),
            ("rdap_url", &self.rdap_url),
            ("enrichment_url", &self.enrichment_url),
        ] {
            validate_endpoint(field, value)?;
        }

        Ok(())
    }
}

fn validate_endpoint(field: &'static str, value: &str) -> Result<(), ConfigValidationError> {
    match url::Url::parse(value) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(()),
        Ok(parsed) => Err(ConfigValidationError {
            field,
            message: format!("unsupported scheme '{}' (expected http or https)", parsed.scheme()),
        }),
        Err(e) => Err(ConfigValidationError {
            field,
            message: format!("'{value}' is not a valid URL: {e}"),
        }),
    }
}
