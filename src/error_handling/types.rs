//! Error type definitions.

use std::fmt;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use reqwest::StatusCode;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// The external service a request was sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    /// DNS-over-HTTPS JSON endpoint
    Doh,
    /// RDAP service (domain query or a followed link)
    Rdap,
    /// IP enrichment service
    Enrichment,
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Service::Doh => "DoH",
            Service::Rdap => "RDAP",
            Service::Enrichment => "IPinfo",
        })
    }
}

/// A single failed request.
///
/// Requests are never retried; the caller decides whether the failure is
/// swallowed or reported.
#[derive(Error, Debug)]
pub enum NetworkError {
    /// The server answered with a non-success status.
    #[error("{service} lookup failed ({status})")]
    Status {
        /// Service that answered
        service: Service,
        /// HTTP status returned
        status: StatusCode,
    },

    /// The request never completed, or its body could not be decoded.
    #[error("{service} lookup failed: {source}")]
    Request {
        /// Service the request was sent to
        service: Service,
        /// Underlying transport error
        #[source]
        source: ReqwestError,
    },
}

impl NetworkError {
    /// HTTP status code, if the request completed.
    pub fn status(&self) -> Option<u16> {
        match self {
            NetworkError::Status { status, .. } => Some(status.as_u16()),
            NetworkError::Request { .. } => None,
        }
    }

    /// Service the failed request was sent to.
    pub fn service(&self) -> Service {
        match self {
            NetworkError::Status { service, .. } | NetworkError::Request { service, .. } => {
                *service
            }
        }
    }
}

/// Errors reading or writing the persisted settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The settings file could not be read or written.
    #[error("Settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file is not a JSON object of strings.
    #[error("Settings format error: {0}")]
    Format(#[from] serde_json::Error),
}

/// Failures that are surfaced to the user.
///
/// Every other failure in the pipeline degrades a single field silently.
#[derive(Error, Debug)]
pub enum LookupError {
    /// No hostname could be determined from the caller's input.
    #[error("Could not extract hostname from '{0}'.")]
    HostnameUnavailable(String),

    /// The enrichment request failed.
    #[error(transparent)]
    Enrichment(#[from] NetworkError),

    /// The enrichment token could not be persisted.
    #[error("Failed to save token")]
    SettingsSave(#[source] SettingsError),
}
