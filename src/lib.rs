//! domain_insight library: hostname identity lookup
//!
//! This library resolves a hostname into a consolidated identity record: its
//! DNS zone apex and name servers, RDAP registration status, expiry and
//! registrar, A records, reverse DNS, and network/location enrichment of the
//! resolved address.
//!
//! Every lookup is best effort. Individual failures degrade single fields;
//! only an unusable hostname and a failed enrichment request are reported.
//!
//! # Example
//!
//! ```no_run
//! use domain_insight::settings::MemorySettingsStore;
//! use domain_insight::sink::JsonSink;
//! use domain_insight::{run_lookup, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let store = MemorySettingsStore::default();
//! let mut sink = JsonSink::new();
//!
//! let report = run_lookup(&config, "https://www.example.com/", &store, &mut sink).await?;
//! println!("{} is served from zone {}", report.hostname, report.apex);
//! sink.write_to(std::io::stdout())?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

#![warn(missing_docs)]

mod app;
pub mod config;
pub mod dns;
pub mod error_handling;
pub mod fetch;
pub mod geoip;
pub mod initialization;
pub mod lookup;
pub mod rdap;
pub mod settings;
pub mod sink;

// Re-export public API
pub use app::hostname_from_input;
pub use config::{Config, LogFormat, LogLevel, OutputFormat};
pub use error_handling::{LookupError, NetworkError};
pub use lookup::{lookup_host, InsightReport};

use anyhow::{Context, Result};
use log::{info, warn};

use crate::fetch::{Endpoints, Transport};
use crate::initialization::init_client;
use crate::settings::{load_token, SettingsStore};
use crate::sink::{present, ResultSink};

/// Runs a lookup for the hostname in `input` and presents it to `sink`.
///
/// The enrichment token is `config.ipinfo_token` when set, otherwise the one
/// persisted in `store`.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built, or if no hostname can
/// be extracted from `input` (after showing that error on `sink`). Lookup
/// failures never surface here; they are part of the returned report.
pub async fn run_lookup(
    config: &Config,
    input: &str,
    store: &dyn SettingsStore,
    sink: &mut dyn ResultSink,
) -> Result<InsightReport> {
    let hostname = match hostname_from_input(input) {
        Ok(hostname) => hostname,
        Err(e) => {
            sink.show_error(&e.to_string());
            return Err(e.into());
        }
    };

    let token = resolve_token(config, store);
    let client = init_client(config).context("Failed to initialize HTTP client")?;
    let transport = Transport::new(client, Endpoints::from(config));

    info!("Looking up {hostname}");
    let report = lookup_host(&transport, &hostname, token.as_deref()).await;
    present(&report, sink);
    Ok(report)
}

fn resolve_token(config: &Config, store: &dyn SettingsStore) -> Option<String> {
    let explicit = config
        .ipinfo_token
        .as_deref()
        .map(str::trim)
        .filter(|token| !token.is_empty());
    if let Some(token) = explicit {
        return Some(token.to_string());
    }

    match load_token(store) {
        Ok(token) => token,
        Err(e) => {
            warn!("Could not read the saved enrichment token: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{save_token, MemorySettingsStore};

    #[test]
    fn test_explicit_token_wins_over_saved_one() {
        let mut store = MemorySettingsStore::default();
        save_token(&mut store, "saved").unwrap();

        let config = Config {
            ipinfo_token: Some(" explicit ".to_string()),
            ..Default::default()
        };
        assert_eq!(resolve_token(&config, &store).as_deref(), Some("explicit"));

        let config = Config {
            ipinfo_token: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(resolve_token(&config, &store).as_deref(), Some("saved"));
    }

    #[test]
    fn test_no_token_anywhere() {
        let store = MemorySettingsStore::default();
        assert_eq!(resolve_token(&Config::default(), &store), None);
    }
}
