//! RDAP registration lookup for a zone apex.
//!
//! This module derives, from the apex's RDAP domain document:
//! - the domain status list
//! - the time until expiry
//! - the registrar name (fallback chain, see [`extract_registrar`])
//!
//! A failure to fetch or parse the apex document collapses all three into a
//! single degraded record; no partial RDAP data is surfaced.

mod expiry;
mod registrar;
mod vcard;

use std::fmt;

use chrono::{DateTime, Utc};
use log::{info, warn};

use crate::config::{STATUS_FETCH_ERROR, UNKNOWN};
use crate::fetch::{RdapDocument, Transport};

// Re-export public API
pub use expiry::{expiry_category, parse_event_date, ExpiryCategory};
pub use registrar::{
    direct_registrar_name, extract_registrar, iana_registrar_id, registrar_entity_name,
    registrar_link,
};
pub use vcard::vcard_formatted_name;

/// Registration state of a domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainStatus {
    /// Status codes as listed by the registry
    Listed(Vec<String>),
    /// The document carries no status
    Unknown,
    /// The apex document could not be fetched or parsed
    FetchError,
}

impl fmt::Display for DomainStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainStatus::Listed(codes) => f.write_str(&codes.join(", ")),
            DomainStatus::Unknown => f.write_str(UNKNOWN),
            DomainStatus::FetchError => f.write_str(STATUS_FETCH_ERROR),
        }
    }
}

/// Status, expiry and registrar of one apex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationRecord {
    /// Domain status
    pub status: DomainStatus,
    /// Time until expiry
    pub expiry: ExpiryCategory,
    /// Registrar name, or `Unknown`
    pub registrar: String,
}

impl RegistrationRecord {
    /// The record used when the apex document is unavailable.
    pub fn degraded() -> Self {
        Self {
            status: DomainStatus::FetchError,
            expiry: ExpiryCategory::Unknown,
            registrar: UNKNOWN.to_string(),
        }
    }
}

/// Status of `document`.
pub fn domain_status(document: &RdapDocument) -> DomainStatus {
    let codes = document.statuses();
    if codes.is_empty() {
        DomainStatus::Unknown
    } else {
        DomainStatus::Listed(codes.into_iter().map(str::to_string).collect())
    }
}

/// Builds the registration record of an already fetched document.
pub async fn registration_from_document(
    transport: &Transport,
    document: &RdapDocument,
    now: DateTime<Utc>,
) -> RegistrationRecord {
    RegistrationRecord {
        status: domain_status(document),
        expiry: expiry_category(document, now),
        registrar: extract_registrar(transport, document).await,
    }
}

/// Fetches and derives the registration record of `apex`.
///
/// Never fails: an unavailable document yields [`RegistrationRecord::degraded`].
pub async fn fetch_registration(transport: &Transport, apex: &str) -> RegistrationRecord {
    match transport.rdap_query(apex).await {
        Ok(document) => {
            let record = registration_from_document(transport, &document, Utc::now()).await;
            info!(
                "RDAP for {}: status={}, expiry={}, registrar={}",
                apex, record.status, record.expiry, record.registrar
            );
            record
        }
        Err(e) => {
            warn!("RDAP lookup for {apex} failed: {e}");
            RegistrationRecord::degraded()
        }
    }
}
