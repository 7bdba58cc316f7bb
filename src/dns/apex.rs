//! Zone apex discovery.
//!
//! The apex is the first candidate zone, scanning from the full hostname and
//! stripping one leftmost label at a time, that answers with at least one NS
//! record. The bare top-level label is never probed.

use log::{debug, info};

use crate::fetch::{RecordType, Transport};

/// A discovered zone apex and its name servers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneApex {
    /// Zone apex, or the original hostname when no zone answered
    pub apex: String,
    /// Name servers without trailing dots; empty when unknown
    pub name_servers: Vec<String>,
}

/// Candidate zones for `hostname`, most specific first.
///
/// `a.b.example.com` yields `a.b.example.com`, `b.example.com`, `example.com`.
/// Single-label names yield nothing.
pub fn zone_candidates(hostname: &str) -> Vec<String> {
    let labels: Vec<&str> = hostname.split('.').collect();
    (0..labels.len().saturating_sub(1))
        .map(|i| labels[i..].join("."))
        .collect()
}

/// Walks the candidate zones of `hostname` until one has NS records.
///
/// Never fails: probe errors are treated like empty answers, and when every
/// candidate is exhausted the hostname itself is returned with no name servers.
pub async fn find_apex(transport: &Transport, hostname: &str) -> ZoneApex {
    for candidate in zone_candidates(hostname) {
        let response = match transport.dns_query(&candidate, RecordType::Ns).await {
            Ok(response) => response,
            Err(e) => {
                debug!("NS probe for {candidate} failed: {e}");
                continue;
            }
        };

        let name_servers: Vec<String> = response
            .answers_of_type(RecordType::Ns)
            .filter(|data| !data.is_empty())
            .map(|data| data.strip_suffix('.').unwrap_or(data).to_string())
            .collect();

        if !name_servers.is_empty() {
            info!(
                "Zone apex for {hostname} is {candidate} ({} name servers)",
                name_servers.len()
            );
            return ZoneApex {
                apex: candidate,
                name_servers,
            };
        }
        debug!("No NS records at {candidate}");
    }

    info!("No zone apex found for {hostname}; using the hostname itself");
    ZoneApex {
        apex: hostname.to_string(),
        name_servers: Vec::new(),
    }
}
