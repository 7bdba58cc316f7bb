//! The hostname lookup pipeline.
//!
//! Stages run in data-dependency order:
//! 1. zone apex and name servers
//! 2. RDAP registration of the apex, concurrently with A records for the
//!    hostname and the apex
//! 3. reverse DNS and enrichment of the selected address, concurrently
//!
//! The pipeline always produces a report. Failures degrade single fields,
//! except enrichment failures, which are collected in [`InsightReport::errors`].

use log::{info, warn};

use crate::dns::{find_apex, resolve_addresses, reverse_dns_lookup, select_target_ip};
use crate::error_handling::LookupError;
use crate::fetch::Transport;
use crate::geoip::{lookup_ip_details, EnrichmentRecord};
use crate::rdap::{fetch_registration, RegistrationRecord};

/// Everything known about one hostname after a lookup.
#[derive(Debug)]
pub struct InsightReport {
    /// The hostname that was looked up
    pub hostname: String,
    /// Zone apex, or the hostname when none was found
    pub apex: String,
    /// Name servers of the apex; empty when unknown
    pub name_servers: Vec<String>,
    /// Registration of the apex
    pub registration: RegistrationRecord,
    /// A records of the hostname
    pub host_addresses: Vec<String>,
    /// A records of the apex
    pub apex_addresses: Vec<String>,
    /// Address chosen for reverse DNS and enrichment
    pub ip: Option<String>,
    /// PTR target of `ip`
    pub reverse_dns: Option<String>,
    /// Enrichment of `ip`, when it succeeded
    pub enrichment: Option<EnrichmentRecord>,
    /// Failures to report to the user
    pub errors: Vec<LookupError>,
}

/// Runs the full lookup for `hostname`.
///
/// `token` authenticates the enrichment request when present.
pub async fn lookup_host(
    transport: &Transport,
    hostname: &str,
    token: Option<&str>,
) -> InsightReport {
    let zone = find_apex(transport, hostname).await;
    let apex = zone.apex.as_str();

    let (registration, (host_addresses, apex_addresses)) = tokio::join!(
        fetch_registration(transport, apex),
        async {
            tokio::join!(
                resolve_addresses(transport, hostname),
                resolve_addresses(transport, apex)
            )
        }
    );

    let mut report = InsightReport {
        hostname: hostname.to_string(),
        apex: zone.apex.clone(),
        name_servers: zone.name_servers.clone(),
        registration,
        ip: select_target_ip(&host_addresses, &apex_addresses).map(str::to_string),
        host_addresses,
        apex_addresses,
        reverse_dns: None,
        enrichment: None,
        errors: Vec::new(),
    };

    let Some(ip) = report.ip.clone() else {
        info!("No address for {hostname} or {apex}; skipping reverse DNS and enrichment");
        return report;
    };

    let (reverse_dns, enrichment) = tokio::join!(
        reverse_dns_lookup(transport, &ip),
        lookup_ip_details(transport, &ip, token)
    );
    report.reverse_dns = reverse_dns;
    match enrichment {
        Ok(record) => report.enrichment = Some(record),
        Err(e) => {
            warn!("Enrichment for {ip} failed: {e}");
            report.errors.push(LookupError::Enrichment(e));
        }
    }

    report
}
