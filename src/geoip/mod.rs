//! Network and location enrichment for a resolved address.
//!
//! Unlike the other lookups, a failed enrichment request is reported to the
//! user rather than degraded silently.

use log::info;

use crate::error_handling::NetworkError;
use crate::fetch::{IpInfoResponse, Transport};

/// Organization, ASN, company and location of an address.
///
/// Each field is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrichmentRecord {
    /// Organization string as reported
    pub org: Option<String>,
    /// ASN label, e.g. `AS15133`
    pub asn_label: Option<String>,
    /// Company name
    pub company_name: Option<String>,
    /// `country / region / city`, skipping empty parts
    pub location_label: Option<String>,
}

impl EnrichmentRecord {
    /// Derives the record from a raw enrichment response.
    ///
    /// - ASN: the explicit `asn.asn`, else the first word of `org`
    /// - Company: the explicit `company.name`, else `org`
    pub fn from_response(response: &IpInfoResponse) -> Self {
        let org = non_empty(response.org.as_deref());

        let asn_label = non_empty(response.asn.as_ref().and_then(|a| a.asn.as_deref()))
            .or_else(|| org.and_then(|o| o.split(' ').next()).and_then(|t| non_empty(Some(t))));

        let company_name =
            non_empty(response.company.as_ref().and_then(|c| c.name.as_deref())).or(org);

        let parts: Vec<&str> = [&response.country, &response.region, &response.city]
            .into_iter()
            .filter_map(|part| non_empty(part.as_deref()))
            .collect();
        let location_label = (!parts.is_empty()).then(|| parts.join(" / "));

        Self {
            org: org.map(str::to_string),
            asn_label: asn_label.map(str::to_string),
            company_name: company_name.map(str::to_string),
            location_label,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Looks up enrichment details for `ip`.
///
/// # Errors
///
/// Returns the [`NetworkError`] of the single enrichment request.
pub async fn lookup_ip_details(
    transport: &Transport,
    ip: &str,
    token: Option<&str>,
) -> Result<EnrichmentRecord, NetworkError> {
    let response = transport.enrich(ip, token).await?;
    let record = EnrichmentRecord::from_response(&response);
    info!(
        "Enrichment for {}: org={:?}, location={:?}",
        ip, record.org, record.location_label
    );
    Ok(record)
}
