//! Enrichment service response shape.
//!
//! Every field is optional; the free tier omits `asn` and `company` entirely.

use serde::Deserialize;

/// Autonomous system block of the response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IpInfoAsn {
    /// ASN label, e.g. `AS15133`
    pub asn: Option<String>,
}

/// Company block of the response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IpInfoCompany {
    /// Registered company name
    pub name: Option<String>,
}

/// Fields consumed from an enrichment response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IpInfoResponse {
    /// Organization string, usually `AS<number> <name>`
    pub org: Option<String>,
    /// Explicit ASN details
    pub asn: Option<IpInfoAsn>,
    /// Explicit company details
    pub company: Option<IpInfoCompany>,
    /// Country code
    pub country: Option<String>,
    /// Region or state
    pub region: Option<String>,
    /// City
    pub city: Option<String>,
}
