//! HTTP transport for the three external services.
//!
//! Every call is a single request with no retry. A non-success status or a
//! request that never completes surfaces as a [`NetworkError`]; callers decide
//! whether that degrades a field or is reported.

mod dns;
mod enrichment;
mod rdap;

use std::sync::Arc;

use log::debug;
use reqwest::header::ACCEPT;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::config::{Config, DNS_JSON_MEDIA_TYPE, RDAP_JSON_MEDIA_TYPE};
use crate::error_handling::{NetworkError, Service};

pub use dns::{DnsAnswer, DnsResponse, RecordType};
pub use enrichment::{IpInfoAsn, IpInfoCompany, IpInfoResponse};
pub use rdap::RdapDocument;

/// Base URLs of the external services.
#[derive(Debug, Clone)]
pub struct Endpoints {
    /// DNS-over-HTTPS JSON endpoint (queried with `name`, `type`, `cd`)
    pub doh: String,
    /// RDAP service base; `/domain/<apex>` is appended
    pub rdap: String,
    /// Enrichment service base; `/<ip>` is appended
    pub enrichment: String,
}

impl From<&Config> for Endpoints {
    fn from(config: &Config) -> Self {
        Self {
            doh: config.doh_url.clone(),
            rdap: config.rdap_url.clone(),
            enrichment: config.enrichment_url.clone(),
        }
    }
}

/// Shared HTTP transport.
#[derive(Debug, Clone)]
pub struct Transport {
    client: Arc<reqwest::Client>,
    endpoints: Endpoints,
}

impl Transport {
    /// Creates a transport over an existing client.
    pub fn new(client: Arc<reqwest::Client>, endpoints: Endpoints) -> Self {
        Self { client, endpoints }
    }

    /// Endpoints this transport sends requests to.
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Queries the DoH endpoint for `name` records of type `record_type`.
    pub async fn dns_query(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<DnsResponse, NetworkError> {
        debug!("DoH {} query for {}", record_type, name);
        let request = self
            .client
            .get(&self.endpoints.doh)
            .query(&[
                ("name", name),
                ("type", record_type.as_str()),
                ("cd", "false"),
            ])
            .header(ACCEPT, DNS_JSON_MEDIA_TYPE);
        fetch_json(Service::Doh, request).await
    }

    /// Fetches the RDAP domain document for `domain`.
    pub async fn rdap_query(&self, domain: &str) -> Result<RdapDocument, NetworkError> {
        let url = format!(
            "{}/domain/{}",
            self.endpoints.rdap.trim_end_matches('/'),
            domain
        );
        self.rdap_follow(&url).await
    }

    /// Fetches an arbitrary RDAP document, e.g. a registrar link.
    pub async fn rdap_follow(&self, url: &str) -> Result<RdapDocument, NetworkError> {
        debug!("RDAP request to {}", url);
        let request = self.client.get(url).header(ACCEPT, RDAP_JSON_MEDIA_TYPE);
        fetch_json(Service::Rdap, request).await.map(RdapDocument::new)
    }

    /// Fetches enrichment details for `ip`, authenticated with `token` when given.
    pub async fn enrich(
        &self,
        ip: &str,
        token: Option<&str>,
    ) -> Result<IpInfoResponse, NetworkError> {
        let url = format!("{}/{}", self.endpoints.enrichment.trim_end_matches('/'), ip);
        debug!("Enrichment request for {} (token: {})", ip, token.is_some());
        let mut request = self.client.get(url);
        if let Some(token) = token {
            request = request.query(&[("token", token)]);
        }
        fetch_json(Service::Enrichment, request).await
    }
}

async fn fetch_json<T: DeserializeOwned>(
    service: Service,
    request: RequestBuilder,
) -> Result<T, NetworkError> {
    let response = request
        .send()
        .await
        .map_err(|source| request_error(service, source))?;
    let response = check_status(service, response)?;
    response
        .json::<T>()
        .await
        .map_err(|source| request_error(service, source))
}

// The request URL may carry the enrichment token, so it never reaches error text.
fn request_error(service: Service, source: reqwest::Error) -> NetworkError {
    NetworkError::Request {
        service,
        source: source.without_url(),
    }
}

fn check_status(service: Service, response: Response) -> Result<Response, NetworkError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(NetworkError::Status { service, status })
    }
}

#[cfg(test)]
mod tests;
