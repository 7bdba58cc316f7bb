// Shared test helpers for mock service setup.
//
// A single wiremock server stands in for all three services:
// - DoH at `/dns-query`
// - RDAP under `/rdap`
// - enrichment under `/ipinfo`

use std::sync::Arc;

use domain_insight::fetch::{Endpoints, Transport};
use domain_insight::Config;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Endpoints pointing at the mock server.
#[allow(dead_code)]
pub fn endpoints_for(server: &MockServer) -> Endpoints {
    Endpoints {
        doh: format!("{}/dns-query", server.uri()),
        rdap: format!("{}/rdap", server.uri()),
        enrichment: format!("{}/ipinfo", server.uri()),
    }
}

/// A transport whose every request goes to the mock server.
#[allow(dead_code)]
pub fn transport_for(server: &MockServer) -> Transport {
    Transport::new(Arc::new(reqwest::Client::new()), endpoints_for(server))
}

/// A config whose endpoints point at the mock server.
#[allow(dead_code)] // Used by other test files
pub fn config_for(server: &MockServer) -> Config {
    let endpoints = endpoints_for(server);
    Config {
        timeout_seconds: 5,
        doh_url: endpoints.doh,
        rdap_url: endpoints.rdap,
        enrichment_url: endpoints.enrichment,
        ..Default::default()
    }
}

/// Answers DoH queries for `name`/`record_type` with `data` records of type `code`.
#[allow(dead_code)]
pub async fn mount_dns(server: &MockServer, name: &str, record_type: &str, code: u16, data: &[&str]) {
    let answers: Vec<Value> = data
        .iter()
        .map(|d| json!({"name": name, "type": code, "TTL": 300, "data": d}))
        .collect();
    Mock::given(method("GET"))
        .and(path("/dns-query"))
        .and(query_param("name", name))
        .and(query_param("type", record_type))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Status": 0,
            "Answer": answers
        })))
        .mount(server)
        .await;
}

/// Serves `body` as the RDAP domain document of `apex`.
#[allow(dead_code)]
pub async fn mount_rdap(server: &MockServer, apex: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/rdap/domain/{apex}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Serves `template` for enrichment of `ip`.
#[allow(dead_code)]
pub async fn mount_enrichment(server: &MockServer, ip: &str, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/ipinfo/{ip}")))
        .respond_with(template)
        .mount(server)
        .await;
}

/// Mounts the `www.example.com` fixture: NS at `example.com`, A records for
/// both names, no PTR record.
#[allow(dead_code)] // Used by other test files
pub async fn mount_example_dns(server: &MockServer) {
    mount_dns(server, "www.example.com", "NS", 2, &[]).await;
    mount_dns(
        server,
        "example.com",
        "NS",
        2,
        &["a.iana-servers.net.", "b.iana-servers.net."],
    )
    .await;
    mount_dns(server, "www.example.com", "A", 1, &["93.184.216.34"]).await;
    mount_dns(server, "example.com", "A", 1, &["93.184.216.34"]).await;
}
