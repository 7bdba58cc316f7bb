//! DNS module tests.

use std::sync::Arc;

use super::*;
use crate::fetch::{Endpoints, Transport};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn transport_for(server: &MockServer) -> Transport {
    let endpoints = Endpoints {
        doh: format!("{}/dns-query", server.uri()),
        rdap: server.uri(),
        enrichment: server.uri(),
    };
    Transport::new(Arc::new(reqwest::Client::new()), endpoints)
}

fn answers(record_type: u16, data: &[&str]) -> Value {
    let answer: Vec<Value> = data
        .iter()
        .map(|d| json!({"type": record_type, "data": d}))
        .collect();
    json!({"Status": 0, "Answer": answer})
}

async fn mount_ns(server: &MockServer, name: &str, body: Value, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/dns-query"))
        .and(query_param("name", name))
        .and(query_param("type", "NS"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[test]
fn test_zone_candidates_most_specific_first() {
    assert_eq!(
        zone_candidates("a.b.example.com"),
        vec!["a.b.example.com", "b.example.com", "example.com"]
    );
    assert_eq!(zone_candidates("example.com"), vec!["example.com"]);
}

#[test]
fn test_zone_candidates_single_label() {
    assert!(zone_candidates("localhost").is_empty());
    assert!(zone_candidates("").is_empty());
}

#[tokio::test]
async fn test_find_apex_prefers_more_specific_zone() {
    let server = MockServer::start().await;
    mount_ns(&server, "a.b.example.com", answers(2, &[]), 1).await;
    mount_ns(&server, "b.example.com", answers(2, &["ns1.b.example.net."]), 1).await;
    // Never reached: the walk stops at the first zone with NS records
    mount_ns(&server, "example.com", answers(2, &["a.iana-servers.net."]), 0).await;

    let zone = find_apex(&transport_for(&server), "a.b.example.com").await;
    assert_eq!(zone.apex, "b.example.com");
    assert_eq!(zone.name_servers, vec!["ns1.b.example.net"]);
}

#[tokio::test]
async fn test_find_apex_single_label_issues_no_probe() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(answers(2, &["ns."])))
        .expect(0)
        .mount(&server)
        .await;

    let zone = find_apex(&transport_for(&server), "localhost").await;
    assert_eq!(zone.apex, "localhost");
    assert!(zone.name_servers.is_empty());
}

#[tokio::test]
async fn test_find_apex_swallows_probe_failures() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dns-query"))
        .and(query_param("name", "www.example.com"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    mount_ns(
        &server,
        "example.com",
        answers(2, &["a.iana-servers.net.", "b.iana-servers.net."]),
        1,
    )
    .await;

    let zone = find_apex(&transport_for(&server), "www.example.com").await;
    assert_eq!(zone.apex, "example.com");
    assert_eq!(
        zone.name_servers,
        vec!["a.iana-servers.net", "b.iana-servers.net"]
    );
}

#[tokio::test]
async fn test_find_apex_exhausts_in_at_most_n_minus_one_probes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dns-query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(answers(2, &[])))
        .expect(3)
        .mount(&server)
        .await;

    let zone = find_apex(&transport_for(&server), "a.b.example.com").await;
    assert_eq!(zone.apex, "a.b.example.com");
    assert!(zone.name_servers.is_empty());
}

#[tokio::test]
async fn test_find_apex_ignores_empty_and_foreign_answers() {
    let server = MockServer::start().await;
    // Only an SOA record and an empty NS datum at the first candidate
    mount_ns(
        &server,
        "www.example.org",
        json!({"Answer": [
            {"type": 6, "data": "ns.icann.org. noc.dns.icann.org. 1 7200 3600 1209600 3600"},
            {"type": 2, "data": ""}
        ]}),
        1,
    )
    .await;
    mount_ns(&server, "example.org", answers(2, &["a.iana-servers.net."]), 1).await;

    let zone = find_apex(&transport_for(&server), "www.example.org").await;
    assert_eq!(zone.apex, "example.org");
}

#[test]
fn test_reverse_pointer_name() {
    assert_eq!(
        reverse_pointer_name("93.184.216.34").as_deref(),
        Some("34.216.184.93.in-addr.arpa")
    );
    assert_eq!(reverse_pointer_name("2606:2800:220:1::1"), None);
    assert_eq!(reverse_pointer_name("1.2.3"), None);
    assert_eq!(reverse_pointer_name("not-an-ip"), None);
}

#[tokio::test]
async fn test_reverse_dns_lookup_queries_in_addr_arpa() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dns-query"))
        .and(query_param("name", "34.216.184.93.in-addr.arpa"))
        .and(query_param("type", "PTR"))
        .respond_with(ResponseTemplate::new(200).set_body_json(answers(
            12,
            &["edge.example.net.", "other.example.net."],
        )))
        .expect(1)
        .mount(&server)
        .await;

    let ptr = reverse_dns_lookup(&transport_for(&server), "93.184.216.34").await;
    assert_eq!(ptr.as_deref(), Some("edge.example.net"));
}

#[tokio::test]
async fn test_only_one_trailing_dot_is_removed() {
    let server = MockServer::start().await;
    mount_ns(&server, "example.com", answers(2, &["ns1.example.net.."]), 1).await;
    Mock::given(method("GET"))
        .and(path("/dns-query"))
        .and(query_param("type", "PTR"))
        .respond_with(ResponseTemplate::new(200).set_body_json(answers(12, &["edge.example.net.."])))
        .expect(1)
        .mount(&server)
        .await;

    let transport = transport_for(&server);
    let zone = find_apex(&transport, "example.com").await;
    assert_eq!(zone.name_servers, vec!["ns1.example.net."]);
    let ptr = reverse_dns_lookup(&transport, "93.184.216.34").await;
    assert_eq!(ptr.as_deref(), Some("edge.example.net."));
}

#[tokio::test]
async fn test_reverse_dns_lookup_failure_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let transport = transport_for(&server);
    assert_eq!(reverse_dns_lookup(&transport, "93.184.216.34").await, None);
    assert_eq!(reverse_dns_lookup(&transport, "::1").await, None);
}

#[tokio::test]
async fn test_resolve_addresses() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dns-query"))
        .and(query_param("name", "www.example.com"))
        .and(query_param("type", "A"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Answer": [
            {"type": 5, "data": "example.com."},
            {"type": 1, "data": "93.184.216.34"}
        ]})))
        .mount(&server)
        .await;

    let transport = transport_for(&server);
    assert_eq!(
        resolve_addresses(&transport, "www.example.com").await,
        vec!["93.184.216.34"]
    );
    // Unmatched requests get a 404 from the mock server
    assert!(resolve_addresses(&transport, "missing.example.com")
        .await
        .is_empty());
}

#[test]
fn test_select_target_ip() {
    let host = vec!["192.0.2.1".to_string()];
    let apex = vec!["192.0.2.2".to_string()];
    let none: Vec<String> = Vec::new();

    assert_eq!(select_target_ip(&host, &apex), Some("192.0.2.1"));
    assert_eq!(select_target_ip(&none, &apex), Some("192.0.2.2"));
    assert_eq!(select_target_ip(&none, &none), None);
}
