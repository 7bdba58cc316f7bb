//! Transport tests against a local mock server.

use super::*;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn transport_for(server: &MockServer) -> Transport {
    let endpoints = Endpoints {
        doh: format!("{}/dns-query", server.uri()),
        rdap: format!("{}/rdap/", server.uri()),
        enrichment: server.uri(),
    };
    Transport::new(Arc::new(reqwest::Client::new()), endpoints)
}

#[tokio::test]
async fn test_dns_query_sends_doh_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dns-query"))
        .and(query_param("name", "example.com"))
        .and(query_param("type", "NS"))
        .and(query_param("cd", "false"))
        .and(header("accept", "application/dns-json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Answer": [
                {"type": 2, "data": "a.iana-servers.net."},
                {"type": 46, "data": "NS 13 2 86400 ..."}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = transport_for(&server)
        .dns_query("example.com", RecordType::Ns)
        .await
        .expect("DoH query should succeed");
    let ns: Vec<&str> = response.answers_of_type(RecordType::Ns).collect();
    assert_eq!(ns, vec!["a.iana-servers.net."]);
}

#[tokio::test]
async fn test_non_success_status_carries_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dns-query"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = transport_for(&server)
        .dns_query("example.com", RecordType::A)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert_eq!(err.service(), Service::Doh);
}

#[tokio::test]
async fn test_undecodable_body_has_no_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rdap/domain/example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = transport_for(&server)
        .rdap_query("example.com")
        .await
        .unwrap_err();
    assert_eq!(err.status(), None);
    assert_eq!(err.service(), Service::Rdap);
}

#[tokio::test]
async fn test_unreachable_server_has_no_status() {
    let endpoints = Endpoints {
        doh: "http://127.0.0.1:9/dns-query".to_string(),
        rdap: "http://127.0.0.1:9".to_string(),
        enrichment: "http://127.0.0.1:9".to_string(),
    };
    let transport = Transport::new(Arc::new(reqwest::Client::new()), endpoints);
    let err = transport.enrich("192.0.2.1", None).await.unwrap_err();
    assert_eq!(err.status(), None);
    assert_eq!(err.service(), Service::Enrichment);
}

#[tokio::test]
async fn test_unreachable_enrichment_error_hides_token() {
    let endpoints = Endpoints {
        doh: "http://127.0.0.1:9/dns-query".to_string(),
        rdap: "http://127.0.0.1:9".to_string(),
        enrichment: "http://127.0.0.1:9".to_string(),
    };
    let transport = Transport::new(Arc::new(reqwest::Client::new()), endpoints);
    let err = transport
        .enrich("93.184.216.34", Some("SECRET123"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), None);
    assert!(!err.to_string().contains("SECRET123"), "{err}");
    assert!(!format!("{err:?}").contains("SECRET123"));
    let reported = crate::error_handling::LookupError::Enrichment(err).to_string();
    assert!(reported.starts_with("IPinfo lookup failed"), "{reported}");
    assert!(!reported.contains("SECRET123"), "{reported}");
}

#[tokio::test]
async fn test_rdap_query_uses_domain_path_and_media_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rdap/domain/example.com"))
        .and(header("accept", "application/rdap+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "objectClassName": "domain",
            "status": ["active"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let doc = transport_for(&server)
        .rdap_query("example.com")
        .await
        .expect("RDAP query should succeed");
    assert_eq!(doc.statuses(), vec!["active"]);
}

#[tokio::test]
async fn test_enrich_passes_token_only_when_given() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/93.184.216.34"))
        .and(query_param("token", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"org": "AS15133 Edgecast"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/93.184.216.35"))
        .and(query_param_is_missing("token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"city": "Norwell"})))
        .expect(1)
        .mount(&server)
        .await;

    let transport = transport_for(&server);
    let with_token = transport
        .enrich("93.184.216.34", Some("secret"))
        .await
        .unwrap();
    assert_eq!(with_token.org.as_deref(), Some("AS15133 Edgecast"));

    let anonymous = transport.enrich("93.184.216.35", None).await.unwrap();
    assert_eq!(anonymous.city.as_deref(), Some("Norwell"));
    assert!(anonymous.org.is_none());
}
