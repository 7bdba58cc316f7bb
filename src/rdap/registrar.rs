//! Registrar name extraction.
//!
//! Sources are tried in a fixed order and the first one that yields a name
//! wins; later sources are never consulted:
//! 1. the `registrarName` member
//! 2. the vCard of the first entity with the `registrar` role that has a name
//! 3. the document behind the first RDAP-looking `related`/`registrar` link
//! 4. the first IANA public identifier, as `IANA Registrar ID <id>`

use log::debug;
use serde_json::Value;

use super::vcard::vcard_formatted_name;
use crate::config::UNKNOWN;
use crate::fetch::{RdapDocument, Transport};

/// A registrar source that needs no further requests.
type Extractor = fn(&RdapDocument) -> Option<String>;

/// Sources consulted on the domain document before any link is followed.
const LOCAL_SOURCES: &[Extractor] = &[direct_registrar_name, registrar_entity_name];

/// Sources consulted on a followed registrar document.
const LINKED_SOURCES: &[Extractor] = &[
    direct_registrar_name,
    registrar_entity_name,
    document_vcard_name,
];

/// Derives the registrar name of `document`, or `Unknown`.
///
/// May issue one extra RDAP request when the document itself names no
/// registrar. A failure of that request only skips to the next source.
pub async fn extract_registrar(transport: &Transport, document: &RdapDocument) -> String {
    if let Some(name) = first_match(document, LOCAL_SOURCES) {
        return name;
    }
    if let Some(name) = registrar_via_link(transport, document).await {
        return name;
    }
    iana_registrar_id(document).unwrap_or_else(|| UNKNOWN.to_string())
}

fn first_match(document: &RdapDocument, sources: &[Extractor]) -> Option<String> {
    sources.iter().find_map(|extract| extract(document))
}

/// The `registrarName` member, if non-empty.
pub fn direct_registrar_name(document: &RdapDocument) -> Option<String> {
    document.str_field("registrarName").map(str::to_string)
}

/// Formatted name of the first registrar-role entity carrying a usable vCard.
pub fn registrar_entity_name(document: &RdapDocument) -> Option<String> {
    document
        .entities()
        .filter(|entity| has_registrar_role(entity))
        .find_map(|entity| vcard_formatted_name(entity.get("vcardArray")))
}

fn document_vcard_name(document: &RdapDocument) -> Option<String> {
    vcard_formatted_name(document.vcard())
}

fn has_registrar_role(entity: &Value) -> bool {
    entity
        .get("roles")
        .and_then(Value::as_array)
        .is_some_and(|roles| {
            roles
                .iter()
                .filter_map(Value::as_str)
                .any(|role| role.eq_ignore_ascii_case("registrar"))
        })
}

/// The first `related` or `registrar` link whose URL mentions `rdap`.
///
/// Matching on the URL text is a loose heuristic; it can pick up unrelated
/// RDAP links, which then simply fail to yield a name.
pub fn registrar_link(document: &RdapDocument) -> Option<&str> {
    document
        .links()
        .find(|link| {
            let rel_matches = matches!(
                link.get("rel").and_then(Value::as_str),
                Some("related") | Some("registrar")
            );
            let href_matches = link
                .get("href")
                .and_then(Value::as_str)
                .is_some_and(|href| href.to_ascii_lowercase().contains("rdap"));
            rel_matches && href_matches
        })
        .and_then(|link| link.get("href"))
        .and_then(Value::as_str)
}

async fn registrar_via_link(transport: &Transport, document: &RdapDocument) -> Option<String> {
    let href = registrar_link(document)?;
    match transport.rdap_follow(href).await {
        Ok(linked) => first_match(&linked, LINKED_SOURCES),
        Err(e) => {
            debug!("Registrar link {href} could not be followed: {e}");
            None
        }
    }
}

/// `IANA Registrar ID <id>` from the first entity with an IANA public identifier.
pub fn iana_registrar_id(document: &RdapDocument) -> Option<String> {
    document
        .entities()
        .find_map(|entity| {
            entity
                .get("publicIds")
                .and_then(Value::as_array)?
                .iter()
                .find(|id| {
                    id.get("type")
                        .and_then(Value::as_str)
                        .is_some_and(|kind| kind.to_ascii_lowercase().contains("iana"))
                })
                .and_then(|id| identifier_text(id.get("identifier")))
        })
        .map(|identifier| format!("IANA Registrar ID {identifier}"))
}

fn identifier_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
