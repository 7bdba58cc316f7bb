//! A record resolution.

use log::{debug, warn};

use crate::fetch::{RecordType, Transport};

/// Resolves the IPv4 addresses of `name`, in answer order.
///
/// A failed query yields an empty list.
pub async fn resolve_addresses(transport: &Transport, name: &str) -> Vec<String> {
    match transport.dns_query(name, RecordType::A).await {
        Ok(response) => {
            let addresses: Vec<String> = response
                .answers_of_type(RecordType::A)
                .map(str::to_string)
                .collect();
            debug!("{} A records for {}", addresses.len(), name);
            addresses
        }
        Err(e) => {
            warn!("A record lookup for {name} failed: {e}");
            Vec::new()
        }
    }
}

/// Picks the address to enrich: the hostname's first address, else the apex's.
pub fn select_target_ip<'a>(host: &'a [String], apex: &'a [String]) -> Option<&'a str> {
    host.first().or_else(|| apex.first()).map(String::as_str)
}
