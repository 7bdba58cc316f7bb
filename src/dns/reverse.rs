//! Reverse DNS (PTR) lookup for IPv4 addresses.

use std::net::Ipv4Addr;

use log::{debug, warn};

use crate::fetch::{RecordType, Transport};

/// The `in-addr.arpa` name for a dotted-quad IPv4 address.
///
/// Returns `None` for anything that is not an IPv4 literal.
pub fn reverse_pointer_name(ip: &str) -> Option<String> {
    let addr: Ipv4Addr = ip.parse().ok()?;
    let [a, b, c, d] = addr.octets();
    Some(format!("{d}.{c}.{b}.{a}.in-addr.arpa"))
}

/// Performs a reverse DNS lookup for `ip`.
///
/// Returns the first PTR target without its trailing dot, or `None` if the
/// address is not IPv4, has no PTR record, or the query fails.
pub async fn reverse_dns_lookup(transport: &Transport, ip: &str) -> Option<String> {
    let Some(name) = reverse_pointer_name(ip) else {
        debug!("Skipping reverse DNS for non-IPv4 address {ip}");
        return None;
    };

    match transport.dns_query(&name, RecordType::Ptr).await {
        Ok(response) => response
            .answers_of_type(RecordType::Ptr)
            .next()
            .map(|data| data.strip_suffix('.').unwrap_or(data))
            .filter(|data| !data.is_empty())
            .map(str::to_string),
        Err(e) => {
            warn!("Failed to perform reverse DNS lookup for {ip}: {e}");
            None
        }
    }
}
