//! DNS lookups over DoH.
//!
//! This module provides:
//! - Zone apex discovery (NS probes walking the label suffix chain)
//! - A record resolution and target IP selection
//! - Reverse DNS (PTR) for IPv4 addresses
//!
//! Every lookup here is best effort: a failed query degrades to an empty
//! result and is only logged.

mod address;
mod apex;
mod reverse;

// Re-export public API
pub use address::{resolve_addresses, select_target_ip};
pub use apex::{find_apex, zone_candidates, ZoneApex};
pub use reverse::{reverse_dns_lookup, reverse_pointer_name};

#[cfg(test)]
mod tests;
