//! Presentation of a lookup report.
//!
//! [`present`] maps an [`InsightReport`] onto named fields of a
//! [`ResultSink`]; sinks decide how the fields are rendered.

mod json;
mod terminal;

use crate::config::PLACEHOLDER;
use crate::lookup::InsightReport;

pub use json::JsonSink;
pub use terminal::TerminalSink;

/// Field names handed to a sink, in presentation order.
pub mod fields {
    /// Hostname that was looked up
    pub const TARGET: &str = "target";
    /// Zone apex
    pub const APEX: &str = "apex";
    /// Name servers of the apex
    pub const NAME_SERVERS: &str = "ns";
    /// A records of the hostname
    pub const HOST_ADDRESSES: &str = "a_host";
    /// A records of the apex
    pub const APEX_ADDRESSES: &str = "a_apex";
    /// Domain status
    pub const DOMAIN_STATUS: &str = "domain_status";
    /// Time until expiry
    pub const DOMAIN_EXPIRY: &str = "domain_expiry";
    /// Registrar
    pub const DOMAIN_REGISTRAR: &str = "domain_registrar";
    /// Selected address
    pub const IP: &str = "ip";
    /// Reverse DNS of the selected address
    pub const REVERSE_DNS: &str = "rdns";
    /// Organization
    pub const ORG: &str = "org";
    /// ASN label
    pub const ASN: &str = "asn";
    /// Company name
    pub const COMPANY: &str = "company";
    /// Location label
    pub const LOCATION: &str = "loc";
}

/// A value handed to a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A single line of text
    Text(String),
    /// A list; empty means "none found"
    List(Vec<String>),
}

impl FieldValue {
    fn text_or_placeholder(value: Option<&str>) -> Self {
        FieldValue::Text(value.unwrap_or(PLACEHOLDER).to_string())
    }
}

/// Receives presentation fields.
pub trait ResultSink {
    /// Sets field `name` to `value`.
    fn set_field(&mut self, name: &str, value: FieldValue);

    /// Shows a user-visible error message.
    fn show_error(&mut self, message: &str);
}

/// Hands every field of `report` to `sink`, then any reportable errors.
///
/// Absent scalar values are shown as `—`. Enrichment fields are only set when
/// an address was selected.
pub fn present(report: &InsightReport, sink: &mut dyn ResultSink) {
    use fields::*;

    sink.set_field(TARGET, FieldValue::Text(report.hostname.clone()));
    sink.set_field(APEX, FieldValue::Text(report.apex.clone()));
    sink.set_field(NAME_SERVERS, FieldValue::List(report.name_servers.clone()));

    let registration = &report.registration;
    sink.set_field(
        DOMAIN_STATUS,
        FieldValue::Text(registration.status.to_string()),
    );
    sink.set_field(
        DOMAIN_EXPIRY,
        FieldValue::Text(registration.expiry.to_string()),
    );
    sink.set_field(
        DOMAIN_REGISTRAR,
        FieldValue::Text(registration.registrar.clone()),
    );

    sink.set_field(
        HOST_ADDRESSES,
        FieldValue::List(report.host_addresses.clone()),
    );
    sink.set_field(
        APEX_ADDRESSES,
        FieldValue::List(report.apex_addresses.clone()),
    );
    sink.set_field(IP, FieldValue::text_or_placeholder(report.ip.as_deref()));

    if report.ip.is_some() {
        sink.set_field(
            REVERSE_DNS,
            FieldValue::text_or_placeholder(report.reverse_dns.as_deref()),
        );
        if let Some(enrichment) = &report.enrichment {
            sink.set_field(
                ORG,
                FieldValue::text_or_placeholder(enrichment.org.as_deref()),
            );
            sink.set_field(
                ASN,
                FieldValue::text_or_placeholder(enrichment.asn_label.as_deref()),
            );
            sink.set_field(
                COMPANY,
                FieldValue::text_or_placeholder(enrichment.company_name.as_deref()),
            );
            sink.set_field(
                LOCATION,
                FieldValue::text_or_placeholder(enrichment.location_label.as_deref()),
            );
        }
    }

    for error in &report.errors {
        sink.show_error(&error.to_string());
    }
}
