//! DNS-over-HTTPS JSON response shape.

use std::fmt;

use serde::Deserialize;

/// Resource record types queried over DoH.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordType {
    /// IPv4 address
    A,
    /// Authoritative name server
    Ns,
    /// Reverse pointer
    Ptr,
}

impl RecordType {
    /// Query parameter value sent to the DoH endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::Ns => "NS",
            RecordType::Ptr => "PTR",
        }
    }

    /// Numeric resource record type used in answers.
    pub fn code(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::Ns => 2,
            RecordType::Ptr => 12,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the `Answer` array.
#[derive(Debug, Clone, Deserialize)]
pub struct DnsAnswer {
    /// Numeric record type
    #[serde(rename = "type")]
    pub record_type: u16,
    /// Record data as presented by the resolver
    #[serde(default)]
    pub data: String,
}

/// A DoH JSON response. Only the answer section is consumed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DnsResponse {
    /// Answer section (absent when the name has no records)
    #[serde(rename = "Answer", default)]
    pub answer: Vec<DnsAnswer>,
}

impl DnsResponse {
    /// Data of the answers matching `record_type`, in response order.
    ///
    /// Answers of other types (e.g. the CNAME chain preceding an A record) are skipped.
    pub fn answers_of_type(&self, record_type: RecordType) -> impl Iterator<Item = &str> {
        let code = record_type.code();
        self.answer
            .iter()
            .filter(move |a| a.record_type == code)
            .map(|a| a.data.as_str())
    }
}
