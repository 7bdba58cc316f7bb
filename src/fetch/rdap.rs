//! RDAP document wrapper.
//!
//! RDAP servers disagree on which members they send and how they shape them,
//! so the document is kept as raw JSON and every accessor returns an `Option`
//! or an empty iterator instead of failing on an unexpected shape.

use serde_json::Value;

/// An RDAP response of unknown shape.
#[derive(Debug, Clone, PartialEq)]
pub struct RdapDocument(Value);

impl RdapDocument {
    /// Wraps a parsed JSON document.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The underlying JSON.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Non-empty string member `key`.
    pub fn str_field(&self, key: &str) -> Option<&str> {
        non_empty_str(self.0.get(key))
    }

    /// Elements of array member `key`; empty when absent or not an array.
    pub fn array(&self, key: &str) -> impl Iterator<Item = &Value> {
        array_items(self.0.get(key))
    }

    /// The `status` strings, in document order.
    pub fn statuses(&self) -> Vec<&str> {
        self.array("status").filter_map(Value::as_str).collect()
    }

    /// The `entities` array.
    pub fn entities(&self) -> impl Iterator<Item = &Value> {
        self.array("entities")
    }

    /// The `links` array.
    pub fn links(&self) -> impl Iterator<Item = &Value> {
        self.array("links")
    }

    /// The `events` array.
    pub fn events(&self) -> impl Iterator<Item = &Value> {
        self.array("events")
    }

    /// The document-level `vcardArray`, if any.
    pub fn vcard(&self) -> Option<&Value> {
        self.0.get("vcardArray")
    }
}

/// Iterates `value` as an array; anything else yields nothing.
pub(crate) fn array_items(value: Option<&Value>) -> impl Iterator<Item = &Value> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter())
        .into_iter()
        .flatten()
}

/// `value` as a non-empty string.
pub(crate) fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}
