//! Time-to-expiry derived from the `expiration` event.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

use crate::config::{MILLIS_PER_DAY, UNKNOWN};
use crate::fetch::RdapDocument;

/// Relative time until a registration expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryCategory {
    /// Expires in this many days (rounded up, always at least 1)
    DaysLeft(i64),
    /// Expiration is now or in the past
    Expired,
    /// No expiration event, or its date could not be parsed
    Unknown,
}

impl fmt::Display for ExpiryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpiryCategory::DaysLeft(1) => f.write_str("1 day left"),
            ExpiryCategory::DaysLeft(days) => write!(f, "{days} days left"),
            ExpiryCategory::Expired => f.write_str("Expired"),
            ExpiryCategory::Unknown => f.write_str(UNKNOWN),
        }
    }
}

/// Expiry category of `document` relative to `now`.
///
/// Only the first event whose action is `expiration` (any case) is used.
pub fn expiry_category(document: &RdapDocument, now: DateTime<Utc>) -> ExpiryCategory {
    let Some(event) = document.events().find(|event| {
        event
            .get("eventAction")
            .and_then(Value::as_str)
            .is_some_and(|action| action.eq_ignore_ascii_case("expiration"))
    }) else {
        return ExpiryCategory::Unknown;
    };

    let Some(expires_at) = event
        .get("eventDate")
        .and_then(Value::as_str)
        .and_then(parse_event_date)
    else {
        return ExpiryCategory::Unknown;
    };

    let diff_ms = (expires_at - now).num_milliseconds();
    if diff_ms > 0 {
        // Ceiling division; diff_ms is positive
        ExpiryCategory::DaysLeft((diff_ms + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY)
    } else {
        ExpiryCategory::Expired
    }
}

/// Parses an RDAP event date.
///
/// RFC 3339 is what RDAP mandates, but some registries omit the offset or the
/// time entirely; those are read as UTC.
pub fn parse_event_date(date_str: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return Some(dt.with_timezone(&Utc));
    }

    let formats = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d",
        "%d-%b-%Y",
    ];

    for format in &formats {
        if let Ok(naive_dt) = NaiveDateTime::parse_from_str(date_str, format) {
            return Some(naive_dt.and_utc());
        }
        if let Ok(naive_date) = NaiveDate::parse_from_str(date_str, format) {
            return Some(naive_date.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }

    None
}
