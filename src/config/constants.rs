//! Configuration constants.
//!
//! This module defines the service endpoints, DNS record type numbers, media
//! types and display placeholders used throughout the application.

// Service endpoints (used as defaults)
/// Cloudflare DNS-over-HTTPS JSON endpoint
pub const DEFAULT_DOH_URL: &str = "https://cloudflare-dns.com/dns-query";
/// RDAP redirection service; `/domain/<apex>` is appended per query
pub const DEFAULT_RDAP_URL: &str = "https://rdap.org";
/// IP enrichment service; `/<ip>` is appended per query
pub const DEFAULT_ENRICHMENT_URL: &str = "https://ipinfo.io";

/// Per-request timeout in seconds.
/// Every call is single-shot, so this is the only bound on a stalled request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Upper bound accepted by `Config::validate`
pub const MAX_TIMEOUT_SECS: u64 = 120;

/// Default settings file (holds the enrichment token between runs)
pub const DEFAULT_SETTINGS_PATH: &str = "./.domain_insight/settings.json";
/// Settings key under which the enrichment token is stored
pub const TOKEN_SETTINGS_KEY: &str = "ipinfo_token";

/// Default User-Agent string for HTTP requests.
pub const DEFAULT_USER_AGENT: &str = concat!("domain_insight/", env!("CARGO_PKG_VERSION"));

// Media types
/// Accept header for DoH JSON queries
pub const DNS_JSON_MEDIA_TYPE: &str = "application/dns-json";
/// Accept header for RDAP queries
pub const RDAP_JSON_MEDIA_TYPE: &str = "application/rdap+json";

// Display placeholders
/// Shown for any scalar field that has no value
pub const PLACEHOLDER: &str = "—";
/// Shown for registration fields that could not be derived
pub const UNKNOWN: &str = "Unknown";
/// Domain status shown when the apex RDAP document could not be fetched or parsed
pub const STATUS_FETCH_ERROR: &str = "Error fetching status";

/// One day in milliseconds (expiry rounding unit)
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Maximum input length accepted when extracting a hostname.
/// Matches common browser and server URL limits.
pub const MAX_INPUT_LENGTH: usize = 2048;
