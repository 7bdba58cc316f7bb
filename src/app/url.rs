//! Hostname extraction from user input.

use log::warn;

use crate::config::MAX_INPUT_LENGTH;
use crate::error_handling::LookupError;

/// Extracts the hostname from a URL or a bare host.
///
/// Adds an `https://` prefix if no scheme is present, then requires an http(s)
/// URL with a non-empty host. The host is returned as the URL parser
/// normalizes it (lowercase, IDNA-encoded).
///
/// # Errors
///
/// Returns `LookupError::HostnameUnavailable` for over-long input, unsupported
/// schemes, unparsable URLs and URLs without a host.
pub fn hostname_from_input(input: &str) -> Result<String, LookupError> {
    let unavailable = || LookupError::HostnameUnavailable(input.to_string());
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(unavailable());
    }

    // Check length before normalization to bound parsing work
    if trimmed.len() > MAX_INPUT_LENGTH {
        warn!(
            "Rejecting input exceeding maximum length ({} > {})",
            trimmed.len(),
            MAX_INPUT_LENGTH
        );
        return Err(unavailable());
    }

    let normalized = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    match url::Url::parse(&normalized) {
        Ok(parsed) => match parsed.scheme() {
            "http" | "https" => parsed
                .host_str()
                .filter(|host| !host.is_empty())
                .map(str::to_string)
                .ok_or_else(unavailable),
            other => {
                warn!("Unsupported scheme '{other}' in input: {input}");
                Err(unavailable())
            }
        },
        Err(e) => {
            warn!("Invalid URL '{input}': {e}");
            Err(unavailable())
        }
    }
}
