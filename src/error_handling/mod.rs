//! Error handling.
//!
//! Failures are categorized into:
//! - **Initialization errors**: logger or HTTP client setup failed
//! - **Network errors**: a single request failed; callers decide whether that
//!   degrades one field silently or becomes reportable
//! - **Lookup errors**: the reportable failures surfaced to the user
//! - **Settings errors**: the persisted settings file could not be read or written

mod types;

// Re-export public API
pub use types::{InitializationError, LookupError, NetworkError, Service, SettingsError};
