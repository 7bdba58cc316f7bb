//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoints, record types, placeholders)
//! - Configuration types and validation

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, ConfigValidationError, LogFormat, LogLevel, OutputFormat};
