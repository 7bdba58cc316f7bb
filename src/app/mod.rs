//! Input handling for the application entry points.

mod url;

pub use url::hostname_from_input;
