//! Utility modules for web, DOM, and formatting operations.
//!
//! Provides:
//! - [`fetch_text`] - Network fetching with timeout
//! - [`format`] - File size, date and path display helpers
//! - [`url`] - Query-string encoding and parsing

pub mod dom;
pub mod fetch;
pub mod format;
pub mod url;

pub use fetch::{HttpResponse, fetch_text};
