//! URL query encoding utilities.
//!
//! Percent-encoding follows RFC 3986: only unreserved characters
//! (`A-Z a-z 0-9 - _ . ~`) pass through unchanged.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything except RFC 3986 unreserved characters.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode a query component (UTF-8).
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Parse a query string (leading `?` optional) into decoded pairs.
///
/// Pairs keep their order; keys without `=` get an empty value. `+` decodes
/// to a space, malformed escapes are kept verbatim and invalid UTF-8 is
/// replaced.
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}
