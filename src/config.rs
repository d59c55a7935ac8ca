//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! The theme stylesheet is generated by `build.rs` from [`crate::style`].

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the header.
pub const APP_NAME: &str = "Indexxo";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Network Configuration
// =============================================================================

/// Base URL of the indexing backend.
///
/// Override at compile time with `INDEXXO_API_URL`.
pub const API_BASE_URL: &str = match option_env!("INDEXXO_API_URL") {
    Some(url) => url,
    None => "http://localhost:5000",
};

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// Routing
// =============================================================================

/// Query parameter holding the folder shown by the explorer.
pub const EXPLORER_PATH_PARAM: &str = "path";

/// Query parameter holding the search text.
pub const SEARCH_QUERY_PARAM: &str = "q";

// =============================================================================
// Theme
// =============================================================================

/// Palette CSS variables generated at build time.
pub const THEME_CSS: &str = include_str!(concat!(env!("OUT_DIR"), "/theme.css"));

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_css_contains_extended_colors() {
        assert!(THEME_CSS.starts_with(":root {"));
        assert!(THEME_CSS.contains("--color-agradient: #9769fa;"));
        assert!(THEME_CSS.contains("--color-bgradient: #8c3494;"));
    }
}
