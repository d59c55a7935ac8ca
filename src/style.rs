//! Build-time style configuration.
//!
//! Declares which source files contribute style classes to the generated
//! stylesheet and which colors are layered onto the default theme palette.
//!
//! This module is shared with `build.rs` (via `#[path]`), so it depends only
//! on `std`, `glob` and `thiserror`.

use std::fmt::Write as _;

use glob::{MatchOptions, Pattern};
use thiserror::Error;

// =============================================================================
// Configuration
// =============================================================================

/// Files scanned for style-class usage.
pub const CONTENT_PATTERNS: &[&str] = &["./index.html", "./src/**/*.{rs,css}"];

/// Base palette shipped with the app.
pub const DEFAULT_COLORS: &[(&str, &str)] = &[
    ("background", "#0f1117"),
    ("surface", "#181b24"),
    ("border", "#2a2f3d"),
    ("text", "#e4e6eb"),
    ("muted", "#8b90a0"),
    ("accent", "#9769FA"),
    ("danger", "#ff6b6b"),
];

/// Colors layered onto [`DEFAULT_COLORS`].
pub const EXTENDED_COLORS: &[(&str, &str)] = &[("agradient", "#9769FA"), ("bgradient", "#8C3494")];

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

// =============================================================================
// Errors
// =============================================================================

/// Errors raised while evaluating the style configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// Color is not `#RGB` or `#RRGGBB`.
    #[error("invalid color '{value}' for '{name}'")]
    InvalidColor { name: String, value: String },
    /// Content pattern failed to compile.
    #[error("invalid content pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

// =============================================================================
// Theme Palette
// =============================================================================

/// A named theme color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeColor {
    pub name: String,
    /// Normalized hex value (`#rrggbb`, lowercase).
    pub hex: String,
}

impl ThemeColor {
    /// Parse and normalize a hex color.
    pub fn parse(name: &str, value: &str) -> Result<Self, StyleError> {
        let invalid = || StyleError::InvalidColor {
            name: name.to_string(),
            value: value.to_string(),
        };

        let digits = value.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let hex = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect::<String>(),
            6 => digits.to_string(),
            _ => return Err(invalid()),
        };

        Ok(Self {
            name: name.to_string(),
            hex: format!("#{}", hex.to_ascii_lowercase()),
        })
    }
}

/// Ordered color palette.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<ThemeColor>,
}

impl Palette {
    /// Build a palette from `(name, hex)` pairs.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Result<Self, StyleError> {
        let mut palette = Self::default();
        palette.extend(pairs)?;
        Ok(palette)
    }

    /// Layer colors on top of this palette.
    ///
    /// A name that already exists is replaced in place; new names are appended.
    pub fn extend(&mut self, pairs: &[(&str, &str)]) -> Result<(), StyleError> {
        for (name, value) in pairs {
            let color = ThemeColor::parse(name, value)?;
            match self.colors.iter_mut().find(|c| c.name == color.name) {
                Some(existing) => *existing = color,
                None => self.colors.push(color),
            }
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ThemeColor> {
        self.colors.iter().find(|c| c.name == name)
    }

    pub fn colors(&self) -> &[ThemeColor] {
        &self.colors
    }

    /// Render the palette as CSS custom properties on `:root`.
    pub fn to_css_variables(&self) -> String {
        let mut css = String::from(":root {\n");
        for color in &self.colors {
            let _ = writeln!(css, "  --color-{}: {};", color.name, color.hex);
        }
        css.push_str("}\n");
        css
    }
}

// =============================================================================
// Content Patterns
// =============================================================================

/// Expand `{a,b}` groups into separate patterns.
///
/// Groups may appear more than once; nesting is not supported.
pub fn expand_braces(pattern: &str) -> Vec<String> {
    let Some(open) = pattern.find('{') else {
        return vec![pattern.to_string()];
    };
    let Some(close) = pattern[open..].find('}').map(|i| open + i) else {
        return vec![pattern.to_string()];
    };

    let prefix = &pattern[..open];
    let suffix = &pattern[close + 1..];

    pattern[open + 1..close]
        .split(',')
        .flat_map(|alt| expand_braces(&format!("{prefix}{alt}{suffix}")))
        .collect()
}

fn strip_dot_slash(path: &str) -> &str {
    path.strip_prefix("./").unwrap_or(path)
}

/// Compiled style configuration.
#[derive(Debug, Clone)]
pub struct StyleConfig {
    content: Vec<Pattern>,
    palette: Palette,
}

impl StyleConfig {
    /// Compile the configured patterns and palette.
    pub fn load() -> Result<Self, StyleError> {
        Self::new(CONTENT_PATTERNS, DEFAULT_COLORS, EXTENDED_COLORS)
    }

    pub fn new(
        patterns: &[&str],
        defaults: &[(&str, &str)],
        extended: &[(&str, &str)],
    ) -> Result<Self, StyleError> {
        let mut content = Vec::new();
        for raw in patterns {
            for expanded in expand_braces(raw) {
                let pattern = Pattern::new(strip_dot_slash(&expanded)).map_err(|e| {
                    StyleError::InvalidPattern {
                        pattern: expanded.clone(),
                        reason: e.msg.to_string(),
                    }
                })?;
                content.push(pattern);
            }
        }

        let mut palette = Palette::from_pairs(defaults)?;
        palette.extend(extended)?;

        Ok(Self { content, palette })
    }

    /// Check whether a path (relative to the crate root, `/`-separated)
    /// contributes style classes.
    pub fn is_content_file(&self, path: &str) -> bool {
        let path = strip_dot_slash(path);
        self.content
            .iter()
            .any(|p| p.matches_with(path, MATCH_OPTIONS))
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_braces() {
        assert_eq!(expand_braces("./index.html"), vec!["./index.html"]);
        assert_eq!(
            expand_braces("./src/**/*.{rs,css}"),
            vec!["./src/**/*.rs", "./src/**/*.css"]
        );
        assert_eq!(
            expand_braces("{a,b}/*.{x,y}"),
            vec!["a/*.x", "a/*.y", "b/*.x", "b/*.y"]
        );
        // Unterminated group is left alone
        assert_eq!(expand_braces("src/{a"), vec!["src/{a"]);
    }

    #[test]
    fn test_content_matching() {
        let config = StyleConfig::load().unwrap();

        assert!(config.is_content_file("./index.html"));
        assert!(config.is_content_file("index.html"));
        assert!(config.is_content_file("src/main.rs"));
        assert!(config.is_content_file("src/a/b.rs"));
        assert!(config.is_content_file("./src/components/explorer/explorer.module.css"));

        assert!(!config.is_content_file("target/x.rs"));
        assert!(!config.is_content_file("build.rs"));
        assert!(!config.is_content_file("src/notes.md"));
        assert!(!config.is_content_file("docs/index.html"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = StyleConfig::new(&["src/[*.rs"], &[], &[]).unwrap_err();
        assert!(matches!(err, StyleError::InvalidPattern { .. }));
    }

    #[test]
    fn test_theme_color_parse() {
        assert_eq!(
            ThemeColor::parse("agradient", "#9769FA").unwrap().hex,
            "#9769fa"
        );
        assert_eq!(ThemeColor::parse("short", "#abc").unwrap().hex, "#aabbcc");

        assert!(ThemeColor::parse("bad", "9769FA").is_err());
        assert!(ThemeColor::parse("bad", "#9769F").is_err());
        assert!(ThemeColor::parse("bad", "#zzzzzz").is_err());
        assert_eq!(
            ThemeColor::parse("bad", "red"),
            Err(StyleError::InvalidColor {
                name: "bad".to_string(),
                value: "red".to_string(),
            })
        );
    }

    #[test]
    fn test_palette_extension() {
        let config = StyleConfig::load().unwrap();
        let palette = config.palette();

        // Extended colors are appended after the defaults
        let names: Vec<&str> = palette.colors().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names.len(), DEFAULT_COLORS.len() + 2);
        assert_eq!(&names[names.len() - 2..], &["agradient", "bgradient"]);

        assert_eq!(palette.get("agradient").unwrap().hex, "#9769fa");
        assert_eq!(palette.get("bgradient").unwrap().hex, "#8c3494");
        assert!(palette.get("background").is_some());
    }

    #[test]
    fn test_palette_override_in_place() {
        let mut palette = Palette::from_pairs(&[("a", "#000000"), ("b", "#111111")]).unwrap();
        palette.extend(&[("a", "#ffffff"), ("c", "#222222")]).unwrap();

        let names: Vec<&str> = palette.colors().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(palette.get("a").unwrap().hex, "#ffffff");
    }

    #[test]
    fn test_css_variables() {
        let palette =
            Palette::from_pairs(&[("agradient", "#9769FA"), ("bgradient", "#8C3494")]).unwrap();
        assert_eq!(
            palette.to_css_variables(),
            ":root {\n  --color-agradient: #9769fa;\n  --color-bgradient: #8c3494;\n}\n"
        );
    }
}
