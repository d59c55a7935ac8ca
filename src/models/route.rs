//! Path-based routing over the History API.
//!
//! The route table is declarative: exact static paths are checked first and a
//! single catch-all redirects everything else to the explorer, so every path
//! resolves to a view.
//!
//! URL format:
//! - `/` or `/?path=/home/user/docs` → file explorer (space list or a folder)
//! - `/search?q=report` → file search
//! - anything else → redirected to `/`

use std::fmt;

use crate::config::{EXPLORER_PATH_PARAM, SEARCH_QUERY_PARAM};
use crate::utils::dom;
use crate::utils::url::{encode_component, parse_query};

// ============================================================================
// Route Table
// ============================================================================

/// Named views the router can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewName {
    FileExplorer,
    FileSearch,
}

impl ViewName {
    /// Canonical path of the view.
    pub fn path(self) -> &'static str {
        match self {
            Self::FileExplorer => "/",
            Self::FileSearch => "/search",
        }
    }
}

/// Path pattern of a route entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoutePattern {
    /// Static path, matched case-insensitively with an optional trailing slash
    Exact(&'static str),
    /// Matches any path
    CatchAll,
}

impl RoutePattern {
    fn matches(self, path: &str) -> bool {
        match self {
            Self::Exact(expected) => path.eq_ignore_ascii_case(expected),
            Self::CatchAll => true,
        }
    }
}

/// What a matched entry does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteTarget {
    Render(ViewName),
    Redirect(ViewName),
}

/// One row of the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub pattern: RoutePattern,
    pub target: RouteTarget,
}

/// Application route table. Exact paths before the catch-all.
pub const ROUTES: &[RouteEntry] = &[
    RouteEntry {
        pattern: RoutePattern::Exact("/"),
        target: RouteTarget::Render(ViewName::FileExplorer),
    },
    RouteEntry {
        pattern: RoutePattern::Exact("/search"),
        target: RouteTarget::Render(ViewName::FileSearch),
    },
    RouteEntry {
        pattern: RoutePattern::CatchAll,
        target: RouteTarget::Redirect(ViewName::FileExplorer),
    },
];

/// Strip query/fragment and a single trailing slash.
fn normalize_path(url: &str) -> &str {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    let path = &url[..end];
    if path.is_empty() {
        return "/";
    }
    match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => path,
    }
}

/// Split a URL into its query string (without `?` and fragment).
fn query_part(url: &str) -> &str {
    let without_fragment = url.split('#').next().unwrap_or_default();
    without_fragment
        .split_once('?')
        .map(|(_, q)| q)
        .unwrap_or_default()
}

/// Resolve a URL (path plus optional query/fragment) against [`ROUTES`].
///
/// Total: the catch-all guarantees a match.
pub fn resolve(url: &str) -> RouteTarget {
    let path = normalize_path(url);
    ROUTES
        .iter()
        .find(|entry| entry.pattern.matches(path))
        .map(|entry| entry.target)
        .unwrap_or(RouteTarget::Redirect(ViewName::FileExplorer))
}

// ============================================================================
// Application Route
// ============================================================================

/// Folder shown by the explorer. Never empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FolderPath(String);

impl FolderPath {
    /// `None` for an empty path, which names the space list rather than a
    /// folder.
    pub fn new(path: impl Into<String>) -> Option<Self> {
        let path = path.into();
        (!path.is_empty()).then_some(Self(path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FolderPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolved application location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// Explorer view; `None` lists all spaces
    Explorer { path: Option<FolderPath> },
    /// Search view with the current query text
    Search { query: String },
}

impl Default for AppRoute {
    fn default() -> Self {
        Self::root()
    }
}

impl AppRoute {
    /// Explorer showing the list of spaces.
    pub fn root() -> Self {
        Self::Explorer { path: None }
    }

    /// Explorer showing a folder. An empty path means the space list.
    pub fn folder(path: impl Into<String>) -> Self {
        Self::Explorer {
            path: FolderPath::new(path),
        }
    }

    /// Folder shown by an explorer route.
    pub fn folder_path(&self) -> Option<&str> {
        match self {
            Self::Explorer { path } => path.as_ref().map(FolderPath::as_str),
            Self::Search { .. } => None,
        }
    }

    pub fn search(query: impl Into<String>) -> Self {
        Self::Search {
            query: query.into(),
        }
    }

    pub fn view(&self) -> ViewName {
        match self {
            Self::Explorer { .. } => ViewName::FileExplorer,
            Self::Search { .. } => ViewName::FileSearch,
        }
    }

    /// Parse a URL into a route.
    ///
    /// Returns the route and whether the catch-all redirected.
    pub fn from_url(url: &str) -> (Self, bool) {
        let query = parse_query(query_part(url));
        let param = |key: &str| {
            query
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
                .unwrap_or_default()
        };

        match resolve(url) {
            RouteTarget::Render(ViewName::FileExplorer) => {
                (Self::folder(param(EXPLORER_PATH_PARAM)), false)
            }
            RouteTarget::Render(ViewName::FileSearch) => {
                (Self::search(param(SEARCH_QUERY_PARAM)), false)
            }
            RouteTarget::Redirect(ViewName::FileExplorer) => (Self::root(), true),
            RouteTarget::Redirect(ViewName::FileSearch) => (Self::search(""), true),
        }
    }

    /// Build the URL (path and query) for this route.
    pub fn to_url(&self) -> String {
        match self {
            Self::Explorer { path: None } => ViewName::FileExplorer.path().to_string(),
            Self::Explorer { path: Some(path) } => format!(
                "{}?{}={}",
                ViewName::FileExplorer.path(),
                EXPLORER_PATH_PARAM,
                encode_component(path.as_str())
            ),
            Self::Search { query } if query.is_empty() => ViewName::FileSearch.path().to_string(),
            Self::Search { query } => format!(
                "{}?{}={}",
                ViewName::FileSearch.path(),
                SEARCH_QUERY_PARAM,
                encode_component(query)
            ),
        }
    }

    /// Current route from the browser location.
    ///
    /// Returns the route and whether the catch-all redirected.
    pub fn current() -> (Self, bool) {
        Self::from_url(&dom::location_url())
    }

    /// Add this route to browser history.
    pub fn push(&self) {
        dom::push_url(&self.to_url());
    }

    /// Replace the current history entry (used for redirects).
    pub fn replace(&self) {
        dom::replace_url(&self.to_url());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_table_has_single_catch_all_redirect() {
        let catch_alls: Vec<&RouteEntry> = ROUTES
            .iter()
            .filter(|e| e.pattern == RoutePattern::CatchAll)
            .collect();
        assert_eq!(catch_alls.len(), 1);
        assert_eq!(
            catch_alls[0].target,
            RouteTarget::Redirect(ViewName::FileExplorer)
        );
        // Catch-all must come last or it would shadow exact paths
        assert_eq!(ROUTES.last().map(|e| e.pattern), Some(RoutePattern::CatchAll));
    }

    #[test]
    fn test_resolve_exact_paths() {
        assert_eq!(resolve("/"), RouteTarget::Render(ViewName::FileExplorer));
        assert_eq!(resolve(""), RouteTarget::Render(ViewName::FileExplorer));
        assert_eq!(resolve("/search"), RouteTarget::Render(ViewName::FileSearch));
        assert_eq!(resolve("/search/"), RouteTarget::Render(ViewName::FileSearch));
        assert_eq!(resolve("/Search"), RouteTarget::Render(ViewName::FileSearch));
    }

    #[test]
    fn test_query_does_not_affect_matching() {
        assert_eq!(
            resolve("/search?q=report"),
            RouteTarget::Render(ViewName::FileSearch)
        );
        assert_eq!(
            resolve("/?path=/search"),
            RouteTarget::Render(ViewName::FileExplorer)
        );
        assert_eq!(
            resolve("/search#results"),
            RouteTarget::Render(ViewName::FileSearch)
        );
    }

    #[test]
    fn test_unmatched_paths_redirect_to_explorer() {
        for path in [
            "/foo/bar",
            "/foo",
            "/searches",
            "/search/deep",
            "/index.html",
            "/%20",
            "relative",
        ] {
            assert_eq!(
                resolve(path),
                RouteTarget::Redirect(ViewName::FileExplorer),
                "path {path}"
            );
            let (route, redirected) = AppRoute::from_url(path);
            assert_eq!(route, AppRoute::root(), "path {path}");
            assert!(redirected, "path {path}");
        }
    }

    #[test]
    fn test_from_url() {
        assert_eq!(AppRoute::from_url("/"), (AppRoute::root(), false));
        assert_eq!(
            AppRoute::from_url("/search?q=report"),
            (AppRoute::search("report"), false)
        );
        assert_eq!(
            AppRoute::from_url("/search"),
            (AppRoute::search(""), false)
        );
        assert_eq!(
            AppRoute::from_url("/?path=%2Fhome%2Fuser"),
            (AppRoute::folder("/home/user"), false)
        );
        assert_eq!(AppRoute::from_url("/?path="), (AppRoute::root(), false));
        // Unrelated parameters are ignored
        assert_eq!(
            AppRoute::from_url("/search?page=2&q=a+b"),
            (AppRoute::search("a b"), false)
        );
    }

    #[test]
    fn test_to_url() {
        assert_eq!(AppRoute::root().to_url(), "/");
        assert_eq!(AppRoute::search("").to_url(), "/search");
        assert_eq!(AppRoute::search("report").to_url(), "/search?q=report");
        assert_eq!(
            AppRoute::folder("/home/user docs").to_url(),
            "/?path=%2Fhome%2Fuser%20docs"
        );
    }

    #[test]
    fn test_url_round_trip() {
        let routes = [
            AppRoute::root(),
            AppRoute::folder("/a/b.c"),
            AppRoute::folder(r"C:\Users\me & you"),
            AppRoute::search("annual report 2023"),
            AppRoute::search("100%?#&="),
            AppRoute::search("naïve"),
        ];
        for route in routes {
            assert_eq!(AppRoute::from_url(&route.to_url()), (route.clone(), false));
        }
    }

    #[test]
    fn test_every_explorer_route_round_trips() {
        // An empty folder path cannot be constructed, so the space list has
        // exactly one representation.
        assert_eq!(FolderPath::new(""), None);
        let routes = [
            AppRoute::Explorer { path: None },
            AppRoute::Explorer {
                path: FolderPath::new("/"),
            },
            AppRoute::Explorer {
                path: FolderPath::new(" "),
            },
        ];
        for route in routes {
            assert_eq!(AppRoute::from_url(&route.to_url()), (route.clone(), false));
        }
    }

    #[test]
    fn test_folder_path() {
        assert_eq!(AppRoute::folder("/a").folder_path(), Some("/a"));
        assert_eq!(AppRoute::root().folder_path(), None);
        assert_eq!(AppRoute::search("x").folder_path(), None);
    }

    #[test]
    fn test_folder_normalizes_empty_path() {
        assert_eq!(AppRoute::folder(""), AppRoute::root());
        assert_eq!(AppRoute::folder("").view(), ViewName::FileExplorer);
        assert_eq!(AppRoute::search("x").view(), ViewName::FileSearch);
    }
}
