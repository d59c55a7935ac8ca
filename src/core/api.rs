//! Client for the indexing backend.
//!
//! The backend exposes two JSON endpoints:
//!
//! | Request | Success body |
//! |---------|--------------|
//! | `GET /folder[?path=p]` | `{"content": [..], "parent": {..} \| null}` |
//! | `GET /search?query=q` | `{"result": [..]}` |
//!
//! Failures carry `{"error": "..."}` with a 4xx status.

use serde::{Deserialize, Serialize};

use crate::core::error::FetchError;
use crate::models::FileObject;
use crate::utils::fetch::{HttpResponse, fetch_text};
use crate::utils::url::encode_component;

// =============================================================================
// Wire Types
// =============================================================================

/// Contents of a folder, or the space list when no path is given.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FolderListing {
    pub content: Vec<FileObject>,
    /// Folder containing the listed one; absent for spaces and the space list
    #[serde(default)]
    pub parent: Option<FileObject>,
}

/// Search response body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub result: Vec<FileObject>,
}

/// Error response body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

// =============================================================================
// URL Builders
// =============================================================================

fn trim_base(base_url: &str) -> &str {
    base_url.trim_end_matches('/')
}

/// URL of a folder listing. `None` or an empty path lists spaces.
pub fn folder_url(base_url: &str, path: Option<&str>) -> String {
    match path.filter(|p| !p.is_empty()) {
        Some(path) => format!("{}/folder?path={}", trim_base(base_url), encode_component(path)),
        None => format!("{}/folder", trim_base(base_url)),
    }
}

/// URL of a search request.
pub fn search_url(base_url: &str, query: &str) -> String {
    format!("{}/search?query={}", trim_base(base_url), encode_component(query))
}

// =============================================================================
// Response Decoding
// =============================================================================

/// Decode a completed response into `T`, or the matching [`FetchError`].
pub fn decode_response<T>(response: &HttpResponse) -> Result<T, FetchError>
where
    T: for<'de> Deserialize<'de>,
{
    if !response.is_success() {
        return Err(match serde_json::from_str::<ApiError>(&response.body) {
            Ok(api) => FetchError::Api {
                status: response.status,
                message: api.error,
            },
            Err(_) => FetchError::HttpError(response.status),
        });
    }

    serde_json::from_str(&response.body).map_err(|e| FetchError::JsonParseError(e.to_string()))
}

// =============================================================================
// Client
// =============================================================================

/// Typed client for the indexing backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexClient {
    base_url: String,
}

impl Default for IndexClient {
    fn default() -> Self {
        Self::new(crate::config::API_BASE_URL)
    }
}

impl IndexClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List a folder, or all spaces when `path` is `None`.
    pub async fn folder(&self, path: Option<&str>) -> Result<FolderListing, FetchError> {
        let response = fetch_text(&folder_url(&self.base_url, path)).await?;
        decode_response(&response)
    }

    /// Find entries whose full name contains `query`.
    ///
    /// Blank queries are rejected without a request.
    pub async fn search(&self, query: &str) -> Result<Vec<FileObject>, FetchError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(FetchError::EmptyQuery);
        }
        let response = fetch_text(&search_url(&self.base_url, query)).await?;
        decode_response::<SearchResults>(&response).map(|r| r.result)
    }
}
