//! HTTP GET for index requests, bounded by a timeout.

use js_sys::{Array, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;
use crate::utils::dom;

// =============================================================================
// Timeout Race
// =============================================================================

/// Outcome of racing an index request against [`FETCH_TIMEOUT_MS`].
#[derive(Debug)]
pub enum RaceResult {
    /// The request settled first; holds the `Response` (any status).
    Completed(JsValue),
    /// The timer fired first. The request keeps running but is ignored.
    TimedOut,
    /// The request rejected (network failure, CORS).
    Error(String),
}

/// Race `promise` against a timer of `timeout_ms`.
///
/// The timer resolves to `undefined`, which no `fetch` ever settles with, so
/// an undefined winner means the backend did not answer in time. HTTP error
/// statuses resolve normally and come back as `Completed`, leaving
/// [`fetch_text`] free to decode the backend's error body.
pub async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = dom::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    let timer = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let contenders = Array::of2(&promise, &timer);
    match JsFuture::from(Promise::race(&contenders)).await {
        Ok(winner) if winner.is_undefined() => RaceResult::TimedOut,
        Ok(winner) => RaceResult::Completed(winner),
        Err(e) => RaceResult::Error(e.as_string().unwrap_or_else(|| "Unknown error".to_string())),
    }
}

// =============================================================================
// Fetch Functions
// =============================================================================

/// HTTP status and body text of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// GET a URL with the Fetch API, racing [`FETCH_TIMEOUT_MS`].
///
/// Non-2xx responses are returned as-is so callers can decode error bodies.
pub async fn fetch_text(url: &str) -> Result<HttpResponse, FetchError> {
    let window = dom::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let fetch_promise = window.fetch_with_request(&request);

    match race_with_timeout(fetch_promise, FETCH_TIMEOUT_MS).await {
        RaceResult::TimedOut => Err(FetchError::Timeout),
        RaceResult::Error(msg) => Err(FetchError::NetworkError(msg)),
        RaceResult::Completed(result) => {
            let resp: Response = result.dyn_into().map_err(|_| FetchError::InvalidContent)?;
            let status = resp.status();

            let text = JsFuture::from(resp.text().map_err(|_| FetchError::ResponseReadFailed)?)
                .await
                .map_err(|_| FetchError::ResponseReadFailed)?;

            let body = text.as_string().ok_or(FetchError::InvalidContent)?;
            Ok(HttpResponse { status, body })
        }
    }
}
