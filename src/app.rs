//! Root application module.
//!
//! Contains the main App component, AppContext definition, ListingState,
//! and application-level setup logic following Leptos conventions.

use leptos::logging::log;
use leptos::prelude::*;

use crate::components::{AppRouter, NavBar};
use crate::config::{APP_NAME, APP_VERSION, THEME_CSS};
use crate::core::IndexClient;
use crate::models::{Selection, SortKey, SortOrder};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// ListingState
// ============================================================================

/// Sort order and selection of a file listing.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct ListingState {
    /// Active sort order.
    pub sort: RwSignal<SortOrder>,
    /// Currently selected entry.
    pub selection: RwSignal<Option<Selection>>,
}

impl ListingState {
    pub fn new() -> Self {
        Self {
            sort: RwSignal::new(SortOrder::default()),
            selection: RwSignal::new(None),
        }
    }

    /// Apply a column-header click.
    pub fn toggle_sort(&self, key: SortKey) {
        self.sort.update(|order| *order = order.toggled(key));
    }

    pub fn select(&self, path: String, is_container: bool) {
        self.selection.set(Some(Selection { path, is_container }));
    }

    pub fn clear_selection(&self) {
        self.selection.set(None);
    }

    pub fn is_selected(&self, path: &str) -> bool {
        self.selection
            .with(|s| s.as_ref().is_some_and(|s| s.path == path))
    }
}

impl Default for ListingState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// component using `use_context::<AppContext>()`.
///
/// # Architecture
///
/// - **Explorer listing**: sort order and selection of the folder view
/// - **Search listing**: sort order and selection of the result view
/// - **Client**: backend client shared by both views
#[derive(Clone, Copy)]
pub struct AppContext {
    pub explorer: ListingState,
    pub search: ListingState,
    pub client: StoredValue<IndexClient>,
}

impl AppContext {
    /// Creates a context talking to the configured backend.
    pub fn new() -> Self {
        Self::with_client(IndexClient::default())
    }

    pub fn with_client(client: IndexClient) -> Self {
        Self {
            explorer: ListingState::new(),
            search: ListingState::new(),
            client: StoredValue::new(client),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Injects the build-time theme palette
/// - Wraps the app in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    log!(
        "{} {} using backend {}",
        APP_NAME,
        APP_VERSION,
        ctx.client.with_value(|c| c.base_url().to_string())
    );

    view! {
        <style>{THEME_CSS}</style>
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::crash>
                    <h1 class=css::crashTitle>"Something went wrong"</h1>
                    <p class=css::crashHint>
                        "An unexpected error occurred. Please try reloading the page."
                    </p>
                    <ul class=css::crashErrors>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button class=css::reload on:click=move |_| dom::reload()>
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <AppRouter>
                <NavBar />
            </AppRouter>
        </ErrorBoundary>
    }
}
