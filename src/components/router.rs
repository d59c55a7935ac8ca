//! Application router component.
//!
//! Handles path-based routing over the History API.
//! Uses native popstate events instead of leptos_router.
//!
//! # Architecture
//!
//! - **URL is the source of truth**: the route signal is derived from
//!   `location.pathname` + `location.search`
//! - **Catch-all redirects in place**: unmatched paths are rewritten to `/`
//!   with `replaceState`, so they never enter history
//! - **popstate events**: browser back/forward buttons work automatically
//! - **Views persist across query changes**: the rendered view only changes
//!   when the route's [`ViewName`] does

use leptos::logging::log;
use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::explorer::Explorer;
use crate::components::search::Search;
use crate::config::APP_NAME;
use crate::models::{AppRoute, ViewName};
use crate::utils::dom;

// ============================================================================
// Route Context
// ============================================================================

/// Context for reading and changing the current route from any component.
#[derive(Clone, Copy)]
pub struct RouteContext(pub RwSignal<AppRoute>);

impl RouteContext {
    /// Push a new history entry and update the route signal.
    pub fn navigate(&self, route: AppRoute) {
        if self.0.with_untracked(|current| *current == route) {
            return;
        }
        route.push();
        self.0.set(route);
    }
}

/// Read the browser location, rewriting it if the catch-all redirected.
fn current_route() -> AppRoute {
    let (route, redirected) = AppRoute::current();
    if redirected {
        log!("no route matches the current path, redirecting to {}", route.to_url());
        route.replace();
    }
    route
}

fn view_title(view: ViewName) -> String {
    match view {
        ViewName::FileExplorer => APP_NAME.to_string(),
        ViewName::FileSearch => format!("Search · {}", APP_NAME),
    }
}

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// Route table:
/// - `/` → FileExplorer (space list, or folder via `?path=`)
/// - `/search` → FileSearch (query via `?q=`)
/// - anything else → redirect to `/`
///
/// `children` are rendered above the routed view with the route context
/// available.
#[component]
pub fn AppRouter(children: Children) -> impl IntoView {
    let route = RwSignal::new(current_route());
    provide_context(RouteContext(route));

    // Set up popstate event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(current_route());
        }) as Box<dyn Fn()>);

        if let Some(window) = dom::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let active_view = Memo::new(move |_| route.with(|r| r.view()));

    Effect::new(move |_| {
        log!("route changed: {}", route.with(|r| r.to_url()));
    });

    Effect::new(move |_| {
        dom::set_title(&view_title(active_view.get()));
    });

    view! {
        {children()}
        <main>
            {move || match active_view.get() {
                ViewName::FileExplorer => view! { <Explorer /> }.into_any(),
                ViewName::FileSearch => view! { <Search /> }.into_any(),
            }}
        </main>
    }
}
