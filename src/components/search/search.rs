//! Search view component.
//!
//! The query lives in the URL (`/search?q=...`), so submitting the form is a
//! navigation and back/forward replays earlier searches.

use leptos::ev::SubmitEvent;
use leptos::logging::{error, log};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::{AppContext, ListingState};
use crate::components::explorer::FileList;
use crate::components::icons as ic;
use crate::components::router::RouteContext;
use crate::core::FetchError;
use crate::models::{AppRoute, FileObject};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/search/search.module.css");

const SEARCH_INPUT_ID: &str = "search-input";

/// Folder a search result opens in the explorer.
///
/// Containers open themselves; files open the folder holding them.
pub fn open_target(entry: &FileObject) -> AppRoute {
    if entry.is_container() {
        AppRoute::folder(entry.full_path.clone())
    } else {
        entry
            .parent_path()
            .map(AppRoute::folder)
            .unwrap_or_else(AppRoute::root)
    }
}

/// File search view component.
#[component]
pub fn Search() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let route_ctx = use_context::<RouteContext>().expect("RouteContext must be provided");

    let query = Memo::new(move |_| {
        route_ctx.0.with(|route| match route {
            AppRoute::Search { query } => query.clone(),
            AppRoute::Explorer { .. } => String::new(),
        })
    });

    // Text box contents; follows the URL on back/forward
    let draft = RwSignal::new(query.get_untracked());
    Effect::new(move |_| {
        draft.set(query.get());
        ctx.search.clear_selection();
    });

    Effect::new(move |_| {
        dom::focus_element(&format!("#{}", SEARCH_INPUT_ID));
    });

    let results = LocalResource::new(move || {
        let query = query.get();
        let client = ctx.client.get_value();

        async move {
            let result = client.search(&query).await;
            match &result {
                Ok(entries) => log!("search {:?}: {} results", query, entries.len()),
                Err(FetchError::EmptyQuery) => {}
                Err(e) => error!("search {:?} failed: {}", query, e),
            }
            result
        }
    });

    let entries = Signal::derive(move || results.get().and_then(Result::ok).unwrap_or_default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let text = draft.get_untracked();
        route_ctx.navigate(AppRoute::search(text.trim()));
    };

    let on_open = Callback::new(move |entry: FileObject| {
        route_ctx.navigate(open_target(&entry));
    });

    view! {
        <div class=css::search>
            <form class=css::form on:submit=on_submit role="search">
                <span class=css::formIcon aria-hidden="true"><Icon icon=ic::SEARCH /></span>
                <input
                    id=SEARCH_INPUT_ID
                    class=css::input
                    type="search"
                    placeholder="Search by name"
                    autocomplete="off"
                    spellcheck="false"
                    aria-label="Search query"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button class=css::submit type="submit">"Search"</button>
            </form>

            <div class=css::body>
                <Suspense fallback=move || view! { <div class=css::message>"Searching..."</div> }>
                    {move || {
                        results
                            .get()
                            .map(|result| render_results(result, entries, ctx.search, on_open))
                    }}
                </Suspense>
            </div>
        </div>
    }
}

fn render_results(
    result: Result<Vec<FileObject>, FetchError>,
    entries: Signal<Vec<FileObject>>,
    state: ListingState,
    on_open: Callback<FileObject>,
) -> AnyView {
    match result {
        Err(FetchError::EmptyQuery) => view! {
            <div class=css::message>"Type a name and press Enter to search"</div>
        }
        .into_any(),
        Err(e) => view! {
            <div class=format!("{} {}", css::message, css::error)>
                <span class=css::errorIcon><Icon icon=ic::WARNING /></span>
                <p>"Search failed"</p>
                <p class=css::errorDetail>{e.to_string()}</p>
            </div>
        }
        .into_any(),
        Ok(found) if found.is_empty() => view! {
            <div class=css::message>"No matches"</div>
        }
        .into_any(),
        Ok(found) => view! {
            <p class=css::count>
                {format!("{} {}", found.len(), if found.len() == 1 { "match" } else { "matches" })}
            </p>
            <FileList entries=entries state=state on_open=on_open show_location=true />
        }
        .into_any(),
    }
}
