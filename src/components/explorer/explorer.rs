//! Main explorer component.
//!
//! The folder view with header, file list, and path bar.
//!
//! ## Data flow
//!
//! - The folder shown is the `path` query parameter of the current route
//! - Each folder change refetches the listing and clears the selection
//! - Failed listings render inline; the header stays usable
//! - The space list is fetched once per mount to bound the path bar

use leptos::logging::{error, warn};
use leptos::prelude::*;
use leptos_icons::Icon;

use super::pathbar::PathBar;
use super::{FileList, Header};
use crate::app::{AppContext, ListingState};
use crate::components::icons as ic;
use crate::components::router::RouteContext;
use crate::core::{FetchError, FolderListing};
use crate::models::{AppRoute, FileObject};

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// File explorer view component.
#[component]
pub fn Explorer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let route_ctx = use_context::<RouteContext>().expect("RouteContext must be provided");

    let folder_path =
        Memo::new(move |_| route_ctx.0.with(|route| route.folder_path().map(str::to_string)));

    Effect::new(move |_| {
        folder_path.track();
        ctx.explorer.clear_selection();
    });

    let listing = LocalResource::new(move || {
        let path = folder_path.get();
        let client = ctx.client.get_value();

        async move {
            let result = client.folder(path.as_deref()).await;
            match &result {
                Ok(listing) => {
                    for entry in listing.content.iter().filter(|e| !e.has_consistent_name()) {
                        warn!(
                            "entry {} has name {:?} but extension {:?}",
                            entry.full_path, entry.full_name, entry.extension
                        );
                    }
                }
                Err(e) => error!(
                    "failed to list {}: {}",
                    path.as_deref().unwrap_or("spaces"),
                    e
                ),
            }
            result
        }
    });

    // Roots of the indexed tree; the path bar stays inside them
    let space_list = LocalResource::new(move || {
        let client = ctx.client.get_value();

        async move {
            match client.folder(None).await {
                Ok(listing) => listing
                    .content
                    .into_iter()
                    .map(|space| space.full_path)
                    .collect::<Vec<_>>(),
                Err(e) => {
                    warn!("failed to list spaces for the path bar: {}", e);
                    Vec::new()
                }
            }
        }
    });
    let spaces = Signal::derive(move || space_list.get().unwrap_or_default());

    let loaded = Signal::derive(move || listing.get().and_then(Result::ok));
    let entries = Signal::derive(move || loaded.get().map(|l| l.content).unwrap_or_default());
    let parent = Signal::derive(move || loaded.get().and_then(|l| l.parent));

    let on_open = Callback::new(move |entry: FileObject| {
        if entry.is_container() {
            route_ctx.navigate(AppRoute::folder(entry.full_path));
        } else {
            ctx.explorer.select(entry.full_path, false);
        }
    });

    view! {
        <div class=css::explorer>
            <Header folder_path=folder_path parent=parent />

            <div class=css::body>
                <Suspense fallback=move || view! { <div class=css::message>"Loading..."</div> }>
                    {move || {
                        listing
                            .get()
                            .map(|result| render_listing(result, entries, ctx.explorer, on_open))
                    }}
                </Suspense>
            </div>

            <PathBar
                folder_path=folder_path
                selection=ctx.explorer.selection
                spaces=spaces
            />
        </div>
    }
}

fn render_listing(
    result: Result<FolderListing, FetchError>,
    entries: Signal<Vec<FileObject>>,
    state: ListingState,
    on_open: Callback<FileObject>,
) -> AnyView {
    match result {
        Ok(listing) if listing.content.is_empty() => view! {
            <div class=css::message>"This folder is empty"</div>
        }
        .into_any(),
        Ok(_) => view! {
            <FileList entries=entries state=state on_open=on_open />
        }
        .into_any(),
        Err(e) => view! {
            <div class=format!("{} {}", css::message, css::error)>
                <span class=css::errorIcon><Icon icon=ic::WARNING /></span>
                <p>"Failed to load folder"</p>
                <p class=css::errorDetail>{e.to_string()}</p>
            </div>
        }
        .into_any(),
    }
}
