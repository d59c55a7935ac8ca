//! Navigation bar component.
//!
//! Displays the app name and switches between the explorer and search views.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::components::router::RouteContext;
use crate::config::APP_NAME;
use crate::models::{AppRoute, ViewName};

stylance::import_crate_style!(css, "src/components/nav/nav.module.css");

/// Top navigation bar.
///
/// Links are real anchors (so middle-click opens a new tab); plain clicks
/// are intercepted and routed client-side.
#[component]
pub fn NavBar() -> impl IntoView {
    let route_ctx = use_context::<RouteContext>().expect("RouteContext must be provided");

    let active_view = Signal::derive(move || route_ctx.0.with(|r| r.view()));

    view! {
        <header class=css::bar>
            <a
                class=css::brand
                href=AppRoute::root().to_url()
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.prevent_default();
                    route_ctx.navigate(AppRoute::root());
                }
            >
                {APP_NAME}
            </a>

            <nav class=css::links>
                <NavLink
                    label="Explorer"
                    icon=ic::EXPLORER
                    view=ViewName::FileExplorer
                    target=AppRoute::root()
                    active_view=active_view
                />
                <NavLink
                    label="Search"
                    icon=ic::SEARCH
                    view=ViewName::FileSearch
                    target=AppRoute::search("")
                    active_view=active_view
                />
            </nav>
        </header>
    }
}

#[component]
fn NavLink(
    label: &'static str,
    icon: icondata::Icon,
    view: ViewName,
    target: AppRoute,
    active_view: Signal<ViewName>,
) -> impl IntoView {
    let route_ctx = use_context::<RouteContext>().expect("RouteContext must be provided");

    let href = target.to_url();
    let class = move || {
        if active_view.get() == view {
            format!("{} {}", css::link, css::linkActive)
        } else {
            css::link.to_string()
        }
    };

    view! {
        <a
            class=class
            href=href
            aria-current=move || (active_view.get() == view).then_some("page")
            on:click=move |ev: leptos::ev::MouseEvent| {
                ev.prevent_default();
                // Re-selecting the active view keeps its current state
                if active_view.get_untracked() != view {
                    route_ctx.navigate(target.clone());
                }
            }
        >
            <span class=css::linkIcon><Icon icon=icon /></span>
            <span>{label}</span>
        </a>
    }
}
