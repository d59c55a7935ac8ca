//! Path bar component (macOS Finder style).
//!
//! Displays the path of the selected entry (or the current folder) at the
//! bottom of the explorer with clickable segments.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::components::router::RouteContext;
use crate::models::{AppRoute, Selection};
use crate::utils::format::path_prefixes;

stylance::import_crate_style!(css, "src/components/explorer/pathbar.module.css");

/// Segment data for path bar rendering.
#[derive(Clone, Debug, PartialEq)]
struct PathSegment {
    /// Display label
    label: String,
    icon: icondata::Icon,
    /// Target route for navigation (None = current/disabled)
    target: Option<AppRoute>,
}

/// Whether `path` is `root` or lies below it.
fn is_within(path: &str, root: &str) -> bool {
    path.strip_prefix(root).is_some_and(|rest| {
        rest.is_empty() || root.ends_with(['/', '\\']) || rest.starts_with(['/', '\\'])
    })
}

/// Deepest space containing `path`.
fn space_root<'a>(path: &str, spaces: &'a [String]) -> Option<&'a str> {
    spaces
        .iter()
        .map(String::as_str)
        .filter(|root| is_within(path, root))
        .max_by_key(|root| root.len())
}

/// Segments from the space list down to the selection, or to `folder_path`
/// when nothing is selected.
///
/// Folder segments inside the enclosing space open that folder. Segments
/// above the space are not indexed and stay inert, as do the folder being
/// shown and a selected file.
fn build_segments(
    folder_path: Option<&str>,
    selection: Option<&Selection>,
    spaces: &[String],
) -> Vec<PathSegment> {
    let shown = selection.map(|s| s.path.as_str()).or(folder_path);
    let root = shown.and_then(|p| space_root(p, spaces));
    let prefixes = shown.map(path_prefixes).unwrap_or_default();
    let last = prefixes.len();
    let ends_in_file = selection.is_some_and(|s| !s.is_container);

    let mut segments = vec![PathSegment {
        label: "Spaces".to_string(),
        icon: ic::SPACE,
        target: folder_path.is_some().then(AppRoute::root),
    }];

    segments.extend(prefixes.into_iter().enumerate().map(|(idx, (label, path))| {
        let is_file = ends_in_file && idx + 1 == last;
        let is_current = folder_path == Some(path.as_str());
        let is_indexed = root.is_some_and(|r| is_within(&path, r));
        let icon = if is_file {
            ic::FILE
        } else if root == Some(path.as_str()) {
            ic::SPACE
        } else {
            ic::FOLDER
        };
        PathSegment {
            label,
            icon,
            target: (is_indexed && !is_file && !is_current).then(|| AppRoute::folder(path)),
        }
    }));
    segments
}

/// Path bar component displayed at the bottom of the explorer.
#[component]
pub fn PathBar(
    #[prop(into)] folder_path: Signal<Option<String>>,
    #[prop(into)] selection: Signal<Option<Selection>>,
    /// Full paths of all spaces
    #[prop(into)]
    spaces: Signal<Vec<String>>,
) -> impl IntoView {
    let route_ctx = use_context::<RouteContext>().expect("RouteContext must be provided");

    view! {
        <nav class=css::pathbar aria-label="Folder path">
            {move || {
                let segments = folder_path.with(|path| {
                    selection.with(|sel| {
                        spaces.with(|spaces| build_segments(path.as_deref(), sel.as_ref(), spaces))
                    })
                });
                segments
                    .into_iter()
                    .enumerate()
                    .map(|(idx, seg)| {
                        let separator = (idx > 0).then(|| view! {
                            <span class=css::separator>
                                <Icon icon=ic::CHEVRON_RIGHT />
                            </span>
                        });

                        let segment = match seg.target {
                            Some(target) => view! {
                                <button
                                    class=css::segment
                                    on:click=move |_| route_ctx.navigate(target.clone())
                                >
                                    <span class=css::icon><Icon icon=seg.icon /></span>
                                    <span class=css::label>{seg.label}</span>
                                </button>
                            }
                            .into_any(),
                            None => view! {
                                <button
                                    class=format!("{} {}", css::segment, css::segmentCurrent)
                                    disabled=true
                                >
                                    <span class=css::icon><Icon icon=seg.icon /></span>
                                    <span class=css::label>{seg.label}</span>
                                </button>
                            }
                            .into_any(),
                        };

                        view! { {separator} {segment} }
                    })
                    .collect_view()
            }}
        </nav>
    }
}
