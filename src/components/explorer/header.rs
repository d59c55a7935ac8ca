//! Explorer header component.
//!
//! Contains navigation buttons and the current location title.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::components::router::RouteContext;
use crate::models::{AppRoute, FileObject};
use crate::utils::format::path_segments;

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// Title shown when no folder is selected.
const SPACES_TITLE: &str = "Spaces";

/// Where the up button leads from `folder_path`.
///
/// The listing's parent wins; a folder without one (a space) goes back to
/// the space list, and the space list has nowhere to go.
fn up_target(folder_path: Option<&str>, parent: Option<&FileObject>) -> Option<AppRoute> {
    folder_path?;
    Some(match parent {
        Some(parent) => AppRoute::folder(parent.full_path.clone()),
        None => AppRoute::root(),
    })
}

fn folder_title(folder_path: Option<&str>) -> String {
    folder_path
        .and_then(|p| path_segments(p).pop())
        .unwrap_or_else(|| SPACES_TITLE.to_string())
}

/// Explorer header with navigation.
#[component]
pub fn Header(
    #[prop(into)] folder_path: Signal<Option<String>>,
    #[prop(into)] parent: Signal<Option<FileObject>>,
) -> impl IntoView {
    let route_ctx = use_context::<RouteContext>().expect("RouteContext must be provided");

    let is_root = Signal::derive(move || folder_path.with(Option::is_none));
    let up = Memo::new(move |_| {
        folder_path.with(|path| parent.with(|parent| up_target(path.as_deref(), parent.as_ref())))
    });
    let title = Memo::new(move |_| folder_path.with(|p| folder_title(p.as_deref())));
    let title_icon = Signal::derive(move || if is_root.get() { ic::SPACE } else { ic::FOLDER });

    view! {
        <header class=css::header>
            <div class=css::navButtons>
                <button
                    class=css::navButton
                    disabled=move || up.with(Option::is_none)
                    on:click=move |_| {
                        if let Some(target) = up.get_untracked() {
                            route_ctx.navigate(target);
                        }
                    }
                    title="Up"
                    aria-label="Go to parent folder"
                >
                    <Icon icon=ic::UP />
                </button>
                <button
                    class=css::navButton
                    disabled=move || is_root.get()
                    on:click=move |_| route_ctx.navigate(AppRoute::root())
                    title="Spaces"
                    aria-label="Go to space list"
                >
                    <Icon icon=ic::HOME />
                </button>
            </div>

            <div class=css::title>
                <span class=css::titleIcon>
                    {move || view! { <Icon icon=title_icon.get() /> }}
                </span>
                <span class=css::titleLabel>{move || title.get()}</span>
            </div>

            <div class=css::actions>
                <button
                    class=css::navButton
                    on:click=move |_| route_ctx.navigate(AppRoute::search(""))
                    title="Search"
                    aria-label="Search files"
                >
                    <Icon icon=ic::SEARCH />
                </button>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folder(full_path: &str) -> FileObject {
        FileObject {
            full_path: full_path.to_string(),
            full_name: "x".to_string(),
            name: "x".to_string(),
            size: 0,
            extension: String::new(),
            kind_name: "folder".to_string(),
            mtime: 0.0,
        }
    }

    #[test]
    fn test_up_target_at_root() {
        assert_eq!(up_target(None, None), None);
    }

    #[test]
    fn test_up_target_uses_parent() {
        let parent = folder("/home");
        assert_eq!(
            up_target(Some("/home/user"), Some(&parent)),
            Some(AppRoute::folder("/home"))
        );
    }

    #[test]
    fn test_up_target_space_goes_to_root() {
        assert_eq!(up_target(Some("/"), None), Some(AppRoute::root()));
    }

    #[test]
    fn test_folder_title() {
        assert_eq!(folder_title(None), "Spaces");
        assert_eq!(folder_title(Some("/home/user")), "user");
        assert_eq!(folder_title(Some("/")), "/");
        assert_eq!(folder_title(Some("C:\\Users")), "Users");
    }
}
