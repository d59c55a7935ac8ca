//! File list component shared by the explorer and search views.
//!
//! Displays entries in list format with sortable column headers.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::ListingState;
use crate::components::icons as ic;
use crate::models::{FileObject, SortDirection, SortKey};
use crate::utils::format::{format_datetime, format_size};

stylance::import_crate_style!(css, "src/components/explorer/file_list.module.css");

#[component]
pub fn FileList(
    /// Entries to display, in backend order
    #[prop(into)]
    entries: Signal<Vec<FileObject>>,
    /// Sort order and selection
    state: ListingState,
    /// Called on double-click or Enter
    on_open: Callback<FileObject>,
    /// Show the containing folder (search results)
    #[prop(default = false)]
    show_location: bool,
) -> impl IntoView {
    let sorted = Signal::derive(move || {
        let mut list = entries.get();
        state.sort.get().sort(&mut list);
        list
    });

    let list_class = if show_location {
        format!("{} {}", css::list, css::withLocation)
    } else {
        css::list.to_string()
    };

    view! {
        <div class=list_class role="grid" aria-label="File list">
            <div class=css::listHeader role="row">
                <span class=css::headerIcon></span>
                <SortHeader label="Name" key=SortKey::Name state=state class=css::headerName />
                {show_location.then(|| view! {
                    <span class=css::headerLocation>"Location"</span>
                })}
                <SortHeader label="Kind" key=SortKey::Kind state=state class=css::headerKind />
                <SortHeader label="Modified" key=SortKey::Modified state=state class=css::headerDate />
                <SortHeader label="Size" key=SortKey::Size state=state class=css::headerSize />
            </div>
            <For
                each=move || sorted.get()
                key=|entry| entry.full_path.clone()
                children=move |entry| {
                    view! {
                        <FileListItem
                            entry=entry
                            state=state
                            on_open=on_open
                            show_location=show_location
                        />
                    }
                }
            />
        </div>
    }
}

/// Clickable column header.
#[component]
fn SortHeader(
    label: &'static str,
    key: SortKey,
    state: ListingState,
    class: &'static str,
) -> impl IntoView {
    let indicator = move || {
        let order = state.sort.get();
        (order.key == key).then(|| match order.direction {
            SortDirection::Ascending => view! { <Icon icon=ic::SORT_ASCENDING /> },
            SortDirection::Descending => view! { <Icon icon=ic::SORT_DESCENDING /> },
        })
    };

    view! {
        <button
            class=format!("{} {}", css::sortHeader, class)
            on:click=move |_| state.toggle_sort(key)
            title=format!("Sort by {}", label.to_lowercase())
        >
            <span>{label}</span>
            <span class=css::sortIndicator>{indicator}</span>
        </button>
    }
}

#[component]
fn FileListItem(
    entry: FileObject,
    state: ListingState,
    on_open: Callback<FileObject>,
    show_location: bool,
) -> impl IntoView {
    let kind = entry.kind();
    let is_container = kind.is_container();
    let is_hidden = entry.full_name.starts_with('.');
    let icon = ic::for_kind(kind);
    let size = format_size(entry.size);
    let modified = format_datetime(entry.mtime_secs());
    let location = entry.parent_path().unwrap_or_default();

    let path_for_select = entry.full_path.clone();
    let path_for_check = entry.full_path.clone();
    let is_selected = Signal::derive(move || state.is_selected(&path_for_check));

    // Single click selects, double click opens
    let handle_click = move |_: leptos::ev::MouseEvent| {
        state.select(path_for_select.clone(), is_container);
    };

    let entry_for_dblclick = entry.clone();
    let handle_dblclick = move |_: leptos::ev::MouseEvent| {
        on_open.run(entry_for_dblclick.clone());
    };

    let entry_for_key = entry.clone();
    let handle_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            on_open.run(entry_for_key.clone());
        }
    };

    let name_class = if is_container {
        format!("{} {}", css::name, css::nameDir)
    } else if is_hidden {
        format!("{} {}", css::name, css::nameHidden)
    } else {
        css::name.to_string()
    };

    let item_class = move || {
        if is_selected.get() {
            format!("{} {}", css::listItem, css::selected)
        } else {
            css::listItem.to_string()
        }
    };

    let aria_label = format!("{}: {}", kind.label(), entry.full_name);
    let suffix = if is_container { "/" } else { "" };
    let display_name = format!("{}{}", entry.full_name, suffix);

    view! {
        <div
            class=item_class
            on:click=handle_click
            on:dblclick=handle_dblclick
            on:keydown=handle_keydown
            role="row"
            tabindex="0"
            aria-label=aria_label
            aria-selected=move || is_selected.get().to_string()
            title=entry.full_path.clone()
        >
            <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
            <span class=name_class>{display_name}</span>
            {show_location.then(|| view! { <span class=css::location>{location}</span> })}
            <span class=css::kind>{kind.label()}</span>
            <span class=css::date>{modified}</span>
            <span class=css::size>{size}</span>
        </div>
    }
}
