//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`FileObject`], [`FileKind`] - Indexed file-system entries from the backend
//! - [`AppRoute`], [`ROUTES`] - Path-based navigation and the route table
//! - [`SortOrder`], [`Selection`] - Explorer view state

mod explorer;
mod file_object;
mod route;

pub use explorer::{Selection, SortDirection, SortKey, SortOrder};
pub use file_object::{FileKind, FileObject};
pub use route::{
    AppRoute, FolderPath, ROUTES, RouteEntry, RoutePattern, RouteTarget, ViewName, resolve,
};
