//! File explorer UI components.
//!
//! Provides a graphical browser over the indexed spaces.
//!
//! Components:
//! - [`Explorer`] - Main explorer view
//! - [`FileList`] - Sortable list of entries, shared with search
//! - [`Header`] - Navigation buttons and location title

#[allow(clippy::module_inception)]
mod explorer;
mod file_list;
mod header;
mod pathbar;

pub use explorer::Explorer;
pub use file_list::FileList;
pub use header::Header;
