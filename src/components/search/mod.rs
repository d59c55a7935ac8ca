//! File search UI.

#[allow(clippy::module_inception)]
mod search;

pub use search::{Search, open_target};
