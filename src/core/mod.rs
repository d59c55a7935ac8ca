//! Core logic independent of UI components.
//!
//! - [`api`] - Typed client for the indexing backend
//! - [`error`] - Error types

pub mod api;
pub mod error;

pub use api::{FolderListing, IndexClient};
pub use error::FetchError;
