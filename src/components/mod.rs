//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`nav`] - Top navigation bar
//! - [`explorer`] - Folder browser
//! - [`search`] - Name search over the index
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod explorer;
pub mod icons;
pub mod nav;
pub mod router;
pub mod search;

pub use nav::NavBar;
pub use router::AppRouter;
