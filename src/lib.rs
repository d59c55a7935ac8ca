//! Web front end for browsing and searching an indexed file system.
//!
//! The application is a client-side Leptos app. Folder listings and search
//! results come from the indexing backend over HTTP (see [`core::api`]).

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod style;
pub mod utils;
