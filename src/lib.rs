//! Client-side behavior of a single-page personal portfolio.
//!
//! Compiled to WebAssembly and rendered with Leptos. The [`core`] module
//! holds the platform-independent controllers (menu, phone mask, contact
//! form); [`components`] binds them to the DOM.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;
