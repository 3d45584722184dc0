//! Utility modules for web and DOM operations.
//!
//! Provides:
//! - [`dom`] - Window, storage, body classes, focus and smooth scrolling
//! - [`fetch_json_fresh`] - Network fetching with timeout
//! - [`format`] - Timestamp and copyright formatting

pub mod dom;
mod fetch;
pub mod format;

pub use fetch::fetch_json_fresh;
