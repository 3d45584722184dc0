//! Data models and types for the site.
//!
//! Contains domain types for:
//! - [`MenuState`] - Mobile navigation panel state
//! - [`FormField`], [`FormFields`], [`ContactFormData`], [`SubmissionState`] - Contact form
//! - [`Theme`] - Light/dark color scheme
//! - [`Notification`], [`NotificationKind`] - Toast messages
//! - [`MaintenanceStatus`] - Remote maintenance-mode document

mod form;
mod maintenance;
mod menu;
mod notification;
mod theme;

pub use form::{ContactFormData, FormField, FormFields, SubmissionState};
pub use maintenance::MaintenanceStatus;
pub use menu::MenuState;
pub use notification::{Notification, NotificationKind};
pub use theme::Theme;
