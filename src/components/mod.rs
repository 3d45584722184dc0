//! UI components built with Leptos.
//!
//! - [`Navbar`] - Navigation bar, mobile menu and theme toggle
//! - [`ContactSection`] - Validated contact form with phone mask
//! - [`Toasts`] - Auto-dismissing notifications
//! - [`Footer`] - Copyright line
//! - [`MaintenanceScreen`] - Maintenance-mode overlay
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`sections`] - Static page content

pub mod contact;
pub mod footer;
pub mod icons;
pub mod maintenance;
pub mod navbar;
pub mod sections;
pub mod toast;

pub use contact::ContactSection;
pub use footer::Footer;
pub use maintenance::MaintenanceScreen;
pub use navbar::Navbar;
pub use sections::{About, Hero, Projects, Skills};
pub use toast::Toasts;
