//! Core behavior of the site.
//!
//! This module provides:
//! - [`MenuController`] - mobile navigation state machine with focus trap
//! - [`phone`] - phone-number mask and validation
//! - [`ContactFormController`] - validated submission through a [`RelayClient`]
//! - [`theme`] and [`maintenance`] - persisted theme and remote status polling

mod contact;
pub mod error;
pub mod maintenance;
mod menu;
pub mod phone;
pub mod relay;
pub mod theme;
pub mod validation;

pub use contact::{ContactFormController, FormView, SUCCESS_MESSAGE, SubmitOutcome};
pub use menu::{MenuController, MenuKey, MenuView, trap_focus};
pub use relay::{EmailJs, RelayClient, RelayConfig, RelayResponse};
