//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuCircleAlert as Error, LuCircleCheck as Success, LuMenu as Menu,
        LuMoon as Moon, LuSend as Send, LuSun as Sun, LuWrench as Maintenance, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsCheckCircleFill as Success, BsExclamationCircleFill as Error,
        BsList as Menu, BsMoonFill as Moon, BsSend as Send,
        BsSunFill as Sun, BsTools as Maintenance, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(MENU, Menu);
themed_icon!(CLOSE, Close);
themed_icon!(SUN, Sun);
themed_icon!(MOON, Moon);
themed_icon!(SEND, Send);
themed_icon!(SUCCESS, Success);
themed_icon!(ERROR, Error);
themed_icon!(MAINTENANCE, Maintenance);
