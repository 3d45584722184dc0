//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the site.

// =============================================================================
// Site Metadata
// =============================================================================

/// Author name shown in the hero section and the footer.
pub const AUTHOR: &str = "Tarcísio Carneiro";

/// Short tagline shown under the author name.
pub const TAGLINE: &str = "Desenvolvedor Full Stack";

/// First year of the copyright range in the footer.
pub const BASE_YEAR: i32 = 2025;

/// How often the footer re-checks the current year (milliseconds).
pub const YEAR_CHECK_INTERVAL_MS: u32 = 60 * 60 * 1000;

/// Text shown by the logo in the navigation bar.
pub const LOGO_TEXT: &str = "Tarcísio";

/// Navigation links as `(label, anchor)` pairs.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("Início", "#home"),
    ("Sobre", "#about"),
    ("Habilidades", "#skills"),
    ("Portfólio", "#portfolio"),
    ("Contato", "#contact"),
];

// =============================================================================
// Email Relay (EmailJS)
// =============================================================================

/// Relay account identifiers.
pub mod relay {
    /// Public key passed to `emailjs.init`.
    pub const PUBLIC_KEY: &str = "Xk2pVq8sN4tR7wYz1";
    /// Service identifier passed to `emailjs.send`.
    pub const SERVICE_ID: &str = "service_portfolio";
    /// Template identifier passed to `emailjs.send`.
    pub const TEMPLATE_ID: &str = "template_contact";
}

// =============================================================================
// Mobile Menu
// =============================================================================

/// Viewport width (px) at and above which the desktop navigation is shown.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Selector for the focusable descendants of the navigation panel.
pub const FOCUSABLE_SELECTOR: &str =
    "a[href], button:not([disabled]), input:not([disabled]), textarea:not([disabled]), select:not([disabled]), [tabindex]:not([tabindex=\"-1\"])";

/// Body class that disables page scroll while the menu is open.
pub const MENU_OPEN_BODY_CLASS: &str = "menu-open";

// =============================================================================
// Contact Form
// =============================================================================

/// Contact form limits.
pub mod form {
    /// Minimum message length in characters (inclusive).
    pub const MESSAGE_MIN_CHARS: usize = 10;
    /// Maximum message length in characters (inclusive).
    pub const MESSAGE_MAX_CHARS: usize = 1000;
}

/// Phone mask limits.
pub mod phone {
    /// Maximum number of digits (2-digit area code + up to 9-digit number).
    pub const MAX_DIGITS: usize = 11;
    /// Length of a fully typed mobile number, e.g. `(21) 98765-4321`.
    pub const FULL_MASK_LEN: usize = 15;
}

// =============================================================================
// Notifications
// =============================================================================

/// Time before a toast notification dismisses itself (milliseconds).
pub const NOTIFICATION_TIMEOUT_MS: u32 = 5000;

// =============================================================================
// Theme
// =============================================================================

/// localStorage key for the selected theme.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Body class applied while the dark theme is active.
pub const DARK_MODE_BODY_CLASS: &str = "dark-mode";

/// Media query used when no theme has been stored yet.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

// =============================================================================
// Maintenance Mode
// =============================================================================

/// Maintenance polling configuration.
pub mod maintenance {
    /// Status document fetched by the poller.
    pub const STATUS_URL: &str = "/mode.json";
    /// Polling interval in milliseconds.
    pub const POLL_INTERVAL_MS: u32 = 5000;
    /// Body class applied while maintenance mode is active.
    pub const BODY_CLASS: &str = "maintenance-active";
    /// Decorative logo fonts that may be selected remotely.
    pub const LOGO_FONTS: &[&str] = &[
        "dancing",
        "great-vibes",
        "parisienne",
        "pacifico",
        "homemade",
        "yellowtail",
        "bad-script",
        "belle",
        "de-haviland",
        "marck",
        "kaushan",
        "alex",
        "allura",
        "cedarville",
        "playball",
        "qwigley",
        "rouge",
        "sacramento",
        "satisfy",
        "tangerine",
    ];
}

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the site.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
