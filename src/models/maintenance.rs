//! Remote maintenance-mode document.

use serde::Deserialize;

use crate::config::maintenance::LOGO_FONTS;

/// Contents of `/mode.json`.
///
/// ```json
/// { "mode": "close", "logoFont": "pacifico" }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MaintenanceStatus {
    #[serde(default)]
    pub mode: String,
    #[serde(rename = "logoFont", default)]
    pub logo_font: Option<String>,
}

impl MaintenanceStatus {
    /// `true` when the site should show the maintenance screen.
    pub fn is_closed(&self) -> bool {
        self.mode == "close"
    }

    /// CSS class for the requested logo font, if it is one of the known fonts.
    ///
    /// Ignored while the site is closed.
    pub fn logo_font_class(&self) -> Option<String> {
        if self.is_closed() {
            return None;
        }
        let font = self.logo_font.as_deref()?.trim();
        LOGO_FONTS
            .contains(&font)
            .then(|| format!("font-{}", font))
    }
}
