//! Theme persistence using localStorage.
//!
//! A single key records the chosen theme. Unreadable or unknown values fall
//! back to the OS color-scheme preference.

use crate::config::{PREFERS_DARK_QUERY, THEME_STORAGE_KEY};
use crate::core::error::StorageError;
use crate::models::Theme;
use crate::utils::dom;

/// Theme to apply on load: the stored choice, else the OS preference.
pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Theme {
    stored
        .and_then(|value| value.parse().ok())
        .unwrap_or_else(|| Theme::from_preference(prefers_dark))
}

/// Theme for the first render, reading the OS preference synchronously.
pub fn initial() -> Theme {
    resolve(load().as_deref(), dom::media_matches(PREFERS_DARK_QUERY))
}

/// Read the stored theme value, if any.
pub fn load() -> Option<String> {
    let storage = dom::local_storage()?;
    storage.get_item(THEME_STORAGE_KEY).ok()?
}

/// Persist the chosen theme.
pub fn save(theme: Theme) -> Result<(), StorageError> {
    let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
    storage
        .set_item(THEME_STORAGE_KEY, theme.as_str())
        .map_err(|_| StorageError::SaveFailed)
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_save_then_load() {
        save(Theme::Dark).unwrap();
        assert_eq!(load().as_deref(), Some("dark"));
        assert_eq!(resolve(load().as_deref(), false), Theme::Dark);

        save(Theme::Light).unwrap();
        assert_eq!(resolve(load().as_deref(), true), Theme::Light);
        assert_eq!(initial(), Theme::Light);
    }

    #[wasm_bindgen_test]
    fn test_initial_follows_os_preference_without_stored_choice() {
        let storage = dom::local_storage().unwrap();
        storage.remove_item(THEME_STORAGE_KEY).unwrap();

        let expected = Theme::from_preference(dom::media_matches(PREFERS_DARK_QUERY));
        assert_eq!(initial(), expected);
    }
}
