//! Dark mode preference handling for the site header toggle.
//!
//! The `.dark-mode` class lives on `<html>` so the stylesheet can theme
//! everything below it. Preference precedence on load: explicit
//! `localStorage` entry, then the `prefers-color-scheme` media query.
//! Requires a browser environment; native builds see a disabled theme.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "modules_ui_dark";

#[cfg(feature = "hydrate")]
const DARK_CLASS: &str = "dark-mode";

/// The preference to start the session with.
pub fn initial() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(stored)) = storage.get_item(STORAGE_KEY) {
                return stored == "true";
            }
        }
        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |query| query.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the preference to `<html>` and persist it for the next visit.
pub fn set(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some(root) = window.document().and_then(|doc| doc.document_element()) {
            let classes = root.class_list();
            if enabled {
                let _ = classes.add_1(DARK_CLASS);
            } else {
                let _ = classes.remove_1(DARK_CLASS);
            }
        }
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(STORAGE_KEY, if enabled { "true" } else { "false" });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}
