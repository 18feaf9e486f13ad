//! Dark mode initialization and toggle.
//!
//! The preference is a `"true"`/`"false"` string under
//! `storyvision_dark`. With nothing stored the browser's
//! `prefers-color-scheme` decides. The chosen theme is applied as a
//! `data-theme` attribute on `<html>`.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use storyboard::consts::DARK_MODE_STORAGE_KEY;

use super::storage::KeyValueStore;

/// Stored preference, falling back to the system setting.
pub fn read_preference(store: &impl KeyValueStore) -> bool {
    match store.get(DARK_MODE_STORAGE_KEY) {
        Ok(Some(val)) => val == "true",
        _ => system_prefers_dark(),
    }
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").unwrap_or_default())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            if let Err(e) = el.set_attribute("data-theme", if enabled { "dark" } else { "light" }) {
                leptos::logging::warn!("dark mode: set data-theme failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = enabled;
    }
}

/// Flip the theme, apply it, and persist the new preference.
pub fn toggle(store: &impl KeyValueStore, current: bool) -> bool {
    let next = !current;
    apply(next);
    if let Err(e) = store.set(DARK_MODE_STORAGE_KEY, if next { "true" } else { "false" }) {
        leptos::logging::warn!("dark mode: preference not saved: {e}");
    }
    next
}
