//! Theme persistence and application.
//!
//! Reads the visitor's preference from `localStorage` and mirrors the current
//! mode into the `data-color-scheme` attribute on the `<html>` element.
//! Requires a browser environment; server builds no-op.

use crate::state::theme::{self, ThemeMode};

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "portfolio-theme";

/// Determine the initial mode: stored preference, then the system
/// `prefers-color-scheme` hint, then light.
pub fn initial_mode() -> ThemeMode {
    #[cfg(feature = "hydrate")]
    {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return ThemeMode::Light,
        };

        let stored = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());

        let system_prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches());

        theme::resolve(stored.as_deref(), system_prefers_dark)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        theme::resolve(None, false)
    }
}

/// Set the `data-color-scheme` attribute on the `<html>` element.
pub fn apply(mode: ThemeMode) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-color-scheme", mode.as_str());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
    }
}

/// Persist the mode to `localStorage`. A failing store is logged and
/// otherwise ignored; the in-memory mode still applies for the session.
pub fn save(mode: ThemeMode) {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        match storage {
            Some(storage) => {
                if storage.set_item(STORAGE_KEY, mode.as_str()).is_err() {
                    leptos::logging::warn!("theme preference could not be saved");
                }
            }
            None => leptos::logging::warn!("theme preference could not be saved"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
    }
}
