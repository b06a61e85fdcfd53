//! Light/dark theme preference.
//!
//! The choice is stored under `fleetdesk_theme` in `localStorage` and
//! applied as `<html data-theme="...">`. With nothing stored the browser's
//! `prefers-color-scheme` decides. Outside the browser every call is a no-op
//! and the theme is light.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "fleetdesk_theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value of the `data-theme` attribute, also what gets stored.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon for the header button: the theme a click switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

/// Stored value if it parses, otherwise the system preference.
pub fn resolve(stored: Option<&str>, system_prefers_dark: bool) -> Theme {
    stored.and_then(Theme::parse).unwrap_or(if system_prefers_dark { Theme::Dark } else { Theme::Light })
}

pub fn load() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return Theme::Light;
        };
        let stored = window.local_storage().ok().flatten().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches());
        resolve(stored.as_deref(), prefers_dark)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::Light
    }
}

pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Apply and persist.
pub fn save(theme: Theme) {
    apply(theme);
    #[cfg(feature = "hydrate")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            if let Err(e) = storage.set_item(STORAGE_KEY, theme.as_str()) {
                log::warn!("could not persist theme: {e:?}");
            }
        }
    }
}
