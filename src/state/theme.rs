#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Light/dark color scheme for the whole page.
///
/// The current mode is held in a context signal; `crate::util::theme` mirrors
/// it into the `data-color-scheme` document attribute and `localStorage`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Glyph shown on the theme toggle button: the sun offers a way out of
    /// dark mode, the moon a way in.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "\u{1F319}",
            Self::Dark => "\u{2600}\u{FE0F}",
        }
    }

    /// Attribute/storage value for this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything but the two known values is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Resolve the initial mode: stored preference first, then the OS
/// `prefers-color-scheme` hint, then light.
pub fn resolve(stored: Option<&str>, system_prefers_dark: bool) -> ThemeMode {
    if let Some(mode) = stored.and_then(ThemeMode::parse) {
        return mode;
    }
    if system_prefers_dark {
        ThemeMode::Dark
    } else {
        ThemeMode::Light
    }
}
