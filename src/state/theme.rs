//! Light/dark theme selection.
//!
//! The stylesheet renders dark by default; the light theme is opted into by a
//! class on the document root. The chosen theme persists as a single string
//! preference.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Preference key holding the persisted theme.
pub const STORAGE_KEY: &str = "theme";

/// Visual theme of the site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    /// Stylesheet default when no preference is stored.
    #[default]
    Dark,
}

impl Theme {
    /// Parse a persisted preference value. Unknown values yield `None`.
    pub fn from_stored(raw: &str) -> Option<Self> {
        match raw {
            "light-theme" => Some(Self::Light),
            "dark-theme" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Value written to the preference store.
    pub fn as_stored(self) -> &'static str {
        self.css_class()
    }

    /// Class applied on the document root.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Light => "light-theme",
            Self::Dark => "dark-theme",
        }
    }

    /// Font Awesome glyph shown on the toggle button.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fa-sun",
            Self::Dark => "fa-moon",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Theme state shared with the toggle button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub theme: Theme,
}

impl ThemeState {
    pub fn icon_class(&self) -> &'static str {
        self.theme.icon_class()
    }
}
