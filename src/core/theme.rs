/// Light/dark page theme persisted under [`THEME_STORAGE_KEY`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

pub const THEME_STORAGE_KEY: &str = "theme";
pub const LIGHT_THEME_CLASS: &str = "theme-light";

impl Theme {
    /// Anything other than the stored `"light"` sentinel means dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn from_light_class(has_light_class: bool) -> Self {
        if has_light_class {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Glyph shown on the toggle button.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "☀",
            Theme::Dark => "☾",
        }
    }
}
