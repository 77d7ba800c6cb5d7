use crate::configs::{ DARK_MODE_CLASS, DARK_MODE_DISABLED, DARK_MODE_ENABLED };

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ThemeState {
    pub is_dark: bool,
}

impl ThemeState {
    pub const LIGHT: Self = Self { is_dark: false };
    pub const DARK: Self = Self { is_dark: true };

    /// Startup state: an explicit `enabled` wins, an absent flag defers to
    /// the system hint, anything else is light.
    pub fn from_stored(stored: Option<&str>, system_prefers_dark: bool) -> Self {
        match stored {
            Some(value) => Self { is_dark: value == DARK_MODE_ENABLED },
            None => Self { is_dark: system_prefers_dark },
        }
    }

    pub fn toggled(self) -> Self {
        Self { is_dark: !self.is_dark }
    }

    pub fn storage_value(self) -> &'static str {
        if self.is_dark { DARK_MODE_ENABLED } else { DARK_MODE_DISABLED }
    }

    pub fn root_class(self) -> &'static str {
        if self.is_dark { DARK_MODE_CLASS } else { "" }
    }

    /// Text of the toggle button, naming the mode a click switches to.
    pub fn toggle_label(self) -> &'static str {
        if self.is_dark { "Light Mode" } else { "Dark Mode" }
    }
}
