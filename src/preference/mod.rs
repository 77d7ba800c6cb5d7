//! Theme preference: a persisted flag plus the system color-scheme hint,
//! both injected so the root component can be driven by fakes.

#[cfg(target_arch = "wasm32")]
mod browser;
mod memory;

#[cfg(target_arch = "wasm32")]
pub use browser::{ LocalStorage, MediaQueryHint };
pub use memory::{ FixedHint, MemoryStore };

use std::rc::Rc;

use crate::configs::DARK_MODE_KEY;
use crate::error::AppError;
use crate::utils::ThemeState;

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
}

pub trait ColorSchemeHint {
    fn prefers_dark(&self) -> bool;
}

#[derive(Clone)]
pub struct ThemePreference {
    store: Rc<dyn PreferenceStore>,
    hint: Rc<dyn ColorSchemeHint>,
}

impl ThemePreference {
    pub fn new(
        store: impl PreferenceStore + 'static,
        hint: impl ColorSchemeHint + 'static
    ) -> Self {
        Self {
            store: Rc::new(store),
            hint: Rc::new(hint),
        }
    }

    /// `localStorage` and `matchMedia` in the browser; an in-memory store
    /// with a light system hint everywhere else.
    pub fn platform() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::new(LocalStorage, MediaQueryHint)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            log::info!("No browser storage on this platform, theme preference is kept in memory");
            Self::new(MemoryStore::default(), FixedHint(false))
        }
    }

    /// Reads the stored flag once. The system hint is only consulted when no
    /// flag has been stored.
    pub fn initialize(&self) -> ThemeState {
        let stored = self.store.get(DARK_MODE_KEY).unwrap_or_else(|e| {
            log::warn!("Could not read theme preference: {}", e);
            None
        });

        let theme = match stored {
            Some(value) => ThemeState::from_stored(Some(value.as_str()), false),
            None => ThemeState::from_stored(None, self.hint.prefers_dark()),
        };

        log::info!("Starting in {} mode", if theme.is_dark { "dark" } else { "light" });
        theme
    }

    /// Flips the theme and persists the result. A failed write is logged and
    /// the flipped state is still returned.
    pub fn toggle(&self, current: ThemeState) -> ThemeState {
        let next = current.toggled();
        if let Err(e) = self.store.set(DARK_MODE_KEY, next.storage_value()) {
            log::error!("Failed to persist theme preference: {}", e);
        }
        next
    }
}

/// Mirrors the theme onto `<body>` so page chrome outside the app root
/// follows it. Nothing to do off the web.
pub fn reflect_theme(theme: ThemeState) -> Result<(), AppError> {
    #[cfg(target_arch = "wasm32")]
    {
        browser::reflect_on_body(theme)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = theme;
        Ok(())
    }
}
