use web_sys::Storage;

use crate::configs::DARK_MODE_CLASS;
use crate::error::AppError;
use crate::preference::{ ColorSchemeHint, PreferenceStore };
use crate::utils::ThemeState;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

fn window() -> Result<web_sys::Window, AppError> {
    web_sys::window().ok_or_else(|| AppError::MissingAnchor("window".to_string()))
}

fn local_storage() -> Result<Storage, AppError> {
    window()?
        .local_storage()?
        .ok_or_else(|| AppError::Storage("localStorage is unavailable".to_string()))
}

pub struct LocalStorage;

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(local_storage()?.get_item(key)?)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        local_storage()?.set_item(key, value)?;
        Ok(())
    }
}

/// Reads `prefers-color-scheme` on demand. No change listener is installed.
pub struct MediaQueryHint;

impl ColorSchemeHint for MediaQueryHint {
    fn prefers_dark(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
}

pub fn reflect_on_body(theme: ThemeState) -> Result<(), AppError> {
    let body = window()?
        .document()
        .and_then(|doc| doc.body())
        .ok_or_else(|| AppError::MissingAnchor("body".to_string()))?;
    body.class_list().toggle_with_force(DARK_MODE_CLASS, theme.is_dark)?;
    Ok(())
}
