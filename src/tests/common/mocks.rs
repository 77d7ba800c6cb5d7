use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::configs::GeneratorConfig;
use crate::error::AppError;
use crate::preference::{ FixedHint, MemoryStore, PreferenceStore, ThemePreference };
use crate::utils::NumberSampler;

pub fn seeded_sampler(seed: u64) -> NumberSampler<StdRng> {
    NumberSampler::new(GeneratorConfig::default(), StdRng::seed_from_u64(seed))
        .expect("default generator config is valid")
}

/// A preference service over an in-memory store. The returned store shares
/// state with the service so tests can inspect what was persisted.
pub fn fake_preference(stored: Option<&str>, system_dark: bool) -> (ThemePreference, MemoryStore) {
    let store = match stored {
        Some(value) => MemoryStore::with_value(crate::configs::DARK_MODE_KEY, value),
        None => MemoryStore::default(),
    };
    (ThemePreference::new(store.clone(), FixedHint(system_dark)), store)
}

/// Store whose every call fails, like `localStorage` in a locked-down browser.
pub struct FailingStore;

impl PreferenceStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, AppError> {
        Err(AppError::Storage("storage disabled".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), AppError> {
        Err(AppError::Storage("storage disabled".to_string()))
    }
}
