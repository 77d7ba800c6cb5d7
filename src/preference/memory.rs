use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::AppError;
use crate::preference::{ ColorSchemeHint, PreferenceStore };

/// Preference store backed by a shared map. Clones see the same values.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.values.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.value(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// System hint with a fixed answer.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedHint(pub bool);

impl ColorSchemeHint for FixedHint {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}
