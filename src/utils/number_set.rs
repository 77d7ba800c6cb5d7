use serde::Serialize;

/// The numbers of one ticket: distinct, ascending, fixed once drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NumberSet(Vec<u8>);

impl NumberSet {
    /// Callers must hand over values that are already distinct and ascending.
    pub(crate) fn from_sorted(values: Vec<u8>) -> Self {
        debug_assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
        Self(values)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// JSON form handed to the ticket widget, e.g. `[3,12,19,27,33,41]`.
    pub fn to_attribute(&self) -> String {
        serde_json::to_string(&self.0).unwrap_or_else(|e| {
            log::error!("Failed to serialize ticket numbers: {}", e);
            "[]".to_string()
        })
    }
}
