use std::fmt::{Display, Formatter};
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    MalformedNumbers(String),
    MissingAnchor(String),
    Storage(String),
    InvalidConfig(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::MalformedNumbers(msg) => write!(f, "Malformed numbers: {}", msg),
            AppError::MissingAnchor(msg) => write!(f, "Missing document anchor: {}", msg),
            AppError::Storage(msg) => write!(f, "Storage Error: {}", msg),
            AppError::InvalidConfig(msg) => write!(f, "Invalid generator config: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::MalformedNumbers(error.to_string())
    }
}

impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        AppError::Storage(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
