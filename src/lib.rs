pub mod components;
pub mod configs;
pub mod error;
pub mod preference;
pub mod utils;
pub mod views;
#[cfg(test)]
mod tests;

pub use crate::error::AppError;
pub use crate::utils::*;
pub use crate::views::App;
