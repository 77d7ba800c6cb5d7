mod env_validate;
mod generator;

pub use env_validate::log_level;
pub use generator::GeneratorConfig;

pub const DARK_MODE_KEY: &str = "darkMode";
pub const DARK_MODE_ENABLED: &str = "enabled";
pub const DARK_MODE_DISABLED: &str = "disabled";
pub const DARK_MODE_CLASS: &str = "dark-mode";
pub const TICKET_TAG: &str = "lotto-ticket";
