use log::Level;

/// Log level baked in at build time through `LOTTO_LOG`.
///
/// The browser has no process environment, so the value is read with
/// `option_env!`. Unknown values fall back to `info`.
pub fn log_level() -> Level {
    parse_level(option_env!("LOTTO_LOG"))
}

fn parse_level(raw: Option<&str>) -> Level {
    raw.and_then(|value| value.trim().parse::<Level>().ok())
        .unwrap_or(Level::Info)
}
