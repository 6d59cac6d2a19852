// Parsing of host-side settings. Pure so it can be tested off-wasm.

use crate::constants::MAX_FRAME_DT;
use heart_core::{ConfigError, HeartConfig, RenderMode};

/// `data-log-level` value to a log level; unknown or missing means `Info`.
pub fn log_level(attr: Option<&str>) -> log::Level {
    match attr.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
        Some("error") => log::Level::Error,
        Some("warn") | Some("warning") => log::Level::Warn,
        Some("debug") => log::Level::Debug,
        Some("trace") => log::Level::Trace,
        _ => log::Level::Info,
    }
}

/// Frame step in seconds, clamped to `[0, MAX_FRAME_DT]`.
#[inline]
pub fn clamp_frame_dt(secs: f32) -> f32 {
    if secs.is_finite() {
        secs.clamp(0.0, MAX_FRAME_DT)
    } else {
        0.0
    }
}

/// Engine config from an optional JSON string plus an optional mode override.
/// Blank JSON means defaults; an unknown mode string is ignored.
pub fn resolve_config(
    json: Option<&str>,
    mode: Option<&str>,
) -> Result<HeartConfig, ConfigError> {
    let mut config = match json.map(str::trim).filter(|s| !s.is_empty()) {
        Some(json) => HeartConfig::from_json(json)?,
        None => HeartConfig::default(),
    };
    if let Some(m) = mode.and_then(RenderMode::parse) {
        config.mode = m;
    }
    Ok(config)
}
