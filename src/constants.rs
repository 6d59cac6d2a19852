/// Web host wiring constants.
///
/// Engine tuning lives in `heart_core::constants`; these only describe how
/// the page hands settings to the host.
// Canvas the host mounts on at start-up
pub const CANVAS_ID: &str = "heart-canvas";

// Canvas attributes read at mount time
pub const CONFIG_ATTR: &str = "data-config"; // partial HeartConfig JSON
pub const MODE_ATTR: &str = "data-mode"; // "ring" | "sprite"
pub const LOG_LEVEL_ATTR: &str = "data-log-level";

// Longest frame step handed to the engine (seconds). A backgrounded tab
// resumes with one clamped step instead of a giant one.
pub const MAX_FRAME_DT: f32 = 0.25;

// Fill for the ring-mode fade overlay; alpha comes from the config
pub const FADE_RGB: (u8, u8, u8) = (0, 0, 0);
