// Default tuning for the heart engine. `config.rs` builds its defaults from these.

// Pool
pub const DEFAULT_POOL_CAPACITY: usize = 500;

// Ring-trail mode
pub const TRAIL_LENGTH: usize = 50;
pub const TRACE_K: f32 = 0.4; // how tightly a trail follows its head (0..1)
pub const PROXIMITY_THRESHOLD: f32 = 10.0; // px, "arrived at target"
pub const REASSIGN_PROBABILITY: f32 = 0.05;
pub const FLIP_PROBABILITY: f32 = 0.01;
pub const SPEED_MIN: f32 = 5.0;
pub const SPEED_SPAN: f32 = 1.0;
pub const DAMPING_MIN: f32 = 0.7;
pub const DAMPING_SPAN: f32 = 0.2;
pub const RING_SAMPLE_STEP: f32 = 0.1; // rad
pub const MAX_RING_SAMPLE_STEP: f32 = 0.1;
pub const FADE_ALPHA: f32 = 0.1;
pub const DOT_SIZE: f32 = 1.0;

// Concentric rings (scale_x, scale_y) applied to `HeartCurve::FIELD`
pub const RING_SCALES: [(f32, f32); 3] = [(210.0, 13.0), (150.0, 9.0), (90.0, 5.0)];

// Narrow viewports get a smaller heart
pub const MOBILE_WIDTH: f32 = 600.0;
pub const MOBILE_SCALE: f32 = 0.6;

// Particle colour (hsla)
pub const HUE: f32 = 0.0;
pub const SATURATION_MIN: f32 = 100.0;
pub const SATURATION_SPAN: f32 = 40.0;
pub const LIGHTNESS_MIN: f32 = 20.0;
pub const LIGHTNESS_SPAN: f32 = 60.0;
pub const COLOR_ALPHA: f32 = 0.3;

// Sprite-decay mode
pub const SPRITE_LIFETIME_SEC: f32 = 2.0;
pub const SPRITE_VELOCITY: f32 = 100.0; // px/sec
pub const SPRITE_EFFECT: f32 = -0.75; // acceleration = velocity * effect
pub const SPRITE_SIZE: f32 = 30.0; // px
pub const SPRITE_SAMPLE_STEP: f32 = 0.01; // rad
pub const MAX_SPRITE_SAMPLE_STEP: f32 = 0.01;
pub const SPRITE_TEXTURE_SPAN: f32 = 350.0; // curve units mapped onto the texture edge
pub const SPRITE_COLOR: &str = "#ea80b0";

// Pulse driver
pub const PULSE_BASE_STEP: f32 = 0.01;
pub const PULSE_FAST_MULTIPLIER: f32 = 9.0; // contraction
pub const PULSE_SLOW_MULTIPLIER: f32 = 0.2; // lingering at full pulse
pub const PULSE_LINGER_THRESHOLD: f32 = 0.8;

// Media collaborators
pub const MAX_UPLOAD_BYTES: u64 = 100 * 1024 * 1024;
pub const SIGNED_URL_TTL_SEC: u64 = 60;
pub const OBJECT_KEY_SUFFIX_LEN: usize = 6;
