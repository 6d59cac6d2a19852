//! Engine configuration.
//!
//! Every section deserializes with `#[serde(default)]`, so a host can pass a
//! partial JSON object and only override what it cares about.

use crate::constants::*;
use crate::curve::{HeartCurve, RingSpec, Rings};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Trailing particles chasing the breathing outline.
    #[default]
    Ring,
    /// Heart sprites emitted from the curve, growing and fading out.
    Sprite,
}

impl RenderMode {
    pub fn toggled(self) -> Self {
        match self {
            RenderMode::Ring => RenderMode::Sprite,
            RenderMode::Sprite => RenderMode::Ring,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ring" | "trail" => Some(RenderMode::Ring),
            "sprite" | "decay" => Some(RenderMode::Sprite),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeartConfig {
    pub mode: RenderMode,
    pub pool_capacity: usize,
    pub ring: RingConfig,
    pub sprite: SpriteConfig,
    pub pulse: PulseConfig,
}

impl Default for HeartConfig {
    fn default() -> Self {
        Self {
            mode: RenderMode::default(),
            pool_capacity: DEFAULT_POOL_CAPACITY,
            ring: RingConfig::default(),
            sprite: SpriteConfig::default(),
            pulse: PulseConfig::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingConfig {
    pub curve: HeartCurve,
    pub rings: Rings,
    pub sample_step: f32,
    pub trail_length: usize,
    pub trace_k: f32,
    pub proximity: f32,
    pub reassign_probability: f32,
    pub flip_probability: f32,
    pub speed_min: f32,
    pub speed_span: f32,
    pub damping_min: f32,
    pub damping_span: f32,
    /// `None` seeds one particle per field point (bounded by pool capacity).
    pub particle_count: Option<usize>,
    pub fade_alpha: f32,
    pub dot_size: f32,
    pub mobile_width: f32,
    pub mobile_scale: f32,
    pub color: ColorConfig,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            curve: HeartCurve::FIELD,
            rings: RING_SCALES
                .iter()
                .map(|&(scale_x, scale_y)| RingSpec { scale_x, scale_y })
                .collect::<SmallVec<_>>(),
            sample_step: RING_SAMPLE_STEP,
            trail_length: TRAIL_LENGTH,
            trace_k: TRACE_K,
            proximity: PROXIMITY_THRESHOLD,
            reassign_probability: REASSIGN_PROBABILITY,
            flip_probability: FLIP_PROBABILITY,
            speed_min: SPEED_MIN,
            speed_span: SPEED_SPAN,
            damping_min: DAMPING_MIN,
            damping_span: DAMPING_SPAN,
            particle_count: None,
            fade_alpha: FADE_ALPHA,
            dot_size: DOT_SIZE,
            mobile_width: MOBILE_WIDTH,
            mobile_scale: MOBILE_SCALE,
            color: ColorConfig::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub hue: f32,
    pub saturation_min: f32,
    pub saturation_span: f32,
    pub lightness_min: f32,
    pub lightness_span: f32,
    pub alpha: f32,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            hue: HUE,
            saturation_min: SATURATION_MIN,
            saturation_span: SATURATION_SPAN,
            lightness_min: LIGHTNESS_MIN,
            lightness_span: LIGHTNESS_SPAN,
            alpha: COLOR_ALPHA,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteConfig {
    pub curve: HeartCurve,
    pub lifetime: f32,
    pub velocity: f32,
    pub effect: f32,
    pub size: f32,
    pub sample_step: f32,
    pub texture_span: f32,
    pub color: String,
}

impl Default for SpriteConfig {
    fn default() -> Self {
        Self {
            curve: HeartCurve::SPRITE,
            lifetime: SPRITE_LIFETIME_SEC,
            velocity: SPRITE_VELOCITY,
            effect: SPRITE_EFFECT,
            size: SPRITE_SIZE,
            sample_step: SPRITE_SAMPLE_STEP,
            texture_span: SPRITE_TEXTURE_SPAN,
            color: SPRITE_COLOR.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PulseConfig {
    pub base_step: f32,
    pub fast_multiplier: f32,
    pub slow_multiplier: f32,
    pub linger_threshold: f32,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            base_step: PULSE_BASE_STEP,
            fast_multiplier: PULSE_FAST_MULTIPLIER,
            slow_multiplier: PULSE_SLOW_MULTIPLIER,
            linger_threshold: PULSE_LINGER_THRESHOLD,
        }
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn open_unit(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            min: 0.0,
            max: 1.0,
            value: value as f64,
        })
    }
}

fn probability(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            min: 0.0,
            max: 1.0,
            value: value as f64,
        })
    }
}

fn step(field: &'static str, value: f32, max: f32) -> Result<(), ConfigError> {
    positive(field, value as f64)?;
    if value > max {
        return Err(ConfigError::StepTooCoarse {
            field,
            value: value as f64,
            max: max as f64,
        });
    }
    Ok(())
}

impl HeartConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: HeartConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("pool_capacity", self.pool_capacity as f64)?;

        let r = &self.ring;
        if r.rings.is_empty() {
            return Err(ConfigError::NoRings);
        }
        step("ring.sample_step", r.sample_step, MAX_RING_SAMPLE_STEP)?;
        positive("ring.trail_length", r.trail_length as f64)?;
        open_unit("ring.trace_k", r.trace_k)?;
        positive("ring.proximity", r.proximity as f64)?;
        probability("ring.reassign_probability", r.reassign_probability)?;
        probability("ring.flip_probability", r.flip_probability)?;
        // Particles draw from `min + r * span` with r in [0, 1): both ends count.
        positive("ring.speed_min", r.speed_min as f64)?;
        positive("ring.speed_max", (r.speed_min + r.speed_span) as f64)?;
        open_unit("ring.damping_min", r.damping_min)?;
        open_unit("ring.damping_max", r.damping_min + r.damping_span)?;
        probability("ring.fade_alpha", r.fade_alpha)?;
        positive("ring.dot_size", r.dot_size as f64)?;
        positive("ring.mobile_scale", r.mobile_scale as f64)?;

        let s = &self.sprite;
        positive("sprite.lifetime", s.lifetime as f64)?;
        positive("sprite.size", s.size as f64)?;
        positive("sprite.texture_span", s.texture_span as f64)?;
        step("sprite.sample_step", s.sample_step, MAX_SPRITE_SAMPLE_STEP)?;

        let p = &self.pulse;
        positive("pulse.base_step", p.base_step as f64)?;
        positive("pulse.fast_multiplier", p.fast_multiplier as f64)?;
        positive("pulse.slow_multiplier", p.slow_multiplier as f64)?;
        Ok(())
    }
}
