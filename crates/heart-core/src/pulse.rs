//! Heartbeat clock.
//!
//! `scale = (1 - cos t) / 2` sweeps `[0, 1]`; the clock itself runs at a
//! variable rate so the beat is asymmetric: it contracts quickly while
//! `sin t < 0` and lingers while the heart is near full size.
//!
//! The phase is kept in `[0, 2π)` so per-frame steps never fall below the
//! float resolution of a long-running clock.

use crate::config::PulseConfig;
use std::f32::consts::TAU;

#[derive(Clone, Debug)]
pub struct PulseDriver {
    time: f32,
    config: PulseConfig,
}

impl PulseDriver {
    pub fn new(config: PulseConfig) -> Self {
        Self { time: 0.0, config }
    }

    /// Start at an arbitrary phase; `time` is wrapped into `[0, 2π)`.
    pub fn with_time(config: PulseConfig, time: f32) -> Self {
        Self {
            time: wrap_phase(time),
            config,
        }
    }

    #[inline]
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Breathing scale for the current time, always within `[0, 1]`.
    #[inline]
    pub fn scale(&self) -> f32 {
        scale_at(self.time)
    }

    pub fn rate_multiplier(&self) -> f32 {
        rate_multiplier_at(self.time, &self.config)
    }

    /// Advance one frame; returns the applied phase increment.
    pub fn advance(&mut self) -> f32 {
        let dt = self.config.base_step * self.rate_multiplier();
        self.time = wrap_phase(self.time + dt);
        dt
    }

    pub fn reset(&mut self) {
        self.time = 0.0;
    }
}

#[inline]
fn wrap_phase(time: f32) -> f32 {
    if !time.is_finite() {
        return 0.0;
    }
    let t = time.rem_euclid(TAU);
    // rem_euclid can round up to TAU itself for tiny negative inputs.
    if t >= TAU {
        0.0
    } else {
        t
    }
}

#[inline]
pub fn scale_at(time: f32) -> f32 {
    ((1.0 - time.cos()) * 0.5).clamp(0.0, 1.0)
}

pub fn rate_multiplier_at(time: f32, config: &PulseConfig) -> f32 {
    if time.sin() < 0.0 {
        config.fast_multiplier
    } else if -time.cos() > config.linger_threshold {
        config.slow_multiplier
    } else {
        1.0
    }
}
