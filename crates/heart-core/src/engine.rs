//! The animated heart, both render modes behind one type.

use crate::config::{HeartConfig, RenderMode};
use crate::curve::{ring_outline, with_length, Point};
use crate::error::ConfigError;
use crate::field::TargetField;
use crate::particle::{Direction, Hsla};
use crate::pool::ParticlePool;
use crate::pulse::PulseDriver;
use crate::render::{draw_rings, draw_sprites, FrameOutcome, Surface};
use crate::rng::RandomSource;
use crate::sim::{step_ring, step_sprite, SteerParams};
use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

pub struct HeartEngine<R: RandomSource> {
    config: HeartConfig,
    viewport: Viewport,
    pool: ParticlePool,
    pulse: PulseDriver,
    field: TargetField,
    rng: R,
    emit_carry: f32,
}

impl<R: RandomSource> HeartEngine<R> {
    pub fn new(config: HeartConfig, viewport: Viewport, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let trail_len = match config.mode {
            RenderMode::Ring => config.ring.trail_length,
            RenderMode::Sprite => 1,
        };
        let mut engine = Self {
            pool: ParticlePool::new(config.pool_capacity, trail_len),
            pulse: PulseDriver::new(config.pulse.clone()),
            field: TargetField::default(),
            viewport,
            rng,
            emit_carry: 0.0,
            config,
        };
        engine.seed();
        log::info!(
            "[heart] mode={:?} capacity={} field_points={} viewport={}x{}",
            engine.config.mode,
            engine.pool.capacity(),
            engine.field.len(),
            viewport.width,
            viewport.height
        );
        Ok(engine)
    }

    fn seed(&mut self) {
        if self.config.mode != RenderMode::Ring {
            return;
        }
        let ring = &self.config.ring;
        let scale_mod = if self.viewport.width < ring.mobile_width {
            ring.mobile_scale
        } else {
            1.0
        };
        let base = ring_outline(&ring.curve, &ring.rings, ring.sample_step, scale_mod);
        self.field = TargetField::new(base);
        let count = ring
            .particle_count
            .unwrap_or(self.field.len())
            .min(self.pool.capacity());
        for i in 0..count {
            self.spawn_ring_particle(i);
        }
        self.field
            .regenerate(self.pulse.scale(), self.pulse.scale(), self.viewport.center());
    }

    fn spawn_ring_particle(&mut self, i: usize) {
        let ring = &self.config.ring;
        let rng = &mut self.rng;
        let at = Point::new(
            rng.next_f32() * self.viewport.width,
            rng.next_f32() * self.viewport.height,
        );
        let speed = rng.span(ring.speed_min, ring.speed_span);
        let target_index = if self.field.is_empty() {
            0
        } else {
            rng.index(self.field.len())
        };
        let damping = rng.span(ring.damping_min, ring.damping_span);
        let c = &ring.color;
        let color = Hsla {
            h: c.hue,
            s: rng.span(c.saturation_min, c.saturation_span),
            l: rng.span(c.lightness_min, c.lightness_span),
            a: c.alpha,
        };
        let p = self.pool.spawn(at, Point::ZERO);
        p.speed = speed;
        p.damping = damping;
        p.target_index = target_index;
        p.direction = Direction::alternating(i);
        p.set_color(color);
    }

    /// Advance one display frame. `dt` is wall-clock seconds and only used by
    /// the sprite mode; the ring mode runs in fixed per-frame units. Negative
    /// or non-finite `dt` counts as 0.
    pub fn tick(&mut self, dt: f32) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        match self.config.mode {
            RenderMode::Ring => self.tick_ring(),
            RenderMode::Sprite => self.tick_sprite(dt),
        }
    }

    fn tick_ring(&mut self) {
        let k = self.pulse.scale();
        self.field.regenerate(k, k, self.viewport.center());
        self.pulse.advance();

        let ring = &self.config.ring;
        let params = SteerParams {
            proximity: ring.proximity,
            reassign_probability: ring.reassign_probability,
            flip_probability: ring.flip_probability,
            trace_k: ring.trace_k,
        };
        let field = &self.field;
        let rng = &mut self.rng;
        self.pool
            .for_each_active_mut(|p| step_ring(p, field, &params, &mut *rng));
    }

    fn tick_sprite(&mut self, dt: f32) {
        let sprite = &self.config.sprite;
        let rate = self.pool.capacity() as f32 / sprite.lifetime;
        self.emit_carry += rate * dt;
        let amount = (self.emit_carry.floor() as usize).min(self.pool.capacity());
        self.emit_carry -= self.emit_carry.floor();

        let center = self.viewport.center();
        for _ in 0..amount {
            let t = PI - TAU * self.rng.next_f32();
            let pos = sprite.curve.point(t);
            let dir = with_length(pos, sprite.velocity);
            let velocity = Point::new(dir.x, -dir.y);
            let p = self
                .pool
                .spawn(Point::new(center.x + pos.x, center.y - pos.y), velocity);
            p.acceleration = velocity * sprite.effect;
        }

        self.pool.for_each_active_mut(|p| step_sprite(p, dt));
        let retired = self.pool.retire_expired(sprite.lifetime);
        log::trace!(
            "[heart] spawned={} retired={} evicted_total={}",
            amount,
            retired,
            self.pool.evicted()
        );
    }

    pub fn draw(&self, surface: &mut impl Surface) -> FrameOutcome {
        match self.config.mode {
            RenderMode::Ring => draw_rings(&self.pool, surface, &self.config.ring),
            RenderMode::Sprite => draw_sprites(&self.pool, surface, &self.config.sprite),
        }
    }

    /// New viewport size; simulation state is kept.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport != self.viewport {
            log::debug!("[heart] resize {}x{}", viewport.width, viewport.height);
            self.viewport = viewport;
        }
    }

    /// Fresh pool and pulse clock; config and viewport are kept.
    pub fn restart(&mut self) {
        self.pool.clear();
        self.pulse.reset();
        self.field = TargetField::default();
        self.emit_carry = 0.0;
        self.seed();
        log::info!("[heart] restart mode={:?}", self.config.mode);
    }

    pub fn mode(&self) -> RenderMode {
        self.config.mode
    }

    pub fn config(&self) -> &HeartConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn pool(&self) -> &ParticlePool {
        &self.pool
    }

    pub fn pulse(&self) -> &PulseDriver {
        &self.pulse
    }

    pub fn field(&self) -> &TargetField {
        &self.field
    }
}
