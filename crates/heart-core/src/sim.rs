//! Per-frame particle updates for both render modes.

use crate::curve::Point;
use crate::field::TargetField;
use crate::particle::Particle;
use crate::rng::RandomSource;

/// Ring-trail tuning the step needs, borrowed from `RingConfig`.
#[derive(Clone, Copy, Debug)]
pub struct SteerParams {
    pub proximity: f32,
    pub reassign_probability: f32,
    pub flip_probability: f32,
    pub trace_k: f32,
}

/// One ring-trail frame for one particle. Units are per-frame, so no `dt`.
pub fn step_ring(
    particle: &mut Particle,
    field: &TargetField,
    params: &SteerParams,
    rng: &mut impl RandomSource,
) {
    if field.is_empty() {
        return;
    }
    if particle.target_index >= field.len() {
        particle.target_index %= field.len();
    }
    let target = field.points()[particle.target_index];
    let delta = particle.trail[0] - target;
    let distance = delta.length();

    if distance < params.proximity {
        if rng.chance(params.reassign_probability) {
            particle.target_index = rng.index(field.len());
        } else {
            if rng.chance(params.flip_probability) {
                particle.direction = particle.direction.flipped();
            }
            let next = particle.target_index as isize + particle.direction.step();
            particle.target_index = field.wrap_index(next);
        }
    }

    // Sitting exactly on the target has no steering direction.
    if distance > 0.0 && distance.is_finite() {
        particle.velocity += -delta / distance * particle.speed;
    }
    particle.trail[0] += particle.velocity;
    particle.velocity *= particle.damping;
    particle.position = particle.trail[0];

    relax_trail(&mut particle.trail, params.trace_k);
}

/// Pull each trail point a fraction `trace_k` of the way toward its
/// predecessor, head to tail.
pub fn relax_trail(trail: &mut [Point], trace_k: f32) {
    for k in 1..trail.len() {
        let prev = trail[k - 1];
        let cur = trail[k];
        trail[k] = cur + (prev - cur) * trace_k;
    }
}

/// Ballistic sprite-decay update over `dt` seconds.
pub fn step_sprite(particle: &mut Particle, dt: f32) {
    particle.position += particle.velocity * dt;
    particle.velocity += particle.acceleration * dt;
    particle.age += dt;
    particle.trail[0] = particle.position;
}

#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t - 1.0;
    t * t * t + 1.0
}
