//! Heart-shaped parametric curves.
//!
//! All curves share the form
//!
//! ```text
//! x = x_scale * sin(t)^3
//! y = c1*cos(t) - c2*cos(2t) - c3*cos(3t) - c4*cos(4t) + y_offset
//! ```
//!
//! and differ only in their coefficients. Three coefficient sets are kept
//! because each was tuned for a different use; none of them is "the" heart.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::f32::consts::{PI, TAU};

pub type Point = Vec2;

/// Rescale `p` to `len`, keeping its direction. The zero vector stays zero.
#[inline]
pub fn with_length(p: Point, len: f32) -> Point {
    p.normalize_or_zero() * len
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeartCurve {
    pub x_scale: f32,
    pub cos_terms: [f32; 4],
    #[serde(default)]
    pub y_offset: f32,
}

impl HeartCurve {
    /// Unit-width outline used to build the target field. y grows downward
    /// so the curve is already in screen orientation.
    pub const FIELD: HeartCurve = HeartCurve {
        x_scale: 1.0,
        cos_terms: [-15.0, -5.0, -2.0, -1.0],
        y_offset: 0.0,
    };

    /// The textbook heart, y grows upward.
    pub const CLASSIC: HeartCurve = HeartCurve {
        x_scale: 16.0,
        cos_terms: [13.0, 5.0, 2.0, 1.0],
        y_offset: 0.0,
    };

    /// Large heart used for sprite emission and the sprite texture.
    pub const SPRITE: HeartCurve = HeartCurve {
        x_scale: 160.0,
        cos_terms: [130.0, 50.0, 20.0, 10.0],
        y_offset: 25.0,
    };

    #[inline]
    pub fn point(&self, t: f32) -> Point {
        let [c1, c2, c3, c4] = self.cos_terms;
        Point::new(
            self.x_scale * t.sin().powi(3),
            c1 * t.cos() - c2 * (2.0 * t).cos() - c3 * (3.0 * t).cos() - c4 * (4.0 * t).cos()
                + self.y_offset,
        )
    }

    /// Points for `t` in `[0, 2π)` at `step` radians.
    pub fn sample(&self, step: f32) -> Vec<Point> {
        let step = step.max(f32::EPSILON);
        let count = (TAU / step).ceil() as usize;
        (0..count).map(|i| self.point(i as f32 * step)).collect()
    }
}

#[inline]
pub fn scale_and_translate(p: Point, scale_x: f32, scale_y: f32, dx: f32, dy: f32) -> Point {
    Point::new(dx + p.x * scale_x, dy + p.y * scale_y)
}

/// One concentric copy of the curve in the base outline.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RingSpec {
    pub scale_x: f32,
    pub scale_y: f32,
}

pub type Rings = SmallVec<[RingSpec; 3]>;

/// Concatenated ring outlines (outer first), each sampled at `step` and
/// scaled by `ring * scale_mod`. Dense enough rings read as a solid heart.
pub fn ring_outline(curve: &HeartCurve, rings: &[RingSpec], step: f32, scale_mod: f32) -> Vec<Point> {
    let base = curve.sample(step);
    let mut out = Vec::with_capacity(base.len() * rings.len());
    for ring in rings {
        let sx = ring.scale_x * scale_mod;
        let sy = ring.scale_y * scale_mod;
        out.extend(base.iter().map(|p| scale_and_translate(*p, sx, sy, 0.0, 0.0)));
    }
    out
}

/// Closed polygon of `curve` mapped into a `size x size` texture, `span`
/// curve units across. Walks `t` from -π to π.
pub fn sprite_outline(curve: &HeartCurve, size: f32, span: f32, step: f32) -> Vec<Point> {
    let step = step.max(f32::EPSILON);
    let half = size / 2.0;
    let to_texture = |t: f32| {
        let p = curve.point(t);
        Point::new(half + p.x * size / span, half - p.y * size / span)
    };
    let mut pts = Vec::with_capacity((TAU / step) as usize + 2);
    let mut t = -PI;
    pts.push(to_texture(t));
    while t < PI {
        t += step;
        pts.push(to_texture(t));
    }
    pts
}
