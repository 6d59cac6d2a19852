use crate::curve::Point;
use std::fmt;

/// Drift direction along the target field once a particle has arrived.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    #[inline]
    pub fn step(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }

    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    /// Alternates by slot so neighbouring particles drift opposite ways.
    #[inline]
    pub fn alternating(i: usize) -> Self {
        if i % 2 == 1 {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub h: f32,
    pub s: f32,
    pub l: f32,
    pub a: f32,
}

impl Default for Hsla {
    fn default() -> Self {
        Self {
            h: 0.0,
            s: 100.0,
            l: 50.0,
            a: 1.0,
        }
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({},{}%,{}%,{})",
            self.h as i32, self.s as i32, self.l as i32, self.a
        )
    }
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Point,
    pub velocity: Point,
    /// Sprite mode only: constant acceleration set at spawn.
    pub acceleration: Point,
    pub target_index: usize,
    pub direction: Direction,
    pub speed: f32,
    pub damping: f32,
    /// Most-recent first; `trail[0]` is the head.
    pub trail: Vec<Point>,
    pub age: f32,
    pub color: Hsla,
    css: String,
}

impl Particle {
    pub fn new(trail_len: usize) -> Self {
        let color = Hsla::default();
        Self {
            position: Point::ZERO,
            velocity: Point::ZERO,
            acceleration: Point::ZERO,
            target_index: 0,
            direction: Direction::Forward,
            speed: 0.0,
            damping: 0.0,
            trail: vec![Point::ZERO; trail_len.max(1)],
            age: 0.0,
            css: color.to_string(),
            color,
        }
    }

    /// Place at `position` with `velocity`; age and trail restart there.
    pub fn reset(&mut self, position: Point, velocity: Point) {
        self.position = position;
        self.velocity = velocity;
        self.acceleration = Point::ZERO;
        self.age = 0.0;
        for p in self.trail.iter_mut() {
            *p = position;
        }
    }

    #[inline]
    pub fn head(&self) -> Point {
        self.trail[0]
    }

    pub fn set_color(&mut self, color: Hsla) {
        self.color = color;
        self.css = color.to_string();
    }

    /// Cached CSS form of `color`, rebuilt only when the colour changes.
    #[inline]
    pub fn css_color(&self) -> &str {
        &self.css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_collapses_trail_and_age() {
        let mut p = Particle::new(4);
        p.age = 3.0;
        p.trail[2] = Point::new(9.0, 9.0);
        p.reset(Point::new(1.0, 2.0), Point::new(0.5, 0.0));
        assert_eq!(p.age, 0.0);
        assert_eq!(p.trail.len(), 4);
        assert!(p.trail.iter().all(|t| *t == Point::new(1.0, 2.0)));
        assert_eq!(p.head(), p.position);
    }

    #[test]
    fn hsla_formats_as_css() {
        let c = Hsla {
            h: 0.0,
            s: 117.9,
            l: 44.2,
            a: 0.3,
        };
        assert_eq!(c.to_string(), "hsla(0,117%,44%,0.3)");
    }

    #[test]
    fn direction_flip_round_trips() {
        assert_eq!(Direction::Forward.flipped().flipped(), Direction::Forward);
        assert_eq!(Direction::Backward.step(), -1);
        assert_eq!(Direction::alternating(0), Direction::Backward);
        assert_eq!(Direction::alternating(1), Direction::Forward);
    }
}
