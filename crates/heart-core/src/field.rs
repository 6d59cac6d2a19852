use crate::curve::Point;

/// Per-frame attractor points.
///
/// `points` is rebuilt from `base` on every `regenerate`, so scaling errors
/// never accumulate from one frame to the next.
#[derive(Clone, Debug, Default)]
pub struct TargetField {
    base: Vec<Point>,
    points: Vec<Point>,
}

impl TargetField {
    pub fn new(base: Vec<Point>) -> Self {
        let points = base.clone();
        Self { base, points }
    }

    pub fn regenerate(&mut self, scale_x: f32, scale_y: f32, center: Point) {
        let k = Point::new(scale_x, scale_y);
        self.points.clear();
        self.points.extend(self.base.iter().map(|b| *b * k + center));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn base(&self) -> &[Point] {
        &self.base
    }

    /// Wrap a signed index into `[0, len)`. `len` must be non-zero.
    #[inline]
    pub fn wrap_index(&self, index: isize) -> usize {
        index.rem_euclid(self.points.len() as isize) as usize
    }
}
