//! Drawing the pool onto a 2D raster surface.
//!
//! The engine only talks to [`Surface`]; hosts implement it on whatever
//! drawing context they have (a canvas 2D context on the web).

use crate::config::{RingConfig, SpriteConfig};
use crate::pool::ParticlePool;
use crate::sim::ease_out_cubic;

pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Blend a black overlay of `alpha` over the whole surface.
    fn fade(&mut self, alpha: f32);
    fn clear(&mut self);
    fn set_fill_color(&mut self, css: &str);
    fn set_global_alpha(&mut self, alpha: f32);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    /// Stamp the heart sprite with its top-left corner at (x, y).
    fn draw_sprite(&mut self, x: f32, y: f32, size: f32);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Drawn,
    /// Surface had no pixels (e.g. mid-resize); nothing was drawn.
    Skipped,
}

#[inline]
fn has_area(surface: &impl Surface) -> bool {
    surface.width() > 0 && surface.height() > 0
}

/// Fade the previous frame, then plot every trail point.
pub fn draw_rings(pool: &ParticlePool, surface: &mut impl Surface, cfg: &RingConfig) -> FrameOutcome {
    if !has_area(surface) {
        return FrameOutcome::Skipped;
    }
    surface.fade(cfg.fade_alpha);
    let d = cfg.dot_size;
    for p in pool.iter() {
        surface.set_fill_color(p.css_color());
        for t in &p.trail {
            surface.fill_rect(t.x, t.y, d, d);
        }
    }
    FrameOutcome::Drawn
}

/// Clear, then stamp one sprite per particle sized by age.
pub fn draw_sprites(
    pool: &ParticlePool,
    surface: &mut impl Surface,
    cfg: &SpriteConfig,
) -> FrameOutcome {
    if !has_area(surface) {
        return FrameOutcome::Skipped;
    }
    surface.clear();
    for p in pool.iter() {
        let life = (p.age / cfg.lifetime).clamp(0.0, 1.0);
        let size = cfg.size * ease_out_cubic(life);
        surface.set_global_alpha(1.0 - life);
        surface.draw_sprite(p.position.x - size / 2.0, p.position.y - size / 2.0, size);
    }
    surface.set_global_alpha(1.0);
    FrameOutcome::Drawn
}
