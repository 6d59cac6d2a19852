// End-to-end engine behaviour against a recording surface.

use heart_core::{
    FixedRandom, FrameOutcome, HeartConfig, HeartEngine, RenderMode, StdRandom, Surface, Viewport,
};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Fade(f32),
    Clear,
    Fill(String),
    Alpha(f32),
    Rect,
    Sprite { x: f32, y: f32, size: f32 },
}

struct RecordingSurface {
    width: u32,
    height: u32,
    calls: Vec<Call>,
}

impl RecordingSurface {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }

    fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }
    fn height(&self) -> u32 {
        self.height
    }
    fn fade(&mut self, alpha: f32) {
        self.calls.push(Call::Fade(alpha));
    }
    fn clear(&mut self) {
        self.calls.push(Call::Clear);
    }
    fn set_fill_color(&mut self, css: &str) {
        self.calls.push(Call::Fill(css.to_string()));
    }
    fn set_global_alpha(&mut self, alpha: f32) {
        self.calls.push(Call::Alpha(alpha));
    }
    fn fill_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32) {
        self.calls.push(Call::Rect);
    }
    fn draw_sprite(&mut self, x: f32, y: f32, size: f32) {
        self.calls.push(Call::Sprite { x, y, size });
    }
}

fn ring_engine(width: f32, height: f32) -> HeartEngine<StdRandom> {
    HeartEngine::new(
        HeartConfig::default(),
        Viewport::new(width, height),
        StdRandom::from_seed(1),
    )
    .unwrap()
}

fn sprite_config(capacity: usize) -> HeartConfig {
    let mut cfg = HeartConfig::default().with_mode(RenderMode::Sprite);
    cfg.pool_capacity = capacity;
    cfg
}

#[test]
fn ring_mode_seeds_one_particle_per_field_point() {
    let engine = ring_engine(800.0, 600.0);
    // Three rings of 63 samples each.
    assert_eq!(engine.field().len(), 189);
    assert_eq!(engine.pool().len(), 189);
    for p in engine.pool().iter() {
        assert!(p.position.x >= 0.0 && p.position.x <= 800.0);
        assert!(p.position.y >= 0.0 && p.position.y <= 600.0);
        assert!(p.target_index < engine.field().len());
        assert!(p.css_color().starts_with("hsla(0,"));
    }
}

#[test]
fn ring_mode_ticks_and_draws_every_trail_point() {
    let mut engine = ring_engine(800.0, 600.0);
    for _ in 0..30 {
        engine.tick(1.0 / 60.0);
    }
    let mut surface = RecordingSurface::new(800, 600);
    assert_eq!(engine.draw(&mut surface), FrameOutcome::Drawn);

    assert_eq!(surface.calls[0], Call::Fade(0.1));
    let trail = engine.config().ring.trail_length;
    assert_eq!(surface.count(|c| *c == Call::Rect), engine.pool().len() * trail);
    assert_eq!(
        surface.count(|c| matches!(c, Call::Fill(_))),
        engine.pool().len()
    );
    for p in engine.pool().iter() {
        assert!(p.trail.iter().all(|t| t.is_finite()));
    }
}

#[test]
fn ring_mode_ignores_frame_dt() {
    let mut a = ring_engine(800.0, 600.0);
    let mut b = ring_engine(800.0, 600.0);
    for _ in 0..10 {
        a.tick(1.0 / 60.0);
        b.tick(0.2);
    }
    assert_eq!(a.pulse().time(), b.pulse().time());
    let heads_a: Vec<_> = a.pool().iter().map(|p| p.head()).collect();
    let heads_b: Vec<_> = b.pool().iter().map(|p| p.head()).collect();
    assert_eq!(heads_a, heads_b);
}

#[test]
fn narrow_viewport_gets_the_smaller_heart() {
    let widest = |e: &HeartEngine<StdRandom>| {
        e.field()
            .base()
            .iter()
            .map(|p| p.x.abs())
            .fold(0.0_f32, f32::max)
    };
    let desktop = ring_engine(1024.0, 768.0);
    let mobile = ring_engine(400.0, 700.0);
    assert!(widest(&desktop) > 200.0 && widest(&desktop) <= 210.0);
    assert!(widest(&mobile) > 120.0 && widest(&mobile) <= 126.0);
}

#[test]
fn zero_area_surface_is_skipped() {
    let mut engine = ring_engine(800.0, 600.0);
    engine.tick(1.0 / 60.0);
    let mut surface = RecordingSurface::new(0, 600);
    assert_eq!(engine.draw(&mut surface), FrameOutcome::Skipped);
    assert!(surface.calls.is_empty());

    let mut engine =
        HeartEngine::new(sprite_config(10), Viewport::new(0.0, 0.0), FixedRandom(0.5)).unwrap();
    engine.tick(0.5);
    let mut surface = RecordingSurface::new(300, 0);
    assert_eq!(engine.draw(&mut surface), FrameOutcome::Skipped);
    assert!(surface.calls.is_empty());
}

#[test]
fn resize_keeps_simulation_state() {
    let mut engine = ring_engine(800.0, 600.0);
    for _ in 0..20 {
        engine.tick(1.0 / 60.0);
    }
    let time = engine.pulse().time();
    let heads: Vec<_> = engine.pool().iter().map(|p| p.head()).collect();

    engine.resize(Viewport::new(1200.0, 900.0));
    assert_eq!(engine.viewport(), Viewport::new(1200.0, 900.0));
    assert_eq!(engine.pulse().time(), time);
    assert_eq!(engine.pool().len(), heads.len());
    let after: Vec<_> = engine.pool().iter().map(|p| p.head()).collect();
    assert_eq!(heads, after);

    // The next frame recentres the field on the new viewport.
    engine.tick(1.0 / 60.0);
    let n = engine.field().len() as f32;
    let mean_x: f32 = engine.field().points().iter().map(|p| p.x).sum::<f32>() / n;
    assert!((mean_x - 600.0).abs() < 1.0);
}

#[test]
fn restart_resets_pool_and_pulse() {
    let mut engine = ring_engine(800.0, 600.0);
    for _ in 0..50 {
        engine.tick(1.0 / 60.0);
    }
    assert!(engine.pulse().time() > 0.0);
    engine.restart();
    assert_eq!(engine.pulse().time(), 0.0);
    assert_eq!(engine.pool().len(), 189);
    assert_eq!(engine.pool().evicted(), 0);

    let mut sprites =
        HeartEngine::new(sprite_config(20), Viewport::new(500.0, 500.0), StdRandom::from_seed(3))
            .unwrap();
    for _ in 0..30 {
        sprites.tick(1.0 / 60.0);
    }
    assert!(!sprites.pool().is_empty());
    sprites.restart();
    assert!(sprites.pool().is_empty());
}

#[test]
fn sprite_mode_stays_bounded_and_retires_old_particles() {
    let capacity = 50;
    let mut engine = HeartEngine::new(
        sprite_config(capacity),
        Viewport::new(800.0, 600.0),
        StdRandom::from_seed(9),
    )
    .unwrap();
    assert!(engine.pool().is_empty());
    let lifetime = engine.config().sprite.lifetime;

    for frame in 0..600 {
        engine.tick(1.0 / 60.0);
        assert!(engine.pool().len() <= capacity);
        assert!(engine.pool().iter().all(|p| p.age < lifetime));
        if frame > 10 {
            assert!(!engine.pool().is_empty());
        }
    }

    // A huge stall spawns at most one pool's worth and they all expire.
    engine.tick(10.0);
    assert!(engine.pool().len() <= capacity);
}

#[test]
fn bad_frame_dt_does_not_stall_sprite_emission() {
    let mut engine = HeartEngine::new(
        sprite_config(50),
        Viewport::new(800.0, 600.0),
        StdRandom::from_seed(4),
    )
    .unwrap();
    for dt in [f32::INFINITY, f32::NAN, f32::NEG_INFINITY, -1.0] {
        engine.tick(dt);
        assert!(engine.pool().is_empty(), "dt={dt} spawned sprites");
    }

    // One second at 60 fps emits half the pool at capacity / lifetime per second.
    for _ in 0..60 {
        engine.tick(1.0 / 60.0);
    }
    let n = engine.pool().len();
    assert!((20..=30).contains(&n), "{n} sprites after one second");
    assert!(engine
        .pool()
        .iter()
        .all(|p| p.age.is_finite() && p.position.is_finite()));
}

#[test]
fn sprite_spawns_on_the_curve_and_moves_outward() {
    // r = 0.5 gives t = 0, the top cleft of the curve.
    let mut engine =
        HeartEngine::new(sprite_config(8), Viewport::new(800.0, 600.0), FixedRandom(0.5)).unwrap();
    engine.tick(0.5);
    assert!(!engine.pool().is_empty());
    let p = engine.pool().iter().last().unwrap();
    assert!((p.velocity.x).abs() < 1e-3);
    // Spawned above centre, heading further up (screen y shrinks).
    assert!(p.velocity.y < 0.0);
    assert!(p.position.y < 300.0);

    let mut surface = RecordingSurface::new(800, 600);
    assert_eq!(engine.draw(&mut surface), FrameOutcome::Drawn);
    assert_eq!(surface.calls[0], Call::Clear);
    assert_eq!(surface.calls.last(), Some(&Call::Alpha(1.0)));
    let sprites = surface.count(|c| matches!(c, Call::Sprite { .. }));
    assert_eq!(sprites, engine.pool().len());
    for c in &surface.calls {
        if let Call::Sprite { size, .. } = c {
            assert!(*size >= 0.0 && *size <= engine.config().sprite.size);
        }
    }
}

#[test]
fn invalid_config_is_rejected() {
    let mut cfg = HeartConfig::default();
    cfg.ring.rings.clear();
    assert!(HeartEngine::new(cfg, Viewport::new(10.0, 10.0), FixedRandom(0.5)).is_err());
}
