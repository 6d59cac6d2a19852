use crate::dom;
use crate::settings::clamp_frame_dt;
use crate::surface::CanvasSurface;
use heart_core::{
    FrameLoop, FrameOutcome, FrameScheduler, HeartConfig, HeartEngine, StdRandom, Surface,
    Viewport,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub fn fresh_rng() -> StdRandom {
    StdRandom::from_seed(rand::random::<u64>())
}

pub fn viewport_of(canvas: &web::HtmlCanvasElement) -> Viewport {
    Viewport::new(canvas.width() as f32, canvas.height() as f32)
}

pub struct FrameContext {
    pub engine: HeartEngine<StdRandom>,
    pub surface: CanvasSurface,
    pub canvas: web::HtmlCanvasElement,
    pub paused: bool,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = clamp_frame_dt((now - self.last_instant).as_secs_f32());
        self.last_instant = now;

        if self.paused {
            return;
        }
        self.engine.tick(dt);
        if self.engine.draw(&mut self.surface) == FrameOutcome::Skipped {
            log::trace!("[frame] skipped, canvas has no area");
        }
    }

    pub fn resize(&mut self) {
        dom::sync_canvas_backing_size(&self.canvas);
        self.engine.resize(viewport_of(&self.canvas));
    }

    /// Rebuild the engine from `config`, keeping the old one on failure.
    pub fn rebuild(&mut self, config: HeartConfig) -> anyhow::Result<()> {
        let engine = HeartEngine::new(config, viewport_of(&self.canvas), fresh_rng())?;
        self.engine = engine;
        self.surface.clear();
        // Resume timing from now so the new engine starts with a short step.
        self.last_instant = Instant::now();
        Ok(())
    }
}

/// `requestAnimationFrame` as a [`FrameScheduler`].
pub struct RafScheduler {
    window: web::Window,
    callback: FrameCallback,
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn request_frame(&mut self) -> Option<i32> {
        let cb = self.callback.borrow();
        let cb = cb.as_ref()?;
        self.window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .map_err(|e| log::error!("[frame] requestAnimationFrame failed: {:?}", e))
            .ok()
    }

    fn cancel_frame(&mut self, handle: i32) {
        _ = self.window.cancel_animation_frame(handle);
    }
}

/// Shared handle on the running loop. Cloned into event handlers.
#[derive(Clone)]
pub struct Runner {
    pub ctx: Rc<RefCell<FrameContext>>,
    frames: Rc<RefCell<FrameLoop<i32>>>,
    scheduler: Rc<RefCell<RafScheduler>>,
}

impl Runner {
    pub fn is_running(&self) -> bool {
        self.frames.borrow().is_running()
    }

    /// Cancel the pending frame and release the callback. Safe to call twice.
    pub fn stop(&self) {
        if !self.is_running() {
            return;
        }
        self.frames.borrow_mut().stop(&mut *self.scheduler.borrow_mut());
        let callback = self.scheduler.borrow().callback.clone();
        callback.borrow_mut().take();
        log::info!("[frame] stopped after {} frames", self.frames.borrow().frames());
    }

    pub fn restart(&self) {
        let mut ctx = self.ctx.borrow_mut();
        ctx.engine.restart();
        ctx.surface.clear();
    }

    pub fn set_paused(&self, paused: bool) {
        let mut ctx = self.ctx.borrow_mut();
        if ctx.paused && !paused {
            ctx.last_instant = Instant::now();
        }
        ctx.paused = paused;
        log::info!("[frame] paused={}", paused);
    }

    pub fn toggle_pause(&self) {
        let paused = self.ctx.borrow().paused;
        self.set_paused(!paused);
    }

    pub fn switch_mode(&self) {
        let mut ctx = self.ctx.borrow_mut();
        let mode = ctx.engine.mode().toggled();
        let config = ctx.engine.config().clone().with_mode(mode);
        if let Err(e) = ctx.rebuild(config) {
            log::error!("[frame] switching to {:?} failed: {:?}", mode, e);
        }
    }

    pub fn resize(&self) {
        self.ctx.borrow_mut().resize();
    }
}

pub fn start_loop(ctx: FrameContext) -> anyhow::Result<Runner> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let runner = Runner {
        ctx: Rc::new(RefCell::new(ctx)),
        frames: Rc::new(RefCell::new(FrameLoop::new())),
        scheduler: Rc::new(RefCell::new(RafScheduler {
            window,
            callback: callback.clone(),
        })),
    };

    let tick = runner.clone();
    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !tick.frames.borrow_mut().on_frame() {
            return;
        }
        tick.ctx.borrow_mut().frame();
        tick.frames
            .borrow_mut()
            .schedule(&mut *tick.scheduler.borrow_mut());
    }) as Box<dyn FnMut()>));

    if !runner
        .frames
        .borrow_mut()
        .schedule(&mut *runner.scheduler.borrow_mut())
    {
        anyhow::bail!("could not schedule the first frame");
    }
    Ok(runner)
}
