#![cfg(target_arch = "wasm32")]
use instant::Instant;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod keys;
mod settings;
mod surface;

use constants::{CANVAS_ID, CONFIG_ATTR, LOG_LEVEL_ATTR, MODE_ATTR};
use heart_core::HeartEngine;

thread_local! {
    // Heart mounted by `start`; kept alive for the page's lifetime.
    static AUTO_MOUNTED: RefCell<Option<HeartHandle>> = const { RefCell::new(None) };
}

/// Controls for a mounted heart. Dropping the handle stops it.
#[wasm_bindgen]
pub struct HeartHandle {
    runner: frame::Runner,
    listeners: Vec<dom::Listener>,
}

#[wasm_bindgen]
impl HeartHandle {
    /// Cancel the animation and detach listeners. Calling it again does nothing.
    pub fn stop(&mut self) {
        self.runner.stop();
        self.listeners.clear();
    }

    pub fn restart(&self) {
        if self.runner.is_running() {
            self.runner.restart();
        }
    }

    #[wasm_bindgen(js_name = setPaused)]
    pub fn set_paused(&self, paused: bool) {
        self.runner.set_paused(paused);
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.runner.is_running()
    }
}

impl Drop for HeartHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let canvas = dom::window_document().and_then(|d| d.get_element_by_id(CANVAS_ID));
    let level = settings::log_level(
        canvas
            .as_ref()
            .and_then(|c| c.get_attribute(LOG_LEVEL_ATTR))
            .as_deref(),
    );
    console_log::init_with_level(level).ok();
    log::info!("heart-web starting");

    if canvas.is_none() {
        log::info!("no #{} on the page, waiting for mount()", CANVAS_ID);
        return Ok(());
    }
    match init(CANVAS_ID, None) {
        Ok(handle) => AUTO_MOUNTED.with(|slot| *slot.borrow_mut() = Some(handle)),
        Err(e) => log::error!("init error: {:?}", e),
    }
    Ok(())
}

/// Mount a heart on the canvas with id `canvas_id`. `config_json` overrides
/// the canvas's `data-config` attribute.
#[wasm_bindgen]
pub fn mount(canvas_id: &str, config_json: Option<String>) -> Result<HeartHandle, JsValue> {
    init(canvas_id, config_json).map_err(|e| {
        log::error!("mount error: {:?}", e);
        JsValue::from_str(&e.to_string())
    })
}

fn init(canvas_id: &str, config_json: Option<String>) -> anyhow::Result<HeartHandle> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, canvas_id)?;

    let json = config_json.or_else(|| canvas.get_attribute(CONFIG_ATTR));
    let mode = canvas.get_attribute(MODE_ATTR);
    let config = settings::resolve_config(json.as_deref(), mode.as_deref())?;

    dom::sync_canvas_backing_size(&canvas);
    let surface = surface::CanvasSurface::new(&document, canvas.clone(), &config.sprite)?;
    let engine = HeartEngine::new(config, frame::viewport_of(&canvas), frame::fresh_rng())?;

    let runner = frame::start_loop(frame::FrameContext {
        engine,
        surface,
        canvas,
        paused: false,
        last_instant: Instant::now(),
    })?;

    // Dropped (and so stopped) if wiring fails below.
    let mut handle = HeartHandle {
        runner: runner.clone(),
        listeners: Vec::with_capacity(2),
    };
    handle
        .listeners
        .push(events::wire_resize(&window, runner.clone())?);
    handle
        .listeners
        .push(events::keyboard::wire_keydown(&window, runner)?);
    log::info!("[mount] #{} running", canvas_id);
    Ok(handle)
}
