pub mod keyboard;

use crate::dom::Listener;
use crate::frame::Runner;
use web_sys as web;

/// Keep the canvas backing store and the engine viewport in step with the window.
pub fn wire_resize(window: &web::Window, runner: Runner) -> anyhow::Result<Listener> {
    Listener::add(window, "resize", move |_| {
        if runner.is_running() {
            runner.resize();
        }
    })
}
