use crate::dom::Listener;
use crate::frame::Runner;
use crate::keys::{action_for_key, prevents_default, KeyAction};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_keydown(ev: &web::KeyboardEvent, runner: &Runner) {
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let Some(action) = action_for_key(&ev.key()) else {
        return;
    };
    if prevents_default(action) {
        ev.prevent_default();
    }
    log::debug!("[keys] {:?}", action);
    match action {
        KeyAction::Restart => runner.restart(),
        KeyAction::TogglePause => runner.toggle_pause(),
        KeyAction::SwitchMode => runner.switch_mode(),
    }
}

pub fn wire_keydown(window: &web::Window, runner: Runner) -> anyhow::Result<Listener> {
    Listener::add(window, "keydown", move |ev: web::Event| {
        if !runner.is_running() {
            return;
        }
        if let Some(ev) = ev.dyn_ref::<web::KeyboardEvent>() {
            handle_keydown(ev, &runner);
        }
    })
}
