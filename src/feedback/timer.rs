//! Browser scheduler backed by `window.setTimeout`

use super::{Scheduler, TaskHandle};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[derive(Clone, Copy, Debug, Default)]
pub struct WebTimer;

/// Live `setTimeout` registration; owns the closure the timeout calls
pub struct WebTimerHandle {
    timeout_id: Option<i32>,
    _closure: Closure<dyn FnMut()>,
}

impl Scheduler for WebTimer {
    type Handle = WebTimerHandle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> WebTimerHandle {
        let mut callback = Some(callback);
        let closure = Closure::<dyn FnMut()>::new(move || {
            if let Some(callback) = callback.take() {
                callback();
            }
        });

        let timeout_id = web_sys::window().and_then(|window| {
            window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    closure.as_ref().unchecked_ref(),
                    delay_ms.min(i32::MAX as u32) as i32,
                )
                .map_err(|e| log::error!("setTimeout failed: {:?}", e))
                .ok()
        });

        WebTimerHandle {
            timeout_id,
            _closure: closure,
        }
    }
}

impl TaskHandle for WebTimerHandle {
    fn cancel(&mut self) {
        if let (Some(window), Some(id)) = (web_sys::window(), self.timeout_id.take()) {
            window.clear_timeout_with_handle(id);
        }
    }
}
