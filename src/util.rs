// Console + timer helpers shared across components.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

pub fn cerror(msg: &str) {
    web_sys::console::error_1(&JsValue::from_str(msg));
}

/// One-shot timeout that owns its handle; dropping it cancels the callback.
/// Pending UI transitions (fades, autoplay, tip dismissal) are held as values
/// so that replacing or unmounting their owner can never fire a stale one.
pub struct ScheduledTask {
    id: i32,
    _cb: Closure<dyn FnMut()>,
}

impl ScheduledTask {
    pub fn once(delay_ms: i32, f: impl FnOnce() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let cb = Closure::once(f);
        let id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                delay_ms,
            )
            .ok()?;
        Some(Self { id, _cb: cb })
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(self.id);
        }
    }
}

/// Attach a rejection handler to a promise (audio play attempts). The
/// one-shot closure is leaked so it outlives the pending promise.
pub fn on_rejected(promise: js_sys::Promise, f: impl FnOnce(JsValue) + 'static) {
    let cb = Closure::once(f);
    let _ = promise.catch(&cb);
    cb.forget();
}
