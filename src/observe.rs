//! Thin wrapper around `IntersectionObserver` used by the reveal animation
//! and the lazy image loader. Holds the JS callback alive and disconnects
//! when dropped.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

pub struct IntersectionWatcher {
    observer: IntersectionObserver,
    _cb: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl IntersectionWatcher {
    /// `on_visible` runs once per entry each time it crosses into view. The
    /// observer itself is passed through so a handler can unobserve its
    /// target for fire-at-most-once semantics.
    pub fn new(
        threshold: f64,
        root_margin: Option<&str>,
        mut on_visible: impl FnMut(Element, &IntersectionObserver) + 'static,
    ) -> Result<Self, JsValue> {
        let cb = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        on_visible(entry.target(), &observer);
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            init.set_root_margin(margin);
        }
        let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init)?;
        Ok(Self { observer, _cb: cb })
    }

    pub fn observe(&self, target: &Element) {
        self.observer.observe(target);
    }
}

impl Drop for IntersectionWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
