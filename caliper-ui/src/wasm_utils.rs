//! Browser interop helpers
//!
//! # Event Listener Cleanup Pattern
//!
//! Attaching a JavaScript listener from Rust/WASM requires a `Closure` that
//! lives as long as the listener is attached. `closure.forget()` leaks both;
//! the pattern here stores the closure in a struct that removes the listener
//! on `Drop`, tying listener lifetime to Rust ownership. With Dioxus, keep
//! the struct in a `Signal<Option<WindowEventListener>>` — setting it to
//! `None` (or unmounting the component) detaches the listener.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// A window event listener that removes itself when dropped.
///
/// Listeners are attached passive: callers here only observe resize and
/// scroll bursts and never call `preventDefault`.
#[cfg(target_arch = "wasm32")]
pub struct WindowEventListener {
    window: web_sys::Window,
    event_name: &'static str,
    callback: Closure<dyn FnMut(wasm_bindgen::JsValue)>,
}

#[cfg(target_arch = "wasm32")]
impl WindowEventListener {
    pub fn new(
        window: web_sys::Window,
        event_name: &'static str,
        callback: impl FnMut(wasm_bindgen::JsValue) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(wasm_bindgen::JsValue)> =
            Closure::wrap(Box::new(callback));

        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(true);
        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                event_name,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .ok();

        Self {
            window,
            event_name,
            callback,
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for WindowEventListener {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Current window inner size in CSS pixels, if a window exists.
#[cfg(target_arch = "wasm32")]
pub fn window_inner_size() -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok().and_then(|v| v.as_f64())?;
    let height = window.inner_height().ok().and_then(|v| v.as_f64())?;
    Some((width, height))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn window_inner_size() -> Option<(f64, f64)> {
    None
}

#[cfg(target_arch = "wasm32")]
pub(crate) async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
