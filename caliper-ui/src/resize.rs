//! Debounced window-resize hook

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::core::Task;
use dioxus::prelude::*;

use crate::wasm_utils::sleep_ms;
#[cfg(target_arch = "wasm32")]
use crate::wasm_utils::WindowEventListener;

/// Run `on_quiet` once per window-resize burst, `debounce_ms` after the
/// last event in the burst.
///
/// Trailing-edge debounce: every new event cancels the pending run and
/// reschedules it, so the callback never observes intermediate widths.
/// The listener detaches and the pending run is cancelled when the calling
/// component unmounts. Off-wasm this is inert.
pub fn use_debounced_resize(debounce_ms: u64, on_quiet: impl FnMut() + 'static) {
    let mut resize_events = use_signal(|| 0_u64);
    let mut pending: Signal<Option<Task>> = use_signal(|| None);
    // Shared between successive debounce tasks.
    let on_quiet: Rc<RefCell<dyn FnMut()>> = use_hook(|| Rc::new(RefCell::new(on_quiet)));

    // Attach the raw listener once. The JS callback runs outside the Dioxus
    // runtime, so it only bumps a signal; scheduling happens in the effect
    // below.
    #[cfg(target_arch = "wasm32")]
    {
        let mut listener: Signal<Option<WindowEventListener>> = use_signal(|| None);
        use_effect(move || {
            if listener.peek().is_some() {
                return;
            }
            let Some(window) = web_sys::window() else {
                return;
            };
            listener.set(Some(WindowEventListener::new(window, "resize", move |_| {
                resize_events += 1;
            })));
        });
    }

    use_effect(move || {
        if resize_events() == 0 {
            return;
        }
        if let Some(task) = pending.take() {
            task.cancel();
        }
        let on_quiet = on_quiet.clone();
        let task = spawn(async move {
            sleep_ms(debounce_ms).await;
            let mut action = on_quiet.borrow_mut();
            (*action)();
        });
        pending.set(Some(task));
    });

    use_drop(move || {
        if let Some(task) = pending.peek().as_ref() {
            task.cancel();
        }
    });
}
