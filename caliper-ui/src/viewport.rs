//! Viewport breakpoint hook
//!
//! Classifies the window width into a named breakpoint and exposes it as a
//! signal that only updates when the classification changes, so consumers
//! re-render per category change, not per resize pixel.
//!
//! Two triggers feed one re-check counter: a periodic poll task and the
//! debounced window-resize path. The sampling effect reacts to the counter;
//! it does not own either trigger.

use caliper_common::{Breakpoint, SampleOutcome, ViewportTracker};
use dioxus::prelude::*;

use crate::resize::use_debounced_resize;
use crate::wasm_utils::{sleep_ms, window_inner_size};

/// Trigger timings for [`use_viewport`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportOptions {
    /// Periodic re-check interval. `0` disables polling.
    pub poll_interval_ms: u64,
    /// Resize quiescence window before a sample is taken.
    pub debounce_ms: u64,
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self {
            poll_interval_ms: 1_000,
            debounce_ms: 250,
        }
    }
}

/// Handle returned by [`use_viewport`]. Copy it into whatever components
/// need the classification.
#[derive(Clone, Copy, PartialEq)]
pub struct ViewportHandle {
    breakpoint: ReadOnlySignal<Breakpoint>,
    window_size: ReadOnlySignal<(f64, f64)>,
}

impl ViewportHandle {
    /// Current breakpoint. Reading subscribes the caller.
    pub fn breakpoint(&self) -> Breakpoint {
        (self.breakpoint)()
    }

    /// Last observed window inner size as (width, height). Updated on the
    /// debounced resize path; sub-pixel jitter is ignored.
    pub fn window_size(&self) -> (f64, f64) {
        (self.window_size)()
    }
}

/// Track the viewport breakpoint with default timings (1 s poll, 250 ms
/// resize quiescence).
pub fn use_viewport() -> ViewportHandle {
    use_viewport_with(ViewportOptions::default())
}

pub fn use_viewport_with(options: ViewportOptions) -> ViewportHandle {
    let mut tracker = use_signal(ViewportTracker::new);
    // Host-visible classification; `Desktop` until the first sample lands.
    let mut breakpoint = use_signal(|| Breakpoint::Desktop);
    let mut window_size = use_signal(|| (0.0_f64, 0.0_f64));

    // Re-check counter bumped by both triggers.
    let mut tick = use_signal(|| 0_u64);

    use_debounced_resize(options.debounce_ms, move || tick += 1);

    let poll_task = use_hook(move || {
        if options.poll_interval_ms == 0 {
            return None;
        }
        Some(spawn(async move {
            loop {
                sleep_ms(options.poll_interval_ms).await;
                tick += 1;
            }
        }))
    });

    // Sample on every tick. Only a changed classification writes the
    // breakpoint signal; an unchanged one must not re-notify consumers.
    use_effect(move || {
        let _ = tick();
        let Some((width, height)) = window_inner_size() else {
            return;
        };

        let last_size = *window_size.peek();
        if (last_size.0 - width).abs() > 1.0 || (last_size.1 - height).abs() > 1.0 {
            window_size.set((width, height));
        }

        if let SampleOutcome::Changed(changed) = tracker.write().sample(width) {
            breakpoint.set(changed);
        }
    });

    use_drop(move || {
        if let Some(task) = poll_task {
            task.cancel();
        }
    });

    ViewportHandle {
        breakpoint: breakpoint.into(),
        window_size: window_size.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_trigger_timings() {
        let options = ViewportOptions::default();
        assert_eq!(options.poll_interval_ms, 1_000);
        assert_eq!(options.debounce_ms, 250);
    }
}
