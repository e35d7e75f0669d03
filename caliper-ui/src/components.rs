//! Debug badges

use dioxus::prelude::*;

use crate::viewport::ViewportHandle;

/// Floating `Window: {w}px × {h}px` readout for eyeballing layout issues.
#[component]
pub fn WindowSizeBadge(handle: ViewportHandle) -> Element {
    let (width, height) = handle.window_size();
    rsx! {
        div { class: "window-size-badge", "Window: {width:.0}px × {height:.0}px" }
    }
}

/// Current breakpoint label.
#[component]
pub fn BreakpointBadge(handle: ViewportHandle) -> Element {
    let breakpoint = handle.breakpoint();
    rsx! {
        span { class: "breakpoint-badge", "{breakpoint}" }
    }
}
