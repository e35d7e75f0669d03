//! caliper-ui - Dioxus hooks and components for viewport and layout
//! instrumentation
//!
//! Wires the pure logic from caliper-common to the browser: a breakpoint
//! hook driven by a debounced resize listener and a periodic poll, a layout
//! debugging probe, a scroll-affordance container, and small debug badges.
//!
//! Browser interop is confined to `wasm32` builds; off-wasm the hooks
//! compile to inert fallbacks so host crates build and test natively.

pub mod components;
pub mod layout_probe;
pub mod resize;
pub mod scroll_shadows;
pub mod viewport;
pub mod wasm_utils;

pub use components::{BreakpointBadge, WindowSizeBadge};
pub use layout_probe::{
    log_container_metrics, root_font_size, scan_wide_elements, use_layout_probe, ProbeOptions,
    WideElement,
};
pub use resize::use_debounced_resize;
pub use scroll_shadows::ScrollContainer;
pub use viewport::{use_viewport, use_viewport_with, ViewportHandle, ViewportOptions};
