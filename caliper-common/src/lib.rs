//! caliper-common - pure viewport and layout instrumentation logic
//!
//! Breakpoint classification, viewport change tracking, scroll-affordance
//! computation, and CSS value helpers. No browser or framework dependency,
//! so everything here is testable natively; caliper-ui wires these to the
//! DOM.

pub mod breakpoint;
pub mod css;
pub mod font_scale;
pub mod scroll;
pub mod viewport;

pub use breakpoint::Breakpoint;
pub use font_scale::FontScale;
pub use scroll::{ScrollEdges, ScrollMetrics};
pub use viewport::{SampleOutcome, ViewportTracker};
