//! Scroll-affordance shadows for horizontally overflowing containers

use std::rc::Rc;

use caliper_common::ScrollEdges;
use dioxus::prelude::*;

use crate::resize::use_debounced_resize;

#[cfg(target_arch = "wasm32")]
use caliper_common::ScrollMetrics;

/// Wraps horizontally scrollable content and keeps the `scroll-start` /
/// `scroll-end` marker classes in sync with the scroll position, so CSS
/// can shade the edges while more content is off-screen.
///
/// Re-measures on mount, on scroll, and after window resizes settle. The
/// class state is only written when the edge computation changes, never
/// per scrolled pixel.
#[component]
pub fn ScrollContainer(
    /// Base classes for the scroll wrapper
    #[props(default = "")]
    class: &'static str,
    children: Element,
) -> Element {
    let mut edges = use_signal(ScrollEdges::default);
    let mut container: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    let mut measure = move || {
        let Some(mounted) = container.read().clone() else {
            return;
        };
        #[cfg(target_arch = "wasm32")]
        {
            let Some(element) = mounted.downcast::<web_sys::Element>() else {
                return;
            };
            let metrics = ScrollMetrics {
                scroll_width: element.scroll_width() as f64,
                client_width: element.client_width() as f64,
                scroll_left: element.scroll_left() as f64,
            };
            let next = ScrollEdges::from_metrics(&metrics);
            if next != *edges.peek() {
                edges.set(next);
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = mounted;
    };

    use_debounced_resize(250, measure);

    let marker = edges().class_fragment();

    rsx! {
        div {
            class: format!("{class} {marker}"),
            onmounted: move |evt: MountedEvent| {
                container.set(Some(evt.data()));
                measure();
            },
            onscroll: move |_| measure(),
            {children}
        }
    }
}
