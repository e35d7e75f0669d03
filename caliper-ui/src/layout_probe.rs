//! Layout debugging probe
//!
//! Logs computed font sizes, container dimensions, and oversized elements
//! so layout regressions can be chased from the log output. Purely
//! observational: nothing here mutates the page.

use dioxus::prelude::*;

use crate::resize::use_debounced_resize;
use crate::wasm_utils::sleep_ms;

#[cfg(target_arch = "wasm32")]
use caliper_common::css::{exceeds_width_threshold, parse_px, px_to_rem};

/// What the probe inspects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProbeOptions {
    /// Selector matching measured content containers.
    pub wrapper_selector: &'static str,
    /// (label, selector) pairs sampled for font size inside each wrapper.
    pub font_probes: &'static [(&'static str, &'static str)],
    /// Computed width above which an element is reported as wide.
    pub wide_threshold: f64,
    /// Delay after mount before the first probe run, leaving rendered
    /// content time to settle.
    pub initial_delay_ms: u64,
    /// Resize quiescence before a re-probe.
    pub debounce_ms: u64,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            wrapper_selector: ".panel-wrapper",
            font_probes: &[
                ("title", ".panel-title"),
                ("axis", ".axis-label"),
                ("tick", ".tick-label"),
            ],
            wide_threshold: 700.0,
            initial_delay_ms: 1_000,
            debounce_ms: 250,
        }
    }
}

/// An element whose computed width exceeds the probe threshold.
#[derive(Clone, Debug, PartialEq)]
pub struct WideElement {
    pub tag: String,
    pub classes: String,
    pub width: Option<f64>,
    pub min_width: Option<f64>,
    /// Computed max-width verbatim; usually the keyword `none`.
    pub max_width: String,
}

/// Computed font size of the document element in pixels.
#[cfg(target_arch = "wasm32")]
pub fn root_font_size() -> Option<f64> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let root = document.document_element()?;
    let style = window.get_computed_style(&root).ok()??;
    let value = style.get_property_value("font-size").ok()?;
    parse_px(&value)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn root_font_size() -> Option<f64> {
    None
}

/// Log the dimensions of every container matching the wrapper selector,
/// and the computed font sizes of the configured probes inside each.
#[cfg(target_arch = "wasm32")]
pub fn log_container_metrics(options: &ProbeOptions) {
    use wasm_bindgen::JsCast;

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let root_px = root_font_size().unwrap_or(16.0);
    tracing::debug!(root_px, "root font size");

    let Ok(wrappers) = document.query_selector_all(options.wrapper_selector) else {
        return;
    };
    tracing::debug!(
        count = wrappers.length(),
        selector = options.wrapper_selector,
        "measuring containers"
    );

    for index in 0..wrappers.length() {
        let Some(node) = wrappers.item(index) else {
            continue;
        };
        let Some(element) = node.dyn_ref::<web_sys::Element>() else {
            continue;
        };
        let rect = element.get_bounding_client_rect();
        tracing::debug!(
            container = index + 1,
            width = rect.width().round(),
            height = rect.height().round(),
            "container size"
        );

        for (label, selector) in options.font_probes {
            let Ok(Some(target)) = element.query_selector(selector) else {
                continue;
            };
            let Ok(Some(style)) = window.get_computed_style(&target) else {
                continue;
            };
            let Some(px) = style
                .get_property_value("font-size")
                .ok()
                .as_deref()
                .and_then(parse_px)
            else {
                continue;
            };
            tracing::debug!(
                container = index + 1,
                label = %label,
                px,
                rem = px_to_rem(px, root_px),
                "font size"
            );
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log_container_metrics(_options: &ProbeOptions) {}

/// Collect every element whose computed width or min-width exceeds
/// `threshold` pixels, logging each hit at warn level. These are the
/// elements that keep a page from shrinking with the window.
#[cfg(target_arch = "wasm32")]
pub fn scan_wide_elements(threshold: f64) -> Vec<WideElement> {
    use wasm_bindgen::JsCast;

    let Some(window) = web_sys::window() else {
        return Vec::new();
    };
    let Some(document) = window.document() else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all("*") else {
        return Vec::new();
    };

    let mut hits = Vec::new();
    for index in 0..nodes.length() {
        let Some(node) = nodes.item(index) else {
            continue;
        };
        let Some(element) = node.dyn_ref::<web_sys::Element>() else {
            continue;
        };
        let Ok(Some(style)) = window.get_computed_style(element) else {
            continue;
        };

        let width = style
            .get_property_value("width")
            .ok()
            .as_deref()
            .and_then(parse_px);
        let min_width = style
            .get_property_value("min-width")
            .ok()
            .as_deref()
            .and_then(parse_px);
        if !exceeds_width_threshold(width, min_width, threshold) {
            continue;
        }

        let hit = WideElement {
            tag: element.tag_name().to_lowercase(),
            classes: element.class_name(),
            width,
            min_width,
            max_width: style.get_property_value("max-width").unwrap_or_default(),
        };
        tracing::warn!(
            tag = %hit.tag,
            classes = %hit.classes,
            width = ?hit.width,
            min_width = ?hit.min_width,
            max_width = %hit.max_width,
            "element wider than {threshold}px"
        );
        hits.push(hit);
    }
    hits
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scan_wide_elements(_threshold: f64) -> Vec<WideElement> {
    Vec::new()
}

/// Run the layout probe once shortly after mount, then again whenever the
/// window is resized (trailing-edge debounced).
pub fn use_layout_probe(options: ProbeOptions) {
    let initial = use_hook(move || {
        spawn(async move {
            sleep_ms(options.initial_delay_ms).await;
            log_container_metrics(&options);
            scan_wide_elements(options.wide_threshold);
        })
    });

    use_debounced_resize(options.debounce_ms, move || {
        log_container_metrics(&options);
        scan_wide_elements(options.wide_threshold);
    });

    use_drop(move || initial.cancel());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_probe_configuration() {
        let options = ProbeOptions::default();
        assert_eq!(options.wide_threshold, 700.0);
        assert_eq!(options.debounce_ms, 250);
        assert_eq!(options.font_probes.len(), 3);
    }
}
