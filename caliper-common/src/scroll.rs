//! Scroll-affordance computation for horizontally overflowing containers
//!
//! CSS draws the actual edge shadows; this module only decides which
//! marker classes a container should carry for its current geometry.

/// Raw scroll geometry of a container, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    /// Total content width, including the off-screen part.
    pub scroll_width: f64,
    /// Visible width of the container.
    pub client_width: f64,
    /// Current horizontal scroll offset.
    pub scroll_left: f64,
}

/// Marker class applied when content extends past the left edge.
pub const SCROLL_START_CLASS: &str = "scroll-start";
/// Marker class applied when content extends past the right edge.
pub const SCROLL_END_CLASS: &str = "scroll-end";

/// Which edges of a container should carry a shadow class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollEdges {
    /// Content is scrolled past the left edge.
    pub shade_start: bool,
    /// More content remains to the right.
    pub shade_end: bool,
}

impl ScrollEdges {
    /// Compute edge shading from container geometry. A container that does
    /// not overflow gets no shading regardless of scroll position.
    pub fn from_metrics(metrics: &ScrollMetrics) -> Self {
        let scrollable = metrics.scroll_width > metrics.client_width;
        Self {
            shade_start: scrollable && metrics.scroll_left > 0.0,
            shade_end: scrollable
                && metrics.scroll_left + metrics.client_width < metrics.scroll_width,
        }
    }

    /// Space-separated class fragment for the active edges.
    pub fn class_fragment(&self) -> &'static str {
        match (self.shade_start, self.shade_end) {
            (true, true) => "scroll-start scroll-end",
            (true, false) => SCROLL_START_CLASS,
            (false, true) => SCROLL_END_CLASS,
            (false, false) => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(scroll_width: f64, client_width: f64, scroll_left: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_width,
            client_width,
            scroll_left,
        }
    }

    #[test]
    fn test_content_that_fits_gets_no_shading() {
        let edges = ScrollEdges::from_metrics(&metrics(500.0, 500.0, 0.0));
        assert_eq!(edges, ScrollEdges::default());
        assert_eq!(edges.class_fragment(), "");
    }

    #[test]
    fn test_at_left_edge_shades_end_only() {
        let edges = ScrollEdges::from_metrics(&metrics(900.0, 500.0, 0.0));
        assert!(!edges.shade_start);
        assert!(edges.shade_end);
        assert_eq!(edges.class_fragment(), "scroll-end");
    }

    #[test]
    fn test_mid_scroll_shades_both_edges() {
        let edges = ScrollEdges::from_metrics(&metrics(900.0, 500.0, 200.0));
        assert!(edges.shade_start);
        assert!(edges.shade_end);
        assert_eq!(edges.class_fragment(), "scroll-start scroll-end");
    }

    #[test]
    fn test_at_right_edge_shades_start_only() {
        // scroll_left + client_width == scroll_width: nothing left to the right
        let edges = ScrollEdges::from_metrics(&metrics(900.0, 500.0, 400.0));
        assert!(edges.shade_start);
        assert!(!edges.shade_end);
        assert_eq!(edges.class_fragment(), "scroll-start");
    }

    #[test]
    fn test_stale_scroll_offset_on_non_overflowing_container() {
        // A container can keep a residual scroll_left after its content
        // shrank; without overflow it still gets no shading.
        let edges = ScrollEdges::from_metrics(&metrics(500.0, 500.0, 120.0));
        assert_eq!(edges, ScrollEdges::default());
    }
}
