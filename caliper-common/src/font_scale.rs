//! Per-breakpoint chart font sizing

use crate::Breakpoint;

/// Chart font sizes in pixels tuned for a breakpoint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontScale {
    pub title: f64,
    pub legend: f64,
    pub axis: f64,
    pub tick: f64,
}

impl FontScale {
    /// Font sizes for a breakpoint. Narrow viewports trade legibility for
    /// fit; `Desktop` gets the full-size title.
    pub fn for_breakpoint(breakpoint: Breakpoint) -> Self {
        let (title, legend, axis, tick) = match breakpoint {
            Breakpoint::Xs => (6.0, 6.0, 6.0, 5.5),
            Breakpoint::Sm => (6.5, 6.5, 6.5, 6.0),
            Breakpoint::Md => (7.5, 7.5, 7.5, 6.5),
            Breakpoint::Lg => (7.5, 7.5, 7.5, 7.0),
            Breakpoint::Xl => (8.0, 8.0, 8.0, 7.0),
            Breakpoint::Xxl => (8.0, 8.0, 8.0, 7.0),
            Breakpoint::Xxxl => (8.5, 8.5, 8.5, 7.5),
            Breakpoint::Desktop => (10.0, 8.5, 8.5, 7.5),
        };
        Self {
            title,
            legend,
            axis,
            tick,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrowest_scale() {
        let scale = FontScale::for_breakpoint(Breakpoint::Xs);
        assert_eq!(scale.title, 6.0);
        assert_eq!(scale.tick, 5.5);
    }

    #[test]
    fn test_desktop_scale() {
        let scale = FontScale::for_breakpoint(Breakpoint::Desktop);
        assert_eq!(scale.title, 10.0);
        assert_eq!(scale.legend, 8.5);
    }

    #[test]
    fn test_scales_never_shrink_as_viewport_grows() {
        let mut last_title = 0.0;
        for breakpoint in Breakpoint::ALL {
            let scale = FontScale::for_breakpoint(breakpoint);
            assert!(scale.title >= last_title, "title shrank at {breakpoint}");
            last_title = scale.title;
        }
    }
}
