//! Viewport breakpoint classification

use std::fmt;

use serde::{Deserialize, Serialize};

/// Named viewport-width category, ordered by ascending width threshold.
///
/// Labels serialize as their lowercase names (`"xs"` … `"desktop"`), the
/// form hosts persist and match against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
    Xxxl,
    Desktop,
}

impl Breakpoint {
    /// Exclusive upper bound for each named category, ascending. Widths at
    /// or above the last bound are `Desktop`.
    const THRESHOLDS: [(f64, Breakpoint); 7] = [
        (390.0, Breakpoint::Xs),
        (410.0, Breakpoint::Sm),
        (530.0, Breakpoint::Md),
        (640.0, Breakpoint::Lg),
        (768.0, Breakpoint::Xl),
        (860.0, Breakpoint::Xxl),
        (1024.0, Breakpoint::Xxxl),
    ];

    /// All categories in threshold order.
    pub const ALL: [Breakpoint; 8] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
        Breakpoint::Xxl,
        Breakpoint::Xxxl,
        Breakpoint::Desktop,
    ];

    /// Classify a viewport width in CSS pixels.
    ///
    /// First bounding threshold wins. Anything no threshold bounds —
    /// including NaN — falls through to `Desktop`; negative widths land in
    /// `Xs` like any other width under 390.
    pub fn classify(width: f64) -> Self {
        Self::THRESHOLDS
            .iter()
            .find(|(bound, _)| width < *bound)
            .map(|(_, breakpoint)| *breakpoint)
            .unwrap_or(Self::Desktop)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "xxl",
            Self::Xxxl => "xxxl",
            Self::Desktop => "desktop",
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(Breakpoint::classify(389.0), Breakpoint::Xs);
        assert_eq!(Breakpoint::classify(390.0), Breakpoint::Sm);
        assert_eq!(Breakpoint::classify(409.0), Breakpoint::Sm);
        assert_eq!(Breakpoint::classify(410.0), Breakpoint::Md);
        assert_eq!(Breakpoint::classify(529.0), Breakpoint::Md);
        assert_eq!(Breakpoint::classify(530.0), Breakpoint::Lg);
        assert_eq!(Breakpoint::classify(639.0), Breakpoint::Lg);
        assert_eq!(Breakpoint::classify(640.0), Breakpoint::Xl);
        assert_eq!(Breakpoint::classify(767.0), Breakpoint::Xl);
        assert_eq!(Breakpoint::classify(768.0), Breakpoint::Xxl);
        assert_eq!(Breakpoint::classify(859.0), Breakpoint::Xxl);
        assert_eq!(Breakpoint::classify(860.0), Breakpoint::Xxxl);
        assert_eq!(Breakpoint::classify(1023.0), Breakpoint::Xxxl);
        assert_eq!(Breakpoint::classify(1024.0), Breakpoint::Desktop);
    }

    #[test]
    fn test_zero_and_negative_widths_are_xs() {
        assert_eq!(Breakpoint::classify(0.0), Breakpoint::Xs);
        assert_eq!(Breakpoint::classify(-120.0), Breakpoint::Xs);
    }

    #[test]
    fn test_nan_falls_through_to_desktop() {
        assert_eq!(Breakpoint::classify(f64::NAN), Breakpoint::Desktop);
    }

    #[test]
    fn test_huge_width_is_desktop() {
        assert_eq!(Breakpoint::classify(10_000.0), Breakpoint::Desktop);
    }

    #[test]
    fn test_classification_is_monotone_over_the_domain() {
        // No gaps, no overlaps: walking the domain never steps backwards
        // and ends at Desktop.
        let mut last = Breakpoint::Xs;
        for width in 0..2048 {
            let breakpoint = Breakpoint::classify(width as f64);
            assert!(breakpoint >= last, "order regressed at width {width}");
            last = breakpoint;
        }
        assert_eq!(last, Breakpoint::Desktop);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Breakpoint::Xs.as_str(), "xs");
        assert_eq!(Breakpoint::Xxxl.as_str(), "xxxl");
        assert_eq!(Breakpoint::Desktop.to_string(), "desktop");
    }

    #[test]
    fn test_labels_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Breakpoint::Sm).unwrap(), "\"sm\"");
        let parsed: Breakpoint = serde_json::from_str("\"desktop\"").unwrap();
        assert_eq!(parsed, Breakpoint::Desktop);
    }
}
