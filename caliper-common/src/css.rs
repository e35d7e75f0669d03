//! Helpers for interpreting CSS computed values

/// Parse a CSS pixel length like `"16px"` or `"16.5px"`. Bare numeric
/// strings are accepted too; keywords (`"auto"`, `"none"`) are not lengths
/// and return `None`.
pub fn parse_px(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed);
    number.trim().parse::<f64>().ok()
}

/// Express a pixel length in rems relative to the root font size.
pub fn px_to_rem(px: f64, root_px: f64) -> f64 {
    px / root_px
}

/// Whether an element's computed width or min-width pins it wider than
/// `threshold` pixels. Unparseable values count as not exceeding.
pub fn exceeds_width_threshold(
    width: Option<f64>,
    min_width: Option<f64>,
    threshold: f64,
) -> bool {
    width.is_some_and(|w| w > threshold) || min_width.is_some_and(|w| w > threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_px() {
        assert_eq!(parse_px("16px"), Some(16.0));
        assert_eq!(parse_px("16.5px"), Some(16.5));
        assert_eq!(parse_px("700"), Some(700.0));
        assert_eq!(parse_px(" 12px "), Some(12.0));
        assert_eq!(parse_px("auto"), None);
        assert_eq!(parse_px("none"), None);
        assert_eq!(parse_px(""), None);
    }

    #[test]
    fn test_px_to_rem() {
        assert_eq!(px_to_rem(8.0, 16.0), 0.5);
        assert_eq!(px_to_rem(24.0, 16.0), 1.5);
    }

    #[test]
    fn test_exceeds_width_threshold() {
        assert!(exceeds_width_threshold(Some(701.0), None, 700.0));
        assert!(exceeds_width_threshold(None, Some(800.0), 700.0));
        assert!(exceeds_width_threshold(Some(10.0), Some(800.0), 700.0));
        assert!(!exceeds_width_threshold(Some(700.0), None, 700.0));
        assert!(!exceeds_width_threshold(None, None, 700.0));
    }
}
