//! In-page anchor navigation

use crate::consts::ANCHOR_HEADER_OFFSET;

/// Element id an `href` scrolls to; bare "#" and non-fragment links are left alone
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Window scroll position for a target at `offset_top`, clearing the fixed header
#[inline]
pub fn anchor_scroll_top(offset_top: f64) -> f64 {
    offset_top - ANCHOR_HEADER_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#projects"), Some("projects"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/resume.pdf"), None);
    }

    #[test]
    fn test_header_offset() {
        assert_eq!(anchor_scroll_top(880.0), 800.0);
    }
}
