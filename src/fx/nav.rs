//! Scroll-reactive navigation
//!
//! Decides the `scrolled` nav style, the highlighted section link, and the
//! scroll-to-top button visibility from the current scroll offset.

use crate::consts::{NAV_SCROLLED_THRESHOLD, SCROLL_SPY_OFFSET, SCROLL_TOP_THRESHOLD};

/// Layout of one `section[id]`
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    /// Offset from document top (px)
    pub top: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

/// Whether the nav bar takes its compact `scrolled` style
#[inline]
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y >= NAV_SCROLLED_THRESHOLD
}

/// Whether the scroll-to-top button is shown
#[inline]
pub fn show_scroll_top(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD
}

/// Section to highlight: the last one (document order) whose top is at or
/// above `scroll_y + SCROLL_SPY_OFFSET`
pub fn active_section(sections: &[SectionBounds], scroll_y: f64) -> Option<&str> {
    let probe = scroll_y + SCROLL_SPY_OFFSET;
    sections
        .iter()
        .rev()
        .find(|s| s.top <= probe)
        .map(|s| s.id.as_str())
}

/// Whether a nav link `href` points at `section_id`
#[inline]
pub fn link_targets_section(href: &str, section_id: &str) -> bool {
    href.strip_prefix('#') == Some(section_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn page() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("hero", 0.0),
            SectionBounds::new("about", 800.0),
            SectionBounds::new("skills", 1400.0),
            SectionBounds::new("contact", 1900.0),
        ]
    }

    #[test]
    fn test_active_section_offsets() {
        let sections = page();
        assert_eq!(active_section(&sections, 0.0), Some("hero"));
        // 650 + 150 = 800 lands exactly on the about top
        assert_eq!(active_section(&sections, 649.0), Some("hero"));
        assert_eq!(active_section(&sections, 650.0), Some("about"));
        assert_eq!(active_section(&sections, 1300.0), Some("skills"));
        assert_eq!(active_section(&sections, 5000.0), Some("contact"));
    }

    #[test]
    fn test_overlapping_sections_last_wins() {
        let sections = vec![
            SectionBounds::new("a", 0.0),
            SectionBounds::new("b", 100.0),
        ];
        assert_eq!(active_section(&sections, 0.0), Some("b"));
    }

    #[test]
    fn test_no_section_reached() {
        let sections = vec![SectionBounds::new("late", 1000.0)];
        assert_eq!(active_section(&sections, 0.0), None);
        assert_eq!(active_section(&[], 100.0), None);
    }

    #[test]
    fn test_link_matching() {
        assert!(link_targets_section("#about", "about"));
        assert!(!link_targets_section("about", "about"));
        assert!(!link_targets_section("#aboutme", "about"));
    }

    #[test]
    fn test_scroll_top_visibility() {
        assert!(!show_scroll_top(500.0));
        assert!(show_scroll_top(501.0));
    }

    proptest! {
        #[test]
        fn prop_scrolled_threshold(y in -1000.0f64..10_000.0) {
            prop_assert_eq!(is_scrolled(y), y >= NAV_SCROLLED_THRESHOLD);
        }
    }
}
