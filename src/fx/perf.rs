//! Page load timing summary

/// Milestones from `performance.timing` (epoch ms)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerfMetrics {
    pub navigation_start: f64,
    pub dom_content_loaded_end: f64,
    pub load_event_end: f64,
}

impl PerfMetrics {
    /// Navigation start to end of the load event
    pub fn page_load_ms(&self) -> f64 {
        self.load_event_end - self.navigation_start
    }

    /// Navigation start to end of DOMContentLoaded
    pub fn dom_ready_ms(&self) -> f64 {
        self.dom_content_loaded_end - self.navigation_start
    }

    /// Milestones of 0 mean the browser hasn't recorded them yet
    pub fn is_complete(&self) -> bool {
        self.navigation_start > 0.0 && self.dom_content_loaded_end > 0.0 && self.load_event_end > 0.0
    }

    pub fn log(&self) {
        if !self.is_complete() {
            log::debug!("Performance timing incomplete, skipping");
            return;
        }
        log::info!("⚡ Performance Metrics");
        log::info!("Page Load Time: {}ms", self.page_load_ms());
        log::info!("DOM Ready Time: {}ms", self.dom_ready_ms());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_durations() {
        let perf = PerfMetrics {
            navigation_start: 1000.0,
            dom_content_loaded_end: 1350.0,
            load_event_end: 1900.0,
        };
        assert!(perf.is_complete());
        assert_eq!(perf.page_load_ms(), 900.0);
        assert_eq!(perf.dom_ready_ms(), 350.0);
    }

    #[test]
    fn test_incomplete() {
        let perf = PerfMetrics {
            navigation_start: 1000.0,
            dom_content_loaded_end: 1350.0,
            load_event_end: 0.0,
        };
        assert!(!perf.is_complete());
    }
}
