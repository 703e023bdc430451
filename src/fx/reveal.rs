//! Reveal-on-intersection bookkeeping

use std::collections::HashSet;

/// Parse a `data-delay` attribute in ms; missing or invalid means no delay
pub fn parse_delay(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|d| d.is_finite() && *d > 0.0)
        .map(|d| d.round() as u32)
        .unwrap_or(0)
}

/// Lets each element fire at most once
#[derive(Debug, Clone, Default)]
pub struct OnceGate {
    fired: HashSet<usize>,
}

impl OnceGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// True the first time `key` is seen
    pub fn fire(&mut self, key: usize) -> bool {
        self.fired.insert(key)
    }

    #[cfg(test)]
    pub fn has_fired(&self, key: usize) -> bool {
        self.fired.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_delay() {
        assert_eq!(parse_delay(None), 0);
        assert_eq!(parse_delay(Some("200")), 200);
        assert_eq!(parse_delay(Some(" 150.4 ")), 150);
        assert_eq!(parse_delay(Some("soon")), 0);
        assert_eq!(parse_delay(Some("-50")), 0);
    }

    #[test]
    fn test_fires_once_per_element() {
        let mut gate = OnceGate::new();
        assert!(gate.fire(3));
        assert!(!gate.fire(3));
        assert!(gate.fire(4));
        assert!(gate.has_fired(3));
        assert!(!gate.has_fired(5));
    }
}
