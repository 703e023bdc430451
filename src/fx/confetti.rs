//! Konami confetti burst
//!
//! Pieces are generated up front from a seeded RNG; the web layer only
//! turns each one into a styled, transitioned `div`.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::{CONFETTI_COLORS, CONFETTI_COUNT, CONFETTI_INTERVAL_MS};

/// One falling square or dot
#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiPiece {
    /// Spawn delay from activation (ms)
    pub delay_ms: i32,
    /// Horizontal start position (% of viewport width)
    pub left_pct: f64,
    /// Edge length (px), 5..15
    pub size: f64,
    pub color: &'static str,
    /// Dot instead of square
    pub round: bool,
    /// Fall time (ms), 2000..5000
    pub duration_ms: f64,
    /// Total spin (deg), -360..360
    pub rotation_deg: f64,
    /// Sideways drift (px), -100..100
    pub drift_px: f64,
}

impl ConfettiPiece {
    /// Inline style before the fall starts
    pub fn start_css(&self) -> String {
        format!(
            "position: fixed; left: {:.2}%; top: -10px; width: {:.1}px; height: {:.1}px; \
             background: {}; z-index: 10000; pointer-events: none; border-radius: {}; \
             opacity: 1; transform: translateY(0) translateX(0) rotate(0deg);",
            self.left_pct,
            self.size,
            self.size,
            self.color,
            if self.round { "50%" } else { "0" },
        )
    }

    /// Transition applied to start the fall
    pub fn transition_css(&self) -> String {
        format!(
            "transform {:.0}ms cubic-bezier(0.25, 0.46, 0.45, 0.94), opacity {:.0}ms cubic-bezier(0.25, 0.46, 0.45, 0.94)",
            self.duration_ms, self.duration_ms
        )
    }

    /// End transform for a viewport `fall_px` tall
    pub fn end_transform(&self, fall_px: f64) -> String {
        format!(
            "translateY({:.0}px) translateX({:.0}px) rotate({:.0}deg)",
            fall_px + 20.0,
            self.drift_px,
            self.rotation_deg
        )
    }
}

/// Generate the full burst
pub fn confetti_burst(seed: u64) -> Vec<ConfettiPiece> {
    let mut rng = Pcg32::seed_from_u64(seed);
    (0..CONFETTI_COUNT)
        .map(|i| ConfettiPiece {
            delay_ms: i as i32 * CONFETTI_INTERVAL_MS,
            left_pct: rng.random_range(0.0..100.0),
            size: rng.random_range(5.0..15.0),
            color: CONFETTI_COLORS[rng.random_range(0..CONFETTI_COLORS.len())],
            round: rng.random_bool(0.5),
            duration_ms: rng.random_range(2000.0..5000.0),
            rotation_deg: rng.random_range(-360.0..360.0),
            drift_px: rng.random_range(-100.0..100.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_shape() {
        let burst = confetti_burst(42);
        assert_eq!(burst.len(), CONFETTI_COUNT);
        assert_eq!(burst[0].delay_ms, 0);
        assert_eq!(burst[10].delay_ms, 150);
        for piece in &burst {
            assert!((0.0..100.0).contains(&piece.left_pct));
            assert!((5.0..15.0).contains(&piece.size));
            assert!((2000.0..5000.0).contains(&piece.duration_ms));
            assert!((-100.0..100.0).contains(&piece.drift_px));
            assert!(CONFETTI_COLORS.contains(&piece.color));
        }
    }

    #[test]
    fn test_seed_determinism() {
        assert_eq!(confetti_burst(7), confetti_burst(7));
        assert_ne!(confetti_burst(7), confetti_burst(8));
    }

    #[test]
    fn test_css_strings() {
        let piece = ConfettiPiece {
            delay_ms: 0,
            left_pct: 50.0,
            size: 10.0,
            color: "#ffffff",
            round: true,
            duration_ms: 3000.0,
            rotation_deg: 90.0,
            drift_px: -40.0,
        };
        assert!(piece.start_css().contains("border-radius: 50%"));
        assert!(piece.start_css().contains("left: 50.00%"));
        assert_eq!(piece.end_transform(800.0), "translateY(820px) translateX(-40px) rotate(90deg)");
        assert!(piece.transition_css().starts_with("transform 3000ms"));
    }
}
