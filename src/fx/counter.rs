//! Animated statistic counters

use crate::consts::{COUNTER_DURATION_MS, COUNTER_FRAME_MS};

/// Leading-integer parse of a `data-count` value ("150+" -> 150)
pub fn parse_count(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// One rendered frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterFrame {
    pub text: String,
    /// No further frames needed
    pub done: bool,
}

/// Counts from zero to `target` in fixed per-frame steps
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: i64,
    step: f64,
    current: f64,
    suffix: String,
    done: bool,
}

impl CounterAnimation {
    pub fn new(target: i64, suffix: impl Into<String>) -> Self {
        Self::with_duration(target, suffix, COUNTER_DURATION_MS)
    }

    pub fn with_duration(target: i64, suffix: impl Into<String>, duration_ms: f64) -> Self {
        Self {
            target,
            step: target as f64 / (duration_ms / COUNTER_FRAME_MS),
            current: 0.0,
            suffix: suffix.into(),
            done: false,
        }
    }

    #[cfg(test)]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advance one animation frame. Frames after completion repeat the target.
    pub fn advance(&mut self) -> CounterFrame {
        if !self.done {
            self.current += self.step;
        }
        if !self.done && self.current < self.target as f64 {
            CounterFrame {
                text: format!("{}{}", self.current.floor() as i64, self.suffix),
                done: false,
            }
        } else {
            self.done = true;
            CounterFrame {
                text: format!("{}{}", self.target, self.suffix),
                done: true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn run(anim: &mut CounterAnimation) -> Vec<CounterFrame> {
        let mut frames = Vec::new();
        loop {
            let frame = anim.advance();
            let done = frame.done;
            frames.push(frame);
            if done || frames.len() > 10_000 {
                break;
            }
        }
        frames
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("150"), Some(150));
        assert_eq!(parse_count(" 42+"), Some(42));
        assert_eq!(parse_count("-3"), Some(-3));
        assert_eq!(parse_count("abc"), None);
        assert_eq!(parse_count(""), None);
    }

    #[test]
    fn test_reaches_exact_target() {
        let mut anim = CounterAnimation::new(150, "");
        let frames = run(&mut anim);
        assert_eq!(frames.last().unwrap().text, "150");
        // 2000ms / 16ms = 125 frames, give or take float accumulation
        assert!((124..=126).contains(&frames.len()));
        assert!(anim.is_done());
        // Stops incrementing
        assert_eq!(anim.advance().text, "150");
    }

    #[test]
    fn test_suffix_applied_throughout() {
        let mut anim = CounterAnimation::new(10, "+");
        let frames = run(&mut anim);
        assert!(frames.iter().all(|f| f.text.ends_with('+')));
        assert_eq!(frames.last().unwrap().text, "10+");
    }

    #[test]
    fn test_zero_target_finishes_immediately() {
        let mut anim = CounterAnimation::new(0, "");
        assert_eq!(
            anim.advance(),
            CounterFrame {
                text: "0".into(),
                done: true
            }
        );
    }

    proptest! {
        #[test]
        fn prop_monotonic_and_exact(target in 1i64..100_000) {
            let mut anim = CounterAnimation::new(target, "");
            let frames = run(&mut anim);
            let values: Vec<i64> = frames.iter().map(|f| f.text.parse().unwrap()).collect();
            prop_assert!(values.windows(2).all(|w| w[0] <= w[1]));
            prop_assert_eq!(*values.last().unwrap(), target);
            prop_assert!(values.iter().all(|v| *v <= target));
        }
    }
}
