//! Typewriter role text
//!
//! Cycles a fixed list of roles: type forward, hold, delete, advance.
//! One `tick` corresponds to one timer firing; the returned delay is when
//! the next tick should fire.

use crate::config::TypewriterTimings;

/// Where the cycle is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Adding one character per tick
    Typing,
    /// Holding the full role
    Paused,
    /// Removing one character per tick
    Deleting,
    /// Role emptied, next tick moves to the following role
    Advancing,
}

/// Result of one tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// New text to display (None = unchanged)
    pub text: Option<String>,
    /// Milliseconds until the next tick
    pub delay_ms: u32,
}

/// Typewriter state machine
#[derive(Debug, Clone)]
pub struct Typewriter {
    roles: Vec<Vec<char>>,
    role_index: usize,
    char_index: usize,
    phase: Phase,
    timings: TypewriterTimings,
}

impl Typewriter {
    /// Returns None when there is nothing to type
    pub fn new<S: AsRef<str>>(roles: &[S], timings: TypewriterTimings) -> Option<Self> {
        if roles.is_empty() {
            return None;
        }
        Some(Self {
            roles: roles.iter().map(|r| r.as_ref().chars().collect()).collect(),
            role_index: 0,
            char_index: 0,
            phase: Phase::Typing,
            timings,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn role_index(&self) -> usize {
        self.role_index
    }

    /// Delay before the first tick
    pub fn start_delay_ms(&self) -> u32 {
        self.timings.start_delay_ms
    }

    /// Text currently on screen
    pub fn visible_text(&self) -> String {
        self.current()[..self.char_index].iter().collect()
    }

    fn current(&self) -> &[char] {
        &self.roles[self.role_index]
    }

    /// Advance by one timer firing
    pub fn tick(&mut self) -> Frame {
        match self.phase {
            Phase::Typing => self.type_char(),
            Phase::Paused => {
                self.phase = Phase::Deleting;
                Frame {
                    text: None,
                    delay_ms: self.timings.pause_ms,
                }
            }
            Phase::Deleting => {
                self.char_index = self.char_index.saturating_sub(1);
                let delay_ms = if self.char_index == 0 {
                    self.phase = Phase::Advancing;
                    self.timings.advance_ms
                } else {
                    self.timings.delete_ms
                };
                Frame {
                    text: Some(self.visible_text()),
                    delay_ms,
                }
            }
            Phase::Advancing => {
                self.role_index = (self.role_index + 1) % self.roles.len();
                self.phase = Phase::Typing;
                self.type_char()
            }
        }
    }

    fn type_char(&mut self) -> Frame {
        let len = self.current().len();
        if self.char_index < len {
            self.char_index += 1;
        }
        if self.char_index == len {
            self.phase = Phase::Paused;
        }
        Frame {
            text: Some(self.visible_text()),
            delay_ms: self.timings.type_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn writer(roles: &[&str]) -> Typewriter {
        Typewriter::new(roles, TypewriterTimings::default()).unwrap()
    }

    #[test]
    fn test_empty_roles() {
        let roles: [&str; 0] = [];
        assert!(Typewriter::new(&roles, TypewriterTimings::default()).is_none());
    }

    #[test]
    fn test_single_cycle_timeline() {
        let mut tw = writer(&["ab", "c"]);

        assert_eq!(tw.tick(), Frame { text: Some("a".into()), delay_ms: 100 });
        assert_eq!(tw.phase(), Phase::Typing);
        assert_eq!(tw.tick(), Frame { text: Some("ab".into()), delay_ms: 100 });
        assert_eq!(tw.phase(), Phase::Paused);

        // Hold at full length
        assert_eq!(tw.tick(), Frame { text: None, delay_ms: 2000 });
        assert_eq!(tw.phase(), Phase::Deleting);

        assert_eq!(tw.tick(), Frame { text: Some("a".into()), delay_ms: 50 });
        assert_eq!(tw.tick(), Frame { text: Some(String::new()), delay_ms: 500 });
        assert_eq!(tw.phase(), Phase::Advancing);

        // Next role starts typing straight away
        assert_eq!(tw.tick(), Frame { text: Some("c".into()), delay_ms: 100 });
        assert_eq!(tw.role_index(), 1);
        assert_eq!(tw.phase(), Phase::Paused);
    }

    #[test]
    fn test_wraps_to_first_role() {
        let mut tw = writer(&["x", "y"]);
        let mut seen = Vec::new();
        for _ in 0..20 {
            tw.tick();
            if tw.phase() == Phase::Paused {
                seen.push(tw.visible_text());
            }
        }
        assert_eq!(&seen[..3], &["x", "y", "x"]);
    }

    #[test]
    fn test_multibyte_characters() {
        let mut tw = writer(&["héllo ✨"]);
        let mut last = String::new();
        while tw.phase() != Phase::Paused {
            last = tw.tick().text.unwrap();
        }
        assert_eq!(last, "héllo ✨");
    }

    #[test]
    fn test_empty_role_string_is_skipped_quickly() {
        let mut tw = writer(&["", "a"]);
        assert_eq!(tw.tick().text.as_deref(), Some(""));
        assert_eq!(tw.phase(), Phase::Paused);
        tw.tick(); // hold
        tw.tick(); // delete (already empty)
        assert_eq!(tw.phase(), Phase::Advancing);
        assert_eq!(tw.tick().text.as_deref(), Some("a"));
        assert_eq!(tw.role_index(), 1);
    }

    proptest! {
        #[test]
        fn prop_every_role_typed_then_emptied_in_order(
            roles in prop::collection::vec("[a-zA-Z ]{1,12}", 1..6)
        ) {
            let mut tw = Typewriter::new(&roles, TypewriterTimings::default()).unwrap();
            // Two full laps so the wrap back to the first role is covered
            for lap in 0..2 {
                for (i, role) in roles.iter().enumerate() {
                    let mut text = String::new();
                    while text != *role {
                        if let Some(t) = tw.tick().text {
                            text = t;
                        }
                    }
                    prop_assert_eq!(tw.role_index(), i, "lap {}", lap);
                    while !text.is_empty() {
                        if let Some(t) = tw.tick().text {
                            prop_assert!(role.starts_with(&t));
                            text = t;
                        }
                    }
                    prop_assert_eq!(tw.phase(), Phase::Advancing);
                }
            }
        }
    }
}
