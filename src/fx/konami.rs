//! Konami code detection

/// Key values (`KeyboardEvent.key`) in order
pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

/// Progress through the sequence
#[derive(Debug, Clone, Default)]
pub struct KonamiTracker {
    index: usize,
}

impl KonamiTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn progress(&self) -> usize {
        self.index
    }

    /// Feed one key. Returns true when the sequence just completed.
    ///
    /// A wrong key resets progress to zero; it is not re-checked as the
    /// start of a new attempt.
    pub fn press(&mut self, key: &str) -> bool {
        if key != KONAMI_SEQUENCE[self.index] {
            self.index = 0;
            return false;
        }
        self.index += 1;
        if self.index == KONAMI_SEQUENCE.len() {
            self.index = 0;
            return true;
        }
        false
    }
}
