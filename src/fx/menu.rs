//! Mobile navigation menu

/// Open/closed state shared by the toggle, link list and backdrop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// `overflow` for the body; scrolling is locked while open
    pub fn body_overflow(&self) -> &'static str {
        if self.open { "hidden" } else { "" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_locks_scroll() {
        let mut menu = MenuState::default();
        assert_eq!(menu.body_overflow(), "");
        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.body_overflow(), "hidden");
        menu.close();
        assert!(!menu.is_open());
        assert_eq!(menu.body_overflow(), "");
    }
}
