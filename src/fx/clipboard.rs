//! Clipboard copy outcome
//!
//! The platform API is tried first; the legacy selection copy runs only
//! when it fails. Either way the visitor sees the confirmation.

use crate::consts::{COPY_CONFIRM_MS, COPY_FADE_MS};

/// One change to the `#copy-success` message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmStep {
    /// Add `show` and set `display: block`
    Show,
    /// Remove `show` so the message fades out
    Fade,
    /// Set `display: none`
    Hide,
}

/// Which path ended up handling the copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// `navigator.clipboard.writeText` resolved
    Native,
    /// Legacy hidden-textarea copy; `copied` is what `execCommand` reported
    Fallback { copied: bool },
}

impl CopyOutcome {
    /// Confirmation schedule as (delay from the copy in ms, step)
    ///
    /// Both paths confirm; a failed legacy copy still shows the message.
    pub fn confirmation_timeline(&self) -> [(i32, ConfirmStep); 3] {
        [
            (0, ConfirmStep::Show),
            (COPY_CONFIRM_MS, ConfirmStep::Fade),
            (COPY_CONFIRM_MS + COPY_FADE_MS, ConfirmStep::Hide),
        ]
    }

    /// Only the native path swaps the button label
    pub fn swaps_button_label(&self) -> bool {
        matches!(self, CopyOutcome::Native)
    }
}

/// Combine the native attempt with the fallback, which only runs on error
pub fn resolve_copy<E, F>(native: Result<(), E>, fallback: F) -> CopyOutcome
where
    E: std::fmt::Display,
    F: FnOnce() -> bool,
{
    match native {
        Ok(()) => CopyOutcome::Native,
        Err(e) => {
            log::debug!("Clipboard API unavailable ({}), using fallback", e);
            CopyOutcome::Fallback { copied: fallback() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_skips_fallback() {
        let mut ran = false;
        let outcome = resolve_copy::<String, _>(Ok(()), || {
            ran = true;
            true
        });
        assert_eq!(outcome, CopyOutcome::Native);
        assert!(!ran);
        assert!(outcome.swaps_button_label());
    }

    #[test]
    fn test_failure_uses_fallback_and_still_confirms() {
        let outcome = resolve_copy(Err("NotAllowedError"), || false);
        assert_eq!(outcome, CopyOutcome::Fallback { copied: false });
        assert_eq!(outcome.confirmation_timeline()[0], (0, ConfirmStep::Show));
        assert!(!outcome.swaps_button_label());
    }

    #[test]
    fn test_confirmation_timeline() {
        let expected = [
            (0, ConfirmStep::Show),
            (3000, ConfirmStep::Fade),
            (3300, ConfirmStep::Hide),
        ];
        for outcome in [
            CopyOutcome::Native,
            CopyOutcome::Fallback { copied: true },
            CopyOutcome::Fallback { copied: false },
        ] {
            let timeline = outcome.confirmation_timeline();
            assert_eq!(timeline, expected, "{:?}", outcome);
            assert!(timeline.windows(2).all(|w| w[0].0 < w[1].0));
        }
    }
}
