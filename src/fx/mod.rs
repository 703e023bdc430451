//! Pure behavior models
//!
//! Everything that decides *what* the page should show lives here, with no
//! DOM access. The `web` module feeds these models events and timestamps and
//! applies the results:
//! - Time comes in as milliseconds from the caller
//! - Randomness comes from a seeded RNG
//! - Each model is owned by exactly one behavior

pub mod anchors;
pub mod clipboard;
pub mod confetti;
pub mod counter;
pub mod filter;
pub mod konami;
pub mod menu;
pub mod nav;
pub mod perf;
pub mod rate;
pub mod reveal;
pub mod shortcuts;
pub mod typewriter;

pub use anchors::{anchor_target, anchor_scroll_top};
pub use clipboard::{ConfirmStep, CopyOutcome, resolve_copy};
pub use confetti::{ConfettiPiece, confetti_burst};
pub use counter::{CounterAnimation, CounterFrame, parse_count};
pub use filter::{CardAction, Filter, ProjectFilter, entrance_animation};
pub use konami::{KONAMI_SEQUENCE, KonamiTracker};
pub use menu::MenuState;
pub use nav::{SectionBounds, active_section, is_scrolled, link_targets_section, show_scroll_top};
pub use perf::PerfMetrics;
pub use rate::{Debounce, Throttle, timer_delay};
pub use reveal::{OnceGate, parse_delay};
pub use shortcuts::{ShortcutMap, is_typing_target};
pub use typewriter::{Frame, Phase, Typewriter};
