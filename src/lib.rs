//! Folio FX - portfolio page interactivity in WebAssembly
//!
//! Core modules:
//! - `fx`: Pure behavior models (typewriter, scroll spy, counters, filters, konami)
//! - `web`: DOM wiring for the browser (wasm32 only)
//! - `config`: Page content and typewriter timings
//! - `error`: Errors raised while wiring the DOM

pub mod config;
pub mod error;
pub mod fx;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::{SiteConfig, TypewriterTimings};
pub use error::FxError;

/// Fixed timings and thresholds
pub mod consts {
    /// Scroll handler rate limit (ms)
    pub const SCROLL_THROTTLE_MS: f64 = 100.0;
    /// Resize handler debounce (ms)
    pub const RESIZE_DEBOUNCE_MS: f64 = 250.0;

    /// Nav gets the `scrolled` class at or past this offset (px)
    pub const NAV_SCROLLED_THRESHOLD: f64 = 100.0;
    /// Added to scroll position before picking the active section (px)
    pub const SCROLL_SPY_OFFSET: f64 = 150.0;
    /// Scroll-to-top button shows past this offset (px)
    pub const SCROLL_TOP_THRESHOLD: f64 = 500.0;
    /// Fixed header height subtracted from anchor targets (px)
    pub const ANCHOR_HEADER_OFFSET: f64 = 80.0;

    /// Reveal observer settings
    pub const REVEAL_THRESHOLD: f64 = 0.1;
    pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
    /// Counter observer threshold
    pub const COUNTER_THRESHOLD: f64 = 0.5;
    /// Counter animation budget (ms) and assumed frame length (ms)
    pub const COUNTER_DURATION_MS: f64 = 2000.0;
    pub const COUNTER_FRAME_MS: f64 = 16.0;

    /// Per-card entrance stagger (s)
    pub const FILTER_STAGGER_S: f64 = 0.1;
    /// Delay before re-applying the entrance animation (ms)
    pub const FILTER_RESTART_MS: i32 = 10;
    /// Exit transition length before `display: none` (ms)
    pub const FILTER_HIDE_MS: i32 = 300;

    /// Copy confirmation visible time, then fade-out time (ms)
    pub const COPY_CONFIRM_MS: i32 = 3000;
    pub const COPY_FADE_MS: i32 = 300;
    /// "Copied!" button label lifetime (ms)
    pub const COPY_LABEL_MS: i32 = 2000;

    /// Cosmetic effect lifetimes (ms)
    pub const ANCHOR_PULSE_MS: i32 = 300;
    pub const RIPPLE_MS: i32 = 600;
    pub const ICON_BOUNCE_MS: i32 = 500;
    pub const SCROLL_TOP_SPIN_MS: i32 = 600;
    pub const SHORTCUT_FLASH_MS: i32 = 500;

    /// Konami confetti
    pub const CONFETTI_COUNT: usize = 150;
    pub const CONFETTI_INTERVAL_MS: i32 = 15;
    pub const CONFETTI_COLORS: [&str; 5] = ["#5865f2", "#7289ff", "#ffffff", "#9999a8", "#e8e8f0"];
    /// Easter egg message timeline (ms)
    pub const EGG_MESSAGE_IN_MS: i32 = 100;
    pub const EGG_MESSAGE_HOLD_MS: i32 = 4000;
    pub const EGG_MESSAGE_OUT_MS: i32 = 300;
}
