//! Browser wiring
//!
//! Each behavior reads its elements, attaches listeners for the page
//! lifetime, and drives the matching `fx` model. A missing element only
//! disables its own behavior.

pub mod anchors;
pub mod clipboard;
pub mod counters;
pub mod dom;
pub mod easter_egg;
pub mod filter;
pub mod lifecycle;
pub mod nav;
pub mod reveal;
pub mod scroll_top;
pub mod shortcuts;
pub mod tech_icons;
pub mod typewriter;

use crate::config::SiteConfig;
use crate::error::Result;

/// Install logging and run `init` once the DOM is ready
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("Logger already set: {}", e).into());
    }

    let Ok(document) = dom::document() else {
        return;
    };
    if document.ready_state() == "loading" {
        if let Err(e) = dom::listen(&document, "DOMContentLoaded", |_| init()) {
            log::warn!("Could not wait for DOMContentLoaded: {}", e);
        }
    } else {
        init();
    }
}

/// Wire every behavior
pub fn init() {
    log::info!("👋 Welcome to Afzan's Portfolio!");
    log::info!("✨ Built with passion and modern web technologies");
    log::info!("🚀 Enhanced with advanced animations and typewriter effect");

    let config = SiteConfig::load();

    let behaviors: [(&str, Result<()>); 13] = [
        ("typewriter", typewriter::init(&config)),
        ("navigation", nav::init()),
        ("reveal", reveal::init()),
        ("counters", counters::init()),
        ("project filter", filter::init()),
        ("copy email", clipboard::init(&config)),
        ("smooth scroll", anchors::init()),
        ("scroll to top", scroll_top::init()),
        ("tech icons", tech_icons::init()),
        ("keyboard shortcuts", shortcuts::init(&config)),
        ("easter egg", easter_egg::init()),
        ("load fade", lifecycle::init_load_fade()),
        ("page events", lifecycle::init_page_events()),
    ];

    for (name, result) in behaviors {
        if let Err(e) = result {
            log::debug!("{} disabled: {}", name, e);
        }
    }
}
