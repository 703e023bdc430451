//! Page-level events: load fade, performance log, resize and visibility

use super::dom;
use crate::consts::RESIZE_DEBOUNCE_MS;
use crate::error::Result;
use crate::fx::PerfMetrics;

/// Fade the body in and log timings once the page has loaded
pub fn init_load_fade() -> Result<()> {
    if dom::document()?.ready_state() == "complete" {
        on_load();
        return Ok(());
    }
    dom::listen(&dom::window()?, "load", |_| on_load())
}

fn on_load() {
    fade_in();
    // loadEventEnd is only recorded after the load handlers return
    dom::set_timeout(0, log_performance);
}

fn fade_in() {
    let Ok(body) = dom::body() else {
        return;
    };
    dom::set_style(&body, "opacity", "0");
    dom::request_frame(move |_| {
        dom::set_style(&body, "transition", "opacity 0.6s ease");
        dom::set_style(&body, "opacity", "1");
    });
}

fn log_performance() {
    let Some(timing) = web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.timing())
    else {
        return;
    };
    PerfMetrics {
        navigation_start: timing.navigation_start(),
        dom_content_loaded_end: timing.dom_content_loaded_event_end(),
        load_event_end: timing.load_event_end(),
    }
    .log();
}

pub fn init_page_events() -> Result<()> {
    let mut on_resize = dom::debounced(RESIZE_DEBOUNCE_MS, || {
        log::info!("📱 Window resized - layout adjusted");
    });
    dom::listen(&dom::window()?, "resize", move |_| on_resize())?;

    let document = dom::document()?;
    let watched = document.clone();
    dom::listen(&document, "visibilitychange", move |_| {
        if watched.hidden() {
            log::info!("👋 See you soon!");
        } else {
            log::info!("👋 Welcome back!");
        }
    })
}
