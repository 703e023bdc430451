//! Orbiting tech icon hover effects

use web_sys::Element;

use super::dom;
use crate::consts::{ICON_BOUNCE_MS, RIPPLE_MS};
use crate::error::{FxError, Result};

const KEYFRAMES_ID: &str = "ripple-animation";

const KEYFRAMES: &str = "
@keyframes ripple {
    from { transform: scale(0); opacity: 1; }
    to { transform: scale(2); opacity: 0; }
}
@keyframes iconBounce {
    0%, 100% { transform: translateX(-50%) scale(1); }
    50% { transform: translateX(-50%) scale(1.3); }
}
";

const RIPPLE_CSS: &str = "position: absolute; width: 100%; height: 100%; border-radius: 50%; \
     border: 2px solid var(--color-accent); animation: ripple 0.6s ease-out; pointer-events: none;";

pub fn init() -> Result<()> {
    for icon in dom::query_all(".tech-icon")? {
        {
            let icon_ref = icon.clone();
            dom::listen(&icon, "mouseenter", move |_| {
                set_orbit_state(&icon_ref, "paused");
                if let Err(e) = spawn_ripple(&icon_ref) {
                    log::debug!("Ripple skipped: {}", e);
                }
            })?;
        }
        {
            let icon_ref = icon.clone();
            dom::listen(&icon, "mouseleave", move |_| set_orbit_state(&icon_ref, "running"))?;
        }
        {
            // Tap feedback for touch screens
            let icon_ref = icon.clone();
            dom::listen(&icon, "click", move |_| {
                dom::set_style(&icon_ref, "animation", "iconBounce 0.5s ease");
                let icon_ref = icon_ref.clone();
                dom::set_timeout(ICON_BOUNCE_MS, move || dom::set_style(&icon_ref, "animation", ""));
            })?;
        }
    }
    inject_keyframes()
}

fn set_orbit_state(icon: &Element, state: &str) {
    if let Ok(Some(ring)) = icon.closest(".orbit-ring") {
        dom::set_style(&ring, "animation-play-state", state);
    }
}

fn spawn_ripple(icon: &Element) -> Result<()> {
    let ripple = dom::document()?.create_element("div")?;
    ripple.set_attribute("style", RIPPLE_CSS)?;
    icon.append_child(&ripple)?;
    dom::set_timeout(RIPPLE_MS, move || ripple.remove());
    Ok(())
}

/// Add the keyframes once per page
fn inject_keyframes() -> Result<()> {
    let document = dom::document()?;
    if document.get_element_by_id(KEYFRAMES_ID).is_some() {
        return Ok(());
    }
    let style = document.create_element("style")?;
    style.set_id(KEYFRAMES_ID);
    style.set_text_content(Some(KEYFRAMES));
    document
        .head()
        .ok_or(FxError::MissingElement("head"))?
        .append_child(&style)?;
    Ok(())
}
