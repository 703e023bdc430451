//! Konami code easter egg

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent};

use super::dom;
use crate::consts::{EGG_MESSAGE_HOLD_MS, EGG_MESSAGE_IN_MS, EGG_MESSAGE_OUT_MS};
use crate::error::Result;
use crate::fx::{ConfettiPiece, KonamiTracker, confetti_burst};

const MESSAGE_CSS: &str = "position: fixed; top: 50%; left: 50%; \
     transform: translate(-50%, -50%) scale(0.8); \
     background: linear-gradient(135deg, rgba(18, 18, 26, 0.98), rgba(26, 26, 36, 0.98)); \
     backdrop-filter: blur(20px); padding: 3rem; border-radius: 1.5rem; \
     border: 2px solid var(--color-accent); z-index: 10001; text-align: center; \
     box-shadow: 0 20px 60px rgba(0, 0, 0, 0.8), 0 0 100px rgba(88, 101, 242, 0.5); opacity: 0;";

const MESSAGE_HTML: &str = r#"
<h2 style="color: #5865f2; margin-bottom: 1rem; font-size: 2.5rem; font-family: 'Syne', sans-serif;">🎮 Achievement Unlocked!</h2>
<p style="color: #e8e8f0; font-size: 1.25rem; margin-bottom: 0.5rem;">You found the secret Konami Code!</p>
<p style="color: #9999a8; font-size: 1rem;">A true developer of culture 🎉</p>
"#;

pub fn init() -> Result<()> {
    let mut tracker = KonamiTracker::new();
    dom::listen(&dom::document()?, "keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if tracker.press(&event.key()) {
            if let Err(e) = activate() {
                log::debug!("Easter egg failed: {}", e);
            }
        }
    })
}

fn activate() -> Result<()> {
    let body = dom::body()?;
    let fall_px = dom::window()?.inner_height()?.as_f64().unwrap_or(800.0);

    for piece in confetti_burst(js_sys::Date::now() as u64) {
        let body = body.clone();
        dom::set_timeout(piece.delay_ms, move || {
            if let Err(e) = drop_piece(&body, &piece, fall_px) {
                log::debug!("Confetti piece skipped: {}", e);
            }
        });
    }
    show_message(&body)?;

    log::info!("🎮 KONAMI CODE ACTIVATED!");
    log::info!("✨ Pure magic!");
    Ok(())
}

fn drop_piece(body: &HtmlElement, piece: &ConfettiPiece, fall_px: f64) -> Result<()> {
    let el = dom::document()?.create_element("div")?;
    el.set_attribute("style", &piece.start_css())?;
    body.append_child(&el)?;

    // Force layout so the start position is committed before the transition
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.offset_height();
    }
    dom::set_style(&el, "transition", &piece.transition_css());
    dom::set_style(&el, "transform", &piece.end_transform(fall_px));
    dom::set_style(&el, "opacity", "0");

    dom::set_timeout(piece.duration_ms as i32, move || el.remove());
    Ok(())
}

fn show_message(body: &HtmlElement) -> Result<()> {
    let message = dom::document()?.create_element("div")?;
    message.set_attribute("style", MESSAGE_CSS)?;
    message.set_inner_html(MESSAGE_HTML);
    body.append_child(&message)?;

    let entering = message.clone();
    dom::set_timeout(EGG_MESSAGE_IN_MS, move || {
        dom::set_style(
            &entering,
            "transition",
            "all 0.5s cubic-bezier(0.68, -0.55, 0.265, 1.55)",
        );
        dom::set_style(&entering, "opacity", "1");
        dom::set_style(&entering, "transform", "translate(-50%, -50%) scale(1)");
    });

    dom::set_timeout(EGG_MESSAGE_HOLD_MS, move || {
        dom::set_style(&message, "transition", "all 0.3s ease");
        dom::set_style(&message, "opacity", "0");
        dom::set_style(&message, "transform", "translate(-50%, -50%) scale(0.8)");
        dom::set_timeout(EGG_MESSAGE_OUT_MS, move || message.remove());
    });
    Ok(())
}
