//! Copy-email button

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, HtmlDocument, HtmlTextAreaElement};

use super::dom;
use crate::config::SiteConfig;
use crate::consts::COPY_LABEL_MS;
use crate::error::{FxError, Result};
use crate::fx::{ConfirmStep, CopyOutcome, resolve_copy};

const COPIED_LABEL: &str = r#"<i class="fas fa-check"></i> <span class="btn-text">Copied!</span>"#;

pub fn init(config: &SiteConfig) -> Result<()> {
    let button = dom::query("#copy-email-btn")?;
    dom::query("#copy-success")?;

    let email = config.email.clone();
    let clicked = button.clone();
    dom::listen(&button, "click", move |_| {
        let email = email.clone();
        let button = clicked.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let native = write_native(&email).await;
            let outcome = resolve_copy(native, || legacy_copy(&email));
            log::debug!("Email copy: {:?}", outcome);
            show_confirmation(outcome);
            if outcome.swaps_button_label() {
                swap_label(&button);
            }
        });
    })
}

/// `navigator.clipboard.writeText`, looked up dynamically since older
/// browsers and insecure contexts don't expose it
async fn write_native(text: &str) -> Result<()> {
    let navigator = dom::window()?.navigator();
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(FxError::Js("navigator.clipboard unavailable".into()));
    }
    let write: js_sys::Function =
        js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))?.dyn_into()?;
    let promise: js_sys::Promise = write
        .call1(&clipboard, &JsValue::from_str(text))?
        .dyn_into()?;
    JsFuture::from(promise).await?;
    Ok(())
}

/// Hidden textarea + `execCommand("copy")`
fn legacy_copy(text: &str) -> bool {
    let attempt = || -> Result<bool> {
        let document = dom::document()?;
        let body = dom::body()?;
        let area: HtmlTextAreaElement = document
            .create_element("textarea")?
            .dyn_into()
            .map_err(|_| FxError::Js("textarea is not an HtmlTextAreaElement".into()))?;
        area.set_value(text);
        dom::set_style(&area, "position", "fixed");
        dom::set_style(&area, "opacity", "0");
        body.append_child(&area)?;
        area.select();

        let copied = document
            .dyn_into::<HtmlDocument>()
            .map_err(|_| FxError::Js("document is not an HtmlDocument".into()))
            .and_then(|doc| Ok(doc.exec_command("copy")?));
        let _ = body.remove_child(&area);
        copied
    };

    attempt().unwrap_or_else(|e| {
        log::debug!("Legacy copy failed: {}", e);
        false
    })
}

fn show_confirmation(outcome: CopyOutcome) {
    let Ok(message) = dom::query("#copy-success") else {
        return;
    };
    for (delay, step) in outcome.confirmation_timeline() {
        let message = message.clone();
        dom::set_timeout(delay, move || match step {
            ConfirmStep::Show => {
                dom::add_class(&message, "show");
                dom::set_style(&message, "display", "block");
            }
            ConfirmStep::Fade => dom::remove_class(&message, "show"),
            ConfirmStep::Hide => dom::set_style(&message, "display", "none"),
        });
    }
}

fn swap_label(button: &Element) {
    let original = button.inner_html();
    if original == COPIED_LABEL {
        return;
    }
    button.set_inner_html(COPIED_LABEL);
    let button = button.clone();
    dom::set_timeout(COPY_LABEL_MS, move || button.set_inner_html(&original));
}
