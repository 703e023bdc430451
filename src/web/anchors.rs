//! Smooth scrolling for in-page links

use super::dom;
use crate::consts::ANCHOR_PULSE_MS;
use crate::error::Result;
use crate::fx::{anchor_scroll_top, anchor_target};

pub fn init() -> Result<()> {
    for anchor in dom::query_all(r##"a[href^="#"]"##)? {
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |event| {
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(id) = anchor_target(&href) else {
                return;
            };
            event.prevent_default();
            let Some(target) = dom::by_id(id) else {
                return;
            };

            dom::smooth_scroll_to(anchor_scroll_top(dom::offset_top(&target)));

            dom::set_style(&target, "transition", "all 0.3s ease");
            dom::set_style(&target, "transform", "scale(1.01)");
            dom::set_timeout(ANCHOR_PULSE_MS, move || {
                dom::set_style(&target, "transform", "scale(1)");
            });
        })?;
    }
    Ok(())
}
