//! Scroll-to-top button

use super::dom;
use crate::consts::SCROLL_TOP_SPIN_MS;
use crate::error::Result;
use crate::fx::show_scroll_top;

pub fn init() -> Result<()> {
    let button = dom::query("#scrollToTop")?;

    {
        let button = button.clone();
        dom::on_scroll(move || {
            dom::set_class(&button, "visible", show_scroll_top(dom::scroll_y()));
        })?;
    }

    let spun = button.clone();
    dom::listen(&button, "click", move |_| {
        dom::smooth_scroll_to(0.0);
        dom::set_style(&spun, "transform", "scale(1) rotate(360deg)");
        let spun = spun.clone();
        dom::set_timeout(SCROLL_TOP_SPIN_MS, move || dom::set_style(&spun, "transform", ""));
    })
}
