//! Reveal-on-scroll

use super::dom;
use crate::consts::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::error::Result;
use crate::fx::{parse_delay, timer_delay};

pub fn init() -> Result<()> {
    let elements = dom::query_all("[data-reveal]")?;
    dom::observe_once(elements, REVEAL_THRESHOLD, Some(REVEAL_ROOT_MARGIN), |el| {
        let delay = parse_delay(el.get_attribute("data-delay").as_deref());
        let el = el.clone();
        dom::set_timeout(timer_delay(delay), move || dom::add_class(&el, "revealed"));
    })
}
