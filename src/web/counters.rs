//! Statistic counters

use web_sys::Element;

use super::dom;
use crate::consts::COUNTER_THRESHOLD;
use crate::error::Result;
use crate::fx::{CounterAnimation, parse_count};

pub fn init() -> Result<()> {
    let counters = dom::query_all(".stat-number[data-count]")?;
    dom::observe_once(counters, COUNTER_THRESHOLD, None, |el| {
        let Some(target) = el.get_attribute("data-count").as_deref().and_then(parse_count) else {
            log::debug!("Counter without a numeric data-count, skipping");
            return;
        };
        let suffix = el.get_attribute("data-suffix").unwrap_or_default();
        animate(el.clone(), CounterAnimation::new(target, suffix));
    })
}

fn animate(el: Element, mut animation: CounterAnimation) {
    let frame = animation.advance();
    el.set_text_content(Some(&frame.text));
    if !frame.done {
        dom::request_frame(move |_| animate(el, animation));
    }
}
