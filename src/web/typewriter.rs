//! Role text typewriter

use web_sys::Element;

use super::dom;
use crate::config::SiteConfig;
use crate::error::Result;
use crate::fx::{Typewriter, timer_delay};

pub fn init(config: &SiteConfig) -> Result<()> {
    let el = dom::query(".role-text")?;
    let Some(writer) = Typewriter::new(&config.roles, config.typewriter) else {
        return Ok(());
    };
    let delay = writer.start_delay_ms();
    schedule(writer, el, delay);
    Ok(())
}

/// One timeout per tick; each tick decides the next delay
fn schedule(mut writer: Typewriter, el: Element, delay_ms: u32) {
    dom::set_timeout(timer_delay(delay_ms), move || {
        let frame = writer.tick();
        if let Some(text) = frame.text {
            el.set_text_content(Some(&text));
        }
        schedule(writer, el, frame.delay_ms);
    });
}
