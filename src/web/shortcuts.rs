//! Single-key section shortcuts

use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent};

use super::dom;
use crate::config::SiteConfig;
use crate::consts::SHORTCUT_FLASH_MS;
use crate::error::Result;
use crate::fx::{ShortcutMap, is_typing_target};

pub fn init(config: &SiteConfig) -> Result<()> {
    let shortcuts = ShortcutMap::new(&config.shortcuts);
    log::info!("🎹 Keyboard Shortcuts");
    log::info!("{}", shortcuts.help_line());

    dom::listen(&dom::document()?, "keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        // Leave browser and OS combos alone
        if event.ctrl_key() || event.meta_key() || event.alt_key() {
            return;
        }
        let typing = event
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .is_some_and(|el| is_typing_target(&el.tag_name()));
        if typing {
            return;
        }
        let Some(id) = shortcuts.section_for(&event.key()) else {
            return;
        };
        event.prevent_default();
        let Some(target) = dom::by_id(id) else {
            return;
        };

        dom::smooth_scroll_into_view(&target);
        dom::set_style(&target, "box-shadow", "0 0 30px rgba(88, 101, 242, 0.5)");
        dom::set_timeout(SHORTCUT_FLASH_MS, move || dom::set_style(&target, "box-shadow", ""));
    })
}
