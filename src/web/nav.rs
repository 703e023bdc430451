//! Navigation bar: mobile menu, scrolled style, active section link

use std::cell::Cell;
use std::rc::Rc;

use web_sys::Element;

use super::dom;
use crate::error::Result;
use crate::fx::{MenuState, SectionBounds, active_section, is_scrolled, link_targets_section};

pub fn init() -> Result<()> {
    if let Err(e) = init_menu() {
        log::debug!("Mobile menu disabled: {}", e);
    }

    if let Ok(nav) = dom::query("#nav") {
        dom::on_scroll(move || dom::set_class(&nav, "scrolled", is_scrolled(dom::scroll_y())))?;
    }

    let links = dom::query_all(".nav-link")?;
    dom::on_scroll(move || {
        let sections = section_bounds();
        let Some(active) = active_section(&sections, dom::scroll_y()) else {
            return;
        };
        for link in &links {
            let href = link.get_attribute("href").unwrap_or_default();
            dom::set_class(link, "active", link_targets_section(&href, active));
        }
    })
}

/// Read section offsets fresh; layout changes with images and fonts
fn section_bounds() -> Vec<SectionBounds> {
    dom::query_all("section[id]")
        .unwrap_or_default()
        .iter()
        .map(|s| SectionBounds::new(s.id(), dom::offset_top(s)))
        .collect()
}

fn init_menu() -> Result<()> {
    let toggle = dom::query("#navToggle")?;
    let parts = Rc::new(vec![
        toggle.clone(),
        dom::query("#navLinks")?,
        dom::query("#menuBackdrop")?,
    ]);
    let menu = Rc::new(Cell::new(MenuState::default()));

    {
        let (parts, menu) = (parts.clone(), menu.clone());
        dom::listen(&toggle, "click", move |_| {
            let mut state = menu.get();
            state.toggle();
            menu.set(state);
            apply_menu(&parts, state);
        })?;
    }

    let mut closers = dom::query_all(".nav-link")?;
    closers.push(parts[2].clone());
    for closer in closers {
        let (parts, menu) = (parts.clone(), menu.clone());
        dom::listen(&closer, "click", move |_| {
            let mut state = menu.get();
            state.close();
            menu.set(state);
            apply_menu(&parts, state);
        })?;
    }
    Ok(())
}

fn apply_menu(parts: &[Element], state: MenuState) {
    for el in parts {
        dom::set_class(el, "active", state.is_open());
    }
    if let Ok(body) = dom::body() {
        dom::set_style(&body, "overflow", state.body_overflow());
    }
}
