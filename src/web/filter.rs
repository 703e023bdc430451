//! Project category filter buttons

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Element;

use super::dom;
use crate::consts::{FILTER_HIDE_MS, FILTER_RESTART_MS};
use crate::error::{FxError, Result};
use crate::fx::{CardAction, Filter, ProjectFilter, entrance_animation};

pub fn init() -> Result<()> {
    let buttons = Rc::new(dom::query_all(".filter-btn")?);
    let cards = Rc::new(dom::query_all(".project-card")?);
    if buttons.is_empty() || cards.is_empty() {
        return Err(FxError::MissingElement(".filter-btn, .project-card"));
    }
    let state = Rc::new(RefCell::new(ProjectFilter::new()));

    for button in buttons.iter() {
        let (buttons, cards, state) = (buttons.clone(), cards.clone(), state.clone());
        let clicked = button.clone();
        dom::listen(button, "click", move |_| {
            for b in buttons.iter() {
                dom::remove_class(b, "active");
            }
            dom::add_class(&clicked, "active");

            let filter = Filter::parse(clicked.get_attribute("data-filter").as_deref());
            let categories: Vec<Option<String>> = cards
                .iter()
                .map(|c| c.get_attribute("data-category"))
                .collect();
            let actions = state
                .borrow_mut()
                .select(filter, categories.iter().map(Option::as_deref));

            for (card, action) in cards.iter().zip(actions) {
                apply(card, action);
            }
        })?;
    }
    Ok(())
}

fn apply(card: &Element, action: CardAction) {
    let card = card.clone();
    match action {
        CardAction::Show { stagger_s } => {
            dom::set_style(&card, "display", "");
            dom::remove_class(&card, "hidden");
            // Reset so the entrance animation replays
            dom::set_style(&card, "animation", "none");
            dom::set_timeout(FILTER_RESTART_MS, move || {
                dom::set_style(&card, "animation", &entrance_animation(stagger_s));
            });
        }
        CardAction::Hide => {
            dom::add_class(&card, "hidden");
            dom::set_timeout(FILTER_HIDE_MS, move || {
                // Skip if a later selection showed it again
                if card.class_list().contains("hidden") {
                    dom::set_style(&card, "display", "none");
                }
            });
        }
    }
}
