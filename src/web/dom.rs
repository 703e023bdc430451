//! Small DOM helpers shared by the behaviors

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions,
    ScrollToOptions, Window,
};

use crate::consts::SCROLL_THROTTLE_MS;
use crate::error::{FxError, Result};
use crate::fx::{Debounce, OnceGate, Throttle};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(FxError::MissingElement("window"))
}

pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or(FxError::MissingElement("document"))
}

pub fn body() -> Result<HtmlElement> {
    document()?.body().ok_or(FxError::MissingElement("body"))
}

/// First element matching `selector`
pub fn query(selector: &'static str) -> Result<Element> {
    document()?
        .query_selector(selector)?
        .ok_or(FxError::MissingElement(selector))
}

/// Every element matching `selector`, in document order
pub fn query_all(selector: &str) -> Result<Vec<Element>> {
    let list = document()?.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Element by id (no leading '#')
pub fn by_id(id: &str) -> Option<Element> {
    document().ok()?.get_element_by_id(id)
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| Ok(w.scroll_y()?)).unwrap_or(0.0)
}

pub fn offset_top(el: &Element) -> f64 {
    el.dyn_ref::<HtmlElement>()
        .map(|el| el.offset_top() as f64)
        .unwrap_or(0.0)
}

pub fn add_class(el: &Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

pub fn remove_class(el: &Element, class: &str) {
    let _ = el.class_list().remove_1(class);
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

/// Set one inline style property; an empty value clears it
pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(el) = el.dyn_ref::<HtmlElement>() {
        let style = el.style();
        let _ = if value.is_empty() {
            style.remove_property(property).map(|_| ())
        } else {
            style.set_property(property, value)
        };
    }
}

pub fn smooth_scroll_to(top: f64) {
    let Ok(window) = window() else { return };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn smooth_scroll_into_view(el: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Run `f` once after `ms`
pub fn set_timeout(ms: i32, f: impl FnOnce() + 'static) {
    let Ok(window) = window() else { return };
    let closure = Closure::once_into_js(f);
    let _ = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(closure.unchecked_ref(), ms);
}

/// Run `f` on the next animation frame
pub fn request_frame(f: impl FnOnce(f64) + 'static) {
    let Ok(window) = window() else { return };
    let closure = Closure::once_into_js(f);
    let _ = window.request_animation_frame(closure.unchecked_ref());
}

/// Attach a listener for the page lifetime
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<()> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Wrap `f` so it runs at most once per `limit_ms`
pub fn throttled(limit_ms: f64, mut f: impl FnMut() + 'static) -> impl FnMut() + 'static {
    let mut gate = Throttle::new(limit_ms);
    move || {
        if gate.try_fire(js_sys::Date::now()) {
            f();
        }
    }
}

/// Pending debounced call and the timer waiting for it
struct DebounceSlot {
    gate: Debounce,
    handle: Option<i32>,
    f: Box<dyn FnMut()>,
}

/// Wrap `f` so it runs once, `wait_ms` after the last call in a burst
pub fn debounced(wait_ms: f64, f: impl FnMut() + 'static) -> impl FnMut() + 'static {
    let slot = Rc::new(RefCell::new(DebounceSlot {
        gate: Debounce::new(wait_ms),
        handle: None,
        f: Box::new(f),
    }));
    move || {
        let Ok(window) = window() else { return };
        {
            let mut pending = slot.borrow_mut();
            if let Some(handle) = pending.handle.take() {
                window.clear_timeout_with_handle(handle);
            }
            pending.gate.trigger(js_sys::Date::now());
        }
        arm_debounce(&slot, wait_ms);
    }
}

/// Schedule a check of the debounce gate; an early timer re-arms for the rest
fn arm_debounce(slot: &Rc<RefCell<DebounceSlot>>, delay_ms: f64) {
    let Ok(window) = window() else { return };
    let fired = slot.clone();
    let closure = Closure::once_into_js(move || {
        let now = js_sys::Date::now();
        let mut pending = fired.borrow_mut();
        pending.handle = None;
        if pending.gate.poll(now) {
            (pending.f)();
            return;
        }
        let left = pending.gate.remaining(now);
        drop(pending);
        if let Some(left) = left {
            arm_debounce(&fired, left.max(1.0));
        }
    });
    let handle = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.unchecked_ref(),
            delay_ms.ceil() as i32,
        )
        .ok();
    slot.borrow_mut().handle = handle;
}

/// Run `handler` now and on every (throttled) scroll
pub fn on_scroll(mut handler: impl FnMut() + 'static) -> Result<()> {
    handler();
    let mut handler = throttled(SCROLL_THROTTLE_MS, handler);
    listen(&window()?, "scroll", move |_| handler())
}

/// Call `on_enter` the first time each element intersects the viewport,
/// then stop observing it
pub fn observe_once(
    elements: Vec<Element>,
    threshold: f64,
    root_margin: Option<&str>,
    mut on_enter: impl FnMut(&Element) + 'static,
) -> Result<()> {
    if elements.is_empty() {
        return Ok(());
    }

    let tracked = elements.clone();
    let mut gate = OnceGate::new();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                let Some(index) = tracked.iter().position(|el| *el == target) else {
                    continue;
                };
                if gate.fire(index) {
                    on_enter(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    for el in &elements {
        observer.observe(el);
    }
    callback.forget();
    Ok(())
}
