// DOM side of the page effects: looks elements up, applies classes and
// inline styles. The decisions themselves live in `scroll`, `pointer` and
// `typing`.
//
// Two behaviours of the old page script are not reproduced here. In-page
// anchor clicks are not intercepted for `scrollIntoView`: smooth scrolling
// comes from the stylesheet's `scroll-behavior: smooth`, and the click only
// closes the mobile menu. The reveal check runs on every dispatched scroll
// event, with no second debounced scroll listener.

use super::listener::EventListener;
use crate::events::{Dispatcher, EventKind, PageEvent};
use crate::pointer::{
    self, CursorTrail, DotEffect, Rect, Tilt, TrailPoint, DOT_RESTORE_MS, RIPPLE_LIFETIME_MS,
};
use crate::scroll::{self, RevealTracker, Section};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, MouseEvent, Window};

const THANK_YOU: &str = "Thank you for your message! I will get back to you soon.";
const SKILL_STAGGER_MS: i32 = 100;

pub fn query_all<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>, JsValue> {
    let nodes = document.query_selector_all(selector)?;
    let mut found = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(node) = nodes.item(i) {
            if let Ok(element) = node.dyn_into::<T>() {
                found.push(element);
            }
        }
    }
    Ok(found)
}

pub fn viewport_size(window: &Window) -> Result<(f64, f64), JsValue> {
    let width = window
        .inner_width()?
        .as_f64()
        .ok_or("innerWidth is not a number")?;
    let height = window
        .inner_height()?
        .as_f64()
        .ok_or("innerHeight is not a number")?;
    Ok((width, height))
}

fn rect_of(element: &Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect {
        left: r.left(),
        top: r.top(),
        width: r.width(),
        height: r.height(),
    }
}

fn run_later<F: FnOnce() + 'static>(window: &Window, delay_ms: i32, f: F) -> Result<i32, JsValue> {
    let callback = Closure::once_into_js(f);
    window.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay_ms)
}

pub fn register_navbar(dispatcher: &mut Dispatcher, document: &Document) {
    let navbar = match document.get_element_by_id("navbar") {
        Some(navbar) => navbar,
        None => return,
    };
    dispatcher.on(EventKind::Scroll, move |event| {
        if let PageEvent::Scroll { offset_y } = *event {
            let _ = navbar
                .class_list()
                .toggle_with_force("scrolled", scroll::navbar_scrolled(offset_y));
        }
    });
}

pub fn register_reveal(
    dispatcher: &mut Dispatcher,
    window: &Window,
    document: &Document,
) -> Result<(), JsValue> {
    let elements: Vec<Element> = query_all(document, ".reveal")?;
    if elements.is_empty() {
        return Ok(());
    }
    let mut tracker = RevealTracker::new(elements.len());
    let reveal = move |window: &Window, tracker: &mut RevealTracker| -> Result<(), JsValue> {
        let (_, height) = viewport_size(window)?;
        let tops: Vec<f64> = elements.iter().map(|e| e.get_bounding_client_rect().top()).collect();
        for i in tracker.check(height, &tops) {
            elements[i].class_list().add_1("reveal-active")?;
        }
        Ok(())
    };
    // first check before any scrolling
    reveal(window, &mut tracker)?;

    let window = window.clone();
    dispatcher.on(EventKind::Scroll, move |_| {
        if let Err(err) = reveal(&window, &mut tracker) {
            console_warn!("reveal check failed: {:?}", err);
        }
    });
    Ok(())
}

pub fn register_active_link(dispatcher: &mut Dispatcher, document: &Document) -> Result<(), JsValue> {
    let sections: Vec<HtmlElement> = query_all(document, "section[id]")?;
    let links: Vec<Element> = query_all(document, ".nav-link")?;
    if links.is_empty() {
        return Ok(());
    }
    dispatcher.on(EventKind::Scroll, move |event| {
        let offset_y = match *event {
            PageEvent::Scroll { offset_y } => offset_y,
            _ => return,
        };
        let layout: Vec<Section> = sections
            .iter()
            .map(|s| Section {
                id: s.id(),
                top: s.offset_top() as f64,
            })
            .collect();
        let target = scroll::active_section(offset_y, &layout).map(|id| format!("#{}", id));
        for link in &links {
            let active = target.is_some() && link.get_attribute("href") == target;
            let _ = link.class_list().toggle_with_force("active", active);
        }
    });
    Ok(())
}

pub fn register_cursor_trail(dispatcher: &mut Dispatcher) {
    let mut trail = CursorTrail::new();
    dispatcher.on(EventKind::PointerMove, move |event| {
        if let PageEvent::PointerMove { x, y, time_ms } = *event {
            trail.push(TrailPoint { x, y, time_ms });
        }
    });
}

pub fn register_contact_form(dispatcher: &mut Dispatcher, window: &Window, document: &Document) -> Result<(), JsValue> {
    let form = match document.query_selector(".contact-form")? {
        Some(form) => form.dyn_into::<HtmlFormElement>()?,
        None => return Ok(()),
    };
    let window = window.clone();
    dispatcher.on(EventKind::Submit, move |_| {
        if let Err(err) = window.alert_with_message(THANK_YOU) {
            console_warn!("alert failed: {:?}", err);
        }
        form.reset();
    });
    Ok(())
}

/// Listeners bound to individual elements rather than routed through the
/// dispatcher: they need the element they fired on.
pub fn attach_element_effects(window: &Window, document: &Document) -> Result<Vec<EventListener>, JsValue> {
    let mut listeners = Vec::new();

    for card in query_all::<HtmlElement>(document, ".project-card")? {
        let target = card.clone();
        listeners.push(EventListener::new(&card, "mousemove", move |event| {
            if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                let t = pointer::tilt(&rect_of(&target), mouse.client_x() as f64, mouse.client_y() as f64);
                let _ = target.style().set_property("transform", &t.to_css());
            }
        })?);
        let target = card.clone();
        listeners.push(EventListener::new(&card, "mouseleave", move |_| {
            let _ = target.style().set_property("transform", Tilt::rest_css());
        })?);
    }

    for icon in query_all::<HtmlElement>(document, ".tech-icon")? {
        let target = icon.clone();
        listeners.push(EventListener::new(&icon, "mouseenter", move |_| {
            let _ = target.style().set_property("transform", "scale(1.3) rotate(360deg)");
        })?);
        let target = icon.clone();
        listeners.push(EventListener::new(&icon, "mouseleave", move |_| {
            let _ = target.style().set_property("transform", "scale(1) rotate(0deg)");
        })?);
    }

    if let Some(button) = document.query_selector(".btn-download")? {
        let document = document.clone();
        let window = window.clone();
        let target = button.clone();
        listeners.push(EventListener::new(&button, "click", move |event| {
            if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                if let Err(err) = spawn_ripple(&window, &document, &target, mouse) {
                    console_warn!("ripple failed: {:?}", err);
                }
            }
        })?);
    }

    for (index, dot) in query_all::<Element>(document, ".dot")?.into_iter().enumerate() {
        let effect = match pointer::dot_effect(index) {
            Some(effect) => effect,
            None => continue,
        };
        let window = window.clone();
        let target = dot.clone();
        listeners.push(EventListener::new(&dot, "click", move |_| {
            if let Err(err) = play_dot_effect(&window, &target, effect) {
                console_warn!("code window effect failed: {:?}", err);
            }
        })?);
    }

    let hamburger = document.query_selector(".hamburger")?;
    let menu = document.query_selector(".nav-links")?;
    if let (Some(hamburger), Some(menu)) = (hamburger, menu) {
        let target = hamburger.clone();
        let toggled = menu.clone();
        listeners.push(EventListener::new(&hamburger, "click", move |_| {
            let _ = toggled.class_list().toggle("active");
            let _ = target.class_list().toggle("active");
        })?);
        for anchor in query_all::<Element>(document, "a[href^=\"#\"]")? {
            let menu = menu.clone();
            listeners.push(EventListener::new(&anchor, "click", move |_| {
                let _ = menu.class_list().remove_1("active");
            })?);
        }
    }

    Ok(listeners)
}

fn spawn_ripple(window: &Window, document: &Document, button: &Element, mouse: &MouseEvent) -> Result<(), JsValue> {
    let r = pointer::ripple(&rect_of(button), mouse.client_x() as f64, mouse.client_y() as f64);
    let span = document.create_element("span")?.dyn_into::<HtmlElement>()?;
    let style = span.style();
    style.set_property("width", &format!("{}px", r.size))?;
    style.set_property("height", &format!("{}px", r.size))?;
    style.set_property("left", &format!("{}px", r.left))?;
    style.set_property("top", &format!("{}px", r.top))?;
    span.class_list().add_1("ripple")?;
    button.append_child(&span)?;
    run_later(window, RIPPLE_LIFETIME_MS, move || span.remove())?;
    Ok(())
}

fn play_dot_effect(window: &Window, dot: &Element, effect: DotEffect) -> Result<(), JsValue> {
    let code_window = match dot.closest(".code-window")? {
        Some(element) => element.dyn_into::<HtmlElement>()?,
        None => return Ok(()),
    };
    code_window.style().set_property(effect.property, effect.value)?;
    run_later(window, DOT_RESTORE_MS, move || {
        let _ = code_window
            .style()
            .set_property(effect.property, effect.restore);
    })?;
    Ok(())
}

/// Fades skill tags in one after another.
pub fn stagger_skills(window: &Window, document: &Document) -> Result<(), JsValue> {
    let items: Vec<HtmlElement> = query_all(document, ".skill-item")?;
    for (i, item) in items.into_iter().enumerate() {
        run_later(window, i as i32 * SKILL_STAGGER_MS, move || {
            let style = item.style();
            let _ = style.set_property("opacity", "1");
            let _ = style.set_property("transform", "translateY(0)");
        })?;
    }
    Ok(())
}
