// Browser entry point. `Portfolio::start` wires the particle backdrop and
// the page effects to the DOM and owns everything it creates; dropping it
// (or calling `stop`) tears the loops and listeners down again.

mod animation;
mod canvas;
mod listener;
mod page;

pub use animation::{AnimationLoop, TimeoutLoop};
pub use canvas::CanvasSurface;
pub use listener::EventListener;

use crate::config::FieldConfig;
use crate::events::{Dispatcher, EventKind, PageEvent};
use crate::field::ParticleField;
use crate::schedule::Control;
use crate::typing::TypingEffect;
use crate::utils;
use rand::rngs::ThreadRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, MouseEvent, Window};

/// The particle field together with the canvas it draws on.
struct Backdrop {
    field: ParticleField,
    surface: CanvasSurface,
    rng: ThreadRng,
}

impl Backdrop {
    fn resize(&mut self, width: f64, height: f64) {
        self.surface.resize(width as u32, height as u32);
        self.field.on_resize(&mut self.rng, width, height);
    }

    fn tick(&mut self) {
        if let Err(err) = self.field.tick(&mut self.surface) {
            console_warn!("particle frame failed: {:?}", err);
        }
    }
}

fn find_surface(document: &Document, canvas_id: &str) -> Result<Option<CanvasSurface>, JsValue> {
    let canvas = match document.get_element_by_id(canvas_id) {
        Some(element) => match element.dyn_into::<HtmlCanvasElement>() {
            Ok(canvas) => canvas,
            Err(_) => return Ok(None),
        },
        None => return Ok(None),
    };
    CanvasSurface::from_canvas(canvas)
}

// Hands an event to the dispatcher unless a handler is already running.
fn forward(dispatcher: &Rc<RefCell<Dispatcher>>, event: PageEvent) {
    match dispatcher.try_borrow_mut() {
        Ok(mut dispatcher) => {
            dispatcher.dispatch(&event);
        }
        Err(_) => console_warn!("dropped re-entrant {:?} event", event.kind()),
    }
}

fn now_ms(window: &Window) -> f64 {
    match window.performance() {
        Some(performance) => performance.now(),
        None => js_sys::Date::now(),
    }
}

#[wasm_bindgen]
pub struct Portfolio {
    backdrop: Option<Rc<RefCell<Backdrop>>>,
    animation: Option<AnimationLoop>,
    typing: Option<TimeoutLoop>,
    listeners: Vec<EventListener>,
}

#[wasm_bindgen]
impl Portfolio {
    /// Starts every effect on the page with the default particle count.
    pub fn start(canvas_id: &str) -> Result<Portfolio, JsValue> {
        Portfolio::start_with_count(canvas_id, FieldConfig::PARTICLE_COUNT as u32)
    }

    pub fn start_with_count(canvas_id: &str, particle_count: u32) -> Result<Portfolio, JsValue> {
        utils::set_panic_hook();
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let config = FieldConfig::default().with_count(particle_count as usize);

        let dispatcher = Rc::new(RefCell::new(Dispatcher::new()));
        let backdrop = match find_surface(&document, canvas_id)? {
            Some(surface) => {
                let (width, height) = page::viewport_size(&window)?;
                let mut backdrop = Backdrop {
                    field: ParticleField::new(config, width, height),
                    surface,
                    rng: rand::thread_rng(),
                };
                backdrop.resize(width, height);
                Some(Rc::new(RefCell::new(backdrop)))
            }
            None => {
                console_warn!("no 2d canvas #{}; particle background disabled", canvas_id);
                None
            }
        };

        {
            let mut d = dispatcher.borrow_mut();
            if let Some(backdrop) = &backdrop {
                let on_resize = backdrop.clone();
                d.on(EventKind::Resize, move |event| {
                    if let PageEvent::Resize { width, height } = *event {
                        on_resize.borrow_mut().resize(width, height);
                    }
                });
                let on_tick = backdrop.clone();
                d.on(EventKind::Tick, move |_| on_tick.borrow_mut().tick());
            }
            page::register_navbar(&mut d, &document);
            page::register_reveal(&mut d, &window, &document)?;
            page::register_active_link(&mut d, &document)?;
            page::register_cursor_trail(&mut d);
            page::register_contact_form(&mut d, &window, &document)?;
        }

        let mut listeners = Portfolio::attach_window_events(&window, &document, &dispatcher)?;
        listeners.extend(page::attach_element_effects(&window, &document)?);
        page::stagger_skills(&window, &document)?;

        let animation = match &backdrop {
            Some(backdrop) => {
                let backdrop = backdrop.clone();
                let dispatcher = dispatcher.clone();
                Some(AnimationLoop::start(move || {
                    if !backdrop.borrow().surface.is_attached() {
                        console_log!("particle canvas detached; stopping animation");
                        return Control::Stop;
                    }
                    forward(&dispatcher, PageEvent::Tick);
                    Control::Continue
                })?)
            }
            None => None,
        };

        let typing = match document.query_selector(".typing-text")? {
            Some(element) => {
                let mut effect = TypingEffect::headline();
                Some(TimeoutLoop::start(move || {
                    let step = effect.step();
                    element.set_text_content(Some(&step.text));
                    Some(step.delay_ms)
                })?)
            }
            None => None,
        };

        if let Some(body) = document.body() {
            body.class_list().add_1("loaded")?;
        }
        console_log!("Portfolio loaded successfully! ✨");

        Ok(Portfolio {
            backdrop,
            animation,
            typing,
            listeners,
        })
    }

    /// Number of live particles; zero when the backdrop is disabled.
    pub fn particle_count(&self) -> u32 {
        self.backdrop
            .as_ref()
            .map_or(0, |b| b.borrow().field.particles().len() as u32)
    }

    pub fn is_animating(&self) -> bool {
        self.animation.as_ref().map_or(false, AnimationLoop::is_running)
    }

    /// Cancels the animation and typing loops and removes every listener.
    pub fn stop(&mut self) {
        if let Some(animation) = self.animation.take() {
            animation.stop();
        }
        if let Some(typing) = self.typing.take() {
            typing.stop();
        }
        self.listeners.clear();
    }
}

impl Portfolio {
    fn attach_window_events(
        window: &Window,
        document: &Document,
        dispatcher: &Rc<RefCell<Dispatcher>>,
    ) -> Result<Vec<EventListener>, JsValue> {
        let mut listeners = Vec::new();

        let d = dispatcher.clone();
        let w = window.clone();
        listeners.push(EventListener::new(window, "scroll", move |_| {
            let offset_y = w.scroll_y().unwrap_or(0.0);
            forward(&d, PageEvent::Scroll { offset_y });
        })?);

        let d = dispatcher.clone();
        let w = window.clone();
        listeners.push(EventListener::new(window, "resize", move |_| {
            match page::viewport_size(&w) {
                Ok((width, height)) => forward(&d, PageEvent::Resize { width, height }),
                Err(err) => console_warn!("could not read viewport size: {:?}", err),
            }
        })?);

        let d = dispatcher.clone();
        let w = window.clone();
        listeners.push(EventListener::new(document, "mousemove", move |event| {
            if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                forward(
                    &d,
                    PageEvent::PointerMove {
                        x: mouse.client_x() as f64,
                        y: mouse.client_y() as f64,
                        time_ms: now_ms(&w),
                    },
                );
            }
        })?);

        if let Some(form) = document.query_selector(".contact-form")? {
            let d = dispatcher.clone();
            listeners.push(EventListener::new(&form, "submit", move |event| {
                event.prevent_default();
                forward(&d, PageEvent::Submit);
            })?);
        }

        Ok(listeners)
    }
}
