// Typed page events. DOM listeners translate browser events into a
// `PageEvent` and hand it to a `Dispatcher`, which calls the handlers
// registered for that kind in registration order.

use std::collections::HashMap;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PageEvent {
    Scroll { offset_y: f64 },
    Resize { width: f64, height: f64 },
    PointerMove { x: f64, y: f64, time_ms: f64 },
    Submit,
    Tick,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Scroll,
    Resize,
    PointerMove,
    Submit,
    Tick,
}

impl PageEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            PageEvent::Scroll { .. } => EventKind::Scroll,
            PageEvent::Resize { .. } => EventKind::Resize,
            PageEvent::PointerMove { .. } => EventKind::PointerMove,
            PageEvent::Submit => EventKind::Submit,
            PageEvent::Tick => EventKind::Tick,
        }
    }
}

pub type Handler = Box<dyn FnMut(&PageEvent)>;

#[derive(Default)]
pub struct Dispatcher {
    handlers: HashMap<EventKind, Vec<Handler>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Dispatcher::default()
    }

    pub fn on<F>(&mut self, kind: EventKind, handler: F)
    where
        F: FnMut(&PageEvent) + 'static,
    {
        self.handlers
            .entry(kind)
            .or_insert_with(Vec::new)
            .push(Box::new(handler));
    }

    /// Returns the number of handlers that ran.
    pub fn dispatch(&mut self, event: &PageEvent) -> usize {
        match self.handlers.get_mut(&event.kind()) {
            Some(handlers) => {
                for handler in handlers.iter_mut() {
                    handler(event);
                }
                handlers.len()
            }
            None => 0,
        }
    }

    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.handlers.get(&kind).map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn routes_by_kind_in_registration_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut dispatcher = Dispatcher::new();

        let log = seen.clone();
        dispatcher.on(EventKind::Scroll, move |e| log.borrow_mut().push(("first", *e)));
        let log = seen.clone();
        dispatcher.on(EventKind::Scroll, move |e| log.borrow_mut().push(("second", *e)));
        let log = seen.clone();
        dispatcher.on(EventKind::Resize, move |e| log.borrow_mut().push(("resize", *e)));

        let scroll = PageEvent::Scroll { offset_y: 120.0 };
        assert_eq!(dispatcher.dispatch(&scroll), 2);
        assert_eq!(*seen.borrow(), vec![("first", scroll), ("second", scroll)]);
    }

    #[test]
    fn unhandled_kind_is_a_no_op() {
        let mut dispatcher = Dispatcher::new();
        assert_eq!(dispatcher.dispatch(&PageEvent::Submit), 0);
        assert_eq!(dispatcher.handler_count(EventKind::Submit), 0);
    }

    #[test]
    fn kind_matches_variant() {
        let move_event = PageEvent::PointerMove {
            x: 1.0,
            y: 2.0,
            time_ms: 3.0,
        };
        assert_eq!(move_event.kind(), EventKind::PointerMove);
        assert_eq!(PageEvent::Tick.kind(), EventKind::Tick);
        assert_eq!(
            PageEvent::Resize {
                width: 1.0,
                height: 1.0
            }
            .kind(),
            EventKind::Resize
        );
    }
}
