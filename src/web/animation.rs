// Browser drivers for `schedule` tasks: one on requestAnimationFrame, one on
// setTimeout. Both keep their callback in an `Rc<RefCell<Option<Closure>>>`
// so the closure can reschedule itself, and both can be cancelled from
// outside with `stop()`.

use crate::schedule::{run_step, run_timed_step, FrameTask, StopHandle, TimedTask};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

type Callback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

fn request_frame(callback: &Callback) -> Result<i32, JsValue> {
    let slot = callback.borrow();
    let closure = slot.as_ref().ok_or("animation loop was dropped")?;
    window()?.request_animation_frame(closure.as_ref().unchecked_ref())
}

fn request_timeout(callback: &Callback, delay_ms: u32) -> Result<i32, JsValue> {
    let slot = callback.borrow();
    let closure = slot.as_ref().ok_or("timeout loop was dropped")?;
    window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        delay_ms as i32,
    )
}

/// Runs a `FrameTask` once per display refresh until the task or the
/// handle says stop.
pub struct AnimationLoop {
    handle: StopHandle,
    pending: Rc<Cell<Option<i32>>>,
    callback: Callback,
}

impl AnimationLoop {
    pub fn start<T: FrameTask + 'static>(mut task: T) -> Result<AnimationLoop, JsValue> {
        let handle = StopHandle::new();
        let pending = Rc::new(Cell::new(None));
        let callback: Callback = Rc::new(RefCell::new(None));

        let loop_handle = handle.clone();
        let loop_pending = pending.clone();
        let loop_callback = callback.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            loop_pending.set(None);
            if !run_step(&mut task, &loop_handle) {
                return;
            }
            match request_frame(&loop_callback) {
                Ok(id) => loop_pending.set(Some(id)),
                Err(err) => {
                    console_warn!("animation frame request failed: {:?}", err);
                    loop_handle.stop();
                }
            }
        }) as Box<dyn FnMut()>));

        pending.set(Some(request_frame(&callback)?));
        Ok(AnimationLoop {
            handle,
            pending,
            callback,
        })
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_stopped()
    }

    pub fn stop(&self) {
        self.handle.stop();
        if let Some(id) = self.pending.take() {
            if let Ok(window) = window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        // breaks the closure <-> callback cycle
        self.callback.borrow_mut().take();
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Runs a `TimedTask` on a chain of timeouts, the first one immediately.
pub struct TimeoutLoop {
    handle: StopHandle,
    pending: Rc<Cell<Option<i32>>>,
    callback: Callback,
}

impl TimeoutLoop {
    pub fn start<T: TimedTask + 'static>(mut task: T) -> Result<TimeoutLoop, JsValue> {
        let handle = StopHandle::new();
        let pending = Rc::new(Cell::new(None));
        let callback: Callback = Rc::new(RefCell::new(None));

        let loop_handle = handle.clone();
        let loop_pending = pending.clone();
        let loop_callback = callback.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            loop_pending.set(None);
            let delay_ms = match run_timed_step(&mut task, &loop_handle) {
                Some(delay_ms) => delay_ms,
                None => return,
            };
            match request_timeout(&loop_callback, delay_ms) {
                Ok(id) => loop_pending.set(Some(id)),
                Err(err) => {
                    console_warn!("timeout request failed: {:?}", err);
                    loop_handle.stop();
                }
            }
        }) as Box<dyn FnMut()>));

        pending.set(Some(request_timeout(&callback, 0)?));
        Ok(TimeoutLoop {
            handle,
            pending,
            callback,
        })
    }

    pub fn stop(&self) {
        self.handle.stop();
        if let Some(id) = self.pending.take() {
            if let Ok(window) = window() {
                window.clear_timeout_with_handle(id);
            }
        }
        self.callback.borrow_mut().take();
    }
}

impl Drop for TimeoutLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
