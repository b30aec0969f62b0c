// Scheduled-task plumbing for anything driven once per frame or per timeout.
// The browser drivers in `web::animation` only decide *when* to call
// `run_step`; whether to keep going is decided here.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Stop,
}

pub trait FrameTask {
    fn step(&mut self) -> Control;
}

impl<F> FrameTask for F
where
    F: FnMut() -> Control,
{
    fn step(&mut self) -> Control {
        self()
    }
}

/// A task driven by timeouts: each step returns the delay in milliseconds
/// before the next one, or `None` to finish.
pub trait TimedTask {
    fn step(&mut self) -> Option<u32>;
}

impl<F> TimedTask for F
where
    F: FnMut() -> Option<u32>,
{
    fn step(&mut self) -> Option<u32> {
        self()
    }
}

/// Shared cancellation flag. Clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct StopHandle {
    stopped: Rc<Cell<bool>>,
}

impl StopHandle {
    pub fn new() -> Self {
        StopHandle::default()
    }

    pub fn stop(&self) {
        self.stopped.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }
}

/// Runs one step of `task` unless `handle` was stopped. Returns true when
/// the driver should schedule another step.
pub fn run_step<T: FrameTask + ?Sized>(task: &mut T, handle: &StopHandle) -> bool {
    if handle.is_stopped() {
        return false;
    }
    match task.step() {
        Control::Continue => !handle.is_stopped(),
        Control::Stop => {
            handle.stop();
            false
        }
    }
}

/// Timed counterpart of `run_step`: the delay before the next step, or
/// `None` when the driver should stop.
pub fn run_timed_step<T: TimedTask + ?Sized>(task: &mut T, handle: &StopHandle) -> Option<u32> {
    if handle.is_stopped() {
        return None;
    }
    match task.step() {
        Some(delay) if !handle.is_stopped() => Some(delay),
        _ => {
            handle.stop();
            None
        }
    }
}
