//! Trailing-edge debounce.
//!
//! Every [`Debounce::call`] arms a new generation and schedules the action
//! after the quiet window. When a scheduled task wakes up it runs only if no
//! newer call has been made since, so a burst of calls yields exactly one
//! execution, after the last call.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Deferred execution of a one-shot task.
pub trait Schedule {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

pub struct Debounce<S> {
    scheduler: S,
    delay_ms: u32,
    generation: Rc<Cell<u64>>,
    action: Rc<dyn Fn()>,
}

impl<S: Schedule> Debounce<S> {
    pub fn new<F>(scheduler: S, delay_ms: u32, action: F) -> Self
    where
        F: Fn() + 'static,
    {
        Self { scheduler, delay_ms, generation: Rc::new(Cell::new(0)), action: Rc::new(action) }
    }

    /// Request the action; supersedes any call still inside its quiet window.
    pub fn call(&self) {
        let armed = self.generation.get().wrapping_add(1);
        self.generation.set(armed);

        let generation = Rc::clone(&self.generation);
        let action = Rc::clone(&self.action);
        self.scheduler.schedule(
            self.delay_ms,
            Box::new(move || {
                if generation.get() == armed {
                    action();
                }
            }),
        );
    }

    #[must_use]
    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }
}

/// Holds at most one pending timer handle. Arming a new one hands back the
/// handle it supersedes; dropping that handle is what cancels it.
pub struct PendingTimer<H> {
    slot: RefCell<Option<H>>,
}

impl<H> PendingTimer<H> {
    #[must_use]
    pub fn new() -> Self {
        Self { slot: RefCell::new(None) }
    }

    /// Store `handle` as the pending timer and return the previous one.
    pub fn arm(&self, handle: H) -> Option<H> {
        self.slot.borrow_mut().replace(handle)
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.slot.borrow().is_some()
    }
}

impl<H> Default for PendingTimer<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// Browser scheduler backed by `setTimeout`. Scheduling replaces the pending
/// timer, and dropping a gloo `Timeout` clears it.
#[cfg(feature = "browser")]
#[derive(Clone, Default)]
pub struct TimeoutScheduler {
    pending: Rc<PendingTimer<gloo_timers::callback::Timeout>>,
}

#[cfg(feature = "browser")]
impl Schedule for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let timer = gloo_timers::callback::Timeout::new(delay_ms, task);
        drop(self.pending.arm(timer));
    }
}
