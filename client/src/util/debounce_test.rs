use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::*;

/// Scheduler driven by a manual clock.
#[derive(Clone, Default)]
struct ManualClock {
    now_ms: Rc<Cell<u64>>,
    queue: Rc<RefCell<Vec<(u64, Box<dyn FnOnce()>)>>>,
}

impl ManualClock {
    fn advance(&self, ms: u64) {
        let target = self.now_ms.get() + ms;
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let due = queue
                    .iter()
                    .enumerate()
                    .filter(|(_, (at, _))| *at <= target)
                    .min_by_key(|(_, (at, _))| *at)
                    .map(|(i, _)| i);
                due.map(|i| queue.remove(i))
            };
            let Some((at, task)) = next else {
                break;
            };
            self.now_ms.set(at);
            task();
        }
        self.now_ms.set(target);
    }
}

impl Schedule for ManualClock {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let at = self.now_ms.get() + u64::from(delay_ms);
        self.queue.borrow_mut().push((at, task));
    }
}

fn counting(clock: &ManualClock, delay_ms: u32) -> (Debounce<ManualClock>, Rc<Cell<u32>>) {
    let hits = Rc::new(Cell::new(0));
    let counter = Rc::clone(&hits);
    let debounce = Debounce::new(clock.clone(), delay_ms, move || counter.set(counter.get() + 1));
    (debounce, hits)
}

#[test]
fn single_call_fires_after_delay() {
    let clock = ManualClock::default();
    let (debounce, hits) = counting(&clock, 200);

    debounce.call();
    clock.advance(199);
    assert_eq!(hits.get(), 0);
    clock.advance(1);
    assert_eq!(hits.get(), 1);
}

#[test]
fn burst_collapses_to_one_trailing_call() {
    let clock = ManualClock::default();
    let (debounce, hits) = counting(&clock, 200);

    for _ in 0..10 {
        debounce.call();
        clock.advance(50);
    }
    assert_eq!(hits.get(), 0, "still inside the quiet window");
    clock.advance(150);
    assert_eq!(hits.get(), 1);
    clock.advance(1000);
    assert_eq!(hits.get(), 1);
}

#[test]
fn separated_calls_each_fire() {
    let clock = ManualClock::default();
    let (debounce, hits) = counting(&clock, 100);

    debounce.call();
    clock.advance(150);
    debounce.call();
    clock.advance(150);
    assert_eq!(hits.get(), 2);
}

#[test]
fn delay_is_reported() {
    let clock = ManualClock::default();
    let (debounce, _) = counting(&clock, 123);
    assert_eq!(debounce.delay_ms(), 123);
}

/// Drop-counting stand-in for a browser timer handle.
struct Timer {
    cleared: Rc<Cell<u32>>,
}

impl Drop for Timer {
    fn drop(&mut self) {
        self.cleared.set(self.cleared.get() + 1);
    }
}

#[test]
fn arming_supersedes_the_pending_timer() {
    let cleared = Rc::new(Cell::new(0));
    let pending = PendingTimer::new();
    assert!(!pending.is_armed());

    assert!(pending.arm(Timer { cleared: Rc::clone(&cleared) }).is_none());
    assert!(pending.is_armed());
    for _ in 0..5 {
        drop(pending.arm(Timer { cleared: Rc::clone(&cleared) }));
    }
    assert_eq!(cleared.get(), 5, "each superseded timer is released");

    drop(pending);
    assert_eq!(cleared.get(), 6);
}
