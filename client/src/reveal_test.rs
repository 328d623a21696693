use std::cell::RefCell;

use super::*;
use crate::dom::test_helpers::MockElement;

#[derive(Default)]
struct RecordingWatcher {
    released: RefCell<usize>,
}

impl RevealWatcher<MockElement> for RecordingWatcher {
    fn release(&self, _target: &MockElement) {
        *self.released.borrow_mut() += 1;
    }
}

#[test]
fn non_intersecting_sample_does_nothing() {
    let watcher = RecordingWatcher::default();
    let el = MockElement::with_classes(&["fade-in"]);
    assert!(!on_intersection(&watcher, &el, false));
    assert_eq!(state_of(&el), RevealState::Pending);
    assert_eq!(*watcher.released.borrow(), 0);
}

#[test]
fn intersecting_sample_reveals_and_releases() {
    let watcher = RecordingWatcher::default();
    let el = MockElement::with_classes(&["fade-in"]);
    assert!(on_intersection(&watcher, &el, true));
    assert_eq!(state_of(&el), RevealState::Visible);
    assert!(el.has_class("fade-in"));
    assert_eq!(*watcher.released.borrow(), 1);
}

#[test]
fn second_reveal_reports_no_transition() {
    let watcher = RecordingWatcher::default();
    let el = MockElement::new();
    assert!(on_intersection(&watcher, &el, true));
    assert!(!on_intersection(&watcher, &el, true));
    assert_eq!(state_of(&el), RevealState::Visible);
}

#[test]
fn revealed_element_survives_exit_and_reentry() {
    let watcher = RecordingWatcher::default();
    let el = MockElement::with_classes(&["fade-in"]);
    on_intersection(&watcher, &el, true);

    for intersecting in [false, true, false, false, true, false] {
        on_intersection(&watcher, &el, intersecting);
        assert_eq!(state_of(&el), RevealState::Visible);
    }
}

#[test]
fn elements_reveal_independently() {
    let watcher = RecordingWatcher::default();
    let a = MockElement::new();
    let b = MockElement::new();
    on_intersection(&watcher, &a, true);
    on_intersection(&watcher, &b, false);
    assert_eq!(state_of(&a), RevealState::Visible);
    assert_eq!(state_of(&b), RevealState::Pending);
}
