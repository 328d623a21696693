//! Reveal-on-scroll: `.fade-in` elements gain `visible` the first time they
//! are sufficiently inside the viewport, then stop being watched.
//!
//! The transition is one-shot and monotonic. Nothing here ever removes the
//! class, so later exits and re-entries cannot hide an element again.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::dom::Element;
use crate::selectors::VISIBLE_CLASS;

/// Something that delivers intersection samples for a set of targets.
pub trait RevealWatcher<E> {
    /// Stop delivering samples for `target`.
    fn release(&self, target: &E);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Visible,
}

#[must_use]
pub fn state_of<E: Element>(target: &E) -> RevealState {
    if target.has_class(VISIBLE_CLASS) { RevealState::Visible } else { RevealState::Pending }
}

/// Process one intersection sample for `target`. An intersecting sample
/// reveals the element and releases it from `watcher`. Returns `true` only
/// when this sample performed the pending → visible transition.
pub fn on_intersection<E, W>(watcher: &W, target: &E, is_intersecting: bool) -> bool
where
    E: Element,
    W: RevealWatcher<E> + ?Sized,
{
    if !is_intersecting {
        return false;
    }
    let was_pending = state_of(target) == RevealState::Pending;
    target.add_class(VISIBLE_CLASS);
    watcher.release(target);
    was_pending
}

#[cfg(feature = "browser")]
impl RevealWatcher<web_sys::Element> for web_sys::IntersectionObserver {
    fn release(&self, target: &web_sys::Element) {
        self.unobserve(target);
    }
}

/// Watch every `.fade-in` element with one shared observer at the reveal
/// threshold. Returns the number of elements registered.
#[cfg(feature = "browser")]
pub fn mount(document: &web_sys::Document) -> usize {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use crate::dom::web::select_all;
    use crate::selectors::{FADE_IN, REVEAL_THRESHOLD};

    let targets = select_all(document, FADE_IN);
    if targets.is_empty() {
        return 0;
    }

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                on_intersection(&observer, &entry.target(), entry.is_intersecting());
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(err) => {
            log::warn!("IntersectionObserver unavailable, revealing immediately: {err:?}");
            for target in &targets {
                target.add_class(VISIBLE_CLASS);
            }
            return 0;
        }
    };
    callback.forget();

    for target in &targets {
        observer.observe(target);
    }
    targets.len()
}
