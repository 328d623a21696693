//! DOM seams used by the page controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Controllers never call web-sys directly. They hold an [`Element`] or a
//! [`KeyValueStore`] handed to them at construction, which lets tests drive
//! them with the mocks in [`test_helpers`] and lets the browser build pass
//! real `web_sys` handles. Absent elements are modelled as `Option`, so a
//! page missing a control degrades to a no-op instead of a crash.

/// Minimal view of a DOM element: attributes, classes and text.
///
/// Method names avoid the inherent `web_sys::Element` names so calls on
/// concrete browser handles always resolve to this trait.
pub trait Element {
    fn attr(&self, name: &str) -> Option<String>;
    fn set_attr(&self, name: &str, value: &str);
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn set_text(&self, text: &str);

    /// Flip `class` and return whether it is now present.
    fn toggle_class(&self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    /// Swap `from` for `to`. Does nothing when `from` is absent, like
    /// `DOMTokenList.replace`.
    fn replace_class(&self, from: &str, to: &str) {
        if self.has_class(from) {
            self.remove_class(from);
            self.add_class(to);
        }
    }
}

/// Durable string key-value storage (`localStorage` in the browser).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Storage may be unavailable (private browsing, disabled cookies); reads
/// then miss and writes are dropped.
impl<S: KeyValueStore> KeyValueStore for Option<S> {
    fn get(&self, key: &str) -> Option<String> {
        self.as_ref().and_then(|s| s.get(key))
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(s) = self {
            s.set(key, value);
        }
    }
}

// =============================================================================
// BROWSER BINDINGS
// =============================================================================

#[cfg(feature = "browser")]
pub mod web {
    //! `web_sys` implementations of the seams plus small query/listen helpers.

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{Document, Event, EventTarget};

    use super::{Element, KeyValueStore};

    impl Element for web_sys::Element {
        fn attr(&self, name: &str) -> Option<String> {
            self.get_attribute(name)
        }

        fn set_attr(&self, name: &str, value: &str) {
            if let Err(err) = self.set_attribute(name, value) {
                log::warn!("set_attribute({name}) failed: {err:?}");
            }
        }

        fn has_class(&self, class: &str) -> bool {
            self.class_list().contains(class)
        }

        fn add_class(&self, class: &str) {
            if let Err(err) = self.class_list().add_1(class) {
                log::warn!("classList.add({class}) failed: {err:?}");
            }
        }

        fn remove_class(&self, class: &str) {
            if let Err(err) = self.class_list().remove_1(class) {
                log::warn!("classList.remove({class}) failed: {err:?}");
            }
        }

        fn set_text(&self, text: &str) {
            self.set_text_content(Some(text));
        }
    }

    impl KeyValueStore for web_sys::Storage {
        fn get(&self, key: &str) -> Option<String> {
            match self.get_item(key) {
                Ok(value) => value,
                Err(err) => {
                    log::warn!("localStorage read of {key} failed: {err:?}");
                    None
                }
            }
        }

        fn set(&self, key: &str, value: &str) {
            if let Err(err) = self.set_item(key, value) {
                log::warn!("localStorage write of {key} failed: {err:?}");
            }
        }
    }

    /// First element matching `selector`; invalid selectors count as no match.
    #[must_use]
    pub fn select(document: &Document, selector: &str) -> Option<web_sys::Element> {
        document.query_selector(selector).unwrap_or_else(|err| {
            log::debug!("query_selector({selector}) rejected: {err:?}");
            None
        })
    }

    /// Every element matching `selector`, in document order.
    #[must_use]
    pub fn select_all(document: &Document, selector: &str) -> Vec<web_sys::Element> {
        let Ok(nodes) = document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .collect()
    }

    /// Attach `handler` for `event` for the rest of the page's lifetime.
    pub fn listen<F>(target: &EventTarget, event: &str, handler: F)
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        match target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
            Ok(()) => closure.forget(),
            Err(err) => log::warn!("addEventListener({event}) failed: {err:?}"),
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "dom_test.rs"]
mod tests;
