//! Mobile navigation: open/close toggle and smooth-scrolling nav links.
//!
//! The open state is carried by the DOM itself (`open` on the nav,
//! `aria-expanded` on the button) and is never persisted.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::dom::Element;
use crate::selectors::{ARIA_EXPANDED, HEADER_OFFSET_PX, NAV_OPEN_CLASS};
use crate::util::scroll::{Viewport, smooth_scroll_to};

pub struct NavController<E> {
    toggle: Option<E>,
    nav: Option<E>,
}

impl<E: Element> NavController<E> {
    #[must_use]
    pub fn new(toggle: Option<E>, nav: Option<E>) -> Self {
        Self { toggle, nav }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.nav
            .as_ref()
            .is_some_and(|nav| nav.has_class(NAV_OPEN_CLASS))
    }

    /// Flip `aria-expanded` on the button and the `open` class on the nav.
    /// Returns whether the nav is now open.
    pub fn toggle(&self) -> bool {
        if let Some(button) = &self.toggle {
            let expanded = button.attr(ARIA_EXPANDED).as_deref() == Some("true");
            button.set_attr(ARIA_EXPANDED, if expanded { "false" } else { "true" });
        }
        if let Some(nav) = &self.nav {
            nav.toggle_class(NAV_OPEN_CLASS);
        }
        self.is_open()
    }

    /// Handle activation of a nav link: scroll to its fragment below the
    /// fixed header, then close the menu if it was open. Returns the scroll
    /// position requested, if any.
    pub fn activate_link<V: Viewport + ?Sized>(&self, href: &str, viewport: &V) -> Option<f64> {
        let scrolled = smooth_scroll_to(viewport, href, HEADER_OFFSET_PX);
        if self.is_open() {
            self.toggle();
        }
        scrolled
    }
}

/// Bind the nav toggle and every nav link in the live document.
#[cfg(feature = "browser")]
pub fn mount(window: &web_sys::Window, document: &web_sys::Document) {
    use std::rc::Rc;

    use crate::dom::web::{listen, select, select_all};
    use crate::selectors::{NAV_LINKS, NAV_TOGGLE, SITE_NAV};

    let toggle = select(document, NAV_TOGGLE);
    let controller = Rc::new(NavController::new(toggle.clone(), select(document, SITE_NAV)));

    if let Some(button) = &toggle {
        let controller = Rc::clone(&controller);
        listen(button, "click", move |_| {
            controller.toggle();
        });
    }

    for link in select_all(document, NAV_LINKS) {
        let controller = Rc::clone(&controller);
        let window = window.clone();
        let href_source = link.clone();
        listen(&link, "click", move |event| {
            event.prevent_default();
            let href = href_source.attr("href").unwrap_or_default();
            if controller.activate_link(&href, &window).is_none() {
                log::debug!("nav link {href:?} has no in-page target");
            }
        });
    }
}
