//! Smooth scrolling to in-page fragment targets.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// The scrolling viewport of the page.
pub trait Viewport {
    /// Top edge of the first element matching `selector`, relative to the
    /// viewport. `None` when nothing matches.
    fn element_top(&self, selector: &str) -> Option<f64>;
    /// Current vertical scroll position of the document.
    fn scroll_y(&self) -> f64;
    /// Request an animated scroll to the absolute document position `top`.
    fn smooth_scroll_to(&self, top: f64);
}

/// The selector for an in-page link (`#about`), or `None` for anything else.
#[must_use]
pub fn fragment_selector(href: &str) -> Option<&str> {
    (href.len() > 1 && href.starts_with('#')).then_some(href)
}

/// Scroll so the target of `href` sits `offset` pixels below the top of the
/// viewport. Returns the requested position, or `None` if `href` is not a
/// fragment or its target does not exist (nothing scrolls).
pub fn smooth_scroll_to<V: Viewport + ?Sized>(viewport: &V, href: &str, offset: f64) -> Option<f64> {
    let selector = fragment_selector(href)?;
    let top = viewport.element_top(selector)? + viewport.scroll_y() - offset;
    viewport.smooth_scroll_to(top);
    Some(top)
}

#[cfg(feature = "browser")]
impl Viewport for web_sys::Window {
    fn element_top(&self, selector: &str) -> Option<f64> {
        let document = self.document()?;
        let target = crate::dom::web::select(&document, selector)?;
        Some(target.get_bounding_client_rect().top())
    }

    fn scroll_y(&self) -> f64 {
        web_sys::Window::scroll_y(self).unwrap_or(0.0)
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        self.scroll_to_with_scroll_to_options(&options);
    }
}
