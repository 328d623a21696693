//! Footer year stamp.

use crate::dom::Element;

/// Write `year` into `node`. Returns `false` when the page has no year node.
pub fn update_year<E: Element>(node: Option<&E>, year: u32) -> bool {
    let Some(node) = node else {
        return false;
    };
    node.set_text(&year.to_string());
    true
}

/// Current calendar year from the browser clock.
#[cfg(feature = "browser")]
#[must_use]
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[cfg(feature = "browser")]
pub fn mount(document: &web_sys::Document) {
    let node = crate::dom::web::select(document, crate::selectors::YEAR);
    update_year(node.as_ref(), current_year());
}
