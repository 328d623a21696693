//! Particle backdrop wiring for the live page.
//!
//! Finds the configured canvases, hands them to [`backdrop::engine::Backdrop`],
//! relayouts on (debounced) window resize, and starts the frame loop.

use backdrop::engine::{Backdrop, BackdropHandle, Surface};
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use crate::dom::web::listen;
use crate::selectors::{CANVAS_IDS, RESIZE_DEBOUNCE_MS};
use crate::util::debounce::{Debounce, TimeoutScheduler};

/// Start the backdrop over every canvas in [`CANVAS_IDS`] that exists.
/// Returns `None` when the page has no usable canvas or the loop cannot start.
pub fn mount(window: &web_sys::Window, document: &web_sys::Document) -> Option<BackdropHandle> {
    let surfaces: Vec<Surface> = CANVAS_IDS
        .iter()
        .filter_map(|id| document.get_element_by_id(id))
        .filter_map(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        .filter_map(Surface::from_canvas)
        .collect();
    if surfaces.is_empty() {
        log::debug!("no backdrop canvases on this page");
        return None;
    }
    let count = surfaces.len();

    let mut backdrop = Backdrop::new(surfaces);
    backdrop.resize();
    let handle = match backdrop.start() {
        Ok(handle) => handle,
        Err(err) => {
            log::error!("backdrop failed to start: {err:?}");
            return None;
        }
    };

    let relayout = {
        let handle = handle.clone();
        Debounce::new(TimeoutScheduler::default(), RESIZE_DEBOUNCE_MS, move || handle.resize())
    };
    listen(window, "resize", move |_| relayout.call());

    log::info!("backdrop running on {count} canvas(es)");
    Some(handle)
}
