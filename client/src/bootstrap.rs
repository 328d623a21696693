//! WASM entrypoint: composes every page controller once the document is ready.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each controller owns a disjoint slice of the DOM and runs independently
//! after mounting. The backdrop handle is kept in a thread-local so the host
//! page (or a test harness) can halt the animation through [`teardown`].

use std::cell::RefCell;

use backdrop::engine::BackdropHandle;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::dom::web::listen;
use crate::lifecycle::ReadyState;
use crate::selectors::SERVICE_WORKER_PATH;
use crate::{background, footer, form, nav, reveal, theme};

thread_local! {
    static BACKDROP: RefCell<Option<BackdropHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let state = ReadyState::from_dom(&document.ready_state());
    if state.is_parsed() {
        init_all(&window, &document);
    } else {
        let (w, d) = (window.clone(), document.clone());
        listen(&document, "DOMContentLoaded", move |_| init_all(&w, &d));
    }

    if state.is_loaded() {
        register_service_worker(&window);
    } else {
        let sw_window = window.clone();
        listen(&window, "load", move |_| register_service_worker(&sw_window));
    }
}

/// Mount every controller against the live document.
pub fn init_all(window: &Window, document: &Document) {
    let theme = theme::mount(window, document);
    nav::mount(window, document);
    let backdrop = background::mount(window, document);
    let revealing = reveal::mount(document);
    footer::mount(document);
    let has_form = form::mount(window, document);

    log::info!(
        "page ready: theme={theme:?} backdrop={} reveal_targets={revealing} contact_form={has_form}",
        backdrop.is_some()
    );
    BACKDROP.with(|slot| *slot.borrow_mut() = backdrop);
}

/// Stop the background animation loop, if one is running.
#[wasm_bindgen]
pub fn teardown() {
    BACKDROP.with(|slot| {
        if let Some(handle) = slot.borrow_mut().take() {
            handle.stop();
            log::info!("backdrop stopped");
        }
    });
}

fn register_service_worker(window: &Window) {
    let navigator = window.navigator();
    let supported = js_sys::Reflect::has(&navigator, &JsValue::from_str("serviceWorker")).unwrap_or(false);
    if !supported {
        log::debug!("service workers unsupported");
        return;
    }
    let promise = navigator
        .service_worker()
        .register(SERVICE_WORKER_PATH);
    wasm_bindgen_futures::spawn_local(async move {
        match wasm_bindgen_futures::JsFuture::from(promise).await {
            Ok(registration) => log::info!("service worker registered: {registration:?}"),
            Err(err) => log::error!("service worker registration failed: {err:?}"),
        }
    });
}
