//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the contact endpoint, a health probe, and the
//! static portfolio site. Any path without an explicit route falls through
//! to the site directory.

pub mod contact;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full application: contact endpoint + health probe + static site fallback.
pub fn app(state: AppState, website_dir: &Path) -> Router {
    let website_service = ServeDir::new(website_dir).append_index_html_on_directories(true);

    Router::new()
        .route("/send_message", post(contact::submit).fallback(contact::ignore))
        .route("/send_message.php", post(contact::submit).fallback(contact::ignore))
        .route("/healthz", get(healthz))
        .with_state(state)
        .fallback_service(website_service)
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "router_test.rs"]
mod tests;
