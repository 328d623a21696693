use axum::body::{Body, to_bytes};
use axum::http::Request;
use axum::http::header::CONTENT_TYPE;
use axum::response::Response;
use tower::ServiceExt;

use super::*;
use crate::config::default_website_dir;
use crate::state::test_helpers::test_app_state;

const FORM: &str = "name=Alice&email=alice%40example.com&message=Bonjour";

fn form_post(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(FORM))
        .unwrap()
}

fn bare(method: &str, uri: &str) -> Request<Body> {
    Request::builder().method(method).uri(uri).body(Body::empty()).unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn healthz_returns_ok() {
    let (state, _store) = test_app_state();
    let response = app(state, &default_website_dir())
        .oneshot(bare("GET", "/healthz"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn post_send_message_stores_row() {
    let (state, store) = test_app_state();
    let response = app(state, &default_website_dir())
        .oneshot(form_post("/send_message"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "Merci, Alice! Votre message a été enregistré.");
    let rows = store.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].email, "alice@example.com");
}

#[tokio::test]
async fn php_alias_stores_row() {
    let (state, store) = test_app_state();
    let response = app(state, &default_website_dir())
        .oneshot(form_post("/send_message.php"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "Merci, Alice! Votre message a été enregistré.");
    assert_eq!(store.rows().len(), 1);
}

#[tokio::test]
async fn other_methods_return_empty_ok_and_store_nothing() {
    let (state, store) = test_app_state();
    let router = app(state, &default_website_dir());

    for (method, uri) in [("GET", "/send_message"), ("PUT", "/send_message"), ("GET", "/send_message.php")] {
        let response = router.clone().oneshot(bare(method, uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{method} {uri}");
        assert!(body_text(response).await.is_empty(), "{method} {uri}");
    }
    assert!(store.rows().is_empty());
}

#[tokio::test]
async fn unknown_paths_fall_back_to_bundled_site() {
    let (state, _store) = test_app_state();
    let response = app(state, &default_website_dir())
        .oneshot(bare("GET", "/"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("contact-form"));
}
