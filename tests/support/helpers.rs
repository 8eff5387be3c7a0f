// tests/support/helpers.rs
use std::sync::Arc;

use axum::Router;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header::CONTENT_TYPE};
use quillpress::application::services::ApplicationServices;
use quillpress::infrastructure::util::DefaultSlugGenerator;
use quillpress::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use tower::util::ServiceExt as _;

use super::mocks::{InMemoryStore, TickingClock};

pub const TEST_API_KEY: &str = "test-api-key";

pub fn build_services(store: &InMemoryStore) -> Arc<ApplicationServices> {
    Arc::new(ApplicationServices::new(
        store.articles(),
        store.categories(),
        store.tags(),
        Arc::new(TickingClock::default()),
        Arc::new(DefaultSlugGenerator),
    ))
}

pub fn make_test_router(store: &InMemoryStore) -> Router {
    let state = HttpState::new(build_services(store), TEST_API_KEY);
    build_router(state, &["*".to_string()])
}

/// Sends one request and returns the status plus the decoded JSON body
/// (`Value::Null` for an empty body).
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    api_key: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(key) = api_key {
        builder = builder.header("x-api-key", key);
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = app.clone().oneshot(request).await.expect("router error");
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            panic!(
                "expected JSON body, got {:?}",
                String::from_utf8_lossy(&bytes)
            )
        })
    };
    (status, json)
}

/// Asserts the `{status, errors}` shape and returns the message for `field`.
pub fn field_error(body: &Value, field: &str) -> String {
    assert_eq!(body["status"], 422, "unexpected body: {body}");
    body["errors"][field]
        .as_str()
        .unwrap_or_else(|| panic!("no error for {field} in {body}"))
        .to_string()
}
