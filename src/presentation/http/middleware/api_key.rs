// src/presentation/http/middleware/api_key.rs
use crate::application::error::ApplicationError;
use crate::presentation::http::error::HttpError;
use crate::presentation::http::extractors::XApiKey;
use crate::presentation::http::state::HttpState;
use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use headers::HeaderMapExt;

/// Lets the request through only when `X-API-Key` matches the configured key.
///
/// Usage: `route_layer(axum::middleware::from_fn(require_api_key))`
pub async fn require_api_key(req: Request<Body>, next: Next) -> Response {
    let Some(state) = req.extensions().get::<HttpState>() else {
        return HttpError::from_error(ApplicationError::infrastructure(
            "application state missing",
        ))
        .into_response();
    };

    match req.headers().typed_get::<XApiKey>() {
        Some(XApiKey(key)) if state.api_key_matches(&key) => next.run(req).await,
        Some(_) => {
            tracing::warn!(path = %req.uri().path(), "rejected request with invalid API key");
            HttpError::from_error(ApplicationError::unauthorized("Invalid API key"))
                .into_response()
        }
        None => HttpError::from_error(ApplicationError::unauthorized("Missing X-API-Key header"))
            .into_response(),
    }
}
