//! Cross-cutting middleware applied to every route

use std::time::Instant;

use axum::{
    body::Body,
    http::{HeaderValue, Method, Request, header},
    middleware::Next,
    response::Response,
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
};
use tracing::info;

const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type, Authorization";

/// CORS policy: any origin, fixed methods and headers
///
/// `CorsLayer` answers every OPTIONS request itself with 200 and an empty body.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// `CorsLayer` only lists methods on preflight responses; advertise them everywhere
pub fn allow_methods_header() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::if_not_present(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    )
}

/// Same as [`allow_methods_header`] for the allowed request headers
pub fn allow_headers_header() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::if_not_present(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    )
}

/// Access log: method, target, status and elapsed time once the handler is done
pub async fn log_requests(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let target = req.uri().clone();
    let start = Instant::now();

    let response = next.run(req).await;

    info!(
        method = %method,
        target = %target,
        status = response.status().as_u16(),
        elapsed = ?start.elapsed(),
        "request completed"
    );

    response
}
