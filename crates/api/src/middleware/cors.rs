use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use uptime_edge_domain::resolve_origin;

const ALLOW_METHODS: HeaderValue = HeaderValue::from_static("GET, OPTIONS");
const ALLOW_HEADERS: HeaderValue = HeaderValue::from_static("Content-Type");
const PREFLIGHT_MAX_AGE: HeaderValue = HeaderValue::from_static("86400");

/// Attaches CORS headers to every response and answers preflight directly.
///
/// An empty resolved origin still goes out as an empty
/// `Access-Control-Allow-Origin` value; the browser blocks the read.
pub async fn apply_cors(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let request_origin = request
        .headers()
        .get(header::ORIGIN)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let resolved = resolve_origin(&state.allowed_origin, request_origin.as_deref());

    if request.method() == Method::OPTIONS {
        return preflight(&resolved);
    }

    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin_value(&resolved));
    headers.insert(header::ACCESS_CONTROL_ALLOW_METHODS, ALLOW_METHODS);
    headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOW_HEADERS);
    response
}

fn preflight(resolved: &str) -> Response {
    let headers = [
        (header::ACCESS_CONTROL_ALLOW_ORIGIN, origin_value(resolved)),
        (header::ACCESS_CONTROL_ALLOW_METHODS, ALLOW_METHODS),
        (header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOW_HEADERS),
        (header::ACCESS_CONTROL_MAX_AGE, PREFLIGHT_MAX_AGE),
    ];
    (StatusCode::NO_CONTENT, headers).into_response()
}

fn origin_value(resolved: &str) -> HeaderValue {
    // A resolved origin is either "*", a validated origin, or "".
    HeaderValue::from_str(resolved).unwrap_or_else(|_| HeaderValue::from_static(""))
}
