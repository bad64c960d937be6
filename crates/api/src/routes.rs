use crate::dto::MessageResponse;
use crate::handlers;
use crate::middleware::apply_cors;
use crate::state::AppState;
use axum::{
    http::StatusCode,
    middleware::from_fn_with_state,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/get-status", get(handlers::get_status))
        .with_state(state)
}

/// Full application router: API under `/api`, uniform CORS on everything
/// (including the 404 fallback and preflight on any path).
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .nest("/api", create_api_routes(state.clone()))
        .fallback(not_found)
        .layer(from_fn_with_state(state, apply_cors))
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(MessageResponse {
            message: "Not Found".to_string(),
        }),
    )
}
