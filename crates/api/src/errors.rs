use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;
use uptime_edge_domain::StatusError;

pub struct ApiError(pub StatusError);

impl From<StatusError> for ApiError {
    fn from(err: StatusError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            StatusError::MissingMonitorId => (StatusCode::BAD_REQUEST, self.0.to_string()),

            StatusError::ApiKeyNotConfigured => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string())
            }

            StatusError::DataNotFound => (StatusCode::NOT_FOUND, self.0.to_string()),

            // Upstream 5xx collapses to 502; other non-2xx codes pass through.
            StatusError::Upstream(code) => {
                let status = if *code >= 500 {
                    StatusCode::BAD_GATEWAY
                } else {
                    StatusCode::from_u16(*code).unwrap_or(StatusCode::BAD_GATEWAY)
                };
                (status, self.0.to_string())
            }

            StatusError::Fetch(_) | StatusError::Decode(_) => {
                error!(error = %self.0, "Failed to fetch monitor data from upstream API");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch monitor data from upstream API".to_string(),
                )
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}
