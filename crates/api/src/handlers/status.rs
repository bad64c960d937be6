use crate::{dto::StatusQuery, errors::ApiError, state::AppState};
use axum::{
    extract::{Query, State},
    http::{header, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{debug, instrument};
use uptime_edge_domain::StatusError;

const X_CACHE: HeaderName = HeaderName::from_static("x-cache");

#[instrument(skip(state), name = "api_get_status")]
pub async fn get_status(
    State(state): State<AppState>,
    Query(params): Query<StatusQuery>,
) -> Result<Response, ApiError> {
    let monitor_id = params
        .monitor
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or(StatusError::MissingMonitorId)?;

    debug!(monitor_id, "Fetching monitor status");

    let report = state.get_status.execute(monitor_id).await?;

    debug!(monitor_id, outcome = report.outcome.as_str(), "Monitor status ready");

    let headers = [
        (
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        ),
        (X_CACHE, HeaderValue::from_static(report.outcome.as_str())),
    ];
    Ok((StatusCode::OK, headers, report.body).into_response())
}
