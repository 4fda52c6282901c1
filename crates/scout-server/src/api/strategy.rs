use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Extension,
};
use scout_core::StrategyRequest;

use crate::middleware::RequestId;

use super::{ApiError, AppState};

pub(super) const ALLOWED_METHODS: &str = "POST, OPTIONS";

/// `POST /api/strategy`.
///
/// The body is validated before credentials are checked, so a malformed
/// request gets a 400 even on a misconfigured server. Neither check makes an
/// outbound call.
pub(super) async fn create_strategy(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let request = StrategyRequest::from_json_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "rejected strategy request");
        ApiError::new(StatusCode::BAD_REQUEST, req_id.0.clone(), "Invalid request body")
            .with_details(e.to_string())
    })?;

    let Some(pipeline) = state.pipeline.as_ref() else {
        tracing::error!("strategy requested but credentials are not configured");
        return Err(ApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            req_id.0,
            "Server configuration error",
        ));
    };

    tracing::info!(
        request_id = %req_id.0,
        channels = request.competitor_channels.len(),
        communities = request.communities.len(),
        "generating strategy"
    );

    match pipeline.run(&request).await {
        Ok(raw) => Ok(([(header::CONTENT_TYPE, "application/json")], raw).into_response()),
        Err(e) => Err(ApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            req_id.0,
            "Failed to generate strategy",
        )
        .with_details(e.to_string())),
    }
}

/// CORS preflight. The allow headers come from the router layers.
pub(super) async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

pub(super) async fn method_not_allowed(Extension(req_id): Extension<RequestId>) -> Response {
    let mut response =
        ApiError::new(StatusCode::METHOD_NOT_ALLOWED, req_id.0, "Method not allowed").into_response();
    response
        .headers_mut()
        .insert(header::ALLOW, HeaderValue::from_static(ALLOWED_METHODS));
    response
}

#[cfg(test)]
#[path = "strategy_test.rs"]
mod tests;
