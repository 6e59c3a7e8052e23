//! Request handlers.

use std::time::Instant;

use axum::{
    extract::{RawQuery, State},
    http::{header, HeaderMap, Method},
    response::{IntoResponse, Response},
};

use crate::aggregate::aggregate;
use crate::http::params::RequestParameters;
use crate::http::request::request_id;
use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::observability::metrics;

/// `/random/mean`: fetch `requests` batches of `length` integers and return
/// each batch's standard deviation plus one for all of them combined.
pub async fn random_mean(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Response {
    let start_time = Instant::now();
    let request_id = request_id(&headers);

    let response = match serve_random_mean(&state, &method, query.as_deref(), &request_id).await {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => {
            match &e {
                ApiError::Upstream(upstream) => tracing::error!(
                    request_id = %request_id,
                    kind = upstream.kind(),
                    error = %upstream,
                    "Aggregation failed"
                ),
                ApiError::Serialization(err) => tracing::error!(
                    request_id = %request_id,
                    error = %err,
                    "Failed to encode response"
                ),
                other => tracing::debug!(
                    request_id = %request_id,
                    method = %method,
                    reason = %other,
                    "Request rejected"
                ),
            }
            e.into_response()
        }
    };

    metrics::record_request(response.status().as_u16(), start_time);
    response
}

async fn serve_random_mean(
    state: &AppState,
    method: &Method,
    query: Option<&str>,
    request_id: &str,
) -> Result<Vec<u8>, ApiError> {
    if *method != Method::GET {
        return Err(ApiError::MethodNotSupported);
    }

    let params = RequestParameters::from_query(query)?;
    tracing::debug!(
        request_id = %request_id,
        requests = params.requests,
        length = params.length,
        "Aggregating random batches"
    );

    let batches = aggregate(&state.upstream, params.requests, params.length).await?;
    Ok(serde_json::to_vec(&batches)?)
}
