//! `GET /cubic-root?d=<float>` handler.
//!
//! Lifecycle per request:
//! - in-flight gauge up (guard drops it again on every path)
//! - request size observed from `Content-Length` (0 when absent)
//! - parse `d`, solve, encode `{result, message}`
//! - latency + request count recorded under the final status label

use std::time::Instant;

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};

use cuberoot_core::cube_root;
use cuberoot_core::error::{ClientCode, CubeRootError, Result};
use cuberoot_core::protocol::{CubicRootRequest, CubicRootResponse};

use crate::app_state::AppState;
use crate::obs::metrics::Outcome;

const INTERNAL_ERROR_BODY: &str = "Internal server error";

pub async fn cubic_root(
    State(app): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<Vec<(String, String)>>,
) -> Response {
    let metrics = app.metrics();
    let _in_flight = metrics.track_in_flight();
    let started = Instant::now();

    metrics.observe_request_size(content_length(&headers));

    let (outcome, response) = match compute(&query) {
        Ok(body) => {
            metrics.observe_response_size(body.len());
            (Outcome::Ok, json_response(body))
        }
        Err(e) => (Outcome::from(e.client_code()), error_response(&e)),
    };

    metrics.record(outcome, started.elapsed());
    response
}

fn compute(query: &[(String, String)]) -> Result<Vec<u8>> {
    let req = CubicRootRequest::from_query(query.iter().map(|(k, v)| (k.as_str(), v.as_str())))?;
    tracing::debug!(d = req.d, "received request");

    let resp = CubicRootResponse::done(cube_root(req.d));
    tracing::debug!(d = req.d, result = resp.result, message = %resp.message, "calculated result");

    resp.to_json()
}

fn content_length(headers: &HeaderMap) -> u64 {
    headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse().ok())
        .unwrap_or(0)
}

fn json_response(body: Vec<u8>) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

fn status_for(code: ClientCode) -> StatusCode {
    match code {
        ClientCode::BadRequest => StatusCode::BAD_REQUEST,
        ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

// Client errors echo their message; server errors are logged and masked.
fn error_response(err: &CubeRootError) -> Response {
    let code = err.client_code();
    let body = match code {
        ClientCode::BadRequest => err.to_string(),
        ClientCode::Internal => {
            tracing::error!(error = %err, code = code.as_str(), "cubic root request failed");
            INTERNAL_ERROR_BODY.to_string()
        }
    };
    (status_for(code), body).into_response()
}
