//! HTTP request handlers for the cost engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::BusinessSnapshot;
use crate::validation::validate_snapshot;

use super::request::SnapshotRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employee-costs", post(employee_costs_handler))
        .route("/ebitda", post(ebitda_handler))
        .with_state(state)
}

/// Handler for POST /employee-costs.
///
/// Returns fully loaded costs for every employee in the snapshot plus a
/// roster summary. Documents and revenue range are ignored.
async fn employee_costs_handler(
    State(state): State<AppState>,
    payload: Result<Json<SnapshotRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing employee cost request");

    let snapshot = match accept_snapshot(payload, correlation_id) {
        Ok(snapshot) => snapshot,
        Err(error) => return error.into_response(),
    };

    let start_time = Instant::now();
    let result = state.engine().calculate_employee_costs(
        &snapshot.employees,
        snapshot.overhead.as_ref(),
        Utc::now(),
    );

    info!(
        correlation_id = %correlation_id,
        headcount = result.summary.total_headcount,
        total_fully_loaded_cost = %result.summary.total_fully_loaded_cost,
        duration_us = start_time.elapsed().as_micros(),
        "Employee cost calculation completed"
    );

    json_ok(result)
}

/// Handler for POST /ebitda.
///
/// Insufficient data is not an error: a snapshot with no revenue source
/// returns 200 with no breakdown and a warning.
async fn ebitda_handler(
    State(state): State<AppState>,
    payload: Result<Json<SnapshotRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing EBITDA request");

    let snapshot = match accept_snapshot(payload, correlation_id) {
        Ok(snapshot) => snapshot,
        Err(error) => return error.into_response(),
    };

    let start_time = Instant::now();
    let result = state.engine().calculate_ebitda(&snapshot, Utc::now());

    info!(
        correlation_id = %correlation_id,
        has_breakdown = result.breakdown.is_some(),
        operating_loss = result.is_operating_loss(),
        warnings = result.warnings.len(),
        duration_us = start_time.elapsed().as_micros(),
        "EBITDA calculation completed"
    );

    json_ok(result)
}

/// Parses and validates the request body into a domain snapshot.
fn accept_snapshot(
    payload: Result<Json<SnapshotRequest>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<BusinessSnapshot, ApiErrorResponse> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return Err(ApiErrorResponse::bad_request(error));
        }
    };

    let snapshot: BusinessSnapshot = request.into();
    if let Err(err) = validate_snapshot(&snapshot) {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Snapshot validation failed"
        );
        return Err(err.into());
    }

    Ok(snapshot)
}

fn json_ok<T: serde::Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
