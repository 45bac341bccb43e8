//! HTTP request handlers for the attendance reconciliation API.
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
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{
    RawSourceRecord, ReconciliationReport, ReportingWindow, WeeklyReport,
};
use crate::reconcile::{ReconcileOutcome, reconcile_records, summarize_window};

use super::request::{ReconcileRequest, WeeklyRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/reconcile", post(reconcile_handler))
        .route("/reconcile/weekly", post(weekly_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Maps a body-extraction failure onto the API error vocabulary.
fn rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
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
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for the POST /reconcile endpoint.
///
/// Accepts a batch of raw feed records and returns the merged, classified
/// records with run diagnostics.
async fn reconcile_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReconcileRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing reconcile request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return json_response(
                StatusCode::BAD_REQUEST,
                rejection_error(correlation_id, rejection),
            );
        }
    };

    let raw_records: Vec<RawSourceRecord> =
        request.records.into_iter().map(Into::into).collect();

    let started = Instant::now();
    let ReconcileOutcome {
        records,
        diagnostics,
    } = reconcile_records(&raw_records, state.engine_config());
    let duration_us = started.elapsed().as_micros() as u64;

    info!(
        correlation_id = %correlation_id,
        raw_count = raw_records.len(),
        merged_count = records.len(),
        dropped_count = diagnostics.dropped_count,
        duration_us,
        "Reconciliation completed"
    );

    let report = ReconciliationReport {
        run_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        records,
        diagnostics,
        duration_us,
    };
    json_response(StatusCode::OK, report)
}

/// Handler for the POST /reconcile/weekly endpoint.
///
/// Reconciles a batch of raw feed records and rolls the classified days up
/// into one summary per worker for the requested reporting window.
async fn weekly_handler(
    State(state): State<AppState>,
    payload: Result<Json<WeeklyRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing weekly reconcile request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return json_response(
                StatusCode::BAD_REQUEST,
                rejection_error(correlation_id, rejection),
            );
        }
    };

    let window: ReportingWindow = request.window.into();
    if !window.is_valid() {
        warn!(
            correlation_id = %correlation_id,
            start_date = %window.start_date,
            end_date = %window.end_date,
            "Rejected inverted reporting window"
        );
        let api_error = ApiErrorResponse {
            status: StatusCode::BAD_REQUEST,
            error: ApiError::invalid_window(window.start_date, window.end_date),
        };
        return api_error.into_response();
    }

    let raw_records: Vec<RawSourceRecord> =
        request.records.into_iter().map(Into::into).collect();

    let started = Instant::now();
    let ReconcileOutcome {
        records,
        diagnostics,
    } = reconcile_records(&raw_records, state.engine_config());
    let summaries = summarize_window(records, &window);
    let duration_us = started.elapsed().as_micros() as u64;

    info!(
        correlation_id = %correlation_id,
        raw_count = raw_records.len(),
        summaries_count = summaries.len(),
        dropped_count = diagnostics.dropped_count,
        duration_us,
        "Weekly reconciliation completed"
    );

    let report = WeeklyReport {
        run_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        window,
        summaries,
        diagnostics,
        duration_us,
    };
    json_response(StatusCode::OK, report)
}
