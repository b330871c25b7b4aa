//! HTTP request handlers for the Leave and Bonus Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::lifecycle::{check_and_process_accrual, create_leave_request, review_leave_request};
use crate::models::{BonusFormula, BonusSummary};

use super::request::{BonusPreviewRequest, CreateLeaveRequest, ReviewLeaveRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/leave/requests", post(create_request_handler))
        .route("/leave/requests/:id/review", post(review_request_handler))
        .route("/leave/balances/:user_id", get(balance_handler))
        .route("/bonus/preview", post(bonus_preview_handler))
        .with_state(state)
}

/// Maps a JSON extraction rejection to a 400 response.
fn json_rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (StatusCode::BAD_REQUEST, Json(error)).into_response()
}

/// Handler for `POST /leave/requests`.
async fn create_request_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLeaveRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };

    info!(
        correlation_id = %correlation_id,
        user_id = %body.user_id,
        "Processing leave request creation"
    );

    let user_id = body.user_id.clone();
    match create_leave_request(state.store(), &user_id, body.into(), Utc::now()) {
        Ok(request) => (StatusCode::CREATED, Json(request)).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Leave request creation failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `POST /leave/requests/{id}/review`.
async fn review_request_handler(
    State(state): State<AppState>,
    Path(request_id): Path<Uuid>,
    payload: Result<Json<ReviewLeaveRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };

    info!(
        correlation_id = %correlation_id,
        request_id = %request_id,
        reviewer_id = %body.reviewer_id,
        "Processing leave request review"
    );

    match review_leave_request(
        state.store(),
        request_id,
        &body.reviewer_id,
        body.status,
        body.review_notes,
        Utc::now(),
    ) {
        Ok(request) => (StatusCode::OK, Json(request)).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Leave request review failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `GET /leave/balances/{user_id}`.
///
/// Runs the accrual check as a side effect, so the returned balance always
/// reflects any monthly accrual that has come due.
async fn balance_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    match check_and_process_accrual(state.store(), &user_id, Utc::now()) {
        Ok(balance) => (StatusCode::OK, Json(balance)).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, user_id = %user_id, error = %err, "Balance lookup failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `POST /bonus/preview`.
async fn bonus_preview_handler(
    payload: Result<Json<BonusPreviewRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };

    let formula = BonusFormula {
        user_id: body.user_id,
        amount_per_hour: body.amount_per_hour,
        hours_threshold: body.hours_threshold,
    };
    let summary = BonusSummary::compute(&formula, body.hours_worked);
    (StatusCode::OK, Json(summary)).into_response()
}
