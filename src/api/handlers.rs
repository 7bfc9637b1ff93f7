//! HTTP request handlers for the guideline engine API.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::ParentData;

use super::request::CalculationRequest;
use super::response::{ApiError, CalculationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate/:state/:form", post(calculate_handler))
        .route("/guidelines", get(list_guidelines_handler))
        .with_state(state)
}

/// Handler for GET /guidelines.
///
/// Lists the registered state/form combinations for the form-selection UI.
async fn list_guidelines_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.registry().list())
}

/// Handler for POST /calculate/{state}/{form}.
///
/// Resolves the requested guideline, runs the caller-side validation the
/// engine contract assumes, and returns the wrapped calculation result.
/// Failed calculations (engine-level validation) still return 200 with
/// `success = false`; the result shape is the contract.
async fn calculate_handler(
    State(state): State<AppState>,
    Path((guideline_state, guideline_form)): Path<(String, String)>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        state = %guideline_state,
        form = %guideline_form,
        "Processing calculation request"
    );

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
                        ApiError::new("VALIDATION_ERROR", body_text)
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
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let Some(calculator) = state.registry().get(&guideline_state, &guideline_form) else {
        warn!(
            correlation_id = %correlation_id,
            state = %guideline_state,
            form = %guideline_form,
            "Unknown guideline requested"
        );
        return (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "application/json")],
            Json(ApiError::unknown_guideline(&guideline_state, &guideline_form)),
        )
            .into_response();
    };

    // Caller-side validation: the engine assumes non-negative fields and,
    // for the standard form, a single custodial parent.
    let field_errors = request.validate_for(calculator.is_shared_custody());
    if !field_errors.is_empty() {
        warn!(
            correlation_id = %correlation_id,
            error_count = field_errors.len(),
            "Request failed caller-side validation"
        );
        return (
            StatusCode::BAD_REQUEST,
            [(header::CONTENT_TYPE, "application/json")],
            Json(ApiError::validation_error(field_errors)),
        )
            .into_response();
    }

    let plaintiff: ParentData = request.plaintiff.into();
    let defendant: ParentData = request.defendant.into();

    let result = calculator.calculate(&plaintiff, &defendant, request.number_of_children);

    if result.success {
        info!(
            correlation_id = %correlation_id,
            payer = %result.payer,
            final_amount = result.final_amount,
            "Calculation completed successfully"
        );
    } else {
        // The engine never logs; surfacing its failures is the caller's job.
        let codes: Vec<&str> = result.errors.iter().map(|e| e.code.as_str()).collect();
        warn!(
            correlation_id = %correlation_id,
            codes = ?codes,
            "Calculation failed"
        );
    }

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(CalculationResponse::new(result)),
    )
        .into_response()
}
