//! Response types for the guideline engine API.
//!
//! The success envelope wraps the engine's [`CalculationResult`] with
//! request bookkeeping (correlation id, timestamp, engine version); the
//! error structure covers request rejection, unknown guidelines, and
//! caller-side validation failures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::CalculationResult;

/// Success envelope for the calculate endpoint.
///
/// The engine's result is pure and carries no request identity; the
/// envelope adds it so responses can be correlated with server logs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Unique identifier for this calculation request.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub calculated_at: DateTime<Utc>,
    /// The version of the engine that produced the result.
    pub engine_version: String,
    /// The calculation result itself.
    pub result: CalculationResult,
}

impl CalculationResponse {
    /// Wraps a calculation result with fresh request bookkeeping.
    pub fn new(result: CalculationResult) -> Self {
        Self {
            calculation_id: Uuid::new_v4(),
            calculated_at: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            result,
        }
    }
}

/// A single caller-side validation failure, keyed by the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// The qualified field name (e.g. "Plaintiff.MonthlyGrossIncome").
    pub field: String,
    /// Why the field was rejected.
    pub message: String,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Field-level validation failures, when applicable.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            errors: Vec::new(),
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
            errors: Vec::new(),
        }
    }

    /// Creates a validation error carrying field-level failures.
    pub fn validation_error(errors: Vec<FieldError>) -> Self {
        Self {
            code: "VALIDATION_ERROR".to_string(),
            message: "The request failed validation.".to_string(),
            details: None,
            errors,
        }
    }

    /// Creates an unknown-guideline error for an unregistered state/form
    /// pair.
    pub fn unknown_guideline(state: &str, form: &str) -> Self {
        Self::with_details(
            "UNKNOWN_GUIDELINE",
            format!("No calculator is registered for {} {}", state, form),
            "Use GET /guidelines to list the supported state and form combinations",
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}
