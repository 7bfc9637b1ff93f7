//! Error types for the Child Support Guideline Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all failure conditions that can occur inside a guideline calculation.
//! Calculators never let these escape their public `calculate` boundary;
//! they are converted into [`CalcError`](crate::models::CalcError) entries
//! on the returned result instead.

use thiserror::Error;

/// The main error type for the guideline calculation engine.
///
/// # Example
///
/// ```
/// use guideline_engine::error::EngineError;
///
/// let error = EngineError::InvalidChildCount { provided: 0 };
/// assert_eq!(error.to_string(), "Number of children must be greater than 0.");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The number of children was zero or negative.
    #[error("Number of children must be greater than 0.")]
    InvalidChildCount {
        /// The child count that failed validation.
        provided: i32,
    },

    /// The obligation schedule has no column for the given child count.
    #[error("The obligation schedule has no entry for {provided} children.")]
    UnsupportedChildCount {
        /// The unsupported child count.
        provided: i32,
    },

    /// The combined adjusted gross income could not be resolved against the
    /// obligation schedule.
    ///
    /// The seeded Alabama schedule clamps incomes at both ends, so this is
    /// never produced by the current data; it remains the recognized signal
    /// for schedule variants that reject out-of-range incomes instead.
    #[error("Combined adjusted gross income {combined_adjusted_gross_income} is outside the supported schedule range.")]
    CagiOutOfRange {
        /// The combined adjusted gross income that was rejected.
        combined_adjusted_gross_income: i64,
    },

    /// An intermediate amount could not be represented in whole dollars.
    #[error("Arithmetic error: {message}")]
    Arithmetic {
        /// A description of the arithmetic failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
