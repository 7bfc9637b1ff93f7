//! Calculation result models for the Child Support Guideline Engine.
//!
//! This module contains the [`CalculationResult`] type that every guideline
//! calculator returns, along with the error entries it carries on failure.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies which parent owes the final amount.
///
/// `Neither` is produced only by shared-custody guidelines when both parents'
/// adjusted obligations are equal; `NotApplicable` is the placeholder on
/// failed calculations and serializes as `"N/A"`.
///
/// # Example
///
/// ```
/// use guideline_engine::models::Payer;
///
/// assert_eq!(Payer::Defendant.to_string(), "Defendant");
/// assert_eq!(serde_json::to_string(&Payer::NotApplicable).unwrap(), "\"N/A\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Payer {
    /// The plaintiff parent on the original court order pays.
    Plaintiff,
    /// The defendant parent on the original court order pays.
    Defendant,
    /// Neither parent pays (shared custody, equal adjusted obligations).
    Neither,
    /// No payer could be determined because the calculation failed.
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl fmt::Display for Payer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Payer::Plaintiff => "Plaintiff",
            Payer::Defendant => "Defendant",
            Payer::Neither => "Neither",
            Payer::NotApplicable => "N/A",
        };
        write!(f, "{}", name)
    }
}

/// The severity level of an error encountered during a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorSeverity {
    /// Informational only; the result is still usable.
    Info,
    /// A potential issue that did not prevent the calculation.
    Warning,
    /// The calculation failed and the result carries no usable amount.
    Error,
}

/// A single error produced while running a guideline calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalcError {
    /// The code identifying the type of calculation error.
    pub code: String,
    /// The human-readable message describing the error.
    pub message: String,
    /// The input field the error relates to (e.g. "numberOfChildren"),
    /// if applicable.
    pub field: Option<String>,
    /// The severity level of the error.
    pub severity: ErrorSeverity,
}

/// The complete result of a child support calculation.
///
/// Identifies the guideline that produced it, the paying parent, and the
/// amount owed. Constructed fresh by every `calculate` call and never
/// mutated after return; on failure `payer` is
/// [`Payer::NotApplicable`], `final_amount` is `0`, and `errors` explains
/// why.
///
/// # Example
///
/// ```
/// use guideline_engine::models::{CalculationResult, Payer};
///
/// let result = CalculationResult::failure_shell("AL", "CS42", 2);
/// assert!(!result.success);
/// assert_eq!(result.payer, Payer::NotApplicable);
/// assert_eq!(result.final_amount, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Whether the calculation completed successfully.
    pub success: bool,
    /// The two-letter abbreviation of the state whose guideline ran.
    pub state: String,
    /// The specific form or guideline that produced this result.
    pub form: String,
    /// The number of children shared between both parents in the order.
    pub number_of_children: i32,
    /// The parent who owes `final_amount`.
    pub payer: Payer,
    /// The amount owed by `payer` in whole dollars; `0` when the payer is
    /// `Neither` or on failure.
    pub final_amount: i64,
    /// Errors encountered during the calculation, in the order they were
    /// detected; empty on success.
    pub errors: Vec<CalcError>,
}

impl CalculationResult {
    /// Creates the failed-result shell a calculator starts from: no payer,
    /// zero amount, `success` false until the calculation completes.
    pub fn failure_shell(state: &str, form: &str, number_of_children: i32) -> Self {
        Self {
            success: false,
            state: state.to_string(),
            form: form.to_string(),
            number_of_children,
            payer: Payer::NotApplicable,
            final_amount: 0,
            errors: Vec::new(),
        }
    }
}
