//! Calculation logic for the Child Support Guideline Engine.
//!
//! This module contains the basic child support obligation schedule, the
//! income derivations shared by every guideline variant, and the two Alabama
//! guideline calculators: CS-42 (standard custody) and CS-42-S (shared
//! custody).

mod cs42;
mod cs42s;
mod income;
mod schedule;

pub use cs42::{Cs42Calculator, SELF_SUPPORT_RESERVE};
pub use cs42s::Cs42sCalculator;
pub use income::{
    combined_adjusted_gross_income, income_share, round_to_whole_dollars, total_costs,
};
pub use schedule::BcsoSchedule;

use crate::models::{CalculationResult, ParentData};

/// A child support calculator for one state guideline form.
///
/// Each guideline variant is an independent implementation of this one
/// contract, selected externally by its `(state, form)` identity; adding a
/// new state or form means adding a new implementation, not a subclass. The
/// identity metadata is consumed by the routing catalog, and
/// `is_shared_custody` selects which caller-side validation rules apply
/// (the standard variant requires exactly one parent marked as having
/// primary custody, enforced by the caller, not the engine).
///
/// Implementations are pure: `calculate` never panics, never logs, and
/// encodes every failure mode in the returned result.
pub trait GuidelineCalculator: Send + Sync {
    /// The two-letter abbreviation of the state this calculator serves.
    fn state(&self) -> &'static str;

    /// The specific form or guideline this calculator implements.
    fn form(&self) -> &'static str;

    /// Whether this calculator implements a shared custody guideline.
    fn is_shared_custody(&self) -> bool {
        false
    }

    /// Calculates the final child support obligation for both parents and
    /// determines which parent is the payer.
    fn calculate(
        &self,
        plaintiff: &ParentData,
        defendant: &ParentData,
        number_of_children: i32,
    ) -> CalculationResult;
}
