//! Form CS-42: the Alabama standard custody guideline.
//!
//! One parent holds primary custody; the other pays. The basic obligation
//! from the Rule 32 schedule is grossed up by the parents' combined
//! childcare and healthcare costs, split in proportion to adjusted income,
//! reduced by the costs the paying parent already covers, and capped by the
//! self-support reserve rule.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{CalcError, CalculationResult, ErrorSeverity, ParentData, Payer};

use super::income::{
    combined_adjusted_gross_income, income_share, round_to_whole_dollars, total_costs,
};
use super::schedule::BcsoSchedule;

/// The self-support reserve: the portion of a parent's monthly gross income
/// that is protected before support capacity is measured, per the Rule 32
/// schedule.
pub const SELF_SUPPORT_RESERVE: i64 = 981;

/// The calculator for Form CS-42, implementing the standard custody
/// guidelines per Alabama state law.
///
/// # Example
///
/// ```
/// use guideline_engine::calculation::{Cs42Calculator, GuidelineCalculator};
///
/// let calculator = Cs42Calculator;
/// assert_eq!(calculator.state(), "AL");
/// assert_eq!(calculator.form(), "CS42");
/// assert!(!calculator.is_shared_custody());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Cs42Calculator;

impl super::GuidelineCalculator for Cs42Calculator {
    fn state(&self) -> &'static str {
        "AL"
    }

    fn form(&self) -> &'static str {
        "CS42"
    }

    fn is_shared_custody(&self) -> bool {
        false
    }

    fn calculate(
        &self,
        plaintiff: &ParentData,
        defendant: &ParentData,
        number_of_children: i32,
    ) -> CalculationResult {
        let mut result =
            CalculationResult::failure_shell(self.state(), self.form(), number_of_children);

        match compute(plaintiff, defendant, number_of_children) {
            Ok((payer, final_amount)) => {
                result.payer = payer;
                result.final_amount = final_amount;
                result.success = true;
            }
            Err(error) => result.errors.push(to_calc_error(error)),
        }

        result
    }
}

/// Runs the guideline arithmetic, returning the payer and the amount owed.
fn compute(
    plaintiff: &ParentData,
    defendant: &ParentData,
    number_of_children: i32,
) -> EngineResult<(Payer, i64)> {
    if number_of_children <= 0 {
        return Err(EngineError::InvalidChildCount {
            provided: number_of_children,
        });
    }

    let combined = combined_adjusted_gross_income(plaintiff, defendant);
    let bcso = BcsoSchedule::get(combined, number_of_children)?;
    let total_obligation = bcso + total_costs(plaintiff, defendant);

    let plaintiff_amounts = parent_amounts(plaintiff, combined, total_obligation)?;
    let defendant_amounts = parent_amounts(defendant, combined, total_obligation)?;

    // The payer is the parent without primary custody.
    if plaintiff.has_primary_custody {
        Ok((Payer::Defendant, defendant_amounts.final_amount()))
    } else {
        Ok((Payer::Plaintiff, plaintiff_amounts.final_amount()))
    }
}

/// One parent's obligation after cost offsets and the self-support reserve
/// cap.
struct ParentAmounts {
    /// The parent's share of the total obligation less the costs they
    /// already pay, floored at zero.
    recommended: i64,
    /// 85% of income above the self-support reserve, floored at zero.
    max_after_reserve: i64,
}

impl ParentAmounts {
    /// The lesser of the recommended obligation and the reserve cap.
    fn final_amount(&self) -> i64 {
        self.recommended.min(self.max_after_reserve)
    }
}

fn parent_amounts(
    parent: &ParentData,
    combined: i64,
    total_obligation: i64,
) -> EngineResult<ParentAmounts> {
    let share = income_share(parent.adjusted_gross_income(), combined);
    let obligation = round_to_whole_dollars(Decimal::from(total_obligation) * share)?;
    let recommended = (obligation - parent.total_childcare_and_healthcare_costs()).max(0);

    let income_available = parent.monthly_gross_income - SELF_SUPPORT_RESERVE;
    let max_after_reserve =
        round_to_whole_dollars(Decimal::from(income_available) * Decimal::new(85, 2))?.max(0);

    Ok(ParentAmounts {
        recommended,
        max_after_reserve,
    })
}

fn to_calc_error(error: EngineError) -> CalcError {
    match error {
        EngineError::InvalidChildCount { .. } => CalcError {
            code: "INVALID_CHILD_COUNT".to_string(),
            message: error.to_string(),
            field: Some("numberOfChildren".to_string()),
            severity: ErrorSeverity::Error,
        },
        _ => CalcError {
            code: "UNEXPECTED_ERROR".to_string(),
            message: "An unexpected error occurred during calculation.".to_string(),
            field: None,
            severity: ErrorSeverity::Error,
        },
    }
}
