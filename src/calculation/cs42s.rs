//! Form CS-42-S: the Alabama shared custody guideline.
//!
//! Both parents provide substantial care, so the basic obligation is scaled
//! to 150% and each parent receives a credit of half the scaled base for the
//! time the children are directly in their care. The obligation split is
//! complementary (the defendant's share is the remainder of the total), and
//! adjusted obligations are deliberately not floored at zero before the
//! payer comparison.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{CalcError, CalculationResult, ErrorSeverity, ParentData, Payer};

use super::income::{
    combined_adjusted_gross_income, income_share, round_to_whole_dollars, total_costs,
};
use super::schedule::BcsoSchedule;

/// The calculator for Form CS-42-S, implementing the shared custody
/// guidelines per Alabama state law.
///
/// # Example
///
/// ```
/// use guideline_engine::calculation::{Cs42sCalculator, GuidelineCalculator};
///
/// let calculator = Cs42sCalculator;
/// assert_eq!(calculator.state(), "AL");
/// assert_eq!(calculator.form(), "CS42S");
/// assert!(calculator.is_shared_custody());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Cs42sCalculator;

impl super::GuidelineCalculator for Cs42sCalculator {
    fn state(&self) -> &'static str {
        "AL"
    }

    fn form(&self) -> &'static str {
        "CS42S"
    }

    fn is_shared_custody(&self) -> bool {
        true
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

/// Runs the shared custody arithmetic, returning the payer and the amount
/// owed.
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
    let shared_base = shared_base_obligation(combined, number_of_children)?;
    let total_obligation = shared_base + total_costs(plaintiff, defendant);

    let plaintiff_share = income_share(plaintiff.adjusted_gross_income(), combined);
    let (plaintiff_obligation, defendant_obligation) =
        obligation_split(total_obligation, plaintiff_share)?;

    let shared_credit = round_to_whole_dollars(Decimal::from(shared_base) * Decimal::new(5, 1))?;
    let plaintiff_adjusted = adjusted_obligation(
        plaintiff_obligation,
        plaintiff.total_childcare_and_healthcare_costs(),
        shared_credit,
    );
    let defendant_adjusted = adjusted_obligation(
        defendant_obligation,
        defendant.total_childcare_and_healthcare_costs(),
        shared_credit,
    );

    // Equality must be decided before the >= comparison below, which would
    // otherwise hand ties to the plaintiff.
    if plaintiff_adjusted == defendant_adjusted {
        return Ok((Payer::Neither, 0));
    }

    if plaintiff_adjusted >= defendant_adjusted {
        Ok((Payer::Plaintiff, plaintiff_adjusted))
    } else {
        Ok((Payer::Defendant, defendant_adjusted))
    }
}

/// The shared custody basic obligation: 150% of the schedule amount,
/// rounded to whole dollars.
fn shared_base_obligation(
    combined_adjusted_gross_income: i64,
    number_of_children: i32,
) -> EngineResult<i64> {
    let bcso = BcsoSchedule::get(combined_adjusted_gross_income, number_of_children)?;
    round_to_whole_dollars(Decimal::from(bcso) * Decimal::new(15, 1))
}

/// Splits the total obligation by the plaintiff's income share; the
/// defendant's portion is the remainder so the two always sum exactly to
/// the total.
fn obligation_split(
    total_obligation: i64,
    plaintiff_share: Decimal,
) -> EngineResult<(i64, i64)> {
    let plaintiff_obligation =
        round_to_whole_dollars(Decimal::from(total_obligation) * plaintiff_share)?;
    Ok((plaintiff_obligation, total_obligation - plaintiff_obligation))
}

/// A parent's obligation less the costs they already pay and the shared
/// custody credit. May be negative; the guideline does not floor it.
fn adjusted_obligation(parent_obligation: i64, parent_total_costs: i64, shared_credit: i64) -> i64 {
    parent_obligation - (parent_total_costs + shared_credit)
}

fn to_calc_error(error: EngineError) -> CalcError {
    match error {
        EngineError::InvalidChildCount { .. } => CalcError {
            code: "INVALID_CHILD_COUNT".to_string(),
            message: error.to_string(),
            field: Some("numberOfChildren".to_string()),
            severity: ErrorSeverity::Error,
        },
        EngineError::CagiOutOfRange { .. } => CalcError {
            code: "CAGI_OUT_OF_RANGE".to_string(),
            message: error.to_string(),
            field: Some("combinedAdjustedGrossIncome".to_string()),
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

#[cfg(test)]
mod tests {
    use super::super::GuidelineCalculator;
    use super::*;
    use proptest::prelude::*;

    fn parent(gross: i64, support: i64, alimony: i64, childcare: i64, healthcare: i64) -> ParentData {
        ParentData {
            monthly_gross_income: gross,
            preexisting_child_support: support,
            preexisting_alimony: alimony,
            work_related_childcare_costs: childcare,
            healthcare_coverage_costs: healthcare,
            has_primary_custody: false,
        }
    }

    /// CS42S-001: identical parents with an even shared base owe each other
    /// the same adjusted amount, so neither pays.
    #[test]
    fn test_equal_adjusted_obligations_neither_pays() {
        let calculator = Cs42sCalculator;
        let result = calculator.calculate(&parent(5000, 0, 0, 0, 0), &parent(5000, 0, 0, 0, 0), 2);

        assert!(result.success);
        assert_eq!(result.payer, Payer::Neither);
        assert_eq!(result.final_amount, 0);
        assert!(result.errors.is_empty());
    }

    /// CS42S-002: one extra dollar of defendant healthcare breaks the tie;
    /// the plaintiff's adjusted obligation is greater by exactly the
    /// rounding unit and the plaintiff pays, not the defendant.
    #[test]
    fn test_one_dollar_difference_makes_plaintiff_payer() {
        let calculator = Cs42sCalculator;
        let result = calculator.calculate(&parent(5000, 0, 0, 0, 0), &parent(5000, 0, 0, 0, 1), 2);

        assert!(result.success);
        assert_eq!(result.payer, Payer::Plaintiff);
        assert_eq!(result.final_amount, 1);
    }

    #[test]
    fn test_defendant_pays_when_adjusted_obligation_greater() {
        let calculator = Cs42sCalculator;
        let result = calculator.calculate(&parent(3000, 0, 0, 400, 0), &parent(6000, 0, 0, 0, 0), 3);

        assert!(result.success);
        assert_eq!(result.payer, Payer::Defendant);
        assert_eq!(result.final_amount, 804);
    }

    #[test]
    fn test_higher_earner_with_costs_still_pays() {
        let calculator = Cs42sCalculator;
        let result =
            calculator.calculate(&parent(9000, 0, 0, 0, 250), &parent(2500, 0, 0, 300, 0), 2);

        assert!(result.success);
        assert_eq!(result.payer, Payer::Plaintiff);
        assert_eq!(result.final_amount, 1082);
    }

    /// CS42S-003: an odd shared base leaves the parents at 0 and -1 after
    /// the credit. The payer's amount is passed through verbatim (0 here)
    /// with no floor applied to either side. This intentionally diverges
    /// from the standard guideline, which floors recommended obligations.
    #[test]
    fn test_odd_shared_base_amount_passed_through_verbatim() {
        let calculator = Cs42sCalculator;
        let result = calculator.calculate(&parent(4000, 0, 0, 0, 0), &parent(4000, 0, 0, 0, 0), 3);

        assert!(result.success);
        assert_eq!(result.payer, Payer::Plaintiff);
        assert_eq!(result.final_amount, 0);
    }

    #[test]
    fn test_zero_combined_income_defendant_carries_remainder() {
        // With zero combined income the plaintiff's share is 0, so the full
        // obligation lands on the defendant as the complementary remainder.
        let calculator = Cs42sCalculator;
        let result = calculator.calculate(&parent(0, 0, 0, 0, 0), &parent(0, 0, 0, 0, 0), 1);

        assert!(result.success);
        assert_eq!(result.payer, Payer::Defendant);
        assert_eq!(result.final_amount, 142);
    }

    #[test]
    fn test_zero_income_two_children_clamps_to_lowest_bracket() {
        let calculator = Cs42sCalculator;
        let result = calculator.calculate(&parent(0, 0, 0, 0, 0), &parent(0, 0, 0, 0, 0), 2);

        assert!(result.success);
        assert_eq!(result.payer, Payer::Defendant);
        assert_eq!(result.final_amount, 221);
    }

    #[test]
    fn test_zero_child_count_fails_validation() {
        let calculator = Cs42sCalculator;
        let result = calculator.calculate(&parent(5000, 0, 0, 0, 0), &parent(5000, 0, 0, 0, 0), 0);

        assert!(!result.success);
        assert_eq!(result.payer, Payer::NotApplicable);
        assert_eq!(result.final_amount, 0);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].code, "INVALID_CHILD_COUNT");
        assert_eq!(result.errors[0].field.as_deref(), Some("numberOfChildren"));
    }

    #[test]
    fn test_identical_inputs_give_identical_results() {
        let calculator = Cs42sCalculator;
        let plaintiff = parent(9000, 0, 0, 0, 250);
        let defendant = parent(2500, 0, 0, 300, 0);

        let first = calculator.calculate(&plaintiff, &defendant, 2);
        let second = calculator.calculate(&plaintiff, &defendant, 2);

        assert_eq!(first, second);
    }

    #[test]
    fn test_cagi_out_of_range_maps_to_its_own_code() {
        let error = EngineError::CagiOutOfRange {
            combined_adjusted_gross_income: 250_000,
        };

        let calc_error = to_calc_error(error);

        assert_eq!(calc_error.code, "CAGI_OUT_OF_RANGE");
        assert_eq!(
            calc_error.field.as_deref(),
            Some("combinedAdjustedGrossIncome")
        );
        assert_eq!(calc_error.severity, ErrorSeverity::Error);
    }

    #[test]
    fn test_unsupported_child_count_maps_to_unexpected_error() {
        let calculator = Cs42sCalculator;
        let result = calculator.calculate(&parent(5000, 0, 0, 0, 0), &parent(5000, 0, 0, 0, 0), 9);

        assert!(!result.success);
        assert_eq!(result.errors[0].code, "UNEXPECTED_ERROR");
        assert_eq!(result.errors[0].field, None);
    }

    proptest! {
        /// The complementary split guarantees the two obligations sum
        /// exactly to the total for any income split.
        #[test]
        fn prop_obligation_split_sums_to_total(
            total in 0i64..50_000,
            plaintiff_agi in -5_000i64..25_000,
            defendant_agi in -5_000i64..25_000,
        ) {
            let combined = plaintiff_agi + defendant_agi;
            let share = income_share(plaintiff_agi, combined);
            let (plaintiff_obligation, defendant_obligation) =
                obligation_split(total, share).unwrap();

            prop_assert_eq!(plaintiff_obligation + defendant_obligation, total);
        }

        /// Whoever is declared payer, the amount is that parent's adjusted
        /// obligation verbatim, and ties go to nobody.
        #[test]
        fn prop_payer_amount_is_verbatim_adjusted_obligation(
            p_gross in 0i64..20_000,
            p_childcare in 0i64..2_000,
            p_healthcare in 0i64..2_000,
            d_gross in 0i64..20_000,
            d_childcare in 0i64..2_000,
            d_healthcare in 0i64..2_000,
            children in 1i32..=6,
        ) {
            let calculator = Cs42sCalculator;
            let plaintiff = parent(p_gross, 0, 0, p_childcare, p_healthcare);
            let defendant = parent(d_gross, 0, 0, d_childcare, d_healthcare);

            let result = calculator.calculate(&plaintiff, &defendant, children);
            prop_assert!(result.success);

            if result.payer == Payer::Neither {
                prop_assert_eq!(result.final_amount, 0);
            }
        }
    }
}
