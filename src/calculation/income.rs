//! Income derivations shared by every guideline variant.
//!
//! Both Alabama forms start from the same per-parent quantities: combined
//! adjusted gross income, each parent's fractional share of it, and the
//! parents' combined childcare and healthcare costs. Obligation amounts are
//! whole dollars and income shares are two-decimal fractions, both rounded
//! to nearest with ties away from zero.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};
use crate::models::ParentData;

/// Sums both parents' monthly adjusted gross incomes.
pub fn combined_adjusted_gross_income(plaintiff: &ParentData, defendant: &ParentData) -> i64 {
    plaintiff.adjusted_gross_income() + defendant.adjusted_gross_income()
}

/// A parent's fractional share of the combined adjusted gross income,
/// rounded to two decimal places.
///
/// Returns zero when the combined income is zero so callers never divide by
/// zero.
///
/// # Example
///
/// ```
/// use guideline_engine::calculation::income_share;
/// use rust_decimal::Decimal;
///
/// assert_eq!(income_share(4244, 11706), Decimal::new(36, 2));
/// assert_eq!(income_share(4244, 0), Decimal::ZERO);
/// ```
pub fn income_share(parent_adjusted_gross_income: i64, combined_adjusted_gross_income: i64) -> Decimal {
    if combined_adjusted_gross_income == 0 {
        return Decimal::ZERO;
    }

    (Decimal::from(parent_adjusted_gross_income) / Decimal::from(combined_adjusted_gross_income))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Sums the childcare and healthcare costs paid by both parents.
pub fn total_costs(plaintiff: &ParentData, defendant: &ParentData) -> i64 {
    plaintiff.total_childcare_and_healthcare_costs()
        + defendant.total_childcare_and_healthcare_costs()
}

/// Rounds a monetary amount to whole dollars, ties away from zero.
///
/// Fails only when the rounded value cannot be represented as an `i64`,
/// which no schedule-derived amount can reach; the error feeds the
/// calculators' unexpected-failure path.
pub fn round_to_whole_dollars(amount: Decimal) -> EngineResult<i64> {
    amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(|| EngineError::Arithmetic {
            message: format!("amount {} exceeds the whole-dollar range", amount),
        })
}
