//! Parent financial record and its derived quantities.

use serde::{Deserialize, Serialize};

/// Financial data for one parent: income, preexisting obligations, and costs
/// paid for the children.
///
/// All five monetary fields are whole currency units and are validated as
/// non-negative by the caller before a calculator is invoked; the engine does
/// not re-validate them. The derived quantities are computed on demand and
/// never stored.
///
/// # Example
///
/// ```
/// use guideline_engine::models::ParentData;
///
/// let parent = ParentData {
///     monthly_gross_income: 8462,
///     preexisting_child_support: 0,
///     preexisting_alimony: 1000,
///     work_related_childcare_costs: 0,
///     healthcare_coverage_costs: 292,
///     has_primary_custody: false,
/// };
/// assert_eq!(parent.adjusted_gross_income(), 7462);
/// assert_eq!(parent.total_childcare_and_healthcare_costs(), 292);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentData {
    /// The parent's monthly gross income in whole dollars.
    pub monthly_gross_income: i64,
    /// Child support obligations established prior to this calculation.
    pub preexisting_child_support: i64,
    /// Alimony obligations established prior to this calculation.
    pub preexisting_alimony: i64,
    /// Childcare costs incurred for work-related purposes.
    pub work_related_childcare_costs: i64,
    /// Cost of healthcare coverage carried for the children.
    pub healthcare_coverage_costs: i64,
    /// Whether this parent has primary custody of the children.
    #[serde(default)]
    pub has_primary_custody: bool,
}

impl ParentData {
    /// Monthly gross income less preexisting child support and alimony.
    ///
    /// May be negative when preexisting obligations exceed income; the value
    /// is deliberately not clamped at this stage.
    pub fn adjusted_gross_income(&self) -> i64 {
        self.monthly_gross_income - (self.preexisting_child_support + self.preexisting_alimony)
    }

    /// Sum of work-related childcare and healthcare coverage costs.
    pub fn total_childcare_and_healthcare_costs(&self) -> i64 {
        self.work_related_childcare_costs + self.healthcare_coverage_costs
    }

    /// Stable signature over all six fields, used by profile stores to
    /// detect duplicate saved profiles.
    pub fn financial_signature(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}|{}",
            self.monthly_gross_income,
            self.preexisting_child_support,
            self.preexisting_alimony,
            self.work_related_childcare_costs,
            self.healthcare_coverage_costs,
            self.has_primary_custody
        )
    }
}
