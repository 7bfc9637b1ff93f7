//! Request types for the guideline engine API.
//!
//! This module defines the JSON request structure for the calculate
//! endpoint, plus the caller-side validation the engine contract assumes:
//! monetary fields must be non-negative, and the standard custody form
//! requires exactly one parent to be marked as having primary custody. The
//! engine itself re-validates neither.

use serde::{Deserialize, Serialize};

use crate::models::ParentData;

use super::response::FieldError;

/// Request body for the calculate endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The plaintiff parent on the original court order.
    pub plaintiff: ParentDataRequest,
    /// The defendant parent on the original court order.
    pub defendant: ParentDataRequest,
    /// The number of children shared between both parents in the order.
    pub number_of_children: i32,
}

/// One parent's financial data in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParentDataRequest {
    /// The parent's monthly gross income in whole dollars.
    pub monthly_gross_income: i64,
    /// Preexisting child support obligations.
    #[serde(default)]
    pub preexisting_child_support: i64,
    /// Preexisting alimony obligations.
    #[serde(default)]
    pub preexisting_alimony: i64,
    /// Work-related childcare costs.
    #[serde(default)]
    pub work_related_childcare_costs: i64,
    /// Healthcare coverage costs for the children.
    #[serde(default)]
    pub healthcare_coverage_costs: i64,
    /// Whether this parent has primary custody of the children.
    #[serde(default)]
    pub has_primary_custody: bool,
}

impl CalculationRequest {
    /// Runs the caller-side validation for the selected guideline variant,
    /// returning one entry per violated field.
    ///
    /// Field names are qualified by parent (e.g.
    /// `Plaintiff.MonthlyGrossIncome`) so form errors can be keyed back to
    /// the offending input.
    pub fn validate_for(&self, is_shared_custody: bool) -> Vec<FieldError> {
        let mut errors = Vec::new();

        errors.extend(self.plaintiff.validate("Plaintiff"));
        errors.extend(self.defendant.validate("Defendant"));

        if !is_shared_custody
            && self.plaintiff.has_primary_custody == self.defendant.has_primary_custody
        {
            errors.push(FieldError {
                field: "HasPrimaryCustody".to_string(),
                message: "Exactly one parent must have primary custody for this form."
                    .to_string(),
            });
        }

        errors
    }
}

impl ParentDataRequest {
    fn validate(&self, parent: &str) -> Vec<FieldError> {
        let fields = [
            ("MonthlyGrossIncome", self.monthly_gross_income),
            ("PreexistingChildSupport", self.preexisting_child_support),
            ("PreexistingAlimony", self.preexisting_alimony),
            ("WorkRelatedChildcareCosts", self.work_related_childcare_costs),
            ("HealthcareCoverageCosts", self.healthcare_coverage_costs),
        ];

        fields
            .iter()
            .filter(|(_, value)| *value < 0)
            .map(|(name, _)| FieldError {
                field: format!("{}.{}", parent, name),
                message: "Value must be zero or greater.".to_string(),
            })
            .collect()
    }
}

impl From<ParentDataRequest> for ParentData {
    fn from(req: ParentDataRequest) -> Self {
        ParentData {
            monthly_gross_income: req.monthly_gross_income,
            preexisting_child_support: req.preexisting_child_support,
            preexisting_alimony: req.preexisting_alimony,
            work_related_childcare_costs: req.work_related_childcare_costs,
            healthcare_coverage_costs: req.healthcare_coverage_costs,
            has_primary_custody: req.has_primary_custody,
        }
    }
}
