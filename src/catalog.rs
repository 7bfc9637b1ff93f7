//! Registry of guideline calculators.
//!
//! The routing layer selects a calculator by its `(state, form)` identity;
//! this module owns that tagged dispatch and the state/form enumeration the
//! form-selection UI is built from.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::calculation::{Cs42Calculator, Cs42sCalculator, GuidelineCalculator};

/// A single entry in the guideline listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidelineListing {
    /// The two-letter state abbreviation.
    pub state: String,
    /// The guideline form identifier.
    pub form: String,
    /// A human-readable label (e.g. "AL CS42").
    pub display: String,
    /// Whether the guideline implements shared custody rules.
    pub shared_custody: bool,
}

/// The registry of available child support calculators, allowing retrieval
/// and listing by state and form.
///
/// Lookups are case-insensitive. The registry is immutable once built and
/// safe to share across concurrent callers.
///
/// # Example
///
/// ```
/// use guideline_engine::catalog::CalculatorRegistry;
///
/// let registry = CalculatorRegistry::alabama();
/// let calculator = registry.get("al", "cs42s").unwrap();
/// assert!(calculator.is_shared_custody());
/// ```
pub struct CalculatorRegistry {
    map: HashMap<(String, String), Arc<dyn GuidelineCalculator>>,
}

impl CalculatorRegistry {
    /// Builds a registry from the given calculators, keyed by their
    /// upper-cased state and form.
    pub fn new(calculators: Vec<Arc<dyn GuidelineCalculator>>) -> Self {
        let map = calculators
            .into_iter()
            .map(|calc| {
                (
                    (calc.state().to_uppercase(), calc.form().to_uppercase()),
                    calc,
                )
            })
            .collect();
        Self { map }
    }

    /// Builds the registry of Alabama guideline calculators: CS-42 and
    /// CS-42-S.
    pub fn alabama() -> Self {
        let calculators: Vec<Arc<dyn GuidelineCalculator>> =
            vec![Arc::new(Cs42Calculator), Arc::new(Cs42sCalculator)];
        Self::new(calculators)
    }

    /// Returns the calculator for the given state and form, if one is
    /// registered. Matching is case-insensitive.
    pub fn get(&self, state: &str, form: &str) -> Option<&dyn GuidelineCalculator> {
        self.map
            .get(&(state.to_uppercase(), form.to_uppercase()))
            .map(|calc| calc.as_ref())
    }

    /// Lists all registered guidelines, sorted by state then form.
    pub fn list(&self) -> Vec<GuidelineListing> {
        let mut listings: Vec<GuidelineListing> = self
            .map
            .values()
            .map(|calc| GuidelineListing {
                state: calc.state().to_string(),
                form: calc.form().to_string(),
                display: format!("{} {}", calc.state(), calc.form()),
                shared_custody: calc.is_shared_custody(),
            })
            .collect();
        listings.sort_by(|a, b| a.state.cmp(&b.state).then(a.form.cmp(&b.form)));
        listings
    }

    /// Returns the states with at least one registered guideline, sorted
    /// and deduplicated.
    pub fn states(&self) -> Vec<String> {
        let mut states: Vec<String> = self.map.keys().map(|(state, _)| state.clone()).collect();
        states.sort();
        states.dedup();
        states
    }

    /// Returns the forms registered for a state, sorted; empty when the
    /// state is unknown. Matching is case-insensitive.
    pub fn forms_for_state(&self, state: &str) -> Vec<String> {
        let wanted = state.to_uppercase();
        let mut forms: Vec<String> = self
            .map
            .keys()
            .filter(|(state, _)| *state == wanted)
            .map(|(_, form)| form.clone())
            .collect();
        forms.sort();
        forms
    }
}
