//! Application state for the guideline engine API.

use std::sync::Arc;

use crate::catalog::CalculatorRegistry;

/// Shared application state.
///
/// Holds the calculator registry behind an `Arc` so every request handler
/// resolves guidelines against the same immutable catalog.
#[derive(Clone)]
pub struct AppState {
    registry: Arc<CalculatorRegistry>,
}

impl AppState {
    /// Creates a new application state around the given registry.
    pub fn new(registry: CalculatorRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Returns a reference to the calculator registry.
    pub fn registry(&self) -> &CalculatorRegistry {
        &self.registry
    }
}
