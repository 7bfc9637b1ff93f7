//! HTTP API module for the Child Support Guideline Engine.
//!
//! This module provides the REST endpoints for running guideline
//! calculations and listing the available guidelines. It is the engine's
//! caller: caller-side input validation and the logging of failed
//! calculations happen here, not in the engine.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, ParentDataRequest};
pub use response::{ApiError, CalculationResponse, FieldError};
pub use state::AppState;
