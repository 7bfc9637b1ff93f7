//! Data models for the Child Support Guideline Engine.
//!
//! This module contains the input record for a parent's finances and the
//! uniform output contract produced by every guideline calculator.

mod parent;
mod result;

pub use parent::ParentData;
pub use result::{CalcError, CalculationResult, ErrorSeverity, Payer};
