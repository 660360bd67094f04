//! Core data models for the CTC Decomposition Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod breakdown;
mod calculation_result;

pub use breakdown::SalaryBreakdown;
pub use calculation_result::{AuditStep, AuditTrace, AuditWarning, CalculationResult};
