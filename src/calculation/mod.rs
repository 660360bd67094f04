//! Calculation logic for the CTC Decomposition Engine.
//!
//! This module contains all the calculation functions for deriving a
//! monthly salary breakdown, including whole-currency rounding, the
//! fixed-point resolution of Actual Gross against the employer PF and
//! ESIC contributions, the earnings split into HRA, conveyance and
//! special allowance, the statutory deductions, and the orchestration
//! that assembles the final breakdown with its audit trace.

mod breakdown;
mod deductions;
mod earnings;
mod gross;
mod rounding;

pub use breakdown::{compute_breakdown, compute_with_audit};
pub use deductions::{Deductions, calculate_deductions};
pub use earnings::{EarningsSplit, split_earnings};
pub use gross::{CONVERGENCE_TOLERANCE, GrossResolution, MAX_ITERATIONS, resolve_actual_gross};
pub use rounding::round_rupees;
