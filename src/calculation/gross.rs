//! Actual gross resolution.
//!
//! Employer PF is a percentage of Basic, Basic is a fraction of Actual
//! Gross, and Actual Gross is the CTC less employer PF and employer ESIC.
//! This module settles that cycle with a bounded fixed-point iteration, or
//! takes the direct path when the caller supplies an explicit employee PF
//! amount.

use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::config::SalaryConfig;
use crate::models::AuditStep;

use super::rounding::round_rupees;

/// Maximum number of fixed-point passes before the resolver stops refining.
pub const MAX_ITERATIONS: u32 = 10;

/// Convergence tolerance on the employer PF estimate, in currency units.
pub const CONVERGENCE_TOLERANCE: Decimal = Decimal::ONE;

/// The result of resolving Actual Gross, Basic and employer PF.
#[derive(Debug, Clone)]
pub struct GrossResolution {
    /// The settled Actual Gross amount.
    pub actual_gross: Decimal,
    /// The settled Basic Pay amount.
    pub basic_pay: Decimal,
    /// The settled employer PF contribution.
    pub employer_pf: Decimal,
    /// Number of fixed-point passes taken (0 on the override path).
    pub iterations: u32,
    /// Whether the employer PF estimate stabilized within tolerance.
    pub converged: bool,
    /// The audit step recording this resolution.
    pub audit_step: AuditStep,
}

/// Resolves Actual Gross, Basic Pay and employer PF from a monthly CTC.
///
/// When `config.employee_pf_override` is present the supplied PF is treated
/// as ground truth: it is rounded, subtracted from the CTC, and no iteration
/// runs. Otherwise the resolver iterates up to [`MAX_ITERATIONS`] times,
/// each pass deriving Actual Gross from the previous employer PF estimate
/// and the previous pass's ESIC deduction, then stops once the employer PF
/// estimate moves by no more than [`CONVERGENCE_TOLERANCE`].
///
/// After the loop exits, one settle pass recomputes Actual Gross and Basic
/// with the final employer PF. The ESIC term of that settle deliberately
/// uses the last in-loop gross estimate; preserving this stale read keeps
/// the output identical to previously computed salaries.
///
/// # Arguments
///
/// * `ctc_per_month` - The monthly Cost-To-Company figure
/// * `config` - The ratio/rate configuration
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::resolve_actual_gross;
/// use salary_engine::config::SalaryConfig;
/// use rust_decimal::Decimal;
///
/// let resolution = resolve_actual_gross(Decimal::from(30000), &SalaryConfig::default(), 1);
/// assert_eq!(resolution.actual_gross, Decimal::from(28302));
/// assert_eq!(resolution.basic_pay, Decimal::from(14151));
/// assert_eq!(resolution.employer_pf, Decimal::from(1698));
/// assert!(resolution.converged);
/// ```
pub fn resolve_actual_gross(
    ctc_per_month: Decimal,
    config: &SalaryConfig,
    step_number: u32,
) -> GrossResolution {
    if let Some(override_pf) = config.employee_pf_override {
        let employer_pf = round_rupees(override_pf);
        let actual_gross = round_rupees(ctc_per_month - employer_pf);
        let basic_pay = round_rupees(actual_gross * config.basic_ratio);

        let audit_step = AuditStep {
            step_number,
            rule_id: "gross_resolution".to_string(),
            rule_name: "Actual Gross Resolution".to_string(),
            input: serde_json::json!({
                "ctc_per_month": ctc_per_month.to_string(),
                "employee_pf_override": override_pf.to_string(),
                "basic_ratio": config.basic_ratio.to_string()
            }),
            output: serde_json::json!({
                "actual_gross": actual_gross.to_string(),
                "basic_pay": basic_pay.to_string(),
                "employer_pf": employer_pf.to_string(),
                "source": "employee_pf_override"
            }),
            reasoning: format!(
                "Using supplied employee PF {} instead of iterative derivation",
                employer_pf
            ),
        };

        return GrossResolution {
            actual_gross,
            basic_pay,
            employer_pf,
            iterations: 0,
            converged: true,
            audit_step,
        };
    }

    let mut actual_gross = Decimal::ZERO;
    let mut basic_pay = Decimal::ZERO;
    let mut employer_pf = Decimal::ZERO;
    let mut iterations = 0;
    let mut converged = false;

    for _ in 0..MAX_ITERATIONS {
        iterations += 1;
        // The ESIC deduction is estimated from the previous pass's gross
        // (zero on the first pass).
        let esic_deduction = round_rupees(actual_gross * config.esic_rate);
        actual_gross = round_rupees(ctc_per_month - employer_pf - esic_deduction);
        basic_pay = round_rupees(actual_gross * config.basic_ratio);
        let new_employer_pf = round_rupees(basic_pay * config.pf_percent);

        trace!(
            iteration = iterations,
            actual_gross = %actual_gross,
            basic_pay = %basic_pay,
            employer_pf = %new_employer_pf,
            "Fixed-point pass"
        );

        let delta = (new_employer_pf - employer_pf).abs();
        employer_pf = new_employer_pf;
        if delta <= CONVERGENCE_TOLERANCE {
            converged = true;
            break;
        }
    }

    // Settle pass with the final employer PF; the ESIC term keeps the last
    // in-loop gross estimate.
    actual_gross = round_rupees(
        ctc_per_month - employer_pf - round_rupees(actual_gross * config.esic_rate),
    );
    basic_pay = round_rupees(actual_gross * config.basic_ratio);

    debug!(
        iterations,
        converged,
        actual_gross = %actual_gross,
        employer_pf = %employer_pf,
        "Actual gross resolved"
    );

    let audit_step = AuditStep {
        step_number,
        rule_id: "gross_resolution".to_string(),
        rule_name: "Actual Gross Resolution".to_string(),
        input: serde_json::json!({
            "ctc_per_month": ctc_per_month.to_string(),
            "basic_ratio": config.basic_ratio.to_string(),
            "pf_percent": config.pf_percent.to_string(),
            "esic_rate": config.esic_rate.to_string()
        }),
        output: serde_json::json!({
            "actual_gross": actual_gross.to_string(),
            "basic_pay": basic_pay.to_string(),
            "employer_pf": employer_pf.to_string(),
            "iterations": iterations,
            "converged": converged,
            "source": "iteration"
        }),
        reasoning: format!(
            "Employer PF settled at {} after {} iteration(s)",
            employer_pf, iterations
        ),
    };

    GrossResolution {
        actual_gross,
        basic_pay,
        employer_pf,
        iterations,
        converged,
        audit_step,
    }
}
