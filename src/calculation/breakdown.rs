//! Salary breakdown orchestration.
//!
//! This module assembles the full monthly breakdown from the gross
//! resolution, the earnings split and the statutory deductions, and
//! optionally wraps the result in an audited calculation envelope.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::warn;
use uuid::Uuid;

use crate::config::SalaryConfig;
use crate::models::{AuditStep, AuditTrace, AuditWarning, CalculationResult, SalaryBreakdown};

use super::deductions::calculate_deductions;
use super::earnings::split_earnings;
use super::gross::resolve_actual_gross;
use super::rounding::round_rupees;

struct ComputedParts {
    breakdown: SalaryBreakdown,
    steps: Vec<AuditStep>,
    converged: bool,
}

fn compute_parts(ctc_per_month: Decimal, config: &SalaryConfig) -> ComputedParts {
    let resolution = resolve_actual_gross(ctc_per_month, config, 1);
    let earnings = split_earnings(resolution.actual_gross, resolution.basic_pay, config, 2);
    let deductions =
        calculate_deductions(resolution.actual_gross, resolution.basic_pay, config, 3);

    // Reconstructs actual gross from the earning components.
    let gross_payable =
        resolution.basic_pay + earnings.hra + earnings.conveyance + earnings.spl_allowance;
    let net_payable = round_rupees(
        gross_payable - (deductions.employee_pf + deductions.employee_esic + deductions.pt),
    );

    let totals_step = AuditStep {
        step_number: 4,
        rule_id: "payable_totals".to_string(),
        rule_name: "Payable Totals".to_string(),
        input: serde_json::json!({
            "basic_pay": resolution.basic_pay.to_string(),
            "hra": earnings.hra.to_string(),
            "conveyance": earnings.conveyance.to_string(),
            "spl_allowance": earnings.spl_allowance.to_string(),
            "employee_pf": deductions.employee_pf.to_string(),
            "employee_esic": deductions.employee_esic.to_string(),
            "pt": deductions.pt.to_string()
        }),
        output: serde_json::json!({
            "gross_payable": gross_payable.to_string(),
            "net_payable": net_payable.to_string()
        }),
        reasoning: format!(
            "Gross payable {} less deductions leaves net payable {}",
            gross_payable, net_payable
        ),
    };

    let breakdown = SalaryBreakdown {
        employer_pf: resolution.employer_pf,
        employer_esic: deductions.employer_esic,
        actual_gross: resolution.actual_gross,
        basic_pay: resolution.basic_pay,
        hra: earnings.hra,
        conveyance: earnings.conveyance,
        spl_allowance: earnings.spl_allowance,
        gross_payable,
        employee_pf: deductions.employee_pf,
        employee_esic: deductions.employee_esic,
        pt: deductions.pt,
        net_payable,
    };

    ComputedParts {
        breakdown,
        steps: vec![
            resolution.audit_step,
            earnings.audit_step,
            deductions.audit_step,
            totals_step,
        ],
        converged: resolution.converged,
    }
}

/// Derives the full monthly salary breakdown from a monthly CTC figure.
///
/// This is a pure function: identical arguments always yield an identical
/// breakdown, and no state survives the call. It cannot fail; `Decimal`
/// input is always finite, and negative figures propagate through the
/// arithmetic without clamping or a distinguished error path.
///
/// # Arguments
///
/// * `ctc_per_month` - The monthly Cost-To-Company figure
/// * `config` - The ratio/rate configuration; use [`SalaryConfig::default`]
///   for the documented defaults
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::compute_breakdown;
/// use salary_engine::config::SalaryConfig;
/// use rust_decimal::Decimal;
///
/// let breakdown = compute_breakdown(Decimal::from(30000), &SalaryConfig::default());
/// assert_eq!(breakdown.basic_pay, Decimal::from(14151));
/// assert_eq!(breakdown.net_payable, Decimal::from(26404));
/// ```
pub fn compute_breakdown(ctc_per_month: Decimal, config: &SalaryConfig) -> SalaryBreakdown {
    compute_parts(ctc_per_month, config).breakdown
}

/// Derives the breakdown together with a full audit trace.
///
/// Behaves exactly like [`compute_breakdown`] and additionally records
/// every calculation step, collects warnings for conditions worth a second
/// look (the iteration exhausting its cap, a negative special allowance, a
/// negative net payable), and wraps everything in a [`CalculationResult`]
/// envelope for consumers that render or store computed salaries.
pub fn compute_with_audit(ctc_per_month: Decimal, config: &SalaryConfig) -> CalculationResult {
    let start_time = Instant::now();
    let parts = compute_parts(ctc_per_month, config);

    let mut warnings = Vec::new();
    if !parts.converged {
        warn!(ctc_per_month = %ctc_per_month, "Employer PF estimate did not stabilize");
        warnings.push(AuditWarning {
            code: "NON_CONVERGENCE".to_string(),
            message: format!(
                "Employer PF estimate did not stabilize within {} iterations",
                super::gross::MAX_ITERATIONS
            ),
            severity: "high".to_string(),
        });
    }
    if parts.breakdown.spl_allowance < Decimal::ZERO {
        warnings.push(AuditWarning {
            code: "NEGATIVE_SPECIAL_ALLOWANCE".to_string(),
            message: "Fixed components exceed actual gross".to_string(),
            severity: "medium".to_string(),
        });
    }
    if parts.breakdown.net_payable < Decimal::ZERO {
        warnings.push(AuditWarning {
            code: "NEGATIVE_NET_PAYABLE".to_string(),
            message: "Deductions exceed gross payable".to_string(),
            severity: "medium".to_string(),
        });
    }

    let duration_us = start_time.elapsed().as_micros() as u64;

    CalculationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        ctc_per_month,
        breakdown: parts.breakdown,
        audit_trace: AuditTrace {
            steps: parts.steps,
            warnings,
            duration_us,
        },
    }
}
