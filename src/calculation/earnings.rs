//! Earnings split of Actual Gross.
//!
//! Once Actual Gross and Basic are settled, the remaining earning
//! components are HRA, the fixed conveyance amount, and a special allowance
//! that absorbs whatever is left, including all residual rounding error.

use rust_decimal::Decimal;

use crate::config::SalaryConfig;
use crate::models::AuditStep;

use super::rounding::round_rupees;

/// The result of splitting Actual Gross into earning components.
#[derive(Debug, Clone)]
pub struct EarningsSplit {
    /// House rent allowance.
    pub hra: Decimal,
    /// Fixed conveyance amount, carried through from configuration unmodified.
    pub conveyance: Decimal,
    /// Special allowance absorbing the residual of the split; negative when
    /// the configured ratios and fixed amounts exceed Actual Gross.
    pub spl_allowance: Decimal,
    /// The audit step recording this split.
    pub audit_step: AuditStep,
}

/// Splits Actual Gross into HRA, conveyance and special allowance.
///
/// HRA is a rounded fraction of Basic; conveyance is the configured fixed
/// amount, neither scaled nor re-rounded; the special allowance is the
/// rounded remainder of Actual Gross after Basic, HRA and conveyance.
///
/// # Arguments
///
/// * `actual_gross` - The settled Actual Gross amount
/// * `basic_pay` - The settled Basic Pay amount
/// * `config` - The ratio/rate configuration
/// * `step_number` - The step number for audit trail sequencing
pub fn split_earnings(
    actual_gross: Decimal,
    basic_pay: Decimal,
    config: &SalaryConfig,
    step_number: u32,
) -> EarningsSplit {
    let hra = round_rupees(basic_pay * config.hra_ratio);
    let conveyance = config.conveyance;
    let spl_allowance = round_rupees(actual_gross - basic_pay - hra - conveyance);

    let audit_step = AuditStep {
        step_number,
        rule_id: "earnings_split".to_string(),
        rule_name: "Earnings Split".to_string(),
        input: serde_json::json!({
            "actual_gross": actual_gross.to_string(),
            "basic_pay": basic_pay.to_string(),
            "hra_ratio": config.hra_ratio.to_string(),
            "conveyance": conveyance.to_string()
        }),
        output: serde_json::json!({
            "hra": hra.to_string(),
            "conveyance": conveyance.to_string(),
            "spl_allowance": spl_allowance.to_string()
        }),
        reasoning: format!(
            "HRA {} at ratio {}, special allowance {} absorbs the remainder",
            hra, config.hra_ratio, spl_allowance
        ),
    };

    EarningsSplit {
        hra,
        conveyance,
        spl_allowance,
        audit_step,
    }
}
