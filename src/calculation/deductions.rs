//! Statutory deduction calculation.
//!
//! Employee PF, both ESIC contributions and professional tax. The model
//! carries a single ESIC rate: the employer and employee contributions are
//! computed from the same formula and are always equal. This mirrors the
//! reference behavior and is surfaced as-is rather than silently split
//! into separate rates.

use rust_decimal::Decimal;

use crate::config::SalaryConfig;
use crate::models::AuditStep;

use super::rounding::round_rupees;

/// The statutory deductions derived from a settled gross and basic.
#[derive(Debug, Clone)]
pub struct Deductions {
    /// Employee provident fund contribution.
    pub employee_pf: Decimal,
    /// Employee ESIC contribution.
    pub employee_esic: Decimal,
    /// Employer ESIC contribution (always equal to the employee figure).
    pub employer_esic: Decimal,
    /// Fixed professional tax, carried through from configuration.
    pub pt: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the statutory deductions for a settled gross and basic.
///
/// Employee PF is the rounded override when one was supplied, otherwise a
/// rounded percentage of Basic. Both ESIC contributions are the rounded
/// ESIC fraction of Actual Gross. Professional tax is the configured fixed
/// amount.
///
/// # Arguments
///
/// * `actual_gross` - The settled Actual Gross amount
/// * `basic_pay` - The settled Basic Pay amount
/// * `config` - The ratio/rate configuration
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_deductions(
    actual_gross: Decimal,
    basic_pay: Decimal,
    config: &SalaryConfig,
    step_number: u32,
) -> Deductions {
    let employee_pf = match config.employee_pf_override {
        Some(override_pf) => round_rupees(override_pf),
        None => round_rupees(basic_pay * config.pf_percent),
    };
    let employee_esic = round_rupees(actual_gross * config.esic_rate);
    let employer_esic = round_rupees(actual_gross * config.esic_rate);
    let pt = config.pt;

    let audit_step = AuditStep {
        step_number,
        rule_id: "statutory_deductions".to_string(),
        rule_name: "Statutory Deductions".to_string(),
        input: serde_json::json!({
            "actual_gross": actual_gross.to_string(),
            "basic_pay": basic_pay.to_string(),
            "pf_percent": config.pf_percent.to_string(),
            "esic_rate": config.esic_rate.to_string(),
            "pt": pt.to_string(),
            "pf_overridden": config.employee_pf_override.is_some()
        }),
        output: serde_json::json!({
            "employee_pf": employee_pf.to_string(),
            "employee_esic": employee_esic.to_string(),
            "employer_esic": employer_esic.to_string(),
            "pt": pt.to_string()
        }),
        reasoning: match config.employee_pf_override {
            Some(_) => format!("Employee PF {} taken from supplied override", employee_pf),
            None => format!(
                "Employee PF {} at {} of basic, ESIC {} at {} of gross",
                employee_pf, config.pf_percent, employee_esic, config.esic_rate
            ),
        },
    };

    Deductions {
        employee_pf,
        employee_esic,
        employer_esic,
        pt,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// SD-001: employee PF at the default rate
    #[test]
    fn test_employee_pf_at_default_rate() {
        let deductions =
            calculate_deductions(dec("28302"), dec("14151"), &SalaryConfig::default(), 3);

        assert_eq!(deductions.employee_pf, dec("1698"));
        assert_eq!(deductions.employee_esic, dec("0"));
        assert_eq!(deductions.employer_esic, dec("0"));
        assert_eq!(deductions.pt, dec("200"));
        assert_eq!(deductions.audit_step.rule_id, "statutory_deductions");
    }

    /// SD-002: ESIC contributions are equal on both sides
    #[test]
    fn test_esic_equal_on_both_sides() {
        let config = SalaryConfig {
            esic_rate: dec("0.0075"),
            ..SalaryConfig::default()
        };
        let deductions = calculate_deductions(dec("28103"), dec("14052"), &config, 3);

        assert_eq!(deductions.employee_esic, dec("211"));
        assert_eq!(deductions.employer_esic, deductions.employee_esic);
    }

    /// SD-003: override replaces the derived employee PF
    #[test]
    fn test_override_replaces_derived_pf() {
        let config = SalaryConfig {
            employee_pf_override: Some(dec("1000")),
            ..SalaryConfig::default()
        };
        let deductions = calculate_deductions(dec("19000"), dec("9500"), &config, 3);

        assert_eq!(deductions.employee_pf, dec("1000"));
        assert!(
            deductions.audit_step.input["pf_overridden"]
                .as_bool()
                .unwrap()
        );
    }

    /// SD-004: override is independent of pf_percent
    #[test]
    fn test_override_independent_of_pf_percent() {
        let config = SalaryConfig {
            employee_pf_override: Some(dec("1000")),
            pf_percent: dec("0.24"),
            ..SalaryConfig::default()
        };
        let deductions = calculate_deductions(dec("19000"), dec("9500"), &config, 3);

        assert_eq!(deductions.employee_pf, dec("1000"));
    }

    /// SD-005: fractional override is rounded
    #[test]
    fn test_fractional_override_is_rounded() {
        let config = SalaryConfig {
            employee_pf_override: Some(dec("1000.4")),
            ..SalaryConfig::default()
        };
        let deductions = calculate_deductions(dec("19000"), dec("9500"), &config, 3);

        assert_eq!(deductions.employee_pf, dec("1000"));
    }

    /// SD-006: professional tax is charged even at zero gross
    #[test]
    fn test_pt_charged_at_zero_gross() {
        let deductions = calculate_deductions(dec("0"), dec("0"), &SalaryConfig::default(), 3);

        assert_eq!(deductions.employee_pf, dec("0"));
        assert_eq!(deductions.pt, dec("200"));
    }

    #[test]
    fn test_audit_step_has_correct_step_number() {
        let deductions =
            calculate_deductions(dec("28302"), dec("14151"), &SalaryConfig::default(), 9);
        assert_eq!(deductions.audit_step.step_number, 9);
    }
}
