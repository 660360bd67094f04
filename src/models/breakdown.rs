//! Salary breakdown model.
//!
//! This module contains the [`SalaryBreakdown`] type: the twelve monetary
//! components derived from a monthly Cost-To-Company figure.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The monthly salary breakdown derived from a CTC figure.
///
/// All values are whole currency units produced by the engine's rounding
/// policy, except `conveyance` which is carried through from configuration
/// unmodified. `gross_payable` always equals
/// `basic_pay + hra + conveyance + spl_allowance`, and `net_payable` equals
/// `gross_payable` minus the employee-side deductions.
///
/// # Example
///
/// ```
/// use salary_engine::calculation::compute_breakdown;
/// use salary_engine::config::SalaryConfig;
/// use rust_decimal::Decimal;
///
/// let breakdown = compute_breakdown(Decimal::from(30000), &SalaryConfig::default());
/// assert_eq!(
///     breakdown.gross_payable,
///     breakdown.basic_pay + breakdown.hra + breakdown.conveyance + breakdown.spl_allowance
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Employer provident fund contribution.
    pub employer_pf: Decimal,
    /// Employer ESIC contribution.
    pub employer_esic: Decimal,
    /// Actual gross: CTC less the employer-side contributions.
    pub actual_gross: Decimal,
    /// Basic pay.
    pub basic_pay: Decimal,
    /// House rent allowance.
    pub hra: Decimal,
    /// Fixed conveyance allowance.
    pub conveyance: Decimal,
    /// Special allowance absorbing the residual of the gross split.
    /// May be negative when the fixed components exceed Actual Gross.
    pub spl_allowance: Decimal,
    /// Gross payable: the sum of the four earning components.
    pub gross_payable: Decimal,
    /// Employee provident fund contribution.
    pub employee_pf: Decimal,
    /// Employee ESIC contribution.
    pub employee_esic: Decimal,
    /// Fixed professional tax.
    pub pt: Decimal,
    /// Net payable after employee-side deductions.
    pub net_payable: Decimal,
}

impl SalaryBreakdown {
    /// Returns the total employee-side deductions (PF + ESIC + PT).
    pub fn total_deductions(&self) -> Decimal {
        self.employee_pf + self.employee_esic + self.pt
    }

    /// Projects the monthly breakdown over a full year.
    ///
    /// Every component is multiplied by twelve; no re-rounding is applied
    /// since the monthly figures are already whole currency units.
    ///
    /// # Example
    ///
    /// ```
    /// use salary_engine::calculation::compute_breakdown;
    /// use salary_engine::config::SalaryConfig;
    /// use rust_decimal::Decimal;
    ///
    /// let monthly = compute_breakdown(Decimal::from(30000), &SalaryConfig::default());
    /// let yearly = monthly.annualized();
    /// assert_eq!(yearly.basic_pay, monthly.basic_pay * Decimal::from(12));
    /// ```
    pub fn annualized(&self) -> SalaryBreakdown {
        let months = Decimal::from(12);
        SalaryBreakdown {
            employer_pf: self.employer_pf * months,
            employer_esic: self.employer_esic * months,
            actual_gross: self.actual_gross * months,
            basic_pay: self.basic_pay * months,
            hra: self.hra * months,
            conveyance: self.conveyance * months,
            spl_allowance: self.spl_allowance * months,
            gross_payable: self.gross_payable * months,
            employee_pf: self.employee_pf * months,
            employee_esic: self.employee_esic * months,
            pt: self.pt * months,
            net_payable: self.net_payable * months,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_breakdown() -> SalaryBreakdown {
        SalaryBreakdown {
            employer_pf: dec("1698"),
            employer_esic: dec("0"),
            actual_gross: dec("28302"),
            basic_pay: dec("14151"),
            hra: dec("5660"),
            conveyance: dec("1600"),
            spl_allowance: dec("6891"),
            gross_payable: dec("28302"),
            employee_pf: dec("1698"),
            employee_esic: dec("0"),
            pt: dec("200"),
            net_payable: dec("26404"),
        }
    }

    #[test]
    fn test_total_deductions_sums_pf_esic_pt() {
        let breakdown = sample_breakdown();
        assert_eq!(breakdown.total_deductions(), dec("1898"));
    }

    #[test]
    fn test_annualized_multiplies_every_component_by_twelve() {
        let monthly = sample_breakdown();
        let yearly = monthly.annualized();

        assert_eq!(yearly.employer_pf, dec("20376"));
        assert_eq!(yearly.actual_gross, dec("339624"));
        assert_eq!(yearly.basic_pay, dec("169812"));
        assert_eq!(yearly.hra, dec("67920"));
        assert_eq!(yearly.conveyance, dec("19200"));
        assert_eq!(yearly.spl_allowance, dec("82692"));
        assert_eq!(yearly.gross_payable, dec("339624"));
        assert_eq!(yearly.employee_pf, dec("20376"));
        assert_eq!(yearly.pt, dec("2400"));
        assert_eq!(yearly.net_payable, dec("316848"));
    }

    #[test]
    fn test_annualized_preserves_gross_identity() {
        let yearly = sample_breakdown().annualized();
        assert_eq!(
            yearly.gross_payable,
            yearly.basic_pay + yearly.hra + yearly.conveyance + yearly.spl_allowance
        );
    }

    #[test]
    fn test_breakdown_serialization() {
        let breakdown = sample_breakdown();
        let json = serde_json::to_string(&breakdown).unwrap();

        assert!(json.contains("\"employer_pf\":\"1698\""));
        assert!(json.contains("\"actual_gross\":\"28302\""));
        assert!(json.contains("\"spl_allowance\":\"6891\""));
        assert!(json.contains("\"net_payable\":\"26404\""));
    }

    #[test]
    fn test_breakdown_deserialization() {
        let json = r#"{
            "employer_pf": "1698",
            "employer_esic": "0",
            "actual_gross": "28302",
            "basic_pay": "14151",
            "hra": "5660",
            "conveyance": "1600",
            "spl_allowance": "6891",
            "gross_payable": "28302",
            "employee_pf": "1698",
            "employee_esic": "0",
            "pt": "200",
            "net_payable": "26404"
        }"#;

        let breakdown: SalaryBreakdown = serde_json::from_str(json).unwrap();
        assert_eq!(breakdown, sample_breakdown());
    }

    #[test]
    fn test_negative_special_allowance_roundtrips() {
        let mut breakdown = sample_breakdown();
        breakdown.spl_allowance = dec("-751");

        let json = serde_json::to_string(&breakdown).unwrap();
        let deserialized: SalaryBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.spl_allowance, dec("-751"));
    }
}
