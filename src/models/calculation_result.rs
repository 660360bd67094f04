//! Calculation result models for the CTC Decomposition Engine.
//!
//! This module contains the [`CalculationResult`] envelope and the audit
//! trace structures that record every decision made while deriving a
//! salary breakdown.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::SalaryBreakdown;

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate potential issues that don't prevent calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// Records every decision made during the calculation process for
/// transparency and compliance.
///
/// # Example
///
/// ```
/// use salary_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 1234,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a salary breakdown calculation.
///
/// This struct wraps the derived [`SalaryBreakdown`] together with the
/// identifying metadata and the full audit trace, for consumers that
/// render or store computed salaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The monthly CTC figure the breakdown was derived from.
    pub ctc_per_month: Decimal,
    /// The derived salary breakdown.
    pub breakdown: SalaryBreakdown,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
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
            employer_pf: dec("1000"),
            employer_esic: dec("0"),
            actual_gross: dec("19000"),
            basic_pay: dec("9500"),
            hra: dec("3800"),
            conveyance: dec("1600"),
            spl_allowance: dec("4100"),
            gross_payable: dec("19000"),
            employee_pf: dec("1000"),
            employee_esic: dec("0"),
            pt: dec("200"),
            net_payable: dec("17800"),
        }
    }

    #[test]
    fn test_audit_step_serialization() {
        let step = AuditStep {
            step_number: 1,
            rule_id: "gross_resolution".to_string(),
            rule_name: "Actual Gross Resolution".to_string(),
            input: serde_json::json!({"ctc_per_month": "30000"}),
            output: serde_json::json!({"actual_gross": "28302"}),
            reasoning: "Converged after 4 iterations".to_string(),
        };

        let json = serde_json::to_string(&step).unwrap();
        assert!(json.contains("\"step_number\":1"));
        assert!(json.contains("\"rule_id\":\"gross_resolution\""));
        assert!(json.contains("\"rule_name\":\"Actual Gross Resolution\""));
    }

    #[test]
    fn test_audit_warning_serialization() {
        let warning = AuditWarning {
            code: "NEGATIVE_SPECIAL_ALLOWANCE".to_string(),
            message: "Fixed components exceed actual gross".to_string(),
            severity: "medium".to_string(),
        };

        let json = serde_json::to_string(&warning).unwrap();
        assert!(json.contains("\"code\":\"NEGATIVE_SPECIAL_ALLOWANCE\""));
        assert!(json.contains("\"severity\":\"medium\""));
    }

    #[test]
    fn test_audit_trace_serialization() {
        let trace = AuditTrace {
            steps: vec![AuditStep {
                step_number: 1,
                rule_id: "rule_001".to_string(),
                rule_name: "Test rule".to_string(),
                input: serde_json::json!({}),
                output: serde_json::json!({}),
                reasoning: "Test reasoning".to_string(),
            }],
            warnings: vec![],
            duration_us: 42,
        };

        let json = serde_json::to_string(&trace).unwrap();
        assert!(json.contains("\"duration_us\":42"));
        assert!(json.contains("\"steps\":["));
        assert!(json.contains("\"warnings\":[]"));
    }

    #[test]
    fn test_calculation_result_serialization() {
        let result = CalculationResult {
            calculation_id: Uuid::nil(),
            timestamp: DateTime::parse_from_rfc3339("2026-01-15T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            engine_version: "0.1.0".to_string(),
            ctc_per_month: dec("20000"),
            breakdown: sample_breakdown(),
            audit_trace: AuditTrace {
                steps: vec![],
                warnings: vec![],
                duration_us: 0,
            },
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"calculation_id\":\"00000000-0000-0000-0000-000000000000\""));
        assert!(json.contains("\"engine_version\":\"0.1.0\""));
        assert!(json.contains("\"ctc_per_month\":\"20000\""));
        assert!(json.contains("\"breakdown\":{"));
        assert!(json.contains("\"audit_trace\":{"));
    }

    #[test]
    fn test_calculation_result_deserialization() {
        let json = r#"{
            "calculation_id": "12345678-1234-1234-1234-123456789012",
            "timestamp": "2026-01-15T10:00:00Z",
            "engine_version": "0.1.0",
            "ctc_per_month": "20000",
            "breakdown": {
                "employer_pf": "1000",
                "employer_esic": "0",
                "actual_gross": "19000",
                "basic_pay": "9500",
                "hra": "3800",
                "conveyance": "1600",
                "spl_allowance": "4100",
                "gross_payable": "19000",
                "employee_pf": "1000",
                "employee_esic": "0",
                "pt": "200",
                "net_payable": "17800"
            },
            "audit_trace": {
                "steps": [],
                "warnings": [],
                "duration_us": 0
            }
        }"#;

        let result: CalculationResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.engine_version, "0.1.0");
        assert_eq!(result.ctc_per_month, dec("20000"));
        assert_eq!(result.breakdown, sample_breakdown());
        assert!(result.audit_trace.steps.is_empty());
    }
}
