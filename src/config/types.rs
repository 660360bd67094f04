//! Configuration types for salary decomposition.
//!
//! This module contains the calculation configuration record and the
//! strongly-typed scheme structures that are deserialized from YAML
//! configuration files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

fn default_basic_ratio() -> Decimal {
    Decimal::new(5, 1)
}

fn default_hra_ratio() -> Decimal {
    Decimal::new(4, 1)
}

fn default_conveyance() -> Decimal {
    Decimal::from(1600)
}

fn default_pf_percent() -> Decimal {
    Decimal::new(12, 2)
}

fn default_pt() -> Decimal {
    Decimal::from(200)
}

fn default_esic_rate() -> Decimal {
    Decimal::ZERO
}

/// The ratio/rate configuration for a salary breakdown calculation.
///
/// Every field is optional in serialized form and falls back to its
/// documented default; unrecognized fields are ignored.
///
/// | Field | Meaning | Default |
/// |---|---|---|
/// | `basic_ratio` | Basic Pay as fraction of Actual Gross | 0.5 |
/// | `hra_ratio` | HRA as fraction of Basic Pay | 0.4 |
/// | `conveyance` | Fixed monthly conveyance amount | 1600 |
/// | `pf_percent` | PF rate applied to Basic | 0.12 |
/// | `pt` | Fixed monthly professional tax | 200 |
/// | `esic_rate` | ESIC rate applied to Actual Gross | 0 |
/// | `employee_pf_override` | Caller-supplied employee PF bypassing the iteration | none |
///
/// # Example
///
/// ```
/// use salary_engine::config::SalaryConfig;
/// use rust_decimal::Decimal;
///
/// let config = SalaryConfig::default();
/// assert_eq!(config.basic_ratio, Decimal::new(5, 1));
/// assert_eq!(config.conveyance, Decimal::from(1600));
/// assert_eq!(config.employee_pf_override, None);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SalaryConfig {
    /// Basic Pay as a fraction of Actual Gross.
    #[serde(default = "default_basic_ratio")]
    pub basic_ratio: Decimal,
    /// HRA as a fraction of Basic Pay.
    #[serde(default = "default_hra_ratio")]
    pub hra_ratio: Decimal,
    /// Fixed monthly conveyance amount.
    #[serde(default = "default_conveyance")]
    pub conveyance: Decimal,
    /// PF rate applied to Basic, for both employer and employee contributions.
    #[serde(default = "default_pf_percent")]
    pub pf_percent: Decimal,
    /// Fixed monthly professional tax.
    #[serde(default = "default_pt")]
    pub pt: Decimal,
    /// ESIC rate applied to Actual Gross.
    #[serde(default = "default_esic_rate")]
    pub esic_rate: Decimal,
    /// Caller-supplied employee PF amount that bypasses the iterative
    /// derivation when present.
    #[serde(default)]
    pub employee_pf_override: Option<Decimal>,
}

impl Default for SalaryConfig {
    fn default() -> Self {
        Self {
            basic_ratio: default_basic_ratio(),
            hra_ratio: default_hra_ratio(),
            conveyance: default_conveyance(),
            pf_percent: default_pf_percent(),
            pt: default_pt(),
            esic_rate: default_esic_rate(),
            employee_pf_override: None,
        }
    }
}

impl SalaryConfig {
    /// Validates that no ratio, rate or fixed amount is negative.
    ///
    /// The calculator itself is permissive and will propagate whatever it
    /// is given; validation is applied at configuration load time so that
    /// a scheme file with a negative rate is rejected before use.
    pub fn validate(&self) -> EngineResult<()> {
        let fields = [
            ("basic_ratio", self.basic_ratio),
            ("hra_ratio", self.hra_ratio),
            ("conveyance", self.conveyance),
            ("pf_percent", self.pf_percent),
            ("pt", self.pt),
            ("esic_rate", self.esic_rate),
        ];
        for (field, value) in fields {
            if value < Decimal::ZERO {
                return Err(EngineError::InvalidConfig {
                    field: field.to_string(),
                    message: "must not be negative".to_string(),
                });
            }
        }
        if let Some(override_pf) = self.employee_pf_override {
            if override_pf < Decimal::ZERO {
                return Err(EngineError::InvalidConfig {
                    field: "employee_pf_override".to_string(),
                    message: "must not be negative".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Metadata about a decomposition scheme.
///
/// Contains identifying information about the scheme, including its
/// code, name, version, and source URL.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemeMetadata {
    /// The scheme code (e.g., "IN-CTC-STD").
    pub code: String,
    /// The human-readable name of the scheme.
    pub name: String,
    /// The version or effective date of the scheme.
    pub version: String,
    /// URL to the statutory source documentation.
    pub source_url: String,
}

/// A statutory revision of the ratio/rate set, effective from a given date.
///
/// PF, ESIC and professional tax figures change by fiscal year; each
/// revision file captures the complete rate set in force from its
/// effective date.
#[derive(Debug, Clone, Deserialize)]
pub struct StatutoryRevision {
    /// The date from which these rates apply.
    pub effective_date: NaiveDate,
    /// Basic Pay as a fraction of Actual Gross.
    #[serde(default = "default_basic_ratio")]
    pub basic_ratio: Decimal,
    /// HRA as a fraction of Basic Pay.
    #[serde(default = "default_hra_ratio")]
    pub hra_ratio: Decimal,
    /// Fixed monthly conveyance amount.
    #[serde(default = "default_conveyance")]
    pub conveyance: Decimal,
    /// PF rate applied to Basic.
    #[serde(default = "default_pf_percent")]
    pub pf_percent: Decimal,
    /// Fixed monthly professional tax.
    #[serde(default = "default_pt")]
    pub pt: Decimal,
    /// ESIC rate applied to Actual Gross.
    #[serde(default = "default_esic_rate")]
    pub esic_rate: Decimal,
}

impl StatutoryRevision {
    /// Builds the calculation configuration carried by this revision.
    pub fn to_config(&self) -> SalaryConfig {
        SalaryConfig {
            basic_ratio: self.basic_ratio,
            hra_ratio: self.hra_ratio,
            conveyance: self.conveyance,
            pf_percent: self.pf_percent,
            pt: self.pt,
            esic_rate: self.esic_rate,
            employee_pf_override: None,
        }
    }
}

/// The complete scheme configuration loaded from YAML files.
///
/// This struct aggregates the scheme metadata and its statutory revisions,
/// sorted oldest first.
#[derive(Debug, Clone)]
pub struct SchemeConfig {
    /// Scheme metadata.
    metadata: SchemeMetadata,
    /// Statutory revisions by effective date (sorted oldest first).
    revisions: Vec<StatutoryRevision>,
}

impl SchemeConfig {
    /// Creates a new SchemeConfig from its component parts.
    pub fn new(metadata: SchemeMetadata, revisions: Vec<StatutoryRevision>) -> Self {
        let mut sorted_revisions = revisions;
        sorted_revisions.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            metadata,
            revisions: sorted_revisions,
        }
    }

    /// Returns the scheme metadata.
    pub fn scheme(&self) -> &SchemeMetadata {
        &self.metadata
    }

    /// Returns all statutory revisions.
    pub fn revisions(&self) -> &[StatutoryRevision] {
        &self.revisions
    }

    /// Returns the most recent revision effective on or before the date.
    pub fn revision_for(&self, date: NaiveDate) -> Option<&StatutoryRevision> {
        self.revisions
            .iter()
            .rfind(|r| r.effective_date <= date)
    }
}
