//! Compensation policy selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

/// The unit a policy's input total and component amounts are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountBasis {
    /// Annual figures (CTC).
    Annual,
    /// Monthly figures (monthly gross).
    Monthly,
}

/// The fixed-percentage policy used to split a compensation total.
///
/// Each variant maps to exactly one split strategy and one document type;
/// the percentage tables of different policies are never mixed.
///
/// # Example
///
/// ```
/// use compensation_engine::models::{AmountBasis, CompensationPolicy};
///
/// let policy: CompensationPolicy = "payslip_simple".parse().unwrap();
/// assert_eq!(policy, CompensationPolicy::PayslipSimple);
/// assert_eq!(policy.basis(), AmountBasis::Monthly);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompensationPolicy {
    /// Offer and appointment letters: 35/30/20/15 split of annual CTC.
    StandardOffer,
    /// Comprehensive annual breakup with statutory contributions.
    StatutoryDetailed,
    /// Monthly payslip from a monthly gross, with PF and professional tax.
    PayslipSimple,
    /// Appraisal letters: basic, HRA, DA and fixed allowances.
    Appraisal,
}

impl CompensationPolicy {
    /// All policies, in declaration order.
    pub const ALL: [CompensationPolicy; 4] = [
        CompensationPolicy::StandardOffer,
        CompensationPolicy::StatutoryDetailed,
        CompensationPolicy::PayslipSimple,
        CompensationPolicy::Appraisal,
    ];

    /// Returns the snake_case identifier of the policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            CompensationPolicy::StandardOffer => "standard_offer",
            CompensationPolicy::StatutoryDetailed => "statutory_detailed",
            CompensationPolicy::PayslipSimple => "payslip_simple",
            CompensationPolicy::Appraisal => "appraisal",
        }
    }

    /// Returns whether the policy's total is an annual or a monthly figure.
    pub fn basis(&self) -> AmountBasis {
        match self {
            CompensationPolicy::PayslipSimple => AmountBasis::Monthly,
            _ => AmountBasis::Annual,
        }
    }
}

impl fmt::Display for CompensationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompensationPolicy {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard_offer" | "StandardOffer" => Ok(CompensationPolicy::StandardOffer),
            "statutory_detailed" | "StatutoryDetailed" => {
                Ok(CompensationPolicy::StatutoryDetailed)
            }
            "payslip_simple" | "PayslipSimple" => Ok(CompensationPolicy::PayslipSimple),
            "appraisal" | "Appraisal" => Ok(CompensationPolicy::Appraisal),
            other => Err(EngineError::invalid_range(
                "policy",
                format!("unknown compensation policy '{}'", other),
            )),
        }
    }
}
