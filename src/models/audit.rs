//! Audit trail models.
//!
//! Every calculation records the rules it applied as a sequence of
//! [`AuditStep`]s, so a figure printed on an offer letter or payslip can be
//! traced back to the percentage, cap or remainder that produced it.

use serde::{Deserialize, Serialize};

/// Warning code raised when independently rounded components do not sum to the total.
pub const ROUNDING_DRIFT_WARNING: &str = "ROUNDING_DRIFT";

/// Warning code raised when a net figure comes out negative.
pub const NEGATIVE_NET_WARNING: &str = "NEGATIVE_NET";

/// A single step in the audit trail recording a calculation decision.
///
/// # Example
///
/// ```
/// use compensation_engine::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "basic".to_string(),
///     rule_name: "Basic Salary".to_string(),
///     input: serde_json::json!({ "total": "1200000" }),
///     output: serde_json::json!({ "annual": "420000" }),
///     reasoning: "35% of 1200000 = 420000".to_string(),
/// };
/// assert_eq!(step.rule_id, "basic");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The identifier of the rule that was applied.
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
/// Warnings flag results that are valid but need a caller's attention,
/// such as rounding drift or a negative net salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level ("low", "medium", "high").
    pub severity: String,
}

impl AuditWarning {
    /// Creates a new warning.
    pub fn new(code: &str, message: impl Into<String>, severity: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            severity: severity.to_string(),
        }
    }
}

/// Accumulates audit steps with sequential numbering.
#[derive(Debug, Default)]
pub(crate) struct AuditLog {
    steps: Vec<AuditStep>,
}

impl AuditLog {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records a step, numbering it after the previous one.
    pub(crate) fn record(
        &mut self,
        rule_id: &str,
        rule_name: &str,
        input: serde_json::Value,
        output: serde_json::Value,
        reasoning: String,
    ) {
        let step_number = self.steps.len() as u32 + 1;
        self.steps.push(AuditStep {
            step_number,
            rule_id: rule_id.to_string(),
            rule_name: rule_name.to_string(),
            input,
            output,
            reasoning,
        });
    }

    pub(crate) fn into_steps(self) -> Vec<AuditStep> {
        self.steps
    }
}
