//! Component breakdown models produced by the compensation splitter.
//!
//! A [`ComponentBreakdown`] is the record a document generator renders: the
//! ordered salary components, any deductions, the reported totals and the
//! rounding drift between them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AmountBasis, AuditStep, AuditWarning, CompensationPolicy};

/// A single named salary component with its annual and monthly amounts.
///
/// # Example
///
/// ```
/// use compensation_engine::models::SalaryComponent;
/// use rust_decimal::Decimal;
///
/// let basic = SalaryComponent {
///     key: "basic".to_string(),
///     label: "Basic Salary".to_string(),
///     annual: Decimal::new(420000, 0),
///     monthly: Decimal::new(35000, 0),
/// };
/// assert_eq!(basic.annual, basic.monthly * Decimal::from(12));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryComponent {
    /// Stable identifier of the component (e.g. "basic", "hra").
    pub key: String,
    /// Label printed on documents.
    pub label: String,
    /// Annual amount.
    pub annual: Decimal,
    /// Monthly amount.
    pub monthly: Decimal,
}

/// A deduction taken from the gross total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deduction {
    /// Stable identifier of the deduction (e.g. "pf", "professional_tax").
    pub key: String,
    /// Label printed on documents.
    pub label: String,
    /// The deducted amount, in the breakdown's basis.
    pub amount: Decimal,
}

/// The difference between the sum of rounded components and the total they
/// are reported against.
///
/// The engine never folds this difference into a component; callers decide
/// how to reconcile it when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundingDrift {
    /// Sum of the component amounts.
    pub component_sum: Decimal,
    /// The total the components are reported against.
    pub reported_total: Decimal,
    /// `component_sum - reported_total`.
    pub difference: Decimal,
}

impl RoundingDrift {
    /// Computes the drift of `component_sum` against `reported_total`.
    pub fn between(component_sum: Decimal, reported_total: Decimal) -> Self {
        Self {
            component_sum,
            reported_total,
            difference: component_sum - reported_total,
        }
    }

    /// Returns true when the components sum exactly to the total.
    pub fn is_zero(&self) -> bool {
        self.difference.is_zero()
    }
}

/// The result of splitting a compensation total under one policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentBreakdown {
    /// The policy that produced this breakdown.
    pub policy: CompensationPolicy,
    /// Whether `gross_total` and deductions are annual or monthly figures.
    pub basis: AmountBasis,
    /// Salary components in document order.
    pub components: Vec<SalaryComponent>,
    /// The gross total, in the breakdown's basis. Equal to the input total.
    pub gross_total: Decimal,
    /// Deductions, in the breakdown's basis. Empty for policies without deductions.
    pub deductions: Vec<Deduction>,
    /// `gross_total - sum(deductions)` for policies with deductions.
    pub net_total: Option<Decimal>,
    /// Drift of the annual component amounts against the annual total.
    pub annual_drift: RoundingDrift,
    /// Drift of the monthly component amounts against the monthly total.
    pub monthly_drift: RoundingDrift,
    /// The rules applied, in order.
    pub audit_steps: Vec<AuditStep>,
    /// Warnings raised while splitting.
    pub warnings: Vec<AuditWarning>,
}

impl ComponentBreakdown {
    /// Looks up a component by key.
    pub fn component(&self, key: &str) -> Option<&SalaryComponent> {
        self.components.iter().find(|c| c.key == key)
    }

    /// Looks up a deduction by key.
    pub fn deduction(&self, key: &str) -> Option<&Deduction> {
        self.deductions.iter().find(|d| d.key == key)
    }

    /// Sums the components in the breakdown's basis.
    pub fn component_sum(&self) -> Decimal {
        self.components
            .iter()
            .map(|c| match self.basis {
                AmountBasis::Annual => c.annual,
                AmountBasis::Monthly => c.monthly,
            })
            .sum()
    }

    /// Sums all deductions.
    pub fn deduction_total(&self) -> Decimal {
        self.deductions.iter().map(|d| d.amount).sum()
    }

    /// Returns true when any warning with the given code was raised.
    pub fn has_warning(&self, code: &str) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn component(key: &str, annual: &str, monthly: &str) -> SalaryComponent {
        SalaryComponent {
            key: key.to_string(),
            label: key.to_uppercase(),
            annual: dec(annual),
            monthly: dec(monthly),
        }
    }

    fn sample_breakdown(basis: AmountBasis) -> ComponentBreakdown {
        ComponentBreakdown {
            policy: CompensationPolicy::PayslipSimple,
            basis,
            components: vec![
                component("basic", "240000", "20000"),
                component("hra", "120000", "10000"),
            ],
            gross_total: dec("30000"),
            deductions: vec![
                Deduction {
                    key: "pf".to_string(),
                    label: "Provident Fund".to_string(),
                    amount: dec("1800"),
                },
                Deduction {
                    key: "professional_tax".to_string(),
                    label: "Professional Tax".to_string(),
                    amount: dec("200"),
                },
            ],
            net_total: Some(dec("28000")),
            annual_drift: RoundingDrift::between(dec("360000"), dec("360000")),
            monthly_drift: RoundingDrift::between(dec("30000"), dec("30000")),
            audit_steps: vec![],
            warnings: vec![],
        }
    }

    #[test]
    fn test_drift_difference_is_sum_minus_total() {
        let drift = RoundingDrift::between(dec("1234566"), dec("1234567"));
        assert_eq!(drift.difference, dec("-1"));
        assert!(!drift.is_zero());
    }

    #[test]
    fn test_component_sum_follows_basis() {
        assert_eq!(
            sample_breakdown(AmountBasis::Monthly).component_sum(),
            dec("30000")
        );
        assert_eq!(
            sample_breakdown(AmountBasis::Annual).component_sum(),
            dec("360000")
        );
    }

    #[test]
    fn test_lookup_by_key() {
        let breakdown = sample_breakdown(AmountBasis::Monthly);
        assert_eq!(breakdown.component("hra").unwrap().monthly, dec("10000"));
        assert!(breakdown.component("lta").is_none());
        assert_eq!(breakdown.deduction("pf").unwrap().amount, dec("1800"));
        assert_eq!(breakdown.deduction_total(), dec("2000"));
    }

    #[test]
    fn test_serialize_decimals_as_strings() {
        let json = serde_json::to_value(sample_breakdown(AmountBasis::Monthly)).unwrap();
        assert_eq!(json["policy"], "payslip_simple");
        assert_eq!(json["basis"], "monthly");
        assert_eq!(json["gross_total"], "30000");
        assert_eq!(json["components"][0]["key"], "basic");
    }
}
