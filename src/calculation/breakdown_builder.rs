//! Shared assembly of [`ComponentBreakdown`] records.
//!
//! Policies push components and deductions in document order; the builder
//! derives the other-period amount, records an audit step for each line and
//! measures rounding drift when finished.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::warn;

use crate::calculation::round_currency;
use crate::models::{
    AmountBasis, AuditLog, AuditWarning, ComponentBreakdown, CompensationPolicy, Deduction,
    NEGATIVE_NET_WARNING, ROUNDING_DRIFT_WARNING, RoundingDrift, SalaryComponent,
};

const MONTHS_PER_YEAR: Decimal = dec!(12);

pub(crate) struct BreakdownBuilder {
    policy: CompensationPolicy,
    basis: AmountBasis,
    total: Decimal,
    components: Vec<SalaryComponent>,
    deductions: Vec<Deduction>,
    log: AuditLog,
}

impl BreakdownBuilder {
    pub(crate) fn new(policy: CompensationPolicy, total: Decimal) -> Self {
        Self {
            policy,
            basis: policy.basis(),
            total,
            components: Vec::new(),
            deductions: Vec::new(),
            log: AuditLog::new(),
        }
    }

    /// Adds a component whose amount is in the policy's basis and returns that amount.
    pub(crate) fn component(
        &mut self,
        key: &str,
        label: &str,
        amount: Decimal,
        input: serde_json::Value,
        reasoning: String,
    ) -> Decimal {
        let (annual, monthly) = match self.basis {
            AmountBasis::Annual => (amount, round_currency(amount / MONTHS_PER_YEAR)),
            AmountBasis::Monthly => (amount * MONTHS_PER_YEAR, amount),
        };

        self.log.record(
            key,
            label,
            input,
            serde_json::json!({
                "annual": annual.normalize().to_string(),
                "monthly": monthly.normalize().to_string()
            }),
            reasoning,
        );

        self.components.push(SalaryComponent {
            key: key.to_string(),
            label: label.to_string(),
            annual,
            monthly,
        });
        amount
    }

    /// Adds a deduction and returns its amount.
    pub(crate) fn deduction(
        &mut self,
        key: &str,
        label: &str,
        amount: Decimal,
        input: serde_json::Value,
        reasoning: String,
    ) -> Decimal {
        self.log.record(
            key,
            label,
            input,
            serde_json::json!({ "amount": amount.normalize().to_string() }),
            reasoning,
        );

        self.deductions.push(Deduction {
            key: key.to_string(),
            label: label.to_string(),
            amount,
        });
        amount
    }

    /// Sum of the components allocated so far, in the policy's basis.
    pub(crate) fn allocated(&self) -> Decimal {
        self.components
            .iter()
            .map(|c| match self.basis {
                AmountBasis::Annual => c.annual,
                AmountBasis::Monthly => c.monthly,
            })
            .sum()
    }

    pub(crate) fn finish(self) -> ComponentBreakdown {
        let annual_sum: Decimal = self.components.iter().map(|c| c.annual).sum();
        let monthly_sum: Decimal = self.components.iter().map(|c| c.monthly).sum();

        let (annual_drift, monthly_drift) = match self.basis {
            AmountBasis::Annual => (
                RoundingDrift::between(annual_sum, self.total),
                RoundingDrift::between(monthly_sum, round_currency(self.total / MONTHS_PER_YEAR)),
            ),
            AmountBasis::Monthly => (
                RoundingDrift::between(annual_sum, self.total * MONTHS_PER_YEAR),
                RoundingDrift::between(monthly_sum, self.total),
            ),
        };

        let mut warnings = Vec::new();
        for (period, drift) in [("annual", &annual_drift), ("monthly", &monthly_drift)] {
            if !drift.is_zero() {
                warnings.push(AuditWarning::new(
                    ROUNDING_DRIFT_WARNING,
                    format!(
                        "{} components sum to {} against a total of {} (drift {})",
                        period,
                        drift.component_sum.normalize(),
                        drift.reported_total.normalize(),
                        drift.difference.normalize()
                    ),
                    "low",
                ));
            }
        }

        let net_total = if self.deductions.is_empty() {
            None
        } else {
            let deducted: Decimal = self.deductions.iter().map(|d| d.amount).sum();
            Some(self.total - deducted)
        };

        if let Some(net) = net_total.filter(|net| *net < Decimal::ZERO) {
            warn!(
                policy = %self.policy,
                gross = %self.total,
                net = %net,
                "Deductions exceed gross total"
            );
            warnings.push(AuditWarning::new(
                NEGATIVE_NET_WARNING,
                format!(
                    "deductions exceed the gross total of {}; net is {}",
                    self.total.normalize(),
                    net.normalize()
                ),
                "high",
            ));
        }

        ComponentBreakdown {
            policy: self.policy,
            basis: self.basis,
            components: self.components,
            gross_total: self.total,
            deductions: self.deductions,
            net_total,
            annual_drift,
            monthly_drift,
            audit_steps: self.log.into_steps(),
            warnings,
        }
    }
}

/// Renders a rate as a percentage for audit reasoning (0.0833 -> "8.33%").
pub(crate) fn percent(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}
