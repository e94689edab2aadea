//! Policy dispatch for compensation splits.

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculation::{
    split_appraisal, split_payslip_simple, split_standard_offer, split_statutory_detailed,
};
use crate::error::{EngineResult, ensure_non_negative};
use crate::models::{ComponentBreakdown, CompensationPolicy};

/// Splits a compensation total into named components under the given policy.
///
/// `total` is an annual CTC for every policy except
/// [`CompensationPolicy::PayslipSimple`], which takes a monthly gross.
///
/// # Errors
///
/// - `InvalidAmount` if `total` is negative (checked before any arithmetic)
/// - `PolicyInfeasible` if the policy's balancing component would be negative
///
/// # Examples
///
/// ```
/// use compensation_engine::calculation::split_compensation;
/// use compensation_engine::models::CompensationPolicy;
/// use rust_decimal::Decimal;
///
/// let breakdown = split_compensation(CompensationPolicy::Appraisal, Decimal::from(1_200_000)).unwrap();
/// assert_eq!(breakdown.policy, CompensationPolicy::Appraisal);
/// assert_eq!(breakdown.component_sum(), Decimal::from(1_200_000));
/// ```
pub fn split_compensation(
    policy: CompensationPolicy,
    total: Decimal,
) -> EngineResult<ComponentBreakdown> {
    ensure_non_negative("total", total)?;

    let breakdown = match policy {
        CompensationPolicy::StandardOffer => split_standard_offer(total),
        CompensationPolicy::StatutoryDetailed => split_statutory_detailed(total),
        CompensationPolicy::PayslipSimple => split_payslip_simple(total),
        CompensationPolicy::Appraisal => split_appraisal(total),
    }?;

    debug!(
        policy = %policy,
        total = %total,
        components = breakdown.components.len(),
        annual_drift = %breakdown.annual_drift.difference,
        monthly_drift = %breakdown.monthly_drift.difference,
        "Split compensation"
    );

    Ok(breakdown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_dispatch_reaches_each_policy() {
        for policy in CompensationPolicy::ALL {
            let breakdown = split_compensation(policy, dec("1200000")).unwrap();
            assert_eq!(breakdown.policy, policy);
            assert_eq!(breakdown.basis, policy.basis());
        }
    }

    #[test]
    fn test_dispatch_matches_direct_call() {
        assert_eq!(
            split_compensation(CompensationPolicy::StatutoryDetailed, dec("900000")),
            split_statutory_detailed(dec("900000"))
        );
        assert_eq!(
            split_compensation(CompensationPolicy::PayslipSimple, dec("42000")),
            split_payslip_simple(dec("42000"))
        );
    }

    #[test]
    fn test_negative_total_rejected_for_every_policy() {
        for policy in CompensationPolicy::ALL {
            let result = split_compensation(policy, dec("-0.01"));
            assert_eq!(
                result,
                Err(EngineError::invalid_amount("total", dec("-0.01"))),
                "policy {}",
                policy
            );
        }
    }

    #[test]
    fn test_policies_are_not_interchangeable() {
        let offer = split_compensation(CompensationPolicy::StandardOffer, dec("1200000")).unwrap();
        let appraisal = split_compensation(CompensationPolicy::Appraisal, dec("1200000")).unwrap();
        assert_ne!(
            offer.component("basic").unwrap().annual,
            appraisal.component("basic").unwrap().annual
        );
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        for policy in CompensationPolicy::ALL {
            let first = split_compensation(policy, dec("765432")).unwrap();
            let second = split_compensation(policy, dec("765432")).unwrap();
            assert_eq!(first, second);
            let first = serde_json::to_string(&first).unwrap();
            let second = serde_json::to_string(&second).unwrap();
            assert_eq!(first, second);
        }
    }
}
