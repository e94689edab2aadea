//! The balancing remainder step.
//!
//! Several policies define one component as "whatever is left" once the
//! other components are allocated. This module makes that a named step with
//! an explicit failure when the remainder would go negative. A negative
//! remainder is never clamped to zero.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// Computes `total - allocated`, failing if it is negative.
///
/// `scheme` names the policy or engine applying the step and is reported in
/// the error.
///
/// # Errors
///
/// Returns `PolicyInfeasible` with the shortfall when `allocated > total`.
///
/// # Examples
///
/// ```
/// use compensation_engine::calculation::balancing_remainder;
/// use rust_decimal::Decimal;
///
/// let rest = balancing_remainder(
///     "appraisal",
///     "special_allowance",
///     Decimal::from(100),
///     Decimal::from(60),
/// )
/// .unwrap();
/// assert_eq!(rest, Decimal::from(40));
/// ```
pub fn balancing_remainder(
    scheme: &str,
    component: &str,
    total: Decimal,
    allocated: Decimal,
) -> EngineResult<Decimal> {
    let remainder = total - allocated;
    if remainder < Decimal::ZERO {
        return Err(EngineError::PolicyInfeasible {
            policy: scheme.to_string(),
            component: component.to_string(),
            shortfall: -remainder,
        });
    }
    Ok(remainder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_zero_remainder_is_feasible() {
        let rest = balancing_remainder(
            "payslip_simple",
            "special_allowance",
            dec("500"),
            dec("500"),
        );
        assert_eq!(rest, Ok(dec("0")));
    }

    #[test]
    fn test_negative_remainder_reports_shortfall() {
        let result = balancing_remainder(
            "statutory_detailed",
            "special_allowance",
            dec("10000"),
            dec("46600"),
        );
        assert_eq!(
            result,
            Err(EngineError::PolicyInfeasible {
                policy: "statutory_detailed".to_string(),
                component: "special_allowance".to_string(),
                shortfall: dec("36600"),
            })
        );
    }
}
