//! Standard offer letter split.
//!
//! Used on offer and appointment letters. The annual CTC is divided into four
//! components by fixed percentage; each is rounded independently, so the
//! components may drift from the CTC by a few units. The drift is reported,
//! not absorbed.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::calculation::breakdown_builder::{BreakdownBuilder, percent};
use crate::calculation::round_currency;
use crate::error::{EngineResult, ensure_non_negative};
use crate::models::{ComponentBreakdown, CompensationPolicy};

/// Basic salary share of annual CTC.
pub const STANDARD_OFFER_BASIC_RATE: Decimal = dec!(0.35);

/// Dearness allowance share of annual CTC.
pub const STANDARD_OFFER_DEARNESS_RATE: Decimal = dec!(0.30);

/// Conveyance allowance share of annual CTC.
pub const STANDARD_OFFER_CONVEYANCE_RATE: Decimal = dec!(0.20);

/// Other allowance share of annual CTC.
pub const STANDARD_OFFER_OTHER_RATE: Decimal = dec!(0.15);

/// Splits an annual CTC for an offer letter.
///
/// Components, in document order:
/// - `basic`: 35% of CTC
/// - `dearness_allowance`: 30% of CTC
/// - `conveyance_allowance`: 20% of CTC
/// - `other_allowance`: 15% of CTC
///
/// Each annual amount is rounded to the nearest unit; monthly amounts are the
/// rounded annual amount divided by 12, rounded again. `gross_total` is the
/// input CTC exactly.
///
/// # Errors
///
/// Returns `InvalidAmount` if `annual_ctc` is negative.
///
/// # Examples
///
/// ```
/// use compensation_engine::calculation::split_standard_offer;
/// use rust_decimal::Decimal;
///
/// let breakdown = split_standard_offer(Decimal::from(1_000_000)).unwrap();
/// assert_eq!(breakdown.component("basic").unwrap().annual, Decimal::from(350_000));
/// assert_eq!(breakdown.component("basic").unwrap().monthly, Decimal::from(29_167));
/// assert_eq!(breakdown.gross_total, Decimal::from(1_000_000));
/// ```
pub fn split_standard_offer(annual_ctc: Decimal) -> EngineResult<ComponentBreakdown> {
    ensure_non_negative("total", annual_ctc)?;

    let mut builder = BreakdownBuilder::new(CompensationPolicy::StandardOffer, annual_ctc);

    for (key, label, rate) in [
        ("basic", "Basic Salary", STANDARD_OFFER_BASIC_RATE),
        (
            "dearness_allowance",
            "Dearness Allowance",
            STANDARD_OFFER_DEARNESS_RATE,
        ),
        (
            "conveyance_allowance",
            "Conveyance Allowance",
            STANDARD_OFFER_CONVEYANCE_RATE,
        ),
        ("other_allowance", "Other Allowance", STANDARD_OFFER_OTHER_RATE),
    ] {
        let amount = round_currency(annual_ctc * rate);
        builder.component(
            key,
            label,
            amount,
            serde_json::json!({
                "annual_ctc": annual_ctc.normalize().to_string(),
                "rate": rate.normalize().to_string()
            }),
            format!(
                "{} of {} = {}",
                percent(rate),
                annual_ctc.normalize(),
                amount.normalize()
            ),
        );
    }

    Ok(builder.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::ROUNDING_DRIFT_WARNING;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_rates_sum_to_one() {
        assert_eq!(
            STANDARD_OFFER_BASIC_RATE
                + STANDARD_OFFER_DEARNESS_RATE
                + STANDARD_OFFER_CONVEYANCE_RATE
                + STANDARD_OFFER_OTHER_RATE,
            Decimal::ONE
        );
    }

    #[test]
    fn test_ten_lakh_ctc() {
        let breakdown = split_standard_offer(dec("1000000")).unwrap();

        let keys: Vec<_> = breakdown.components.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "basic",
                "dearness_allowance",
                "conveyance_allowance",
                "other_allowance"
            ]
        );

        assert_eq!(breakdown.component("basic").unwrap().annual, dec("350000"));
        assert_eq!(
            breakdown.component("dearness_allowance").unwrap().annual,
            dec("300000")
        );
        assert_eq!(
            breakdown.component("conveyance_allowance").unwrap().annual,
            dec("200000")
        );
        assert_eq!(
            breakdown.component("other_allowance").unwrap().annual,
            dec("150000")
        );
        assert!(breakdown.annual_drift.is_zero());
    }

    #[test]
    fn test_monthly_amounts_are_rounded_twelfths() {
        let breakdown = split_standard_offer(dec("1000000")).unwrap();

        assert_eq!(breakdown.component("basic").unwrap().monthly, dec("29167"));
        assert_eq!(
            breakdown.component("dearness_allowance").unwrap().monthly,
            dec("25000")
        );
        assert_eq!(
            breakdown.component("conveyance_allowance").unwrap().monthly,
            dec("16667")
        );
        assert_eq!(
            breakdown.component("other_allowance").unwrap().monthly,
            dec("12500")
        );
        // 83334 against round(1000000 / 12) = 83333
        assert_eq!(breakdown.monthly_drift.difference, dec("1"));
        assert!(breakdown.has_warning(ROUNDING_DRIFT_WARNING));
    }

    #[test]
    fn test_independent_rounding_drift_is_reported() {
        let breakdown = split_standard_offer(dec("1234567")).unwrap();

        assert_eq!(breakdown.component("basic").unwrap().annual, dec("432098"));
        assert_eq!(
            breakdown.component("dearness_allowance").unwrap().annual,
            dec("370370")
        );
        assert_eq!(
            breakdown.component("conveyance_allowance").unwrap().annual,
            dec("246913")
        );
        assert_eq!(
            breakdown.component("other_allowance").unwrap().annual,
            dec("185185")
        );
        assert_eq!(breakdown.gross_total, dec("1234567"));
        assert_eq!(breakdown.annual_drift.component_sum, dec("1234566"));
        assert_eq!(breakdown.annual_drift.difference, dec("-1"));
    }

    #[test]
    fn test_zero_ctc() {
        let breakdown = split_standard_offer(Decimal::ZERO).unwrap();
        assert_eq!(breakdown.component_sum(), Decimal::ZERO);
        assert!(breakdown.warnings.is_empty());
    }

    #[test]
    fn test_no_deductions() {
        let breakdown = split_standard_offer(dec("500000")).unwrap();
        assert!(breakdown.deductions.is_empty());
        assert!(breakdown.net_total.is_none());
    }

    #[test]
    fn test_negative_ctc_is_invalid_amount() {
        let result = split_standard_offer(dec("-1"));
        assert!(matches!(result, Err(EngineError::InvalidAmount { .. })));
    }

    #[test]
    fn test_audit_reasoning_shows_percentage() {
        let breakdown = split_standard_offer(dec("1000000")).unwrap();
        assert_eq!(breakdown.audit_steps.len(), 4);
        assert_eq!(
            breakdown.audit_steps[0].reasoning,
            "35% of 1000000 = 350000"
        );
    }
}
