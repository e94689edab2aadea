//! Monthly payslip split.
//!
//! Splits a monthly gross into basic, HRA and a balancing special allowance,
//! then deducts provident fund and professional tax.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::calculation::balancing_remainder;
use crate::calculation::breakdown_builder::{BreakdownBuilder, percent};
use crate::calculation::round_currency;
use crate::error::{EngineResult, ensure_non_negative};
use crate::models::{ComponentBreakdown, CompensationPolicy};

/// Basic salary share of monthly gross.
pub const PAYSLIP_BASIC_RATE: Decimal = dec!(0.40);

/// HRA as a share of basic.
pub const PAYSLIP_HRA_RATE: Decimal = dec!(0.50);

/// Employee PF contribution as a share of basic.
pub const PAYSLIP_PF_RATE: Decimal = dec!(0.12);

/// Monthly cap on the PF deduction.
pub const PAYSLIP_PF_CAP: Decimal = dec!(1800);

/// Fixed monthly professional tax.
pub const PROFESSIONAL_TAX: Decimal = dec!(200);

/// Splits a monthly gross salary for a payslip.
///
/// Components (monthly): `basic` 40% of gross, `hra` 50% of basic,
/// `special_allowance` the remainder. HRA is taken from the unrounded basic,
/// so `basic + hra` never exceeds the gross and the split is feasible for
/// every non-negative gross. Deductions: `pf` min(12% of basic, 1800)
/// and `professional_tax` 200. `net_total = gross - pf - professional_tax`.
///
/// A gross too small to cover the deductions yields a negative `net_total`
/// and a `NEGATIVE_NET` warning; it is not clamped.
///
/// # Errors
///
/// Returns `InvalidAmount` if `monthly_gross` is negative.
///
/// # Examples
///
/// ```
/// use compensation_engine::calculation::split_payslip_simple;
/// use rust_decimal::Decimal;
///
/// let breakdown = split_payslip_simple(Decimal::from(50_000)).unwrap();
/// assert_eq!(breakdown.component("basic").unwrap().monthly, Decimal::from(20_000));
/// assert_eq!(breakdown.net_total, Some(Decimal::from(48_000)));
/// ```
pub fn split_payslip_simple(monthly_gross: Decimal) -> EngineResult<ComponentBreakdown> {
    ensure_non_negative("total", monthly_gross)?;

    let policy = CompensationPolicy::PayslipSimple;
    let mut builder = BreakdownBuilder::new(policy, monthly_gross);
    let gross_str = monthly_gross.normalize().to_string();

    let basic = round_currency(monthly_gross * PAYSLIP_BASIC_RATE);
    builder.component(
        "basic",
        "Basic Salary",
        basic,
        serde_json::json!({ "monthly_gross": gross_str, "rate": "0.4" }),
        format!(
            "{} of gross {} = {}",
            percent(PAYSLIP_BASIC_RATE),
            gross_str,
            basic
        ),
    );

    // From the unrounded basic: two half-up roundings of a chained share
    // could otherwise exceed a small gross.
    let exact_basic = monthly_gross * PAYSLIP_BASIC_RATE;
    let hra = round_currency(exact_basic * PAYSLIP_HRA_RATE);
    builder.component(
        "hra",
        "House Rent Allowance",
        hra,
        serde_json::json!({ "basic": exact_basic.normalize().to_string(), "rate": "0.5" }),
        format!(
            "{} of basic {} = {}",
            percent(PAYSLIP_HRA_RATE),
            exact_basic.normalize(),
            hra
        ),
    );

    let allocated = builder.allocated();
    let special = round_currency(balancing_remainder(
        policy.as_str(),
        "special_allowance",
        monthly_gross,
        allocated,
    )?);
    builder.component(
        "special_allowance",
        "Special Allowance",
        special,
        serde_json::json!({
            "monthly_gross": gross_str,
            "allocated": allocated.to_string()
        }),
        format!(
            "gross {} - (basic + HRA) {} = {}",
            gross_str, allocated, special
        ),
    );

    let uncapped_pf = round_currency(basic * PAYSLIP_PF_RATE);
    let pf = uncapped_pf.min(PAYSLIP_PF_CAP);
    builder.deduction(
        "pf",
        "Provident Fund",
        pf,
        serde_json::json!({
            "basic": basic.to_string(),
            "rate": "0.12",
            "cap": PAYSLIP_PF_CAP.to_string(),
            "cap_applied": uncapped_pf > PAYSLIP_PF_CAP
        }),
        if uncapped_pf > PAYSLIP_PF_CAP {
            format!(
                "{} of basic {} = {} (capped at {})",
                percent(PAYSLIP_PF_RATE),
                basic,
                uncapped_pf,
                PAYSLIP_PF_CAP
            )
        } else {
            format!("{} of basic {} = {}", percent(PAYSLIP_PF_RATE), basic, pf)
        },
    );

    builder.deduction(
        "professional_tax",
        "Professional Tax",
        PROFESSIONAL_TAX,
        serde_json::json!({ "fixed": PROFESSIONAL_TAX.to_string() }),
        format!("Fixed monthly professional tax {}", PROFESSIONAL_TAX),
    );

    Ok(builder.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::{AmountBasis, NEGATIVE_NET_WARNING};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_fifty_thousand_gross() {
        let breakdown = split_payslip_simple(dec("50000")).unwrap();

        assert_eq!(breakdown.basis, AmountBasis::Monthly);
        assert_eq!(breakdown.component("basic").unwrap().monthly, dec("20000"));
        assert_eq!(breakdown.component("hra").unwrap().monthly, dec("10000"));
        assert_eq!(
            breakdown.component("special_allowance").unwrap().monthly,
            dec("20000")
        );
        // 12% of 20000 = 2400, capped
        assert_eq!(breakdown.deduction("pf").unwrap().amount, dec("1800"));
        assert_eq!(
            breakdown.deduction("professional_tax").unwrap().amount,
            dec("200")
        );
        assert_eq!(breakdown.net_total, Some(dec("48000")));
    }

    #[test]
    fn test_pf_below_cap() {
        let breakdown = split_payslip_simple(dec("25000")).unwrap();

        // basic 10000, 12% = 1200
        assert_eq!(breakdown.deduction("pf").unwrap().amount, dec("1200"));
        assert_eq!(breakdown.net_total, Some(dec("23600")));
    }

    #[test]
    fn test_annual_equivalents_are_twelve_times_monthly() {
        let breakdown = split_payslip_simple(dec("50000")).unwrap();
        assert_eq!(breakdown.component("basic").unwrap().annual, dec("240000"));
        assert!(breakdown.annual_drift.is_zero());
        assert!(breakdown.monthly_drift.is_zero());
    }

    #[test]
    fn test_components_sum_to_gross() {
        for gross in [dec("1"), dec("333"), dec("12345"), dec("98765.50")] {
            let breakdown = split_payslip_simple(gross).unwrap();
            let special = breakdown.component("special_allowance").unwrap().monthly;
            assert!(special >= Decimal::ZERO, "gross {}", gross);
            assert!(
                (breakdown.component_sum() - gross).abs() < Decimal::ONE,
                "gross {}",
                gross
            );
        }
    }

    #[test]
    fn test_small_gross_gives_negative_net_with_warning() {
        // basic 40, hra 20, special 40, pf round(4.8) = 5, pt 200
        let breakdown = split_payslip_simple(dec("100")).unwrap();

        assert_eq!(breakdown.deduction("pf").unwrap().amount, dec("5"));
        assert_eq!(breakdown.net_total, Some(dec("-105")));
        assert!(breakdown.has_warning(NEGATIVE_NET_WARNING));
    }

    #[test]
    fn test_small_fractional_gross_stays_feasible() {
        // 1.25: basic round(0.5) = 1, hra round(0.25) = 0, special round(0.25) = 0
        let cases = [
            ("1.25", "1", "0", "0"),
            ("1.3", "1", "0", "0"),
            ("1.5", "1", "0", "1"),
            ("2.5", "1", "1", "1"),
        ];
        for (gross, basic, hra, special) in cases {
            let breakdown = split_payslip_simple(dec(gross)).unwrap();
            assert_eq!(
                breakdown.component("basic").unwrap().monthly,
                dec(basic),
                "gross {}",
                gross
            );
            assert_eq!(
                breakdown.component("hra").unwrap().monthly,
                dec(hra),
                "gross {}",
                gross
            );
            assert_eq!(
                breakdown.component("special_allowance").unwrap().monthly,
                dec(special),
                "gross {}",
                gross
            );
        }
    }

    #[test]
    fn test_every_small_gross_is_feasible() {
        for paise in 0..1000 {
            let gross = Decimal::new(paise, 2);
            let breakdown = split_payslip_simple(gross).unwrap();
            let special = breakdown.component("special_allowance").unwrap().monthly;
            assert!(special >= Decimal::ZERO, "gross {}", gross);
        }
    }

    #[test]
    fn test_zero_gross() {
        let breakdown = split_payslip_simple(Decimal::ZERO).unwrap();
        assert_eq!(breakdown.net_total, Some(dec("-200")));
    }

    #[test]
    fn test_negative_gross_is_invalid_amount() {
        assert!(matches!(
            split_payslip_simple(dec("-100")),
            Err(EngineError::InvalidAmount { .. })
        ));
    }
}
