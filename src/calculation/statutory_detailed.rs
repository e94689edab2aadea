//! Comprehensive annual breakup with statutory contributions.
//!
//! Basic is half the CTC; most other components derive from basic, some are
//! fixed yearly amounts and two are capped. The special allowance absorbs
//! whatever is left and must not go negative.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::calculation::balancing_remainder;
use crate::calculation::breakdown_builder::{BreakdownBuilder, percent};
use crate::calculation::round_currency;
use crate::error::{EngineResult, ensure_non_negative};
use crate::models::{ComponentBreakdown, CompensationPolicy};

/// Basic salary share of CTC.
pub const STATUTORY_BASIC_RATE: Decimal = dec!(0.50);
/// HRA as a share of basic.
pub const STATUTORY_HRA_RATE: Decimal = dec!(0.40);
/// Fixed yearly education allowance.
pub const EDUCATION_ALLOWANCE: Decimal = dec!(2400);
/// Fixed yearly monthly-reimbursement allowance.
pub const MONTHLY_REIMBURSEMENT: Decimal = dec!(36000);
/// Leave travel allowance as a share of basic.
pub const LTA_RATE: Decimal = dec!(0.08);
/// Statutory bonus as a share of basic.
pub const STATUTORY_BONUS_RATE: Decimal = dec!(0.0833);
/// Yearly cap on the statutory bonus.
pub const STATUTORY_BONUS_CAP: Decimal = dec!(20991);
/// Employer provident fund contribution as a share of basic.
pub const EMPLOYER_PF_RATE: Decimal = dec!(0.12);
/// Yearly cap on the employer PF contribution.
pub const EMPLOYER_PF_CAP: Decimal = dec!(21600);
/// Gratuity as a share of basic.
pub const GRATUITY_RATE: Decimal = dec!(0.0417);
/// Health insurance as a share of CTC.
pub const HEALTH_INSURANCE_RATE: Decimal = dec!(0.00429);
/// Fixed yearly wellness allowance.
pub const MONTHLY_WELLNESS: Decimal = dec!(1200);

/// Splits an annual CTC into the comprehensive statutory breakup.
///
/// Components, in document order:
///
/// | key | amount |
/// |-----|--------|
/// | `basic` | 50% of CTC |
/// | `hra` | 40% of basic |
/// | `education_allowance` | 2400 |
/// | `monthly_reimbursement` | 36000 |
/// | `lta` | 8% of basic |
/// | `statutory_bonus` | min(8.33% of basic, 20991) |
/// | `employer_pf` | min(12% of basic, 21600) |
/// | `gratuity` | 4.17% of basic |
/// | `health_insurance` | 0.429% of CTC |
/// | `monthly_wellness` | 1200 |
/// | `special_allowance` | CTC minus all of the above |
///
/// Percentages of basic apply to the rounded basic amount.
///
/// # Errors
///
/// - `InvalidAmount` if `annual_ctc` is negative
/// - `PolicyInfeasible` if the other components exceed the CTC
///
/// # Examples
///
/// ```
/// use compensation_engine::calculation::split_statutory_detailed;
/// use rust_decimal::Decimal;
///
/// let breakdown = split_statutory_detailed(Decimal::from(1_200_000)).unwrap();
/// assert_eq!(breakdown.component("statutory_bonus").unwrap().annual, Decimal::from(20_991));
/// assert_eq!(breakdown.component("special_allowance").unwrap().annual, Decimal::from(199_641));
///
/// assert!(split_statutory_detailed(Decimal::from(10_000)).is_err());
/// ```
pub fn split_statutory_detailed(annual_ctc: Decimal) -> EngineResult<ComponentBreakdown> {
    ensure_non_negative("total", annual_ctc)?;

    let policy = CompensationPolicy::StatutoryDetailed;
    let mut builder = BreakdownBuilder::new(policy, annual_ctc);

    let basic = add_share(
        &mut builder,
        "basic",
        "Basic Salary",
        ("CTC", annual_ctc),
        STATUTORY_BASIC_RATE,
    );
    add_share(
        &mut builder,
        "hra",
        "House Rent Allowance",
        ("basic", basic),
        STATUTORY_HRA_RATE,
    );
    add_fixed(
        &mut builder,
        "education_allowance",
        "Education Allowance",
        EDUCATION_ALLOWANCE,
    );
    add_fixed(
        &mut builder,
        "monthly_reimbursement",
        "Monthly Reimbursement",
        MONTHLY_REIMBURSEMENT,
    );
    add_share(
        &mut builder,
        "lta",
        "Leave Travel Allowance",
        ("basic", basic),
        LTA_RATE,
    );
    add_capped_share(
        &mut builder,
        "statutory_bonus",
        "Statutory Bonus",
        basic,
        STATUTORY_BONUS_RATE,
        STATUTORY_BONUS_CAP,
    );
    add_capped_share(
        &mut builder,
        "employer_pf",
        "Employer PF Contribution",
        basic,
        EMPLOYER_PF_RATE,
        EMPLOYER_PF_CAP,
    );
    add_share(
        &mut builder,
        "gratuity",
        "Gratuity",
        ("basic", basic),
        GRATUITY_RATE,
    );
    add_share(
        &mut builder,
        "health_insurance",
        "Health Insurance",
        ("CTC", annual_ctc),
        HEALTH_INSURANCE_RATE,
    );
    add_fixed(
        &mut builder,
        "monthly_wellness",
        "Monthly Wellness",
        MONTHLY_WELLNESS,
    );

    let allocated = builder.allocated();
    let remainder =
        balancing_remainder(policy.as_str(), "special_allowance", annual_ctc, allocated)?;
    let special = round_currency(remainder);
    builder.component(
        "special_allowance",
        "Special Allowance",
        special,
        serde_json::json!({
            "annual_ctc": annual_ctc.normalize().to_string(),
            "allocated": allocated.normalize().to_string()
        }),
        format!(
            "CTC {} - allocated {} = {}",
            annual_ctc.normalize(),
            allocated.normalize(),
            special
        ),
    );

    Ok(builder.finish())
}

/// Adds `rate` of a named base amount, rounded to the nearest unit.
fn add_share(
    builder: &mut BreakdownBuilder,
    key: &str,
    label: &str,
    (base_name, base): (&str, Decimal),
    rate: Decimal,
) -> Decimal {
    let amount = round_currency(base * rate);
    builder.component(
        key,
        label,
        amount,
        serde_json::json!({
            "base": base_name,
            "base_amount": base.normalize().to_string(),
            "rate": rate.normalize().to_string()
        }),
        format!(
            "{} of {} {} = {}",
            percent(rate),
            base_name,
            base.normalize(),
            amount
        ),
    )
}

/// Adds `rate` of basic, limited to `cap`.
fn add_capped_share(
    builder: &mut BreakdownBuilder,
    key: &str,
    label: &str,
    basic: Decimal,
    rate: Decimal,
    cap: Decimal,
) -> Decimal {
    let uncapped = round_currency(basic * rate);
    let cap_applied = uncapped > cap;
    let amount = if cap_applied { cap } else { uncapped };

    let reasoning = if cap_applied {
        format!(
            "{} of basic {} = {} (capped at {})",
            percent(rate),
            basic,
            uncapped,
            cap
        )
    } else {
        format!("{} of basic {} = {}", percent(rate), basic, amount)
    };

    builder.component(
        key,
        label,
        amount,
        serde_json::json!({
            "base": "basic",
            "base_amount": basic.normalize().to_string(),
            "rate": rate.normalize().to_string(),
            "cap": cap.to_string(),
            "cap_applied": cap_applied
        }),
        reasoning,
    )
}

fn add_fixed(builder: &mut BreakdownBuilder, key: &str, label: &str, amount: Decimal) {
    builder.component(
        key,
        label,
        amount,
        serde_json::json!({ "fixed": amount.to_string() }),
        format!("Fixed yearly amount {}", amount),
    );
}
