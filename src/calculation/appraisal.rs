//! Appraisal letter split.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::calculation::balancing_remainder;
use crate::calculation::breakdown_builder::{BreakdownBuilder, percent};
use crate::calculation::round_currency;
use crate::error::{EngineResult, ensure_non_negative};
use crate::models::{ComponentBreakdown, CompensationPolicy};

/// Basic salary share of CTC.
pub const APPRAISAL_BASIC_RATE: Decimal = dec!(0.40);

/// HRA as a share of basic.
pub const APPRAISAL_HRA_RATE: Decimal = dec!(0.50);

/// Dearness allowance share of CTC.
pub const APPRAISAL_DA_RATE: Decimal = dec!(0.10);

/// Fixed yearly conveyance allowance.
pub const APPRAISAL_CONVEYANCE: Decimal = dec!(19200);

/// Fixed yearly medical allowance.
pub const APPRAISAL_MEDICAL: Decimal = dec!(15000);

/// Splits a revised annual CTC for an appraisal letter.
///
/// Components, in document order: `basic` 40% of CTC, `hra` 50% of basic,
/// `dearness_allowance` 10% of CTC, `conveyance_allowance` 19200,
/// `medical_allowance` 15000 and `special_allowance` as the remainder.
/// Every component carries its monthly amount (annual / 12, rounded).
///
/// # Errors
///
/// - `InvalidAmount` if `annual_ctc` is negative
/// - `PolicyInfeasible` if the other components exceed the CTC
///
/// # Examples
///
/// ```
/// use compensation_engine::calculation::split_appraisal;
/// use rust_decimal::Decimal;
///
/// let breakdown = split_appraisal(Decimal::from(1_200_000)).unwrap();
/// assert_eq!(breakdown.component("special_allowance").unwrap().annual, Decimal::from(325_800));
/// assert_eq!(breakdown.component("special_allowance").unwrap().monthly, Decimal::from(27_150));
/// ```
pub fn split_appraisal(annual_ctc: Decimal) -> EngineResult<ComponentBreakdown> {
    ensure_non_negative("total", annual_ctc)?;

    let policy = CompensationPolicy::Appraisal;
    let mut builder = BreakdownBuilder::new(policy, annual_ctc);
    let ctc_str = annual_ctc.normalize().to_string();

    let basic = round_currency(annual_ctc * APPRAISAL_BASIC_RATE);
    builder.component(
        "basic",
        "Basic Salary",
        basic,
        serde_json::json!({ "annual_ctc": ctc_str, "rate": "0.4" }),
        format!(
            "{} of CTC {} = {}",
            percent(APPRAISAL_BASIC_RATE),
            ctc_str,
            basic
        ),
    );

    let hra = round_currency(basic * APPRAISAL_HRA_RATE);
    builder.component(
        "hra",
        "House Rent Allowance",
        hra,
        serde_json::json!({ "basic": basic.to_string(), "rate": "0.5" }),
        format!(
            "{} of basic {} = {}",
            percent(APPRAISAL_HRA_RATE),
            basic,
            hra
        ),
    );

    let da = round_currency(annual_ctc * APPRAISAL_DA_RATE);
    builder.component(
        "dearness_allowance",
        "Dearness Allowance",
        da,
        serde_json::json!({ "annual_ctc": ctc_str, "rate": "0.1" }),
        format!("{} of CTC {} = {}", percent(APPRAISAL_DA_RATE), ctc_str, da),
    );

    for (key, label, amount) in [
        (
            "conveyance_allowance",
            "Conveyance Allowance",
            APPRAISAL_CONVEYANCE,
        ),
        ("medical_allowance", "Medical Allowance", APPRAISAL_MEDICAL),
    ] {
        builder.component(
            key,
            label,
            amount,
            serde_json::json!({ "fixed": amount.to_string() }),
            format!("Fixed yearly amount {}", amount),
        );
    }

    let allocated = builder.allocated();
    let special = round_currency(balancing_remainder(
        policy.as_str(),
        "special_allowance",
        annual_ctc,
        allocated,
    )?);
    builder.component(
        "special_allowance",
        "Special Allowance",
        special,
        serde_json::json!({
            "annual_ctc": ctc_str,
            "allocated": allocated.to_string()
        }),
        format!("CTC {} - allocated {} = {}", ctc_str, allocated, special),
    );

    Ok(builder.finish())
}
