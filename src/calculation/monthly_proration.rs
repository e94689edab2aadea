//! Monthly salary proration.
//!
//! Prorates annual fixed pay for a calendar month against leave taken.
//! Work days are counted against the true length of the month, but the daily
//! rate always divides by a fixed 30-day month. The two must stay separate:
//! a 29-day February and a 31-day March share the same daily rate.
//!
//! Every monetary figure is rounded to 2 places (half-up) as soon as it is
//! computed, in the order listed on [`calculate_monthly_salary`].

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, warn};

use crate::calculation::{PayrollMonth, YearBounds, balancing_remainder, round_money};
use crate::error::{EngineError, EngineResult, ensure_non_negative};
use crate::models::{
    AuditLog, AuditWarning, MonthlyComponents, NEGATIVE_NET_WARNING, ProrationContext,
    ProrationResult,
};

/// Fixed divisor for the daily rate.
pub const DAILY_RATE_DIVISOR: Decimal = dec!(30);

/// Fixed monthly professional tax deduction.
pub const PT_DEDUCTION: Decimal = dec!(200);

/// Basic salary share of monthly fixed pay.
pub const PRORATION_BASIC_RATE: Decimal = dec!(0.40);

/// HRA as a share of basic.
pub const PRORATION_HRA_RATE: Decimal = dec!(0.40);

/// Conveyance allowance share of monthly fixed pay.
pub const PRORATION_CONVEYANCE_RATE: Decimal = dec!(0.05);

const MONTHS_PER_YEAR: Decimal = dec!(12);

const SCHEME: &str = "monthly_proration";

/// Calculates the prorated salary for one month, accepting years 1900-2100.
///
/// Steps:
/// 1. `variable_pay = ctc - fixed_pay`
/// 2. `month_days` = true days in the calendar month
/// 3. `per_month = fixed_pay / 12`
/// 4. `per_day = per_month / 30`
/// 5. `work_days = max(0, month_days - leave_count)`
/// 6. display components: basic 40% of `per_month`, HRA 40% of basic,
///    conveyance 5% of `per_month`, other allowance the remainder
/// 7. `gross_salary = per_month`
/// 8. deductions: professional tax 200 plus `leave_count * per_day`
/// 9. `net_salary = gross_salary - total_deduction`
///
/// # Arguments
///
/// * `ctc` - Annual cost to company
/// * `fixed_pay` - Annual fixed pay, at most `ctc`
/// * `year` - Calendar year of the payroll month
/// * `month` - Calendar month (1-12)
/// * `leave_count` - Days of leave taken; fractional days are allowed
///
/// # Errors
///
/// All validation happens before any arithmetic:
/// - `InvalidAmount` if `ctc` or `fixed_pay` is negative
/// - `InvalidRange` if `fixed_pay > ctc`, `leave_count` is negative,
///   `month` is outside 1-12 or `year` is outside 1900-2100
///
/// # Examples
///
/// ```
/// use compensation_engine::calculation::calculate_monthly_salary;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_monthly_salary(
///     Decimal::from(1_200_000),
///     Decimal::from(600_000),
///     2024,
///     2,
///     Decimal::ONE,
/// )
/// .unwrap();
///
/// assert_eq!(result.context.per_day, Decimal::from_str("1666.67").unwrap());
/// assert_eq!(result.context.work_days, Decimal::from(28));
/// assert_eq!(result.net_salary, Decimal::from_str("48133.33").unwrap());
/// ```
pub fn calculate_monthly_salary(
    ctc: Decimal,
    fixed_pay: Decimal,
    year: i32,
    month: u32,
    leave_count: Decimal,
) -> EngineResult<ProrationResult> {
    calculate_monthly_salary_with_bounds(
        ctc,
        fixed_pay,
        year,
        month,
        leave_count,
        &YearBounds::default(),
    )
}

/// Calculates the prorated salary for one month, accepting years within `bounds`.
///
/// Identical to [`calculate_monthly_salary`] except for the year check.
pub fn calculate_monthly_salary_with_bounds(
    ctc: Decimal,
    fixed_pay: Decimal,
    year: i32,
    month: u32,
    leave_count: Decimal,
    bounds: &YearBounds,
) -> EngineResult<ProrationResult> {
    ensure_non_negative("ctc", ctc)?;
    ensure_non_negative("fixed_pay", fixed_pay)?;
    if fixed_pay > ctc {
        return Err(EngineError::invalid_range(
            "fixed_pay",
            format!("fixed pay {} exceeds ctc {}", fixed_pay, ctc),
        ));
    }
    if leave_count < Decimal::ZERO {
        return Err(EngineError::invalid_range(
            "leave_count",
            format!("must not be negative, got {}", leave_count),
        ));
    }
    let payroll_month = PayrollMonth::within(year, month, bounds)?;

    let mut log = AuditLog::new();

    let variable_pay = round_money(ctc - fixed_pay);
    log.record(
        "variable_pay",
        "Variable Pay",
        serde_json::json!({ "ctc": ctc.to_string(), "fixed_pay": fixed_pay.to_string() }),
        serde_json::json!({ "variable_pay": variable_pay.to_string() }),
        format!("{} - {} = {}", ctc, fixed_pay, variable_pay),
    );

    let month_days = payroll_month.days()?;
    let per_month = round_money(fixed_pay / MONTHS_PER_YEAR);
    let per_day = round_money(per_month / DAILY_RATE_DIVISOR);
    let work_days = (Decimal::from(month_days) - leave_count).max(Decimal::ZERO);
    log.record(
        "rates",
        "Monthly and Daily Rates",
        serde_json::json!({
            "fixed_pay": fixed_pay.to_string(),
            "year": year,
            "month": month,
            "leave_count": leave_count.to_string()
        }),
        serde_json::json!({
            "month_days": month_days,
            "per_month": per_month.to_string(),
            "per_day": per_day.to_string(),
            "work_days": work_days.to_string()
        }),
        format!(
            "{} / 12 = {} per month; {} / 30 = {} per day; {} days - {} leave = {} work days",
            fixed_pay, per_month, per_month, per_day, month_days, leave_count, work_days
        ),
    );

    let basic = round_money(per_month * PRORATION_BASIC_RATE);
    let hra = round_money(basic * PRORATION_HRA_RATE);
    let conveyance_allowance = round_money(per_month * PRORATION_CONVEYANCE_RATE);
    let other_allowance = balancing_remainder(
        SCHEME,
        "other_allowance",
        per_month,
        basic + hra + conveyance_allowance,
    )?;
    let components = MonthlyComponents {
        basic,
        hra,
        conveyance_allowance,
        other_allowance,
    };
    log.record(
        "components",
        "Monthly Components",
        serde_json::json!({ "per_month": per_month.to_string() }),
        serde_json::json!({
            "basic": basic.to_string(),
            "hra": hra.to_string(),
            "conveyance_allowance": conveyance_allowance.to_string(),
            "other_allowance": other_allowance.to_string()
        }),
        format!(
            "basic 40% = {}, HRA 40% of basic = {}, conveyance 5% = {}, other = {}",
            basic, hra, conveyance_allowance, other_allowance
        ),
    );

    let gross_salary = per_month;
    let pt_deduction = PT_DEDUCTION;
    let leaves_deduct_amount = round_money(leave_count * per_day);
    let total_deduction = pt_deduction + leaves_deduct_amount;
    let net_salary = gross_salary - total_deduction;
    log.record(
        "deductions",
        "Deductions and Net Salary",
        serde_json::json!({
            "gross_salary": gross_salary.to_string(),
            "leave_count": leave_count.to_string(),
            "per_day": per_day.to_string()
        }),
        serde_json::json!({
            "pt_deduction": pt_deduction.to_string(),
            "leaves_deduct_amount": leaves_deduct_amount.to_string(),
            "total_deduction": total_deduction.to_string(),
            "net_salary": net_salary.to_string()
        }),
        format!(
            "{} - (PT {} + {} leave x {} = {}) = {}",
            gross_salary,
            pt_deduction,
            leave_count,
            per_day,
            leaves_deduct_amount,
            net_salary
        ),
    );

    let mut warnings = Vec::new();
    if net_salary < Decimal::ZERO {
        warn!(
            year,
            month,
            gross = %gross_salary,
            net = %net_salary,
            "Deductions exceed monthly gross salary"
        );
        warnings.push(AuditWarning::new(
            NEGATIVE_NET_WARNING,
            format!(
                "total deduction {} exceeds gross salary {}; net is {}",
                total_deduction, gross_salary, net_salary
            ),
            "high",
        ));
    }

    debug!(
        year,
        month,
        month_days,
        per_month = %per_month,
        per_day = %per_day,
        net_salary = %net_salary,
        "Prorated monthly salary"
    );

    Ok(ProrationResult {
        ctc,
        fixed_pay,
        variable_pay,
        year,
        month,
        leave_count,
        context: ProrationContext {
            month_days,
            per_month,
            per_day,
            work_days,
        },
        components,
        gross_salary,
        pt_deduction,
        leaves_deduct_amount,
        total_deduction,
        net_salary,
        audit_steps: log.into_steps(),
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn february_2024(leave_count: &str) -> ProrationResult {
        calculate_monthly_salary(dec("1200000"), dec("600000"), 2024, 2, dec(leave_count))
            .unwrap()
    }

    #[test]
    fn test_leap_february_without_leave() {
        let result = february_2024("0");

        assert_eq!(result.variable_pay, dec("600000"));
        assert_eq!(result.context.per_month, dec("50000"));
        assert_eq!(result.context.per_day, dec("1666.67"));
        assert_eq!(result.context.month_days, 29);
        assert_eq!(result.context.work_days, dec("29"));
        assert_eq!(result.gross_salary, dec("50000"));
        assert_eq!(result.total_deduction, dec("200"));
        assert_eq!(result.net_salary, dec("49800"));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_display_components() {
        let result = february_2024("0");

        assert_eq!(result.components.basic, dec("20000"));
        assert_eq!(result.components.hra, dec("8000"));
        assert_eq!(result.components.conveyance_allowance, dec("2500"));
        assert_eq!(result.components.other_allowance, dec("19500"));
        assert_eq!(result.components.total(), result.gross_salary);
    }

    #[test]
    fn test_components_rounded_per_step() {
        // 500000 / 12 = 41666.67
        let result =
            calculate_monthly_salary(dec("800000"), dec("500000"), 2025, 3, dec("0")).unwrap();

        assert_eq!(result.context.per_month, dec("41666.67"));
        assert_eq!(result.context.per_day, dec("1388.89"));
        assert_eq!(result.components.basic, dec("16666.67"));
        assert_eq!(result.components.hra, dec("6666.67"));
        assert_eq!(result.components.conveyance_allowance, dec("2083.33"));
        assert_eq!(result.components.other_allowance, dec("16250.00"));
        assert_eq!(result.components.total(), result.context.per_month);
    }

    #[test]
    fn test_one_leave_day() {
        let result = february_2024("1");

        assert_eq!(result.context.work_days, dec("28"));
        assert_eq!(result.leaves_deduct_amount, dec("1666.67"));
        assert_eq!(result.total_deduction, dec("1866.67"));
        assert_eq!(result.net_salary, dec("48133.33"));
    }

    #[test]
    fn test_each_leave_day_costs_exactly_per_day() {
        let mut previous = february_2024("0");
        for leave in 1..=29 {
            let current = february_2024(&leave.to_string());
            assert_eq!(
                previous.net_salary - current.net_salary,
                current.context.per_day
            );
            assert_eq!(
                previous.context.work_days - current.context.work_days,
                Decimal::ONE
            );
            previous = current;
        }
    }

    #[test]
    fn test_daily_rate_ignores_month_length() {
        let february = february_2024("0");
        let march =
            calculate_monthly_salary(dec("1200000"), dec("600000"), 2024, 3, dec("0")).unwrap();

        assert_eq!(february.context.per_day, march.context.per_day);
        assert_eq!(march.context.month_days, 31);
        assert_eq!(march.context.work_days, dec("31"));
    }

    #[test]
    fn test_non_leap_february() {
        let result =
            calculate_monthly_salary(dec("1200000"), dec("600000"), 2023, 2, dec("0")).unwrap();
        assert_eq!(result.context.month_days, 28);
    }

    #[test]
    fn test_half_day_leave() {
        let result = february_2024("0.5");

        assert_eq!(result.context.work_days, dec("28.5"));
        // 0.5 x 1666.67 = 833.335 -> 833.34
        assert_eq!(result.leaves_deduct_amount, dec("833.34"));
    }

    #[test]
    fn test_leave_beyond_month_clamps_work_days_only() {
        let result = february_2024("35");

        assert_eq!(result.context.work_days, Decimal::ZERO);
        // 35 x 1666.67 = 58333.45
        assert_eq!(result.leaves_deduct_amount, dec("58333.45"));
        assert_eq!(result.net_salary, dec("-8533.45"));
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].code, NEGATIVE_NET_WARNING);
    }

    #[test]
    fn test_zero_fixed_pay_yields_negative_net() {
        let result =
            calculate_monthly_salary(dec("0"), dec("0"), 2024, 1, dec("0")).unwrap();
        assert_eq!(result.net_salary, dec("-200"));
    }

    #[test]
    fn test_negative_ctc_is_invalid_amount() {
        let result = calculate_monthly_salary(dec("-1"), dec("0"), 2024, 1, dec("0"));
        assert_eq!(result, Err(EngineError::invalid_amount("ctc", dec("-1"))));
    }

    #[test]
    fn test_negative_fixed_pay_is_invalid_amount() {
        let result = calculate_monthly_salary(dec("100"), dec("-1"), 2024, 1, dec("0"));
        assert_eq!(
            result,
            Err(EngineError::invalid_amount("fixed_pay", dec("-1")))
        );
    }

    #[test]
    fn test_fixed_pay_above_ctc_is_invalid_range() {
        let result = calculate_monthly_salary(dec("100"), dec("101"), 2024, 1, dec("0"));
        match result {
            Err(EngineError::InvalidRange { field, .. }) => assert_eq!(field, "fixed_pay"),
            other => panic!("Expected InvalidRange, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_leave_is_invalid_range() {
        let result = calculate_monthly_salary(dec("100"), dec("100"), 2024, 1, dec("-1"));
        match result {
            Err(EngineError::InvalidRange { field, .. }) => assert_eq!(field, "leave_count"),
            other => panic!("Expected InvalidRange, got {:?}", other),
        }
    }

    #[test]
    fn test_month_out_of_range() {
        for month in [0, 13] {
            let result = calculate_monthly_salary(dec("100"), dec("100"), 2024, month, dec("0"));
            assert_eq!(result.unwrap_err().field(), Some("month"));
        }
    }

    #[test]
    fn test_year_out_of_default_bounds() {
        let result = calculate_monthly_salary(dec("100"), dec("100"), 1899, 1, dec("0"));
        assert_eq!(result.unwrap_err().field(), Some("year"));
    }

    #[test]
    fn test_custom_year_bounds() {
        let bounds = YearBounds {
            min_year: 2020,
            max_year: 2030,
        };
        let result = calculate_monthly_salary_with_bounds(
            dec("100"),
            dec("100"),
            2019,
            1,
            dec("0"),
            &bounds,
        );
        assert_eq!(result.unwrap_err().field(), Some("year"));

        let result = calculate_monthly_salary_with_bounds(
            dec("100"),
            dec("100"),
            2024,
            1,
            dec("0"),
            &bounds,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_amount_errors_come_before_range_errors() {
        // Negative ctc and an invalid month: the amount is reported first.
        let result = calculate_monthly_salary(dec("-5"), dec("0"), 2024, 13, dec("0"));
        assert!(matches!(result, Err(EngineError::InvalidAmount { .. })));
    }

    #[test]
    fn test_audit_trail_records_each_stage() {
        let result = february_2024("2");
        let ids: Vec<_> = result
            .audit_steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();
        assert_eq!(ids, vec!["variable_pay", "rates", "components", "deductions"]);
    }
}
