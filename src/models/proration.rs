//! Monthly proration models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AuditStep, AuditWarning};

/// The rates derived for one payroll month.
///
/// Produced fresh per call; nothing here is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProrationContext {
    /// True number of days in the calendar month.
    pub month_days: u32,
    /// Fixed pay per month.
    pub per_month: Decimal,
    /// Daily rate on a fixed 30-day month.
    pub per_day: Decimal,
    /// Days worked: `max(0, month_days - leave_count)`.
    pub work_days: Decimal,
}

/// Informational monthly component breakdown shown alongside a prorated salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyComponents {
    /// Basic salary: 40% of monthly fixed pay.
    pub basic: Decimal,
    /// House rent allowance: 40% of basic.
    pub hra: Decimal,
    /// Conveyance allowance: 5% of monthly fixed pay.
    pub conveyance_allowance: Decimal,
    /// The balancing remainder of monthly fixed pay.
    pub other_allowance: Decimal,
}

impl MonthlyComponents {
    /// Sums the four components.
    pub fn total(&self) -> Decimal {
        self.basic + self.hra + self.conveyance_allowance + self.other_allowance
    }
}

/// The result of prorating fixed pay for one month.
///
/// # Example
///
/// ```
/// use compensation_engine::calculation::calculate_monthly_salary;
/// use rust_decimal::Decimal;
///
/// let result = calculate_monthly_salary(
///     Decimal::from(1_200_000),
///     Decimal::from(600_000),
///     2024,
///     2,
///     Decimal::ZERO,
/// )
/// .unwrap();
/// assert_eq!(result.context.month_days, 29);
/// assert_eq!(result.net_salary, Decimal::from(49_800));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProrationResult {
    /// Annual cost to company.
    pub ctc: Decimal,
    /// Annual fixed pay.
    pub fixed_pay: Decimal,
    /// `ctc - fixed_pay`.
    pub variable_pay: Decimal,
    /// Calendar year of the payroll month.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// Days of leave taken in the month.
    pub leave_count: Decimal,
    /// The derived rates for the month.
    pub context: ProrationContext,
    /// Display-only component breakdown of `per_month`.
    pub components: MonthlyComponents,
    /// Gross salary for the month, always equal to `per_month`.
    pub gross_salary: Decimal,
    /// Professional tax deducted.
    pub pt_deduction: Decimal,
    /// Deduction for leave: `leave_count * per_day`.
    pub leaves_deduct_amount: Decimal,
    /// `pt_deduction + leaves_deduct_amount`.
    pub total_deduction: Decimal,
    /// `gross_salary - total_deduction`. May be negative; never clamped.
    pub net_salary: Decimal,
    /// The rules applied, in order.
    pub audit_steps: Vec<AuditStep>,
    /// Warnings raised while prorating.
    pub warnings: Vec<AuditWarning>,
}
