//! Request types for the compensation engine API.
//!
//! Amounts are decimals and may be sent as JSON strings (`"1200000.50"`)
//! so that no precision is lost in transit.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request body for the `/split` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitRequest {
    /// Policy name, e.g. `"statutory_detailed"` or `"StatutoryDetailed"`.
    pub policy: String,
    /// Annual CTC, or monthly gross for the payslip policy.
    pub total: Decimal,
}

/// Request body for the `/monthly-salary` endpoint.
///
/// `year` and `month` default to the current payroll month of the server's
/// clock when omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlySalaryRequest {
    /// Annual cost to company.
    pub ctc: Decimal,
    /// Annual fixed pay.
    pub fixed_pay: Decimal,
    /// Calendar year of the payroll month.
    #[serde(default)]
    pub year: Option<i32>,
    /// Calendar month (1-12).
    #[serde(default)]
    pub month: Option<u32>,
    /// Days of leave taken in the month.
    #[serde(default)]
    pub leave_count: Decimal,
}

/// Request body for the `/words` and `/format` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmountRequest {
    /// The amount to render.
    pub value: Decimal,
}
