//! Calculation logic for the compensation engine.
//!
//! This module contains the component splitter and its four policies
//! (standard offer, statutory detailed, payslip simple and appraisal),
//! the monthly proration engine, and the shared rounding, calendar and
//! balancing-remainder helpers they are built from.

mod appraisal;
mod balancing;
pub(crate) mod breakdown_builder;
mod calendar;
mod monthly_proration;
mod payslip_simple;
mod rounding;
mod splitter;
mod standard_offer;
mod statutory_detailed;

pub use appraisal::{
    APPRAISAL_BASIC_RATE, APPRAISAL_CONVEYANCE, APPRAISAL_DA_RATE, APPRAISAL_HRA_RATE,
    APPRAISAL_MEDICAL, split_appraisal,
};
pub use balancing::balancing_remainder;
pub use calendar::{
    DEFAULT_MAX_YEAR, DEFAULT_MIN_YEAR, PayrollMonth, YearBounds, days_in_calendar_month,
};
pub use monthly_proration::{
    DAILY_RATE_DIVISOR, PRORATION_BASIC_RATE, PRORATION_CONVEYANCE_RATE, PRORATION_HRA_RATE,
    PT_DEDUCTION, calculate_monthly_salary, calculate_monthly_salary_with_bounds,
};
pub use payslip_simple::{
    PAYSLIP_BASIC_RATE, PAYSLIP_HRA_RATE, PAYSLIP_PF_CAP, PAYSLIP_PF_RATE, PROFESSIONAL_TAX,
    split_payslip_simple,
};
pub use rounding::{round_currency, round_money};
pub use splitter::split_compensation;
pub use standard_offer::{
    STANDARD_OFFER_BASIC_RATE, STANDARD_OFFER_CONVEYANCE_RATE, STANDARD_OFFER_DEARNESS_RATE,
    STANDARD_OFFER_OTHER_RATE, split_standard_offer,
};
pub use statutory_detailed::{
    EDUCATION_ALLOWANCE, EMPLOYER_PF_CAP, EMPLOYER_PF_RATE, GRATUITY_RATE,
    HEALTH_INSURANCE_RATE, LTA_RATE, MONTHLY_REIMBURSEMENT, MONTHLY_WELLNESS,
    STATUTORY_BASIC_RATE, STATUTORY_BONUS_CAP, STATUTORY_BONUS_RATE, STATUTORY_HRA_RATE,
    split_statutory_detailed,
};
