//! Calendar helpers for payroll months.
//!
//! The engine never reads the system clock. Callers that want "this month"
//! obtain a date from their own clock and pass it to
//! [`PayrollMonth::containing`].

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Earliest year accepted by default.
pub const DEFAULT_MIN_YEAR: i32 = 1900;

/// Latest year accepted by default.
pub const DEFAULT_MAX_YEAR: i32 = 2100;

/// The inclusive range of plausible payroll years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct YearBounds {
    /// Earliest accepted year.
    pub min_year: i32,
    /// Latest accepted year.
    pub max_year: i32,
}

impl Default for YearBounds {
    fn default() -> Self {
        Self {
            min_year: DEFAULT_MIN_YEAR,
            max_year: DEFAULT_MAX_YEAR,
        }
    }
}

impl YearBounds {
    /// Returns true if `year` falls within the bounds.
    pub fn contains(&self, year: i32) -> bool {
        (self.min_year..=self.max_year).contains(&year)
    }
}

/// A validated calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayrollMonth {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
}

impl PayrollMonth {
    /// Creates a payroll month, validating the month and the default year bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use compensation_engine::calculation::PayrollMonth;
    ///
    /// assert!(PayrollMonth::new(2024, 2).is_ok());
    /// assert!(PayrollMonth::new(2024, 13).is_err());
    /// ```
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        Self::within(year, month, &YearBounds::default())
    }

    /// Creates a payroll month, validating against the given year bounds.
    pub fn within(year: i32, month: u32, bounds: &YearBounds) -> EngineResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(EngineError::invalid_range(
                "month",
                format!("must be between 1 and 12, got {}", month),
            ));
        }
        if !bounds.contains(year) {
            return Err(EngineError::invalid_range(
                "year",
                format!(
                    "must be between {} and {}, got {}",
                    bounds.min_year, bounds.max_year, year
                ),
            ));
        }
        Ok(Self { year, month })
    }

    /// Returns the payroll month containing `date`.
    ///
    /// # Examples
    ///
    /// ```
    /// use compensation_engine::calculation::PayrollMonth;
    /// use chrono::NaiveDate;
    ///
    /// let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
    /// let month = PayrollMonth::containing(today);
    /// assert_eq!((month.year, month.month), (2026, 10));
    /// ```
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the number of days in this month.
    pub fn days(&self) -> EngineResult<u32> {
        days_in_calendar_month(self.year, self.month)
    }
}

/// Returns the true number of days in a calendar month.
///
/// February has 29 days in leap years under the proleptic Gregorian rule.
///
/// # Examples
///
/// ```
/// use compensation_engine::calculation::days_in_calendar_month;
///
/// assert_eq!(days_in_calendar_month(2024, 2).unwrap(), 29);
/// assert_eq!(days_in_calendar_month(2023, 2).unwrap(), 28);
/// ```
pub fn days_in_calendar_month(year: i32, month: u32) -> EngineResult<u32> {
    let first = first_of_month(year, month)?;
    let next = if month == 12 {
        let next_year = year
            .checked_add(1)
            .ok_or_else(|| EngineError::invalid_range("year", format!("no year after {}", year)))?;
        first_of_month(next_year, 1)?
    } else {
        first_of_month(year, month + 1)?
    };
    Ok(next.signed_duration_since(first).num_days() as u32)
}

fn first_of_month(year: i32, month: u32) -> EngineResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        if (1..=12).contains(&month) {
            EngineError::invalid_range("year", format!("no such year: {}", year))
        } else {
            EngineError::invalid_range("month", format!("no such month: {}-{:02}", year, month))
        }
    })
}
