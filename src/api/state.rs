//! Application state for the compensation engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::fmt;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::calculation::PayrollMonth;
use crate::config::ConfigLoader;

/// Source of "today" for requests that omit the payroll month.
pub type Clock = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

/// Shared application state.
///
/// Contains the loaded engine configuration and the clock used to fill in a
/// missing payroll month. The engine itself never reads the clock.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    clock: Clock,
}

impl AppState {
    /// Creates a new application state that reads today's date from the system clock (UTC).
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_clock(config, Arc::new(|| Utc::now().date_naive()))
    }

    /// Creates a new application state with an explicit clock.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use chrono::NaiveDate;
    /// use compensation_engine::api::AppState;
    /// use compensation_engine::config::ConfigLoader;
    ///
    /// let fixed = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
    /// let state = AppState::with_clock(ConfigLoader::default(), Arc::new(move || fixed));
    /// assert_eq!(state.current_month().month, 2);
    /// ```
    pub fn with_clock(config: ConfigLoader, clock: Clock) -> Self {
        Self {
            config: Arc::new(config),
            clock,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the payroll month containing today's date.
    pub fn current_month(&self) -> PayrollMonth {
        PayrollMonth::containing((self.clock)())
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
