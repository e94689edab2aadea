//! Configuration types for the compensation engine.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from `engine.yaml`.

use serde::{Deserialize, Serialize};

use crate::calculation::YearBounds;
use crate::formatting::CurrencyFormat;

/// The complete engine configuration.
///
/// Every section has a default, so a partial or empty file is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// How amounts are rendered as currency.
    pub currency: CurrencyFormat,
    /// Years accepted by the monthly proration engine.
    pub proration: YearBounds,
}
