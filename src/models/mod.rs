//! Core data models for the compensation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod audit;
mod breakdown;
mod policy;
mod proration;

pub(crate) use audit::AuditLog;
pub use audit::{AuditStep, AuditWarning, NEGATIVE_NET_WARNING, ROUNDING_DRIFT_WARNING};
pub use breakdown::{ComponentBreakdown, Deduction, RoundingDrift, SalaryComponent};
pub use policy::{AmountBasis, CompensationPolicy};
pub use proration::{MonthlyComponents, ProrationContext, ProrationResult};
