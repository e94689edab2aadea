//! Error types for the compensation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every validation failure the engine can report. All of them are
//! local and recoverable: the engine performs no I/O during a calculation,
//! so callers surface the error kind and offending field to the user.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the compensation engine.
///
/// # Example
///
/// ```
/// use compensation_engine::error::EngineError;
/// use rust_decimal::Decimal;
///
/// let error = EngineError::InvalidAmount {
///     field: "ctc".to_string(),
///     value: Decimal::new(-100, 0),
/// };
/// assert_eq!(error.to_string(), "Invalid amount for 'ctc': -100 (must not be negative)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A monetary input was negative.
    #[error("Invalid amount for '{field}': {value} (must not be negative)")]
    InvalidAmount {
        /// The input field holding the amount.
        field: String,
        /// The rejected value.
        value: Decimal,
    },

    /// An input was outside its permitted range (month, year, fixed pay above CTC, leave).
    #[error("Invalid range for '{field}': {message}")]
    InvalidRange {
        /// The input field that was out of range.
        field: String,
        /// A description of the permitted range.
        message: String,
    },

    /// A balancing-remainder component would be negative for the given total.
    #[error(
        "Policy '{policy}' is infeasible: component '{component}' would be negative (short by {shortfall})"
    )]
    PolicyInfeasible {
        /// The policy that was applied.
        policy: String,
        /// The balancing component that went negative.
        component: String,
        /// How far the allocated components exceed the total.
        shortfall: Decimal,
    },

    /// A value is outside the domain of a converter.
    #[error("Value {value} is out of domain (limit: {limit})")]
    OutOfDomain {
        /// The rejected value.
        value: String,
        /// The exclusive limit of the converter.
        limit: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or failed validation.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl EngineError {
    /// Builds an `InvalidAmount` error for a named field.
    pub fn invalid_amount(field: &str, value: Decimal) -> Self {
        EngineError::InvalidAmount {
            field: field.to_string(),
            value,
        }
    }

    /// Builds an `InvalidRange` error for a named field.
    pub fn invalid_range(field: &str, message: impl Into<String>) -> Self {
        EngineError::InvalidRange {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Returns the input field the error refers to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            EngineError::InvalidAmount { field, .. } | EngineError::InvalidRange { field, .. } => {
                Some(field)
            }
            EngineError::PolicyInfeasible { component, .. } => Some(component),
            _ => None,
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

/// Rejects a negative monetary input.
pub(crate) fn ensure_non_negative(field: &str, value: Decimal) -> EngineResult<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(EngineError::invalid_amount(field, value));
    }
    Ok(())
}
