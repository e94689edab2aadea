//! HTTP API module for the compensation engine.
//!
//! This module provides thin REST endpoints over the pure calculation and
//! formatting functions, for payroll screens and document generators.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AmountRequest, MonthlySalaryRequest, SplitRequest};
pub use response::{
    ApiError, ApiErrorResponse, CalculationEnvelope, FormatResponse, WordsResponse,
};
pub use state::{AppState, Clock};
