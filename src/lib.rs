//! Compensation calculation engine for Indian salary documents
//!
//! This crate splits a CTC or monthly gross into named salary components under
//! one of four fixed policies, prorates monthly fixed pay for leave, and renders
//! amounts in words and with Indian digit grouping. The calculations are pure;
//! the `api` module exposes them over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod formatting;
pub mod models;
