//! Fully loaded employee cost and EBITDA engine for small businesses.
//!
//! This crate computes what each employee really costs (salary, payroll
//! taxes, benefits and a share of overhead) and derives EBITDA from the best
//! available revenue and expense data, attributing every figure to its
//! source with a confidence level.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod observer;
pub mod validation;
