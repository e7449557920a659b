//! Configuration loading and management for the cost engine.
//!
//! This module provides the payroll tax rates and profile revenue estimates
//! the calculations depend on, either from built-in defaults or from a YAML
//! file.
//!
//! # Example
//!
//! ```no_run
//! use cost_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/engine.yaml").unwrap();
//! println!("Payroll tax rate: {}", config.config().payroll_tax.combined_rate());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, PayrollTaxRates, RevenueRangeEstimates};
