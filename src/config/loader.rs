//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::EngineConfig;

/// Loads and validates engine configuration.
///
/// The configuration file is a single YAML document:
/// ```text
/// payroll_tax:
///   social_security_rate: "0.062"
///   medicare_rate: "0.0145"
/// revenue_estimates:
///   under-250k: 125000
///   ...
/// ```
///
/// # Example
///
/// ```no_run
/// use cost_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/engine.yaml").unwrap();
/// println!("Payroll tax: {}", loader.config().payroll_tax.combined_rate());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    /// - A rate or estimate is out of range (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml(&content, &path_str)
    }

    /// Parses configuration from YAML text. `origin` names the source in errors.
    pub fn from_yaml(content: &str, origin: &str) -> EngineResult<Self> {
        // An empty document deserializes to unit, not to an empty mapping.
        let config = if content.trim().is_empty() {
            EngineConfig::default()
        } else {
            serde_yaml::from_str::<EngineConfig>(content).map_err(|e| {
                EngineError::ConfigParseError {
                    path: origin.to_string(),
                    message: e.to_string(),
                }
            })?
        };

        Self::validate(&config)?;
        Ok(Self { config })
    }

    fn validate(config: &EngineConfig) -> EngineResult<()> {
        let rates = [
            (
                "payroll_tax.social_security_rate",
                config.payroll_tax.social_security_rate,
            ),
            ("payroll_tax.medicare_rate", config.payroll_tax.medicare_rate),
        ];
        for (field, rate) in rates {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(EngineError::InvalidConfig {
                    field: field.to_string(),
                    message: format!("rate {} must be between 0 and 1", rate),
                });
            }
        }

        for (range, estimate) in config.revenue_estimates.entries() {
            if estimate < Decimal::ZERO {
                return Err(EngineError::InvalidConfig {
                    field: format!("revenue_estimates.{}", range.as_str()),
                    message: format!("estimate {} cannot be negative", estimate),
                });
            }
        }

        Ok(())
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> EngineConfig {
        self.config
    }
}
