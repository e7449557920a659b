//! Configuration types for the cost engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from a YAML configuration file. Every section has
//! defaults, so an empty file is a valid configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::RevenueRange;

/// Employer payroll tax rates.
///
/// The defaults are the US employer Social Security (6.2%) and Medicare
/// (1.45%) shares. No wage base cap is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollTaxRates {
    /// Employer Social Security rate.
    pub social_security_rate: Decimal,
    /// Employer Medicare rate.
    pub medicare_rate: Decimal,
}

impl Default for PayrollTaxRates {
    fn default() -> Self {
        Self {
            social_security_rate: Decimal::new(62, 3),
            medicare_rate: Decimal::new(145, 4),
        }
    }
}

impl PayrollTaxRates {
    /// Returns the combined employer payroll tax rate (0.0765 by default).
    ///
    /// # Example
    ///
    /// ```
    /// use cost_engine::config::PayrollTaxRates;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(PayrollTaxRates::default().combined_rate(), Decimal::new(765, 4));
    /// ```
    pub fn combined_rate(&self) -> Decimal {
        self.social_security_rate + self.medicare_rate
    }
}

/// Midpoint dollar estimates for each profile revenue range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevenueRangeEstimates {
    /// Estimate for "under-250k".
    #[serde(rename = "under-250k")]
    pub under_250k: Decimal,
    /// Estimate for "250k-500k".
    #[serde(rename = "250k-500k")]
    pub from_250k_to_500k: Decimal,
    /// Estimate for "500k-1m".
    #[serde(rename = "500k-1m")]
    pub from_500k_to_1m: Decimal,
    /// Estimate for "1m-2m".
    #[serde(rename = "1m-2m")]
    pub from_1m_to_2m: Decimal,
    /// Estimate for "2m-5m".
    #[serde(rename = "2m-5m")]
    pub from_2m_to_5m: Decimal,
    /// Estimate for "5m-plus".
    #[serde(rename = "5m-plus")]
    pub over_5m: Decimal,
}

impl Default for RevenueRangeEstimates {
    fn default() -> Self {
        Self {
            under_250k: Decimal::new(125_000, 0),
            from_250k_to_500k: Decimal::new(375_000, 0),
            from_500k_to_1m: Decimal::new(750_000, 0),
            from_1m_to_2m: Decimal::new(1_500_000, 0),
            from_2m_to_5m: Decimal::new(3_500_000, 0),
            over_5m: Decimal::new(7_500_000, 0),
        }
    }
}

impl RevenueRangeEstimates {
    /// Returns the dollar estimate for a revenue range.
    pub fn estimate(&self, range: RevenueRange) -> Decimal {
        match range {
            RevenueRange::Under250k => self.under_250k,
            RevenueRange::From250kTo500k => self.from_250k_to_500k,
            RevenueRange::From500kTo1m => self.from_500k_to_1m,
            RevenueRange::From1mTo2m => self.from_1m_to_2m,
            RevenueRange::From2mTo5m => self.from_2m_to_5m,
            RevenueRange::Over5m => self.over_5m,
        }
    }

    pub(crate) fn entries(&self) -> [(RevenueRange, Decimal); 6] {
        [
            (RevenueRange::Under250k, self.under_250k),
            (RevenueRange::From250kTo500k, self.from_250k_to_500k),
            (RevenueRange::From500kTo1m, self.from_500k_to_1m),
            (RevenueRange::From1mTo2m, self.from_1m_to_2m),
            (RevenueRange::From2mTo5m, self.from_2m_to_5m),
            (RevenueRange::Over5m, self.over_5m),
        ]
    }
}

/// The complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Employer payroll tax rates.
    pub payroll_tax: PayrollTaxRates,
    /// Profile revenue range estimates.
    pub revenue_estimates: RevenueRangeEstimates,
}
