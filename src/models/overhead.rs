//! Overhead cost model.
//!
//! Fixed monthly business costs recorded by the owner. A business with no
//! overhead recorded is represented by `Option::None` at the call site.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A recurring software subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftwareCost {
    /// The name of the product (e.g., "Accounting suite").
    pub name: String,
    /// The monthly subscription cost.
    pub monthly_cost: Decimal,
}

/// Fixed monthly overhead costs for a business.
///
/// # Example
///
/// ```
/// use cost_engine::models::{OverheadCosts, SoftwareCost};
/// use chrono::{TimeZone, Utc};
/// use rust_decimal::Decimal;
///
/// let overhead = OverheadCosts {
///     monthly_rent: Decimal::new(4_000, 0),
///     monthly_utilities: Decimal::new(500, 0),
///     monthly_insurance: Decimal::new(800, 0),
///     other_monthly_costs: Decimal::new(1_500, 0),
///     software_costs: vec![SoftwareCost {
///         name: "Payroll".to_string(),
///         monthly_cost: Decimal::new(500, 0),
///     }],
///     updated_at: Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap(),
/// };
/// assert_eq!(overhead.software_total(), Decimal::new(500, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverheadCosts {
    /// Monthly rent or lease payments.
    #[serde(default)]
    pub monthly_rent: Decimal,
    /// Monthly utilities.
    #[serde(default)]
    pub monthly_utilities: Decimal,
    /// Monthly insurance premiums.
    #[serde(default)]
    pub monthly_insurance: Decimal,
    /// Any other fixed monthly costs.
    #[serde(default)]
    pub other_monthly_costs: Decimal,
    /// Software subscriptions, in the order the owner entered them.
    #[serde(default)]
    pub software_costs: Vec<SoftwareCost>,
    /// When the overhead record was last changed.
    pub updated_at: DateTime<Utc>,
}

impl OverheadCosts {
    /// Returns the sum of all software subscriptions per month.
    pub fn software_total(&self) -> Decimal {
        self.software_costs.iter().map(|s| s.monthly_cost).sum()
    }
}
