//! The input snapshot for a single calculation.

use serde::{Deserialize, Serialize};

use super::{Employee, FinancialDocument, OverheadCosts, RevenueRange};

/// Everything the engine reads for one business, as of one moment.
///
/// The record-access layer builds a snapshot from its store; the engine never
/// fetches or mutates records itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessSnapshot {
    /// The employee roster.
    #[serde(default)]
    pub employees: Vec<Employee>,
    /// The overhead record, if one exists.
    #[serde(default)]
    pub overhead: Option<OverheadCosts>,
    /// Uploaded financial documents with extracted data.
    #[serde(default)]
    pub documents: Vec<FinancialDocument>,
    /// The revenue range from the business profile, if set.
    #[serde(default)]
    pub revenue_range: Option<RevenueRange>,
}
