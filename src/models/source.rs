//! Source attribution for resolved revenue and expense figures.
//!
//! Every figure the engine resolves records where it came from and how much
//! it can be trusted. Sources are closed sum types discriminated by a `type`
//! field on the wire.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ReportingPeriod, RevenueRange};

/// How reliable a resolved figure is, based on where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    /// Extracted from a financial document.
    High,
    /// Entered manually by the owner.
    Medium,
    /// A coarse estimate.
    Low,
}

/// The origin of the resolved revenue figure.
///
/// # Example
///
/// ```
/// use cost_engine::models::{Confidence, RevenueRange, RevenueSource};
///
/// let source = RevenueSource::ProfileEstimate {
///     revenue_range: RevenueRange::From500kTo1m,
///     confidence: Confidence::Low,
/// };
/// let json = serde_json::to_value(&source).unwrap();
/// assert_eq!(json["type"], "profile_estimate");
/// assert_eq!(json["revenue_range"], "500k-1m");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RevenueSource {
    /// Taken from an uploaded P&L document.
    PlDocument {
        /// The document the figure was read from.
        document_id: String,
        /// The document's filename.
        filename: String,
        /// The document's raw last-updated timestamp.
        last_updated: String,
        /// Always [`Confidence::High`].
        confidence: Confidence,
        /// The document's reporting period, if extraction found one.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        period: Option<ReportingPeriod>,
    },
    /// Estimated from the business profile's revenue range.
    ProfileEstimate {
        /// The range the estimate was derived from.
        revenue_range: RevenueRange,
        /// Always [`Confidence::Low`].
        confidence: Confidence,
    },
}

impl RevenueSource {
    /// Returns the confidence attached to this source.
    pub fn confidence(&self) -> Confidence {
        match self {
            RevenueSource::PlDocument { confidence, .. }
            | RevenueSource::ProfileEstimate { confidence, .. } => *confidence,
        }
    }

    /// Returns true if this revenue is a profile estimate.
    pub fn is_estimate(&self) -> bool {
        matches!(self, RevenueSource::ProfileEstimate { .. })
    }
}

/// The kind of source an expense figure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseSourceType {
    /// An uploaded P&L document.
    PlDocument,
    /// The owner's overhead cost record.
    OverheadCosts,
    /// The employee roster's fully loaded costs.
    EmployeeCosts,
}

impl ExpenseSourceType {
    /// Returns the wire name of the source type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseSourceType::PlDocument => "pl_document",
            ExpenseSourceType::OverheadCosts => "overhead_costs",
            ExpenseSourceType::EmployeeCosts => "employee_costs",
        }
    }
}

/// One contributor to the resolved expense total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExpenseSource {
    /// Taken from an uploaded P&L document.
    PlDocument {
        /// The document the figure was read from.
        document_id: String,
        /// The document's filename.
        filename: String,
        /// The document's raw last-updated timestamp.
        last_updated: String,
        /// The amount contributed.
        amount: Decimal,
        /// Always [`Confidence::High`].
        confidence: Confidence,
    },
    /// Built from the owner's overhead record.
    OverheadCosts {
        /// When the overhead record was last updated.
        last_updated: DateTime<Utc>,
        /// The annualized overhead contributed.
        amount: Decimal,
        /// Always [`Confidence::Medium`].
        confidence: Confidence,
    },
    /// Built from the employee roster.
    EmployeeCosts {
        /// Number of employees included.
        headcount: usize,
        /// The fully loaded payroll contributed.
        amount: Decimal,
        /// Always [`Confidence::Medium`].
        confidence: Confidence,
    },
}

impl ExpenseSource {
    /// Returns the kind of this source.
    pub fn source_type(&self) -> ExpenseSourceType {
        match self {
            ExpenseSource::PlDocument { .. } => ExpenseSourceType::PlDocument,
            ExpenseSource::OverheadCosts { .. } => ExpenseSourceType::OverheadCosts,
            ExpenseSource::EmployeeCosts { .. } => ExpenseSourceType::EmployeeCosts,
        }
    }

    /// Returns the amount this source contributed.
    pub fn amount(&self) -> Decimal {
        match self {
            ExpenseSource::PlDocument { amount, .. }
            | ExpenseSource::OverheadCosts { amount, .. }
            | ExpenseSource::EmployeeCosts { amount, .. } => *amount,
        }
    }

    /// Returns the confidence attached to this source.
    pub fn confidence(&self) -> Confidence {
        match self {
            ExpenseSource::PlDocument { confidence, .. }
            | ExpenseSource::OverheadCosts { confidence, .. }
            | ExpenseSource::EmployeeCosts { confidence, .. } => *confidence,
        }
    }
}
