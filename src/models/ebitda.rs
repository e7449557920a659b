//! EBITDA result models.
//!
//! This module contains the [`EbitdaResult`] type and its associated
//! structures that capture the profitability breakdown, data completeness
//! flags, warnings and the audit trace of precedence decisions.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AuditStep, ExpenseSource, ExpenseSourceType, ReportingPeriod, RevenueSource};

/// A single line of operating expense in the breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseCategory {
    /// The category name (e.g., "Overhead Costs", "Rent").
    pub name: String,
    /// The annual amount for this category.
    pub amount: Decimal,
    /// Which kind of source the amount came from.
    pub source: ExpenseSourceType,
}

/// The profitability breakdown for a business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EbitdaBreakdown {
    /// The resolved revenue figure.
    pub revenue: Decimal,
    /// Where the revenue figure came from.
    pub revenue_source: RevenueSource,
    /// Total operating expenses.
    pub total_operating_expenses: Decimal,
    /// Expense lines making up the total.
    pub expense_categories: Vec<ExpenseCategory>,
    /// Every source that contributed to the expense total.
    pub expense_sources: Vec<ExpenseSource>,
    /// Revenue minus operating expenses, whole dollars.
    pub ebitda: Decimal,
    /// EBITDA as a percentage of revenue, two decimal places.
    pub ebitda_margin: Decimal,
    /// The reporting period, when the revenue document has both dates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<ReportingPeriod>,
}

/// Which categories of underlying data were available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataCompleteness {
    /// A revenue figure was resolved.
    pub has_revenue_data: bool,
    /// The resolved expense total is greater than zero.
    pub has_expense_data: bool,
    /// At least one employee is on the roster.
    pub has_payroll_data: bool,
    /// An overhead record exists.
    pub has_overhead_data: bool,
}

/// The complete result of an EBITDA calculation.
///
/// `breakdown` is `None` only when no revenue data exists at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EbitdaResult {
    /// The profitability breakdown, if revenue was available.
    pub breakdown: Option<EbitdaBreakdown>,
    /// Data availability flags.
    pub data_completeness: DataCompleteness,
    /// Human-readable warnings, in priority order.
    pub warnings: Vec<String>,
    /// The sequence of resolution decisions.
    pub audit_trace: Vec<AuditStep>,
    /// When the result was computed.
    pub last_updated: DateTime<Utc>,
}

impl EbitdaResult {
    /// Returns true if the business is operating at a loss.
    pub fn is_operating_loss(&self) -> bool {
        self.breakdown
            .as_ref()
            .is_some_and(|b| b.ebitda < Decimal::ZERO)
    }
}
