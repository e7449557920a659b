//! Employee cost models.
//!
//! This module contains the computed, never-persisted cost projections:
//! the per-employee [`EmployeeCostBreakdown`], the roster-wide
//! [`EmployeeCostSummary`] and the [`EmployeeCostResult`] handed to callers.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::EmploymentType;

/// The fully loaded cost of a single employee.
///
/// `fully_loaded_cost` is always the exact sum of `base_salary`,
/// `payroll_taxes`, `benefits` and `allocated_overhead`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeCostBreakdown {
    /// The employee this breakdown belongs to.
    pub employee_id: String,
    /// The employee's display name.
    pub name: String,
    /// The employee's role.
    pub role: String,
    /// The employee's department, if any.
    pub department: Option<String>,
    /// The employment arrangement.
    pub employment_type: EmploymentType,
    /// Annual base salary.
    pub base_salary: Decimal,
    /// Employer payroll taxes (Social Security + Medicare), whole dollars.
    pub payroll_taxes: Decimal,
    /// Annual benefits.
    pub benefits: Decimal,
    /// This employee's even share of annual overhead, whole dollars.
    pub allocated_overhead: Decimal,
    /// Total annual cost to the business.
    pub fully_loaded_cost: Decimal,
    /// `fully_loaded_cost / 12`, unrounded.
    pub monthly_cost: Decimal,
}

impl EmployeeCostBreakdown {
    /// Returns true if a non-zero benefits figure was recorded.
    ///
    /// A zero value and an omitted value are indistinguishable.
    pub fn has_benefits(&self) -> bool {
        self.benefits > Decimal::ZERO
    }
}

/// Roster-wide totals, averages and data-quality warnings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeCostSummary {
    /// Number of employees included.
    pub total_headcount: usize,
    /// Sum of base salaries.
    pub total_base_salary: Decimal,
    /// Sum of payroll taxes.
    pub total_payroll_taxes: Decimal,
    /// Sum of benefits.
    pub total_benefits: Decimal,
    /// Sum of allocated overhead.
    pub total_allocated_overhead: Decimal,
    /// Sum of fully loaded costs.
    pub total_fully_loaded_cost: Decimal,
    /// Mean fully loaded cost, zero for an empty roster.
    pub average_fully_loaded_cost: Decimal,
    /// Whether overhead data was available for allocation.
    pub has_overhead_data: bool,
    /// Whether at least one employee has non-zero benefits.
    pub has_benefits_data: bool,
    /// Human-readable warnings, in a fixed order.
    pub missing_data_warnings: Vec<String>,
}

/// Where the employee cost figures came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostAttribution {
    /// Number of employee records read.
    pub employee_records: usize,
    /// When the overhead record was last updated, if overhead exists.
    pub overhead_last_updated: Option<DateTime<Utc>>,
}

/// The complete employee cost result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeCostResult {
    /// One breakdown per employee, in roster order.
    pub employees: Vec<EmployeeCostBreakdown>,
    /// Roster totals and warnings.
    pub summary: EmployeeCostSummary,
    /// Source attribution.
    pub sources: CostAttribution,
    /// When the result was computed.
    pub last_updated: DateTime<Utc>,
}
