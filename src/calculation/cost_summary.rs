//! Roster-wide cost aggregation.
//!
//! Runs the fully loaded cost calculation over every employee and rolls the
//! breakdowns up into totals, an average and data-quality warnings.

use rust_decimal::Decimal;

use crate::config::EngineConfig;
use crate::models::{Employee, EmployeeCostBreakdown, EmployeeCostSummary, OverheadCosts};

use super::employee_cost::calculate_fully_loaded_cost;

/// Warning raised when no overhead record exists.
pub const OVERHEAD_MISSING_WARNING: &str = "Overhead data not available. Fully loaded costs \
exclude rent, utilities, insurance and software.";

/// Calculates the fully loaded cost of every employee on the roster.
///
/// Overhead is split evenly across the whole roster, so the headcount used for
/// allocation is always `employees.len()`. Output order matches input order.
pub fn calculate_all_employee_costs(
    employees: &[Employee],
    overhead: Option<&OverheadCosts>,
    config: &EngineConfig,
) -> Vec<EmployeeCostBreakdown> {
    let headcount = employees.len();
    employees
        .iter()
        .map(|employee| calculate_fully_loaded_cost(employee, overhead, headcount, config))
        .collect()
}

/// Rolls per-employee breakdowns up into an [`EmployeeCostSummary`].
///
/// Warnings are appended in a fixed order: missing overhead first, then the
/// count of employees with zero benefits. A benefits value of exactly zero
/// counts as "not specified" because the two cannot be told apart upstream.
///
/// # Examples
///
/// ```
/// use cost_engine::calculation::calculate_cost_summary;
/// use rust_decimal::Decimal;
///
/// let summary = calculate_cost_summary(&[], true);
/// assert_eq!(summary.total_headcount, 0);
/// assert_eq!(summary.average_fully_loaded_cost, Decimal::ZERO);
/// assert!(summary.missing_data_warnings.is_empty());
/// ```
pub fn calculate_cost_summary(
    breakdowns: &[EmployeeCostBreakdown],
    has_overhead_data: bool,
) -> EmployeeCostSummary {
    let total_headcount = breakdowns.len();

    let mut total_base_salary = Decimal::ZERO;
    let mut total_payroll_taxes = Decimal::ZERO;
    let mut total_benefits = Decimal::ZERO;
    let mut total_allocated_overhead = Decimal::ZERO;
    let mut total_fully_loaded_cost = Decimal::ZERO;
    let mut missing_benefits = 0usize;

    for breakdown in breakdowns {
        total_base_salary += breakdown.base_salary;
        total_payroll_taxes += breakdown.payroll_taxes;
        total_benefits += breakdown.benefits;
        total_allocated_overhead += breakdown.allocated_overhead;
        total_fully_loaded_cost += breakdown.fully_loaded_cost;
        if !breakdown.has_benefits() {
            missing_benefits += 1;
        }
    }

    let average_fully_loaded_cost = if total_headcount > 0 {
        total_fully_loaded_cost / Decimal::from(total_headcount)
    } else {
        Decimal::ZERO
    };

    let has_benefits_data = missing_benefits < total_headcount;

    let mut missing_data_warnings = Vec::new();
    if !has_overhead_data {
        missing_data_warnings.push(OVERHEAD_MISSING_WARNING.to_string());
    }
    if missing_benefits > 0 {
        missing_data_warnings.push(format!(
            "Benefits not specified for {} employee(s).",
            missing_benefits
        ));
    }

    EmployeeCostSummary {
        total_headcount,
        total_base_salary,
        total_payroll_taxes,
        total_benefits,
        total_allocated_overhead,
        total_fully_loaded_cost,
        average_fully_loaded_cost,
        has_overhead_data,
        has_benefits_data,
        missing_data_warnings,
    }
}
