//! Fully loaded employee cost calculation.
//!
//! This module computes one employee's total annual cost to the business:
//! base salary, employer payroll taxes, benefits, and an even share of
//! annual overhead.

use rust_decimal::Decimal;

use crate::config::EngineConfig;
use crate::models::{Employee, EmployeeCostBreakdown, OverheadCosts};

use super::overhead::{MONTHS_PER_YEAR, annual_overhead};
use super::rounding::round_currency;

/// Calculates the fully loaded annual cost of one employee.
///
/// * `payroll_taxes = round(salary × combined payroll tax rate)`
/// * `allocated_overhead = round(annual overhead / headcount)`, or zero when
///   `headcount` is zero
/// * `fully_loaded_cost` is the exact sum of the four components
/// * `monthly_cost = fully_loaded_cost / 12`, unrounded
///
/// `headcount` is the size of the whole roster the overhead is split across,
/// not just the employees being reported on.
///
/// # Examples
///
/// ```
/// use cost_engine::calculation::calculate_fully_loaded_cost;
/// use cost_engine::config::EngineConfig;
/// use cost_engine::models::{Employee, EmploymentType};
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     name: "Sam Carter".to_string(),
///     role: "Technician".to_string(),
///     department: None,
///     employment_type: EmploymentType::FullTime,
///     annual_salary: Decimal::new(100_000, 0),
///     annual_benefits: Decimal::new(15_000, 0),
/// };
///
/// let breakdown = calculate_fully_loaded_cost(&employee, None, 1, &EngineConfig::default());
/// assert_eq!(breakdown.payroll_taxes, Decimal::new(7_650, 0));
/// assert_eq!(breakdown.fully_loaded_cost, Decimal::new(122_650, 0));
/// ```
pub fn calculate_fully_loaded_cost(
    employee: &Employee,
    overhead: Option<&OverheadCosts>,
    headcount: usize,
    config: &EngineConfig,
) -> EmployeeCostBreakdown {
    let base_salary = employee.annual_salary;
    let payroll_taxes = round_currency(base_salary * config.payroll_tax.combined_rate());
    let benefits = employee.annual_benefits;

    let allocated_overhead = if headcount > 0 {
        round_currency(annual_overhead(overhead) / Decimal::from(headcount))
    } else {
        Decimal::ZERO
    };

    let fully_loaded_cost = base_salary + payroll_taxes + benefits + allocated_overhead;

    EmployeeCostBreakdown {
        employee_id: employee.id.clone(),
        name: employee.name.clone(),
        role: employee.role.clone(),
        department: employee.department.clone(),
        employment_type: employee.employment_type,
        base_salary,
        payroll_taxes,
        benefits,
        allocated_overhead,
        fully_loaded_cost,
        monthly_cost: fully_loaded_cost / Decimal::from(MONTHS_PER_YEAR),
    }
}
