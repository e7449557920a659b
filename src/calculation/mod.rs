//! Calculation logic for the cost engine.
//!
//! Each module is a pure function over immutable inputs: overhead
//! aggregation, fully loaded employee costs, roster summaries, revenue and
//! expense resolution, and the final EBITDA computation. Resolution steps
//! return an [`AuditStep`](crate::models::AuditStep) alongside their result.

mod cost_summary;
mod document_selection;
mod ebitda;
mod employee_cost;
mod expenses;
mod overhead;
mod revenue;
mod rounding;

pub use cost_summary::{
    OVERHEAD_MISSING_WARNING, calculate_all_employee_costs, calculate_cost_summary,
};
pub use document_selection::{most_recent_document, recency_order};
pub use ebitda::{EbitdaCalculation, calculate_ebitda, ebitda_margin};
pub use employee_cost::calculate_fully_loaded_cost;
pub use expenses::{
    ExpenseResolution, OVERHEAD_CATEGORY, PAYROLL_CATEGORY, ResolvedExpenses, resolve_expenses,
};
pub use overhead::{MONTHS_PER_YEAR, annual_overhead, total_monthly_overhead};
pub use revenue::{ResolvedRevenue, RevenueResolution, resolve_revenue};
pub use rounding::{round_currency, round_percentage};
