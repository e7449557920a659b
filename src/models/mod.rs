//! Core data models for the cost engine.
//!
//! Input records (employees, overhead, documents, revenue range) are produced
//! by an external record-access layer. Output models are pure projections
//! recomputed on every request.

mod audit;
mod document;
mod ebitda;
mod employee;
mod employee_cost;
mod overhead;
mod revenue_range;
mod snapshot;
mod source;

pub use audit::AuditStep;
pub use document::{
    DocumentExtraction, ExpenseExtraction, ExtractedExpenseCategory, FinancialDocument, LineItem,
    ReportingPeriod, RevenueExtraction,
};
pub use ebitda::{DataCompleteness, EbitdaBreakdown, EbitdaResult, ExpenseCategory};
pub use employee::{Employee, EmploymentType};
pub use employee_cost::{
    CostAttribution, EmployeeCostBreakdown, EmployeeCostResult, EmployeeCostSummary,
};
pub use overhead::{OverheadCosts, SoftwareCost};
pub use revenue_range::RevenueRange;
pub use snapshot::BusinessSnapshot;
pub use source::{Confidence, ExpenseSource, ExpenseSourceType, RevenueSource};
