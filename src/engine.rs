//! Result assembly.
//!
//! [`FinancialEngine`] orchestrates the calculation modules into the two
//! results callers consume: [`EmployeeCostResult`] and [`EbitdaResult`]. It
//! owns the configuration and an injected [`CalculationObserver`].
//!
//! # Example
//!
//! ```
//! use cost_engine::engine::FinancialEngine;
//! use cost_engine::models::{BusinessSnapshot, RevenueRange};
//! use chrono::Utc;
//!
//! let engine = FinancialEngine::default();
//! let snapshot = BusinessSnapshot {
//!     revenue_range: Some(RevenueRange::Under250k),
//!     ..BusinessSnapshot::default()
//! };
//!
//! let result = engine.calculate_ebitda(&snapshot, Utc::now());
//! assert!(result.data_completeness.has_revenue_data);
//! assert!(!result.data_completeness.has_expense_data);
//! ```

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::calculation::{
    calculate_all_employee_costs, calculate_cost_summary, calculate_ebitda, resolve_expenses,
    resolve_revenue,
};
use crate::config::EngineConfig;
use crate::models::{
    BusinessSnapshot, CostAttribution, DataCompleteness, EbitdaResult, Employee,
    EmployeeCostResult, OverheadCosts,
};
use crate::observer::{CalculationObserver, NoopObserver};

/// Warning raised when no revenue source exists. No EBITDA is produced.
pub const NO_REVENUE_WARNING: &str = "No revenue data available. Upload a P&L statement or set \
a revenue range in your business profile to calculate EBITDA.";

/// Warning raised when revenue is a profile range estimate.
pub const ESTIMATED_REVENUE_WARNING: &str = "Revenue is estimated from your business profile \
revenue range (low confidence). Upload a P&L statement for an accurate figure.";

/// Warning raised when the resolved expense total is zero.
pub const NO_EXPENSE_WARNING: &str =
    "No expense data available. Add overhead costs, employees, or upload a P&L statement.";

/// The cost and profitability engine.
///
/// The engine holds no per-request state: every call reads only its own
/// snapshot, so one instance can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct FinancialEngine<O = NoopObserver> {
    config: EngineConfig,
    observer: O,
}

impl FinancialEngine<NoopObserver> {
    /// Creates an engine with the given configuration and no observer.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            observer: NoopObserver,
        }
    }
}

impl Default for FinancialEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<O: CalculationObserver> FinancialEngine<O> {
    /// Replaces the observer, keeping the configuration.
    pub fn with_observer<P: CalculationObserver>(self, observer: P) -> FinancialEngine<P> {
        FinancialEngine {
            config: self.config,
            observer,
        }
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Calculates fully loaded costs for every employee plus a roster summary.
    ///
    /// `computed_at` is stamped on the result as `last_updated`; it is a
    /// parameter so identical inputs always yield identical output.
    pub fn calculate_employee_costs(
        &self,
        employees: &[Employee],
        overhead: Option<&OverheadCosts>,
        computed_at: DateTime<Utc>,
    ) -> EmployeeCostResult {
        let breakdowns = calculate_all_employee_costs(employees, overhead, &self.config);
        let summary = calculate_cost_summary(&breakdowns, overhead.is_some());
        self.observer.employee_costs_calculated(&summary);
        for warning in &summary.missing_data_warnings {
            self.observer.warning_raised(warning);
        }

        EmployeeCostResult {
            employees: breakdowns,
            summary,
            sources: CostAttribution {
                employee_records: employees.len(),
                overhead_last_updated: overhead.map(|o| o.updated_at),
            },
            last_updated: computed_at,
        }
    }

    /// Calculates EBITDA for a business snapshot.
    ///
    /// The employee cost summary is computed before expenses are resolved,
    /// since it is the payroll input to the no-document expense branch.
    /// Warnings are emitted in priority order: missing revenue (terminal, no
    /// breakdown), estimated revenue, missing expenses, operating loss.
    pub fn calculate_ebitda(
        &self,
        snapshot: &BusinessSnapshot,
        computed_at: DateTime<Utc>,
    ) -> EbitdaResult {
        let overhead = snapshot.overhead.as_ref();
        let mut audit_trace = Vec::new();
        let mut step_number: u32 = 1;

        let cost_summary = if snapshot.employees.is_empty() {
            None
        } else {
            let breakdowns =
                calculate_all_employee_costs(&snapshot.employees, overhead, &self.config);
            let summary = calculate_cost_summary(&breakdowns, overhead.is_some());
            self.observer.employee_costs_calculated(&summary);
            Some(summary)
        };

        let revenue_resolution = resolve_revenue(
            &snapshot.documents,
            snapshot.revenue_range,
            &self.config,
            step_number,
        );
        audit_trace.push(revenue_resolution.audit_step);
        step_number += 1;
        let revenue = revenue_resolution.revenue;
        self.observer.revenue_resolved(revenue.as_ref());

        let expense_resolution = resolve_expenses(
            &snapshot.documents,
            overhead,
            cost_summary.as_ref(),
            step_number,
        );
        audit_trace.push(expense_resolution.audit_step);
        step_number += 1;
        let expenses = expense_resolution.expenses;
        self.observer.expenses_resolved(&expenses);

        let data_completeness = DataCompleteness {
            has_revenue_data: revenue.is_some(),
            has_expense_data: expenses.total > Decimal::ZERO,
            has_payroll_data: !snapshot.employees.is_empty(),
            has_overhead_data: overhead.is_some(),
        };

        let mut warnings = Vec::new();
        let breakdown = match revenue {
            None => {
                warnings.push(NO_REVENUE_WARNING.to_string());
                None
            }
            Some(revenue) => {
                if revenue.source.is_estimate() {
                    warnings.push(ESTIMATED_REVENUE_WARNING.to_string());
                }
                if !data_completeness.has_expense_data {
                    warnings.push(NO_EXPENSE_WARNING.to_string());
                }

                let calculation = calculate_ebitda(&revenue, &expenses, step_number);
                audit_trace.push(calculation.audit_step);
                self.observer.ebitda_calculated(&calculation.breakdown);

                if calculation.breakdown.ebitda < Decimal::ZERO {
                    warnings.push(format!(
                        "EBITDA is negative (${}), indicating an operating loss.",
                        calculation.breakdown.ebitda.abs()
                    ));
                }
                Some(calculation.breakdown)
            }
        };

        for warning in &warnings {
            self.observer.warning_raised(warning);
        }

        EbitdaResult {
            breakdown,
            data_completeness,
            warnings,
            audit_trace,
            last_updated: computed_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Confidence, DocumentExtraction, EmploymentType, ExpenseExtraction, ExpenseSourceType,
        ExtractedExpenseCategory, FinancialDocument, RevenueExtraction, RevenueRange,
        RevenueSource, SoftwareCost,
    };
    use crate::observer::tests::RecordingObserver;
    use chrono::TimeZone;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn computed_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 30, 12, 0, 0).unwrap()
    }

    fn create_employee(id: &str, salary: &str, benefits: &str) -> Employee {
        Employee {
            id: id.to_string(),
            name: format!("Employee {}", id),
            role: "Staff".to_string(),
            department: None,
            employment_type: EmploymentType::FullTime,
            annual_salary: dec(salary),
            annual_benefits: dec(benefits),
        }
    }

    /// Monthly total of 7,300.
    fn create_overhead() -> OverheadCosts {
        OverheadCosts {
            monthly_rent: dec("4000"),
            monthly_utilities: dec("500"),
            monthly_insurance: dec("800"),
            other_monthly_costs: dec("1500"),
            software_costs: vec![SoftwareCost {
                name: "Accounting".to_string(),
                monthly_cost: dec("500"),
            }],
            updated_at: Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap(),
        }
    }

    fn create_document(
        id: &str,
        last_updated: &str,
        revenue: &str,
        expenses: &str,
    ) -> FinancialDocument {
        FinancialDocument {
            document_id: id.to_string(),
            filename: format!("{}.pdf", id),
            last_updated: last_updated.to_string(),
            extraction: DocumentExtraction {
                period: None,
                revenue: RevenueExtraction {
                    total: dec(revenue),
                    line_items: vec![],
                },
                expenses: ExpenseExtraction {
                    total: dec(expenses),
                    categories: vec![ExtractedExpenseCategory {
                        category: "Operating".to_string(),
                        amount: dec(expenses),
                    }],
                },
            },
        }
    }

    #[test]
    fn test_employee_costs_result() {
        let engine = FinancialEngine::default();
        let employees: Vec<Employee> = (0..5)
            .map(|i| create_employee(&format!("e{}", i), "100000", "15000"))
            .collect();
        let overhead = create_overhead();

        let result = engine.calculate_employee_costs(&employees, Some(&overhead), computed_at());

        assert_eq!(result.employees.len(), 5);
        assert_eq!(result.employees[0].fully_loaded_cost, dec("140170"));
        assert_eq!(result.summary.total_fully_loaded_cost, dec("700850"));
        assert_eq!(result.summary.average_fully_loaded_cost, dec("140170"));
        assert!(result.summary.missing_data_warnings.is_empty());
        assert_eq!(result.sources.employee_records, 5);
        assert_eq!(result.sources.overhead_last_updated, Some(overhead.updated_at));
        assert_eq!(result.last_updated, computed_at());
    }

    #[test]
    fn test_no_revenue_is_terminal() {
        let engine = FinancialEngine::default();
        let snapshot = BusinessSnapshot {
            employees: vec![create_employee("a", "50000", "0")],
            overhead: Some(create_overhead()),
            ..BusinessSnapshot::default()
        };

        let result = engine.calculate_ebitda(&snapshot, computed_at());

        assert!(result.breakdown.is_none());
        assert_eq!(result.warnings, vec![NO_REVENUE_WARNING.to_string()]);
        assert!(!result.data_completeness.has_revenue_data);
        assert!(result.data_completeness.has_expense_data);
        assert!(result.data_completeness.has_payroll_data);
        assert!(result.data_completeness.has_overhead_data);
        assert_eq!(result.audit_trace.len(), 2);
    }

    #[test]
    fn test_profile_estimate_with_manual_expenses() {
        let engine = FinancialEngine::default();
        let snapshot = BusinessSnapshot {
            employees: vec![create_employee("a", "100000", "15000")],
            overhead: Some(create_overhead()),
            documents: vec![],
            revenue_range: Some(RevenueRange::From250kTo500k),
        };

        let result = engine.calculate_ebitda(&snapshot, computed_at());
        let breakdown = result.breakdown.unwrap();

        // Payroll: 100,000 + 7,650 + 15,000 + 87,600 overhead share = 210,250
        // Expenses: 87,600 overhead + 210,250 payroll = 297,850
        assert_eq!(breakdown.revenue, dec("375000"));
        assert_eq!(breakdown.total_operating_expenses, dec("297850"));
        assert_eq!(breakdown.ebitda, dec("77150"));
        assert_eq!(breakdown.ebitda_margin, dec("20.57"));
        assert_eq!(breakdown.expense_categories.len(), 2);
        assert_eq!(result.warnings, vec![ESTIMATED_REVENUE_WARNING.to_string()]);
        assert_eq!(result.audit_trace.len(), 3);
        assert_eq!(result.audit_trace[2].rule_id, "ebitda_calculation");
    }

    #[test]
    fn test_document_suppresses_manual_data() {
        let engine = FinancialEngine::default();
        let snapshot = BusinessSnapshot {
            employees: vec![create_employee("a", "100000", "15000")],
            overhead: Some(create_overhead()),
            documents: vec![create_document("doc_1", "2024-12-01", "600000", "450000")],
            revenue_range: Some(RevenueRange::Over5m),
        };

        let result = engine.calculate_ebitda(&snapshot, computed_at());
        let breakdown = result.breakdown.unwrap();

        assert_eq!(breakdown.revenue, dec("600000"));
        assert_eq!(breakdown.total_operating_expenses, dec("450000"));
        assert_eq!(breakdown.ebitda, dec("150000"));
        assert_eq!(breakdown.ebitda_margin, dec("25"));
        assert!(breakdown
            .expense_categories
            .iter()
            .all(|c| c.source == ExpenseSourceType::PlDocument));
        assert_eq!(breakdown.revenue_source.confidence(), Confidence::High);
        assert!(result.warnings.is_empty());
        assert!(result.data_completeness.has_payroll_data);
        assert!(result.data_completeness.has_overhead_data);
    }

    #[test]
    fn test_warning_order_estimate_no_expenses() {
        let engine = FinancialEngine::default();
        let snapshot = BusinessSnapshot {
            revenue_range: Some(RevenueRange::Under250k),
            ..BusinessSnapshot::default()
        };

        let result = engine.calculate_ebitda(&snapshot, computed_at());

        assert_eq!(
            result.warnings,
            vec![
                ESTIMATED_REVENUE_WARNING.to_string(),
                NO_EXPENSE_WARNING.to_string()
            ]
        );
        let breakdown = result.breakdown.unwrap();
        assert_eq!(breakdown.ebitda, dec("125000"));
        assert_eq!(breakdown.ebitda_margin, dec("100"));
        assert!(!result.data_completeness.has_expense_data);
        assert!(!result.data_completeness.has_payroll_data);
    }

    #[test]
    fn test_operating_loss_warning_last() {
        let engine = FinancialEngine::default();
        let snapshot = BusinessSnapshot {
            documents: vec![create_document("doc_1", "2024-12-01", "0", "50000")],
            ..BusinessSnapshot::default()
        };

        let result = engine.calculate_ebitda(&snapshot, computed_at());

        assert_eq!(
            result.warnings,
            vec!["EBITDA is negative ($50000), indicating an operating loss.".to_string()]
        );
        assert!(result.is_operating_loss());
        let breakdown = result.breakdown.unwrap();
        assert_eq!(breakdown.ebitda, dec("-50000"));
        assert_eq!(breakdown.ebitda_margin, Decimal::ZERO);
    }

    #[test]
    fn test_zero_overhead_is_present_without_expense_data() {
        let engine = FinancialEngine::default();
        let mut overhead = create_overhead();
        overhead.monthly_rent = Decimal::ZERO;
        overhead.monthly_utilities = Decimal::ZERO;
        overhead.monthly_insurance = Decimal::ZERO;
        overhead.other_monthly_costs = Decimal::ZERO;
        overhead.software_costs.clear();
        let snapshot = BusinessSnapshot {
            overhead: Some(overhead),
            revenue_range: Some(RevenueRange::Under250k),
            ..BusinessSnapshot::default()
        };

        let result = engine.calculate_ebitda(&snapshot, computed_at());

        assert!(result.data_completeness.has_overhead_data);
        assert!(!result.data_completeness.has_expense_data);
        assert_eq!(result.warnings.len(), 2);
    }

    #[test]
    fn test_pipeline_is_deterministic() {
        let engine = FinancialEngine::default();
        let snapshot = BusinessSnapshot {
            employees: vec![
                create_employee("a", "72000", "0"),
                create_employee("b", "48000.75", "3000"),
            ],
            overhead: Some(create_overhead()),
            documents: vec![
                create_document("doc_b", "2024-12-01", "500000", "410000"),
                create_document("doc_a", "2024-12-01", "480000", "400000"),
            ],
            revenue_range: None,
        };

        let first = engine.calculate_ebitda(&snapshot, computed_at());
        let second = engine.calculate_ebitda(&snapshot, computed_at());

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
        match &first.breakdown.as_ref().unwrap().revenue_source {
            RevenueSource::PlDocument { document_id, .. } => assert_eq!(document_id, "doc_a"),
            other => panic!("Expected PlDocument, got {:?}", other),
        }
    }

    #[test]
    fn test_observer_notified_in_order() {
        let engine = FinancialEngine::default().with_observer(RecordingObserver::default());
        let snapshot = BusinessSnapshot {
            employees: vec![create_employee("a", "100000", "0")],
            revenue_range: Some(RevenueRange::Under250k),
            ..BusinessSnapshot::default()
        };

        engine.calculate_ebitda(&snapshot, computed_at());

        let events = engine.observer.events();
        assert_eq!(events[0], "employee_costs:1");
        assert_eq!(events[1], "revenue:true");
        assert_eq!(events[2], "expenses:107650");
        assert_eq!(events[3], "ebitda:17350");
        assert_eq!(events[4], format!("warning:{}", ESTIMATED_REVENUE_WARNING));
        assert_eq!(events.len(), 5);
    }

    #[test]
    fn test_employee_cost_warnings_reach_observer() {
        let engine = FinancialEngine::default().with_observer(RecordingObserver::default());
        let employees = vec![create_employee("a", "50000", "0")];

        engine.calculate_employee_costs(&employees, None, computed_at());

        let events = engine.observer.events();
        assert_eq!(events.len(), 3);
        assert!(events[1].starts_with("warning:Overhead data not available"));
        assert_eq!(events[2], "warning:Benefits not specified for 1 employee(s).");
    }

    #[test]
    fn test_custom_config_flows_through() {
        let mut config = EngineConfig::default();
        config.revenue_estimates.under_250k = dec("200000");
        let engine = FinancialEngine::new(config);
        let snapshot = BusinessSnapshot {
            revenue_range: Some(RevenueRange::Under250k),
            ..BusinessSnapshot::default()
        };

        let result = engine.calculate_ebitda(&snapshot, computed_at());

        assert_eq!(result.breakdown.unwrap().revenue, dec("200000"));
        assert_eq!(engine.config().revenue_estimates.under_250k, dec("200000"));
    }
}
