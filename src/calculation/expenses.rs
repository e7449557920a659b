//! Expense resolution.
//!
//! Picks the single best available operating expense figure. Document data
//! and manually entered data are never combined:
//! 1. If any financial document exists, the most recent document's expense
//!    total and categories are used verbatim and manual data is ignored,
//!    because the document is assumed to already include those costs.
//! 2. Otherwise overhead (annualized) and fully loaded payroll are added up
//!    from whichever of the two is available.

use rust_decimal::Decimal;

use crate::models::{
    AuditStep, Confidence, EmployeeCostSummary, ExpenseCategory, ExpenseSource,
    ExpenseSourceType, FinancialDocument, OverheadCosts,
};

use super::document_selection::most_recent_document;
use super::overhead::annual_overhead;
use super::rounding::round_currency;

/// Category name for annualized overhead in the manual branch.
pub const OVERHEAD_CATEGORY: &str = "Overhead Costs";

/// Category name for fully loaded payroll in the manual branch.
pub const PAYROLL_CATEGORY: &str = "Payroll & Employee Costs";

/// An expense total with its category breakdown and attribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedExpenses {
    /// Total annual operating expenses.
    pub total: Decimal,
    /// The categories making up the total.
    pub categories: Vec<ExpenseCategory>,
    /// Every source that contributed.
    pub sources: Vec<ExpenseSource>,
}

impl ResolvedExpenses {
    fn empty() -> Self {
        Self {
            total: Decimal::ZERO,
            categories: Vec::new(),
            sources: Vec::new(),
        }
    }
}

/// The result of expense resolution, including the audit step.
#[derive(Debug, Clone)]
pub struct ExpenseResolution {
    /// The resolved expenses. Zero total when no source had data.
    pub expenses: ResolvedExpenses,
    /// The audit step recording which branch was taken.
    pub audit_step: AuditStep,
}

/// Resolves the business's operating expenses.
///
/// `cost_summary` is the roster summary from
/// [`calculate_cost_summary`](super::calculate_cost_summary); pass `None` when
/// there are no employees.
///
/// # Examples
///
/// ```
/// use cost_engine::calculation::resolve_expenses;
/// use rust_decimal::Decimal;
///
/// let result = resolve_expenses(&[], None, None, 1);
/// assert_eq!(result.expenses.total, Decimal::ZERO);
/// assert!(result.expenses.categories.is_empty());
/// ```
pub fn resolve_expenses(
    documents: &[FinancialDocument],
    overhead: Option<&OverheadCosts>,
    cost_summary: Option<&EmployeeCostSummary>,
    step_number: u32,
) -> ExpenseResolution {
    if let Some(document) = most_recent_document(documents) {
        let extraction = &document.extraction.expenses;
        let categories: Vec<ExpenseCategory> = extraction
            .categories
            .iter()
            .map(|c| ExpenseCategory {
                name: c.category.clone(),
                amount: c.amount,
                source: ExpenseSourceType::PlDocument,
            })
            .collect();

        let audit_step = AuditStep {
            step_number,
            rule_id: "expense_resolution".to_string(),
            rule_name: "Expense Resolution".to_string(),
            input: serde_json::json!({
                "document_count": documents.len(),
                "has_overhead": overhead.is_some(),
                "has_payroll": cost_summary.is_some()
            }),
            output: serde_json::json!({
                "total": extraction.total.to_string(),
                "source": "pl_document",
                "document_id": document.document_id,
                "category_count": categories.len(),
                "manual_sources_ignored": overhead.is_some() || cost_summary.is_some()
            }),
            reasoning: format!(
                "Using expenses ${} from document '{}'; overhead and payroll records \
                 are excluded to avoid double counting",
                extraction.total, document.filename
            ),
        };

        return ExpenseResolution {
            expenses: ResolvedExpenses {
                total: extraction.total,
                categories,
                sources: vec![ExpenseSource::PlDocument {
                    document_id: document.document_id.clone(),
                    filename: document.filename.clone(),
                    last_updated: document.last_updated.clone(),
                    amount: extraction.total,
                    confidence: Confidence::High,
                }],
            },
            audit_step,
        };
    }

    let mut expenses = ResolvedExpenses::empty();

    if let Some(o) = overhead {
        let amount = round_currency(annual_overhead(Some(o)));
        expenses.categories.push(ExpenseCategory {
            name: OVERHEAD_CATEGORY.to_string(),
            amount,
            source: ExpenseSourceType::OverheadCosts,
        });
        expenses.sources.push(ExpenseSource::OverheadCosts {
            last_updated: o.updated_at,
            amount,
            confidence: Confidence::Medium,
        });
    }

    if let Some(summary) = cost_summary {
        let amount = summary.total_fully_loaded_cost;
        expenses.categories.push(ExpenseCategory {
            name: PAYROLL_CATEGORY.to_string(),
            amount,
            source: ExpenseSourceType::EmployeeCosts,
        });
        expenses.sources.push(ExpenseSource::EmployeeCosts {
            headcount: summary.total_headcount,
            amount,
            confidence: Confidence::Medium,
        });
    }

    expenses.total = expenses.sources.iter().map(ExpenseSource::amount).sum();

    let included: Vec<&str> = expenses
        .sources
        .iter()
        .map(|s| s.source_type().as_str())
        .collect();

    let audit_step = AuditStep {
        step_number,
        rule_id: "expense_resolution".to_string(),
        rule_name: "Expense Resolution".to_string(),
        input: serde_json::json!({
            "document_count": 0,
            "has_overhead": overhead.is_some(),
            "has_payroll": cost_summary.is_some()
        }),
        output: serde_json::json!({
            "total": expenses.total.to_string(),
            "sources": included,
            "category_count": expenses.categories.len()
        }),
        reasoning: if included.is_empty() {
            "No financial documents, overhead or payroll data; expenses are $0".to_string()
        } else {
            format!(
                "No financial documents; summed {} for total expenses of ${}",
                included.join(" + "),
                expenses.total
            )
        },
    };

    ExpenseResolution {
        expenses,
        audit_step,
    }
}
