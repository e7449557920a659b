//! EBITDA calculation.
//!
//! Combines a resolved revenue figure and resolved expenses into a
//! profitability breakdown. EBITDA is simplified to revenue minus operating
//! expenses.

use rust_decimal::Decimal;

use crate::models::{AuditStep, EbitdaBreakdown, RevenueSource};

use super::expenses::ResolvedExpenses;
use super::revenue::ResolvedRevenue;
use super::rounding::{round_currency, round_percentage};

/// The result of an EBITDA calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct EbitdaCalculation {
    /// The profitability breakdown.
    pub breakdown: EbitdaBreakdown,
    /// The audit step recording the calculation.
    pub audit_step: AuditStep,
}

/// Calculates EBITDA and margin from resolved revenue and expenses.
///
/// * `ebitda = round(revenue - total expenses)`
/// * `margin = round2(ebitda / revenue × 100)`, or zero when revenue is zero
/// * `period` is copied from a document revenue source only when both its
///   start and end dates are known
///
/// # Examples
///
/// ```
/// use cost_engine::calculation::{calculate_ebitda, ResolvedExpenses, ResolvedRevenue};
/// use cost_engine::models::{Confidence, RevenueRange, RevenueSource};
/// use rust_decimal::Decimal;
///
/// let revenue = ResolvedRevenue {
///     amount: Decimal::new(100_000, 0),
///     source: RevenueSource::ProfileEstimate {
///         revenue_range: RevenueRange::Under250k,
///         confidence: Confidence::Low,
///     },
/// };
/// let expenses = ResolvedExpenses {
///     total: Decimal::new(80_000, 0),
///     categories: vec![],
///     sources: vec![],
/// };
///
/// let result = calculate_ebitda(&revenue, &expenses, 1);
/// assert_eq!(result.breakdown.ebitda, Decimal::new(20_000, 0));
/// assert_eq!(result.breakdown.ebitda_margin, Decimal::new(20, 0));
/// ```
pub fn calculate_ebitda(
    revenue: &ResolvedRevenue,
    expenses: &ResolvedExpenses,
    step_number: u32,
) -> EbitdaCalculation {
    let ebitda = round_currency(revenue.amount - expenses.total);
    let ebitda_margin = ebitda_margin(ebitda, revenue.amount);

    let period = match &revenue.source {
        RevenueSource::PlDocument {
            period: Some(period),
            ..
        } if period.is_complete() => Some(period.clone()),
        _ => None,
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "ebitda_calculation".to_string(),
        rule_name: "EBITDA Calculation".to_string(),
        input: serde_json::json!({
            "revenue": revenue.amount.to_string(),
            "total_operating_expenses": expenses.total.to_string()
        }),
        output: serde_json::json!({
            "ebitda": ebitda.to_string(),
            "ebitda_margin": ebitda_margin.to_string()
        }),
        reasoning: format!(
            "${} revenue - ${} operating expenses = ${} EBITDA ({}% margin)",
            revenue.amount, expenses.total, ebitda, ebitda_margin
        ),
    };

    EbitdaCalculation {
        breakdown: EbitdaBreakdown {
            revenue: revenue.amount,
            revenue_source: revenue.source.clone(),
            total_operating_expenses: expenses.total,
            expense_categories: expenses.categories.clone(),
            expense_sources: expenses.sources.clone(),
            ebitda,
            ebitda_margin,
            period,
        },
        audit_step,
    }
}

/// Returns EBITDA as a percentage of revenue, rounded to two places.
///
/// Zero revenue yields a zero margin rather than a division error. So does a
/// revenue figure small enough that the ratio exceeds `Decimal`'s range.
pub fn ebitda_margin(ebitda: Decimal, revenue: Decimal) -> Decimal {
    if revenue.is_zero() {
        return Decimal::ZERO;
    }
    ebitda
        .checked_div(revenue)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map(round_percentage)
        .unwrap_or(Decimal::ZERO)
}
