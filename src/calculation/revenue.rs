//! Revenue resolution.
//!
//! Picks the single best available revenue figure. Precedence:
//! 1. The most recent uploaded financial document (high confidence)
//! 2. The business profile revenue range midpoint (low confidence)
//! 3. Nothing: the caller cannot compute EBITDA

use rust_decimal::Decimal;

use crate::config::EngineConfig;
use crate::models::{AuditStep, Confidence, FinancialDocument, RevenueRange, RevenueSource};

use super::document_selection::most_recent_document;

/// A revenue figure with its attribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRevenue {
    /// The annual revenue amount.
    pub amount: Decimal,
    /// Where the amount came from.
    pub source: RevenueSource,
}

/// The result of revenue resolution, including the audit step.
#[derive(Debug, Clone)]
pub struct RevenueResolution {
    /// The resolved revenue, or `None` if no source had data.
    pub revenue: Option<ResolvedRevenue>,
    /// The audit step recording which source was chosen.
    pub audit_step: AuditStep,
}

/// Resolves the business's revenue from the available sources.
///
/// When several documents exist the most recently updated one is used; see
/// [`most_recent_document`](super::most_recent_document) for tie-breaking.
/// Returning `None` is a normal "insufficient data" outcome, not an error.
///
/// # Examples
///
/// ```
/// use cost_engine::calculation::resolve_revenue;
/// use cost_engine::config::EngineConfig;
/// use cost_engine::models::{Confidence, RevenueRange};
/// use rust_decimal::Decimal;
///
/// let config = EngineConfig::default();
/// let result = resolve_revenue(&[], Some(RevenueRange::From500kTo1m), &config, 1);
///
/// let revenue = result.revenue.unwrap();
/// assert_eq!(revenue.amount, Decimal::new(750_000, 0));
/// assert_eq!(revenue.source.confidence(), Confidence::Low);
/// ```
pub fn resolve_revenue(
    documents: &[FinancialDocument],
    revenue_range: Option<RevenueRange>,
    config: &EngineConfig,
    step_number: u32,
) -> RevenueResolution {
    if let Some(document) = most_recent_document(documents) {
        let amount = document.extraction.revenue.total;
        let audit_step = AuditStep {
            step_number,
            rule_id: "revenue_resolution".to_string(),
            rule_name: "Revenue Resolution".to_string(),
            input: serde_json::json!({
                "document_count": documents.len(),
                "revenue_range": revenue_range.map(|r| r.as_str())
            }),
            output: serde_json::json!({
                "amount": amount.to_string(),
                "source": "pl_document",
                "document_id": document.document_id,
                "confidence": "high"
            }),
            reasoning: format!(
                "Using revenue ${} from most recent document '{}' (updated {})",
                amount, document.filename, document.last_updated
            ),
        };

        return RevenueResolution {
            revenue: Some(ResolvedRevenue {
                amount,
                source: RevenueSource::PlDocument {
                    document_id: document.document_id.clone(),
                    filename: document.filename.clone(),
                    last_updated: document.last_updated.clone(),
                    confidence: Confidence::High,
                    period: document.extraction.period.clone(),
                },
            }),
            audit_step,
        };
    }

    if let Some(range) = revenue_range {
        let amount = config.revenue_estimates.estimate(range);
        let audit_step = AuditStep {
            step_number,
            rule_id: "revenue_resolution".to_string(),
            rule_name: "Revenue Resolution".to_string(),
            input: serde_json::json!({
                "document_count": 0,
                "revenue_range": range.as_str()
            }),
            output: serde_json::json!({
                "amount": amount.to_string(),
                "source": "profile_estimate",
                "confidence": "low"
            }),
            reasoning: format!(
                "No financial documents; estimating revenue at ${} from profile range {}",
                amount,
                range.as_str()
            ),
        };

        return RevenueResolution {
            revenue: Some(ResolvedRevenue {
                amount,
                source: RevenueSource::ProfileEstimate {
                    revenue_range: range,
                    confidence: Confidence::Low,
                },
            }),
            audit_step,
        };
    }

    RevenueResolution {
        revenue: None,
        audit_step: AuditStep {
            step_number,
            rule_id: "revenue_resolution".to_string(),
            rule_name: "Revenue Resolution".to_string(),
            input: serde_json::json!({
                "document_count": 0,
                "revenue_range": null
            }),
            output: serde_json::json!({
                "source": "none"
            }),
            reasoning: "No financial documents or profile revenue range available".to_string(),
        },
    }
}
