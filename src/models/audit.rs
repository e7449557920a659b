//! Audit trail models.

use serde::{Deserialize, Serialize};

/// A single step in the audit trace recording a resolution decision.
///
/// Each step captures the input, output, and reasoning for a precedence rule
/// so that a caller can explain where a figure came from.
///
/// # Example
///
/// ```
/// use cost_engine::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "revenue_resolution".to_string(),
///     rule_name: "Revenue Resolution".to_string(),
///     input: serde_json::json!({"document_count": 0}),
///     output: serde_json::json!({"source": "none"}),
///     reasoning: "No documents or revenue range available".to_string(),
/// };
/// assert_eq!(step.rule_id, "revenue_resolution");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}
