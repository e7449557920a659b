//! Financial document models.
//!
//! A [`FinancialDocument`] is an uploaded P&L statement whose figures have
//! already been extracted upstream. The engine only reads the extracted totals
//! and categories; it never looks at the raw file.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// The reporting period a document covers.
///
/// Either bound may be missing when extraction could not find it. Bounds are
/// read with the same leniency as document timestamps: a full timestamp keeps
/// its UTC date, and an unreadable value becomes a missing bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingPeriod {
    /// First day of the period (inclusive).
    #[serde(default, deserialize_with = "deserialize_period_bound")]
    pub start_date: Option<NaiveDate>,
    /// Last day of the period (inclusive).
    #[serde(default, deserialize_with = "deserialize_period_bound")]
    pub end_date: Option<NaiveDate>,
}

impl ReportingPeriod {
    /// Returns true if both the start and end dates are known.
    pub fn is_complete(&self) -> bool {
        self.start_date.is_some() && self.end_date.is_some()
    }
}

/// A named amount extracted from a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// The label as it appeared on the document.
    pub name: String,
    /// The extracted amount.
    pub amount: Decimal,
}

/// Extracted revenue figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueExtraction {
    /// Total revenue for the period.
    pub total: Decimal,
    /// Individual revenue lines.
    #[serde(default)]
    pub line_items: Vec<LineItem>,
}

/// An expense category extracted from a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedExpenseCategory {
    /// The category label (e.g., "Rent", "Wages").
    pub category: String,
    /// The amount for the category.
    pub amount: Decimal,
}

/// Extracted expense figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseExtraction {
    /// Total operating expenses for the period.
    pub total: Decimal,
    /// Category breakdown, in document order.
    #[serde(default)]
    pub categories: Vec<ExtractedExpenseCategory>,
}

/// Structured data extracted from a financial document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentExtraction {
    /// The reporting period, if one was found.
    #[serde(default)]
    pub period: Option<ReportingPeriod>,
    /// Revenue figures.
    pub revenue: RevenueExtraction,
    /// Expense figures.
    pub expenses: ExpenseExtraction,
}

/// An uploaded financial document with its extracted data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialDocument {
    /// Unique identifier of the document.
    pub document_id: String,
    /// Original filename of the upload.
    pub filename: String,
    /// Raw last-updated timestamp as stored upstream.
    pub last_updated: String,
    /// The extracted financial data.
    pub extraction: DocumentExtraction,
}

impl FinancialDocument {
    /// Returns `last_updated` as milliseconds since the Unix epoch.
    ///
    /// Accepts RFC 3339 timestamps, naive `YYYY-MM-DDTHH:MM:SS` timestamps
    /// (read as UTC) and plain `YYYY-MM-DD` dates. Anything else is treated
    /// as the epoch so that it sorts as the oldest document.
    ///
    /// # Example
    ///
    /// ```
    /// use cost_engine::models::{
    ///     DocumentExtraction, ExpenseExtraction, FinancialDocument, RevenueExtraction,
    /// };
    /// use rust_decimal::Decimal;
    ///
    /// let mut document = FinancialDocument {
    ///     document_id: "doc_1".to_string(),
    ///     filename: "pl.pdf".to_string(),
    ///     last_updated: "1970-01-01T00:00:01Z".to_string(),
    ///     extraction: DocumentExtraction {
    ///         period: None,
    ///         revenue: RevenueExtraction { total: Decimal::ZERO, line_items: vec![] },
    ///         expenses: ExpenseExtraction { total: Decimal::ZERO, categories: vec![] },
    ///     },
    /// };
    /// assert_eq!(document.last_updated_millis(), 1_000);
    ///
    /// document.last_updated = "not a date".to_string();
    /// assert_eq!(document.last_updated_millis(), 0);
    /// ```
    pub fn last_updated_millis(&self) -> i64 {
        parse_utc_timestamp(&self.last_updated)
            .map(|parsed| parsed.and_utc().timestamp_millis())
            .unwrap_or(0)
    }
}

/// Parses a loosely formatted timestamp into a naive UTC date-time.
fn parse_utc_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.naive_utc());
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

fn deserialize_period_bound<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .and_then(parse_utc_timestamp)
        .map(|parsed| parsed.date()))
}
