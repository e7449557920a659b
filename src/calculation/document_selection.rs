//! Most-recent document selection.
//!
//! Both resolvers read from the same document: the one with the latest
//! `last_updated`. Unparseable timestamps sort as the epoch. Exact ties are
//! broken by `document_id` (lexically ascending) and then `filename`, so the
//! choice never depends on input order.

use std::cmp::Ordering;

use crate::models::FinancialDocument;

/// Orders documents most recent first, with a deterministic tie-break.
pub fn recency_order(a: &FinancialDocument, b: &FinancialDocument) -> Ordering {
    b.last_updated_millis()
        .cmp(&a.last_updated_millis())
        .then_with(|| a.document_id.cmp(&b.document_id))
        .then_with(|| a.filename.cmp(&b.filename))
}

/// Returns the most recently updated document, or `None` if there are none.
pub fn most_recent_document(documents: &[FinancialDocument]) -> Option<&FinancialDocument> {
    documents.iter().min_by(|a, b| recency_order(a, b))
}
