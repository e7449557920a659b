//! Observability hooks for the engine.
//!
//! The engine does not log on its own. Callers that want visibility into
//! resolution decisions inject a [`CalculationObserver`]; every method has a
//! no-op default so implementors only override what they need.

use tracing::{debug, info, warn};

use crate::calculation::{ResolvedExpenses, ResolvedRevenue};
use crate::models::{EbitdaBreakdown, EmployeeCostSummary};

/// Receives notifications as the engine computes a result.
pub trait CalculationObserver: Send + Sync {
    /// Called after the employee cost summary is computed.
    fn employee_costs_calculated(&self, _summary: &EmployeeCostSummary) {}

    /// Called after revenue resolution, with `None` when no source had data.
    fn revenue_resolved(&self, _revenue: Option<&ResolvedRevenue>) {}

    /// Called after expense resolution.
    fn expenses_resolved(&self, _expenses: &ResolvedExpenses) {}

    /// Called after an EBITDA breakdown is produced.
    fn ebitda_calculated(&self, _breakdown: &EbitdaBreakdown) {}

    /// Called once for every user-facing warning, in order.
    fn warning_raised(&self, _warning: &str) {}
}

/// An observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl CalculationObserver for NoopObserver {}

/// An observer that forwards notifications to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl CalculationObserver for TracingObserver {
    fn employee_costs_calculated(&self, summary: &EmployeeCostSummary) {
        debug!(
            headcount = summary.total_headcount,
            total_fully_loaded_cost = %summary.total_fully_loaded_cost,
            has_overhead_data = summary.has_overhead_data,
            "Employee costs calculated"
        );
    }

    fn revenue_resolved(&self, revenue: Option<&ResolvedRevenue>) {
        match revenue {
            Some(r) => debug!(
                amount = %r.amount,
                confidence = ?r.source.confidence(),
                estimated = r.source.is_estimate(),
                "Revenue resolved"
            ),
            None => debug!("No revenue source available"),
        }
    }

    fn expenses_resolved(&self, expenses: &ResolvedExpenses) {
        debug!(
            total = %expenses.total,
            categories = expenses.categories.len(),
            sources = expenses.sources.len(),
            "Expenses resolved"
        );
    }

    fn ebitda_calculated(&self, breakdown: &EbitdaBreakdown) {
        info!(
            ebitda = %breakdown.ebitda,
            margin = %breakdown.ebitda_margin,
            "EBITDA calculated"
        );
    }

    fn warning_raised(&self, warning: &str) {
        warn!(warning, "Data quality warning");
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records every notification as a short event string.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingObserver {
        pub(crate) events: Mutex<Vec<String>>,
    }

    impl RecordingObserver {
        pub(crate) fn events(&self) -> Vec<String> {
            self.events.lock().unwrap().clone()
        }

        fn record(&self, event: String) {
            self.events.lock().unwrap().push(event);
        }
    }

    impl CalculationObserver for RecordingObserver {
        fn employee_costs_calculated(&self, summary: &EmployeeCostSummary) {
            self.record(format!("employee_costs:{}", summary.total_headcount));
        }

        fn revenue_resolved(&self, revenue: Option<&ResolvedRevenue>) {
            self.record(format!("revenue:{}", revenue.is_some()));
        }

        fn expenses_resolved(&self, expenses: &ResolvedExpenses) {
            self.record(format!("expenses:{}", expenses.total));
        }

        fn ebitda_calculated(&self, breakdown: &EbitdaBreakdown) {
            self.record(format!("ebitda:{}", breakdown.ebitda));
        }

        fn warning_raised(&self, warning: &str) {
            self.record(format!("warning:{}", warning));
        }
    }

    #[test]
    fn test_observers_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NoopObserver>();
        assert_send_sync::<TracingObserver>();
    }

    #[test]
    fn test_tracing_observer_without_subscriber_does_not_panic() {
        let observer = TracingObserver;
        observer.revenue_resolved(None);
        observer.warning_raised("something is missing");
    }
}
