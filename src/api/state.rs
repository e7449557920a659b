//! Application state for the cost engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::engine::FinancialEngine;
use crate::observer::TracingObserver;

/// Shared application state.
///
/// Holds a single engine built from the loaded configuration. The engine is
/// stateless between calls, so every request shares it through an `Arc`.
#[derive(Clone)]
pub struct AppState {
    engine: Arc<FinancialEngine<TracingObserver>>,
}

impl AppState {
    /// Creates a new application state from a configuration loader.
    pub fn new(loader: ConfigLoader) -> Self {
        let engine = FinancialEngine::new(loader.into_config()).with_observer(TracingObserver);
        Self {
            engine: Arc::new(engine),
        }
    }

    /// Returns the shared engine.
    pub fn engine(&self) -> &FinancialEngine<TracingObserver> {
        &self.engine
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ConfigLoader::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone + Send + Sync>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_default_state_uses_default_config() {
        let state = AppState::default();
        assert_eq!(
            state.engine().config().payroll_tax.combined_rate(),
            Decimal::new(765, 4)
        );
    }
}
