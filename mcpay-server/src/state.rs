//! Application state shared across all request handlers.

use mcpay_core::config::ProvidersConfig;
use std::sync::Arc;

/// Application state that is shared across all request handlers.
///
/// Provider credentials are loaded once at startup and never mutated, so
/// handlers read them without locking.
#[derive(Clone)]
pub struct AppState {
    pub providers: Arc<ProvidersConfig>,
}

impl AppState {
    pub fn new(providers: ProvidersConfig) -> Self {
        Self {
            providers: Arc::new(providers),
        }
    }
}
