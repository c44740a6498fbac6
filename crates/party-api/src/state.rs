//! Application state wiring the registry and dispatcher together.
//!
//! Built once before the server starts; cloned into every request handler.

use std::sync::Arc;

use party_core::dispatcher::Dispatcher;
use party_core::registry::ActivityRegistry;

/// Shared application state.
///
/// Used by both CLI commands and HTTP handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub dispatcher: Dispatcher,
}

impl AppState {
    /// Build the activity registry and the dispatcher over it.
    pub fn init() -> Self {
        let registry = Arc::new(ActivityRegistry::build());
        Self {
            dispatcher: Dispatcher::new(registry),
        }
    }
}
