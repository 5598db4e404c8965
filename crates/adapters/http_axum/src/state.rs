//! Shared application state for axum handlers.

use std::sync::Arc;

use fleethub_app::engine::OptimizationEngine;
use fleethub_app::store::FleetStore;

/// Application state shared across all axum handlers.
///
/// Handlers hold no state of their own — everything lives in the store.
/// `Clone` is implemented manually so the underlying components themselves
/// do not need to be `Clone` — only the `Arc` handles are cloned.
pub struct AppState {
    /// The process-wide fleet state store.
    pub store: Arc<FleetStore>,
    /// The demo optimization engine.
    pub engine: Arc<OptimizationEngine>,
}

impl Clone for AppState {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            engine: Arc::clone(&self.engine),
        }
    }
}

impl AppState {
    /// Create a new application state from owned components.
    #[must_use]
    pub fn new(store: FleetStore, engine: OptimizationEngine) -> Self {
        Self {
            store: Arc::new(store),
            engine: Arc::new(engine),
        }
    }

    /// Create a new application state from pre-wrapped `Arc`s.
    ///
    /// Use this when the store needs to be shared with other components
    /// before constructing the HTTP state.
    #[must_use]
    pub fn from_arcs(store: Arc<FleetStore>, engine: Arc<OptimizationEngine>) -> Self {
        Self { store, engine }
    }
}
