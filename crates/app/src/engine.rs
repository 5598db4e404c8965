//! Demo optimization engine — records scenarios, executes nothing.

use tokio::sync::Mutex;

use fleethub_domain::optimization::OptimizationScenario;

/// Stand-in for a real optimization executor.
///
/// `apply` records the scenario in submission order and logs it; actually
/// driving the listed device actions is out of scope for this backend.
#[derive(Default)]
pub struct OptimizationEngine {
    applied: Mutex<Vec<OptimizationScenario>>,
}

impl OptimizationEngine {
    /// Create an engine with an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a scenario as applied.
    #[tracing::instrument(skip(self, scenario), fields(scenario_id = %scenario.scenario_id))]
    pub async fn apply(&self, scenario: OptimizationScenario) {
        tracing::info!(
            total_actions = scenario.total_actions,
            "applying optimization scenario"
        );
        self.applied.lock().await.push(scenario);
    }

    /// Number of scenarios applied so far.
    pub async fn applied_count(&self) -> usize {
        self.applied.lock().await.len()
    }

    /// Snapshot of applied scenarios, in submission order.
    pub async fn applied(&self) -> Vec<OptimizationScenario> {
        self.applied.lock().await.clone()
    }
}
