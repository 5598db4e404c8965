//! Optimization scenarios — caller-submitted action batches with tracked
//! completion progress. The backend records them; it never executes them.

use serde::{Deserialize, Serialize};

use crate::command::CommandParams;
use crate::id::{DeviceId, ScenarioId};
use crate::time::Timestamp;

/// Lifecycle status of a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScenarioStatus {
    #[default]
    Accepted,
    InProgress,
    Completed,
    Failed,
}

impl ScenarioStatus {
    /// Status implied by a progress ratio.
    ///
    /// `completed == total` wins over `completed == 0`, so a zero-action
    /// scenario derives `completed`.
    #[must_use]
    pub fn derive(completed: usize, total: usize) -> Self {
        if completed == total {
            Self::Completed
        } else if completed == 0 {
            Self::Accepted
        } else {
            Self::InProgress
        }
    }
}

impl std::fmt::Display for ScenarioStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Accepted => f.write_str("accepted"),
            Self::InProgress => f.write_str("in-progress"),
            Self::Completed => f.write_str("completed"),
            Self::Failed => f.write_str("failed"),
        }
    }
}

/// One device action inside a scenario, stored verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationAction {
    pub device_id: DeviceId,
    pub command: String,
    #[serde(default)]
    pub params: CommandParams,
    pub execute_at: Option<Timestamp>,
}

/// A caller-submitted batch of device actions with tracked progress.
///
/// `total_actions` is fixed at creation; `actions_completed` never exceeds
/// it and never moves backwards through the store's clamped updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationScenario {
    pub scenario_id: ScenarioId,
    pub generated_at: Timestamp,
    pub total_actions: usize,
    pub actions_completed: usize,
    pub status: ScenarioStatus,
    pub actions: Vec<OptimizationAction>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_derive_accepted_when_nothing_completed() {
        assert_eq!(ScenarioStatus::derive(0, 5), ScenarioStatus::Accepted);
    }

    #[test]
    fn should_derive_in_progress_when_partially_completed() {
        assert_eq!(ScenarioStatus::derive(3, 5), ScenarioStatus::InProgress);
    }

    #[test]
    fn should_derive_completed_when_all_completed() {
        assert_eq!(ScenarioStatus::derive(5, 5), ScenarioStatus::Completed);
    }

    #[test]
    fn should_derive_completed_for_zero_action_scenario() {
        assert_eq!(ScenarioStatus::derive(0, 0), ScenarioStatus::Completed);
    }

    #[test]
    fn should_serialize_in_progress_with_kebab_case() {
        let json = serde_json::to_string(&ScenarioStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
    }

    #[test]
    fn should_display_wire_strings() {
        assert_eq!(ScenarioStatus::InProgress.to_string(), "in-progress");
        assert_eq!(ScenarioStatus::Failed.to_string(), "failed");
    }

    #[test]
    fn should_roundtrip_scenario_through_serde_json() {
        let scenario = OptimizationScenario {
            scenario_id: "s1".parse().unwrap(),
            generated_at: crate::time::now(),
            total_actions: 1,
            actions_completed: 0,
            status: ScenarioStatus::Accepted,
            actions: vec![OptimizationAction {
                device_id: "dev-1".parse().unwrap(),
                command: "set_power".to_owned(),
                params: CommandParams::new(),
                execute_at: None,
            }],
        };

        let json = serde_json::to_value(&scenario).unwrap();
        assert_eq!(json["scenarioId"], "s1");
        assert_eq!(json["totalActions"], 1);
        assert_eq!(json["status"], "accepted");

        let parsed: OptimizationScenario = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, scenario);
    }
}
