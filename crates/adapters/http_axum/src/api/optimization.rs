//! JSON handlers for optimization scenario submission and status.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};

use fleethub_domain::command::CommandParams;
use fleethub_domain::error::{NotFoundError, ValidationError};
use fleethub_domain::id::{DeviceId, ScenarioId};
use fleethub_domain::optimization::{OptimizationAction, ScenarioStatus};
use fleethub_domain::time::Timestamp;

use crate::error::ApiError;
use crate::state::AppState;

/// One action inside an apply request.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRequest {
    pub device_id: String,
    pub command: String,
    #[serde(default)]
    pub params: CommandParams,
    #[serde(default)]
    pub execute_at: Option<Timestamp>,
}

/// Request body for applying a scenario.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyRequest {
    pub scenario_id: String,
    pub generated_at: Timestamp,
    pub actions: Vec<ActionRequest>,
}

/// Response body for an accepted scenario.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyResponse {
    pub status: &'static str,
    pub scenario_id: ScenarioId,
}

/// Response body for scenario status.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub scenario_id: ScenarioId,
    pub status: ScenarioStatus,
    pub actions_completed: usize,
    pub total_actions: usize,
}

/// `POST /iot/optimization/apply`
///
/// Stores the scenario (last write wins on id reuse) and hands it to the
/// demo engine, which records it without executing anything.
pub async fn apply(
    State(state): State<AppState>,
    Json(req): Json<ApplyRequest>,
) -> Result<Json<ApplyResponse>, ApiError> {
    let scenario_id = ScenarioId::from_str(&req.scenario_id)?;

    let mut actions = Vec::with_capacity(req.actions.len());
    for action in req.actions {
        let device_id = DeviceId::from_str(&action.device_id)?;
        if action.command.trim().is_empty() {
            return Err(ValidationError::EmptyCommand.into());
        }
        actions.push(OptimizationAction {
            device_id,
            command: action.command,
            params: action.params,
            execute_at: action.execute_at,
        });
    }

    let scenario = state
        .store
        .save_optimization(scenario_id, req.generated_at, actions)
        .await;
    let accepted_id = scenario.scenario_id.clone();
    state.engine.apply(scenario).await;

    Ok(Json(ApplyResponse {
        status: "accepted",
        scenario_id: accepted_id,
    }))
}

/// `GET /iot/optimization/{scenario_id}/status`
pub async fn status(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StatusResponse>, ApiError> {
    let scenario_id = ScenarioId::from_str(&id)?;
    let scenario = state
        .store
        .get_optimization(&scenario_id)
        .await
        .ok_or(NotFoundError {
            entity: "Scenario",
            id,
        })?;

    Ok(Json(StatusResponse {
        scenario_id: scenario.scenario_id,
        status: scenario.status,
        actions_completed: scenario.actions_completed,
        total_actions: scenario.total_actions,
    }))
}
