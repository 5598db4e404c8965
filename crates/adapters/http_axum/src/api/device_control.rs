//! JSON handlers for issuing device commands and reading command history.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};

use fleethub_domain::command::{CommandId, CommandLogEntry, CommandParams, CommandStatus};
use fleethub_domain::error::{NotFoundError, ValidationError};
use fleethub_domain::id::DeviceId;
use fleethub_domain::time::Timestamp;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for sending a command.
#[derive(Deserialize)]
pub struct CommandRequest {
    pub command: String,
    #[serde(default)]
    pub params: CommandParams,
}

/// Response body for a sent command.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResponse {
    pub status: &'static str,
    pub device_id: DeviceId,
    pub command_id: CommandId,
}

/// One row of a device's command history.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandLogItem {
    pub command_id: CommandId,
    pub command: String,
    pub status: CommandStatus,
    pub sent_at: Timestamp,
    pub executed_at: Option<Timestamp>,
}

impl From<CommandLogEntry> for CommandLogItem {
    fn from(entry: CommandLogEntry) -> Self {
        Self {
            command_id: entry.command_id,
            command: entry.command,
            status: entry.status,
            sent_at: entry.sent_at,
            executed_at: entry.executed_at,
        }
    }
}

/// Response body for command history.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandHistoryResponse {
    pub device_id: DeviceId,
    pub commands: Vec<CommandLogItem>,
}

/// `POST /iot/device-control/{device_id}/command`
///
/// The command is marked executed synchronously within the same request —
/// demo behavior, there is no real dispatch to the device.
pub async fn send_command(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<CommandRequest>,
) -> Result<Json<CommandResponse>, ApiError> {
    let device_id = DeviceId::from_str(&id)?;
    if req.command.trim().is_empty() {
        return Err(ValidationError::EmptyCommand.into());
    }
    if state.store.get_device(&device_id).await.is_none() {
        return Err(NotFoundError {
            entity: "Device",
            id,
        }
        .into());
    }

    let entry = state
        .store
        .add_command(&device_id, req.command, req.params)
        .await;
    state
        .store
        .mark_command_executed(&device_id, entry.command_id)
        .await;

    Ok(Json(CommandResponse {
        status: "sent",
        device_id,
        command_id: entry.command_id,
    }))
}

/// `GET /iot/device-control/{device_id}/commands`
pub async fn history(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CommandHistoryResponse>, ApiError> {
    let device_id = DeviceId::from_str(&id)?;
    if state.store.get_device(&device_id).await.is_none() {
        return Err(NotFoundError {
            entity: "Device",
            id,
        }
        .into());
    }

    let commands = state
        .store
        .command_history(&device_id)
        .await
        .into_iter()
        .map(CommandLogItem::from)
        .collect();
    Ok(Json(CommandHistoryResponse {
        device_id,
        commands,
    }))
}
