//! JSON handlers for the live telemetry snapshot.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use fleethub_domain::error::NotFoundError;
use fleethub_domain::id::DeviceId;
use fleethub_domain::telemetry::Metrics;
use fleethub_domain::time::{self, Timestamp};

use crate::error::ApiError;
use crate::state::AppState;

/// Latest known metrics for one device.
#[derive(Serialize)]
pub struct LiveStateDevice {
    pub id: DeviceId,
    pub metrics: Metrics,
}

/// Snapshot of all devices with known telemetry.
#[derive(Serialize)]
pub struct LiveStateResponse {
    pub timestamp: Timestamp,
    pub devices: Vec<LiveStateDevice>,
}

/// `GET /iot/state/live`
pub async fn live_all(State(state): State<AppState>) -> Json<LiveStateResponse> {
    let devices = state
        .store
        .live_state_all()
        .await
        .into_iter()
        .map(|(id, metrics)| LiveStateDevice { id, metrics })
        .collect();
    Json(LiveStateResponse {
        timestamp: time::now(),
        devices,
    })
}

/// `GET /iot/state/{device_id}`
///
/// 404 covers both an unknown device and one that has not reported yet —
/// the store does not distinguish the two.
pub async fn live_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LiveStateDevice>, ApiError> {
    let device_id = DeviceId::from_str(&id)?;
    let (id, metrics) = state
        .store
        .live_state_one(&device_id)
        .await
        .ok_or(NotFoundError {
            entity: "Device state",
            id,
        })?;
    Ok(Json(LiveStateDevice { id, metrics }))
}
