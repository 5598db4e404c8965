//! JSON handlers for device registration and lookup.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};

use fleethub_domain::device::{Device, DeviceStatus};
use fleethub_domain::error::{NotFoundError, ValidationError};
use fleethub_domain::id::DeviceId;
use fleethub_domain::telemetry::Metrics;
use fleethub_domain::time::Timestamp;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for registering a device.
#[derive(Deserialize)]
pub struct RegisterRequest {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    #[serde(default)]
    pub capabilities: Vec<String>,
}

/// Response body for registration.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub status: &'static str,
    pub device_id: DeviceId,
}

/// Summary row in the device list.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceListItem {
    pub id: DeviceId,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    pub status: DeviceStatus,
    pub last_seen: Option<Timestamp>,
}

impl From<Device> for DeviceListItem {
    fn from(device: Device) -> Self {
        Self {
            id: device.id,
            kind: device.kind,
            location: device.location,
            status: device.status,
            last_seen: device.last_seen,
        }
    }
}

/// Response body for the device list.
#[derive(Serialize)]
pub struct DeviceListResponse {
    pub devices: Vec<DeviceListItem>,
}

/// Full device details.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDetails {
    pub id: DeviceId,
    #[serde(rename = "type")]
    pub kind: String,
    pub model: Option<String>,
    pub status: DeviceStatus,
    pub location: String,
    pub capabilities: Vec<String>,
    pub last_telemetry: Option<Metrics>,
}

impl From<Device> for DeviceDetails {
    fn from(device: Device) -> Self {
        Self {
            id: device.id,
            kind: device.kind,
            model: device.model,
            status: device.status,
            location: device.location,
            capabilities: device.capabilities,
            last_telemetry: device.last_telemetry,
        }
    }
}

/// `POST /iot/devices/register`
///
/// Re-registering an existing id is an idempotent overwrite, not an error.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, ApiError> {
    let id = DeviceId::from_str(&req.id)?;
    if req.kind.trim().is_empty() {
        return Err(ValidationError::EmptyDeviceType.into());
    }
    if req.location.trim().is_empty() {
        return Err(ValidationError::EmptyDeviceLocation.into());
    }

    let device = state
        .store
        .register_device(id, req.kind, req.location, req.capabilities)
        .await;
    Ok(Json(RegisterResponse {
        status: "registered",
        device_id: device.id,
    }))
}

/// `GET /iot/devices`
pub async fn list(State(state): State<AppState>) -> Json<DeviceListResponse> {
    let devices = state
        .store
        .list_devices()
        .await
        .into_iter()
        .map(DeviceListItem::from)
        .collect();
    Json(DeviceListResponse { devices })
}

/// `GET /iot/devices/{device_id}`
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeviceDetails>, ApiError> {
    let device_id = DeviceId::from_str(&id)?;
    let device = state
        .store
        .get_device(&device_id)
        .await
        .ok_or(NotFoundError {
            entity: "Device",
            id,
        })?;
    Ok(Json(DeviceDetails::from(device)))
}
