//! JSON handlers for telemetry ingestion and history queries.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use fleethub_domain::error::{InvalidRangeError, ValidationError};
use fleethub_domain::id::DeviceId;
use fleethub_domain::telemetry::{Metrics, TelemetrySample};
use fleethub_domain::time::{self, Timestamp};

use crate::error::ApiError;
use crate::state::AppState;

/// A single telemetry reading submitted by or for a device.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryPacket {
    pub device_id: String,
    pub timestamp: Timestamp,
    pub metrics: Metrics,
}

/// Response body for single-sample ingestion.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestResponse {
    pub status: &'static str,
    pub received_at: Timestamp,
}

/// Request body for bulk ingestion.
#[derive(Deserialize)]
pub struct BulkRequest {
    pub batch: Vec<TelemetryPacket>,
}

/// Response body for bulk ingestion.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkResponse {
    pub status: &'static str,
    pub items_processed: usize,
}

/// Query parameters for the history endpoint.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryQuery {
    pub device_id: String,
    /// Start of the time range (RFC 3339, inclusive).
    pub from: String,
    /// End of the time range (RFC 3339, inclusive).
    pub to: String,
}

/// Response body for history queries.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryResponse {
    pub device_id: DeviceId,
    pub time_range: TimeRange,
    pub telemetry: Vec<TelemetrySample>,
}

/// Inclusive query range echoed back to the caller.
#[derive(Serialize)]
pub struct TimeRange {
    pub from: Timestamp,
    pub to: Timestamp,
}

/// Parse an RFC 3339 timestamp, mapping failures to a validation error.
fn parse_timestamp(value: &str) -> Result<Timestamp, ApiError> {
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.to_utc())
        .map_err(|_| ApiError::from(ValidationError::InvalidTimestamp(value.to_owned())))
}

/// `POST /iot/telemetry`
pub async fn ingest(
    State(state): State<AppState>,
    Json(packet): Json<TelemetryPacket>,
) -> Result<Json<IngestResponse>, ApiError> {
    let device_id = DeviceId::from_str(&packet.device_id)?;
    state
        .store
        .save_telemetry(&device_id, packet.timestamp, packet.metrics)
        .await;
    Ok(Json(IngestResponse {
        status: "ok",
        received_at: time::now(),
    }))
}

/// `POST /iot/telemetry/bulk`
///
/// The whole batch is validated up front, then ingested in submission order,
/// one store call per item.
pub async fn ingest_bulk(
    State(state): State<AppState>,
    Json(req): Json<BulkRequest>,
) -> Result<Json<BulkResponse>, ApiError> {
    let mut batch = Vec::with_capacity(req.batch.len());
    for packet in req.batch {
        let device_id = DeviceId::from_str(&packet.device_id)?;
        batch.push((device_id, packet.timestamp, packet.metrics));
    }

    let items_processed = batch.len();
    for (device_id, timestamp, metrics) in batch {
        state
            .store
            .save_telemetry(&device_id, timestamp, metrics)
            .await;
    }

    Ok(Json(BulkResponse {
        status: "ok",
        items_processed,
    }))
}

/// `GET /iot/telemetry/history?deviceId=&from=&to=`
pub async fn history(
    State(state): State<AppState>,
    Query(params): Query<HistoryQuery>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let device_id = DeviceId::from_str(&params.device_id)?;
    let from = parse_timestamp(&params.from)?;
    let to = parse_timestamp(&params.to)?;
    if from > to {
        return Err(InvalidRangeError { from, to }.into());
    }

    let telemetry = state.store.telemetry_history(&device_id, from, to).await;
    Ok(Json(HistoryResponse {
        device_id,
        time_range: TimeRange { from, to },
        telemetry,
    }))
}
