//! JSON API handler modules.

pub mod device_control;
pub mod devices;
pub mod live_state;
pub mod optimization;
pub mod telemetry;

use axum::Router;
use axum::routing::{get, post};

use crate::state::AppState;

/// Build the `/iot` sub-router.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Telemetry
        .route("/telemetry", post(telemetry::ingest))
        .route("/telemetry/bulk", post(telemetry::ingest_bulk))
        .route("/telemetry/history", get(telemetry::history))
        // Devices
        .route("/devices/register", post(devices::register))
        .route("/devices", get(devices::list))
        .route("/devices/{device_id}", get(devices::get))
        // Device control
        .route(
            "/device-control/{device_id}/command",
            post(device_control::send_command),
        )
        .route(
            "/device-control/{device_id}/commands",
            get(device_control::history),
        )
        // Optimization
        .route("/optimization/apply", post(optimization::apply))
        .route("/optimization/{scenario_id}/status", get(optimization::status))
        // Live state
        .route("/state/live", get(live_state::live_all))
        .route("/state/{device_id}", get(live_state::live_one))
}
