//! Device — a registered fleet entity identified by a caller-chosen id.

use serde::{Deserialize, Serialize};

use crate::id::DeviceId;
use crate::telemetry::Metrics;
use crate::time::Timestamp;

/// Connectivity status of a device.
///
/// Derived, never set directly by callers: registration starts a device
/// `online` and telemetry ingestion forces it back `online`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatus {
    #[default]
    Online,
    Offline,
}

impl std::fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Online => f.write_str("online"),
            Self::Offline => f.write_str("offline"),
        }
    }
}

/// A registered fleet device and its live snapshot.
///
/// `last_seen` and `last_telemetry` start empty and are refreshed by
/// telemetry ingestion; devices are never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: DeviceId,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    pub capabilities: Vec<String>,
    pub model: Option<String>,
    pub status: DeviceStatus,
    pub last_seen: Option<Timestamp>,
    pub last_telemetry: Option<Metrics>,
}

impl Device {
    /// A freshly registered device: online, nothing reported yet.
    #[must_use]
    pub fn new(
        id: DeviceId,
        kind: impl Into<String>,
        location: impl Into<String>,
        capabilities: Vec<String>,
    ) -> Self {
        Self {
            id,
            kind: kind.into(),
            location: location.into(),
            capabilities,
            model: None,
            status: DeviceStatus::Online,
            last_seen: None,
            last_telemetry: None,
        }
    }
}
