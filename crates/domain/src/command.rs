//! Command log — records of control commands issued to devices.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::id::DeviceId;
use crate::time::Timestamp;

/// Unique identifier for a [`CommandLogEntry`].
///
/// System-generated, unique across the whole store, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommandId(uuid::Uuid);

impl Default for CommandId {
    fn default() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl CommandId {
    /// Generate a new random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }

    /// Access the inner UUID.
    #[must_use]
    pub fn as_uuid(self) -> uuid::Uuid {
        self.0
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for CommandId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        uuid::Uuid::parse_str(s).map(Self)
    }
}

/// Execution status of a command.
///
/// Transitions are forward-only: `sent` → `executed` or `failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandStatus {
    #[default]
    Sent,
    Executed,
    Failed,
}

impl fmt::Display for CommandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sent => f.write_str("sent"),
            Self::Executed => f.write_str("executed"),
            Self::Failed => f.write_str("failed"),
        }
    }
}

/// Arbitrary command parameters supplied by the caller.
pub type CommandParams = HashMap<String, serde_json::Value>;

/// A record of one control command issued to a device.
///
/// Appended to the per-device log on submission; `executed_at` is set
/// exactly once, on the transition out of `sent`. Entries are never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandLogEntry {
    pub command_id: CommandId,
    pub device_id: DeviceId,
    pub command: String,
    pub params: CommandParams,
    pub status: CommandStatus,
    pub sent_at: Timestamp,
    pub executed_at: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_generate_unique_ids_when_called_twice() {
        let a = CommandId::new();
        let b = CommandId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = CommandId::new();
        let text = id.to_string();
        let parsed: CommandId = text.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_return_error_when_parsing_invalid_uuid() {
        let result = CommandId::from_str("not-a-uuid");
        assert!(result.is_err());
    }

    #[test]
    fn should_default_status_to_sent() {
        assert_eq!(CommandStatus::default(), CommandStatus::Sent);
    }

    #[test]
    fn should_serialize_status_lowercase() {
        let json = serde_json::to_string(&CommandStatus::Executed).unwrap();
        assert_eq!(json, "\"executed\"");
    }

    #[test]
    fn should_serialize_entry_with_camel_case_keys() {
        let entry = CommandLogEntry {
            command_id: CommandId::new(),
            device_id: "dev-1".parse().unwrap(),
            command: "set_power".to_owned(),
            params: CommandParams::new(),
            status: CommandStatus::Sent,
            sent_at: crate::time::now(),
            executed_at: None,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("commandId").is_some());
        assert!(json.get("sentAt").is_some());
        assert_eq!(json["executedAt"], serde_json::Value::Null);
    }
}
