//! Typed identifier newtypes for caller-assigned string keys.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

macro_rules! define_key {
    ($(#[doc = $doc:expr])* $name:ident, $empty:expr) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Access the raw string key.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if s.trim().is_empty() {
                    Err($empty)
                } else {
                    Ok(Self(s.to_owned()))
                }
            }
        }
    };
}

define_key!(
    /// Unique identifier for a [`Device`](crate::device::Device).
    ///
    /// Caller-assigned and immutable after registration. Telemetry and
    /// command logs are keyed by this id even before the device exists.
    DeviceId,
    ValidationError::EmptyDeviceId
);

define_key!(
    /// Unique identifier for an
    /// [`OptimizationScenario`](crate::optimization::OptimizationScenario).
    ///
    /// Caller-supplied; resubmitting the same id overwrites (last write wins).
    ScenarioId,
    ValidationError::EmptyScenarioId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_non_empty_device_id() {
        let id: DeviceId = "dev-1".parse().unwrap();
        assert_eq!(id.as_str(), "dev-1");
    }

    #[test]
    fn should_reject_empty_device_id() {
        let result = DeviceId::from_str("");
        assert_eq!(result.unwrap_err(), ValidationError::EmptyDeviceId);
    }

    #[test]
    fn should_reject_whitespace_only_device_id() {
        let result = DeviceId::from_str("   ");
        assert_eq!(result.unwrap_err(), ValidationError::EmptyDeviceId);
    }

    #[test]
    fn should_reject_empty_scenario_id() {
        let result = ScenarioId::from_str("");
        assert_eq!(result.unwrap_err(), ValidationError::EmptyScenarioId);
    }

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id: DeviceId = "hvac-unit-42".parse().unwrap();
        let text = id.to_string();
        let parsed: DeviceId = text.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_serialize_as_plain_string() {
        let id: ScenarioId = "s1".parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"s1\"");
        let parsed: ScenarioId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }
}
