//! Common error types used across the workspace.
//!
//! The store itself never raises domain errors — unknown ids come back as
//! absent results. These types exist for the boundary layer, which turns
//! malformed input into [`ValidationError`], inverted history ranges into
//! [`InvalidRangeError`], and absent store results into [`NotFoundError`].

use crate::time::Timestamp;

/// Shape-level validation failures raised at the HTTP boundary.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("device id must not be empty")]
    EmptyDeviceId,
    #[error("device type must not be empty")]
    EmptyDeviceType,
    #[error("device location must not be empty")]
    EmptyDeviceLocation,
    #[error("command name must not be empty")]
    EmptyCommand,
    #[error("scenario id must not be empty")]
    EmptyScenarioId,
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

/// A lookup that found nothing.
#[derive(Debug, thiserror::Error)]
#[error("{entity} not found: {id}")]
pub struct NotFoundError {
    /// Kind of record that was looked up (for the error message).
    pub entity: &'static str,
    /// The id that missed.
    pub id: String,
}

/// An inverted time range in a history query.
#[derive(Debug, thiserror::Error)]
#[error("'from' ({from}) must not be after 'to' ({to})")]
pub struct InvalidRangeError {
    pub from: Timestamp,
    pub to: Timestamp,
}

/// Top-level error for the workspace.
///
/// Each member is a typed error converted via `#[from]`; the HTTP adapter
/// maps members onto status codes.
#[derive(Debug, thiserror::Error)]
pub enum FleetError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    #[error("invalid range")]
    InvalidRange(#[from] InvalidRangeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_not_found_with_entity_and_id() {
        let err = NotFoundError {
            entity: "Device",
            id: "dev-9".to_owned(),
        };
        assert_eq!(err.to_string(), "Device not found: dev-9");
    }

    #[test]
    fn should_convert_validation_error_into_fleet_error() {
        let err: FleetError = ValidationError::EmptyDeviceId.into();
        assert!(matches!(
            err,
            FleetError::Validation(ValidationError::EmptyDeviceId)
        ));
    }

    #[test]
    fn should_include_timestamp_in_invalid_timestamp_message() {
        let err = ValidationError::InvalidTimestamp("not-a-date".to_owned());
        assert!(err.to_string().contains("not-a-date"));
    }
}
