//! Telemetry — timestamped metric readings reported by devices.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::time::Timestamp;

/// A single typed metric value.
///
/// Serialized untagged so callers can report arbitrary JSON scalars;
/// arrays and objects fall through to the [`Json`](Self::Json) arm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Json(serde_json::Value),
}

/// Metric name → value mapping carried by one sample.
pub type Metrics = HashMap<String, MetricValue>;

/// One timestamped metrics reading for a device.
///
/// Samples are append-only and kept in insertion order; caller-supplied
/// timestamps may arrive out of order and are not reordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySample {
    pub timestamp: Timestamp,
    pub metrics: Metrics,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_float_variant_as_number() {
        let val = MetricValue::Float(21.5);
        let json = serde_json::to_string(&val).unwrap();
        assert_eq!(json, "21.5");
    }

    #[test]
    fn should_serialize_bool_variant() {
        let val = MetricValue::Bool(true);
        let json = serde_json::to_string(&val).unwrap();
        assert_eq!(json, "true");
    }

    #[test]
    fn should_serialize_null_variant() {
        let val = MetricValue::Null;
        let json = serde_json::to_string(&val).unwrap();
        assert_eq!(json, "null");
    }

    #[test]
    fn should_deserialize_integer_as_int_variant() {
        let val: MetricValue = serde_json::from_str("42").unwrap();
        assert_eq!(val, MetricValue::Int(42));
    }

    #[test]
    fn should_deserialize_fraction_as_float_variant() {
        let val: MetricValue = serde_json::from_str("21.5").unwrap();
        assert_eq!(val, MetricValue::Float(21.5));
    }

    #[test]
    fn should_deserialize_object_as_json_variant() {
        let val: MetricValue = serde_json::from_str(r#"{"phase": "a"}"#).unwrap();
        assert!(matches!(val, MetricValue::Json(_)));
    }

    #[test]
    fn should_deserialize_array_as_json_variant() {
        let val: MetricValue = serde_json::from_str("[1, 2, 3]").unwrap();
        assert!(matches!(val, MetricValue::Json(_)));
    }

    #[test]
    fn should_roundtrip_sample_through_serde_json() {
        let mut metrics = Metrics::new();
        metrics.insert("temp".to_owned(), MetricValue::Float(21.5));
        metrics.insert("online".to_owned(), MetricValue::Bool(true));
        let sample = TelemetrySample {
            timestamp: crate::time::now(),
            metrics,
        };

        let json = serde_json::to_string(&sample).unwrap();
        let parsed: TelemetrySample = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample);
    }
}
