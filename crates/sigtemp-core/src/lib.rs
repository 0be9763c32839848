//! sigtemp core library: uplink payload decoding for a wireless temperature
//! sensor.
//!
//! A payload arrives as a hex string together with radio metadata. The
//! `frame` layer classifies byte 0 into a message type and decodes the fixed
//! per-type layout into typed records (layout/reader/parser); the `decoder`
//! layer turns the typed frame into an ordered list of key/value entries.
//! Decoding is pure: no I/O, no state shared between calls.
//!
//! Invariants:
//! - Entry order is fixed per message type and stable across runs.
//! - 16-bit temperatures use two's complement, scaled to one decimal.
//! - Payloads shorter than their type's layout are rejected.
//!
//! # Examples
//! ```
//! use sigtemp_core::{Metadata, Value, decode};
//!
//! let entries = decode("2BA31100FA22FF9C", &Metadata::default())?;
//! let temp = entries.iter().find(|e| e.key == "externalTemp").unwrap();
//! assert_eq!(temp.value, Value::Float(-10.0));
//! # Ok::<(), sigtemp_core::DecodeError>(())
//! ```

use serde::{Deserialize, Serialize};

mod decoder;
mod frame;

pub use decoder::{DecodeError, decode, decode_payload, decode_request, decode_with};
pub use frame::{
    Frame, FrameBody, FrameError, FrameStatus, InternalThresholds, MessageType, NetworkConfig,
    ProductConfig, SensorReading, SensorSample, Thresholds, Uplink, parse_frame,
};

/// Radio metadata forwarded untouched into the decoded entries.
///
/// Field names follow the network callback (`avgSnr`, `seqNumber`); a missing
/// field is forwarded as JSON `null`.
///
/// # Examples
/// ```
/// use sigtemp_core::Metadata;
///
/// let meta: Metadata = serde_json::from_str(r#"{"snr": "12.34", "seqNumber": 42}"#).unwrap();
/// assert_eq!(meta.seq_number, serde_json::json!(42));
/// assert!(meta.rssi.is_null());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Metadata {
    /// Signal-to-noise ratio of this reception.
    pub snr: serde_json::Value,
    /// Receiving station identifier.
    pub station: serde_json::Value,
    /// Average signal-to-noise ratio.
    pub avg_snr: serde_json::Value,
    /// Received signal strength.
    pub rssi: serde_json::Value,
    /// Network sequence number.
    pub seq_number: serde_json::Value,
}

/// Decode request in the network callback shape: `{"data": ..., "custom": {...}}`.
///
/// # Examples
/// ```
/// use sigtemp_core::DecodeRequest;
///
/// let request: DecodeRequest =
///     serde_json::from_str(r#"{"data": "140002", "custom": {"station": "1A2B"}}"#).unwrap();
/// assert_eq!(request.data, "140002");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecodeRequest {
    /// Hex-encoded payload.
    pub data: String,
    #[serde(default)]
    pub custom: Metadata,
}

/// One decoded `(key, value)` pair.
///
/// # Examples
/// ```
/// use sigtemp_core::{Entry, Value};
///
/// let entry = Entry::new("repetitions", 2u8);
/// assert_eq!(entry.value, Value::Integer(2));
/// assert_eq!(
///     serde_json::to_string(&entry).unwrap(),
///     r#"{"key":"repetitions","value":2}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub key: String,
    pub value: Value,
}

impl Entry {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Decoded value. Serializes as a bare JSON scalar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Lookup miss or missing metadata; serialized as `null`.
    Absent,
    Integer(i64),
    /// Rounded to one decimal by the decoder.
    Float(f64),
    Text(String),
    /// Metadata that is neither a scalar number nor a string.
    Opaque(serde_json::Value),
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<Option<&str>> for Value {
    fn from(value: Option<&str>) -> Self {
        value.map_or(Value::Absent, Value::from)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Absent,
            serde_json::Value::String(text) => Value::Text(text),
            serde_json::Value::Number(number) => match (number.as_i64(), number.as_f64()) {
                (Some(int), _) => Value::Integer(int),
                (None, Some(float)) if number.is_f64() => Value::Float(float),
                _ => Value::Opaque(serde_json::Value::Number(number)),
            },
            other => Value::Opaque(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn metadata_defaults_to_null() {
        let request: DecodeRequest = serde_json::from_str(r#"{"data": "1F"}"#).expect("request");
        assert_eq!(request.custom, Metadata::default());
        assert!(request.custom.snr.is_null());
    }

    #[test]
    fn metadata_uses_callback_field_names() {
        let meta: Metadata = serde_json::from_value(json!({
            "snr": "12.34",
            "station": "1A2B",
            "avgSnr": 30.5,
            "rssi": "-120.00",
            "seqNumber": 42
        }))
        .expect("metadata");
        assert_eq!(meta.avg_snr, json!(30.5));
        assert_eq!(meta.seq_number, json!(42));
    }

    #[test]
    fn value_serializes_as_scalar() {
        let entries = vec![
            Entry::new("a", Value::Absent),
            Entry::new("b", 5u8),
            Entry::new("c", -10.0),
            Entry::new("d", "park"),
        ];
        let value = serde_json::to_value(&entries).expect("entries json");
        assert_eq!(
            value,
            json!([
                {"key": "a", "value": null},
                {"key": "b", "value": 5},
                {"key": "c", "value": -10.0},
                {"key": "d", "value": "park"}
            ])
        );
    }

    #[test]
    fn json_metadata_maps_to_values() {
        assert_eq!(Value::from(json!(null)), Value::Absent);
        assert_eq!(Value::from(json!(42)), Value::Integer(42));
        assert_eq!(Value::from(json!(30.5)), Value::Float(30.5));
        assert_eq!(Value::from(json!("1A2B")), Value::Text("1A2B".to_string()));
        assert_eq!(Value::from(json!(true)), Value::Opaque(json!(true)));
        assert_eq!(Value::from(json!(u64::MAX)), Value::Opaque(json!(u64::MAX)));
    }
}
