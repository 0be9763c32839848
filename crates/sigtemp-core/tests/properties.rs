use sigtemp_core::{DecodeRequest, Entry, Metadata, Value, decode, decode_request, decode_with};

fn value_of(entries: &[Entry], key: &str) -> Value {
    entries
        .iter()
        .find(|entry| entry.key == key)
        .map(|entry| entry.value.clone())
        .unwrap_or_else(|| panic!("missing entry {key}"))
}

fn reading_payload(code: &str, internal: u16, external: u16) -> String {
    format!("{code}0011{internal:04X}02{external:04X}")
}

#[test]
fn zero_temperature_fields_decode_to_zero() {
    for code in ["2B", "1E"] {
        let entries = decode(&reading_payload(code, 0, 0), &Metadata::default()).unwrap();
        assert_eq!(value_of(&entries, "internalTemp"), Value::Float(0.0));
        assert_eq!(value_of(&entries, "externalTemp"), Value::Float(0.0));
    }
}

#[test]
fn sign_bit_values_decode_negative() {
    for raw in [0x8000u16, 0x8001, 0xC000, 0xFF9C, 0xFFF6, 0xFFFF] {
        let entries = decode(&reading_payload("2B", raw, raw), &Metadata::default()).unwrap();
        let expected = ((i32::from(raw) - 65536) as f64 / 10.0 * 10.0).round() / 10.0;
        assert!(expected < 0.0);
        assert_eq!(value_of(&entries, "internalTemp"), Value::Float(expected));
        assert_eq!(value_of(&entries, "externalTemp"), Value::Float(expected));
    }
}

#[test]
fn ff9c_is_minus_ten_degrees() {
    let entries = decode(&reading_payload("2B", 0xFF9C, 0x0064), &Metadata::default()).unwrap();
    assert_eq!(value_of(&entries, "internalTemp"), Value::Float(-10.0));
    assert_eq!(value_of(&entries, "externalTemp"), Value::Float(10.0));
}

#[test]
fn positive_values_below_sign_bit_stay_positive() {
    let entries = decode(&reading_payload("2B", 0x7FFF, 0x0001), &Metadata::default()).unwrap();
    assert_eq!(value_of(&entries, "internalTemp"), Value::Float(3276.7));
    assert_eq!(value_of(&entries, "externalTemp"), Value::Float(0.1));
}

#[test]
fn reply_frame_yields_only_message_type() {
    for payload in ["1F", "1F00", "1fffffffff"] {
        let entries = decode(payload, &Metadata::default()).unwrap();
        assert_eq!(entries, vec![Entry::new("messageType", "reply frame")]);
    }
}

#[test]
fn keep_alive_periodicity_in_minutes() {
    let entries = decode("0A00060C1003200101020A", &Metadata::default()).unwrap();
    assert_eq!(value_of(&entries, "keepAlivePeriodicty"), Value::Float(1.0));
    assert_eq!(
        value_of(&entries, "transmissionPeriodicity"),
        Value::Float(2.0)
    );
}

#[test]
fn internal_sensor_id_and_presence() {
    let entries = decode("2B001100FA22FF9C", &Metadata::default()).unwrap();
    assert_eq!(value_of(&entries, "idInternalSensor"), Value::Integer(1));
    assert_eq!(
        value_of(&entries, "isInternalSensorPresent"),
        Value::Text("B57863S0321F040".to_string())
    );
}

#[test]
fn decoding_is_idempotent() {
    let request: DecodeRequest = serde_json::from_value(serde_json::json!({
        "data": "2BA31100FA22FF9C",
        "custom": {"snr": "12.34", "station": "1A2B", "avgSnr": "30.50", "rssi": "-120.00", "seqNumber": 42}
    }))
    .unwrap();
    let first = decode_request(&request).unwrap();
    let second = decode_request(&request).unwrap();
    assert_eq!(first, second);
}

#[test]
fn unknown_type_yields_preamble_with_absent_type() {
    let entries = decode("FF21", &Metadata::default()).unwrap();
    let keys: Vec<_> = entries.iter().map(|entry| entry.key.as_str()).collect();
    assert_eq!(
        keys,
        [
            "snr",
            "station",
            "avgSnr",
            "rssi",
            "seqNumber",
            "messageType",
            "frameCounter",
            "hwError",
            "lowBattery",
            "configBit",
        ]
    );
    assert_eq!(value_of(&entries, "messageType"), Value::Absent);
}

#[test]
fn legacy_hex_codes_are_not_message_types() {
    // 0x43 is not 43; byte 0 is classified as an integer.
    let entries = decode("43001100FA22FF9C", &Metadata::default()).unwrap();
    assert_eq!(entries.len(), 10);
    assert_eq!(value_of(&entries, "messageType"), Value::Absent);
}

#[test]
fn completion_runs_once_with_result() {
    let request = DecodeRequest {
        data: "2B00".to_string(),
        ..Default::default()
    };
    let mut calls = 0;
    let failed = decode_with(&request, |result| {
        calls += 1;
        result.is_err()
    });
    assert!(failed);
    assert_eq!(calls, 1);
}
