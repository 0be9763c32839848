use crate::frame::{Frame, FrameBody, FrameStatus, MessageType, SensorReading, Thresholds, Uplink};
use crate::{Entry, Metadata, Value};

pub(crate) fn frame_entries(frame: &Frame, metadata: &Metadata) -> Vec<Entry> {
    match frame {
        Frame::Reply => vec![Entry::new("messageType", MessageType::ReplyFrame.name())],
        Frame::Uplink(uplink) => uplink_entries(uplink, metadata),
    }
}

fn uplink_entries(uplink: &Uplink, metadata: &Metadata) -> Vec<Entry> {
    let mut entries = metadata_entries(metadata);
    entries.push(Entry::new(
        "messageType",
        uplink.message_type.map(MessageType::name),
    ));
    add_status(&mut entries, &uplink.status);

    match &uplink.body {
        Some(FrameBody::ProductConfig(config)) => {
            entries.extend([
                Entry::new("keepAlivePeriodicty", config.keep_alive_minutes),
                Entry::new("transmissionPeriodicity", config.transmission_minutes),
                Entry::new("idInternalSensor", config.internal_sensor_id),
                Entry::new("thresholdsInternalSensor", config.internal_thresholds),
                Entry::new("idExternalSensor", config.external_sensor_id),
                Entry::new("thresholdsExternalSensor", config.external_thresholds),
                Entry::new("productMode", config.product_mode_label()),
                Entry::new("isExternalSensorPresent", config.external_sensor_label()),
                Entry::new("acquisitionPeriodicity", config.acquisition_minutes),
            ]);
        }
        Some(FrameBody::InternalThresholds(internal)) => {
            add_thresholds(&mut entries, &internal.thresholds, "Internal");
            entries.push(Entry::new("superSamplingFactor", internal.super_sampling));
        }
        Some(FrameBody::ExternalThresholds(thresholds)) => {
            add_thresholds(&mut entries, thresholds, "External");
        }
        Some(FrameBody::NetworkConfig(config)) => {
            entries.push(Entry::new("repetitions", config.repetitions));
        }
        Some(FrameBody::KeepAlive(reading)) | Some(FrameBody::DataFrame(reading)) => {
            add_reading(&mut entries, reading);
        }
        None => {}
    }

    entries
}

fn metadata_entries(metadata: &Metadata) -> Vec<Entry> {
    vec![
        Entry::new("snr", metadata.snr.clone()),
        Entry::new("station", metadata.station.clone()),
        Entry::new("avgSnr", metadata.avg_snr.clone()),
        Entry::new("rssi", metadata.rssi.clone()),
        Entry::new("seqNumber", metadata.seq_number.clone()),
    ]
}

fn add_status(entries: &mut Vec<Entry>, status: &FrameStatus) {
    entries.extend([
        Entry::new("frameCounter", status.frame_counter),
        Entry::new("hwError", flag(status.hw_error)),
        Entry::new("lowBattery", flag(status.low_battery)),
        Entry::new("configBit", flag(status.config_changed)),
    ]);
}

fn add_thresholds(entries: &mut Vec<Entry>, thresholds: &Thresholds, sensor: &str) {
    entries.extend([
        Entry::new(format!("highTh{sensor}Temp"), thresholds.high),
        Entry::new(
            format!("hysteresisHighTh{sensor}Temp"),
            thresholds.high_hysteresis,
        ),
        Entry::new(format!("lowTh{sensor}Temp"), thresholds.low),
        Entry::new(
            format!("hysteresisLowTh{sensor}Temp"),
            thresholds.low_hysteresis,
        ),
    ]);
}

fn add_reading(entries: &mut Vec<Entry>, reading: &SensorReading) {
    entries.extend([
        Entry::new("isInternalSensorPresent", reading.internal_presence_label()),
        Entry::new("idInternalSensor", reading.internal.id),
        Entry::new("internalTemp", reading.internal.temperature),
        Entry::new("isExternalSensorPresent", reading.external_presence_label()),
        Entry::new("idExternalSensor", reading.external.id),
        Entry::new("externalTemp", reading.external.temperature),
    ]);
}

fn flag(set: bool) -> Value {
    Value::Integer(i64::from(set))
}
