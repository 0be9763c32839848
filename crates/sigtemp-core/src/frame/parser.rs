use super::error::FrameError;
use super::layout;
use super::reader::FrameReader;
use super::tables::{
    EXTERNAL_SENSOR_PRESENCE, INTERNAL_SENSOR_PRESENCE, MessageType, PRODUCT_MODES, describe,
};

/// Decoded uplink frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    /// Reply to a downlink; its content depends on the request and is not decoded.
    Reply,
    Uplink(Uplink),
}

/// Frame with a status byte and, for known types, a typed body.
#[derive(Debug, Clone, PartialEq)]
pub struct Uplink {
    /// Raw byte 0.
    pub code: u8,
    pub message_type: Option<MessageType>,
    pub status: FrameStatus,
    /// `None` when the code is not in the message type table.
    pub body: Option<FrameBody>,
}

/// Status bits carried in byte 1 of every non-reply frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStatus {
    /// Rolling 3-bit counter.
    pub frame_counter: u8,
    pub hw_error: bool,
    pub low_battery: bool,
    pub config_changed: bool,
}

impl FrameStatus {
    pub fn from_byte(byte: u8) -> Self {
        Self {
            frame_counter: byte >> layout::FRAME_COUNTER_SHIFT,
            hw_error: (byte & layout::HW_ERROR_MASK) >> layout::HW_ERROR_SHIFT == 1,
            low_battery: (byte & layout::LOW_BATTERY_MASK) >> layout::LOW_BATTERY_SHIFT == 1,
            config_changed: byte & layout::CONFIG_MASK == 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FrameBody {
    ProductConfig(ProductConfig),
    InternalThresholds(InternalThresholds),
    ExternalThresholds(Thresholds),
    NetworkConfig(NetworkConfig),
    KeepAlive(SensorReading),
    DataFrame(SensorReading),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductConfig {
    pub keep_alive_minutes: f64,
    pub transmission_minutes: f64,
    pub internal_sensor_id: u8,
    pub internal_thresholds: u8,
    pub external_sensor_id: u8,
    pub external_thresholds: u8,
    pub product_mode: u8,
    pub external_sensor_presence: u8,
    pub acquisition_minutes: u8,
}

impl ProductConfig {
    pub fn product_mode_label(&self) -> Option<&'static str> {
        describe(PRODUCT_MODES, self.product_mode)
    }

    pub fn external_sensor_label(&self) -> Option<&'static str> {
        describe(EXTERNAL_SENSOR_PRESENCE, self.external_sensor_presence)
    }
}

/// High/low temperature thresholds with their hysteresis, in degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct Thresholds {
    pub high: f64,
    pub high_hysteresis: f64,
    pub low: f64,
    pub low_hysteresis: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InternalThresholds {
    pub thresholds: Thresholds,
    pub super_sampling: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkConfig {
    pub repetitions: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SensorSample {
    pub id: u8,
    /// Presence code; see the sensor presence tables.
    pub presence: u8,
    /// Degrees, one decimal.
    pub temperature: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SensorReading {
    pub internal: SensorSample,
    pub external: SensorSample,
}

impl SensorReading {
    pub fn internal_presence_label(&self) -> Option<&'static str> {
        describe(INTERNAL_SENSOR_PRESENCE, self.internal.presence)
    }

    pub fn external_presence_label(&self) -> Option<&'static str> {
        describe(EXTERNAL_SENSOR_PRESENCE, self.external.presence)
    }
}

/// Parse raw payload bytes into a typed frame.
///
/// Byte 0 is classified once as an integer. Reply frames stop after the
/// header; unknown codes still decode the status byte but carry no body.
///
/// # Examples
/// ```
/// use sigtemp_core::{Frame, FrameBody, parse_frame};
///
/// let frame = parse_frame(&[0x14, 0x00, 0x02]).unwrap();
/// let Frame::Uplink(uplink) = frame else { panic!("expected uplink") };
/// assert!(matches!(uplink.body, Some(FrameBody::NetworkConfig(cfg)) if cfg.repetitions == 2));
/// ```
pub fn parse_frame(payload: &[u8]) -> Result<Frame, FrameError> {
    let reader = FrameReader::new(payload);
    let code = reader.read_u8(layout::CODE_OFFSET)?;
    let message_type = MessageType::from_code(code);
    if message_type == Some(MessageType::ReplyFrame) {
        return Ok(Frame::Reply);
    }

    reader.require_len(layout::HEADER_LEN)?;
    let status = FrameStatus::from_byte(reader.read_u8(layout::STATUS_OFFSET)?);
    let body = match message_type {
        Some(kind) => parse_body(kind, &reader)?,
        None => None,
    };

    Ok(Frame::Uplink(Uplink {
        code,
        message_type,
        status,
        body,
    }))
}

fn parse_body(
    kind: MessageType,
    reader: &FrameReader<'_>,
) -> Result<Option<FrameBody>, FrameError> {
    let body = match kind {
        MessageType::ProductConfig => FrameBody::ProductConfig(parse_product_config(reader)?),
        MessageType::InternalThresholds => {
            reader.require_len(layout::thresholds::INTERNAL_LEN)?;
            FrameBody::InternalThresholds(InternalThresholds {
                thresholds: parse_thresholds(reader)?,
                super_sampling: reader.read_u8(layout::thresholds::SUPER_SAMPLING_OFFSET)?,
            })
        }
        MessageType::ExternalThresholds => {
            reader.require_len(layout::thresholds::EXTERNAL_LEN)?;
            FrameBody::ExternalThresholds(parse_thresholds(reader)?)
        }
        MessageType::NetworkConfig => {
            reader.require_len(layout::network_config::LEN)?;
            FrameBody::NetworkConfig(NetworkConfig {
                repetitions: reader.read_u8(layout::network_config::REPETITIONS_OFFSET)?,
            })
        }
        MessageType::KeepAlive => FrameBody::KeepAlive(parse_reading(reader)?),
        MessageType::DataFrame => FrameBody::DataFrame(parse_reading(reader)?),
        MessageType::ReplyFrame => return Ok(None),
    };
    Ok(Some(body))
}

fn parse_product_config(reader: &FrameReader<'_>) -> Result<ProductConfig, FrameError> {
    use layout::product_config as at;

    reader.require_len(at::LEN)?;
    Ok(ProductConfig {
        keep_alive_minutes: reader.read_periodicity_minutes(at::KEEP_ALIVE_OFFSET)?,
        transmission_minutes: reader.read_periodicity_minutes(at::TRANSMISSION_OFFSET)?,
        internal_sensor_id: reader.read_high_nibble(at::INTERNAL_ID_OFFSET)?,
        internal_thresholds: reader.read_u8(at::INTERNAL_THRESHOLDS_OFFSET)?,
        external_sensor_id: reader.read_high_nibble(at::EXTERNAL_ID_OFFSET)?,
        external_thresholds: reader.read_u8(at::EXTERNAL_THRESHOLDS_OFFSET)?,
        product_mode: reader.read_u8(at::PRODUCT_MODE_OFFSET)?,
        external_sensor_presence: reader.read_u8(at::EXTERNAL_PRESENCE_OFFSET)?,
        acquisition_minutes: reader.read_u8(at::ACQUISITION_OFFSET)?,
    })
}

fn parse_thresholds(reader: &FrameReader<'_>) -> Result<Thresholds, FrameError> {
    use layout::thresholds as at;

    Ok(Thresholds {
        high: reader.read_tenths_i16(at::HIGH_RANGE)?,
        high_hysteresis: reader.read_tenths_u8(at::HIGH_HYSTERESIS_OFFSET)?,
        low: reader.read_tenths_i16(at::LOW_RANGE)?,
        low_hysteresis: reader.read_tenths_u8(at::LOW_HYSTERESIS_OFFSET)?,
    })
}

fn parse_reading(reader: &FrameReader<'_>) -> Result<SensorReading, FrameError> {
    use layout::reading as at;

    reader.require_len(at::LEN)?;
    Ok(SensorReading {
        internal: SensorSample {
            id: reader.read_high_nibble(at::INTERNAL_SENSOR_OFFSET)?,
            presence: reader.read_low_nibble(at::INTERNAL_SENSOR_OFFSET)?,
            temperature: reader.read_tenths_i16(at::INTERNAL_TEMP_RANGE)?,
        },
        external: SensorSample {
            id: reader.read_high_nibble(at::EXTERNAL_SENSOR_OFFSET)?,
            presence: reader.read_low_nibble(at::EXTERNAL_SENSOR_OFFSET)?,
            temperature: reader.read_tenths_i16(at::EXTERNAL_TEMP_RANGE)?,
        },
    })
}
