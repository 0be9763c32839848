//! Fixed code tables shared by every decode.

use serde::{Deserialize, Serialize};

/// Uplink message type carried in byte 0.
///
/// # Examples
/// ```
/// use sigtemp_core::MessageType;
///
/// let kind = MessageType::from_code(43).unwrap();
/// assert_eq!(kind, MessageType::DataFrame);
/// assert_eq!(kind.name(), "data frame");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    /// Periodicities, sensor ids and product mode (code 10).
    ProductConfig,
    /// Internal sensor temperature thresholds (code 11).
    InternalThresholds,
    /// External sensor temperature thresholds (code 12).
    ExternalThresholds,
    /// Radio repetition count (code 20).
    NetworkConfig,
    /// Periodic liveness frame with a sensor reading (code 30).
    KeepAlive,
    /// Answer to a downlink request (code 31).
    ReplyFrame,
    /// Regular sensor reading (code 43).
    DataFrame,
}

impl MessageType {
    pub const ALL: [MessageType; 7] = [
        MessageType::ProductConfig,
        MessageType::InternalThresholds,
        MessageType::ExternalThresholds,
        MessageType::NetworkConfig,
        MessageType::KeepAlive,
        MessageType::ReplyFrame,
        MessageType::DataFrame,
    ];

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            10 => Some(MessageType::ProductConfig),
            11 => Some(MessageType::InternalThresholds),
            12 => Some(MessageType::ExternalThresholds),
            20 => Some(MessageType::NetworkConfig),
            30 => Some(MessageType::KeepAlive),
            31 => Some(MessageType::ReplyFrame),
            43 => Some(MessageType::DataFrame),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            MessageType::ProductConfig => 10,
            MessageType::InternalThresholds => 11,
            MessageType::ExternalThresholds => 12,
            MessageType::NetworkConfig => 20,
            MessageType::KeepAlive => 30,
            MessageType::ReplyFrame => 31,
            MessageType::DataFrame => 43,
        }
    }

    /// Symbolic name reported in the `messageType` entry.
    pub fn name(self) -> &'static str {
        match self {
            MessageType::ProductConfig
            | MessageType::InternalThresholds
            | MessageType::ExternalThresholds => "info product config",
            MessageType::NetworkConfig => "info network config",
            MessageType::KeepAlive => "keep alive",
            MessageType::ReplyFrame => "reply frame",
            MessageType::DataFrame => "data frame",
        }
    }
}

pub const INTERNAL_SENSOR_PRESENCE: &[(u8, &str)] =
    &[(0, "unknown/absent/error"), (1, "B57863S0321F040")];

pub const EXTERNAL_SENSOR_PRESENCE: &[(u8, &str)] =
    &[(0, "disabled"), (1, "unknown"), (2, "FANB57863-400-1")];

pub const PRODUCT_MODES: &[(u8, &str)] =
    &[(0, "park"), (1, "production"), (2, "test"), (3, "reply")];

/// Look up a code in one of the fixed tables.
pub fn describe(table: &'static [(u8, &'static str)], code: u8) -> Option<&'static str> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|(_, label)| *label)
}
