//! Uplink frame decoding.
//!
//! The frame decoder follows a layered structure:
//! - `layout`: byte offsets, masks and frame lengths (source of truth)
//! - `reader`: safe byte access and the device's numeric conventions
//! - `parser`: typed frame bodies (no direct byte indexing)
//! - `tables`: message type codes and fixed code descriptions
//! - `error`: explicit, actionable errors
//!
//! Byte 0 selects the message type, byte 1 carries status bits, and the rest
//! is a fixed layout per type. A payload shorter than its type's layout is
//! rejected rather than partially decoded.

mod convert;
pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;
pub mod tables;

pub use error::FrameError;
pub use parser::{
    Frame, FrameBody, FrameStatus, InternalThresholds, NetworkConfig, ProductConfig,
    SensorReading, SensorSample, Thresholds, Uplink, parse_frame,
};
pub use tables::MessageType;
