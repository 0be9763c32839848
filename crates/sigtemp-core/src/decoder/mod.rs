use thiserror::Error;
use tracing::{debug, trace};

use crate::frame::{Frame, FrameError, parse_frame};
use crate::{DecodeRequest, Entry, Metadata};

mod entries;

use entries::frame_entries;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid hex payload: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error(transparent)]
    Frame(#[from] FrameError),
}

/// Decode a hex payload into a typed frame.
///
/// Surrounding whitespace is ignored; hex digits are case-insensitive.
pub fn decode_payload(payload: &str) -> Result<Frame, DecodeError> {
    let payload = payload.trim();
    trace!(payload, "decoding payload");
    let bytes = hex::decode(payload)?;
    let frame = parse_frame(&bytes)?;

    match &frame {
        Frame::Reply => debug!("reply frame, content depends on the downlink request"),
        Frame::Uplink(uplink) => match uplink.message_type {
            Some(kind) => debug!(
                code = uplink.code,
                message_type = kind.name(),
                frame_counter = uplink.status.frame_counter,
                "decoded frame"
            ),
            None => debug!(code = uplink.code, "unknown message type, header only"),
        },
    }
    Ok(frame)
}

/// Decode a hex payload into ordered key/value entries.
///
/// # Examples
/// ```
/// use sigtemp_core::{Entry, Metadata, decode};
///
/// let entries = decode("1F", &Metadata::default())?;
/// assert_eq!(entries, vec![Entry::new("messageType", "reply frame")]);
/// # Ok::<(), sigtemp_core::DecodeError>(())
/// ```
pub fn decode(payload: &str, metadata: &Metadata) -> Result<Vec<Entry>, DecodeError> {
    let frame = decode_payload(payload)?;
    Ok(frame_entries(&frame, metadata))
}

pub fn decode_request(request: &DecodeRequest) -> Result<Vec<Entry>, DecodeError> {
    decode(&request.data, &request.custom)
}

/// Decode a request and hand the outcome to `complete`, exactly once.
///
/// # Examples
/// ```
/// use sigtemp_core::{DecodeRequest, decode_with};
///
/// let request = DecodeRequest {
///     data: "140002".to_string(),
///     ..Default::default()
/// };
/// let count = decode_with(&request, |result| result.map(|entries| entries.len()));
/// assert_eq!(count.unwrap(), 11);
/// ```
pub fn decode_with<F, R>(request: &DecodeRequest, complete: F) -> R
where
    F: FnOnce(Result<Vec<Entry>, DecodeError>) -> R,
{
    complete(decode_request(request))
}
