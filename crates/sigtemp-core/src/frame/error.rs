use thiserror::Error;

/// Errors returned by frame reading and parsing.
///
/// Note: this error type is re-exported at the crate root; the example is
/// illustrative and not compiled as a doctest.
///
/// # Examples
/// ```text
/// use sigtemp_core::FrameError;
///
/// let err = FrameError::TooShort { needed: 8, actual: 3 };
/// assert!(err.to_string().contains("payload too short"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    #[error("payload too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
}
