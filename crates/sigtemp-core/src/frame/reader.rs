use super::convert;
use super::error::FrameError;
use super::layout;

pub struct FrameReader<'a> {
    payload: &'a [u8],
}

impl<'a> FrameReader<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self { payload }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), FrameError> {
        if self.payload.len() < needed {
            return Err(FrameError::TooShort {
                needed,
                actual: self.payload.len(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, FrameError> {
        self.payload
            .get(offset)
            .copied()
            .ok_or(FrameError::TooShort {
                needed: offset + 1,
                actual: self.payload.len(),
            })
    }

    pub fn read_slice(&self, range: std::ops::Range<usize>) -> Result<&'a [u8], FrameError> {
        self.payload.get(range.clone()).ok_or(FrameError::TooShort {
            needed: range.end,
            actual: self.payload.len(),
        })
    }

    pub fn read_u16_be(&self, range: std::ops::Range<usize>) -> Result<u16, FrameError> {
        let bytes = self.read_slice(range)?;
        if bytes.len() != 2 {
            return Err(FrameError::TooShort {
                needed: 2,
                actual: bytes.len(),
            });
        }
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    /// Signed temperature or threshold, in tenths of a degree.
    pub fn read_tenths_i16(&self, range: std::ops::Range<usize>) -> Result<f64, FrameError> {
        let raw = self.read_u16_be(range)?;
        Ok(convert::tenths(convert::signed_u16(raw)))
    }

    /// Unsigned hysteresis, in tenths of a degree.
    pub fn read_tenths_u8(&self, offset: usize) -> Result<f64, FrameError> {
        let raw = self.read_u8(offset)?;
        Ok(convert::tenths(i32::from(raw)))
    }

    pub fn read_high_nibble(&self, offset: usize) -> Result<u8, FrameError> {
        Ok(self.read_u8(offset)? >> layout::SENSOR_ID_SHIFT)
    }

    pub fn read_low_nibble(&self, offset: usize) -> Result<u8, FrameError> {
        Ok(self.read_u8(offset)? & layout::SENSOR_PRESENCE_MASK)
    }

    pub fn read_periodicity_minutes(&self, offset: usize) -> Result<f64, FrameError> {
        let raw = self.read_u8(offset)?;
        Ok(convert::periodicity_minutes(
            raw,
            layout::PERIODICITY_UNIT_SECONDS,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::FrameReader;
    use crate::frame::error::FrameError;

    #[test]
    fn read_u8_out_of_range() {
        let payload = [0x2B, 0x00];
        let reader = FrameReader::new(&payload);
        let err = reader.read_u8(2).unwrap_err();
        assert_eq!(
            err,
            FrameError::TooShort {
                needed: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn read_u16_be_ok() {
        let payload = [0x00, 0x01, 0x2C];
        let reader = FrameReader::new(&payload);
        assert_eq!(reader.read_u16_be(1..3).unwrap(), 300);
    }

    #[test]
    fn read_tenths_i16_negative() {
        let payload = [0xFF, 0x9C];
        let reader = FrameReader::new(&payload);
        assert_eq!(reader.read_tenths_i16(0..2).unwrap(), -10.0);
    }

    #[test]
    fn nibbles_split_the_byte() {
        let payload = [0x21];
        let reader = FrameReader::new(&payload);
        assert_eq!(reader.read_high_nibble(0).unwrap(), 2);
        assert_eq!(reader.read_low_nibble(0).unwrap(), 1);
    }

    #[test]
    fn require_len_reports_sizes() {
        let payload = [0u8; 4];
        let reader = FrameReader::new(&payload);
        assert!(reader.require_len(4).is_ok());
        let err = reader.require_len(8).unwrap_err();
        assert!(err.to_string().contains("need 8 bytes, got 4"));
    }
}
