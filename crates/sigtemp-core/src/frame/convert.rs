const SIGN_BIT: i32 = 0x8000;
const WORD_RANGE: i32 = 0x1_0000;

/// Recover the two's-complement value of a 16-bit field.
///
/// Patterns with bit 15 set are shifted down by 65536; this is the device's
/// fixed-point encoding for temperatures and thresholds.
pub(crate) fn signed_u16(raw: u16) -> i32 {
    let value = i32::from(raw);
    if value & SIGN_BIT != 0 {
        value - WORD_RANGE
    } else {
        value
    }
}

/// Round to one decimal place, half away from zero.
pub(crate) fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Scale a value sent in tenths of a unit.
pub(crate) fn tenths(raw: i32) -> f64 {
    round_tenths(f64::from(raw) / 10.0)
}

/// Convert a periodicity sent in `unit_seconds` steps into minutes.
pub(crate) fn periodicity_minutes(raw: u8, unit_seconds: u32) -> f64 {
    round_tenths(f64::from(u32::from(raw) * unit_seconds) / 60.0)
}
