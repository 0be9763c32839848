pub const CODE_OFFSET: usize = 0;
pub const STATUS_OFFSET: usize = 1;
pub const HEADER_LEN: usize = 2;

pub const FRAME_COUNTER_SHIFT: u8 = 5;
pub const HW_ERROR_MASK: u8 = 0x04;
pub const HW_ERROR_SHIFT: u8 = 2;
pub const LOW_BATTERY_MASK: u8 = 0x02;
pub const LOW_BATTERY_SHIFT: u8 = 1;
pub const CONFIG_MASK: u8 = 0x01;

pub const SENSOR_ID_SHIFT: u8 = 4;
pub const SENSOR_PRESENCE_MASK: u8 = 0x0F;

/// Periodicities in product config frames are sent in tens of seconds.
pub const PERIODICITY_UNIT_SECONDS: u32 = 10;

pub mod product_config {
    pub const KEEP_ALIVE_OFFSET: usize = 2;
    pub const TRANSMISSION_OFFSET: usize = 3;
    pub const INTERNAL_ID_OFFSET: usize = 4;
    pub const INTERNAL_THRESHOLDS_OFFSET: usize = 5;
    pub const EXTERNAL_ID_OFFSET: usize = 6;
    pub const EXTERNAL_THRESHOLDS_OFFSET: usize = 7;
    pub const PRODUCT_MODE_OFFSET: usize = 8;
    pub const EXTERNAL_PRESENCE_OFFSET: usize = 9;
    pub const ACQUISITION_OFFSET: usize = 10;

    pub const LEN: usize = ACQUISITION_OFFSET + 1;
}

pub mod thresholds {
    pub const HIGH_RANGE: std::ops::Range<usize> = 2..4;
    pub const HIGH_HYSTERESIS_OFFSET: usize = 4;
    pub const LOW_RANGE: std::ops::Range<usize> = 5..7;
    pub const LOW_HYSTERESIS_OFFSET: usize = 7;
    /// Internal threshold frames only.
    pub const SUPER_SAMPLING_OFFSET: usize = 8;

    pub const EXTERNAL_LEN: usize = LOW_HYSTERESIS_OFFSET + 1;
    pub const INTERNAL_LEN: usize = SUPER_SAMPLING_OFFSET + 1;
}

pub mod network_config {
    pub const REPETITIONS_OFFSET: usize = 2;

    pub const LEN: usize = REPETITIONS_OFFSET + 1;
}

pub mod reading {
    pub const INTERNAL_SENSOR_OFFSET: usize = 2;
    pub const INTERNAL_TEMP_RANGE: std::ops::Range<usize> = 3..5;
    pub const EXTERNAL_SENSOR_OFFSET: usize = 5;
    pub const EXTERNAL_TEMP_RANGE: std::ops::Range<usize> = 6..8;

    pub const LEN: usize = EXTERNAL_TEMP_RANGE.end;
}
