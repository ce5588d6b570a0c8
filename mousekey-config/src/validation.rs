// Range checks applied while turning TOML values into runtime config

use embassy_time::Duration;

use crate::DurationMillis;
use crate::error::{ConfigError, ConfigResult};

/// A movement which must fit in one HID report axis
pub(crate) fn axis(field: &str, value: u8) -> ConfigResult<u8> {
    if (1..=i8::MAX as u8).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::invalid(field, value, "a value between 1 and 127"))
    }
}

pub(crate) fn non_zero(field: &str, value: u8) -> ConfigResult<u8> {
    if value == 0 {
        Err(ConfigError::invalid(field, value, "a value greater than 0"))
    } else {
        Ok(value)
    }
}

pub(crate) fn interval(field: &str, value: DurationMillis) -> ConfigResult<Duration> {
    match value.0 {
        0 => Err(ConfigError::invalid(field, "0ms", "a duration longer than 0ms")),
        ms if ms > u32::MAX as u64 => Err(ConfigError::invalid(
            field,
            format!("{ms}ms"),
            "a duration up to 4294967295ms",
        )),
        ms => Ok(Duration::from_millis(ms)),
    }
}

/// The initial repeat delay is stored in tens of milliseconds, in one byte
pub(crate) fn delay(field: &str, value: DurationMillis) -> ConfigResult<Duration> {
    if value.0 > MAX_DELAY_MS {
        Err(ConfigError::invalid(field, format!("{}ms", value.0), "a duration up to 2550ms"))
    } else {
        Ok(Duration::from_millis(value.0))
    }
}

const MAX_DELAY_MS: u64 = 2550;
