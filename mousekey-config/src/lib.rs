//! Read mouse key settings from the `[mouse_key]` table of a `keyboard.toml`.
//!
//! ```toml
//! [mouse_key]
//! mode = "three_speed"
//!
//! [mouse_key.three_speed]
//! momentary_accel = true
//!
//! [mouse_key.three_speed.cursor]
//! offsets = [16, 1, 4, 32]
//! intervals = ["16ms", "32ms", "16ms", "16ms"]
//! ```
//!
//! Every field is optional, omitted ones fall back to the classic defaults.

use mousekey::config::{
    AccelCurveConfig, AcceleratedConfig, GearTable, MouseKeyConfig, MouseKeyMode, ThreeSpeedConfig,
};
use serde::de;
use serde::Deserialize as SerdeDeserialize;
use serde_derive::Deserialize;
use serde_inline_default::serde_inline_default;

pub mod error;
mod loader;
mod validation;

pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigLoader;

/// Only the mouse key table is read, other tables of `keyboard.toml` are ignored.
#[derive(Clone, Debug, Default, Deserialize)]
pub(crate) struct KeyboardToml {
    #[serde(default)]
    pub mouse_key: MouseKeyTomlConfig,
}

/// Speed model selected in TOML
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseKeyModeKind {
    #[default]
    Accelerated,
    ThreeSpeed,
}

/// The `[mouse_key]` table
#[serde_inline_default]
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MouseKeyTomlConfig {
    #[serde(default)]
    pub mode: MouseKeyModeKind,
    /// Log every report sent
    #[serde_inline_default(false)]
    pub debug: bool,
    /// Period of the mouse key task
    #[serde_inline_default(DurationMillis(1))]
    pub task_interval: DurationMillis,
    /// Only used when `mode = "accelerated"`
    #[serde(default)]
    pub accelerated: AcceleratedTomlConfig,
    /// Only used when `mode = "three_speed"`
    #[serde(default)]
    pub three_speed: ThreeSpeedTomlConfig,
}

impl Default for MouseKeyTomlConfig {
    fn default() -> Self {
        Self {
            mode: MouseKeyModeKind::default(),
            debug: false,
            task_interval: DurationMillis(1),
            accelerated: AcceleratedTomlConfig::default(),
            three_speed: ThreeSpeedTomlConfig::default(),
        }
    }
}

impl MouseKeyTomlConfig {
    /// Validate the table and build the runtime config
    pub fn to_config(&self) -> ConfigResult<MouseKeyConfig> {
        let mode = match self.mode {
            MouseKeyModeKind::Accelerated => MouseKeyMode::Accelerated(self.accelerated.resolve()?),
            MouseKeyModeKind::ThreeSpeed => MouseKeyMode::ThreeSpeed(self.three_speed.resolve()?),
        };
        Ok(MouseKeyConfig {
            mode,
            debug: self.debug,
            task_interval: validation::interval("mouse_key.task_interval", self.task_interval)?,
        })
    }
}

/// `[mouse_key.accelerated]`
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct AcceleratedTomlConfig {
    pub cursor: AccelCurveTomlConfig,
    pub wheel: AccelCurveTomlConfig,
}

impl AcceleratedTomlConfig {
    fn resolve(&self) -> ConfigResult<AcceleratedConfig> {
        let defaults = AcceleratedConfig::default();
        Ok(AcceleratedConfig {
            cursor: self.cursor.resolve("mouse_key.accelerated.cursor", &defaults.cursor)?,
            wheel: self.wheel.resolve("mouse_key.accelerated.wheel", &defaults.wheel)?,
        })
    }
}

/// `[mouse_key.accelerated.cursor]` and `[mouse_key.accelerated.wheel]`
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct AccelCurveTomlConfig {
    /// Movement of the first report
    pub delta: Option<u8>,
    /// Delay before the first repeat, kept at 10ms granularity
    pub delay: Option<DurationMillis>,
    /// Time between repeats
    pub interval: Option<DurationMillis>,
    /// Full speed, in units of `delta`
    pub max_speed: Option<u8>,
    /// Number of repeats to reach full speed
    pub time_to_max: Option<u8>,
    /// Cap of a single movement
    pub max: Option<u8>,
}

impl AccelCurveTomlConfig {
    fn resolve(&self, table: &str, defaults: &AccelCurveConfig) -> ConfigResult<AccelCurveConfig> {
        let field = |name: &str| format!("{table}.{name}");
        Ok(AccelCurveConfig {
            delta: validation::axis(&field("delta"), self.delta.unwrap_or(defaults.delta))?,
            delay: match self.delay {
                Some(delay) => validation::delay(&field("delay"), delay)?,
                None => defaults.delay,
            },
            interval: match self.interval {
                Some(interval) => validation::interval(&field("interval"), interval)?,
                None => defaults.interval,
            },
            max_speed: validation::non_zero(&field("max_speed"), self.max_speed.unwrap_or(defaults.max_speed))?,
            time_to_max: validation::non_zero(&field("time_to_max"), self.time_to_max.unwrap_or(defaults.time_to_max))?,
            max: validation::axis(&field("max"), self.max.unwrap_or(defaults.max))?,
        })
    }
}

/// `[mouse_key.three_speed]`
#[serde_inline_default]
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThreeSpeedTomlConfig {
    /// Accel keys only select a speed while held
    #[serde_inline_default(false)]
    pub momentary_accel: bool,
    #[serde(default)]
    pub cursor: GearTomlConfig,
    #[serde(default)]
    pub wheel: GearTomlConfig,
}

impl Default for ThreeSpeedTomlConfig {
    fn default() -> Self {
        Self {
            momentary_accel: false,
            cursor: GearTomlConfig::default(),
            wheel: GearTomlConfig::default(),
        }
    }
}

impl ThreeSpeedTomlConfig {
    fn resolve(&self) -> ConfigResult<ThreeSpeedConfig> {
        let defaults = ThreeSpeedConfig::default();
        Ok(ThreeSpeedConfig {
            cursor: self.cursor.resolve("mouse_key.three_speed.cursor", &defaults.cursor)?,
            wheel: self.wheel.resolve("mouse_key.three_speed.wheel", &defaults.wheel)?,
            momentary_accel: self.momentary_accel,
        })
    }
}

/// Per-gear tables, in the order unmodified, gear 0, gear 1, gear 2
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct GearTomlConfig {
    pub offsets: Option<[u8; 4]>,
    pub intervals: Option<[DurationMillis; 4]>,
}

impl GearTomlConfig {
    fn resolve(&self, table: &str, defaults: &GearTable) -> ConfigResult<GearTable> {
        let mut gears = *defaults;
        if let Some(offsets) = self.offsets {
            for (i, offset) in offsets.into_iter().enumerate() {
                gears.offsets[i] = validation::axis(&format!("{table}.offsets[{i}]"), offset)?;
            }
        }
        if let Some(intervals) = self.intervals {
            for (i, interval) in intervals.into_iter().enumerate() {
                gears.intervals[i] = validation::interval(&format!("{table}.intervals[{i}]"), interval)?;
            }
        }
        Ok(gears)
    }
}

/// Duration in milliseconds, written as `"300ms"` or `"1s"`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct DurationMillis(#[serde(deserialize_with = "parse_duration_millis")] pub u64);

fn parse_duration_millis<'de, D: de::Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let input: String = SerdeDeserialize::deserialize(deserializer)?;
    let (digits, unit) = input.split_at(input.trim_end_matches(|c: char| !c.is_ascii_digit()).len());
    let value: u64 = digits
        .parse()
        .map_err(|_| de::Error::custom(format!("Invalid duration \"{input}\": expected a number followed by \"ms\" or \"s\"")))?;

    let millis = match unit {
        "ms" => Some(value),
        "s" => value.checked_mul(1000),
        other => {
            return Err(de::Error::custom(format!(
                "Invalid duration unit \"{other}\": unit part must be either \"s\" or \"ms\""
            )));
        }
    };
    millis.ok_or_else(|| de::Error::custom(format!("Duration \"{input}\" doesn't fit in u64 milliseconds")))
}
