use embassy_time::Duration;

/// Configurations for mouse keys.
///
/// The mode is picked once when [`crate::MouseKeys`] is created and never changes afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MouseKeyConfig {
    /// Speed model of mouse keys
    pub mode: MouseKeyMode,
    /// Log every report sent, can be toggled at runtime with [`crate::MouseKeys::set_debug`]
    pub debug: bool,
    /// Time between two periodic task runs of the mouse key processor
    pub task_interval: Duration,
}

impl Default for MouseKeyConfig {
    fn default() -> Self {
        Self {
            mode: MouseKeyMode::default(),
            debug: false,
            task_interval: Duration::from_millis(1),
        }
    }
}

impl MouseKeyConfig {
    pub fn new(mode: MouseKeyMode) -> Self {
        Self { mode, ..Default::default() }
    }
}

/// The speed model of mouse keys
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseKeyMode {
    /// Speed ramps up while a direction key is held
    Accelerated(AcceleratedConfig),
    /// Fixed speeds, selected by the accel keys
    ThreeSpeed(ThreeSpeedConfig),
}

impl Default for MouseKeyMode {
    fn default() -> Self {
        MouseKeyMode::Accelerated(AcceleratedConfig::default())
    }
}

/// Config of the accelerated mode, one curve for the cursor and one for the wheel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AcceleratedConfig {
    pub cursor: AccelCurveConfig,
    pub wheel: AccelCurveConfig,
}

impl Default for AcceleratedConfig {
    fn default() -> Self {
        Self {
            cursor: AccelCurveConfig {
                delta: 5,
                delay: Duration::from_millis(300),
                interval: Duration::from_millis(50),
                max_speed: 10,
                time_to_max: 20,
                max: 127,
            },
            wheel: AccelCurveConfig {
                delta: 1,
                delay: Duration::from_millis(300),
                interval: Duration::from_millis(100),
                max_speed: 8,
                time_to_max: 40,
                max: 127,
            },
        }
    }
}

/// Acceleration parameters of one axis group
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccelCurveConfig {
    /// Movement of the first report, and the unit of `max_speed`
    pub delta: u8,
    /// Time between the key press and the first repeated report, kept at 10ms granularity
    pub delay: Duration,
    /// Time between two repeated reports
    pub interval: Duration,
    /// Steady speed, in `delta` units
    pub max_speed: u8,
    /// Number of repeated reports until `max_speed` is reached
    pub time_to_max: u8,
    /// Upper bound of the movement in a single report
    pub max: u8,
}

impl AccelCurveConfig {
    /// Time to wait before the next report, `repeat` is the number of reports already repeated.
    pub(crate) fn repeat_delay(&self, repeat: u8) -> Duration {
        if repeat == 0 {
            // Delay is tuned in tens of milliseconds, up to 2.55s
            let tens = (self.delay.as_millis() / 10).min(u8::MAX as u64);
            Duration::from_millis(tens * 10)
        } else {
            self.interval
        }
    }
}

/// Config of the three-speed mode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThreeSpeedConfig {
    pub cursor: GearTable,
    pub wheel: GearTable,
    /// If set, the accel keys only change the speed while they are held, and the
    /// default speed is the unmodified one. Otherwise the speed sticks and
    /// starts at gear 1.
    pub momentary_accel: bool,
}

impl Default for ThreeSpeedConfig {
    fn default() -> Self {
        Self {
            cursor: GearTable {
                offsets: [16, 1, 4, 32],
                intervals: [
                    Duration::from_millis(16),
                    Duration::from_millis(32),
                    Duration::from_millis(16),
                    Duration::from_millis(16),
                ],
            },
            wheel: GearTable {
                offsets: [1, 1, 1, 1],
                intervals: [
                    Duration::from_millis(40),
                    Duration::from_millis(360),
                    Duration::from_millis(120),
                    Duration::from_millis(20),
                ],
            },
            momentary_accel: false,
        }
    }
}

/// Movement per report and report interval of one axis group, indexed by
/// gear: unmodified, gear 0, gear 1, gear 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GearTable {
    pub offsets: [u8; 4],
    pub intervals: [Duration; 4],
}
