//! Accelerated mouse keys: the speed ramps up while a direction is held.
//!
//! The classic mouse keys formula is
//! `speed = delta * max_speed * (repeat / time_to_max) ** ((1000 + curve) / 1000)`.
//! The curve here is the linear case of it: the movement grows by the same
//! step on each repeat until `time_to_max` repeats are reached.

use mousekey_types::keycode::AxisGroup;
use mousekey_types::mouse_report::MouseReport;

use super::{CurveState, Elapsed, Flush, SpeedCurve, diagonal};
use crate::config::{AccelCurveConfig, AcceleratedConfig};

/// Calculate the movement of one report.
///
/// `accel` is the mask of held accel keys, `repeat` is the number of reports
/// repeated since the direction was pressed. Held accel keys override the
/// ramp with 1/4, 1/2 or all of the max speed, the lowest held key wins.
pub fn calculate_unit(config: &AccelCurveConfig, accel: u8, repeat: u8) -> u8 {
    let delta = config.delta as u32;
    let full_speed = delta * config.max_speed as u32;
    let unit = if accel & (1 << 0) != 0 {
        full_speed / 4
    } else if accel & (1 << 1) != 0 {
        full_speed / 2
    } else if accel & (1 << 2) != 0 {
        full_speed
    } else if repeat == 0 {
        delta
    } else if repeat >= config.time_to_max {
        full_speed
    } else {
        full_speed * repeat as u32 / config.time_to_max as u32
    };

    let max = config.max.clamp(1, i8::MAX as u8) as u32;
    if unit > max {
        max as u8
    } else if unit == 0 {
        1
    } else {
        unit as u8
    }
}

pub struct AcceleratedCurve {
    config: AcceleratedConfig,
    /// Held accel keys, bit n is `MouseAccel<n>`
    accel: u8,
    cursor_repeat: u8,
    wheel_repeat: u8,
}

impl AcceleratedCurve {
    pub fn new(config: AcceleratedConfig) -> Self {
        Self {
            config,
            accel: 0,
            cursor_repeat: 0,
            wheel_repeat: 0,
        }
    }

    fn curve_config(&self, group: AxisGroup) -> &AccelCurveConfig {
        match group {
            AxisGroup::Cursor => &self.config.cursor,
            AxisGroup::Wheel => &self.config.wheel,
        }
    }

    fn repeat(&self, group: AxisGroup) -> u8 {
        match group {
            AxisGroup::Cursor => self.cursor_repeat,
            AxisGroup::Wheel => self.wheel_repeat,
        }
    }

    fn repeat_mut(&mut self, group: AxisGroup) -> &mut u8 {
        match group {
            AxisGroup::Cursor => &mut self.cursor_repeat,
            AxisGroup::Wheel => &mut self.wheel_repeat,
        }
    }

    /// Advance one group if its repeat is due. Returns whether the group produced a report.
    fn advance_group(&mut self, group: AxisGroup, report: &mut MouseReport, elapsed: embassy_time::Duration) -> bool {
        let delay = self.curve_config(group).repeat_delay(self.repeat(group));
        if elapsed < delay || !report.is_moving(group) {
            return false;
        }

        let repeat = self.repeat_mut(group);
        *repeat = repeat.saturating_add(1);
        let unit = self.unit(group);
        match group {
            AxisGroup::Cursor => {
                report.x = report.x.signum() * unit;
                report.y = report.y.signum() * unit;
                (report.x, report.y) = diagonal::normalize(report.x, report.y);
            }
            AxisGroup::Wheel => {
                report.wheel = report.wheel.signum() * unit;
                report.pan = report.pan.signum() * unit;
            }
        }
        true
    }
}

impl SpeedCurve for AcceleratedCurve {
    fn unit(&self, group: AxisGroup) -> i8 {
        calculate_unit(self.curve_config(group), self.accel, self.repeat(group)) as i8
    }

    fn accel_on(&mut self, index: u8) -> bool {
        self.accel |= 1 << index;
        false
    }

    fn accel_off(&mut self, index: u8) -> bool {
        self.accel &= !(1 << index);
        false
    }

    fn settle(&mut self, report: &MouseReport) {
        // Restart the ramp on the next press once a group stops
        if !report.is_moving(AxisGroup::Cursor) {
            self.cursor_repeat = 0;
        }
        if !report.is_moving(AxisGroup::Wheel) {
            self.wheel_repeat = 0;
        }
    }

    fn advance(&mut self, report: &mut MouseReport, elapsed: Elapsed) -> Flush {
        let cursor = self.advance_group(AxisGroup::Cursor, report, elapsed.cursor);
        let wheel = self.advance_group(AxisGroup::Wheel, report, elapsed.wheel);
        if cursor || wheel {
            Flush::Combined { cursor, wheel }
        } else {
            Flush::Idle
        }
    }

    fn reset(&mut self) {
        self.accel = 0;
        self.cursor_repeat = 0;
        self.wheel_repeat = 0;
    }

    fn state(&self) -> CurveState {
        CurveState {
            cursor_repeat: self.cursor_repeat,
            wheel_repeat: self.wheel_repeat,
            accel: self.accel,
        }
    }
}
