//! Three-speed mouse keys: fixed speeds selected by the accel keys.
//!
//! Cursor and wheel are paced independently, each one is sent in its own
//! report when its interval has passed.

use mousekey_types::keycode::AxisGroup;
use mousekey_types::mouse_report::MouseReport;

use super::{CurveState, Elapsed, Flush, SpeedCurve, diagonal};
use crate::config::{GearTable, ThreeSpeedConfig};

/// Speed selector of the three-speed mode
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gear {
    Unmodified = 0,
    Gear0 = 1,
    Gear1 = 2,
    Gear2 = 3,
}

impl Gear {
    /// Gear selected by the accel key `index`
    pub fn from_accel(index: u8) -> Option<Self> {
        match index {
            0 => Some(Gear::Gear0),
            1 => Some(Gear::Gear1),
            2 => Some(Gear::Gear2),
            _ => None,
        }
    }
}

pub struct ThreeSpeedCurve {
    config: ThreeSpeedConfig,
    gear: Gear,
    default_gear: Gear,
}

impl ThreeSpeedCurve {
    pub fn new(config: ThreeSpeedConfig) -> Self {
        let default_gear = if config.momentary_accel {
            Gear::Unmodified
        } else {
            Gear::Gear1
        };
        Self {
            config,
            gear: default_gear,
            default_gear,
        }
    }

    pub fn gear(&self) -> Gear {
        self.gear
    }

    fn table(&self, group: AxisGroup) -> &GearTable {
        match group {
            AxisGroup::Cursor => &self.config.cursor,
            AxisGroup::Wheel => &self.config.wheel,
        }
    }

    fn shift(&mut self, gear: Gear) -> bool {
        let changed = self.gear != gear;
        if changed {
            debug!("Mouse key speed changed: {:?} -> {:?}", self.gear, gear);
            self.gear = gear;
        }
        changed
    }
}

impl SpeedCurve for ThreeSpeedCurve {
    fn unit(&self, group: AxisGroup) -> i8 {
        self.table(group).offsets[self.gear as usize].clamp(1, i8::MAX as u8) as i8
    }

    fn accel_on(&mut self, index: u8) -> bool {
        match Gear::from_accel(index) {
            Some(gear) => self.shift(gear),
            None => false,
        }
    }

    fn accel_off(&mut self, _index: u8) -> bool {
        if self.config.momentary_accel {
            self.shift(self.default_gear)
        } else {
            false
        }
    }

    fn rescale(&self, report: &mut MouseReport) {
        let cursor = self.unit(AxisGroup::Cursor);
        let wheel = self.unit(AxisGroup::Wheel);
        report.x = report.x.signum() * cursor;
        report.y = report.y.signum() * cursor;
        report.wheel = report.wheel.signum() * wheel;
        report.pan = report.pan.signum() * wheel;
        (report.x, report.y) = diagonal::normalize(report.x, report.y);
        (report.wheel, report.pan) = diagonal::normalize(report.wheel, report.pan);
    }

    fn advance(&mut self, report: &mut MouseReport, elapsed: Elapsed) -> Flush {
        let gear = self.gear as usize;
        let cursor = report.is_moving(AxisGroup::Cursor) && elapsed.cursor > self.config.cursor.intervals[gear];
        let wheel = report.is_moving(AxisGroup::Wheel) && elapsed.wheel > self.config.wheel.intervals[gear];
        if cursor || wheel {
            Flush::Split { cursor, wheel }
        } else {
            Flush::Idle
        }
    }

    // The gear is a user selection, it survives a reset
    fn reset(&mut self) {}

    fn state(&self) -> CurveState {
        CurveState {
            cursor_repeat: 0,
            wheel_repeat: 0,
            accel: self.gear as u8,
        }
    }
}
