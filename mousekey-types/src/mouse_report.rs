//! The mouse report produced by mouse keys.

use crate::keycode::{AxisGroup, Direction};
use crate::mouse_button::MouseButtons;

/// Next outgoing mouse report.
///
/// Axis values stay in `-127..=127`, they are always produced from clamped
/// units so the full `i8` range is never used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MouseReport {
    pub buttons: MouseButtons,
    pub x: i8,
    pub y: i8,
    /// Vertical wheel
    pub wheel: i8,
    /// Horizontal wheel
    pub pan: i8,
}

impl MouseReport {
    pub const fn new() -> Self {
        Self {
            buttons: MouseButtons::new(),
            x: 0,
            y: 0,
            wheel: 0,
            pan: 0,
        }
    }

    /// The report axis driven by a direction key
    pub fn axis_mut(&mut self, direction: Direction) -> &mut i8 {
        match direction {
            Direction::Up | Direction::Down => &mut self.y,
            Direction::Left | Direction::Right => &mut self.x,
            Direction::WheelUp | Direction::WheelDown => &mut self.wheel,
            Direction::WheelLeft | Direction::WheelRight => &mut self.pan,
        }
    }

    pub fn is_moving(&self, group: AxisGroup) -> bool {
        match group {
            AxisGroup::Cursor => self.x != 0 || self.y != 0,
            AxisGroup::Wheel => self.wheel != 0 || self.pan != 0,
        }
    }

    /// Copy of the report carrying only one axis group, buttons are kept.
    pub fn only(&self, group: AxisGroup) -> Self {
        let mut report = *self;
        match group {
            AxisGroup::Cursor => {
                report.wheel = 0;
                report.pan = 0;
            }
            AxisGroup::Wheel => {
                report.x = 0;
                report.y = 0;
            }
        }
        report
    }
}

impl From<MouseReport> for usbd_hid::descriptor::MouseReport {
    fn from(report: MouseReport) -> Self {
        usbd_hid::descriptor::MouseReport {
            buttons: report.buttons.into_bits(),
            x: report.x,
            y: report.y,
            wheel: report.wheel,
            pan: report.pan,
        }
    }
}
