//! Mouse key codes.
//!
//! The values are the mouse-key block of the keyboard usage table used by
//! TMK/QMK derived firmwares, so a raw code read from a keymap can be passed
//! through unchanged.
use serde::{Deserialize, Serialize};
use strum::FromRepr;

use crate::mouse_button::MouseButtons;

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, PartialOrd, Ord, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MouseKeyCode {
    /// Mouse Up
    MouseUp = 0xCD,
    /// Mouse Down
    MouseDown = 0xCE,
    /// Mouse Left
    MouseLeft = 0xCF,
    /// Mouse Right
    MouseRight = 0xD0,
    /// Mouse Button 1(Left)
    MouseBtn1 = 0xD1,
    /// Mouse Button 2(Right)
    MouseBtn2 = 0xD2,
    /// Mouse Button 3(Middle)
    MouseBtn3 = 0xD3,
    /// Mouse Button 4(Back)
    MouseBtn4 = 0xD4,
    /// Mouse Button 5(Forward)
    MouseBtn5 = 0xD5,
    MouseWheelUp = 0xD9,
    MouseWheelDown = 0xDA,
    MouseWheelLeft = 0xDB,
    MouseWheelRight = 0xDC,
    MouseAccel0 = 0xDD,
    MouseAccel1 = 0xDE,
    MouseAccel2 = 0xDF,
}

/// The axis group a direction key moves.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AxisGroup {
    /// The (x, y) cursor pair
    Cursor,
    /// The (pan, wheel) scroll pair
    Wheel,
}

/// A direction key resolved to the report axis it drives.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    WheelUp,
    WheelDown,
    WheelLeft,
    WheelRight,
}

impl Direction {
    pub fn group(self) -> AxisGroup {
        match self {
            Direction::Up | Direction::Down | Direction::Left | Direction::Right => AxisGroup::Cursor,
            _ => AxisGroup::Wheel,
        }
    }

    /// Sign of the report value this direction produces.
    ///
    /// Cursor up and wheel down are negative, following the HID mouse report.
    pub fn sign(self) -> i8 {
        match self {
            Direction::Up | Direction::Left | Direction::WheelDown | Direction::WheelLeft => -1,
            Direction::Down | Direction::Right | Direction::WheelUp | Direction::WheelRight => 1,
        }
    }
}

impl MouseKeyCode {
    /// Parse a raw key code, `None` if it's not a mouse key.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::from_repr(code)
    }

    pub fn direction(self) -> Option<Direction> {
        match self {
            MouseKeyCode::MouseUp => Some(Direction::Up),
            MouseKeyCode::MouseDown => Some(Direction::Down),
            MouseKeyCode::MouseLeft => Some(Direction::Left),
            MouseKeyCode::MouseRight => Some(Direction::Right),
            MouseKeyCode::MouseWheelUp => Some(Direction::WheelUp),
            MouseKeyCode::MouseWheelDown => Some(Direction::WheelDown),
            MouseKeyCode::MouseWheelLeft => Some(Direction::WheelLeft),
            MouseKeyCode::MouseWheelRight => Some(Direction::WheelRight),
            _ => None,
        }
    }

    /// The button bit this key toggles, if it's a button key
    pub fn button(self) -> Option<MouseButtons> {
        match self {
            MouseKeyCode::MouseBtn1 => Some(MouseButtons::BUTTON1),
            MouseKeyCode::MouseBtn2 => Some(MouseButtons::BUTTON2),
            MouseKeyCode::MouseBtn3 => Some(MouseButtons::BUTTON3),
            MouseKeyCode::MouseBtn4 => Some(MouseButtons::BUTTON4),
            MouseKeyCode::MouseBtn5 => Some(MouseButtons::BUTTON5),
            _ => None,
        }
    }

    /// Index of the acceleration key, 0..=2
    pub fn accel_index(self) -> Option<u8> {
        match self {
            MouseKeyCode::MouseAccel0 => Some(0),
            MouseKeyCode::MouseAccel1 => Some(1),
            MouseKeyCode::MouseAccel2 => Some(2),
            _ => None,
        }
    }
}

impl From<MouseKeyCode> for u8 {
    fn from(code: MouseKeyCode) -> Self {
        code as u8
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn raw_codes_resolve() {
        assert_eq!(MouseKeyCode::from_code(0xD0), Some(MouseKeyCode::MouseRight));
        assert_eq!(MouseKeyCode::from_code(0xDF), Some(MouseKeyCode::MouseAccel2));
        // Buttons 6-8 are not handled by mouse keys
        assert_eq!(MouseKeyCode::from_code(0xD6), None);
        assert_eq!(MouseKeyCode::from_code(0x04), None);
    }

    #[test]
    fn direction_signs_follow_hid() {
        assert_eq!(MouseKeyCode::MouseUp.direction().map(Direction::sign), Some(-1));
        assert_eq!(MouseKeyCode::MouseWheelUp.direction().map(Direction::sign), Some(1));
        assert_eq!(Direction::WheelLeft.group(), AxisGroup::Wheel);
        assert_eq!(Direction::Right.group(), AxisGroup::Cursor);
    }

    #[test]
    fn key_classes_are_disjoint() {
        assert!(MouseKeyCode::MouseBtn3.direction().is_none());
        assert_eq!(MouseKeyCode::MouseBtn3.button(), Some(MouseButtons::BUTTON3));
        assert_eq!(MouseKeyCode::MouseAccel1.accel_index(), Some(1));
        assert!(MouseKeyCode::MouseAccel1.button().is_none());
        assert!(MouseKeyCode::MouseAccel1.direction().is_none());
    }
}
