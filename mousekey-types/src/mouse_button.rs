//! Mouse button state and operations.
//!
//! Mouse keys drive the first 5 buttons of the HID boot mouse, the remaining
//! bits of the byte are always zero.
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

use bitfield_struct::bitfield;

/// Mouse buttons
#[bitfield(u8, order = Lsb, defmt = cfg(feature = "defmt"))]
#[derive(Eq, PartialEq)]
pub struct MouseButtons {
    #[bits(1)]
    pub button1: bool, //left
    #[bits(1)]
    pub button2: bool, //right
    #[bits(1)]
    pub button3: bool, //middle
    #[bits(1)]
    pub button4: bool, //back
    #[bits(1)]
    pub button5: bool, //forward
    #[bits(3)]
    __: u8,
}

impl BitOr for MouseButtons {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() | rhs.into_bits())
    }
}
impl BitAnd for MouseButtons {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() & rhs.into_bits())
    }
}
impl Not for MouseButtons {
    type Output = Self;

    fn not(self) -> Self::Output {
        // Keep the padding bits clear
        Self::from_bits(!self.into_bits() & 0b0001_1111)
    }
}
impl BitAndAssign for MouseButtons {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}
impl BitOrAssign for MouseButtons {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl MouseButtons {
    pub const BUTTON1: Self = Self::new().with_button1(true);
    pub const BUTTON2: Self = Self::new().with_button2(true);
    pub const BUTTON3: Self = Self::new().with_button3(true);
    pub const BUTTON4: Self = Self::new().with_button4(true);
    pub const BUTTON5: Self = Self::new().with_button5(true);

    pub fn is_empty(self) -> bool {
        self.into_bits() == 0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn set_and_clear_buttons() {
        let mut buttons = MouseButtons::new();
        buttons |= MouseButtons::BUTTON1;
        buttons |= MouseButtons::BUTTON5;
        assert_eq!(buttons.into_bits(), 0b1_0001);

        buttons &= !MouseButtons::BUTTON1;
        assert_eq!(buttons, MouseButtons::BUTTON5);

        // Clearing a button that isn't pressed is harmless
        buttons &= !MouseButtons::BUTTON3;
        assert_eq!(buttons, MouseButtons::BUTTON5);

        buttons &= !MouseButtons::BUTTON5;
        assert!(buttons.is_empty());
    }

    #[test]
    fn not_keeps_padding_clear() {
        assert_eq!((!MouseButtons::new()).into_bits(), 0b1_1111);
    }
}
