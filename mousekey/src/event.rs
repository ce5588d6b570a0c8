/// Event consumed by the mouse key processor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MouseKeyEvent {
    /// A key transition, `code` is the raw key code from the keymap
    Key { code: u8, pressed: bool },
    /// Drop all mouse key state, e.g. on layer change or disconnection
    Clear,
}

impl MouseKeyEvent {
    pub fn press(code: impl Into<u8>) -> Self {
        MouseKeyEvent::Key {
            code: code.into(),
            pressed: true,
        }
    }

    pub fn release(code: impl Into<u8>) -> Self {
        MouseKeyEvent::Key {
            code: code.into(),
            pressed: false,
        }
    }
}
