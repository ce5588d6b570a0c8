//! Exposed channels which connect mouse keys to the keymap and the HID writer

use embassy_sync::channel::Channel;
pub use embassy_sync::{blocking_mutex, channel};

use crate::event::MouseKeyEvent;
use crate::{EVENT_CHANNEL_SIZE, REPORT_CHANNEL_SIZE, RawMutex};

/// Channel for mouse key events, from the keymap to the mouse key processor
pub static MOUSE_KEY_EVENT_CHANNEL: Channel<RawMutex, MouseKeyEvent, EVENT_CHANNEL_SIZE> = Channel::new();
/// Channel for mouse reports, from the mouse key processor to the hid writer
pub static MOUSE_REPORT_CHANNEL: Channel<RawMutex, usbd_hid::descriptor::MouseReport, REPORT_CHANNEL_SIZE> =
    Channel::new();
