//! Mouse keys for embedded keyboard firmware.
//!
//! Turns mouse key presses into a stream of HID mouse reports. Two speed
//! models are available, see [`config::MouseKeyMode`]:
//!
//! - accelerated: movement ramps up linearly while a direction is held
//! - three-speed: fixed speeds, switched with the accel keys
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
#![cfg_attr(not(test), no_std)]
#![allow(async_fn_in_trait)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod channel;
pub mod config;
pub mod event;
pub mod hid;
pub mod mouse_key;
pub mod processor;
pub mod time;

pub use config::MouseKeyConfig;
pub use mouse_key::MouseKeys;
pub use mousekey_types::keycode::MouseKeyCode;
pub use mousekey_types::mouse_report::MouseReport;

pub type RawMutex = embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

/// Capacity of the mouse key event channel
pub const EVENT_CHANNEL_SIZE: usize = 16;
/// Capacity of the mouse report channel
pub const REPORT_CHANNEL_SIZE: usize = 16;
