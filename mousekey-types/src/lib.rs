//! # Mousekey Types
//!
//! Fundamental type definitions shared by the mousekey crates.
//!
//! ## Modules
//!
//! - [`keycode`] - Mouse key codes and the axes they drive
//! - [`mouse_button`] - Mouse button state and combinations
//! - [`mouse_report`] - The report record produced by mouse keys
//!
//! ## Integration
//!
//! - **mousekey**: the core uses these types for its state and reports
//! - **mousekey-config**: configuration parsing refers to these key codes

#![no_std]

pub mod keycode;
pub mod mouse_button;
pub mod mouse_report;
