//! Mouse keys: emulate a mouse with keyboard keys.
//!
//! [`MouseKeys`] holds the next outgoing report and turns key transitions and
//! periodic ticks into reports. How fast the pointer moves is decided by a
//! [`SpeedCurve`], picked from [`MouseKeyMode`] when the context is created.

mod accelerated;
mod diagonal;
mod status;
mod three_speed;

pub use accelerated::{AcceleratedCurve, calculate_unit};
use embassy_time::Duration;
use mousekey_types::keycode::{AxisGroup, MouseKeyCode};
use mousekey_types::mouse_report::MouseReport;
pub use status::MouseKeyStatus;
pub use three_speed::{Gear, ThreeSpeedCurve};

use crate::config::{MouseKeyConfig, MouseKeyMode};
use crate::hid::ReportSink;
use crate::time::{Clock, Timestamp};

/// Time since each axis group was last reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elapsed {
    pub cursor: Duration,
    pub wheel: Duration,
}

/// Reports due after a periodic tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flush {
    /// Nothing to send
    Idle,
    /// Send the whole report once
    Combined { cursor: bool, wheel: bool },
    /// Send each due group in its own report, with the other group zeroed
    Split { cursor: bool, wheel: bool },
}

/// Counters of a speed curve, for introspection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CurveState {
    pub cursor_repeat: u8,
    pub wheel_repeat: u8,
    /// Held accel keys mask, or the gear index in three-speed mode
    pub accel: u8,
}

/// Speed model of mouse keys.
pub trait SpeedCurve {
    /// Movement of a direction key on `group` right now
    fn unit(&self, group: AxisGroup) -> i8;

    /// An accel key is pressed, returns `true` if moving axes must be rescaled
    fn accel_on(&mut self, index: u8) -> bool;

    /// An accel key is released, returns `true` if moving axes must be rescaled
    fn accel_off(&mut self, index: u8) -> bool;

    /// Apply the current speed to every moving axis of the report
    fn rescale(&self, _report: &mut MouseReport) {}

    /// Called after every key release with the updated report
    fn settle(&mut self, _report: &MouseReport) {}

    /// Periodic tick, update the moving axes and tell which groups are due
    fn advance(&mut self, report: &mut MouseReport, elapsed: Elapsed) -> Flush;

    /// Forget ramping and held accel keys
    fn reset(&mut self);

    fn state(&self) -> CurveState;
}

/// The speed curve selected by configuration
pub enum MouseKeyCurve {
    Accelerated(AcceleratedCurve),
    ThreeSpeed(ThreeSpeedCurve),
}

impl MouseKeyCurve {
    pub fn new(mode: &MouseKeyMode) -> Self {
        match mode {
            MouseKeyMode::Accelerated(config) => MouseKeyCurve::Accelerated(AcceleratedCurve::new(*config)),
            MouseKeyMode::ThreeSpeed(config) => MouseKeyCurve::ThreeSpeed(ThreeSpeedCurve::new(*config)),
        }
    }

    fn inner(&self) -> &dyn SpeedCurve {
        match self {
            MouseKeyCurve::Accelerated(curve) => curve,
            MouseKeyCurve::ThreeSpeed(curve) => curve,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn SpeedCurve {
        match self {
            MouseKeyCurve::Accelerated(curve) => curve,
            MouseKeyCurve::ThreeSpeed(curve) => curve,
        }
    }
}

impl SpeedCurve for MouseKeyCurve {
    fn unit(&self, group: AxisGroup) -> i8 {
        self.inner().unit(group)
    }

    fn accel_on(&mut self, index: u8) -> bool {
        self.inner_mut().accel_on(index)
    }

    fn accel_off(&mut self, index: u8) -> bool {
        self.inner_mut().accel_off(index)
    }

    fn rescale(&self, report: &mut MouseReport) {
        self.inner().rescale(report)
    }

    fn settle(&mut self, report: &MouseReport) {
        self.inner_mut().settle(report)
    }

    fn advance(&mut self, report: &mut MouseReport, elapsed: Elapsed) -> Flush {
        self.inner_mut().advance(report, elapsed)
    }

    fn reset(&mut self) {
        self.inner_mut().reset()
    }

    fn state(&self) -> CurveState {
        self.inner().state()
    }
}

/// Mouse key context.
///
/// Call [`MouseKeys::on`]/[`MouseKeys::off`] on every mouse key transition
/// and [`MouseKeys::task`] on every tick of the main loop. Nothing here
/// blocks, reports are handed to the sink as soon as they are due.
pub struct MouseKeys<C: Clock, S: ReportSink> {
    report: MouseReport,
    curve: MouseKeyCurve,
    last_cursor: Timestamp,
    last_wheel: Timestamp,
    debug: bool,
    clock: C,
    sink: S,
}

impl<C: Clock, S: ReportSink> MouseKeys<C, S> {
    pub fn new(config: &MouseKeyConfig, clock: C, sink: S) -> Self {
        let now = clock.now();
        Self {
            report: MouseReport::new(),
            curve: MouseKeyCurve::new(&config.mode),
            last_cursor: now,
            last_wheel: now,
            debug: config.debug,
            clock,
            sink,
        }
    }

    /// Process a mouse key press. Codes which aren't mouse keys are ignored.
    pub fn on(&mut self, code: impl Into<u8>) {
        let code = code.into();
        let Some(key) = MouseKeyCode::from_code(code) else {
            trace!("Ignore non mouse key code: {}", code);
            return;
        };

        if let Some(direction) = key.direction() {
            let group = direction.group();
            *self.report.axis_mut(direction) = direction.sign() * self.curve.unit(group);
            self.touch(group, self.clock.now());
        } else if let Some(button) = key.button() {
            self.report.buttons |= button;
        } else if let Some(index) = key.accel_index() {
            if self.curve.accel_on(index) {
                self.curve.rescale(&mut self.report);
            }
        }
    }

    /// Process a mouse key release. Codes which aren't mouse keys are ignored.
    pub fn off(&mut self, code: impl Into<u8>) {
        let code = code.into();
        let Some(key) = MouseKeyCode::from_code(code) else {
            trace!("Ignore non mouse key code: {}", code);
            return;
        };

        if let Some(direction) = key.direction() {
            // Only stop the axis if it's still moving towards the released direction,
            // the opposite direction may have been pressed afterwards.
            let axis = self.report.axis_mut(direction);
            if axis.signum() == direction.sign() {
                *axis = 0;
            }
        } else if let Some(button) = key.button() {
            self.report.buttons &= !button;
        } else if let Some(index) = key.accel_index() {
            if self.curve.accel_off(index) {
                self.curve.rescale(&mut self.report);
            }
        }
        self.curve.settle(&self.report);
    }

    /// Periodic task, sends the report when a moving group is due.
    pub fn task(&mut self) {
        let now = self.clock.now();
        let elapsed = Elapsed {
            cursor: now.duration_since(self.last_cursor),
            wheel: now.duration_since(self.last_wheel),
        };

        match self.curve.advance(&mut self.report, elapsed) {
            Flush::Idle => {}
            Flush::Combined { cursor, wheel } => {
                self.send();
                let now = self.clock.now();
                if cursor {
                    self.touch(AxisGroup::Cursor, now);
                }
                if wheel {
                    self.touch(AxisGroup::Wheel, now);
                }
            }
            Flush::Split { cursor, wheel } => {
                if cursor {
                    self.emit(self.report.only(AxisGroup::Cursor));
                    self.touch(AxisGroup::Cursor, self.clock.now());
                }
                if wheel {
                    self.emit(self.report.only(AxisGroup::Wheel));
                    self.touch(AxisGroup::Wheel, self.clock.now());
                }
            }
        }
    }

    /// Send the current report immediately
    pub fn send(&mut self) {
        self.emit(self.report);
    }

    /// Stop all movement, release all buttons and forget acceleration
    pub fn clear(&mut self) {
        self.report = MouseReport::new();
        self.curve.reset();
    }

    pub fn report(&self) -> &MouseReport {
        &self.report
    }

    pub fn curve(&self) -> &MouseKeyCurve {
        &self.curve
    }

    /// Snapshot of the report and the curve counters
    pub fn status(&self) -> MouseKeyStatus {
        MouseKeyStatus::new(self.report, self.curve.state())
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn touch(&mut self, group: AxisGroup, now: Timestamp) {
        match group {
            AxisGroup::Cursor => self.last_cursor = now,
            AxisGroup::Wheel => self.last_wheel = now,
        }
    }

    fn emit(&mut self, report: MouseReport) {
        if self.debug {
            let line = MouseKeyStatus::new(report, self.curve.state()).render();
            debug!("{}", line.as_str());
        }
        self.sink.send_report(&report);
    }
}
