use core::fmt::{self, Display, Write};

use heapless::String;
use mousekey_types::mouse_report::MouseReport;

use super::CurveState;

/// Read-only snapshot of mouse keys, printed when the debug flag is on.
///
/// Displayed as `mousekey [btn|x y v h](rep/acl): [01|5 0 0 0](0/0/0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MouseKeyStatus {
    pub report: MouseReport,
    pub state: CurveState,
}

impl MouseKeyStatus {
    pub fn new(report: MouseReport, state: CurveState) -> Self {
        Self { report, state }
    }

    /// Render into a fixed buffer, for loggers that can't take `Display`
    pub fn render(&self) -> String<80> {
        let mut line = String::new();
        // The longest line is 68 bytes
        let _ = write!(line, "{}", self);
        line
    }
}

impl Display for MouseKeyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mousekey [btn|x y v h](rep/acl): [{:02x}|{} {} {} {}]({}/{}/{})",
            self.report.buttons.into_bits(),
            self.report.x,
            self.report.y,
            self.report.wheel,
            self.report.pan,
            self.state.cursor_repeat,
            self.state.wheel_repeat,
            self.state.accel,
        )
    }
}

#[cfg(test)]
mod test {
    use mousekey_types::mouse_button::MouseButtons;

    use super::*;

    #[test]
    fn render_status_line() {
        let status = MouseKeyStatus::new(
            MouseReport {
                buttons: MouseButtons::BUTTON1 | MouseButtons::BUTTON5,
                x: -127,
                y: 5,
                wheel: 0,
                pan: -1,
            },
            CurveState {
                cursor_repeat: 255,
                wheel_repeat: 3,
                accel: 4,
            },
        );
        assert_eq!(
            status.render().as_str(),
            "mousekey [btn|x y v h](rep/acl): [11|-127 5 0 -1](255/3/4)"
        );
    }

    #[test]
    fn longest_line_fits() {
        let status = MouseKeyStatus::new(
            MouseReport {
                buttons: MouseButtons::from_bits(0x1f),
                x: -127,
                y: -127,
                wheel: -127,
                pan: -127,
            },
            CurveState {
                cursor_repeat: 255,
                wheel_repeat: 255,
                accel: 7,
            },
        );
        assert_eq!(status.render().len(), 68);
    }
}
