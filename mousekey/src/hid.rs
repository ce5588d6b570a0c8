//! Traits and types for handing mouse reports to the transport.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Sender;
use mousekey_types::mouse_report::MouseReport;

/// ReportSink is where mouse keys put finished reports, usually the USB or BLE writer.
///
/// Sending is fire-and-forget: it must not block, and failures are owned by the sink.
pub trait ReportSink {
    fn send_report(&mut self, report: &MouseReport);
}

impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn send_report(&mut self, report: &MouseReport) {
        (**self).send_report(report)
    }
}

/// Forward reports to a HID writer task through a channel.
impl<M: RawMutex, const N: usize> ReportSink for Sender<'_, M, usbd_hid::descriptor::MouseReport, N> {
    fn send_report(&mut self, report: &MouseReport) {
        if self.try_send((*report).into()).is_err() {
            warn!("Mouse report channel is full, report dropped");
        }
    }
}

#[cfg(test)]
mod test {
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;
    use embassy_sync::channel::Channel;
    use mousekey_types::mouse_button::MouseButtons;

    use super::*;

    #[test]
    fn channel_sink_drops_when_full() {
        let channel: Channel<NoopRawMutex, usbd_hid::descriptor::MouseReport, 1> = Channel::new();
        let mut sender = channel.sender();
        let report = MouseReport {
            buttons: MouseButtons::BUTTON1,
            x: 5,
            ..MouseReport::new()
        };
        sender.send_report(&report);
        sender.send_report(&MouseReport::new());

        let received = channel.try_receive().unwrap();
        assert_eq!(received.buttons, 1);
        assert_eq!(received.x, 5);
        assert!(channel.try_receive().is_err());
    }
}
