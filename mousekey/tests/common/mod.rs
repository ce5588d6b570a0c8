#![allow(dead_code)]

use core::cell::Cell;

use mousekey::MouseReport;
use mousekey::hid::ReportSink;
use mousekey::time::{Clock, Timestamp};

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// Clock which only moves when the test says so
#[derive(Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn starting_at(ms: u64) -> Self {
        Self { now: Cell::new(ms) }
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_millis(self.now.get())
    }
}

/// Sink which keeps every report
#[derive(Default)]
pub struct RecordingSink {
    pub reports: Vec<MouseReport>,
}

impl RecordingSink {
    pub fn last(&self) -> Option<&MouseReport> {
        self.reports.last()
    }

    pub fn count(&self) -> usize {
        self.reports.len()
    }
}

impl ReportSink for RecordingSink {
    fn send_report(&mut self, report: &MouseReport) {
        self.reports.push(*report);
    }
}

/// Tick the task every millisecond for `ms` milliseconds
pub fn run_for<C: Clock, S: ReportSink>(mouse_keys: &mut mousekey::MouseKeys<C, S>, clock: &ManualClock, ms: u64) {
    for _ in 0..ms {
        clock.advance(1);
        mouse_keys.task();
    }
}
