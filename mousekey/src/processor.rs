//! Async driver of [`MouseKeys`] for embassy based firmwares.

use embassy_futures::select::{Either, select};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Receiver;
use embassy_time::{Duration, Timer};

use crate::config::MouseKeyConfig;
use crate::event::MouseKeyEvent;
use crate::hid::ReportSink;
use crate::mouse_key::MouseKeys;
use crate::time::Clock;

/// Runnable tasks of the firmware
pub trait Runnable {
    async fn run(&mut self);
}

/// Receives mouse key events from a channel and runs the periodic task in between.
pub struct MouseKeyProcessor<'a, M: RawMutex, C: Clock, S: ReportSink, const N: usize> {
    mouse_keys: MouseKeys<C, S>,
    events: Receiver<'a, M, MouseKeyEvent, N>,
    task_interval: Duration,
}

impl<'a, M: RawMutex, C: Clock, S: ReportSink, const N: usize> MouseKeyProcessor<'a, M, C, S, N> {
    pub fn new(config: &MouseKeyConfig, clock: C, sink: S, events: Receiver<'a, M, MouseKeyEvent, N>) -> Self {
        Self {
            mouse_keys: MouseKeys::new(config, clock, sink),
            events,
            task_interval: config.task_interval,
        }
    }

    /// Apply one event and flush the report right away
    pub fn process_event(&mut self, event: MouseKeyEvent) {
        match event {
            MouseKeyEvent::Key { code, pressed: true } => self.mouse_keys.on(code),
            MouseKeyEvent::Key { code, pressed: false } => self.mouse_keys.off(code),
            MouseKeyEvent::Clear => {
                info!("Clear mouse keys");
                self.mouse_keys.clear();
            }
        }
        self.mouse_keys.send();
    }

    pub fn mouse_keys(&self) -> &MouseKeys<C, S> {
        &self.mouse_keys
    }

    pub fn mouse_keys_mut(&mut self) -> &mut MouseKeys<C, S> {
        &mut self.mouse_keys
    }
}

impl<M: RawMutex, C: Clock, S: ReportSink, const N: usize> Runnable for MouseKeyProcessor<'_, M, C, S, N> {
    /// Main mouse key loop, the periodic task runs after every event and at least once per `task_interval`.
    async fn run(&mut self) {
        loop {
            if let Either::First(event) = select(self.events.receive(), Timer::after(self.task_interval)).await {
                self.process_event(event);
            }
            self.mouse_keys.task();
        }
    }
}
