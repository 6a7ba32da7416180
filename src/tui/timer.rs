//! # Timers
//!
//! `Effect::Schedule` becomes a `tokio` sleep that posts the timer class back
//! to the event loop over a channel. At most one timer per class is pending,
//! so a burst of re-arms collapses into a single firing.

use std::collections::HashSet;
use std::sync::mpsc;
use std::time::Duration;

use log::{debug, warn};

use crate::core::action::TimerClass;

pub struct Timers {
    tick_interval: Duration,
    frame_interval: Duration,
    pending: HashSet<TimerClass>,
    tx: mpsc::Sender<TimerClass>,
}

impl Timers {
    pub fn new(
        tick_interval: Duration,
        frame_interval: Duration,
        tx: mpsc::Sender<TimerClass>,
    ) -> Self {
        Self {
            tick_interval,
            frame_interval,
            pending: HashSet::new(),
            tx,
        }
    }

    pub fn interval(&self, class: TimerClass) -> Duration {
        match class {
            TimerClass::Tick => self.tick_interval,
            TimerClass::Frame => self.frame_interval,
        }
    }

    /// Arm `class` unless it is already pending. Must be called inside a tokio runtime.
    pub fn schedule(&mut self, class: TimerClass) {
        if !self.pending.insert(class) {
            return;
        }
        let delay = self.interval(class);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(class).is_err() {
                debug!("{:?} timer fired after event loop exited", class);
            }
        });
    }

    /// Record that a timer was delivered so it can be armed again.
    pub fn fired(&mut self, class: TimerClass) {
        if !self.pending.remove(&class) {
            warn!("Unexpected {:?} timer delivery", class);
        }
    }

    pub fn is_pending(&self, class: TimerClass) -> bool {
        self.pending.contains(&class)
    }
}
