use std::time::{Duration, Instant};

use tokio::sync::mpsc::UnboundedSender;

use crate::form::{TripForm, TripRequest};
use crate::location::{LookupRequest, LookupSettings};
use crate::notification::NotificationState;

/// Longest the event loop waits for input before ticking
pub const MAX_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Application state
pub struct App {
    pub form: TripForm,
    pub notification: NotificationState,
    pub should_quit: bool,
    submitted: Option<TripRequest>,
}

impl App {
    pub fn new(request_tx: UnboundedSender<LookupRequest>, settings: LookupSettings) -> Self {
        Self {
            form: TripForm::new(request_tx, settings),
            notification: NotificationState::new(),
            should_quit: false,
            submitted: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Take the submitted request, if the form was submitted
    pub fn take_submitted(&mut self) -> Option<TripRequest> {
        self.submitted.take()
    }

    pub(super) fn finish(&mut self, request: TripRequest) {
        self.submitted = Some(request);
        self.should_quit = true;
    }

    /// Advance lookups and notifications. Returns true if a redraw is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = self.form.tick(now);
        changed |= self.notification.tick(now);
        changed
    }

    /// How long to wait for input before the next tick
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.form
            .next_deadline(now)
            .map_or(MAX_POLL_INTERVAL, |d| d.min(MAX_POLL_INTERVAL))
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
