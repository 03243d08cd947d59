use std::time::{Duration, Instant};

/// Loading overlay with a minimum display time, so fast responses do not
/// make it flicker.
#[derive(Debug, Clone)]
pub struct LoaderState {
    min_display: Duration,
    shown_at: Option<Instant>,
    hide_at: Option<Instant>,
}

impl LoaderState {
    pub fn new(min_display: Duration) -> Self {
        Self {
            min_display,
            shown_at: None,
            hide_at: None,
        }
    }

    pub fn show(&mut self, now: Instant) {
        self.shown_at = Some(now);
        self.hide_at = None;
    }

    /// The awaited request completed; hide once the minimum time has passed.
    pub fn finish(&mut self, now: Instant) {
        if let Some(shown_at) = self.shown_at {
            self.hide_at = Some((shown_at + self.min_display).max(now));
        }
    }

    /// A request is still outstanding.
    pub fn is_pending(&self) -> bool {
        self.shown_at.is_some() && self.hide_at.is_none()
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        match (self.shown_at, self.hide_at) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(_), Some(hide_at)) => now < hide_at,
        }
    }

    /// Time left before the overlay disappears, if it is fading out.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.hide_at
            .filter(|hide_at| *hide_at > now)
            .map(|hide_at| hide_at - now)
    }
}
