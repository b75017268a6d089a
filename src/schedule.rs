//! Redraw scheduling
//!
//! The diagram redraws on three triggers: once shortly after mount so
//! layout can settle, after resize events (debounced, rapid events within
//! the window coalesce into a single redraw), and shortly after the window
//! regains visibility. Deadlines are plain `Instant`s polled from the
//! frame loop; `cancel_all` on teardown leaves no timer behind.

use std::time::{Duration, Instant};

use crate::constants::timing;

#[derive(Debug)]
pub struct RedrawScheduler {
    initial: Option<Instant>,
    resize: Option<Instant>,
    visibility: Option<Instant>,
}

impl RedrawScheduler {
    /// Create at mount time with the deferred initial draw armed
    pub fn new(now: Instant) -> Self {
        Self {
            initial: Some(now + Duration::from_millis(timing::INITIAL_DRAW_DELAY_MS)),
            resize: None,
            visibility: None,
        }
    }

    /// A resize event happened. Re-arming overwrites the previous deadline,
    /// so only the last event within the debounce window fires.
    pub fn on_resize(&mut self, now: Instant) {
        self.resize = Some(now + Duration::from_millis(timing::RESIZE_DEBOUNCE_MS));
    }

    /// The window came back to the foreground
    pub fn on_visibility_regained(&mut self, now: Instant) {
        self.visibility =
            Some(now + Duration::from_millis(timing::VISIBILITY_REDRAW_DELAY_MS));
    }

    /// True when a redraw is due. Clears every expired deadline, so
    /// multiple triggers expiring together still produce one redraw.
    pub fn poll(&mut self, now: Instant) -> bool {
        let mut due = false;
        for deadline in [&mut self.initial, &mut self.resize, &mut self.visibility] {
            if deadline.is_some_and(|d| d <= now) {
                *deadline = None;
                due = true;
            }
        }
        due
    }

    /// Earliest armed deadline, for driving the frame loop's wakeup
    pub fn next_deadline(&self) -> Option<Instant> {
        [self.initial, self.resize, self.visibility]
            .into_iter()
            .flatten()
            .min()
    }

    /// Teardown: drop every armed deadline
    pub fn cancel_all(&mut self) {
        self.initial = None;
        self.resize = None;
        self.visibility = None;
    }
}
