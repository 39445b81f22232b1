//! Auto-advance timer.
//!
//! Every `interval` the slideshow asks the pager to prepare a transition and,
//! `delay` later, to advance one page. The pager pauses it around manual
//! transitions and pointer presses.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::config::SlideshowConfig;
use crate::timing::is_due;

/// What the pager should do on this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideshowStep {
    /// The interval elapsed; report the upcoming transition
    BeforeAdvance,
    /// The delay elapsed; advance one page
    Advance,
}

#[derive(Debug, Clone)]
pub struct Slideshow {
    interval: Duration,
    delay: Duration,
    running: bool,
    next_fire: Option<Instant>,
    pending_advance: Option<Instant>,
}

impl Slideshow {
    pub fn new(config: &SlideshowConfig) -> Self {
        Self {
            interval: Duration::from_millis(config.interval_ms.max(1)),
            delay: Duration::from_millis(config.delay_ms),
            running: false,
            next_fire: None,
            pending_advance: None,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Start the timer; the first advance happens one interval from `now`
    pub fn start(&mut self, now: Instant) {
        if !self.running {
            self.running = true;
            self.next_fire = Some(now + self.interval);
            debug!(interval_ms = self.interval.as_millis() as u64, "Slideshow started");
        }
    }

    /// Stop the timer and drop any pending advance
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            self.next_fire = None;
            self.pending_advance = None;
            debug!("Slideshow stopped");
        }
    }

    /// Next due step at `now`, if any. Call until it returns `None`.
    pub fn poll(&mut self, now: Instant) -> Option<SlideshowStep> {
        if !self.running {
            return None;
        }

        if let Some(fire) = self.next_fire {
            if is_due(fire, now) {
                self.next_fire = Some(now + self.interval);
                self.pending_advance = Some(now + self.delay);
                return Some(SlideshowStep::BeforeAdvance);
            }
        }

        if let Some(advance) = self.pending_advance {
            if is_due(advance, now) {
                self.pending_advance = None;
                return Some(SlideshowStep::Advance);
            }
        }

        None
    }
}
