//! Transition engine: starts, steps and settles timed page transitions.

use std::time::{Duration, Instant};

use tracing::{debug, trace};

use super::{DragState, Pager};
use crate::emitter::PagerEvent;
use crate::slideshow::SlideshowStep;
use crate::timing::{as_ms, elapsed_ms, is_complete, is_due};

/// A movement the engine was asked to perform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionRequest {
    /// Page being left
    pub origin: usize,
    /// Destination; `-1` and `page_count` are phantom pages while wrapping
    pub target: isize,
    /// Signed distance to travel, drag offset excluded
    pub amount: f64,
    /// Drag offset the animation continues from
    pub drag_offset: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum Phase {
    /// Waiting for the configured start delay
    Delayed { start_at: Instant },
    /// Animating; `offset` is the wrapper offset when the animation began
    Running { started: Instant, offset: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Transition {
    pub(super) request: TransitionRequest,
    pub(super) phase: Phase,
}

impl Pager {
    /// Advance timers and the running transition to the clock's current time
    ///
    /// Returns whether a transition is still in flight, so hosts know to keep
    /// ticking at animation rate.
    pub fn tick(&mut self) -> bool {
        if !self.initialised {
            return false;
        }

        let now = self.clock.now();
        self.poll_slideshow(now);
        self.step_transition(now);
        self.is_scrolling()
    }

    /// The transition in flight, if any
    pub fn transition(&self) -> Option<TransitionRequest> {
        self.transition.map(|t| t.request)
    }

    /// Begin a transition covering `amount` towards `target`
    ///
    /// Rejected while another transition is in flight.
    pub(super) fn scroll_by(&mut self, origin: usize, amount: f64, target: isize) -> bool {
        if self.transition.is_some() {
            debug!(target, "Transition already in flight, ignoring");
            return false;
        }

        let request = TransitionRequest {
            origin,
            target,
            amount,
            drag_offset: self.drag.offset(),
        };

        let now = self.clock.now();
        let delay = if self.drag.is_active() {
            Duration::ZERO
        } else {
            self.config.start_delay()
        };
        self.transition = Some(Transition {
            request,
            phase: Phase::Delayed {
                start_at: now + delay,
            },
        });

        debug!(origin, target, amount, "Transition requested");

        self.call_hooks(|h, p| h.on_before_start(p, origin));
        let snapshot = self.snapshot();
        self.emitter.emit(&PagerEvent::ScrollBefore(snapshot));

        if let Some(slideshow) = self.slideshow.as_mut() {
            slideshow.stop();
        }

        true
    }

    fn step_transition(&mut self, now: Instant) {
        let Some(transition) = self.transition else {
            return;
        };

        match transition.phase {
            Phase::Delayed { start_at } => {
                if is_due(start_at, now) {
                    self.start_animation(transition.request, now);
                }
            }
            Phase::Running { started, offset } => {
                self.animate(transition.request, started, offset, now);
            }
        }
    }

    fn start_animation(&mut self, request: TransitionRequest, now: Instant) {
        self.transition = Some(Transition {
            request,
            phase: Phase::Running {
                started: now,
                offset: self.scroll_offset,
            },
        });

        let id = self.pages[self.index].id.clone();
        self.call_hooks(|h, p| h.on_start(p, &id));
        let snapshot = self.snapshot();
        self.emitter.emit(&PagerEvent::ScrollStart(snapshot));
    }

    fn animate(&mut self, request: TransitionRequest, started: Instant, offset: f64, now: Instant) {
        let duration = self.config.animation();
        if is_complete(started, now, duration) {
            self.finish(request);
            return;
        }

        let start = request.drag_offset.unwrap_or(0.0);
        let scrolled = (self.easing)(elapsed_ms(started, now), start, request.amount, as_ms(duration));

        self.translation = scrolled;
        self.scroll_position = offset - scrolled;

        let snapshot = self.wrapping_snapshot(request.target);
        trace!(scrolled = snapshot.scrolled, "Transition frame");
        self.call_hooks(|h, p| h.on_scroll(p, &snapshot));
        self.emitter.emit(&PagerEvent::Scroll(snapshot));
    }

    fn finish(&mut self, request: TransitionRequest) {
        self.transition = None;
        self.translation = 0.0;
        self.drag = DragState::Idle;

        let now = self.clock.now();
        if let Some(slideshow) = self.slideshow.as_mut() {
            slideshow.start(now);
        }

        self.settle_phantom(request.target);

        self.scroll_offset = self.layout.offset_for(self.index as isize);
        self.scroll_position = self.scroll_offset;
        self.set_active(self.index);
        self.slide_index = self.index;

        let id = self.pages[self.index].id.clone();
        self.location.set_hash(&id);

        let snapshot = self.snapshot();
        self.call_hooks(|h, p| h.on_finish(p, &snapshot));
        self.emitter.emit(&PagerEvent::ScrollEnd(snapshot));

        debug!(index = self.index, id = %id, "Transition finished");
    }

    fn poll_slideshow(&mut self, now: Instant) {
        while let Some(step) = self.slideshow.as_mut().and_then(|s| s.poll(now)) {
            match step {
                SlideshowStep::BeforeAdvance => {
                    let index = self.slide_index;
                    self.call_hooks(|h, p| h.on_before_start(p, index));
                }
                SlideshowStep::Advance => self.advance_slideshow(),
            }
        }
    }

    fn advance_slideshow(&mut self) {
        if self.is_infinite() && self.overscroll(true, 0.0) {
            return;
        }

        let next = if self.index < self.last_index() {
            self.index + 1
        } else {
            0
        };
        self.slide_index = next;
        self.scroll_to_index(next);
    }
}
