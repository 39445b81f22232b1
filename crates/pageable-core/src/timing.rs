//! L4 Atomic Layer: Time calculation utilities for page transitions
//!
//! All functions take explicit instants so callers decide which clock is used.

use std::time::{Duration, Instant};

/// Milliseconds elapsed between `start` and `now`, zero if `now` precedes `start`
#[inline]
pub fn elapsed_ms(start: Instant, now: Instant) -> f64 {
    now.saturating_duration_since(start).as_secs_f64() * 1000.0
}

/// Whether an animation started at `start` has run past `duration`
///
/// A zero duration is complete on its very first frame.
#[inline]
pub fn is_complete(start: Instant, now: Instant, duration: Duration) -> bool {
    duration.is_zero() || now.saturating_duration_since(start) > duration
}

/// Whether a deadline has been reached
#[inline]
pub fn is_due(deadline: Instant, now: Instant) -> bool {
    now >= deadline
}

/// Duration as fractional milliseconds
#[inline]
pub fn as_ms(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}
