use serde::{Deserialize, Serialize};

/// Position report handed to hooks and listeners
///
/// `scrolled` and `max` are offsets along the active axis in a 0-based
/// coordinate space that never includes the infinite-mode clone pages.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub index: usize,
    pub scrolled: f64,
    pub max: f64,
}

impl Snapshot {
    pub fn new(index: usize, scrolled: f64, max: f64) -> Self {
        Self {
            index,
            scrolled,
            max,
        }
    }

    /// Fraction of the strip scrolled, 0.0 to 1.0
    pub fn progress(&self) -> f64 {
        if self.max <= 0.0 {
            0.0
        } else {
            (self.scrolled / self.max).clamp(0.0, 1.0)
        }
    }
}
