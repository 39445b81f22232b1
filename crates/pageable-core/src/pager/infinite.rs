//! Infinite wrap: clone slots at both ends and transitions onto phantom pages.

use tracing::debug;

use super::{InputState, Pager};
use crate::page::ClonePair;
use crate::snapshot::Snapshot;

impl Pager {
    /// Continue past the first or last page onto its clone
    ///
    /// `dragged` is the drag offset already applied, so the animation lands
    /// exactly one page away. Returns whether a wrap transition started.
    pub(super) fn overscroll(&mut self, increasing: bool, dragged: f64) -> bool {
        if !self.is_infinite() {
            return false;
        }

        let page_size = self.layout.page_size;
        let origin = self.index;

        if increasing && origin == self.last_index() {
            debug!("Wrapping forward to the first page");
            self.scroll_by(origin, -page_size - dragged, self.page_count() as isize)
        } else if !increasing && origin == 0 {
            debug!("Wrapping back to the last page");
            self.scroll_by(origin, page_size - dragged, -1)
        } else {
            false
        }
    }

    /// Map a phantom target back onto the real page it stands for
    pub(super) fn settle_phantom(&mut self, target: isize) {
        if target == self.page_count() as isize {
            self.index = 0;
        } else if target == -1 {
            self.index = self.last_index();
        }
    }

    /// Snapshot reported for a frame heading to `target`
    ///
    /// While wrapping, the position jumps to the end the clone stands in for.
    pub(super) fn wrapping_snapshot(&self, target: isize) -> Snapshot {
        let mut snapshot = self.snapshot();
        if target == self.page_count() as isize {
            snapshot.scrolled = 0.0;
        } else if target == -1 {
            snapshot.scrolled = snapshot.max;
        }
        snapshot
    }

    /// Turn infinite wrapping on or off at runtime
    ///
    /// Refused while a press, drag or transition is in progress.
    pub fn set_infinite(&mut self, infinite: bool) -> bool {
        if !self.initialised || infinite == self.is_infinite() {
            return false;
        }
        if self.input_state() != InputState::Idle {
            debug!(infinite, "Pager busy, not toggling infinite wrapping");
            return false;
        }

        self.clones = if infinite {
            ClonePair::create(&self.pages)
        } else {
            None
        };
        self.config.infinite = infinite;
        debug!(infinite, "Infinite wrapping toggled");
        self.update();
        true
    }
}
