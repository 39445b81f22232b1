//! Lifecycle hooks supplied by the host.
//!
//! Each hook receives the pager as read-only context. Hooks run before the
//! emitter's listeners for the same lifecycle step.

use crate::pager::Pager;
use crate::snapshot::Snapshot;

pub trait PagerHooks {
    /// Pager mounted and laid out
    fn on_init(&mut self, _pager: &Pager, _snapshot: &Snapshot) {}

    /// Layout recomputed
    fn on_update(&mut self, _pager: &Pager, _snapshot: &Snapshot) {}

    /// A transition (or a press that may lead to one) is about to start;
    /// receives the index being left
    fn on_before_start(&mut self, _pager: &Pager, _index: usize) {}

    /// The animation is starting; receives the destination page id
    fn on_start(&mut self, _pager: &Pager, _page_id: &str) {}

    /// Intermediate position during an animation or a free drag
    fn on_scroll(&mut self, _pager: &Pager, _snapshot: &Snapshot) {}

    /// Settled on a page
    fn on_finish(&mut self, _pager: &Pager, _snapshot: &Snapshot) {}
}

/// Hooks that do nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHooks;

impl PagerHooks for NoHooks {}
