use pageable_core::{Pager, PagerHooks, Snapshot};
use tracing::{debug, info};

/// Lifecycle hooks that log to the tracing subscriber
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingHooks;

impl PagerHooks for TracingHooks {
    fn on_init(&mut self, pager: &Pager, snapshot: &Snapshot) {
        info!(
            pages = pager.page_count(),
            index = snapshot.index,
            "Deck ready"
        );
    }

    fn on_start(&mut self, _pager: &Pager, page_id: &str) {
        debug!(page = page_id, "Moving to page");
    }

    fn on_finish(&mut self, pager: &Pager, snapshot: &Snapshot) {
        debug!(
            page = %pager.current_page().id,
            scrolled = snapshot.scrolled,
            "Settled"
        );
    }
}
