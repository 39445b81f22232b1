//! Page, container and wrapper sizing.
//!
//! A [`Layout`] is recomputed from the viewport whenever the pager updates.
//! Under infinite mode two clone slots surround the real pages, so every
//! offset is shifted by one page along the active axis.

use tracing::debug;

use crate::geometry::{Axis, Orientation, Size};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Active axis
    pub axis: Axis,
    /// Viewport the layout was computed for
    pub viewport: Size,
    /// Size of one page along the active axis
    pub page_size: f64,
    /// Real pages
    pub page_count: usize,
    /// Laid out slots (real pages plus clones)
    pub slot_count: usize,
    /// Offset of the first real page (one page when clones are present)
    pub head_offset: f64,
    /// Wrapper size: one viewport plus the scrollbar gutter across the axis
    pub wrapper: Size,
    /// Container size holding every slot end to end
    pub container: Size,
    /// Size applied to each page and clone
    pub page: Size,
    /// Largest scroll offset of the wrapper
    pub scroll_size: f64,
}

impl Layout {
    /// Compute a layout for `page_count` pages in `viewport`
    pub fn compute(
        viewport: Size,
        orientation: Orientation,
        page_count: usize,
        infinite: bool,
        scrollbar: f64,
    ) -> Self {
        let axis = orientation.axis();
        let page_size = axis.extent(viewport);
        let cross = axis.cross_extent(viewport);
        let slot_count = if infinite { page_count + 2 } else { page_count };
        let head_offset = if infinite { page_size } else { 0.0 };
        let container_extent = slot_count as f64 * page_size;

        let layout = Self {
            axis,
            viewport,
            page_size,
            page_count,
            slot_count,
            head_offset,
            wrapper: axis.size(page_size, cross + scrollbar),
            container: axis.size(container_extent, cross),
            page: axis.size(page_size, cross),
            scroll_size: (container_extent - page_size).max(0.0),
        };

        debug!(
            size_field = axis.size_field(),
            page_size,
            slot_count,
            scroll_size = layout.scroll_size,
            "Layout computed"
        );

        layout
    }

    pub fn is_infinite(&self) -> bool {
        self.slot_count != self.page_count
    }

    /// Wrapper scroll offset that shows page `index` (may be a phantom index)
    #[inline]
    pub fn offset_for(&self, index: isize) -> f64 {
        self.page_size * index as f64 + self.head_offset
    }

    /// Start of slot `slot` in container coordinates
    #[inline]
    pub fn slot_start(&self, slot: usize) -> f64 {
        self.page_size * slot as f64
    }

    /// Signed distance the content travels from `from` to `to`
    ///
    /// Positive amounts move the content towards the start (previous pages).
    #[inline]
    pub fn amount_between(&self, from: isize, to: isize) -> f64 {
        self.page_size * from as f64 - self.page_size * to as f64
    }

    /// Scroll offset as seen by observers: clones hidden, 0-based
    #[inline]
    pub fn visible_scrolled(&self, position: f64) -> f64 {
        position - self.head_offset
    }

    /// Largest scroll offset as seen by observers
    #[inline]
    pub fn visible_max(&self) -> f64 {
        if self.is_infinite() {
            self.scroll_size - self.page_size * 2.0
        } else {
            self.scroll_size
        }
    }
}
