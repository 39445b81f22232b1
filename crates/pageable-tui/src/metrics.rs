//! Conversion between terminal cells and pager pixels.

use pageable_core::{Point, Size};
use ratatui::layout::Rect;

/// Pixel size assumed for one terminal cell
///
/// The pager works in pixels so thresholds and drag resistance behave the
/// same as on a pixel display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    pub width: f64,
    pub height: f64,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            width: 8.0,
            height: 16.0,
        }
    }
}

impl CellMetrics {
    /// Pixel viewport covered by `area`
    pub fn viewport(&self, area: Rect) -> Size {
        Size::new(
            area.width as f64 * self.width,
            area.height as f64 * self.height,
        )
    }

    /// Pixel position of the cell at (`column`, `row`), relative to `area`
    pub fn point(&self, column: u16, row: u16, area: Rect) -> Point {
        Point::new(
            (column as f64 - area.x as f64) * self.width,
            (row as f64 - area.y as f64) * self.height,
        )
    }

    pub fn to_columns(&self, px: f64) -> i64 {
        (px / self.width).round() as i64
    }

    pub fn to_rows(&self, px: f64) -> i64 {
        (px / self.height).round() as i64
    }
}
