use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::app::App;
use crate::widgets::{PagesWidget, PipsWidget, StatusBarWidget};

/// Screen split: pages, then the control row and status bar when shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub pages: Rect,
    pub controls: Option<Rect>,
    pub status: Option<Rect>,
}

pub fn regions(area: Rect, controls: bool, status: bool) -> Regions {
    let mut constraints = vec![Constraint::Min(1)];
    if controls {
        constraints.push(Constraint::Length(1));
    }
    if status {
        constraints.push(Constraint::Length(1));
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut rest = chunks.iter().skip(1).copied();
    Regions {
        pages: chunks[0],
        controls: if controls { rest.next() } else { None },
        status: if status { rest.next() } else { None },
    }
}

/// Whether the control row has anything to show
pub fn shows_controls(config: &pageable_core::PagerConfig) -> bool {
    config.pips || config.nav_prev.is_some() || config.nav_next.is_some()
}

/// Draw one frame and record the hit map for mouse input
pub fn draw(frame: &mut Frame, app: &mut App) {
    let regions = regions(
        frame.area(),
        shows_controls(app.pager.config()),
        app.ui.show_status_bar,
    );

    app.sync_viewport(regions.pages);
    PagesWidget::render(frame, regions.pages, app);

    let controls = regions
        .controls
        .map(|area| PipsWidget::render(frame, area, app))
        .unwrap_or_default();
    app.hits.pips = controls.pips;
    app.hits.prev = controls.prev;
    app.hits.next = controls.next;

    if let Some(area) = regions.status {
        StatusBarWidget::render(frame, area, app);
    }
}
