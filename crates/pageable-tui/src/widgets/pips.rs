use ratatui::{layout::Rect, style::Style, Frame};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

/// Screen cells of the controls drawn this frame
#[derive(Debug, Clone, Default)]
pub struct ControlHits {
    pub pips: Vec<(Rect, String)>,
    pub prev: Option<Rect>,
    pub next: Option<Rect>,
}

/// Dot navigation with optional prev/next buttons on either side
pub struct PipsWidget;

impl PipsWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) -> ControlHits {
        let theme = &app.theme;
        let buf = frame.buffer_mut();
        buf.set_style(area, Style::default().bg(theme.bg1));

        let mut hits = ControlHits::default();
        if area.width == 0 || area.height == 0 {
            return hits;
        }

        let nav = app.pager.nav_state();
        let button_style = |active: bool| {
            Style::default()
                .bg(theme.bg1)
                .fg(if active { theme.accent } else { theme.disabled })
        };

        let mut left = area.x + 1;
        let mut right = area.right().saturating_sub(1);

        if let Some(label) = &nav.prev_target {
            let width = (label.width() as u16).min(area.width / 3);
            buf.set_stringn(left, area.y, label, width as usize, button_style(nav.prev_active));
            hits.prev = Some(Rect::new(left, area.y, width, 1));
            left += width + 1;
        }

        if let Some(label) = &nav.next_target {
            let width = (label.width() as u16).min(area.width / 3);
            let x = right.saturating_sub(width);
            buf.set_stringn(x, area.y, label, width as usize, button_style(nav.next_active));
            hits.next = Some(Rect::new(x, area.y, width, 1));
            right = x.saturating_sub(1);
        }

        let pips = app.pager.pips();
        let room = right.saturating_sub(left);
        let needed = (pips.len() as u16 * 2).saturating_sub(1);
        if pips.is_empty() || needed > room {
            return hits;
        }

        let mut x = left + (room - needed) / 2;
        for pip in pips {
            let (symbol, fg) = if pip.active {
                ("●", theme.pip_active)
            } else {
                ("○", theme.pip)
            };
            buf.set_string(x, area.y, symbol, Style::default().bg(theme.bg1).fg(fg));
            hits.pips.push((Rect::new(x, area.y, 1, 1), pip.href));
            x += 2;
        }

        hits
    }
}
