use pageable_core::{Axis, Page};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::App;
use crate::theme::Theme;

/// Draws the strip of pages shifted by the pager's view offset
pub struct PagesWidget;

impl PagesWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        frame.render_widget(Block::default().style(Style::default().bg(theme.bg0)), area);
        if area.width == 0 || area.height == 0 {
            return;
        }

        let pager = &app.pager;
        let layout = pager.layout();
        let horizontal = layout.axis == Axis::X;
        let view = pager.view_offset();
        let extent = i64::from(if horizontal { area.width } else { area.height });
        let page_count = pager.page_count();

        for (slot, page) in pager.slots().into_iter().enumerate() {
            let offset_px = layout.slot_start(slot) - view;
            let start = if horizontal {
                app.metrics.to_columns(offset_px)
            } else {
                app.metrics.to_rows(offset_px)
            };
            let end = start + extent;
            if end <= 0 || start >= extent {
                continue;
            }

            let visible_start = start.max(0);
            let visible_len = (end.min(extent) - visible_start) as u16;
            let skip = (visible_start - start) as u16;

            let (rect, scroll) = if horizontal {
                (
                    Rect::new(area.x + visible_start as u16, area.y, visible_len, area.height),
                    (0, skip),
                )
            } else {
                (
                    Rect::new(area.x, area.y + visible_start as u16, area.width, visible_len),
                    (skip, 0),
                )
            };

            // clone slots share their original's shade
            let real_index = if pager.is_infinite() {
                (slot + page_count - 1) % page_count
            } else {
                slot
            };
            let bg = if real_index % 2 == 0 { theme.bg0 } else { theme.bg1 };

            let paragraph = Paragraph::new(page_lines(page, area.width, theme))
                .style(Style::default().bg(bg).fg(theme.fg0))
                .scroll(scroll);
            frame.render_widget(paragraph, rect);
        }
    }
}

fn page_lines(page: &Page, width: u16, theme: &Theme) -> Vec<Line<'static>> {
    let width = width as usize;
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", page.anchor),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("  {}", "─".repeat(width.saturating_sub(4))),
            Style::default().fg(theme.grey1),
        )),
        Line::from(""),
    ];

    for paragraph in page.body.lines() {
        if paragraph.trim().is_empty() {
            lines.push(Line::from(""));
            continue;
        }
        for wrapped in wrap_text(paragraph, width.saturating_sub(4)) {
            lines.push(Line::from(format!("  {}", wrapped)));
        }
    }

    lines
}

/// Greedy word wrap by display width
///
/// Words wider than `width` are split across lines.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        let needed = if current.is_empty() {
            word_width
        } else {
            current_width + 1 + word_width
        };

        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
        } else {
            for c in word.chars() {
                let w = c.width().unwrap_or(0);
                if current_width + w > width {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(c);
                current_width += w;
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
