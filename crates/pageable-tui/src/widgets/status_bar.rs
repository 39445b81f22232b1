use pageable_core::InputState;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

const GAUGE_WIDTH: usize = 10;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let pager = &app.pager;
        let snapshot = pager.snapshot();

        let state = match pager.input_state() {
            InputState::Idle => "IDLE",
            InputState::Pressed => "PRESS",
            InputState::Dragging => "DRAG",
            InputState::Transitioning => "MOVE",
        };

        let mut flags = String::new();
        if pager.is_infinite() {
            flags.push_str(" ∞");
        }
        if pager.slideshow().is_some_and(|s| s.is_running()) {
            flags.push_str(" ▶");
        }

        let status_text = match &app.status_message {
            Some(msg) => format!(" {}", msg),
            None => format!(
                " {} | {}/{} {} | {:.0}/{:.0}px |{}",
                state,
                snapshot.index + 1,
                pager.page_count(),
                pager.current_page().anchor,
                snapshot.scrolled,
                snapshot.max,
                flags,
            ),
        };

        let filled = (snapshot.progress() * GAUGE_WIDTH as f64).round() as usize;
        let filled = filled.min(GAUGE_WIDTH);
        let gauge = format!(
            " {}{} ",
            "▰".repeat(filled),
            "▱".repeat(GAUGE_WIDTH - filled)
        );

        let help_hint = " q:quit j/k:page 1-9:jump i:wrap o:axis s:slides ";
        let used = status_text.width() + gauge.width() + help_hint.width();
        let padding = " ".repeat((area.width as usize).saturating_sub(used));

        let bar = Style::default().bg(theme.bg2);
        let line = Line::from(vec![
            Span::styled(status_text, bar.fg(theme.fg0)),
            Span::styled(padding, bar),
            Span::styled(gauge, bar.fg(theme.accent)),
            Span::styled(help_hint, bar.fg(theme.grey2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
