use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{MouseButton as TermButton, MouseEvent, MouseEventKind};
use pageable_core::config::UiConfig;
use pageable_core::{EventKind, MouseButton, Pager, PagerEvent, PointerEvent};
use ratatui::layout::{Position, Rect};
use tracing::debug;

use crate::input::Action;
use crate::metrics::CellMetrics;
use crate::theme::Theme;

/// Screen regions from the last draw, used for mouse hit tests
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    pub pages: Rect,
    /// Pip cell and the hash it links to
    pub pips: Vec<(Rect, String)>,
    pub prev: Option<Rect>,
    pub next: Option<Rect>,
}

/// Application state
pub struct App {
    pub pager: Pager,
    pub ui: UiConfig,
    pub theme: Theme,
    pub metrics: CellMetrics,
    pub should_quit: bool,
    pub status_message: Option<String>,
    pub hits: HitMap,
    last_event: Rc<RefCell<Option<EventKind>>>,
}

impl App {
    pub fn new(mut pager: Pager, ui: UiConfig, theme: Theme) -> Self {
        let last_event = Rc::new(RefCell::new(None));
        for kind in [EventKind::Update, EventKind::ScrollStart, EventKind::ScrollEnd] {
            let sink = Rc::clone(&last_event);
            pager.on(kind, move |event: &PagerEvent| {
                *sink.borrow_mut() = Some(event.kind());
            });
        }

        Self {
            pager,
            ui,
            theme,
            metrics: CellMetrics::default(),
            should_quit: false,
            status_message: None,
            hits: HitMap::default(),
            last_event,
        }
    }

    /// Most recent lifecycle event seen by the app
    pub fn last_event(&self) -> Option<EventKind> {
        *self.last_event.borrow()
    }

    /// Advance the pager to the current time
    pub fn tick(&mut self) -> bool {
        self.pager.tick()
    }

    /// Whether the next poll should run at animation frame rate
    pub fn needs_fast_update(&self) -> bool {
        self.pager.is_scrolling() || self.pager.is_dragging()
    }

    /// Keep the pager's viewport in step with the drawn page area
    ///
    /// Resizes dropped by the throttle are retried on later frames.
    pub fn sync_viewport(&mut self, area: Rect) {
        self.hits.pages = area;
        let viewport = self.metrics.viewport(area);
        if viewport != self.pager.viewport() {
            self.pager.resize(viewport);
        }
    }

    pub fn quit(&mut self) {
        self.pager.destroy();
        self.should_quit = true;
    }

    pub fn handle_action(&mut self, action: Action) {
        if action != Action::None {
            debug!(?action, "Handling action");
        }

        match action {
            Action::Quit => self.quit(),
            Action::Pager(key) => {
                self.pager.key(key);
            }
            Action::Next => {
                self.pager.next();
            }
            Action::Prev => {
                self.pager.prev();
            }
            Action::Page(page) => {
                if page > self.pager.page_count() {
                    self.status_message = Some(format!("No page {}", page));
                } else {
                    self.pager.scroll_to_page(page);
                }
            }
            Action::First => {
                self.pager.scroll_to_index(0);
            }
            Action::Last => {
                let last = self.pager.last_index();
                self.pager.scroll_to_index(last);
            }
            Action::ToggleInfinite => {
                let infinite = !self.pager.is_infinite();
                if self.pager.set_infinite(infinite) {
                    self.status_message = Some(format!(
                        "Infinite wrap {}",
                        if infinite { "on" } else { "off" }
                    ));
                }
            }
            Action::ToggleOrientation => {
                let orientation = self.pager.orientation().toggled();
                self.pager.orientate(orientation);
                self.status_message = Some(format!("Orientation: {}", orientation));
            }
            Action::ToggleSlideshow => self.toggle_slideshow(),
            Action::None => {}
        }
    }

    fn toggle_slideshow(&mut self) {
        let running = match self.pager.slideshow() {
            Some(slideshow) => slideshow.is_running(),
            None => {
                self.status_message = Some("No slideshow configured".to_string());
                return;
            }
        };

        if running {
            self.pager.stop_slideshow();
            self.status_message = Some("Slideshow paused".to_string());
        } else {
            self.pager.start_slideshow();
            self.status_message = Some("Slideshow running".to_string());
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let (column, row) = (mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::ScrollDown => {
                self.pager.wheel(1.0);
            }
            MouseEventKind::ScrollUp => {
                self.pager.wheel(-1.0);
            }
            MouseEventKind::Down(button) => {
                if button == TermButton::Left && self.click_controls(column, row) {
                    return;
                }
                let event = self.pointer(column, row).with_button(map_button(button));
                self.pager.pointer_down(event);
            }
            MouseEventKind::Drag(TermButton::Left) => {
                let event = self.pointer(column, row);
                self.pager.pointer_move(event);
            }
            MouseEventKind::Up(TermButton::Left) => {
                let event = self.pointer(column, row);
                self.pager.pointer_up(event);
            }
            _ => {}
        }
    }

    fn pointer(&self, column: u16, row: u16) -> PointerEvent {
        let area = self.hits.pages;
        let position = self.metrics.point(column, row, area);
        let mut event = PointerEvent::mouse(position.x, position.y);
        event.on_page = area.contains(Position::new(column, row));
        event
    }

    /// Pips and prev/next buttons; returns whether one was hit
    fn click_controls(&mut self, column: u16, row: u16) -> bool {
        let position = Position::new(column, row);

        let pip = self
            .hits
            .pips
            .iter()
            .find(|(rect, _)| rect.contains(position))
            .map(|(_, href)| href.clone());
        if let Some(href) = pip {
            self.pager.click_link(&href);
            return true;
        }

        if self.hits.prev.is_some_and(|r| r.contains(position)) {
            self.pager.prev();
            return true;
        }
        if self.hits.next.is_some_and(|r| r.contains(position)) {
            self.pager.next();
            return true;
        }

        false
    }
}

fn map_button(button: TermButton) -> MouseButton {
    match button {
        TermButton::Left => MouseButton::Primary,
        TermButton::Middle => MouseButton::Middle,
        TermButton::Right => MouseButton::Secondary,
    }
}
