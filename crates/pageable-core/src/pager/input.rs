//! Input controllers: wheel, pointer (mouse and touch), keyboard and links.
//!
//! Hosts translate their raw events into these calls. Every controller
//! returns a [`Handled`] telling the host whether to suppress the event's
//! default behaviour.

use tracing::debug;

use super::{DragState, Pager};
use crate::emitter::PagerEvent;
use crate::geometry::{Axis, Point};
use crate::location::link_hash;

/// Outcome of feeding an input event to the pager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Not for the pager; let the host's default run
    Ignored,
    /// Taken by the pager; suppress the host's default
    Consumed,
    /// Taken and a transition was started
    Navigated,
}

impl Handled {
    /// Whether the host should suppress its default handling
    #[inline]
    pub fn prevents_default(self) -> bool {
        self != Handled::Ignored
    }

    fn from_started(started: bool) -> Self {
        if started {
            Handled::Navigated
        } else {
            Handled::Consumed
        }
    }
}

/// Where the pager is in its input cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputState {
    Idle,
    Pressed,
    Dragging,
    Transitioning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerDevice {
    #[default]
    Mouse,
    Touch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseButton {
    #[default]
    Primary,
    Middle,
    Secondary,
}

/// A press, move or release
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub device: PointerDevice,
    pub button: MouseButton,
    pub position: Point,
    /// The event hit one of the pages
    pub on_page: bool,
    /// The event hit a link
    pub on_link: bool,
}

impl PointerEvent {
    pub fn mouse(x: f64, y: f64) -> Self {
        Self {
            device: PointerDevice::Mouse,
            button: MouseButton::Primary,
            position: Point::new(x, y),
            on_page: true,
            on_link: false,
        }
    }

    pub fn touch(x: f64, y: f64) -> Self {
        Self {
            device: PointerDevice::Touch,
            ..Self::mouse(x, y)
        }
    }

    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.button = button;
        self
    }

    pub fn off_page(mut self) -> Self {
        self.on_page = false;
        self
    }

    pub fn on_link(mut self) -> Self {
        self.on_link = true;
        self
    }
}

/// Navigation keys the pager understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    PageUp,
    PageDown,
    Other,
}

impl Pager {
    pub fn input_state(&self) -> InputState {
        if self.is_scrolling() {
            InputState::Transitioning
        } else if self.drag.is_active() {
            InputState::Dragging
        } else if self.down.is_some() {
            InputState::Pressed
        } else {
            InputState::Idle
        }
    }

    /// Wheel step; positive `delta_y` moves forward
    pub fn wheel(&mut self, delta_y: f64) -> Handled {
        if !self.initialised {
            return Handled::Ignored;
        }
        let pressed = self.input_state() == InputState::Pressed;
        if !self.config.events.wheel || self.is_scrolling() || pressed || delta_y == 0.0 {
            return Handled::Consumed;
        }

        let increasing = delta_y > 0.0;
        if self.overscroll(increasing, 0.0) {
            return Handled::Navigated;
        }

        let target = if increasing {
            (self.index + 1).min(self.last_index())
        } else {
            self.index.saturating_sub(1)
        };

        Handled::from_started(self.scroll_to_index(target))
    }

    pub fn pointer_down(&mut self, event: PointerEvent) -> Handled {
        if !self.initialised || self.is_scrolling() || self.is_dragging() {
            return Handled::Ignored;
        }

        match event.device {
            PointerDevice::Touch if !self.config.events.touch => {
                // taps on links still follow the link
                return if event.on_link {
                    Handled::Ignored
                } else {
                    Handled::Consumed
                };
            }
            PointerDevice::Mouse
                if !self.config.events.mouse || event.button != MouseButton::Primary =>
            {
                return Handled::Ignored;
            }
            _ => {}
        }

        if !event.on_page {
            return Handled::Ignored;
        }

        self.drag = if self.config.free_scroll {
            DragState::Armed
        } else {
            DragState::Idle
        };

        if let Some(slideshow) = self.slideshow.as_mut() {
            slideshow.stop();
        }

        self.down = Some(event.position);
        self.start_index = self.index;

        let index = self.index;
        self.call_hooks(|h, p| h.on_before_start(p, index));
        Handled::Consumed
    }

    /// Pointer moved; only free scroll follows the pointer
    pub fn pointer_move(&mut self, event: PointerEvent) -> Handled {
        if !self.drag.is_active() || self.is_scrolling() {
            return Handled::Ignored;
        }

        let Some(down) = self.down else {
            return Handled::Ignored;
        };
        let scrolled = self.limit_drag(event.position, down);
        self.translation = scrolled;
        self.drag = DragState::Offset(scrolled);

        let mut snapshot = self.snapshot();
        snapshot.scrolled -= scrolled;
        self.call_hooks(|h, p| h.on_scroll(p, &snapshot));
        self.emitter.emit(&PagerEvent::Scroll(snapshot));
        Handled::Consumed
    }

    pub fn pointer_up(&mut self, event: PointerEvent) -> Handled {
        let Some(down) = self.down.take() else {
            return Handled::Ignored;
        };

        let axis = self.layout.axis;
        let displacement = axis.coord(event.position) - axis.coord(down);
        let can_change = displacement.abs() >= self.config.swipe_threshold;
        self.old_index = self.index;

        if !self.is_scrolling() {
            let now = self.clock.now();
            if let Some(slideshow) = self.slideshow.as_mut() {
                slideshow.start(now);
            }
        }

        if self.drag.is_active() && !self.is_scrolling() {
            return self.release_drag(event.position, down, can_change);
        }

        if self.is_scrolling() {
            return Handled::Consumed;
        }

        // a release where it was pressed is a tap, never a swipe
        if can_change && displacement != 0.0 {
            let forward = displacement < 0.0;
            if self.overscroll(forward, 0.0) {
                return Handled::Navigated;
            }
            self.step_index(forward);
        }

        if self.start_index == self.index {
            // swipe too short: settle where we are
            let snapshot = self.snapshot();
            self.call_hooks(|h, p| h.on_finish(p, &snapshot));
            return Handled::Consumed;
        }

        let origin = self.old_index;
        let amount = self
            .layout
            .amount_between(origin as isize, self.index as isize);
        Handled::from_started(self.scroll_by(origin, amount, self.index as isize))
    }

    fn release_drag(&mut self, position: Point, down: Point, can_change: bool) -> Handled {
        let scrolled = self.limit_drag(position, down);
        self.drag = DragState::Offset(scrolled);

        if can_change && scrolled != 0.0 {
            if self.overscroll(scrolled < 0.0, scrolled) {
                return Handled::Navigated;
            }
            self.step_index(scrolled < 0.0);
        }

        // snaps back with an animation even when the page did not change
        let origin = self.old_index;
        let amount = self
            .layout
            .amount_between(origin as isize, self.index as isize)
            - scrolled;
        Handled::from_started(self.scroll_by(origin, amount, self.index as isize))
    }

    /// Follow a link; anchors of known pages are navigated to
    pub fn click_link(&mut self, href: &str) -> Handled {
        if !self.initialised {
            return Handled::Ignored;
        }

        match link_hash(href) {
            Some(hash) if self.anchors.contains(&hash) => {
                debug!(hash = %hash, "Following page link");
                Handled::from_started(self.scroll_to_anchor(&hash))
            }
            _ => Handled::Ignored,
        }
    }

    /// Key press; ignored while a transition or drag is in progress
    pub fn key(&mut self, key: Key) -> Handled {
        if !self.initialised {
            return Handled::Ignored;
        }
        if self.is_scrolling() || self.is_dragging() || self.down.is_some() {
            return Handled::Consumed;
        }

        let (back, forward) = match self.layout.axis {
            Axis::X => (Key::ArrowLeft, Key::ArrowRight),
            Axis::Y => (Key::ArrowUp, Key::ArrowDown),
        };

        let started = match key {
            Key::PageUp | Key::ArrowLeft => self.prev(),
            Key::PageDown | Key::ArrowRight => self.next(),
            k if k == back => self.prev(),
            k if k == forward => self.next(),
            _ => return Handled::Ignored,
        };

        Handled::from_started(started)
    }

    fn step_index(&mut self, forward: bool) {
        if forward {
            if self.index < self.last_index() {
                self.index += 1;
            }
        } else if self.index > 0 {
            self.index -= 1;
        }
    }

    /// Drag offset along the axis, resisted past the first and last page
    fn limit_drag(&self, position: Point, origin: Point) -> f64 {
        let axis = self.layout.axis;
        let scrolled = axis.coord(position) - axis.coord(origin);

        let at_edge = (self.index == 0 && scrolled > 0.0)
            || (self.index == self.last_index() && scrolled < 0.0);
        if !self.is_infinite() && at_edge {
            scrolled / 10.0
        } else {
            scrolled
        }
    }
}
