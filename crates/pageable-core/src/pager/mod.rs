//! The pager: pages, layout and the state shared by the transition engine,
//! the input controllers and the infinite-wrap manager.
//!
//! A [`Pager`] is single-threaded and cooperative. The host feeds it input
//! through the controller methods and calls [`Pager::tick`] once per frame;
//! every delay and animation step is resolved inside `tick`.

mod engine;
mod infinite;
mod input;
mod navigate;

#[cfg(test)]
mod tests;

use std::fmt;
use std::time::Instant;

use tracing::{debug, error, info};

use crate::clock::{Clock, SystemClock};
use crate::config::PagerConfig;
use crate::container::Container;
use crate::easing::EasingFn;
use crate::emitter::{Emitter, EventKind, ListenerId, PagerEvent};
use crate::error::{Error, Result};
use crate::geometry::{Orientation, Size};
use crate::hooks::{NoHooks, PagerHooks};
use crate::layout::Layout;
use crate::location::{normalize_hash, LocationHash, NoLocation};
use crate::page::{ClonePair, Page};
use crate::slideshow::Slideshow;
use crate::snapshot::Snapshot;

pub use engine::TransitionRequest;
pub use input::{Handled, InputState, Key, MouseButton, PointerDevice, PointerEvent};

use engine::Transition;

/// Free-drag progress
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// Not dragging
    #[default]
    Idle,
    /// Pressed with free scroll enabled, nothing measured yet
    Armed,
    /// Live drag offset along the active axis
    Offset(f64),
}

impl DragState {
    #[inline]
    pub fn is_active(self) -> bool {
        self != DragState::Idle
    }

    #[inline]
    pub fn offset(self) -> Option<f64> {
        match self {
            DragState::Offset(offset) => Some(offset),
            _ => None,
        }
    }
}

/// One navigation dot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pip {
    /// Link target, `#id`
    pub href: String,
    pub active: bool,
}

/// State of the prev/next buttons
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    pub prev_active: bool,
    pub next_active: bool,
    /// Configured button targets
    pub prev_target: Option<String>,
    pub next_target: Option<String>,
}

/// Builder collecting everything a pager needs before it mounts
pub struct PagerBuilder {
    config: PagerConfig,
    hooks: Box<dyn PagerHooks>,
    clock: Box<dyn Clock>,
    location: Box<dyn LocationHash>,
    listeners: Vec<(EventKind, Box<dyn FnMut(&PagerEvent)>)>,
    easing: Option<EasingFn>,
    scrollbar: f64,
}

impl PagerBuilder {
    pub fn new(config: PagerConfig) -> Self {
        Self {
            config,
            hooks: Box::new(NoHooks),
            clock: Box::new(SystemClock),
            location: Box::new(NoLocation),
            listeners: Vec::new(),
            easing: None,
            scrollbar: 0.0,
        }
    }

    /// Set the lifecycle hooks
    pub fn with_hooks(mut self, hooks: impl PagerHooks + 'static) -> Self {
        self.hooks = Box::new(hooks);
        self
    }

    /// Set the time source
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Set the location the active page is mirrored into
    pub fn with_location(mut self, location: impl LocationHash + 'static) -> Self {
        self.location = Box::new(location);
        self
    }

    /// Subscribe before mounting, so the listener also sees `init`
    pub fn with_listener<F>(mut self, kind: EventKind, listener: F) -> Self
    where
        F: FnMut(&PagerEvent) + 'static,
    {
        self.listeners.push((kind, Box::new(listener)));
        self
    }

    /// Override the configured easing preset
    pub fn with_easing_fn(mut self, easing: EasingFn) -> Self {
        self.easing = Some(easing);
        self
    }

    /// Width of the scrollbar gutter kept across the axis
    pub fn with_scrollbar(mut self, scrollbar: f64) -> Self {
        self.scrollbar = scrollbar;
        self
    }

    /// Discover pages in `container`, lay them out in `viewport` and start
    ///
    /// Configuration problems are logged once and returned; no instance is
    /// produced in that case.
    pub fn mount(self, container: Option<Container>, viewport: Size) -> Result<Pager> {
        Pager::mount(self, container, viewport).inspect_err(|e| error!("Pageable: {}", e))
    }
}

impl fmt::Debug for PagerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PagerBuilder")
            .field("config", &self.config)
            .field("listeners", &self.listeners.len())
            .field("scrollbar", &self.scrollbar)
            .finish()
    }
}

pub struct Pager {
    config: PagerConfig,
    container: Container,
    pages: Vec<Page>,
    clones: Option<ClonePair>,
    anchors: Vec<String>,
    layout: Layout,
    viewport: Size,
    scrollbar: f64,
    /// Committed page
    index: usize,
    /// Page a transition is leaving
    old_index: usize,
    /// Page under the pointer when it was pressed
    start_index: usize,
    /// Page the slideshow advances from
    slide_index: usize,
    /// Wrapper scroll offset (moves only when a transition settles)
    scroll_offset: f64,
    /// Scroll position reported to observers, follows the animation
    scroll_position: f64,
    /// Live translation of the content along the axis
    translation: f64,
    drag: DragState,
    down: Option<crate::geometry::Point>,
    transition: Option<Transition>,
    slideshow: Option<Slideshow>,
    last_resize: Option<Instant>,
    initialised: bool,
    easing: EasingFn,
    clock: Box<dyn Clock>,
    location: Box<dyn LocationHash>,
    hooks: Option<Box<dyn PagerHooks>>,
    emitter: Emitter,
}

impl Pager {
    /// Start building a pager
    pub fn builder(config: PagerConfig) -> PagerBuilder {
        PagerBuilder::new(config)
    }

    fn mount(builder: PagerBuilder, container: Option<Container>, viewport: Size) -> Result<Self> {
        let mut container = container.ok_or(Error::NoContainer)?;
        builder.config.validate()?;

        if !builder.config.anchors.is_empty() {
            container.append_anchors(builder.config.anchors.iter().cloned());
        }

        let pages: Vec<Page> = container.anchored().filter_map(Page::from_element).collect();
        if pages.is_empty() {
            return Err(Error::NoPages(container.name.clone()));
        }

        let anchors = pages.iter().map(Page::hash).collect();
        let config = builder.config;
        let layout = Layout::compute(viewport, config.orientation, pages.len(), false, builder.scrollbar);
        let mut emitter = Emitter::new();
        for (kind, listener) in builder.listeners {
            emitter.on(kind, listener);
        }

        let mut pager = Self {
            easing: builder.easing.unwrap_or_else(|| config.easing.function()),
            slideshow: config.slideshow.as_ref().map(Slideshow::new),
            config,
            container,
            pages,
            clones: None,
            anchors,
            layout,
            viewport,
            scrollbar: builder.scrollbar,
            index: 0,
            old_index: 0,
            start_index: 0,
            slide_index: 0,
            scroll_offset: 0.0,
            scroll_position: 0.0,
            translation: 0.0,
            drag: DragState::Idle,
            down: None,
            transition: None,
            last_resize: None,
            initialised: false,
            clock: builder.clock,
            location: builder.location,
            hooks: Some(builder.hooks),
            emitter,
        };

        pager.init();
        Ok(pager)
    }

    fn init(&mut self) {
        self.set_active(0);

        if self.config.infinite {
            self.clones = ClonePair::create(&self.pages);
        }

        self.update();
        self.load();

        let snapshot = self.snapshot();
        self.call_hooks(|h, p| h.on_init(p, &snapshot));
        self.emitter.emit(&PagerEvent::Init(snapshot));

        self.initialised = true;
        info!(
            container = %self.container.name,
            pages = self.pages.len(),
            orientation = %self.config.orientation,
            infinite = self.is_infinite(),
            "Pager mounted"
        );

        let now = self.clock.now();
        if let Some(slideshow) = self.slideshow.as_mut() {
            slideshow.start(now);
        }
    }

    /// Restore the page named by the location hash, if any
    fn load(&mut self) {
        if let Some(hash) = self.location.hash() {
            if let Some(index) = self.anchor_index(&hash) {
                self.index = index;
                self.slide_index = index;
                self.set_active(index);
                self.scroll_position = self.layout.offset_for(index as isize);

                let snapshot = self.snapshot();
                self.call_hooks(|h, p| {
                    h.on_scroll(p, &snapshot);
                    h.on_finish(p, &snapshot);
                });
                self.emitter.emit(&PagerEvent::Scroll(snapshot));
                debug!(index, hash = %hash, "Restored page from location");
            }
        }

        self.update();
    }

    /// Recompute the layout from the current viewport
    pub fn update(&mut self) {
        self.layout = Layout::compute(
            self.viewport,
            self.config.orientation,
            self.pages.len(),
            self.clones.is_some(),
            self.scrollbar,
        );

        // mid-transition the wrapper still shows the page being left
        let shown = self
            .transition
            .map_or(self.index as isize, |t| t.request.origin as isize);
        self.scroll_offset = self.layout.offset_for(shown);
        self.scroll_position = self.scroll_offset;

        let page_size = self.layout.page;
        for page in &mut self.pages {
            page.size = page_size;
        }
        if let Some(clones) = self.clones.as_mut() {
            clones.resize(page_size);
        }

        let snapshot = self.snapshot();
        self.call_hooks(|h, p| h.on_update(p, &snapshot));
        self.emitter.emit(&PagerEvent::Update(snapshot));
    }

    /// Viewport changed; updates at most once per throttle window
    pub fn resize(&mut self, viewport: Size) -> bool {
        if !self.initialised {
            return false;
        }

        let now = self.clock.now();
        if let Some(last) = self.last_resize {
            if now.saturating_duration_since(last) < self.config.throttle() {
                return false;
            }
        }

        self.last_resize = Some(now);
        self.viewport = viewport;
        self.update();
        true
    }

    /// Switch the paging axis
    pub fn orientate(&mut self, orientation: Orientation) {
        if !self.initialised {
            return;
        }

        self.config.orientation = orientation;
        debug!(orientation = %orientation, "Orientation changed");
        self.update();
    }

    /// Tear the pager down: listeners, timers, clones and page state are
    /// released. Calling it again does nothing.
    pub fn destroy(&mut self) -> bool {
        if !self.initialised {
            return false;
        }

        self.emitter.emit(&PagerEvent::Destroy);
        self.emitter.clear();

        if let Some(slideshow) = self.slideshow.as_mut() {
            slideshow.stop();
        }
        self.slideshow = None;

        self.transition = None;
        self.translation = 0.0;
        self.drag = DragState::Idle;
        self.down = None;

        if self.clones.take().is_some() {
            self.config.infinite = false;
        }

        for page in &mut self.pages {
            page.active = false;
            page.size = Size::default();
        }

        self.initialised = false;
        info!(container = %self.container.name, "Pager destroyed");
        true
    }

    /// Jump-free report of where the pager is
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(
            self.index,
            self.layout.visible_scrolled(self.scroll_position),
            self.layout.visible_max(),
        )
    }

    // ---- listeners ----

    /// Subscribe to a lifecycle event
    pub fn on<F>(&mut self, kind: EventKind, listener: F) -> ListenerId
    where
        F: FnMut(&PagerEvent) + 'static,
    {
        self.emitter.on(kind, listener)
    }

    /// Unsubscribe a listener
    pub fn off(&mut self, kind: EventKind, id: ListenerId) -> bool {
        self.emitter.off(kind, id)
    }

    /// Dispatch an event to the registered listeners
    pub fn emit(&mut self, event: &PagerEvent) {
        self.emitter.emit(event);
    }

    // ---- accessors ----

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    #[inline]
    pub fn last_index(&self) -> usize {
        self.pages.len() - 1
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn current_page(&self) -> &Page {
        &self.pages[self.index]
    }

    /// Page hashes (`#id`) in page order
    pub fn anchors(&self) -> &[String] {
        &self.anchors
    }

    pub fn config(&self) -> &PagerConfig {
        &self.config
    }

    pub fn orientation(&self) -> Orientation {
        self.config.orientation
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// The container the pager was mounted on
    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn location(&self) -> &dyn LocationHash {
        self.location.as_ref()
    }

    pub fn is_initialised(&self) -> bool {
        self.initialised
    }

    /// A timed transition is in flight
    #[inline]
    pub fn is_scrolling(&self) -> bool {
        self.transition.is_some()
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_infinite(&self) -> bool {
        self.clones.is_some()
    }

    /// Live translation applied to the content along the axis
    pub fn translation(&self) -> f64 {
        self.translation
    }

    /// Strip position currently at the viewport origin
    pub fn view_offset(&self) -> f64 {
        self.scroll_offset - self.translation
    }

    /// Pages in layout order, clones included
    pub fn slots(&self) -> Vec<&Page> {
        let mut slots = Vec::with_capacity(self.layout.slot_count);
        if let Some(clones) = &self.clones {
            slots.push(&clones.head);
        }
        slots.extend(self.pages.iter());
        if let Some(clones) = &self.clones {
            slots.push(&clones.tail);
        }
        slots
    }

    pub fn clones(&self) -> Option<&ClonePair> {
        self.clones.as_ref()
    }

    /// Dot navigation, empty when pips are disabled
    pub fn pips(&self) -> Vec<Pip> {
        if !self.config.pips {
            return Vec::new();
        }
        self.anchors
            .iter()
            .enumerate()
            .map(|(i, href)| Pip {
                href: href.clone(),
                active: i == self.index,
            })
            .collect()
    }

    pub fn nav_state(&self) -> NavState {
        let infinite = self.is_infinite();
        NavState {
            prev_active: infinite || self.index > 0,
            next_active: infinite || self.index < self.last_index(),
            prev_target: self.config.nav_prev.clone(),
            next_target: self.config.nav_next.clone(),
        }
    }

    pub fn slideshow(&self) -> Option<&Slideshow> {
        self.slideshow.as_ref()
    }

    pub fn slideshow_mut(&mut self) -> Option<&mut Slideshow> {
        self.slideshow.as_mut()
    }

    /// Start the slideshow timer, if one is configured
    pub fn start_slideshow(&mut self) -> bool {
        let now = self.clock.now();
        match self.slideshow.as_mut() {
            Some(slideshow) if self.initialised => {
                slideshow.start(now);
                true
            }
            _ => false,
        }
    }

    pub fn stop_slideshow(&mut self) -> bool {
        match self.slideshow.as_mut() {
            Some(slideshow) => {
                slideshow.stop();
                true
            }
            None => false,
        }
    }

    // ---- internals ----

    fn anchor_index(&self, hash: &str) -> Option<usize> {
        let hash = normalize_hash(hash);
        self.anchors.iter().position(|a| *a == hash)
    }

    fn set_active(&mut self, index: usize) {
        for (i, page) in self.pages.iter_mut().enumerate() {
            page.active = i == index;
        }
    }

    /// Run hooks with the pager as read-only context
    fn call_hooks<F>(&mut self, f: F)
    where
        F: FnOnce(&mut dyn PagerHooks, &Pager),
    {
        if let Some(mut hooks) = self.hooks.take() {
            f(hooks.as_mut(), self);
            self.hooks = Some(hooks);
        }
    }
}

impl fmt::Debug for Pager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pager")
            .field("container", &self.container.name)
            .field("pages", &self.pages.len())
            .field("index", &self.index)
            .field("orientation", &self.config.orientation)
            .field("infinite", &self.is_infinite())
            .field("scrolling", &self.is_scrolling())
            .field("drag", &self.drag)
            .field("emitter", &self.emitter)
            .finish_non_exhaustive()
    }
}
