use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::clock::ManualClock;
use crate::config::SlideshowConfig;
use crate::container::Element;
use crate::easing;
use crate::location::MemoryLocation;

const VIEWPORT: Size = Size::new(1280.0, 800.0);

fn deck(pages: usize) -> Container {
    Container::from_anchors("main", (0..pages).map(|i| format!("Page {}", i)))
}

#[derive(Clone, Default)]
struct HookLog(Rc<RefCell<Vec<String>>>);

impl HookLog {
    fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

impl PagerHooks for HookLog {
    fn on_init(&mut self, _pager: &Pager, snapshot: &Snapshot) {
        self.0.borrow_mut().push(format!("init:{}", snapshot.index));
    }

    fn on_before_start(&mut self, _pager: &Pager, index: usize) {
        self.0.borrow_mut().push(format!("before:{}", index));
    }

    fn on_start(&mut self, _pager: &Pager, page_id: &str) {
        self.0.borrow_mut().push(format!("start:{}", page_id));
    }

    fn on_finish(&mut self, _pager: &Pager, snapshot: &Snapshot) {
        self.0.borrow_mut().push(format!("finish:{}", snapshot.index));
    }
}

struct Harness {
    pager: Pager,
    clock: ManualClock,
    events: Rc<RefCell<Vec<PagerEvent>>>,
    hooks: HookLog,
}

impl Harness {
    fn new(config: PagerConfig) -> Self {
        Self::build(config, 3, MemoryLocation::new(), None)
    }

    fn build(
        config: PagerConfig,
        pages: usize,
        location: MemoryLocation,
        easing: Option<EasingFn>,
    ) -> Self {
        let clock = ManualClock::new();
        let events = Rc::new(RefCell::new(Vec::new()));
        let hooks = HookLog::default();

        let mut builder = Pager::builder(config)
            .with_clock(clock.clone())
            .with_location(location)
            .with_hooks(hooks.clone());
        if let Some(easing) = easing {
            builder = builder.with_easing_fn(easing);
        }
        for kind in EventKind::ALL {
            let sink = Rc::clone(&events);
            builder = builder.with_listener(kind, move |e| sink.borrow_mut().push(e.clone()));
        }

        let pager = builder.mount(Some(deck(pages)), VIEWPORT).unwrap();
        Self {
            pager,
            clock,
            events,
            hooks,
        }
    }

    /// Tick at ~60fps until no transition is in flight
    fn settle(&mut self) {
        for _ in 0..500 {
            if !self.pager.tick() {
                return;
            }
            self.clock.advance_ms(16);
        }
        panic!("transition never settled");
    }

    fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    fn kinds(&self) -> Vec<EventKind> {
        self.events.borrow().iter().map(PagerEvent::kind).collect()
    }

    fn count(&self, kind: EventKind) -> usize {
        self.kinds().into_iter().filter(|k| *k == kind).count()
    }

    fn snapshots(&self, kind: EventKind) -> Vec<Snapshot> {
        self.events
            .borrow()
            .iter()
            .filter(|e| e.kind() == kind)
            .filter_map(|e| e.snapshot().copied())
            .collect()
    }

    fn last(&self, kind: EventKind) -> Option<Snapshot> {
        self.snapshots(kind).last().copied()
    }
}

fn infinite() -> PagerConfig {
    PagerConfig {
        infinite: true,
        ..Default::default()
    }
}

fn free_scroll() -> PagerConfig {
    PagerConfig {
        free_scroll: true,
        ..Default::default()
    }
}

#[test]
fn test_mount_reports_init() {
    let h = Harness::new(PagerConfig::default());

    assert_eq!(h.count(EventKind::Init), 1);
    assert_eq!(h.last(EventKind::Init), Some(Snapshot::new(0, 0.0, 1600.0)));
    assert_eq!(h.hooks.entries(), vec!["init:0"]);
    assert!(h.pager.pages()[0].active);
    assert!(!h.pager.pages()[1].active);
    assert_eq!(h.pager.layout().page_size, 800.0);
    assert!(h.pager.is_initialised());
}

#[test]
fn test_mount_without_container() {
    let result = Pager::builder(PagerConfig::default()).mount(None, VIEWPORT);
    assert!(matches!(result, Err(Error::NoContainer)));
}

#[test]
fn test_mount_without_pages() {
    let container = Container::new("main").with_element(Element::plain("just text"));
    let result = Pager::builder(PagerConfig::default()).mount(Some(container), VIEWPORT);
    assert!(matches!(result, Err(Error::NoPages(name)) if name == "main"));
}

#[test]
fn test_mount_appends_configured_anchors() {
    let config = PagerConfig {
        anchors: vec!["Extra Page".to_string()],
        ..Default::default()
    };
    let pager = Pager::builder(config)
        .mount(Some(Container::new("main")), VIEWPORT)
        .unwrap();

    assert_eq!(pager.page_count(), 1);
    assert_eq!(pager.pages()[0].id, "extra-page");
    assert_eq!(pager.anchors(), ["#extra-page".to_string()]);
}

#[test]
fn test_mount_rejects_invalid_config() {
    let config = PagerConfig {
        swipe_threshold: -1.0,
        ..Default::default()
    };
    let result = Pager::builder(config).mount(Some(deck(3)), VIEWPORT);
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_event_order_to_last_page() {
    let mut h = Harness::new(PagerConfig::default());
    h.clear();

    assert!(h.pager.scroll_to_index(2));
    h.settle();

    let kinds = h.kinds();
    assert_eq!(kinds.first(), Some(&EventKind::ScrollBefore));
    assert_eq!(kinds.get(1), Some(&EventKind::ScrollStart));
    assert_eq!(kinds.last(), Some(&EventKind::ScrollEnd));
    assert!(kinds[2..kinds.len() - 1]
        .iter()
        .all(|k| *k == EventKind::Scroll));
    assert!(h.count(EventKind::Scroll) > 1);

    assert_eq!(h.last(EventKind::ScrollEnd), Some(Snapshot::new(2, 1600.0, 1600.0)));
    assert_eq!(h.pager.location().hash().as_deref(), Some("#page-2"));
    assert!(h.pager.pages()[2].active);
    assert_eq!(h.pager.view_offset(), 1600.0);
}

#[test]
fn test_scroll_frames_move_towards_target() {
    let mut h = Harness::new(PagerConfig::default());
    h.clear();

    h.pager.scroll_to_index(2);
    h.settle();

    let frames = h.snapshots(EventKind::Scroll);
    assert!(frames.windows(2).all(|w| w[0].scrolled <= w[1].scrolled));
    assert!(frames.iter().all(|s| (0.0..=1600.0).contains(&s.scrolled)));
}

#[test]
fn test_busy_exclusion() {
    let mut h = Harness::new(PagerConfig::default());
    h.clear();

    assert!(h.pager.scroll_to_index(1));
    assert_eq!(h.pager.input_state(), InputState::Transitioning);
    assert!(!h.pager.scroll_to_index(2));
    assert!(!h.pager.next());
    assert_eq!(h.pager.wheel(1.0), Handled::Consumed);
    assert_eq!(h.pager.key(Key::ArrowDown), Handled::Consumed);

    h.settle();

    assert_eq!(h.pager.index(), 1);
    assert_eq!(h.count(EventKind::ScrollBefore), 1);
    assert_eq!(h.count(EventKind::ScrollEnd), 1);
    assert_eq!(h.pager.input_state(), InputState::Idle);
}

#[test]
fn test_index_bounds() {
    let mut h = Harness::new(PagerConfig::default());

    assert!(!h.pager.prev());
    assert!(!h.pager.scroll_to_index(3));
    assert!(!h.pager.scroll_to_index(0));
    assert!(!h.pager.scroll_to_page(0));
    assert_eq!(h.pager.wheel(-1.0), Handled::Consumed);
    assert!(!h.pager.is_scrolling());

    assert!(h.pager.scroll_to_page(3));
    h.settle();
    assert_eq!(h.pager.index(), 2);

    assert!(!h.pager.next());
    assert_eq!(h.pager.wheel(1.0), Handled::Consumed);
    assert!(!h.pager.is_scrolling());
    assert_eq!(h.pager.index(), 2);
}

#[test]
fn test_snapshot_round_trip() {
    let mut direct = Harness::new(PagerConfig::default());
    direct.pager.scroll_to_index(2);
    direct.settle();

    let mut stepped = Harness::new(PagerConfig::default());
    stepped.pager.next();
    stepped.settle();
    stepped.pager.next();
    stepped.settle();

    assert_eq!(direct.pager.snapshot(), Snapshot::new(2, 1600.0, 1600.0));
    assert_eq!(direct.pager.snapshot(), stepped.pager.snapshot());
}

#[test]
fn test_infinite_layout() {
    let h = Harness::new(infinite());
    let slots: Vec<&str> = h.pager.slots().iter().map(|p| p.id.as_str()).collect();

    assert_eq!(slots, ["page-2-clone", "page-0", "page-1", "page-2", "page-0-clone"]);
    assert_eq!(h.pager.snapshot(), Snapshot::new(0, 0.0, 1600.0));
    assert_eq!(h.pager.view_offset(), 800.0);
}

#[test]
fn test_infinite_wraps_forward() {
    let mut h = Harness::new(infinite());
    h.pager.scroll_to_index(2);
    h.settle();
    h.clear();

    assert!(h.pager.next());
    assert_eq!(h.pager.transition().map(|t| t.target), Some(3));
    h.settle();

    let frames = h.snapshots(EventKind::Scroll);
    assert!(!frames.is_empty());
    assert!(frames.iter().all(|s| s.index <= 2));
    assert!(frames.iter().all(|s| s.scrolled == 0.0));

    assert_eq!(h.pager.index(), 0);
    assert_eq!(h.last(EventKind::ScrollEnd), Some(Snapshot::new(0, 0.0, 1600.0)));
    assert_eq!(h.pager.location().hash().as_deref(), Some("#page-0"));
    assert_eq!(h.pager.view_offset(), 800.0);
    assert!(h.pager.pages()[0].active);
}

#[test]
fn test_infinite_wraps_backward() {
    let mut h = Harness::new(infinite());
    h.clear();

    assert!(h.pager.prev());
    assert_eq!(h.pager.transition().map(|t| t.target), Some(-1));
    h.settle();

    let frames = h.snapshots(EventKind::Scroll);
    assert!(frames.iter().all(|s| s.index == 0 && s.scrolled == 1600.0));
    assert_eq!(h.pager.index(), 2);
    assert_eq!(h.last(EventKind::ScrollEnd), Some(Snapshot::new(2, 1600.0, 1600.0)));
}

#[test]
fn test_infinite_wrap_lands_on_clone() {
    let mut h = Harness::new(infinite());
    h.pager.scroll_to_index(2);
    h.settle();

    h.pager.wheel(1.0);
    h.pager.tick();
    h.clock.advance_ms(300);
    h.pager.tick();

    // last frame shows the tail clone, one page past the last page
    assert_eq!(h.pager.view_offset(), 800.0 + 1600.0 + 800.0);
    h.clock.advance_ms(16);
    h.pager.tick();
    assert_eq!(h.pager.view_offset(), 800.0);
}

#[test]
fn test_swipe_threshold() {
    let mut h = Harness::new(PagerConfig::default());
    h.clear();

    assert_eq!(h.pager.pointer_down(PointerEvent::mouse(100.0, 400.0)), Handled::Consumed);
    assert_eq!(h.pager.input_state(), InputState::Pressed);
    assert_eq!(h.pager.pointer_up(PointerEvent::mouse(100.0, 351.0)), Handled::Consumed);

    assert_eq!(h.pager.index(), 0);
    assert_eq!(h.pager.input_state(), InputState::Idle);
    assert_eq!(h.count(EventKind::ScrollBefore), 0);
    assert_eq!(h.hooks.entries().last().map(String::as_str), Some("finish:0"));

    h.pager.pointer_down(PointerEvent::mouse(100.0, 400.0));
    assert_eq!(h.pager.pointer_up(PointerEvent::mouse(100.0, 349.0)), Handled::Navigated);
    h.settle();
    assert_eq!(h.pager.index(), 1);

    h.pager.pointer_down(PointerEvent::mouse(100.0, 300.0));
    assert_eq!(h.pager.pointer_up(PointerEvent::mouse(100.0, 360.0)), Handled::Navigated);
    h.settle();
    assert_eq!(h.pager.index(), 0);
}

#[test]
fn test_free_scroll_drag_follows_pointer() {
    let mut h = Harness::new(free_scroll());
    h.clear();

    h.pager.pointer_down(PointerEvent::mouse(100.0, 400.0));
    assert_eq!(h.pager.input_state(), InputState::Dragging);

    h.pager.pointer_move(PointerEvent::mouse(100.0, 300.0));
    assert_eq!(h.pager.translation(), -100.0);
    assert_eq!(h.pager.view_offset(), 100.0);
    assert_eq!(h.last(EventKind::Scroll), Some(Snapshot::new(0, 100.0, 1600.0)));

    assert_eq!(h.pager.pointer_up(PointerEvent::mouse(100.0, 280.0)), Handled::Navigated);
    let request = h.pager.transition().unwrap();
    assert_eq!(request.drag_offset, Some(-120.0));
    assert_eq!(request.amount, -680.0);

    // animation picks up exactly where the drag left off
    h.pager.tick();
    h.pager.tick();
    assert_eq!(h.pager.translation(), -120.0);

    h.settle();
    assert_eq!(h.pager.index(), 1);
    assert_eq!(h.pager.translation(), 0.0);
    assert_eq!(h.pager.view_offset(), 800.0);
    assert_eq!(h.pager.drag_state(), DragState::Idle);
}

#[test]
fn test_free_scroll_resists_past_first_page() {
    let mut h = Harness::new(free_scroll());

    h.pager.pointer_down(PointerEvent::mouse(100.0, 400.0));
    h.pager.pointer_move(PointerEvent::mouse(100.0, 500.0));
    assert_eq!(h.pager.translation(), 10.0);

    // snaps back with an animation
    assert_eq!(h.pager.pointer_up(PointerEvent::mouse(100.0, 500.0)), Handled::Navigated);
    assert_eq!(h.pager.transition().map(|t| t.amount), Some(-10.0));
    h.settle();

    assert_eq!(h.pager.index(), 0);
    assert_eq!(h.pager.translation(), 0.0);
    assert_eq!(h.count(EventKind::ScrollEnd), 1);
}

#[test]
fn test_free_scroll_short_drag_snaps_back() {
    let mut h = Harness::new(free_scroll());

    h.pager.pointer_down(PointerEvent::mouse(100.0, 400.0));
    h.pager.pointer_move(PointerEvent::mouse(100.0, 370.0));
    assert_eq!(h.pager.pointer_up(PointerEvent::mouse(100.0, 370.0)), Handled::Navigated);
    assert_eq!(h.pager.transition().map(|t| t.target), Some(0));
    h.settle();

    assert_eq!(h.pager.index(), 0);
    assert_eq!(h.pager.view_offset(), 0.0);
}

#[test]
fn test_tap_never_navigates() {
    let config = PagerConfig {
        swipe_threshold: 0.0,
        ..Default::default()
    };
    let mut h = Harness::new(config);
    h.pager.scroll_to_index(1);
    h.settle();
    h.clear();

    h.pager.pointer_down(PointerEvent::mouse(100.0, 400.0));
    assert_eq!(h.pager.pointer_up(PointerEvent::mouse(100.0, 400.0)), Handled::Consumed);
    assert_eq!(h.pager.index(), 1);
    assert!(!h.pager.is_scrolling());
    assert_eq!(h.count(EventKind::ScrollBefore), 0);

    // with no threshold a single pixel is a swipe
    h.pager.pointer_down(PointerEvent::mouse(100.0, 400.0));
    assert_eq!(h.pager.pointer_up(PointerEvent::mouse(100.0, 399.0)), Handled::Navigated);
    h.settle();
    assert_eq!(h.pager.index(), 2);
}

#[test]
fn test_tap_does_not_wrap() {
    let mut h = Harness::new(PagerConfig {
        swipe_threshold: 0.0,
        ..infinite()
    });
    h.pager.pointer_down(PointerEvent::mouse(100.0, 400.0));
    assert_eq!(h.pager.pointer_up(PointerEvent::mouse(100.0, 400.0)), Handled::Consumed);
    assert_eq!(h.pager.index(), 0);
    assert!(h.pager.transition().is_none());

    let mut h = Harness::new(PagerConfig {
        swipe_threshold: 0.0,
        free_scroll: true,
        ..infinite()
    });
    h.pager.pointer_down(PointerEvent::mouse(100.0, 400.0));
    assert_eq!(h.pager.pointer_up(PointerEvent::mouse(100.0, 400.0)), Handled::Navigated);
    assert_eq!(h.pager.transition().map(|t| (t.target, t.amount)), Some((0, 0.0)));
    h.settle();
    assert_eq!(h.pager.index(), 0);
    assert_eq!(h.pager.view_offset(), 800.0);
}

#[test]
fn test_free_drag_wraps_past_first_page() {
    let mut h = Harness::new(PagerConfig {
        free_scroll: true,
        ..infinite()
    });

    h.pager.pointer_down(PointerEvent::mouse(100.0, 400.0));
    h.pager.pointer_move(PointerEvent::mouse(100.0, 520.0));
    // no resistance when the edge wraps
    assert_eq!(h.pager.translation(), 120.0);
    assert_eq!(h.pager.view_offset(), 680.0);

    assert_eq!(h.pager.pointer_up(PointerEvent::mouse(100.0, 520.0)), Handled::Navigated);
    let request = h.pager.transition().unwrap();
    assert_eq!(request.target, -1);
    assert_eq!(request.amount, 680.0);
    assert_eq!(request.drag_offset, Some(120.0));

    h.pager.tick();
    h.clock.advance_ms(300);
    h.pager.tick();
    // last frame shows the head clone
    assert_eq!(h.pager.view_offset(), 0.0);

    h.clock.advance_ms(16);
    h.pager.tick();
    assert_eq!(h.pager.index(), h.pager.last_index());
    assert_eq!(h.pager.translation(), 0.0);
    assert_eq!(h.pager.view_offset(), 2400.0);
    assert_eq!(h.last(EventKind::ScrollEnd), Some(Snapshot::new(2, 1600.0, 1600.0)));
}

#[test]
fn test_press_blocks_wheel_and_keys() {
    let mut h = Harness::new(PagerConfig::default());

    h.pager.pointer_down(PointerEvent::mouse(100.0, 400.0));
    assert_eq!(h.pager.input_state(), InputState::Pressed);
    assert_eq!(h.pager.wheel(1.0), Handled::Consumed);
    assert_eq!(h.pager.key(Key::ArrowDown), Handled::Consumed);
    assert!(h.pager.transition().is_none());

    h.pager.pointer_up(PointerEvent::mouse(100.0, 400.0));
    assert_eq!(h.pager.wheel(1.0), Handled::Navigated);
}

#[test]
fn test_keyboard_follows_axis() {
    let mut h = Harness::new(PagerConfig::default());

    assert_eq!(h.pager.key(Key::ArrowDown), Handled::Navigated);
    h.settle();
    assert_eq!(h.pager.key(Key::ArrowRight), Handled::Navigated);
    h.settle();
    assert_eq!(h.pager.index(), 2);

    assert_eq!(h.pager.key(Key::PageUp), Handled::Navigated);
    h.settle();
    assert_eq!(h.pager.index(), 1);
    assert_eq!(h.pager.key(Key::Other), Handled::Ignored);

    h.pager.orientate(Orientation::Horizontal);
    assert_eq!(h.pager.key(Key::ArrowDown), Handled::Ignored);
    assert_eq!(h.pager.key(Key::ArrowLeft), Handled::Navigated);
    h.settle();
    assert_eq!(h.pager.index(), 0);
}

#[test]
fn test_disabled_inputs() {
    let config = PagerConfig {
        events: crate::config::InputEvents {
            wheel: false,
            mouse: false,
            touch: false,
        },
        ..Default::default()
    };
    let mut h = Harness::new(config);

    assert_eq!(h.pager.wheel(1.0), Handled::Consumed);
    assert_eq!(h.pager.pointer_down(PointerEvent::mouse(0.0, 0.0)), Handled::Ignored);
    assert_eq!(h.pager.pointer_down(PointerEvent::touch(0.0, 0.0)), Handled::Consumed);
    assert_eq!(
        h.pager.pointer_down(PointerEvent::touch(0.0, 0.0).on_link()),
        Handled::Ignored
    );
    assert!(!h.pager.is_scrolling());
    assert_eq!(h.pager.input_state(), InputState::Idle);
}

#[test]
fn test_press_guards() {
    let mut h = Harness::new(PagerConfig::default());

    let secondary = PointerEvent::mouse(0.0, 0.0).with_button(MouseButton::Secondary);
    assert_eq!(h.pager.pointer_down(secondary), Handled::Ignored);
    assert_eq!(h.pager.pointer_down(PointerEvent::mouse(0.0, 0.0).off_page()), Handled::Ignored);
    assert_eq!(h.pager.pointer_up(PointerEvent::mouse(0.0, 0.0)), Handled::Ignored);

    h.pager.scroll_to_index(1);
    assert_eq!(h.pager.pointer_down(PointerEvent::mouse(0.0, 0.0)), Handled::Ignored);
}

#[test]
fn test_start_delay() {
    let config = PagerConfig {
        delay_ms: 200,
        ..Default::default()
    };
    let mut h = Harness::new(config);
    h.clear();

    h.pager.scroll_to_index(1);
    h.pager.tick();
    h.clock.advance_ms(199);
    h.pager.tick();
    assert_eq!(h.count(EventKind::ScrollStart), 0);

    h.clock.advance_ms(1);
    h.pager.tick();
    assert_eq!(h.count(EventKind::ScrollStart), 1);
}

#[test]
fn test_zero_duration_completes_on_first_frame() {
    let config = PagerConfig {
        animation_ms: 0,
        ..Default::default()
    };
    let mut h = Harness::new(config);
    h.clear();

    h.pager.scroll_to_index(1);
    h.pager.tick();
    assert!(!h.pager.tick());

    assert_eq!(h.count(EventKind::Scroll), 0);
    assert_eq!(h.last(EventKind::ScrollEnd), Some(Snapshot::new(1, 800.0, 1600.0)));
}

#[test]
fn test_custom_easing() {
    let mut h = Harness::build(
        PagerConfig::default(),
        3,
        MemoryLocation::new(),
        Some(easing::linear),
    );

    h.pager.scroll_to_index(1);
    h.pager.tick();
    h.clock.advance_ms(150);
    h.pager.tick();

    assert!((h.pager.translation() + 400.0).abs() < 1e-6);
}

#[test]
fn test_hooks_order() {
    let mut h = Harness::new(PagerConfig::default());

    h.pager.scroll_to_index(1);
    h.settle();

    assert_eq!(h.hooks.entries(), vec!["init:0", "before:0", "start:page-1", "finish:1"]);
}

#[test]
fn test_destroy_is_idempotent() {
    let mut h = Harness::new(infinite());
    h.clear();

    assert!(h.pager.destroy());
    assert_eq!(h.kinds(), vec![EventKind::Destroy]);
    assert!(h.pager.clones().is_none());
    assert!(h.pager.pages().iter().all(|p| !p.active));

    assert!(!h.pager.destroy());
    assert!(!h.pager.scroll_to_index(1));
    assert!(!h.pager.tick());
    assert_eq!(h.pager.wheel(1.0), Handled::Ignored);
    assert_eq!(h.pager.key(Key::ArrowDown), Handled::Ignored);
    assert_eq!(h.kinds(), vec![EventKind::Destroy]);
}

#[test]
fn test_destroy_cancels_transition() {
    let mut h = Harness::new(PagerConfig::default());
    h.pager.scroll_to_index(1);
    h.pager.tick();

    h.pager.destroy();
    assert!(!h.pager.is_scrolling());
    assert_eq!(h.pager.translation(), 0.0);
}

#[test]
fn test_restores_page_from_location() {
    let h = Harness::build(
        PagerConfig::default(),
        3,
        MemoryLocation::with_hash("#page-2"),
        None,
    );

    assert_eq!(h.pager.index(), 2);
    assert!(h.pager.pages()[2].active);
    assert_eq!(h.last(EventKind::Init), Some(Snapshot::new(2, 1600.0, 1600.0)));
    assert_eq!(h.hooks.entries(), vec!["finish:2", "init:2"]);
}

#[test]
fn test_unknown_location_hash_is_ignored() {
    let h = Harness::build(
        PagerConfig::default(),
        3,
        MemoryLocation::with_hash("#nowhere"),
        None,
    );
    assert_eq!(h.pager.index(), 0);
}

#[test]
fn test_anchor_links() {
    let mut h = Harness::new(PagerConfig::default());

    assert_eq!(h.pager.click_link("#page-1"), Handled::Navigated);
    h.settle();
    assert_eq!(h.pager.index(), 1);

    assert_eq!(h.pager.click_link("https://example.com/deck#page-0"), Handled::Navigated);
    h.settle();
    assert_eq!(h.pager.index(), 0);

    assert_eq!(h.pager.click_link("#missing"), Handled::Ignored);
    assert_eq!(h.pager.click_link("https://example.com/"), Handled::Ignored);

    assert!(h.pager.scroll_to_anchor("page-2"));
    assert!(!h.pager.scroll_to_anchor("#missing"));
}

#[test]
fn test_slideshow_advances_and_wraps() {
    let config = PagerConfig {
        slideshow: Some(SlideshowConfig {
            interval_ms: 1000,
            delay_ms: 0,
        }),
        ..Default::default()
    };
    let mut h = Harness::new(config);
    assert!(h.pager.slideshow().is_some_and(|s| s.is_running()));

    for expected in [1, 2, 0] {
        h.clock.advance_ms(1000);
        assert!(h.pager.tick());
        assert!(h.pager.slideshow().is_some_and(|s| !s.is_running()));
        h.settle();
        assert_eq!(h.pager.index(), expected);
        assert!(h.pager.slideshow().is_some_and(|s| s.is_running()));
    }
}

#[test]
fn test_press_pauses_slideshow() {
    let config = PagerConfig {
        slideshow: Some(SlideshowConfig::default()),
        ..Default::default()
    };
    let mut h = Harness::new(config);

    h.pager.pointer_down(PointerEvent::mouse(0.0, 400.0));
    assert!(h.pager.slideshow().is_some_and(|s| !s.is_running()));
    h.pager.pointer_up(PointerEvent::mouse(0.0, 400.0));
    assert!(h.pager.slideshow().is_some_and(|s| s.is_running()));
}

#[test]
fn test_orientate_switches_axis() {
    let mut h = Harness::new(PagerConfig::default());

    h.pager.orientate(Orientation::Horizontal);
    assert_eq!(h.pager.layout().page_size, 1280.0);

    h.pager.scroll_to_index(1);
    h.settle();
    assert_eq!(h.pager.snapshot(), Snapshot::new(1, 1280.0, 2560.0));
}

#[test]
fn test_resize_is_throttled() {
    let mut h = Harness::new(PagerConfig::default());

    assert!(h.pager.resize(Size::new(1000.0, 600.0)));
    assert_eq!(h.pager.layout().page_size, 600.0);
    assert!(!h.pager.resize(Size::new(900.0, 500.0)));
    assert_eq!(h.pager.layout().page_size, 600.0);

    h.clock.advance_ms(50);
    assert!(h.pager.resize(Size::new(900.0, 500.0)));
    assert_eq!(h.pager.layout().page_size, 500.0);
    assert!(h.pager.pages().iter().all(|p| p.size == Size::new(900.0, 500.0)));
}

#[test]
fn test_pips_and_nav_state() {
    let mut h = Harness::new(PagerConfig::default());

    let pips = h.pager.pips();
    assert_eq!(pips.len(), 3);
    assert_eq!(pips[0].href, "#page-0");
    assert!(pips[0].active);

    let nav = h.pager.nav_state();
    assert!(!nav.prev_active);
    assert!(nav.next_active);

    h.pager.scroll_to_index(2);
    h.settle();
    let nav = h.pager.nav_state();
    assert!(nav.prev_active);
    assert!(!nav.next_active);
    assert!(h.pager.pips()[2].active);

    let h = Harness::new(infinite());
    let nav = h.pager.nav_state();
    assert!(nav.prev_active && nav.next_active);

    let config = PagerConfig {
        pips: false,
        ..Default::default()
    };
    assert!(Harness::new(config).pager.pips().is_empty());
}

#[test]
fn test_set_infinite_at_runtime() {
    let mut h = Harness::new(PagerConfig::default());

    assert!(h.pager.set_infinite(true));
    assert_eq!(h.pager.slots().len(), 5);
    assert_eq!(h.pager.view_offset(), 800.0);
    assert!(!h.pager.set_infinite(true));

    assert!(h.pager.set_infinite(false));
    assert_eq!(h.pager.slots().len(), 3);
    assert_eq!(h.pager.view_offset(), 0.0);
}

#[test]
fn test_set_infinite_refused_while_busy() {
    let mut h = Harness::new(free_scroll());

    h.pager.pointer_down(PointerEvent::mouse(100.0, 400.0));
    h.pager.pointer_move(PointerEvent::mouse(100.0, 300.0));
    assert_eq!(h.pager.input_state(), InputState::Dragging);
    assert!(!h.pager.set_infinite(true));
    assert_eq!(h.pager.slots().len(), 3);
    assert_eq!(h.pager.translation(), -100.0);

    h.pager.pointer_up(PointerEvent::mouse(100.0, 300.0));
    assert!(h.pager.is_scrolling());
    assert!(!h.pager.set_infinite(true));
    h.settle();
    assert!(h.pager.set_infinite(true));

    let mut h = Harness::new(PagerConfig::default());
    h.pager.pointer_down(PointerEvent::mouse(100.0, 400.0));
    assert_eq!(h.pager.input_state(), InputState::Pressed);
    assert!(!h.pager.set_infinite(true));
    assert!(!h.pager.is_infinite());
}

#[test]
fn test_listener_off() {
    let mut h = Harness::new(PagerConfig::default());
    let hits = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&hits);

    let id = h.pager.on(EventKind::ScrollEnd, move |_| *sink.borrow_mut() += 1);
    h.pager.scroll_to_index(1);
    h.settle();
    assert_eq!(*hits.borrow(), 1);

    assert!(h.pager.off(EventKind::ScrollEnd, id));
    assert!(!h.pager.off(EventKind::ScrollEnd, id));
    h.pager.scroll_to_index(0);
    h.settle();
    assert_eq!(*hits.borrow(), 1);
}
