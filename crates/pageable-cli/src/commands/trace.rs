//! Headless replay of navigation steps against a simulated clock.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use std::str::FromStr;

use anyhow::{anyhow, bail, Result};
use tracing::debug;

use pageable_core::{
    AppConfig, Container, EventKind, Key, ManualClock, MemoryLocation, Orientation, Pager,
    PagerConfig, PagerEvent, PointerEvent, Size,
};

/// Upper bound on frames spent settling one step
const MAX_FRAMES: usize = 10_000;

/// One scripted input
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Next,
    Prev,
    First,
    Last,
    /// 1-based page
    Page(usize),
    Anchor(String),
    Wheel(f64),
    /// Press, drag and release along the active axis
    Swipe(f64),
    Key(Key),
    /// Let time pass, ticking every frame
    Wait(u64),
    Orient(Orientation),
    Infinite(bool),
}

impl FromStr for Step {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.starts_with('#') {
            return Ok(Step::Anchor(s.to_string()));
        }
        if let Ok(page) = s.parse::<usize>() {
            return Ok(Step::Page(page));
        }

        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };
        let value = || arg.ok_or_else(|| anyhow!("step '{}' needs an argument", name));

        let step = match name {
            "next" => Step::Next,
            "prev" => Step::Prev,
            "first" => Step::First,
            "last" => Step::Last,
            "wheel" => Step::Wheel(value()?.parse()?),
            "swipe" => Step::Swipe(value()?.parse()?),
            "wait" => Step::Wait(value()?.parse()?),
            "orient" => Step::Orient(value()?.parse()?),
            "infinite" => Step::Infinite(matches!(value()?, "on" | "true")),
            "key" => Step::Key(match value()? {
                "up" => Key::ArrowUp,
                "down" => Key::ArrowDown,
                "left" => Key::ArrowLeft,
                "right" => Key::ArrowRight,
                "pageup" => Key::PageUp,
                "pagedown" => Key::PageDown,
                other => bail!("unknown key '{}'", other),
            }),
            _ => bail!("unknown step '{}'", s),
        };
        Ok(step)
    }
}

pub fn run(
    config: AppConfig,
    deck: &Path,
    steps: &[String],
    width: f64,
    height: f64,
    frame_ms: u64,
) -> Result<()> {
    let container = super::load_deck(deck)?;
    let steps = steps
        .iter()
        .map(|s| s.parse())
        .collect::<Result<Vec<Step>>>()?;

    let events = trace(
        config.pager,
        container,
        &steps,
        Size::new(width, height),
        frame_ms,
    )?;
    for event in events {
        println!("{}", serde_json::to_string(&event)?);
    }

    Ok(())
}

/// Mount a pager on a manual clock, play `steps` and collect every event
pub fn trace(
    config: PagerConfig,
    container: Container,
    steps: &[Step],
    viewport: Size,
    frame_ms: u64,
) -> Result<Vec<PagerEvent>> {
    let clock = ManualClock::new();
    let events = Rc::new(RefCell::new(Vec::new()));
    let frame_ms = frame_ms.max(1);

    let mut builder = Pager::builder(config)
        .with_clock(clock.clone())
        .with_location(MemoryLocation::new());
    for kind in EventKind::ALL {
        let sink = Rc::clone(&events);
        builder = builder.with_listener(kind, move |event| sink.borrow_mut().push(event.clone()));
    }
    let mut pager = builder.mount(Some(container), viewport)?;

    for step in steps {
        debug!(?step, "Replaying step");
        apply(&mut pager, &clock, step, frame_ms);
        settle(&mut pager, &clock, frame_ms);
    }

    pager.destroy();
    let events = events.take();
    Ok(events)
}

fn apply(pager: &mut Pager, clock: &ManualClock, step: &Step, frame_ms: u64) {
    match step {
        Step::Next => {
            pager.next();
        }
        Step::Prev => {
            pager.prev();
        }
        Step::First => {
            pager.scroll_to_index(0);
        }
        Step::Last => {
            pager.scroll_to_index(pager.last_index());
        }
        Step::Page(page) => {
            pager.scroll_to_page(*page);
        }
        Step::Anchor(anchor) => {
            pager.click_link(anchor);
        }
        Step::Wheel(delta) => {
            pager.wheel(*delta);
        }
        Step::Swipe(distance) => swipe(pager, clock, *distance, frame_ms),
        Step::Key(key) => {
            pager.key(*key);
        }
        Step::Wait(ms) => {
            let mut waited = 0;
            while waited < *ms {
                let frame = frame_ms.min(ms - waited);
                clock.advance_ms(frame);
                waited += frame;
                pager.tick();
            }
        }
        Step::Orient(orientation) => pager.orientate(*orientation),
        Step::Infinite(on) => {
            pager.set_infinite(*on);
        }
    }
}

fn swipe(pager: &mut Pager, clock: &ManualClock, distance: f64, frame_ms: u64) {
    let viewport = pager.viewport();
    let (x, y) = (viewport.width / 2.0, viewport.height / 2.0);
    let at = |offset: f64| {
        if pager.orientation().is_horizontal() {
            PointerEvent::mouse(x + offset, y)
        } else {
            PointerEvent::mouse(x, y + offset)
        }
    };
    let (start, middle, end) = (at(0.0), at(distance / 2.0), at(distance));

    pager.pointer_down(start);
    clock.advance_ms(frame_ms);
    pager.pointer_move(middle);
    clock.advance_ms(frame_ms);
    pager.pointer_move(end);
    pager.pointer_up(end);
}

fn settle(pager: &mut Pager, clock: &ManualClock, frame_ms: u64) {
    for _ in 0..MAX_FRAMES {
        if !pager.tick() {
            return;
        }
        clock.advance_ms(frame_ms);
    }
}
