//! Typed lifecycle events with ordered, synchronous, multi-subscriber dispatch.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;
use crate::snapshot::Snapshot;

/// Name of a lifecycle event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Init,
    Update,
    ScrollBefore,
    ScrollStart,
    Scroll,
    ScrollEnd,
    Destroy,
}

impl EventKind {
    pub const ALL: [EventKind; 7] = [
        EventKind::Init,
        EventKind::Update,
        EventKind::ScrollBefore,
        EventKind::ScrollStart,
        EventKind::Scroll,
        EventKind::ScrollEnd,
        EventKind::Destroy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EventKind::Init => "init",
            EventKind::Update => "update",
            EventKind::ScrollBefore => "scroll.before",
            EventKind::ScrollStart => "scroll.start",
            EventKind::Scroll => "scroll",
            EventKind::ScrollEnd => "scroll.end",
            EventKind::Destroy => "destroy",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EventKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| Error::Other(format!("Unknown event: {}", s)))
    }
}

/// A lifecycle event and its payload
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", content = "data")]
pub enum PagerEvent {
    #[serde(rename = "init")]
    Init(Snapshot),
    #[serde(rename = "update")]
    Update(Snapshot),
    #[serde(rename = "scroll.before")]
    ScrollBefore(Snapshot),
    #[serde(rename = "scroll.start")]
    ScrollStart(Snapshot),
    #[serde(rename = "scroll")]
    Scroll(Snapshot),
    #[serde(rename = "scroll.end")]
    ScrollEnd(Snapshot),
    #[serde(rename = "destroy")]
    Destroy,
}

impl PagerEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            PagerEvent::Init(_) => EventKind::Init,
            PagerEvent::Update(_) => EventKind::Update,
            PagerEvent::ScrollBefore(_) => EventKind::ScrollBefore,
            PagerEvent::ScrollStart(_) => EventKind::ScrollStart,
            PagerEvent::Scroll(_) => EventKind::Scroll,
            PagerEvent::ScrollEnd(_) => EventKind::ScrollEnd,
            PagerEvent::Destroy => EventKind::Destroy,
        }
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        match self {
            PagerEvent::Init(s)
            | PagerEvent::Update(s)
            | PagerEvent::ScrollBefore(s)
            | PagerEvent::ScrollStart(s)
            | PagerEvent::Scroll(s)
            | PagerEvent::ScrollEnd(s) => Some(s),
            PagerEvent::Destroy => None,
        }
    }
}

/// Handle returned by [`Emitter::on`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub type Listener = Box<dyn FnMut(&PagerEvent)>;

/// Listener table keyed by event kind
#[derive(Default)]
pub struct Emitter {
    listeners: HashMap<EventKind, Vec<(ListenerId, Listener)>>,
    next_id: u64,
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to an event; listeners run in subscription order
    pub fn on<F>(&mut self, kind: EventKind, listener: F) -> ListenerId
    where
        F: FnMut(&PagerEvent) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners
            .entry(kind)
            .or_default()
            .push((id, Box::new(listener)));
        id
    }

    /// Unsubscribe; returns whether the listener was registered
    pub fn off(&mut self, kind: EventKind, id: ListenerId) -> bool {
        let Some(list) = self.listeners.get_mut(&kind) else {
            return false;
        };
        let before = list.len();
        list.retain(|(lid, _)| *lid != id);
        before != list.len()
    }

    /// Dispatch to every listener of the event's kind
    pub fn emit(&mut self, event: &PagerEvent) {
        if let Some(list) = self.listeners.get_mut(&event.kind()) {
            for (_, listener) in list.iter_mut() {
                listener(event);
            }
        }
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners.get(&kind).map_or(0, Vec::len)
    }

    /// Drop every listener
    pub fn clear(&mut self) {
        self.listeners.clear();
    }
}

impl fmt::Debug for Emitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: Vec<(EventKind, usize)> = EventKind::ALL
            .into_iter()
            .map(|k| (k, self.listener_count(k)))
            .filter(|(_, n)| *n > 0)
            .collect();
        f.debug_struct("Emitter").field("listeners", &counts).finish()
    }
}
