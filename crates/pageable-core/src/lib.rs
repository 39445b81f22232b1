pub mod clock;
pub mod config;
pub mod container;
pub mod easing;
pub mod emitter;
pub mod error;
pub mod geometry;
pub mod hooks;
pub mod layout;
pub mod location;
pub mod page;
pub mod pager;
pub mod slideshow;
pub mod snapshot;
pub mod timing;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{AppConfig, InputEvents, PagerConfig, SlideshowConfig};
pub use container::{Container, Element};
pub use easing::{EasingFn, EasingType};
pub use emitter::{EventKind, ListenerId, PagerEvent};
pub use error::{Error, Result};
pub use geometry::{Axis, Orientation, Point, Size};
pub use hooks::{NoHooks, PagerHooks};
pub use layout::Layout;
pub use location::{LocationHash, MemoryLocation, NoLocation};
pub use page::Page;
pub use pager::{
    DragState, Handled, InputState, Key, MouseButton, NavState, Pager, PagerBuilder, Pip,
    PointerDevice, PointerEvent, TransitionRequest,
};
pub use snapshot::Snapshot;
