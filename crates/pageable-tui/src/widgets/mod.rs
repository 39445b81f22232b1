mod pages;
mod pips;
mod status_bar;

pub use pages::{wrap_text, PagesWidget};
pub use pips::{ControlHits, PipsWidget};
pub use status_bar::StatusBarWidget;
