pub mod app;
pub mod event;
pub mod hooks;
pub mod input;
pub mod location;
pub mod metrics;
pub mod theme;
pub mod themes;
pub mod ui;
pub mod widgets;

pub use app::App;
pub use hooks::TracingHooks;
pub use location::TitleLocation;
pub use metrics::CellMetrics;
pub use theme::Theme;
pub use themes::{available_themes, load_theme};
