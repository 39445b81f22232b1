use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::easing::EasingType;
use crate::geometry::Orientation;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub pager: PagerConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            pager: PagerConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log files)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Every option recognized by a pager
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagerConfig {
    /// Paging axis
    #[serde(default)]
    pub orientation: Orientation,
    /// Transition duration in milliseconds
    #[serde(default = "default_animation_ms", alias = "interval")]
    pub animation_ms: u64,
    /// Pause before a transition's animation starts (ignored with free scroll)
    #[serde(default)]
    pub delay_ms: u64,
    /// Minimum time between two resize-triggered layout updates
    #[serde(default = "default_throttle_ms")]
    pub throttle_ms: u64,
    /// Easing preset
    #[serde(default)]
    pub easing: EasingType,
    /// Generate dot navigation
    #[serde(default = "default_true")]
    pub pips: bool,
    /// Minimum drag displacement that changes page
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: f64,
    /// Content follows the pointer while dragging
    #[serde(default)]
    pub free_scroll: bool,
    /// Wrap around from the last page to the first and back
    #[serde(default)]
    pub infinite: bool,
    /// Auto-advance timer (`false`, `true` or a table)
    #[serde(
        default,
        deserialize_with = "deserialize_slideshow",
        skip_serializing_if = "Option::is_none"
    )]
    pub slideshow: Option<SlideshowConfig>,
    /// Target of the "previous" button, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nav_prev: Option<String>,
    /// Target of the "next" button, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nav_next: Option<String>,
    /// Extra empty pages appended to the container, one per anchor
    #[serde(default)]
    pub anchors: Vec<String>,
    /// Per-device input switches
    #[serde(default)]
    pub events: InputEvents,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            animation_ms: default_animation_ms(),
            delay_ms: 0,
            throttle_ms: default_throttle_ms(),
            easing: EasingType::default(),
            pips: default_true(),
            swipe_threshold: default_swipe_threshold(),
            free_scroll: false,
            infinite: false,
            slideshow: None,
            nav_prev: None,
            nav_next: None,
            anchors: Vec::new(),
            events: InputEvents::default(),
        }
    }
}

impl PagerConfig {
    /// Transition duration
    #[inline]
    pub fn animation(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }

    /// Delay before an animation starts; free scroll always starts at once
    #[inline]
    pub fn start_delay(&self) -> Duration {
        if self.free_scroll {
            Duration::ZERO
        } else {
            Duration::from_millis(self.delay_ms)
        }
    }

    #[inline]
    pub fn throttle(&self) -> Duration {
        Duration::from_millis(self.throttle_ms)
    }

    /// Reject values no pager can work with
    pub fn validate(&self) -> crate::Result<()> {
        if !self.swipe_threshold.is_finite() || self.swipe_threshold < 0.0 {
            return Err(crate::Error::Config(format!(
                "swipe_threshold must be a non-negative number, got {}",
                self.swipe_threshold
            )));
        }
        if let Some(slideshow) = &self.slideshow {
            if slideshow.interval_ms == 0 {
                return Err(crate::Error::Config(
                    "slideshow.interval_ms must be positive".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Per-device input enable flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputEvents {
    #[serde(default = "default_true")]
    pub wheel: bool,
    #[serde(default = "default_true")]
    pub mouse: bool,
    #[serde(default = "default_true")]
    pub touch: bool,
}

impl Default for InputEvents {
    fn default() -> Self {
        Self {
            wheel: true,
            mouse: true,
            touch: true,
        }
    }
}

/// Slideshow timing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideshowConfig {
    /// Time between two advances
    #[serde(default = "default_slideshow_interval", alias = "interval")]
    pub interval_ms: u64,
    /// Pause between announcing and performing an advance
    #[serde(default, alias = "delay")]
    pub delay_ms: u64,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_slideshow_interval(),
            delay_ms: 0,
        }
    }
}

// Accept `slideshow = false`, `slideshow = true` or a full table
fn deserialize_slideshow<'de, D>(deserializer: D) -> Result<Option<SlideshowConfig>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, MapAccess, Visitor};
    use std::fmt;

    struct SlideshowVisitor;

    impl<'de> Visitor<'de> for SlideshowVisitor {
        type Value = Option<SlideshowConfig>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a boolean or a map with 'interval_ms' and optional 'delay_ms'")
        }

        fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.then(SlideshowConfig::default))
        }

        fn visit_map<M>(self, map: M) -> Result<Self::Value, M::Error>
        where
            M: MapAccess<'de>,
        {
            let config = SlideshowConfig::deserialize(de::value::MapAccessDeserializer::new(map))?;
            Ok(Some(config))
        }
    }

    deserializer.deserialize_any(SlideshowVisitor)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds while idle
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while a transition is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Show the status bar with position and progress
    #[serde(default = "default_true")]
    pub show_status_bar: bool,
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            show_status_bar: default_true(),
            theme: ThemeConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Built-in theme name
    #[serde(default = "default_theme_name")]
    pub name: String,
    /// Per-color overrides as hex strings
    #[serde(default)]
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg0: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fg0: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pip_active: Option<String>,
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pageable")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_animation_ms() -> u64 {
    300
}

fn default_throttle_ms() -> u64 {
    50
}

fn default_swipe_threshold() -> f64 {
    50.0
}

fn default_slideshow_interval() -> u64 {
    5000
}

fn default_theme_name() -> String {
    "gruvbox-dark".to_string()
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u32 {
    60
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file, defaults if it does not exist
    pub fn load_from(config_path: &std::path::Path) -> crate::Result<Self> {
        let config: Self = if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            Self::from_toml(&content)?
        } else {
            Self::default()
        };
        config.pager.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&config_path, self.to_toml()?)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/pageable/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("pageable")
            .join("config.toml")
    }

    /// Get the log file path
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("pageable.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}
