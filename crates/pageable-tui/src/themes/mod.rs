//! Built-in themes and user color overrides

mod dracula;
mod nord;

use pageable_core::config::{ThemeColorOverrides, ThemeConfig};
use ratatui::style::Color;
use tracing::warn;

use crate::theme::Theme;

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => Some(Color::Rgb(
            channel(&hex[0..1])? * 17,
            channel(&hex[1..2])? * 17,
            channel(&hex[2..3])? * 17,
        )),
        6 => Some(Color::Rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => None,
    }
}

/// Load a theme by name from config, unknown names fall back to gruvbox
pub fn load_theme(config: &ThemeConfig) -> Theme {
    let name = config.name.to_lowercase();
    if !available_themes().contains(&name.as_str()) {
        warn!(
            theme = %config.name,
            available = ?available_themes(),
            "Unknown theme, using gruvbox-dark"
        );
    }

    let base = match name.as_str() {
        "nord" => nord::default(),
        "dracula" => dracula::default(),
        _ => Theme::default(),
    };

    apply_overrides(base, &config.colors)
}

fn apply_overrides(mut theme: Theme, overrides: &ThemeColorOverrides) -> Theme {
    let slots = [
        (&mut theme.bg0, &overrides.bg0),
        (&mut theme.bg1, &overrides.bg1),
        (&mut theme.fg0, &overrides.fg0),
        (&mut theme.accent, &overrides.accent),
        (&mut theme.pip, &overrides.pip),
        (&mut theme.pip_active, &overrides.pip_active),
    ];

    for (slot, hex) in slots {
        if let Some(color) = hex.as_deref().and_then(parse_hex_color) {
            *slot = color;
        }
    }

    theme
}

pub fn available_themes() -> Vec<&'static str> {
    vec!["gruvbox-dark", "nord", "dracula"]
}
