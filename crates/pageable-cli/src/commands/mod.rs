pub mod config;
pub mod pages;
pub mod run;
pub mod trace;

use std::path::Path;

use anyhow::{Context, Result};
use pageable_core::Container;

/// Read a markdown deck
pub fn load_deck(path: &Path) -> Result<Container> {
    Container::load(path).with_context(|| format!("Failed to open deck {}", path.display()))
}

/// Short display name for a deck path
pub fn deck_title(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "pageable".to_string())
}
