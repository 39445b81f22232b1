//! Terminal title as the location bar.

use std::io;

use crossterm::{execute, terminal::SetTitle};
use pageable_core::location::{normalize_hash, LocationHash};
use tracing::warn;

/// Mirrors the active page into the terminal title (`Deck #page`)
#[derive(Debug, Clone)]
pub struct TitleLocation {
    title: String,
    hash: Option<String>,
}

impl TitleLocation {
    /// `initial` is the page to open on, with or without `#`
    pub fn new(title: impl Into<String>, initial: Option<&str>) -> Self {
        Self {
            title: title.into(),
            hash: initial.map(normalize_hash),
        }
    }
}

impl LocationHash for TitleLocation {
    fn hash(&self) -> Option<String> {
        self.hash.clone()
    }

    fn set_hash(&mut self, id: &str) {
        let hash = normalize_hash(id);
        if let Err(e) = execute!(io::stdout(), SetTitle(format!("{} {}", self.title, hash))) {
            warn!("Failed to update terminal title: {}", e);
        }
        self.hash = Some(hash);
    }
}
