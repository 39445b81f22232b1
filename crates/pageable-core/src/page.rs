//! Pages and the clone pair used for infinite wrap.

use std::sync::LazyLock;

use regex::Regex;

use crate::container::Element;
use crate::geometry::Size;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex is valid"));

/// Turn an anchor attribute into a page identifier
pub fn slugify(anchor: &str) -> String {
    WHITESPACE.replace_all(anchor.trim(), "-").to_lowercase()
}

/// One navigable content panel
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Stable identifier (slugified anchor)
    pub id: String,
    /// Anchor text as written in the container
    pub anchor: String,
    pub body: String,
    pub active: bool,
    pub size: Size,
    /// Whether this page is a boundary clone
    pub clone: bool,
}

impl Page {
    /// Build a page from an anchored element, `None` for plain elements
    pub fn from_element(element: &Element) -> Option<Self> {
        let anchor = element.anchor.as_ref()?;
        Some(Self {
            id: slugify(anchor),
            anchor: anchor.clone(),
            body: element.body.clone(),
            active: false,
            size: Size::default(),
            clone: false,
        })
    }

    /// Hash form of the identifier, `#id`
    pub fn hash(&self) -> String {
        format!("#{}", self.id)
    }

    /// Inactive copy marked as a clone
    pub fn to_clone(&self) -> Self {
        Self {
            id: format!("{}-clone", self.id),
            active: false,
            clone: true,
            ..self.clone()
        }
    }
}

/// The two boundary clones present while infinite mode is on: a copy of the
/// last page laid out before the first, and a copy of the first laid out
/// after the last.
#[derive(Debug, Clone, PartialEq)]
pub struct ClonePair {
    pub head: Page,
    pub tail: Page,
}

impl ClonePair {
    /// Clone the boundary pages; `None` when there are no pages
    pub fn create(pages: &[Page]) -> Option<Self> {
        let first = pages.first()?;
        let last = pages.last()?;
        Some(Self {
            head: last.to_clone(),
            tail: first.to_clone(),
        })
    }

    pub fn resize(&mut self, size: Size) {
        self.head.size = size;
        self.tail.size = size;
    }
}
