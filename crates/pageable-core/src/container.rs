//! Page containers: the element trees a pager is mounted on.

use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// One child element of a container
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    /// Anchor attribute; only anchored elements become pages
    pub anchor: Option<String>,
    /// Text content
    pub body: String,
}

impl Element {
    pub fn anchored(anchor: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            anchor: Some(anchor.into()),
            body: body.into(),
        }
    }

    pub fn plain(body: impl Into<String>) -> Self {
        Self {
            anchor: None,
            body: body.into(),
        }
    }
}

/// An ordered list of child elements
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Container {
    /// Name used in diagnostics (selector, file path)
    pub name: String,
    pub elements: Vec<Element>,
}

impl Container {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            elements: Vec::new(),
        }
    }

    pub fn with_element(mut self, element: Element) -> Self {
        self.elements.push(element);
        self
    }

    /// Container holding one empty anchored page per anchor
    pub fn from_anchors<I, S>(name: impl Into<String>, anchors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut container = Self::new(name);
        container.append_anchors(anchors);
        container
    }

    /// Append one empty anchored element per anchor
    pub fn append_anchors<I, S>(&mut self, anchors: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.elements
            .extend(anchors.into_iter().map(|a| Element::anchored(a, String::new())));
    }

    /// Elements that carry an anchor, in document order
    pub fn anchored(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(|e| e.anchor.is_some())
    }

    /// Parse a markdown deck: every level-1 heading starts an anchored
    /// element named after the heading. Text before the first heading is kept
    /// as a plain element.
    pub fn parse_markdown(name: impl Into<String>, text: &str) -> Self {
        let mut container = Self::new(name);
        let mut current = Element::default();
        let mut started = false;

        for line in text.lines() {
            if let Some(heading) = line.strip_prefix("# ") {
                if started || !current.body.trim().is_empty() {
                    current.body = current.body.trim_end().to_string();
                    container.elements.push(current);
                }
                current = Element::anchored(heading.trim(), String::new());
                started = true;
            } else {
                current.body.push_str(line);
                current.body.push('\n');
            }
        }

        if started || !current.body.trim().is_empty() {
            current.body = current.body.trim_end().to_string();
            container.elements.push(current);
        }

        debug!(
            container = %container.name,
            elements = container.elements.len(),
            "Parsed markdown deck"
        );
        container
    }

    /// Load a markdown deck from disk
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::ContainerNotFound(path.display().to_string())
            } else {
                Error::Io(e)
            }
        })?;
        Ok(Self::parse_markdown(path.display().to_string(), &text))
    }
}
