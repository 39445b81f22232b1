//! Location hash synchronization.
//!
//! The active page's identifier is mirrored into a location hash: read once
//! when the pager loads and written after every completed transition.

use url::Url;

/// Host-side location holding a `#hash`
pub trait LocationHash {
    /// Current hash including the leading `#`, if any
    fn hash(&self) -> Option<String>;

    /// Replace the hash with `#id`
    fn set_hash(&mut self, id: &str);
}

/// In-memory location
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryLocation {
    hash: Option<String>,
    writes: usize,
}

impl MemoryLocation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Location starting with `hash` (with or without `#`)
    pub fn with_hash(hash: &str) -> Self {
        Self {
            hash: Some(normalize_hash(hash)),
            writes: 0,
        }
    }

    /// Number of times the hash was written
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl LocationHash for MemoryLocation {
    fn hash(&self) -> Option<String> {
        self.hash.clone()
    }

    fn set_hash(&mut self, id: &str) {
        self.hash = Some(normalize_hash(id));
        self.writes += 1;
    }
}

/// Location that discards writes
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocation;

impl LocationHash for NoLocation {
    fn hash(&self) -> Option<String> {
        None
    }

    fn set_hash(&mut self, _id: &str) {}
}

/// `id` or `#id` to `#id`
pub fn normalize_hash(hash: &str) -> String {
    if hash.starts_with('#') {
        hash.to_string()
    } else {
        format!("#{}", hash)
    }
}

/// Extract the `#fragment` of a link target
///
/// Accepts bare fragments (`#intro`), absolute URLs and relative references.
/// Returns `None` for links without a fragment.
pub fn link_hash(href: &str) -> Option<String> {
    let href = href.trim();
    if let Some(fragment) = href.strip_prefix('#') {
        return (!fragment.is_empty()).then(|| format!("#{}", fragment));
    }

    let url = match Url::parse(href) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Url::parse("http://localhost/").ok()?.join(href).ok()?
        }
        Err(_) => return None,
    };

    url.fragment()
        .filter(|f| !f.is_empty())
        .map(|f| format!("#{}", f))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_location() {
        let mut location = MemoryLocation::with_hash("intro");
        assert_eq!(location.hash().as_deref(), Some("#intro"));

        location.set_hash("second");
        assert_eq!(location.hash().as_deref(), Some("#second"));
        assert_eq!(location.writes(), 1);
    }

    #[test]
    fn test_link_hash() {
        assert_eq!(link_hash("#intro").as_deref(), Some("#intro"));
        assert_eq!(link_hash("#"), None);
        assert_eq!(link_hash("https://example.com/deck#page-2").as_deref(), Some("#page-2"));
        assert_eq!(link_hash("slides.html#outro").as_deref(), Some("#outro"));
        assert_eq!(link_hash("https://example.com/deck"), None);
    }
}
