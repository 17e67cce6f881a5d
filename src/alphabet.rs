//! Placeholder alphabet: clusters ↔ private-use-area codepoints.
//!
//! Placeholders are handed out downward from a boundary just below the top of
//! the BMP private use area. The forward map (placeholder → cluster) lives
//! until an explicit [`PlaceholderAlphabet::reset`] and is what the renderer
//! reads on every glyph-cache miss. The inverse map only exists to
//! deduplicate allocations while languages are loading and can be dropped on
//! its own.

use std::borrow::Cow;
use std::collections::HashMap;

use crate::error::ClusterError;

/// First codepoint of the BMP private use area.
pub const PUA_START: u32 = 0xE000;

/// Last codepoint of the BMP private use area.
pub const PUA_END: u32 = 0xF8FF;

/// First placeholder handed out after a reset. `PUA_END` itself is left to
/// sibling allocators.
pub const PLACEHOLDER_BOUNDARY: u32 = PUA_END - 1;

/// Bidirectional cluster ↔ placeholder map with a descending cursor.
#[derive(Debug, Clone)]
pub struct PlaceholderAlphabet {
    forward: HashMap<char, String>,
    inverse: HashMap<String, char>,
    boundary: u32,
    next_codepoint: u32,
}

impl Default for PlaceholderAlphabet {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaceholderAlphabet {
    /// Create an empty alphabet allocating from [`PLACEHOLDER_BOUNDARY`].
    pub fn new() -> Self {
        Self {
            forward: HashMap::new(),
            inverse: HashMap::new(),
            boundary: PLACEHOLDER_BOUNDARY,
            next_codepoint: PLACEHOLDER_BOUNDARY,
        }
    }

    /// Create an empty alphabet allocating downward from `boundary`.
    ///
    /// Used to keep clear of another private-use allocator sharing the range.
    pub fn with_boundary(boundary: u32) -> Result<Self, ClusterError> {
        if !(PUA_START..=PUA_END).contains(&boundary) {
            return Err(ClusterError::InvalidBoundary(boundary));
        }
        Ok(Self {
            boundary,
            next_codepoint: boundary,
            ..Self::new()
        })
    }

    /// Placeholder for `cluster`, allocating a new one on first sight.
    pub fn resolve(&mut self, cluster: &str) -> Result<char, ClusterError> {
        if let Some(&placeholder) = self.inverse.get(cluster) {
            return Ok(placeholder);
        }

        let placeholder = self.allocate()?;
        self.forward.insert(placeholder, cluster.to_owned());
        self.inverse.insert(cluster.to_owned(), placeholder);
        log::debug!(
            "Allocated U+{:04X} for cluster {:?} ({} chars)",
            placeholder as u32,
            cluster,
            cluster.chars().count()
        );
        Ok(placeholder)
    }

    fn allocate(&mut self) -> Result<char, ClusterError> {
        let exhausted = ClusterError::AlphabetExhausted {
            allocated: self.forward.len(),
        };
        if self.next_codepoint < PUA_START {
            return Err(exhausted);
        }
        let placeholder = char::from_u32(self.next_codepoint).ok_or(exhausted)?;
        self.next_codepoint -= 1;
        Ok(placeholder)
    }

    /// Cluster stored for `c`, if `c` is an issued placeholder.
    pub fn lookup(&self, c: char) -> Option<&str> {
        self.forward.get(&c).map(String::as_str)
    }

    /// The text `c` stands for: its cluster if it is a placeholder, otherwise
    /// `c` itself.
    pub fn expand(&self, c: char) -> Cow<'_, str> {
        match self.lookup(c) {
            Some(cluster) => Cow::Borrowed(cluster),
            None => Cow::Owned(c.to_string()),
        }
    }

    /// Expand every placeholder in `text`.
    pub fn expand_str(&self, text: &str) -> String {
        if self.forward.is_empty() {
            return text.to_owned();
        }
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match self.lookup(c) {
                Some(cluster) => out.push_str(cluster),
                None => out.push(c),
            }
        }
        out
    }

    /// True when `c` is a placeholder issued since the last reset.
    pub fn is_placeholder(&self, c: char) -> bool {
        let code = c as u32;
        code > self.next_codepoint && code <= self.boundary && self.forward.contains_key(&c)
    }

    /// True when no placeholder has been issued since the last reset.
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Number of issued placeholders.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Number of clusters still held in the deduplication index.
    pub fn dedup_len(&self) -> usize {
        self.inverse.len()
    }

    /// Codepoint the next allocation will use.
    pub fn next_codepoint(&self) -> u32 {
        self.next_codepoint
    }

    /// Drop the deduplication index, keeping every issued placeholder.
    ///
    /// Clusters resolved afterwards get fresh placeholders even if an
    /// identical cluster was seen before.
    pub fn discard_dedup_index(&mut self) {
        self.inverse.clear();
        self.inverse.shrink_to_fit();
    }

    /// Forget every placeholder and rewind the cursor to the boundary.
    ///
    /// Any text remapped before this call no longer expands correctly.
    pub fn reset(&mut self) {
        self.forward.clear();
        self.inverse.clear();
        self.next_codepoint = self.boundary;
    }
}
