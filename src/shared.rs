//! Shared coordinator handle for loader and renderer.
//!
//! Loading and rendering are expected to run in separate phases. When they
//! can overlap across threads, both sides go through one `SharedClusters`
//! handle, which serializes access with a `parking_lot::RwLock`: the loader
//! takes the write lock for a whole language load, the renderer takes short
//! read locks on glyph-cache misses.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::alphabet::PlaceholderAlphabet;
use crate::coordinator::ClusterCoordinator;

/// Renderer-facing view of issued placeholders.
pub trait PlaceholderSource {
    /// Text to rasterize for `c`: its cluster if `c` is a placeholder,
    /// otherwise `c` itself.
    fn expand_placeholder(&self, c: char) -> String;

    /// False when no placeholder has been issued, letting the renderer skip
    /// expansion entirely.
    fn has_placeholders(&self) -> bool;
}

impl PlaceholderSource for PlaceholderAlphabet {
    fn expand_placeholder(&self, c: char) -> String {
        self.expand(c).into_owned()
    }

    fn has_placeholders(&self) -> bool {
        !self.is_empty()
    }
}

/// Cloneable, thread-safe handle to one [`ClusterCoordinator`].
#[derive(Debug, Clone, Default)]
pub struct SharedClusters {
    inner: Arc<RwLock<ClusterCoordinator>>,
}

impl SharedClusters {
    pub fn new(coordinator: ClusterCoordinator) -> Self {
        Self {
            inner: Arc::new(RwLock::new(coordinator)),
        }
    }

    /// Run `f` with exclusive access, for the load phase.
    pub fn with_loader<R>(&self, f: impl FnOnce(&mut ClusterCoordinator) -> R) -> R {
        let mut guard = self.inner.write();
        f(&mut guard)
    }

    /// Run `f` with shared access to the alphabet, for the render phase.
    pub fn with_alphabet<R>(&self, f: impl FnOnce(&PlaceholderAlphabet) -> R) -> R {
        let guard = self.inner.read();
        f(guard.alphabet())
    }

    pub fn expand(&self, c: char) -> String {
        self.with_alphabet(|alphabet| alphabet.expand(c).into_owned())
    }

    pub fn is_empty(&self) -> bool {
        self.with_alphabet(PlaceholderAlphabet::is_empty)
    }
}

impl PlaceholderSource for SharedClusters {
    fn expand_placeholder(&self, c: char) -> String {
        self.expand(c)
    }

    fn has_placeholders(&self) -> bool {
        !self.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cluster_glyphs_config::{LanguageTable, keys};
    use std::thread;

    #[test]
    fn test_loader_and_renderer_share_alphabet() {
        let shared = SharedClusters::default();
        assert!(!shared.has_placeholders());

        let table: LanguageTable = [(keys::RIGHT_JOINERS, "R")].into_iter().collect();
        let remapped = shared.with_loader(|c| {
            assert!(c.begin_language("xx", &table));
            let out = c.remap_clusters("Ra").unwrap();
            c.end_language();
            out
        });

        let renderer = shared.clone();
        let expanded = thread::spawn(move || {
            remapped
                .chars()
                .map(|c| renderer.expand_placeholder(c))
                .collect::<String>()
        })
        .join()
        .unwrap();

        assert_eq!(expanded, "Ra");
        assert!(shared.has_placeholders());
    }

    #[test]
    fn test_alphabet_is_a_placeholder_source() {
        let mut alphabet = PlaceholderAlphabet::new();
        let p = alphabet.resolve("ab").unwrap();
        let source: &dyn PlaceholderSource = &alphabet;
        assert_eq!(source.expand_placeholder(p), "ab");
        assert_eq!(source.expand_placeholder('z'), "z");
        assert!(source.has_placeholders());
    }
}
