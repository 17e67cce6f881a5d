//! Diacritic cluster placeholders for one-glyph-per-character renderers.
//!
//! Some scripts combine a base character with one or more diacritics into a
//! single visual glyph that has no precomposed codepoint. Renderers that map
//! exactly one character to one glyph cannot draw those. This crate finds
//! such clusters while translated text is being prepared, swaps each for a
//! private-use-area placeholder, and lets the renderer expand a placeholder
//! back into its cluster when it rasterizes the glyph.
//!
//! # Architecture
//!
//! - `ClassificationTable` assigns each character a `CharacterClass` from the
//!   language's diacritic settings.
//! - `ClusterRemapper` is the streaming automaton that groups characters into
//!   clusters.
//! - `PlaceholderAlphabet` allocates placeholders and maps them back.
//! - `ClusterCoordinator` ties these together across language loads, and
//!   `SharedClusters` hands one coordinator to both loader and renderer.
//!
//! # Locking
//!
//! The core types take no locks. Code that loads and renders on different
//! threads shares a `SharedClusters`, which wraps the coordinator in a
//! `parking_lot::RwLock`.

pub mod alphabet;
pub mod classifier;
pub mod coordinator;
pub mod error;
pub mod remapper;
pub mod shared;

pub use alphabet::{PLACEHOLDER_BOUNDARY, PUA_END, PUA_START, PlaceholderAlphabet};
pub use classifier::{CharacterClass, ClassificationTable};
pub use coordinator::ClusterCoordinator;
pub use error::ClusterError;
pub use remapper::{ClusterRemapper, Step, transition};
pub use shared::{PlaceholderSource, SharedClusters};

// Re-export configuration types so callers need only one dependency
pub use cluster_glyphs_config::{ConfigError, DiacriticSettings, LanguageTable};
