//! Typed error types for cluster-glyphs.
//!
//! Callers at the crate boundary can match on specific variants instead of
//! relying on opaque `anyhow` strings.

use thiserror::Error;

/// Top-level error type for cluster recognition and placeholder allocation.
#[derive(Debug, Error)]
pub enum ClusterError {
    /// Cluster remapping was requested while the current language session
    /// has no diacritic classification. Callers must check
    /// `has_diacritics()` first; hitting this is a programming error.
    #[error("cluster remapping requested but the current language has no diacritics configured")]
    DiacriticsDisabled,

    /// The placeholder cursor descended past the start of the private use area.
    #[error("placeholder alphabet exhausted after {allocated} allocations")]
    AlphabetExhausted {
        /// Number of placeholders issued since the last reset.
        allocated: usize,
    },

    /// The requested allocation boundary lies outside the private use area.
    #[error("placeholder boundary U+{0:04X} is outside the private use area")]
    InvalidBoundary(u32),
}
