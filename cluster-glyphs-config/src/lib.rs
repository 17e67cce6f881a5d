//! Language-table configuration for cluster-glyphs.
//!
//! This crate provides:
//! - `LanguageTable`, a flat string-keyed table loaded from TOML or YAML
//! - The reserved diacritic setting keys
//! - `DiacriticSettings`, the sanitized view of those keys consumed by the
//!   character classifier
//! - `ConfigError` for callers that want to match on load failures

pub mod error;
pub mod keys;
pub mod settings;
pub mod table;

pub use error::ConfigError;
pub use settings::{DiacriticSettings, sanitize_value};
pub use table::LanguageTable;
