//! Typed error variants for the cluster-glyphs-config crate.
//!
//! File-loading entry points return `anyhow::Result` with path context
//! attached; the underlying `ConfigError` can be recovered with
//! `downcast_ref` by callers that want to match on the failure mode.
//!
//! # Example
//!
//! ```rust,no_run
//! use cluster_glyphs_config::ConfigError;
//!
//! fn report(e: &anyhow::Error) {
//!     if let Some(cfg_err) = e.downcast_ref::<ConfigError>() {
//!         match cfg_err {
//!             ConfigError::Io(io) => eprintln!("I/O error: {io}"),
//!             ConfigError::Toml(t) => eprintln!("TOML error: {t}"),
//!             ConfigError::Yaml(y) => eprintln!("YAML error: {y}"),
//!             ConfigError::Validation(msg) => eprintln!("Validation: {msg}"),
//!         }
//!     }
//! }
//! ```

use std::fmt;

/// Errors that can occur when reading a language table.
#[derive(Debug)]
pub enum ConfigError {
    /// The language file could not be read.
    Io(std::io::Error),

    /// The language file contained invalid TOML.
    Toml(toml::de::Error),

    /// The language file contained invalid YAML.
    Yaml(serde_yaml_ng::Error),

    /// The table parsed but its shape is not a flat string-to-string map,
    /// or the file extension is not recognized.
    Validation(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "I/O error reading language table: {e}"),
            ConfigError::Toml(e) => write!(f, "TOML parse error in language table: {e}"),
            ConfigError::Yaml(e) => write!(f, "YAML parse error in language table: {e}"),
            ConfigError::Validation(msg) => write!(f, "Language table validation error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Toml(e) => Some(e),
            ConfigError::Yaml(e) => Some(e),
            ConfigError::Validation(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Toml(e)
    }
}

impl From<serde_yaml_ng::Error> for ConfigError {
    fn from(e: serde_yaml_ng::Error) -> Self {
        ConfigError::Yaml(e)
    }
}
