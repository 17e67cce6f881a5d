//! String-keyed language tables.
//!
//! A language table is a flat map of translation keys to translated strings.
//! The diacritic settings read by [`crate::DiacriticSettings`] live in the
//! same table under reserved keys (see [`crate::keys`]).

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Ordered, string-keyed language table.
///
/// Serializes as a plain map so it can be embedded in larger config files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageTable {
    entries: BTreeMap<String, String>,
}

impl LanguageTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a flat TOML document of `key = "value"` pairs.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let raw: BTreeMap<String, toml::Value> = toml::from_str(contents)?;
        let mut table = Self::new();
        for (key, value) in raw {
            match value {
                toml::Value::String(s) => {
                    table.insert(key, s);
                }
                other => {
                    return Err(ConfigError::Validation(format!(
                        "key '{key}' must be a string, found {}",
                        other.type_str()
                    )));
                }
            }
        }
        Ok(table)
    }

    /// Parse a flat YAML mapping of `key: value` pairs.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        // serde_yaml_ng reads an empty document as null, not as an empty map
        if contents.trim().is_empty() {
            return Ok(Self::new());
        }
        let raw: BTreeMap<String, serde_yaml_ng::Value> = serde_yaml_ng::from_str(contents)?;
        let mut table = Self::new();
        for (key, value) in raw {
            match value {
                serde_yaml_ng::Value::String(s) => {
                    table.insert(key, s);
                }
                other => {
                    return Err(ConfigError::Validation(format!(
                        "key '{key}' must be a string, found {other:?}"
                    )));
                }
            }
        }
        Ok(table)
    }

    /// Load a language table from disk.
    ///
    /// The file extension selects the format: `.toml`, or `.yaml`/`.yml`.
    pub fn load(path: &Path) -> Result<Self> {
        log::info!("Loading language table from {:?}", path);

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let contents = fs::read_to_string(path)
            .map_err(ConfigError::from)
            .with_context(|| format!("Failed to read language table {}", path.display()))?;

        let table = match extension.as_deref() {
            Some("toml") => Self::from_toml_str(&contents),
            Some("yaml") | Some("yml") => Self::from_yaml_str(&contents),
            _ => Err(ConfigError::Validation(format!(
                "unsupported language table extension for {}",
                path.display()
            ))),
        }
        .with_context(|| format!("Failed to parse language table {}", path.display()))?;

        log::debug!("Loaded {} entries from {:?}", table.len(), path);
        Ok(table)
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Insert or replace a value, returning the previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for LanguageTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_flat_table() {
        let table = LanguageTable::from_toml_str(
            r#"
            greeting = "hello"
            left_joining_diacritics = "\"ँ\""
            "#,
        )
        .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("greeting"), Some("hello"));
        assert_eq!(table.get("left_joining_diacritics"), Some("\"ँ\""));
    }

    #[test]
    fn test_toml_rejects_non_string_values() {
        let err = LanguageTable::from_toml_str("count = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_yaml_flat_table() {
        let table = LanguageTable::from_yaml_str("greeting: hello\nfarewell: bye\n").unwrap();
        assert_eq!(table.get("farewell"), Some("bye"));
    }

    #[test]
    fn test_yaml_empty_document() {
        let table = LanguageTable::from_yaml_str("  \n").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_embeds_as_plain_map() {
        #[derive(Deserialize)]
        struct Pack {
            languages: BTreeMap<String, LanguageTable>,
        }

        let pack: Pack = toml::from_str(
            r#"
            [languages.th]
            left_joining_diacritics = "ั"
            title = "ไทย"
            "#,
        )
        .unwrap();
        let th = &pack.languages["th"];
        assert_eq!(th.get("title"), Some("ไทย"));

        let yaml = serde_yaml_ng::to_string(th).unwrap();
        assert!(yaml.contains("title:"));
        assert!(yaml.contains("left_joining_diacritics:"));
    }

    #[test]
    fn test_from_iter_orders_keys() {
        let table: LanguageTable = [("b", "2"), ("a", "1")].into_iter().collect();
        let keys: Vec<&str> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }
}
