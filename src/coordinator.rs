//! Language-load lifecycle.
//!
//! `ClusterCoordinator` owns the long-lived placeholder alphabet together with
//! the classification table of the language currently being loaded. A load
//! phase looks like:
//!
//! ```text
//! full_reset()
//! for each language:
//!     begin_language(..)
//!     remap_clusters(..)   // only if has_diacritics()
//!     end_language()
//! ```
//!
//! After loading, only the alphabet's forward map is needed; the renderer
//! reads it through [`ClusterCoordinator::alphabet`].

use cluster_glyphs_config::{DiacriticSettings, LanguageTable, keys};

use crate::alphabet::PlaceholderAlphabet;
use crate::classifier::{CharacterClass, ClassificationTable};
use crate::error::ClusterError;
use crate::remapper::ClusterRemapper;

#[derive(Debug, Default)]
pub struct ClusterCoordinator {
    alphabet: PlaceholderAlphabet,
    /// Present only while a language with diacritics is loading.
    table: Option<ClassificationTable>,
    language: Option<String>,
}

impl ClusterCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Coordinator around an existing alphabet, e.g. one built with a
    /// custom boundary.
    pub fn with_alphabet(alphabet: PlaceholderAlphabet) -> Self {
        Self {
            alphabet,
            ..Self::default()
        }
    }

    /// Start a from-scratch reload: forget every placeholder and any session.
    ///
    /// Text remapped before this call must no longer be displayed.
    pub fn full_reset(&mut self) {
        log::info!(
            "Resetting cluster placeholders ({} issued)",
            self.alphabet.len()
        );
        self.alphabet.reset();
        self.table = None;
        self.language = None;
    }

    /// Configure classification for `language` from its table.
    ///
    /// Returns whether the language needs cluster remapping.
    pub fn begin_language(&mut self, language: &str, config: &LanguageTable) -> bool {
        if let Some(previous) = &self.language {
            log::warn!(
                "Starting language '{}' while '{}' is still loading",
                language,
                previous
            );
        }

        let settings = DiacriticSettings::from_table(config);
        self.table = ClassificationTable::from_settings(&settings);
        self.language = Some(language.to_owned());

        log::info!(
            "Language '{}' loaded (diacritics: {})",
            language,
            self.has_diacritics()
        );
        self.has_diacritics()
    }

    /// True while the current language has a diacritic classification.
    pub fn has_diacritics(&self) -> bool {
        self.table.is_some()
    }

    /// Class of `c` under the current language, `None` outside a session.
    pub fn classify(&self, c: char) -> CharacterClass {
        self.table
            .as_ref()
            .map_or(CharacterClass::None, |table| table.classify(c))
    }

    /// Replace every multi-character cluster in `text` with a placeholder.
    ///
    /// Fails with [`ClusterError::DiacriticsDisabled`] when the current
    /// language has no diacritics; callers are expected to check
    /// [`Self::has_diacritics`] first.
    pub fn remap_clusters(&mut self, text: &str) -> Result<String, ClusterError> {
        let Some(table) = self.table.as_ref() else {
            return Err(ClusterError::DiacriticsDisabled);
        };
        ClusterRemapper::new(table, &mut self.alphabet).remap(text)
    }

    /// Finish the current language, keeping every issued placeholder.
    pub fn end_language(&mut self) {
        if let Some(language) = self.language.take() {
            log::debug!(
                "Finished language '{}' ({} placeholders, {} dedup entries dropped)",
                language,
                self.alphabet.len(),
                self.alphabet.dedup_len()
            );
        }
        self.table = None;
        self.alphabet.discard_dedup_index();
    }

    /// Load one language table end to end.
    ///
    /// Every translated value is remapped; the diacritic setting keys are
    /// copied through as-is. Languages without diacritics come back
    /// unchanged.
    pub fn prepare_language(
        &mut self,
        language: &str,
        config: &LanguageTable,
    ) -> Result<LanguageTable, ClusterError> {
        if !self.begin_language(language, config) {
            self.end_language();
            return Ok(config.clone());
        }

        let mut prepared = LanguageTable::new();
        for (key, value) in config.iter() {
            if keys::is_setting_key(key) {
                prepared.insert(key, value);
                continue;
            }
            match self.remap_clusters(value) {
                Ok(remapped) => {
                    prepared.insert(key, remapped);
                }
                Err(e) => {
                    self.end_language();
                    return Err(e);
                }
            }
        }

        self.end_language();
        Ok(prepared)
    }

    /// Name of the language currently loading, if any.
    pub fn current_language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Placeholder alphabet, for renderer-side expansion.
    pub fn alphabet(&self) -> &PlaceholderAlphabet {
        &self.alphabet
    }
}
