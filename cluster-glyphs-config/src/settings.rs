//! Diacritic settings read from a language table.

use crate::keys;
use crate::table::LanguageTable;

/// Strip every space and then one layer of surrounding double quotes.
///
/// Language files commonly store these values as `" ँ ं "` so that
/// combining marks stay visible in editors. Single quotes are ordinary
/// characters, so an apostrophe can be listed as a joiner.
pub fn sanitize_value(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|&c| c != ' ').collect();
    let mut chars = stripped.chars();
    match (chars.next(), chars.next_back()) {
        (Some('"'), Some('"')) => chars.collect(),
        _ => stripped,
    }
}

/// Sanitized diacritic configuration for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiacriticSettings {
    /// Inclusive range of characters that default to the base class.
    ///
    /// `None` when the range key is absent or does not sanitize to exactly
    /// two characters.
    pub joinable_range: Option<(char, char)>,
    /// Characters that attach to the preceding character.
    pub left_joiners: String,
    /// Characters that attach to the following character.
    pub right_joiners: String,
    /// Characters that attach to both neighbours.
    pub left_and_right_joiners: String,
}

impl DiacriticSettings {
    /// Read and sanitize the four diacritic keys from `table`.
    ///
    /// A malformed range is not an error; it is treated as absent.
    pub fn from_table(table: &LanguageTable) -> Self {
        let read = |key: &str| table.get(key).map(sanitize_value).unwrap_or_default();

        let range = read(keys::JOINABLE_RANGE);
        let mut range_chars = range.chars();
        let joinable_range = match (range_chars.next(), range_chars.next(), range_chars.next()) {
            (Some(start), Some(end), None) => Some((start, end)),
            (None, _, _) => None,
            _ => {
                log::debug!(
                    "Ignoring {} value {:?}: expected exactly two characters",
                    keys::JOINABLE_RANGE,
                    range
                );
                None
            }
        };

        Self {
            joinable_range,
            left_joiners: read(keys::LEFT_JOINERS),
            right_joiners: read(keys::RIGHT_JOINERS),
            left_and_right_joiners: read(keys::LEFT_AND_RIGHT_JOINERS),
        }
    }

    /// True when at least one joiner string is non-empty.
    pub fn has_joiners(&self) -> bool {
        !self.left_joiners.is_empty()
            || !self.right_joiners.is_empty()
            || !self.left_and_right_joiners.is_empty()
    }
}
