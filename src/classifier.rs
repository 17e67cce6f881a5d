//! Per-language character classification.
//!
//! Maps each character to the role it plays when clusters are formed. The
//! table is rebuilt for every language session and dropped when the session
//! ends.

use std::collections::HashMap;
use std::ops::RangeInclusive;

use cluster_glyphs_config::DiacriticSettings;

/// Combining role of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharacterClass {
    /// Never joins; always a hard cluster boundary.
    #[default]
    None,
    /// Carrier a diacritic can attach to.
    Base,
    /// Attaches to whatever precedes it.
    LeftJoiner,
    /// Attaches to whatever follows it.
    RightJoiner,
    /// Attaches to the preceding character and invites the following one.
    LeftRightJoiner,
}

impl CharacterClass {
    /// Whether the next character should be pulled into this one's cluster.
    pub fn expects_right_join(self) -> bool {
        matches!(self, Self::RightJoiner | Self::LeftRightJoiner)
    }
}

/// Character → class table with a fallback class.
#[derive(Debug, Clone, Default)]
pub struct ClassificationTable {
    /// Per-character overrides; checked before the base range.
    classes: HashMap<char, CharacterClass>,
    base_range: Option<RangeInclusive<char>>,
    default_class: CharacterClass,
}

impl ClassificationTable {
    /// Build a table from sanitized settings.
    ///
    /// Returns `None` when no joiner string is populated; such a language
    /// needs no cluster remapping at all.
    pub fn from_settings(settings: &DiacriticSettings) -> Option<Self> {
        if !settings.has_joiners() {
            return None;
        }

        let mut table = Self::default();
        match settings.joinable_range {
            Some((start, end)) => {
                log::debug!("Base range U+{:04X}-U+{:04X}", start as u32, end as u32);
                table.base_range = Some(start..=end);
                table.default_class = CharacterClass::None;
            }
            None => {
                table.default_class = CharacterClass::Base;
                table.classes.insert(' ', CharacterClass::None);
            }
        }

        table.assign(&settings.left_joiners, CharacterClass::LeftJoiner);
        table.assign(&settings.right_joiners, CharacterClass::RightJoiner);
        table.assign(
            &settings.left_and_right_joiners,
            CharacterClass::LeftRightJoiner,
        );
        Some(table)
    }

    fn assign(&mut self, chars: &str, class: CharacterClass) {
        for c in chars.chars() {
            if let Some(previous) = self.classes.insert(c, class)
                && previous != class
                && previous != CharacterClass::None
            {
                log::warn!(
                    "Character '{}' (U+{:04X}) listed as both {:?} and {:?}; using {:?}",
                    c,
                    c as u32,
                    previous,
                    class,
                    class
                );
            }
        }
    }

    /// Class of `c`, falling back to the table default.
    pub fn classify(&self, c: char) -> CharacterClass {
        if let Some(class) = self.classes.get(&c) {
            return *class;
        }
        match &self.base_range {
            Some(range) if range.contains(&c) => CharacterClass::Base,
            _ => self.default_class,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(
        range: Option<(char, char)>,
        left: &str,
        right: &str,
        both: &str,
    ) -> DiacriticSettings {
        DiacriticSettings {
            joinable_range: range,
            left_joiners: left.to_string(),
            right_joiners: right.to_string(),
            left_and_right_joiners: both.to_string(),
        }
    }

    fn table(
        range: Option<(char, char)>,
        left: &str,
        right: &str,
        both: &str,
    ) -> ClassificationTable {
        let settings = settings(range, left, right, both);
        ClassificationTable::from_settings(&settings).unwrap()
    }

    #[test]
    fn test_only_joiner_classes_expect_right_join() {
        assert!(!CharacterClass::None.expects_right_join());
        assert!(!CharacterClass::Base.expects_right_join());
        assert!(!CharacterClass::LeftJoiner.expects_right_join());
        assert!(CharacterClass::RightJoiner.expects_right_join());
        assert!(CharacterClass::LeftRightJoiner.expects_right_join());
    }

    #[test]
    fn test_no_joiners_builds_no_table() {
        let empty = settings(Some(('a', 'z')), "", "", "");
        assert!(ClassificationTable::from_settings(&empty).is_none());
    }

    #[test]
    fn test_range_restricts_base_domain() {
        let table = table(Some(('a', 'f')), "", "", "^");
        assert_eq!(table.classify('a'), CharacterClass::Base);
        assert_eq!(table.classify('f'), CharacterClass::Base);
        assert_eq!(table.classify('g'), CharacterClass::None);
        assert_eq!(table.classify(' '), CharacterClass::None);
        assert_eq!(table.classify('^'), CharacterClass::LeftRightJoiner);
        assert_eq!(table.classify('\u{4E00}'), CharacterClass::None);
    }

    #[test]
    fn test_no_range_defaults_to_base_except_space() {
        let table = table(None, "L", "R", "");
        assert_eq!(table.classify('x'), CharacterClass::Base);
        assert_eq!(table.classify('\u{0E01}'), CharacterClass::Base);
        assert_eq!(table.classify(' '), CharacterClass::None);
        assert_eq!(table.classify('L'), CharacterClass::LeftJoiner);
        assert_eq!(table.classify('R'), CharacterClass::RightJoiner);
    }

    #[test]
    fn test_joiners_override_range() {
        let table = table(Some(('a', 'z')), "b", "c", "d");
        assert_eq!(table.classify('b'), CharacterClass::LeftJoiner);
        assert_eq!(table.classify('c'), CharacterClass::RightJoiner);
        assert_eq!(table.classify('d'), CharacterClass::LeftRightJoiner);
        assert_eq!(table.classify('e'), CharacterClass::Base);
    }

    #[test]
    fn test_later_joiner_string_wins() {
        let table = table(None, "x", "", "x");
        assert_eq!(table.classify('x'), CharacterClass::LeftRightJoiner);
    }
}
