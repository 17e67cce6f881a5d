//! Streaming cluster recognition.
//!
//! A single left-to-right pass classifies each character and either extends
//! the cluster in progress or closes it. Closed clusters longer than one
//! character are replaced by a placeholder from the alphabet.

use crate::alphabet::PlaceholderAlphabet;
use crate::classifier::{CharacterClass, ClassificationTable};
use crate::error::ClusterError;

/// What to do with the current character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Close the cluster in progress, then write the character straight to
    /// the output.
    Emit,
    /// Close the cluster in progress and start a new one with the character.
    Restart,
    /// Append the character to the cluster in progress.
    Extend,
}

/// Transition rule for a character of class `class`.
///
/// `previous_expects_join` is true when the cluster in progress is non-empty
/// and its last character invites a right join.
pub fn transition(class: CharacterClass, previous_expects_join: bool) -> Step {
    match class {
        CharacterClass::None => Step::Emit,
        CharacterClass::Base | CharacterClass::RightJoiner => {
            if previous_expects_join {
                Step::Extend
            } else {
                Step::Restart
            }
        }
        CharacterClass::LeftJoiner | CharacterClass::LeftRightJoiner => Step::Extend,
    }
}

/// Cluster in progress.
#[derive(Debug, Default)]
struct Accumulator {
    text: String,
    chars: usize,
    last_class: Option<CharacterClass>,
}

impl Accumulator {
    fn push(&mut self, c: char, class: CharacterClass) {
        self.text.push(c);
        self.chars += 1;
        self.last_class = Some(class);
    }

    fn expects_join(&self) -> bool {
        self.last_class
            .is_some_and(CharacterClass::expects_right_join)
    }

    fn clear(&mut self) {
        self.text.clear();
        self.chars = 0;
        self.last_class = None;
    }
}

/// Runs the cluster automaton over strings of one language session.
pub struct ClusterRemapper<'a> {
    table: &'a ClassificationTable,
    alphabet: &'a mut PlaceholderAlphabet,
    accumulator: Accumulator,
}

impl<'a> ClusterRemapper<'a> {
    pub fn new(table: &'a ClassificationTable, alphabet: &'a mut PlaceholderAlphabet) -> Self {
        Self {
            table,
            alphabet,
            accumulator: Accumulator::default(),
        }
    }

    /// Replace every multi-character cluster in `text` with its placeholder.
    pub fn remap(&mut self, text: &str) -> Result<String, ClusterError> {
        self.accumulator.clear();
        let mut output = String::with_capacity(text.len());

        for c in text.chars() {
            if self.alphabet.is_placeholder(c) {
                log::warn!(
                    "Input already contains placeholder U+{:04X}; it will be treated as text",
                    c as u32
                );
            }

            let class = self.table.classify(c);
            match transition(class, self.accumulator.expects_join()) {
                Step::Emit => {
                    self.flush(&mut output)?;
                    output.push(c);
                }
                Step::Restart => {
                    self.flush(&mut output)?;
                    self.accumulator.push(c, class);
                }
                Step::Extend => self.accumulator.push(c, class),
            }
        }

        self.flush(&mut output)?;
        Ok(output)
    }

    fn flush(&mut self, output: &mut String) -> Result<(), ClusterError> {
        if self.accumulator.chars > 1 {
            let placeholder = self.alphabet.resolve(&self.accumulator.text)?;
            output.push(placeholder);
        } else {
            output.push_str(&self.accumulator.text);
        }
        self.accumulator.clear();
        Ok(())
    }
}
