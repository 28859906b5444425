//! Word source: per-length dictionaries for target selection and validation

use crate::core::Word;
use rand::prelude::IndexedRandom;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// Error type for target selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoListForLength(pub usize);

impl fmt::Display for NoListForLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "No word list registered for length {}", self.0)
    }
}

impl std::error::Error for NoListForLength {}

/// One length's accepted words plus a membership index
#[derive(Debug, Clone, Default)]
struct WordList {
    words: Vec<Word>,
    index: FxHashSet<String>,
}

impl WordList {
    fn insert(&mut self, word: Word) {
        if self.index.insert(word.text().to_string()) {
            self.words.push(word);
        }
    }
}

/// Supplies random target words and answers dictionary membership
///
/// Words are partitioned by length; all sessions of a given length share the
/// same read-only list after setup.
///
/// # Examples
/// ```
/// use wordle_game::wordlists::WordSource;
///
/// let source = WordSource::builtin();
/// let target = source.random_target(5).unwrap();
/// assert_eq!(target.len(), 5);
/// assert!(source.is_accepted("crane"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct WordSource {
    lists: FxHashMap<usize, WordList>,
}

impl WordSource {
    /// Create a source with the embedded 4/5/6-letter lists
    #[must_use]
    pub fn builtin() -> Self {
        use super::{WORDS_4, WORDS_5, WORDS_6};
        use super::loader::words_from_slice;

        let mut source = Self::empty();
        source.register(words_from_slice(WORDS_4));
        source.register(words_from_slice(WORDS_5));
        source.register(words_from_slice(WORDS_6));
        source
    }

    /// Create a source with no lists registered
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Register words, partitioning them by length
    ///
    /// Duplicates are ignored. Registering more words for an existing length
    /// extends that list.
    pub fn register(&mut self, words: impl IntoIterator<Item = Word>) {
        for word in words {
            self.lists.entry(word.len()).or_default().insert(word);
        }
    }

    /// Word lengths with a registered list, in ascending order
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.lists.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }

    /// Number of accepted words for a length (0 if none registered)
    #[must_use]
    pub fn count(&self, length: usize) -> usize {
        self.lists.get(&length).map_or(0, |list| list.words.len())
    }

    /// Pick a uniformly random target word of the requested length
    ///
    /// # Errors
    /// Returns `NoListForLength` if no list is registered for `length`.
    pub fn random_target(&self, length: usize) -> Result<Word, NoListForLength> {
        self.lists
            .get(&length)
            .and_then(|list| list.words.choose(&mut rand::rng()))
            .cloned()
            .ok_or(NoListForLength(length))
    }

    /// Check whether a candidate is an accepted dictionary word
    ///
    /// Case-insensitive. Lengths with no registered list are rejected rather
    /// than treated as an error.
    #[must_use]
    pub fn is_accepted(&self, word: &str) -> bool {
        let Ok(word) = Word::new(word) else {
            return false;
        };

        self.lists
            .get(&word.len())
            .is_some_and(|list| list.index.contains(word.text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_source() -> WordSource {
        let mut source = WordSource::empty();
        source.register(
            ["crane", "slate", "erase", "gray", "yarn"]
                .iter()
                .map(|s| Word::new(s).unwrap()),
        );
        source
    }

    #[test]
    fn builtin_has_all_three_lengths() {
        let source = WordSource::builtin();
        assert_eq!(source.lengths(), vec![4, 5, 6]);
        assert!(source.count(5) > 100);
    }

    #[test]
    fn random_target_has_requested_length() {
        let source = WordSource::builtin();
        for length in [4, 5, 6] {
            let target = source.random_target(length).unwrap();
            assert_eq!(target.len(), length);
            assert!(source.is_accepted(target.text()));
        }
    }

    #[test]
    fn random_target_unregistered_length_fails() {
        let source = tiny_source();
        assert_eq!(source.random_target(7), Err(NoListForLength(7)));
        assert_eq!(source.random_target(0), Err(NoListForLength(0)));
    }

    #[test]
    fn is_accepted_case_insensitive() {
        let source = tiny_source();
        assert!(source.is_accepted("crane"));
        assert!(source.is_accepted("CRANE"));
        assert!(source.is_accepted("CrAnE"));
        assert!(!source.is_accepted("zzzzz"));
    }

    #[test]
    fn is_accepted_unknown_length_is_false_not_error() {
        let source = tiny_source();
        assert!(!source.is_accepted("bridge")); // No 6-letter list registered
        assert!(!source.is_accepted(""));
    }

    #[test]
    fn is_accepted_rejects_malformed_input() {
        let source = tiny_source();
        assert!(!source.is_accepted("cr4ne"));
        assert!(!source.is_accepted("cr an"));
    }

    #[test]
    fn register_partitions_by_length() {
        let source = tiny_source();
        assert_eq!(source.count(4), 2);
        assert_eq!(source.count(5), 3);
        assert_eq!(source.count(6), 0);
    }

    #[test]
    fn register_ignores_duplicates() {
        let mut source = tiny_source();
        source.register([Word::new("crane").unwrap()]);
        assert_eq!(source.count(5), 3);
    }
}
