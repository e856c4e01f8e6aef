//! Frequency-weighted name vocabulary for spell candidate search.
//!
//! The vocabulary is built once at startup from a newline-delimited word list
//! (duplicate lines increase the frequency weight) and treated as read-only
//! afterwards. Candidate lookup is an O(vocabulary) linear scan over all
//! entries within the edit-distance threshold; an exact match short-circuits
//! the scan, and an empty result falls back to the input word so a lookup
//! never returns nothing.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::warn;

use crate::error::Result;
use crate::spelling::levenshtein::LevenshteinMatcher;

/// Names used when no corpus file is available.
const DEFAULT_NAMES: &[&str] = &["john", "mary", "robert", "jennifer", "michael", "linda"];

/// Default maximum edit distance for the candidate scan.
const DEFAULT_MAX_DISTANCE: usize = 2;

/// A vocabulary that stores lowercase names and their corpus frequencies.
#[derive(Debug, Clone)]
pub struct NameVocabulary {
    /// Words and their frequencies.
    words: HashMap<String, u32>,
    /// Maximum edit distance for candidate search.
    max_distance: usize,
}

impl NameVocabulary {
    /// Create a new empty vocabulary.
    pub fn new() -> Self {
        NameVocabulary {
            words: HashMap::new(),
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }

    /// Set the maximum edit distance used by [`candidates`](Self::candidates).
    pub fn with_max_distance(mut self, max_distance: usize) -> Self {
        self.max_distance = max_distance;
        self
    }

    /// Add a word to the vocabulary with the given frequency.
    pub fn add_word(&mut self, word: &str, frequency: u32) {
        self.words.insert(word.to_lowercase(), frequency);
    }

    /// Increment the frequency of a word by 1.
    pub fn increment_word(&mut self, word: &str) {
        *self.words.entry(word.to_lowercase()).or_insert(0) += 1;
    }

    /// Check if a word exists in the vocabulary.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(&word.to_lowercase())
    }

    /// Get the frequency of a word.
    pub fn frequency(&self, word: &str) -> u32 {
        self.words.get(&word.to_lowercase()).copied().unwrap_or(0)
    }

    /// Get the number of unique words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Load a vocabulary from a newline-delimited word list. Each line is
    /// trimmed and lowercased; repeated occurrences accumulate frequency.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut vocabulary = NameVocabulary::new();
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                vocabulary.increment_word(word);
            }
        }

        Ok(vocabulary)
    }

    /// Load a vocabulary from a file, falling back to the built-in default
    /// names with uniform frequency 1 when the file is absent. The fallback
    /// is logged as a warning and never surfaced as an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load_from_file(&path) {
            Ok(vocabulary) => vocabulary,
            Err(e) => {
                warn!(
                    "name corpus {} not available ({e}), using default names",
                    path.as_ref().display()
                );
                Self::default_names()
            }
        }
    }

    /// Create the built-in fallback vocabulary.
    pub fn default_names() -> Self {
        let mut vocabulary = NameVocabulary::new();
        for name in DEFAULT_NAMES {
            vocabulary.add_word(name, 1);
        }
        vocabulary
    }

    /// Find correction candidates for a word.
    ///
    /// The input is lowercased first. An exact vocabulary hit returns just
    /// that word without scanning. Otherwise every vocabulary entry within
    /// the edit-distance threshold is collected; when nothing qualifies the
    /// original word is returned, so the result is never empty.
    pub fn candidates(&self, word: &str) -> HashSet<String> {
        let word = word.to_lowercase();

        if self.words.contains_key(&word) {
            return HashSet::from([word]);
        }

        let matcher = LevenshteinMatcher::new(word.clone());
        let suggestions: HashSet<String> = self
            .words
            .keys()
            .filter(|known| matcher.is_match(known, self.max_distance))
            .cloned()
            .collect();

        if suggestions.is_empty() {
            HashSet::from([word])
        } else {
            suggestions
        }
    }

    /// Get the top spelling suggestions for a word, ranked by vocabulary
    /// frequency descending. Equal frequencies are broken lexicographically
    /// so the ranking is deterministic.
    pub fn spell_suggestions(&self, word: &str, limit: usize) -> Vec<String> {
        let mut candidates: Vec<String> = self.candidates(word).into_iter().collect();
        candidates.sort_by(|a, b| {
            self.frequency(b)
                .cmp(&self.frequency(a))
                .then_with(|| a.cmp(b))
        });
        candidates.truncate(limit);
        candidates
    }
}

impl Default for NameVocabulary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn test_vocabulary() -> NameVocabulary {
        let mut vocabulary = NameVocabulary::new();
        vocabulary.add_word("john", 10);
        vocabulary.add_word("joan", 4);
        vocabulary.add_word("jon", 6);
        vocabulary.add_word("doe", 3);
        vocabulary.add_word("mary", 8);
        vocabulary
    }

    #[test]
    fn test_basic_operations() {
        let mut vocabulary = NameVocabulary::new();

        assert!(!vocabulary.contains("john"));
        assert_eq!(vocabulary.frequency("john"), 0);
        assert_eq!(vocabulary.word_count(), 0);

        vocabulary.increment_word("john");
        vocabulary.increment_word("John");
        assert!(vocabulary.contains("JOHN"));
        assert_eq!(vocabulary.frequency("john"), 2);
        assert_eq!(vocabulary.word_count(), 1);
    }

    #[test]
    fn test_exact_match_short_circuits() {
        let vocabulary = test_vocabulary();

        let candidates = vocabulary.candidates("john");
        assert_eq!(candidates, HashSet::from(["john".to_string()]));

        // Case-insensitive
        let candidates = vocabulary.candidates("John");
        assert_eq!(candidates, HashSet::from(["john".to_string()]));
    }

    #[test]
    fn test_fuzzy_candidates() {
        let vocabulary = test_vocabulary();

        let candidates = vocabulary.candidates("jonh");
        assert!(candidates.contains("john"));
        assert!(candidates.contains("jon"));
        assert!(!candidates.contains("mary"));
    }

    #[test]
    fn test_candidates_never_empty() {
        let vocabulary = test_vocabulary();

        for input in ["zzzzzzzz", "", "xq", "definitelynotaname"] {
            let candidates = vocabulary.candidates(input);
            assert!(!candidates.is_empty(), "empty candidates for {input:?}");
        }

        // Unknown far-away word falls back to the input itself
        let candidates = vocabulary.candidates("zzzzzzzz");
        assert_eq!(candidates, HashSet::from(["zzzzzzzz".to_string()]));
    }

    #[test]
    fn test_spell_suggestions_ranked_by_frequency() {
        let vocabulary = test_vocabulary();

        let suggestions = vocabulary.spell_suggestions("jonh", 3);
        assert_eq!(suggestions[0], "john"); // freq 10 beats jon (6) and joan (4)
        assert!(suggestions.len() <= 3);
    }

    #[test]
    fn test_spell_suggestions_tie_break_is_lexicographic() {
        let mut vocabulary = NameVocabulary::new();
        vocabulary.add_word("dana", 5);
        vocabulary.add_word("dane", 5);
        vocabulary.add_word("dany", 5);

        let suggestions = vocabulary.spell_suggestions("danx", 3);
        assert_eq!(suggestions, vec!["dana", "dane", "dany"]);
    }

    #[test]
    fn test_load_from_file_counts_duplicates() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "John").unwrap();
        writeln!(temp_file, "mary").unwrap();
        writeln!(temp_file, "john").unwrap();
        writeln!(temp_file).unwrap();
        writeln!(temp_file, "  linda  ").unwrap();
        temp_file.flush().unwrap();

        let vocabulary = NameVocabulary::load_from_file(temp_file.path()).unwrap();
        assert_eq!(vocabulary.frequency("john"), 2);
        assert_eq!(vocabulary.frequency("mary"), 1);
        assert_eq!(vocabulary.frequency("linda"), 1);
        assert_eq!(vocabulary.word_count(), 3);
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let vocabulary = NameVocabulary::load_or_default("/nonexistent/names_corpus.txt");

        assert_eq!(vocabulary.word_count(), 6);
        assert!(vocabulary.contains("john"));
        assert!(vocabulary.contains("linda"));
        assert_eq!(vocabulary.frequency("mary"), 1);
    }
}
