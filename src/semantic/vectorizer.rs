//! Character n-gram TF-IDF vectorizer.
//!
//! Represents strings by counts of their character substrings of lengths 1-3,
//! weighted by smoothed inverse document frequency. The vectorizer is fitted
//! once over the reference name table and reused for every query; it must be
//! refitted if the table ever changes (it does not in this design).

use std::collections::{HashMap, HashSet};

use crate::error::{OnomaError, Result};

/// TF-IDF vectorizer over character n-grams.
#[derive(Debug, Clone)]
pub struct CharNgramVectorizer {
    /// Minimum n-gram size.
    min_gram: usize,
    /// Maximum n-gram size.
    max_gram: usize,
    /// Vocabulary: n-gram -> index mapping.
    vocabulary: HashMap<String, usize>,
    /// Inverse document frequency for each n-gram.
    idf: Vec<f64>,
    /// Total number of documents seen during fitting.
    n_documents: usize,
}

impl CharNgramVectorizer {
    /// Create a new vectorizer for n-grams of the given size range.
    ///
    /// # Errors
    ///
    /// Returns an error if `min_gram` is 0 or `max_gram` is less than
    /// `min_gram`.
    pub fn new(min_gram: usize, max_gram: usize) -> Result<Self> {
        if min_gram == 0 {
            return Err(OnomaError::analysis("min_gram must be at least 1"));
        }
        if max_gram < min_gram {
            return Err(OnomaError::analysis(format!(
                "max_gram ({max_gram}) must be >= min_gram ({min_gram})"
            )));
        }

        Ok(Self {
            min_gram,
            max_gram,
            vocabulary: HashMap::new(),
            idf: Vec::new(),
            n_documents: 0,
        })
    }

    /// Create the vectorizer used for name similarity (n-grams of length 1-3).
    pub fn for_names() -> Self {
        Self {
            min_gram: 1,
            max_gram: 3,
            vocabulary: HashMap::new(),
            idf: Vec::new(),
            n_documents: 0,
        }
    }

    /// Extract character n-grams from a string, lowercased.
    fn ngrams(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.to_lowercase().chars().collect();
        let mut grams = Vec::new();

        for start in 0..chars.len() {
            for gram_size in self.min_gram..=self.max_gram {
                let end = start + gram_size;
                if end > chars.len() {
                    break;
                }
                grams.push(chars[start..end].iter().collect());
            }
        }

        grams
    }

    /// Fit the vectorizer on a set of documents.
    ///
    /// Builds the n-gram vocabulary and computes smoothed IDF weights:
    /// `ln((N + 1) / (df + 1)) + 1`.
    pub fn fit(&mut self, documents: &[String]) {
        self.n_documents = documents.len();
        let mut vocabulary = HashMap::new();
        let mut document_frequency: HashMap<String, usize> = HashMap::new();

        for doc in documents {
            let unique_grams: HashSet<String> = self.ngrams(doc).into_iter().collect();

            for gram in unique_grams {
                *document_frequency.entry(gram.clone()).or_insert(0) += 1;
                let next_idx = vocabulary.len();
                vocabulary.entry(gram).or_insert(next_idx);
            }
        }

        let mut idf = vec![0.0; vocabulary.len()];
        for (gram, idx) in &vocabulary {
            let df = document_frequency.get(gram).copied().unwrap_or(0);
            idf[*idx] = ((self.n_documents as f64 + 1.0) / (df as f64 + 1.0)).ln() + 1.0;
        }

        self.vocabulary = vocabulary;
        self.idf = idf;
    }

    /// Transform a string into a TF-IDF feature vector.
    ///
    /// N-grams not seen during fitting are ignored, so the vector dimension
    /// is fixed by the fitted vocabulary.
    pub fn transform(&self, text: &str) -> Vec<f64> {
        let grams = self.ngrams(text);
        let mut tf = vec![0.0; self.vocabulary.len()];

        for gram in &grams {
            if let Some(&idx) = self.vocabulary.get(gram) {
                tf[idx] += 1.0;
            }
        }

        // Normalize by total n-gram count
        let total = grams.len() as f64;
        if total > 0.0 {
            for count in &mut tf {
                *count /= total;
            }
        }

        for (idx, count) in tf.iter_mut().enumerate() {
            *count *= self.idf[idx];
        }

        tf
    }

    /// Get the size of the fitted vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ngram_extraction() {
        let vectorizer = CharNgramVectorizer::new(2, 2).unwrap();
        assert_eq!(vectorizer.ngrams("john"), vec!["jo", "oh", "hn"]);

        let vectorizer = CharNgramVectorizer::new(1, 3).unwrap();
        let grams = vectorizer.ngrams("abc");
        assert_eq!(grams, vec!["a", "ab", "abc", "b", "bc", "c"]);
    }

    #[test]
    fn test_ngrams_are_lowercased() {
        let vectorizer = CharNgramVectorizer::new(2, 2).unwrap();
        assert_eq!(vectorizer.ngrams("John"), vectorizer.ngrams("john"));
    }

    #[test]
    fn test_invalid_gram_range() {
        assert!(CharNgramVectorizer::new(0, 2).is_err());
        assert!(CharNgramVectorizer::new(3, 2).is_err());
    }

    #[test]
    fn test_fit_and_transform() {
        let documents = vec![
            "John".to_string(),
            "Mary".to_string(),
            "Robert".to_string(),
        ];

        let mut vectorizer = CharNgramVectorizer::for_names();
        vectorizer.fit(&documents);
        assert!(vectorizer.vocabulary_size() > 0);

        let features = vectorizer.transform("john");
        assert_eq!(features.len(), vectorizer.vocabulary_size());
        assert!(features.iter().any(|&v| v > 0.0));
    }

    #[test]
    fn test_transform_ignores_unknown_ngrams() {
        let documents = vec!["John".to_string()];

        let mut vectorizer = CharNgramVectorizer::for_names();
        vectorizer.fit(&documents);

        // No n-gram of "xyz" appears in "john"
        let features = vectorizer.transform("xyz");
        assert!(features.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_fit_on_empty_corpus() {
        let mut vectorizer = CharNgramVectorizer::for_names();
        vectorizer.fit(&[]);

        assert_eq!(vectorizer.vocabulary_size(), 0);
        assert!(vectorizer.transform("john").is_empty());
    }

    #[test]
    fn test_rare_ngrams_weigh_more() {
        // "jo" appears in one document, "a" in two: the rarer n-gram gets a
        // larger IDF weight.
        let documents = vec![
            "john".to_string(),
            "mary".to_string(),
            "maria".to_string(),
        ];

        let mut vectorizer = CharNgramVectorizer::for_names();
        vectorizer.fit(&documents);

        let jo_idx = vectorizer.vocabulary["jo"];
        let a_idx = vectorizer.vocabulary["a"];
        assert!(vectorizer.idf[jo_idx] > vectorizer.idf[a_idx]);
    }
}
