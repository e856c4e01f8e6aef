//! Word tokenizer for raw name strings.
//!
//! Splits text on Unicode word boundaries (UAX #29) and keeps only segments
//! that contain at least one alphanumeric character, so punctuation and
//! whitespace never surface as tokens. The raw, original-case input is
//! tokenized here; normalization is a separate step.
//!
//! # Examples
//!
//! ```
//! use onoma::analysis::tokenizer::WordTokenizer;
//!
//! let tokenizer = WordTokenizer::new();
//! let tokens = tokenizer.tokenize("Mary-Jane  O'Connor").unwrap();
//! let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["Mary", "Jane", "O'Connor"]);
//! ```

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::error::Result;

/// A single unit of text produced by tokenization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The token's text content.
    pub text: String,
    /// Position in the token stream (0-based).
    pub position: usize,
}

impl Token {
    /// Create a new token.
    pub fn new(text: &str, position: usize) -> Self {
        Token {
            text: text.to_string(),
            position,
        }
    }
}

/// A tokenizer that splits text on Unicode word boundaries.
///
/// Properly handles international text; word segments that consist solely of
/// punctuation or whitespace are filtered out.
#[derive(Clone, Debug, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Create a new word tokenizer.
    pub fn new() -> Self {
        WordTokenizer
    }

    /// Tokenize the input into word tokens.
    pub fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
        let tokens = text
            .split_word_bounds()
            .filter(|word| word.chars().any(|c| c.is_alphanumeric()))
            .enumerate()
            .map(|(position, word)| Token::new(word, position))
            .collect();

        Ok(tokens)
    }
}
