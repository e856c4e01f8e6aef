//! Structural analysis of raw name strings.
//!
//! Guesses a first/last split from the token stream: with two or more tokens
//! the first token is the likely first name and the remaining tokens, joined
//! by single spaces, the likely last name. Single-token names leave both
//! unset. Analysis always runs on the original, non-normalized input so the
//! capitalization flag reflects what the caller actually sent.

use serde::{Deserialize, Serialize};

use crate::analysis::normalize::title_case;
use crate::analysis::tokenizer::WordTokenizer;
use crate::error::Result;

/// Structural analysis of a single name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameStructure {
    /// First token, when the name has at least two tokens.
    pub likely_first: Option<String>,
    /// Remaining tokens joined by single spaces, when present.
    pub likely_last: Option<String>,
    /// Full token list from the raw input.
    pub tokens: Vec<String>,
    /// Whether the raw string equals its own title-cased form.
    pub is_capitalized: bool,
}

/// Analyzer that derives [`NameStructure`] from raw input.
#[derive(Clone, Debug, Default)]
pub struct StructureAnalyzer {
    tokenizer: WordTokenizer,
}

impl StructureAnalyzer {
    /// Create a new structure analyzer.
    pub fn new() -> Self {
        StructureAnalyzer {
            tokenizer: WordTokenizer::new(),
        }
    }

    /// Analyze the raw (original-case) name string.
    pub fn analyze(&self, name: &str) -> Result<NameStructure> {
        let tokens: Vec<String> = self
            .tokenizer
            .tokenize(name)?
            .into_iter()
            .map(|t| t.text)
            .collect();

        let (likely_first, likely_last) = if tokens.len() >= 2 {
            (Some(tokens[0].clone()), Some(tokens[1..].join(" ")))
        } else {
            (None, None)
        };

        Ok(NameStructure {
            likely_first,
            likely_last,
            tokens,
            is_capitalized: name == title_case(name),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_token_split() {
        let analyzer = StructureAnalyzer::new();
        let structure = analyzer.analyze("John Doe").unwrap();

        assert_eq!(structure.likely_first.as_deref(), Some("John"));
        assert_eq!(structure.likely_last.as_deref(), Some("Doe"));
        assert_eq!(structure.tokens, vec!["John", "Doe"]);
        assert!(structure.is_capitalized);
    }

    #[test]
    fn test_multi_token_last_name() {
        let analyzer = StructureAnalyzer::new();
        let structure = analyzer.analyze("Maria Del Carmen").unwrap();

        assert_eq!(structure.likely_first.as_deref(), Some("Maria"));
        assert_eq!(structure.likely_last.as_deref(), Some("Del Carmen"));
    }

    #[test]
    fn test_single_token_has_no_split() {
        let analyzer = StructureAnalyzer::new();
        let structure = analyzer.analyze("Madonna").unwrap();

        assert_eq!(structure.likely_first, None);
        assert_eq!(structure.likely_last, None);
        assert_eq!(structure.tokens, vec!["Madonna"]);
    }

    #[test]
    fn test_capitalization_flag() {
        let analyzer = StructureAnalyzer::new();

        assert!(analyzer.analyze("John Doe").unwrap().is_capitalized);
        assert!(!analyzer.analyze("john doe").unwrap().is_capitalized);
        assert!(!analyzer.analyze("JOHN DOE").unwrap().is_capitalized);
    }
}
