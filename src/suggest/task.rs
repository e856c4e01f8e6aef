//! Task definitions for the suggestion fan-out.
//!
//! Each request spawns one spelling task per normalized name part plus one
//! semantic task for the whole name. Outputs carry enough positional
//! information for the merge step to align per-part results with the
//! original part list.

use crate::semantic::similarity::SemanticIndex;
use crate::spelling::vocabulary::NameVocabulary;
use crate::suggest::config::ValidatorConfig;

/// An independent sub-query executed on the worker pool.
#[derive(Debug, Clone)]
pub enum SuggestTask {
    /// Spelling candidate lookup for a single normalized name part.
    Spelling {
        /// Position of the part in the normalized part list.
        part_index: usize,
        /// The normalized part to correct.
        part: String,
    },
    /// Semantic similarity lookup for the whole normalized name.
    Semantic {
        /// The normalized name.
        name: String,
    },
}

/// Output of a completed sub-query.
#[derive(Debug, Clone)]
pub enum TaskOutput {
    /// Ranked spelling suggestions for one part.
    Spelling {
        /// Position of the part the suggestions belong to.
        part_index: usize,
        /// Top suggestions, frequency-ranked.
        suggestions: Vec<String>,
    },
    /// Semantic matches for the whole name, similarity-ranked.
    Semantic {
        /// Matching reference names.
        suggestions: Vec<String>,
    },
}

impl SuggestTask {
    /// Execute this task against the shared read-only indexes.
    pub fn execute(
        &self,
        vocabulary: &NameVocabulary,
        semantic: &SemanticIndex,
        config: &ValidatorConfig,
    ) -> TaskOutput {
        match self {
            SuggestTask::Spelling { part_index, part } => TaskOutput::Spelling {
                part_index: *part_index,
                suggestions: vocabulary.spell_suggestions(part, config.max_spell_suggestions),
            },
            SuggestTask::Semantic { name } => TaskOutput::Semantic {
                suggestions: semantic.suggest(name, config.max_semantic_suggestions),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantic::reference::ReferenceTable;

    #[test]
    fn test_spelling_task_keeps_part_index() {
        let mut vocabulary = NameVocabulary::new();
        vocabulary.add_word("john", 5);
        let semantic = SemanticIndex::build(ReferenceTable::default_names());
        let config = ValidatorConfig::default();

        let task = SuggestTask::Spelling {
            part_index: 2,
            part: "jonh".to_string(),
        };

        match task.execute(&vocabulary, &semantic, &config) {
            TaskOutput::Spelling {
                part_index,
                suggestions,
            } => {
                assert_eq!(part_index, 2);
                assert_eq!(suggestions, vec!["john"]);
            }
            TaskOutput::Semantic { .. } => panic!("expected spelling output"),
        }
    }

    #[test]
    fn test_semantic_task_uses_reference_table() {
        let vocabulary = NameVocabulary::new();
        let semantic = SemanticIndex::build(ReferenceTable::default_names());
        let config = ValidatorConfig::default();

        let task = SuggestTask::Semantic {
            name: "john".to_string(),
        };

        match task.execute(&vocabulary, &semantic, &config) {
            TaskOutput::Semantic { suggestions } => {
                assert_eq!(suggestions.len(), 3);
                assert_eq!(suggestions[0], "John");
            }
            TaskOutput::Spelling { .. } => panic!("expected semantic output"),
        }
    }
}
