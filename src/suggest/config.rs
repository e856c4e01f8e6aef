//! Configuration for the suggestion pipeline.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for [`crate::suggest::NameValidator`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Maximum number of merged suggestions to return.
    pub max_suggestions: usize,

    /// Maximum number of spelling suggestions per name part.
    pub max_spell_suggestions: usize,

    /// Maximum number of semantic matches for the whole name.
    pub max_semantic_suggestions: usize,

    /// Maximum edit distance for the vocabulary candidate scan.
    pub max_edit_distance: usize,

    /// Minimum raw input length accepted by the validation gate.
    pub min_name_length: usize,

    /// Thread pool size for the fan-out. If None, uses the number of CPU
    /// cores.
    pub thread_pool_size: Option<usize>,

    /// Deadline for the fan-out sub-queries. If None, the aggregator blocks
    /// until all tasks complete.
    pub task_timeout: Option<Duration>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            max_suggestions: 5,
            max_spell_suggestions: 3,
            max_semantic_suggestions: 3,
            max_edit_distance: 2,
            min_name_length: 2,
            thread_pool_size: None,
            task_timeout: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ValidatorConfig::default();

        assert_eq!(config.max_suggestions, 5);
        assert_eq!(config.max_spell_suggestions, 3);
        assert_eq!(config.max_semantic_suggestions, 3);
        assert_eq!(config.max_edit_distance, 2);
        assert_eq!(config.min_name_length, 2);
        assert!(config.task_timeout.is_none());
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = ValidatorConfig {
            task_timeout: Some(Duration::from_secs(5)),
            thread_pool_size: Some(4),
            ..Default::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: ValidatorConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.max_suggestions, 5);
        assert_eq!(parsed.thread_pool_size, Some(4));
        assert_eq!(parsed.task_timeout, Some(Duration::from_secs(5)));
    }
}
