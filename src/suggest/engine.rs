//! Main suggestion aggregation engine.
//!
//! [`NameValidator`] owns the process-wide read-only state (vocabulary,
//! semantic index) and a bounded worker pool. Each request fans out one
//! spelling sub-query per name part plus one semantic sub-query, joins on
//! all of them, and merges the results deterministically.

use std::sync::Arc;
use std::sync::mpsc;
use std::time::Instant;

use log::debug;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::{Deserialize, Serialize};

use crate::analysis::normalize::{normalize_text, title_case};
use crate::analysis::structure::{NameStructure, StructureAnalyzer};
use crate::error::{OnomaError, Result};
use crate::semantic::reference::ReferenceTable;
use crate::semantic::similarity::SemanticIndex;
use crate::spelling::vocabulary::NameVocabulary;
use crate::suggest::config::ValidatorConfig;
use crate::suggest::task::{SuggestTask, TaskOutput};

/// Analysis attached to a validation result: either the structural record or
/// an error marker when the input failed the validation gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisReport {
    /// Structural analysis of a valid name.
    Structure(NameStructure),
    /// Error marker for rejected input.
    Invalid {
        /// Short description of why the input was rejected.
        error: String,
    },
}

impl AnalysisReport {
    /// Whether this report carries an error marker.
    pub fn is_error(&self) -> bool {
        matches!(self, AnalysisReport::Invalid { .. })
    }
}

/// Boundary-facing validation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResponse {
    /// The raw input name.
    pub original: String,
    /// Up to `max_suggestions` candidate names, duplicate-free.
    pub suggestions: Vec<String>,
    /// Structural analysis or error marker.
    pub analysis: AnalysisReport,
    /// Whether the name is considered plausible.
    pub is_valid: bool,
    /// The normalized form of the input.
    pub normalized: String,
}

/// Suggestion aggregation engine.
///
/// The vocabulary, reference table, and fitted vector space are built once
/// and shared read-only across requests; no locking is needed during the
/// fan-out.
pub struct NameValidator {
    vocabulary: Arc<NameVocabulary>,
    semantic: Arc<SemanticIndex>,
    analyzer: StructureAnalyzer,
    thread_pool: Arc<ThreadPool>,
    config: ValidatorConfig,
}

impl NameValidator {
    /// Create a validator backed by the built-in fallback vocabulary and
    /// reference table.
    pub fn new() -> Result<Self> {
        Self::with_resources(
            NameVocabulary::default_names(),
            ReferenceTable::default_names(),
            ValidatorConfig::default(),
        )
    }

    /// Create a validator from pre-built resources.
    pub fn with_resources(
        vocabulary: NameVocabulary,
        table: ReferenceTable,
        config: ValidatorConfig,
    ) -> Result<Self> {
        let thread_pool_size = config.thread_pool_size.unwrap_or_else(num_cpus::get);
        let thread_pool = ThreadPoolBuilder::new()
            .num_threads(thread_pool_size)
            .thread_name(|i| format!("onoma-suggest-{i}"))
            .build()
            .map_err(|e| OnomaError::internal(format!("Failed to create thread pool: {e}")))?;

        Ok(Self {
            vocabulary: Arc::new(vocabulary.with_max_distance(config.max_edit_distance)),
            semantic: Arc::new(SemanticIndex::build(table)),
            analyzer: StructureAnalyzer::new(),
            thread_pool: Arc::new(thread_pool),
            config,
        })
    }

    /// Create a validator by loading the word list and reference table from
    /// files, falling back to built-in data when either file is absent.
    pub fn from_files<P: AsRef<std::path::Path>>(
        corpus_path: P,
        reference_path: P,
        config: ValidatorConfig,
    ) -> Result<Self> {
        Self::with_resources(
            NameVocabulary::load_or_default(corpus_path),
            ReferenceTable::load_or_default(reference_path),
            config,
        )
    }

    /// Check whether a raw name passes the validation gate: long enough and
    /// free of numeric characters. The check spans the whole Unicode number
    /// category, so Roman numerals and fractions are rejected along with
    /// decimal digits.
    pub fn is_valid_name(&self, name: &str) -> bool {
        name.chars().count() >= self.config.min_name_length
            && !name.chars().any(|c| c.is_numeric())
    }

    /// Generate suggestions and structural analysis for a name.
    ///
    /// Input failing the validation gate is recovered locally: the result is
    /// an empty suggestion list paired with an error marker. On valid input
    /// the merge order is deterministic: the corrected name (when it differs
    /// from the normalized input), then unseen semantic matches in rank
    /// order, then the title-cased original as a last resort for multi-part
    /// names. The list is capped at `max_suggestions`.
    pub fn enhanced_suggestions(&self, name: &str) -> Result<(Vec<String>, AnalysisReport)> {
        if !self.is_valid_name(name) {
            return Ok((
                Vec::new(),
                AnalysisReport::Invalid {
                    error: "Invalid name format".to_string(),
                },
            ));
        }

        let normalized = normalize_text(name);
        let parts: Vec<String> = normalized.split_whitespace().map(String::from).collect();

        // Structural analysis runs on the original, non-normalized string.
        let structure = self.analyzer.analyze(name)?;

        let mut tasks: Vec<SuggestTask> = parts
            .iter()
            .enumerate()
            .map(|(part_index, part)| SuggestTask::Spelling {
                part_index,
                part: part.clone(),
            })
            .collect();
        tasks.push(SuggestTask::Semantic {
            name: normalized.clone(),
        });

        let outputs = self.run_tasks(tasks)?;

        let mut spell_results: Vec<Vec<String>> = vec![Vec::new(); parts.len()];
        let mut semantic_results: Vec<String> = Vec::new();
        for output in outputs {
            match output {
                TaskOutput::Spelling {
                    part_index,
                    suggestions,
                } => spell_results[part_index] = suggestions,
                TaskOutput::Semantic { suggestions } => semantic_results = suggestions,
            }
        }

        let suggestions = self.merge(name, &normalized, &parts, &spell_results, &semantic_results);
        debug!(
            "suggestions for {name:?}: {} spelling parts, {} semantic matches, {} merged",
            parts.len(),
            semantic_results.len(),
            suggestions.len()
        );

        Ok((suggestions, AnalysisReport::Structure(structure)))
    }

    /// Validate a name, producing the boundary-facing response shape.
    pub fn validate(&self, name: &str) -> Result<ValidationResponse> {
        let (suggestions, analysis) = self.enhanced_suggestions(name)?;
        let is_valid = !suggestions.is_empty() || self.is_valid_name(name);

        Ok(ValidationResponse {
            original: name.to_string(),
            normalized: normalize_text(name),
            suggestions,
            analysis,
            is_valid,
        })
    }

    /// Execute the fan-out tasks on the worker pool and collect every result
    /// in submission order (full-barrier join, no partial results).
    fn run_tasks(&self, tasks: Vec<SuggestTask>) -> Result<Vec<TaskOutput>> {
        let num_tasks = tasks.len();
        let (tx, rx) = mpsc::channel();

        for (submission_index, task) in tasks.into_iter().enumerate() {
            let tx = tx.clone();
            let vocabulary = Arc::clone(&self.vocabulary);
            let semantic = Arc::clone(&self.semantic);
            let config = self.config.clone();

            self.thread_pool.spawn(move || {
                let output = task.execute(&vocabulary, &semantic, &config);
                let _ = tx.send((submission_index, output));
            });
        }

        // Drop the original sender so the receiver hangs up once all tasks
        // are done.
        drop(tx);

        let mut slots: Vec<Option<TaskOutput>> = (0..num_tasks).map(|_| None).collect();

        match self.config.task_timeout {
            Some(timeout) => {
                let deadline = Instant::now() + timeout;
                for _ in 0..num_tasks {
                    let remaining = deadline.saturating_duration_since(Instant::now());
                    match rx.recv_timeout(remaining) {
                        Ok((submission_index, output)) => slots[submission_index] = Some(output),
                        Err(_) => {
                            let completed = slots.iter().filter(|s| s.is_some()).count();
                            return Err(OnomaError::partial(format!(
                                "{completed}/{num_tasks} sub-queries completed before deadline"
                            )));
                        }
                    }
                }
            }
            None => {
                for _ in 0..num_tasks {
                    let (submission_index, output) = rx
                        .recv()
                        .map_err(|e| OnomaError::ThreadJoin(e.to_string()))?;
                    slots[submission_index] = Some(output);
                }
            }
        }

        slots
            .into_iter()
            .map(|slot| slot.ok_or_else(|| OnomaError::internal("missing sub-query result")))
            .collect()
    }

    /// Deterministic merge of per-part spelling corrections and whole-name
    /// semantic matches.
    fn merge(
        &self,
        original: &str,
        normalized: &str,
        parts: &[String],
        spell_results: &[Vec<String>],
        semantic_results: &[String],
    ) -> Vec<String> {
        let mut suggestions: Vec<String> = Vec::new();

        // Corrected name first: replace each part with its top spelling
        // suggestion where one exists.
        if spell_results.iter().any(|r| !r.is_empty()) {
            let corrected_parts: Vec<&str> = parts
                .iter()
                .enumerate()
                .map(|(i, part)| {
                    spell_results[i]
                        .first()
                        .map(String::as_str)
                        .unwrap_or(part.as_str())
                })
                .collect();

            let corrected_name = corrected_parts.join(" ");
            if corrected_name != normalized {
                suggestions.push(title_case(&corrected_name));
            }
        }

        // Then semantic matches not already present, in rank order.
        for matched in semantic_results {
            let titled = title_case(matched);
            if !suggestions.contains(&titled) {
                suggestions.push(titled);
            }
        }

        // Multi-part name with no suggestions at all might already be valid.
        if suggestions.is_empty() && parts.len() > 1 {
            suggestions.push(title_case(original));
        }

        suggestions.truncate(self.config.max_suggestions);
        suggestions
    }
}
