//! Suggestion aggregation pipeline.
//!
//! This module orchestrates the spelling and semantic candidate generators:
//! per-part spelling corrections and the whole-name semantic query run in
//! parallel on a bounded worker pool, then the results are merged into a
//! capped, ordered, duplicate-free suggestion list.

pub mod config;
pub mod engine;
pub mod task;

// Re-export commonly used types
pub use config::ValidatorConfig;
pub use engine::{AnalysisReport, NameValidator, ValidationResponse};
pub use task::{SuggestTask, TaskOutput};
