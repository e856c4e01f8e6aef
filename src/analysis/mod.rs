//! Text analysis for name processing.
//!
//! This module provides the pieces that run before any candidate generation:
//! accent-stripping normalization, word-boundary tokenization, and structural
//! analysis (likely first/last name split).

pub mod normalize;
pub mod structure;
pub mod tokenizer;

// Re-export commonly used types
pub use normalize::*;
pub use structure::*;
pub use tokenizer::*;
