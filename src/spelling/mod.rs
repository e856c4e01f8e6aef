//! Spelling correction for name parts.
//!
//! This module provides the edit-distance machinery and the frequency-weighted
//! vocabulary used to find near-neighbor corrections for individual name
//! tokens.

pub mod levenshtein;
pub mod vocabulary;

// Re-export commonly used types
pub use levenshtein::*;
pub use vocabulary::*;
