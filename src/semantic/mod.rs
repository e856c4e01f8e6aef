//! Semantic similarity over a reference name list.
//!
//! Names are represented as character n-gram TF-IDF vectors (lengths 1-3) and
//! compared by cosine similarity. The vector space is fitted once over the
//! reference table at startup and reused for every query.

pub mod reference;
pub mod similarity;
pub mod vectorizer;

// Re-export commonly used types
pub use reference::*;
pub use similarity::*;
pub use vectorizer::*;
