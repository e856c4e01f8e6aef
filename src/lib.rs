//! # Onoma
//!
//! A name validation and suggestion engine for Rust.
//!
//! ## Features
//!
//! - Edit-distance spell correction against a frequency-weighted name
//!   vocabulary
//! - Character n-gram (1-3) TF-IDF cosine similarity against a reference
//!   name table
//! - Structural analysis (likely first/last name split)
//! - Parallel fan-out of sub-queries over a bounded worker pool
//! - Deterministic merging into a capped, duplicate-free suggestion list

pub mod analysis;
pub mod cli;
pub mod error;
pub mod semantic;
pub mod spelling;
pub mod suggest;

pub mod prelude {}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
