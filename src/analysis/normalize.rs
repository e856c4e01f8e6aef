//! Normalization routines applied to raw name input.
//!
//! Normalization runs before any token-level processing: accents are folded
//! to their closest ASCII form, everything that is not a letter or whitespace
//! is dropped, and the result is trimmed and lowercased. The operation is
//! idempotent, so normalizing an already-normalized string is a no-op.
//!
//! # Examples
//!
//! ```
//! use onoma::analysis::normalize::normalize_text;
//!
//! assert_eq!(normalize_text("José  García"), "jose  garcia");
//! assert_eq!(normalize_text("J0hn!"), "jhn");
//! ```

use unicode_normalization::UnicodeNormalization;

/// Normalize a name for candidate generation.
///
/// Applies NFKD decomposition and keeps only the ASCII residue, which strips
/// accents and diacritics to their base letters. Remaining characters that
/// are neither ASCII letters nor whitespace are removed, then the string is
/// trimmed and lowercased.
pub fn normalize_text(text: &str) -> String {
    let ascii: String = text.nfkd().filter(|c| c.is_ascii()).collect();
    let letters: String = ascii
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_ascii_whitespace())
        .collect();
    letters.trim().to_lowercase()
}

/// Title-case a string the way suggestion output is presented.
///
/// An alphabetic character is uppercased when the preceding character is not
/// alphabetic, and lowercased otherwise. Non-alphabetic characters pass
/// through and reset the word boundary, so "o'brien" becomes "O'Brien".
/// The capitalization flag in structural analysis and the case-insensitive
/// suggestion de-dup both rely on this exact behavior.
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev_cased = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_cased {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            prev_cased = true;
        } else {
            result.push(c);
            prev_cased = false;
        }
    }

    result
}
