//! String analysis
//!
//! Turns a raw string into a [`StringRecord`]: a content-addressed id plus a
//! fixed set of derived properties.
//!
//! Two projections of the input are used, and they are deliberately not the
//! same:
//!
//! - The palindrome test runs over the *cleaned* projection (lowercase ASCII
//!   letters and digits only).
//! - Length, unique characters, word count and the frequency map describe
//!   the *literal* input, spaces and punctuation included.
//!
//! # Example
//!
//! ```rust
//! use lexis_core::analysis::analyze;
//!
//! let record = analyze("Race, Car!");
//! assert!(record.properties.is_palindrome);
//! assert_eq!(record.properties.length, 10);
//! assert_eq!(record.id, record.properties.sha256_hash);
//! ```

mod analyzer;
mod digest;
mod types;

pub use analyzer::{analyze, analyze_at, cleaned_projection, is_palindrome, word_count};
pub use digest::{content_hash, content_hash_hex};
pub use types::{FrequencyMap, StringProperties, StringRecord};
