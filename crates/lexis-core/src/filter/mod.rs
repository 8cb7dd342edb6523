//! Natural-language filtering
//!
//! Maps a free-text query onto a fixed pipeline of keyword-triggered
//! predicate stages. There is no grammar: each stage looks for its trigger
//! phrases in the normalized (trimmed, lowercased) query, and every stage
//! that fires narrows the candidate set further.
//!
//! | Order | Trigger | Keeps |
//! |---|---|---|
//! | 1 | `palindrome`, `palindromic` | palindromes |
//! | 2 | `single word`, `one word` | `word_count == 1` |
//! | 3 | `multi word`, `multiple words`, `more than one word` | `word_count > 1` |
//! | 4 | `longer than` | `length > N` |
//! | 5 | `shorter than` | `length < N` |
//! | 6 | `containing the letter` | value contains the letters |
//! | 7 | `starting with` | value starts with the letters |
//! | 8 | `ending with` | value ends with the letters |
//! | 9 | `first vowel` | value has a vowel |
//!
//! # Example
//!
//! ```rust
//! use lexis_core::analysis::analyze;
//! use lexis_core::filter::filter_by_query;
//!
//! let records = vec![analyze("racecar"), analyze("hello world"), analyze("noon")];
//! let outcome = filter_by_query("single word palindromes", records).unwrap();
//! assert_eq!(outcome.matches.len(), 2);
//! ```

mod engine;
mod stages;

pub use engine::{filter_by_query, normalize, parse_query, FilterError, FilterOutcome, ParsedQuery};
pub use stages::{extract_number, letters_after, Predicate, Stage, STAGES};
