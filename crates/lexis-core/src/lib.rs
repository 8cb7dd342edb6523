//! Lexis Core Engine
//!
//! This crate provides the computational kernel for Lexis: deriving
//! properties from raw strings and filtering stored records by free-text
//! queries. Everything here is pure and synchronous; persistence lives
//! behind the [`storage`] traits.
//!
//! # Example
//!
//! ```rust
//! use lexis_core::analysis::analyze;
//! use lexis_core::filter::filter_by_query;
//!
//! let records = vec![analyze("level"), analyze("lexis"), analyze("a toyota")];
//! let outcome = filter_by_query("palindromes longer than 5", records).unwrap();
//! assert_eq!(outcome.matches[0].value, "a toyota");
//! ```

pub mod analysis;
pub mod filter;
pub mod storage;

// Re-export main types at crate root
pub use analysis::{analyze, analyze_at, FrequencyMap, StringProperties, StringRecord};
pub use filter::{filter_by_query, FilterError, FilterOutcome, ParsedQuery, Predicate};
pub use storage::{MemoryStore, QueryStore, RecordFilter, StoreError, StringStore};
