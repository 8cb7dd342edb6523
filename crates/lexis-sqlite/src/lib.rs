//! SQLite storage backend for Lexis string records
//!
//! This crate provides a persistent SQLite implementation of the lexis-core
//! storage traits, so analyzed strings survive restarts.
//!
//! # Features
//!
//! - Implements `StringStore` and `QueryStore` traits
//! - Value uniqueness enforced by a UNIQUE constraint (atomic insert-if-absent)
//! - Structured filters pushed down into SQL
//! - Supports in-memory databases for testing
//!
//! # Example
//!
//! ```rust,no_run
//! use lexis_core::analysis::analyze;
//! use lexis_core::storage::{QueryStore, RecordFilter, StringStore};
//! use lexis_sqlite::SqliteStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = SqliteStore::open("string_analyzer.db")?;
//!
//! store.insert(analyze("racecar"))?;
//! assert!(store.get_by_value("racecar")?.is_some());
//!
//! let palindromes = store.query(&RecordFilter::new().is_palindrome(true))?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod json;
pub mod migrate;
pub mod store;

// Re-export main types
pub use error::{Result, SqliteError};
pub use store::SqliteStore;
