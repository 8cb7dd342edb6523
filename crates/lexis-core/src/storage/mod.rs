//! Storage abstraction for analyzed strings
//!
//! This module defines the `StringStore` trait that abstracts over different
//! storage backends. Implementations exist for:
//!
//! - **Memory**: In-memory storage for testing (`MemoryStore`)
//! - **SQLite**: Native SQLite via rusqlite (separate crate, `lexis-sqlite`)
//!
//! Backends must enforce value uniqueness atomically: two concurrent inserts
//! of the same value leave exactly one record and one `AlreadyExists`.
//!
//! # Example
//!
//! ```rust
//! use lexis_core::analysis::analyze;
//! use lexis_core::storage::{MemoryStore, QueryStore, RecordFilter, StringStore};
//!
//! let mut store = MemoryStore::new();
//! store.insert(analyze("racecar")).unwrap();
//! store.insert(analyze("hello world")).unwrap();
//!
//! assert!(store.insert(analyze("racecar")).is_err());
//!
//! let palindromes = store.query(&RecordFilter::new().is_palindrome(true)).unwrap();
//! assert_eq!(palindromes.len(), 1);
//! ```

mod error;
mod memory;
mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use traits::{QueryStore, RecordFilter, StringStore};
