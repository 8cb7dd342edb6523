//! In-memory storage backend
//!
//! A simple Vec-based implementation for testing and development.
//! Not suitable for production use due to lack of persistence.

use crate::analysis::StringRecord;
use crate::storage::error::{StoreError, StoreResult};
use crate::storage::traits::{QueryStore, RecordFilter, StringStore};

/// In-memory string store.
///
/// Keeps records in insertion order. Useful for:
/// - Unit testing
/// - Development/prototyping
/// - Short-lived processes that don't need persistence
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Vec<StringRecord>,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Create a memory store with initial records. Duplicates are skipped.
    pub fn with_records(records: Vec<StringRecord>) -> StoreResult<Self> {
        let mut store = Self::new();
        for record in records {
            match store.insert(record) {
                Ok(()) | Err(StoreError::AlreadyExists(_)) => {}
                Err(e) => return Err(e),
            }
        }
        Ok(store)
    }

    fn position(&self, value: &str) -> Option<usize> {
        self.records.iter().position(|r| r.value == value)
    }
}

impl StringStore for MemoryStore {
    fn insert(&mut self, record: StringRecord) -> StoreResult<()> {
        if self.position(&record.value).is_some() {
            return Err(StoreError::AlreadyExists(record.value));
        }
        self.records.push(record);
        Ok(())
    }

    fn get_by_value(&self, value: &str) -> StoreResult<Option<StringRecord>> {
        Ok(self.position(value).map(|i| self.records[i].clone()))
    }

    fn delete(&mut self, value: &str) -> StoreResult<bool> {
        match self.position(value) {
            Some(i) => {
                self.records.remove(i);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn all(&self) -> StoreResult<Vec<StringRecord>> {
        Ok(self.records.clone())
    }

    fn count(&self) -> StoreResult<usize> {
        Ok(self.records.len())
    }

    fn clear(&mut self) -> StoreResult<()> {
        self.records.clear();
        Ok(())
    }
}

impl QueryStore for MemoryStore {
    fn query(&self, filter: &RecordFilter) -> StoreResult<Vec<StringRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;

    #[test]
    fn test_insert_and_get() {
        let mut store = MemoryStore::new();
        store.insert(analyze("hello")).unwrap();

        let retrieved = store.get_by_value("hello").unwrap();
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().properties.length, 5);
    }

    #[test]
    fn test_insert_duplicate() {
        let mut store = MemoryStore::new();
        let first = analyze("hello");
        store.insert(first.clone()).unwrap();

        let result = store.insert(analyze("hello"));
        assert_eq!(result, Err(StoreError::AlreadyExists("hello".into())));

        // Original record untouched
        assert_eq!(store.get_by_value("hello").unwrap(), Some(first));
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_lookup_is_exact() {
        let mut store = MemoryStore::new();
        store.insert(analyze("Hello")).unwrap();
        assert!(store.get_by_value("hello").unwrap().is_none());
        assert!(store.exists("Hello").unwrap());
    }

    #[test]
    fn test_delete() {
        let mut store = MemoryStore::new();
        store.insert(analyze("hello")).unwrap();

        assert!(store.delete("hello").unwrap());
        assert!(!store.delete("hello").unwrap());
        assert!(store.get_by_value("hello").unwrap().is_none());
    }

    #[test]
    fn test_all_keeps_insertion_order() {
        let store = MemoryStore::with_records(vec![
            analyze("charlie"),
            analyze("alpha"),
            analyze("bravo"),
            analyze("alpha"),
        ])
        .unwrap();
        let values: Vec<String> = store.all().unwrap().into_iter().map(|r| r.value).collect();
        assert_eq!(values, vec!["charlie", "alpha", "bravo"]);
    }

    #[test]
    fn test_with_records_skips_duplicates_only() {
        let first = analyze("echo");
        let store =
            MemoryStore::with_records(vec![first.clone(), analyze("echo"), analyze("delta")])
                .unwrap();
        assert_eq!(store.count().unwrap(), 2);
        assert_eq!(store.get_by_value("echo").unwrap(), Some(first));
    }

    #[test]
    fn test_query() {
        let store = MemoryStore::with_records(vec![
            analyze("racecar"),
            analyze("hello world"),
            analyze("noon"),
        ])
        .unwrap();

        let palindromes = store.query(&RecordFilter::new().is_palindrome(true)).unwrap();
        assert_eq!(palindromes.len(), 2);

        let long = store.query(&RecordFilter::new().min_length(5)).unwrap();
        let values: Vec<&str> = long.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, vec!["racecar", "hello world"]);
    }

    #[test]
    fn test_clear() {
        let mut store = MemoryStore::with_records(vec![analyze("a"), analyze("b")]).unwrap();
        store.clear().unwrap();
        assert_eq!(store.count().unwrap(), 0);
    }
}
