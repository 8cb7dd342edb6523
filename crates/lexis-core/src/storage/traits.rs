//! Storage trait definitions

use serde::{Deserialize, Serialize};

use crate::analysis::StringRecord;
use crate::storage::error::StoreResult;

/// Core storage operations for analyzed strings.
///
/// Records are keyed by their exact value. There is no update: a record is
/// immutable once stored and only goes away through [`StringStore::delete`].
pub trait StringStore {
    /// Store a record.
    ///
    /// Insert-if-absent: if a record with the same value already exists,
    /// returns `StoreError::AlreadyExists` and leaves the stored record alone.
    fn insert(&mut self, record: StringRecord) -> StoreResult<()>;

    /// Retrieve a record by exact value.
    ///
    /// Returns `None` if not found.
    fn get_by_value(&self, value: &str) -> StoreResult<Option<StringRecord>>;

    /// Check if a value is stored.
    fn exists(&self, value: &str) -> StoreResult<bool> {
        Ok(self.get_by_value(value)?.is_some())
    }

    /// Delete a record by exact value.
    ///
    /// Returns `true` if the record was deleted, `false` if it didn't exist.
    fn delete(&mut self, value: &str) -> StoreResult<bool>;

    /// All records, in insertion order.
    fn all(&self) -> StoreResult<Vec<StringRecord>>;

    /// Get the total count of records.
    fn count(&self) -> StoreResult<usize> {
        Ok(self.all()?.len())
    }

    /// Remove every record.
    fn clear(&mut self) -> StoreResult<()>;
}

/// Structured (field-level) queries.
pub trait QueryStore: StringStore {
    /// Records matching every set field of `filter`, in insertion order.
    fn query(&self, filter: &RecordFilter) -> StoreResult<Vec<StringRecord>>;
}

/// Field filter for structured queries. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,
    /// Inclusive lower bound on length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    /// Inclusive upper bound on length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,
    /// Case-sensitive substring of the raw value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<String>,
}

impl RecordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_palindrome(mut self, is_palindrome: bool) -> Self {
        self.is_palindrome = Some(is_palindrome);
        self
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn word_count(mut self, word_count: usize) -> Self {
        self.word_count = Some(word_count);
        self
    }

    pub fn contains_character(mut self, needle: impl Into<String>) -> Self {
        self.contains_character = Some(needle.into());
        self
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Reference semantics for every backend.
    pub fn matches(&self, record: &StringRecord) -> bool {
        if let Some(expected) = self.is_palindrome {
            if record.is_palindrome() != expected {
                return false;
            }
        }
        if let Some(min) = self.min_length {
            if record.length() < min {
                return false;
            }
        }
        if let Some(max) = self.max_length {
            if record.length() > max {
                return false;
            }
        }
        if let Some(words) = self.word_count {
            if record.word_count() != words {
                return false;
            }
        }
        if let Some(needle) = &self.contains_character {
            if !record.value.contains(needle.as_str()) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = RecordFilter::new();
        assert!(filter.is_empty());
        assert!(filter.matches(&analyze("anything")));
    }

    #[test]
    fn test_length_bounds_are_inclusive() {
        let record = analyze("hello");
        assert!(RecordFilter::new().min_length(5).max_length(5).matches(&record));
        assert!(!RecordFilter::new().min_length(6).matches(&record));
        assert!(!RecordFilter::new().max_length(4).matches(&record));
    }

    #[test]
    fn test_contains_character_is_case_sensitive() {
        let record = analyze("Hello");
        assert!(RecordFilter::new().contains_character("H").matches(&record));
        assert!(!RecordFilter::new().contains_character("h").matches(&record));
    }

    #[test]
    fn test_fields_are_and_combined() {
        let record = analyze("racecar");
        let filter = RecordFilter::new().is_palindrome(true).word_count(1);
        assert!(filter.matches(&record));
        assert!(!filter.clone().word_count(2).matches(&record));
        assert!(!RecordFilter::new().is_palindrome(false).matches(&record));
    }
}
