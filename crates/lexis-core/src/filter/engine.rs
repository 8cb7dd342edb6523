//! Query interpretation and application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::stages::{Predicate, STAGES};
use crate::analysis::StringRecord;

/// Natural-language filter errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// Query was empty
    #[error("missing query")]
    MissingQuery,

    /// Nothing stored to filter
    #[error("no data found")]
    EmptyCorpus,
}

/// How a query was understood.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedQuery {
    /// Query as received
    pub original: String,
    /// Trimmed, lowercased form the stages inspect
    pub normalized: String,
    /// Interpreted predicates, in stage order
    pub parsed_filters: Vec<Predicate>,
}

impl ParsedQuery {
    /// True if no stage produced a predicate; applying it keeps everything.
    pub fn is_unfiltered(&self) -> bool {
        self.parsed_filters.is_empty()
    }

    /// Narrow `records` by every predicate in turn, keeping input order.
    pub fn apply(&self, mut records: Vec<StringRecord>) -> Vec<StringRecord> {
        for predicate in &self.parsed_filters {
            records.retain(|r| predicate.matches(r));
        }
        records
    }
}

/// Result of a successful filter run.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    pub matches: Vec<StringRecord>,
    pub query: ParsedQuery,
}

impl FilterOutcome {
    /// The query ran but eliminated every record.
    pub fn is_no_match(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Trim and lowercase a raw query.
pub fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Interpret `query` against every stage.
///
/// Only a zero-length query is rejected. A blank one normalizes to `""`,
/// triggers no stage and leaves the record set unfiltered.
pub fn parse_query(query: &str) -> Result<ParsedQuery, FilterError> {
    if query.is_empty() {
        return Err(FilterError::MissingQuery);
    }
    let normalized = normalize(query);

    let parsed_filters = STAGES
        .iter()
        .filter_map(|stage| stage.interpret(&normalized))
        .collect();

    Ok(ParsedQuery {
        original: query.to_string(),
        normalized,
        parsed_filters,
    })
}

/// Filter `records` by a free-text query.
///
/// An empty record set is reported as [`FilterError::EmptyCorpus`] rather
/// than as an empty match, so callers can tell "nothing stored" apart from
/// "nothing matched".
pub fn filter_by_query(
    query: &str,
    records: Vec<StringRecord>,
) -> Result<FilterOutcome, FilterError> {
    let parsed = parse_query(query)?;
    if records.is_empty() {
        return Err(FilterError::EmptyCorpus);
    }

    let matches = parsed.apply(records);
    Ok(FilterOutcome {
        matches,
        query: parsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use pretty_assertions::assert_eq;

    fn corpus() -> Vec<StringRecord> {
        [
            "racecar",
            "hello world",
            "A man a plan a canal Panama",
            "level",
            "apple",
            "banana split",
            "noon",
            "rhythm",
            "Abba",
        ]
        .iter()
        .map(|s| analyze(s))
        .collect()
    }

    fn values(outcome: &FilterOutcome) -> Vec<&str> {
        outcome.matches.iter().map(|r| r.value.as_str()).collect()
    }

    #[test]
    fn test_palindromes_single_word_is_cumulative() {
        let outcome = filter_by_query("palindromes that are single word", corpus()).unwrap();
        assert_eq!(values(&outcome), vec!["racecar", "level", "noon", "Abba"]);
        assert!(outcome
            .matches
            .iter()
            .all(|r| r.is_palindrome() && r.word_count() == 1));
        assert_eq!(
            outcome.query.parsed_filters,
            vec![Predicate::Palindrome, Predicate::SingleWord]
        );
    }

    #[test]
    fn test_longer_than() {
        let outcome = filter_by_query("strings longer than 5", corpus()).unwrap();
        assert!(outcome.matches.iter().all(|r| r.length() > 5));
        assert_eq!(
            values(&outcome),
            vec![
                "racecar",
                "hello world",
                "A man a plan a canal Panama",
                "banana split",
                "rhythm"
            ]
        );
    }

    #[test]
    fn test_shorter_than() {
        let outcome = filter_by_query("shorter than 5", corpus()).unwrap();
        assert_eq!(values(&outcome), vec!["noon", "Abba"]);
    }

    #[test]
    fn test_starting_with() {
        let outcome = filter_by_query("words starting with a", corpus()).unwrap();
        assert_eq!(
            values(&outcome),
            vec!["A man a plan a canal Panama", "apple", "Abba"]
        );
    }

    #[test]
    fn test_ending_with() {
        let outcome = filter_by_query("Strings ending with A", corpus()).unwrap();
        assert_eq!(values(&outcome), vec!["A man a plan a canal Panama", "Abba"]);
    }

    #[test]
    fn test_containing_the_letter() {
        let outcome = filter_by_query("strings containing the letter z", corpus()).unwrap();
        assert!(outcome.is_no_match());

        let outcome = filter_by_query("containing the letter W", corpus()).unwrap();
        assert_eq!(values(&outcome), vec!["hello world"]);
    }

    #[test]
    fn test_multi_word() {
        let outcome = filter_by_query("multi word palindromic strings", corpus()).unwrap();
        assert_eq!(values(&outcome), vec!["A man a plan a canal Panama"]);
    }

    #[test]
    fn test_first_vowel_drops_vowelless_values() {
        let outcome = filter_by_query("strings with a first vowel", corpus()).unwrap();
        assert_eq!(outcome.matches.len(), corpus().len() - 1);
        assert!(!values(&outcome).contains(&"rhythm"));
    }

    #[test]
    fn test_unrecognized_query_returns_everything() {
        let outcome = filter_by_query("xyz nonsense", corpus()).unwrap();
        assert!(outcome.query.is_unfiltered());
        let expected: Vec<String> = corpus().into_iter().map(|r| r.value).collect();
        assert_eq!(values(&outcome), expected);
    }

    #[test]
    fn test_trigger_without_argument_is_noop() {
        let outcome = filter_by_query("longer than a few", corpus()).unwrap();
        assert!(outcome.query.is_unfiltered());
        assert_eq!(outcome.matches.len(), corpus().len());
    }

    #[test]
    fn test_empty_corpus() {
        let result = filter_by_query("palindromes", Vec::new());
        assert_eq!(result, Err(FilterError::EmptyCorpus));
    }

    #[test]
    fn test_empty_corpus_even_without_triggers() {
        let result = filter_by_query("anything at all", Vec::new());
        assert_eq!(result, Err(FilterError::EmptyCorpus));
    }

    #[test]
    fn test_empty_query() {
        assert_eq!(parse_query(""), Err(FilterError::MissingQuery));
        assert_eq!(
            filter_by_query("", corpus()).unwrap_err(),
            FilterError::MissingQuery
        );
    }

    #[test]
    fn test_whitespace_query_returns_everything() {
        let parsed = parse_query("   ").unwrap();
        assert_eq!(parsed.normalized, "");
        assert!(parsed.is_unfiltered());

        let records = vec![analyze("racecar"), analyze("hello world")];
        let outcome = filter_by_query("   ", records).unwrap();
        assert_eq!(values(&outcome), vec!["racecar", "hello world"]);

        assert_eq!(
            filter_by_query(" \t ", Vec::new()),
            Err(FilterError::EmptyCorpus)
        );
    }

    #[test]
    fn test_no_match_is_not_an_error() {
        let outcome = filter_by_query("palindromes longer than 100", corpus()).unwrap();
        assert!(outcome.is_no_match());
    }

    #[test]
    fn test_query_is_echoed() {
        let parsed = parse_query("  Palindromic Strings ").unwrap();
        assert_eq!(parsed.original, "  Palindromic Strings ");
        assert_eq!(parsed.normalized, "palindromic strings");
    }
}
