//! Predicate stages of the natural-language filter.
//!
//! Each stage owns its trigger phrases and an interpreter that turns the
//! normalized query into a [`Predicate`]. Interpreters are plain functions so
//! every stage can be exercised on its own.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::StringRecord;

/// A single interpreted filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "filter", content = "value", rename_all = "snake_case")]
pub enum Predicate {
    Palindrome,
    SingleWord,
    MultiWord,
    LongerThan(usize),
    ShorterThan(usize),
    ContainsLetters(String),
    StartsWith(String),
    EndsWith(String),
    /// Value contains its own first vowel, i.e. has any vowel at all.
    ContainsFirstVowel,
}

impl Predicate {
    /// Check whether a record satisfies this predicate.
    pub fn matches(&self, record: &StringRecord) -> bool {
        match self {
            Predicate::Palindrome => record.is_palindrome(),
            Predicate::SingleWord => record.word_count() == 1,
            Predicate::MultiWord => record.word_count() > 1,
            Predicate::LongerThan(n) => record.length() > *n,
            Predicate::ShorterThan(n) => record.length() < *n,
            Predicate::ContainsLetters(s) => record.value.to_lowercase().contains(s.as_str()),
            Predicate::StartsWith(s) => record.value.to_lowercase().starts_with(s.as_str()),
            Predicate::EndsWith(s) => record.value.to_lowercase().ends_with(s.as_str()),
            Predicate::ContainsFirstVowel => {
                let lower = record.value.to_lowercase();
                match lower.chars().find(|c| is_vowel(*c)) {
                    Some(vowel) => lower.contains(vowel),
                    None => false,
                }
            }
        }
    }
}

/// One step of the filter pipeline.
#[derive(Clone, Copy)]
pub struct Stage {
    /// Short identifier used in logs
    pub name: &'static str,
    /// Phrases that activate this stage (any one suffices)
    pub triggers: &'static [&'static str],
    interpret: fn(&str) -> Option<Predicate>,
}

impl Stage {
    /// True if any trigger phrase occurs in the normalized query.
    pub fn is_triggered(&self, normalized: &str) -> bool {
        self.triggers.iter().any(|t| normalized.contains(t))
    }

    /// Interpret the normalized query for this stage.
    ///
    /// Returns `None` when the stage is not triggered, or when it is
    /// triggered but the query carries no usable argument (no digits, no
    /// letters after the phrase).
    pub fn interpret(&self, normalized: &str) -> Option<Predicate> {
        if self.is_triggered(normalized) {
            (self.interpret)(normalized)
        } else {
            None
        }
    }
}

impl fmt::Debug for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stage")
            .field("name", &self.name)
            .field("triggers", &self.triggers)
            .finish()
    }
}

/// The pipeline, in evaluation order. Triggered stages are AND-combined.
pub const STAGES: [Stage; 9] = [
    Stage {
        name: "palindrome",
        triggers: &["palindrome", "palindromic"],
        interpret: palindrome,
    },
    Stage {
        name: "single_word",
        triggers: &["single word", "one word"],
        interpret: single_word,
    },
    Stage {
        name: "multi_word",
        triggers: &["multi word", "multiple words", "more than one word"],
        interpret: multi_word,
    },
    Stage {
        name: "longer_than",
        triggers: &["longer than"],
        interpret: longer_than,
    },
    Stage {
        name: "shorter_than",
        triggers: &["shorter than"],
        interpret: shorter_than,
    },
    Stage {
        name: "containing_letter",
        triggers: &["containing the letter"],
        interpret: containing_letter,
    },
    Stage {
        name: "starting_with",
        triggers: &["starting with"],
        interpret: starting_with,
    },
    Stage {
        name: "ending_with",
        triggers: &["ending with"],
        interpret: ending_with,
    },
    Stage {
        name: "first_vowel",
        triggers: &["first vowel"],
        interpret: first_vowel,
    },
];

fn palindrome(_: &str) -> Option<Predicate> {
    Some(Predicate::Palindrome)
}

fn single_word(_: &str) -> Option<Predicate> {
    Some(Predicate::SingleWord)
}

fn multi_word(_: &str) -> Option<Predicate> {
    Some(Predicate::MultiWord)
}

fn longer_than(query: &str) -> Option<Predicate> {
    extract_number(query).map(Predicate::LongerThan)
}

fn shorter_than(query: &str) -> Option<Predicate> {
    extract_number(query).map(Predicate::ShorterThan)
}

fn containing_letter(query: &str) -> Option<Predicate> {
    letters_after(query, "letter").map(Predicate::ContainsLetters)
}

fn starting_with(query: &str) -> Option<Predicate> {
    letters_after(query, "starting with").map(Predicate::StartsWith)
}

fn ending_with(query: &str) -> Option<Predicate> {
    letters_after(query, "ending with").map(Predicate::EndsWith)
}

fn first_vowel(_: &str) -> Option<Predicate> {
    Some(Predicate::ContainsFirstVowel)
}

/// Concatenate every ASCII digit in the query and read it as one number.
///
/// The whole query is scanned, not just the text after the trigger, so
/// "longer than 5 but shorter than 10" reads as 510 for both stages.
/// Numbers beyond `usize` saturate.
pub fn extract_number(query: &str) -> Option<usize> {
    let digits: String = query.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    Some(digits.parse().unwrap_or(usize::MAX))
}

/// Take the text after the last occurrence of `marker`, keep ASCII letters
/// only, and lowercase it. Empty results yield `None`.
pub fn letters_after(query: &str, marker: &str) -> Option<String> {
    let tail = query.rsplit(marker).next().unwrap_or_default();
    let letters: String = tail
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if letters.is_empty() {
        None
    } else {
        Some(letters)
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}
