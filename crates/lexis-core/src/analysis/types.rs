//! Analyzed record type definitions

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A stored string together with every property derived from it.
///
/// Records are immutable once created: all properties are computed a single
/// time by [`crate::analysis::analyze`] and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringRecord {
    /// SHA-256 hex digest of `value`
    pub id: String,

    /// The raw input, unmodified
    pub value: String,

    /// Derived properties
    pub properties: StringProperties,

    /// When the value was analyzed (UTC, millisecond precision)
    pub created_at: DateTime<Utc>,
}

impl StringRecord {
    pub fn length(&self) -> usize {
        self.properties.length
    }

    pub fn is_palindrome(&self) -> bool {
        self.properties.is_palindrome
    }

    pub fn word_count(&self) -> usize {
        self.properties.word_count
    }
}

/// Properties derived from a record's value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringProperties {
    /// Character count of the original value
    pub length: usize,

    /// Palindrome test over the cleaned (lowercase alphanumeric) projection
    pub is_palindrome: bool,

    /// Distinct literal characters, case and punctuation sensitive
    pub unique_characters: usize,

    /// Whitespace-delimited tokens after trimming
    pub word_count: usize,

    /// Same digest as the record id
    pub sha256_hash: String,

    /// Occurrence count per literal character
    pub character_frequency_map: FrequencyMap,
}

/// Per-character occurrence counts in first-seen order.
///
/// Serializes as a JSON object (`{"h": 1, "e": 1, ...}`) so the order of
/// keys follows the order in which characters first appear in the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    entries: Vec<(char, usize)>,
}

impl FrequencyMap {
    /// Count every character of `value`.
    pub fn tally(value: &str) -> Self {
        let mut positions: HashMap<char, usize, ahash::RandomState> =
            HashMap::with_hasher(ahash::RandomState::new());
        let mut entries: Vec<(char, usize)> = Vec::new();

        for ch in value.chars() {
            match positions.get(&ch) {
                Some(&index) => entries[index].1 += 1,
                None => {
                    positions.insert(ch, entries.len());
                    entries.push((ch, 1));
                }
            }
        }

        Self { entries }
    }

    /// Occurrences of `ch`, if it appears at all.
    pub fn get(&self, ch: char) -> Option<usize> {
        self.entries
            .iter()
            .find(|(c, _)| *c == ch)
            .map(|(_, count)| *count)
    }

    /// Number of distinct characters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(character, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.entries.iter().copied()
    }
}

impl Serialize for FrequencyMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        let mut buf = [0u8; 4];
        for (ch, count) in &self.entries {
            let key: &str = ch.encode_utf8(&mut buf);
            map.serialize_entry(key, count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FrequencyMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(FrequencyMapVisitor)
    }
}

struct FrequencyMapVisitor;

impl<'de> Visitor<'de> for FrequencyMapVisitor {
    type Value = FrequencyMap;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of single characters to counts")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, count)) = access.next_entry::<String, usize>()? {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => entries.push((ch, count)),
                _ => {
                    return Err(de::Error::invalid_value(
                        de::Unexpected::Str(&key),
                        &"a single character",
                    ))
                }
            }
        }
        Ok(FrequencyMap { entries })
    }
}
