//! String analysis: derive every record property from a raw value.

use chrono::{DateTime, SubsecRound, Utc};

use super::digest::content_hash_hex;
use super::types::{FrequencyMap, StringProperties, StringRecord};

/// Analyze `value`, stamping the record with the current time.
///
/// Callers reject missing or empty input before getting here; every string
/// produces a record.
pub fn analyze(value: &str) -> StringRecord {
    analyze_at(value, Utc::now().trunc_subsecs(3))
}

/// Analyze `value` with an explicit creation time.
pub fn analyze_at(value: &str, created_at: DateTime<Utc>) -> StringRecord {
    let hash = content_hash_hex(value);
    let frequencies = FrequencyMap::tally(value);

    StringRecord {
        id: hash.clone(),
        value: value.to_string(),
        properties: StringProperties {
            length: value.chars().count(),
            is_palindrome: is_palindrome(value),
            unique_characters: frequencies.len(),
            word_count: word_count(value),
            sha256_hash: hash,
            character_frequency_map: frequencies,
        },
        created_at,
    }
}

/// Lowercase projection keeping only ASCII letters and digits.
pub fn cleaned_projection(value: &str) -> String {
    value
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Palindrome test over the cleaned projection.
///
/// A value with no letters or digits at all cleans to the empty string and
/// counts as a palindrome.
pub fn is_palindrome(value: &str) -> bool {
    let cleaned = cleaned_projection(value);
    let bytes = cleaned.as_bytes();
    bytes.iter().eq(bytes.iter().rev())
}

/// Number of whitespace-separated tokens. Whitespace-only input has none.
pub fn word_count(value: &str) -> usize {
    value.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_plain_palindrome() {
        assert!(analyze("racecar").properties.is_palindrome);
    }

    #[test]
    fn test_palindrome_ignores_spaces() {
        assert!(analyze("race car").properties.is_palindrome);
    }

    #[test]
    fn test_palindrome_ignores_case_and_punctuation() {
        assert!(analyze("Race, Car!").properties.is_palindrome);
        assert!(analyze("A man, a plan, a canal: Panama").properties.is_palindrome);
    }

    #[test]
    fn test_not_palindrome() {
        assert!(!analyze("hello").properties.is_palindrome);
    }

    #[test]
    fn test_digits_take_part_in_palindrome() {
        assert!(is_palindrome("12-21"));
        assert!(!is_palindrome("12-31"));
    }

    #[test]
    fn test_punctuation_only_is_palindrome() {
        assert_eq!(cleaned_projection("?!, ."), "");
        assert!(is_palindrome("?!, ."));
    }

    #[test]
    fn test_length_counts_original_characters() {
        assert_eq!(analyze("hello").properties.length, 5);
        assert_eq!(analyze("Race, Car!").properties.length, 10);
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        assert_eq!(analyze("héllo").properties.length, 5);
    }

    #[test]
    fn test_unique_characters() {
        assert_eq!(analyze("hello").properties.unique_characters, 4);
        assert_eq!(analyze("a a").properties.unique_characters, 2);
        assert_eq!(analyze("Aa").properties.unique_characters, 2);
    }

    #[test]
    fn test_word_count() {
        assert_eq!(analyze("one two three").properties.word_count, 3);
        assert_eq!(analyze("  padded\t and \n spaced  ").properties.word_count, 3);
        assert_eq!(analyze("single").properties.word_count, 1);
    }

    #[test]
    fn test_whitespace_only_has_no_words() {
        assert_eq!(word_count("   "), 0);
        assert_eq!(analyze(" \t\n").properties.word_count, 0);
    }

    #[test]
    fn test_id_matches_sha256_hash() {
        let record = analyze("hello");
        assert_eq!(record.id, record.properties.sha256_hash);
        assert_eq!(
            record.id,
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn test_different_values_different_ids() {
        assert_ne!(analyze("hello").id, analyze("hello ").id);
    }

    #[test]
    fn test_frequency_map() {
        let record = analyze("hello");
        let map = &record.properties.character_frequency_map;
        assert_eq!(map.get('l'), Some(2));
        assert_eq!(map.get('h'), Some(1));
        assert_eq!(map.get('z'), None);
    }

    #[test]
    fn test_analyze_at_uses_given_time() {
        let at = DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(analyze_at("x", at).created_at, at);
    }

    #[test]
    fn test_created_at_has_millisecond_precision() {
        let record = analyze("x");
        assert_eq!(record.created_at.timestamp_subsec_nanos() % 1_000_000, 0);
    }

    #[test]
    fn test_record_json_shape() {
        let at = DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let json = serde_json::to_value(analyze_at("aba", at)).unwrap();
        assert_eq!(json["value"], "aba");
        assert_eq!(json["properties"]["length"], 3);
        assert_eq!(json["properties"]["is_palindrome"], true);
        assert_eq!(
            json["properties"]["character_frequency_map"],
            serde_json::json!({"a": 2, "b": 1})
        );
        assert_eq!(json["created_at"], "2024-01-01T00:00:00Z");
    }

    proptest! {
        #[test]
        fn prop_analysis_is_deterministic(s in ".{1,64}") {
            let a = analyze(&s);
            let b = analyze(&s);
            prop_assert_eq!(&a.id, &b.id);
            prop_assert_eq!(&a.properties, &b.properties);
            prop_assert_eq!(&a.value, &s);
        }

        #[test]
        fn prop_unique_characters_bounded_by_length(s in ".{1,64}") {
            let props = analyze(&s).properties;
            prop_assert!(props.unique_characters <= props.length);
            let total: usize = props.character_frequency_map.iter().map(|(_, n)| n).sum();
            prop_assert_eq!(total, props.length);
        }
    }
}
