//! Whitespace word splitting for multi-word value indexing

/// Split a field value into indexable words.
///
/// Words are whitespace-delimited. A value that does not split into at
/// least two words yields nothing; single-word values are already covered
/// by their exact-value posting.
pub fn value_words(value: &str) -> Vec<&str> {
    let parts: Vec<&str> = value.split_whitespace().collect();
    if parts.len() <= 1 {
        return Vec::new();
    }
    parts.into_iter().filter_map(clean_word).collect()
}

/// Trim characters that are not letters or digits from both ends of a word.
/// Words that trim to nothing are not indexable.
pub fn clean_word(word: &str) -> Option<&str> {
    let cleaned = word.trim_matches(|c: char| !c.is_alphanumeric());
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word_yields_nothing() {
        assert!(value_words("solo").is_empty());
        assert!(value_words("").is_empty());
        assert!(value_words("   ").is_empty());
    }

    #[test]
    fn test_multi_word_split() {
        assert_eq!(value_words("value1 value2"), vec!["value1", "value2"]);
        assert_eq!(value_words("a  b\tc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_punctuation_trimmed() {
        assert_eq!(value_words("hello, world!"), vec!["hello", "world"]);
        assert_eq!(value_words("(one) [two]"), vec!["one", "two"]);
    }

    #[test]
    fn test_fully_symbolic_words_dropped() {
        assert_eq!(value_words("alpha -- beta"), vec!["alpha", "beta"]);
        assert!(value_words(":: --").is_empty());
    }

    #[test]
    fn test_clean_word_keeps_interior_punctuation() {
        assert_eq!(clean_word("it's"), Some("it's"));
        assert_eq!(clean_word("\"quoted\""), Some("quoted"));
        assert_eq!(clean_word("..."), None);
    }
}
