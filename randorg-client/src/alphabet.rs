//! Named alphabets for string generation
//!
//! `generateStrings` takes a literal `characters` alphabet of at most 80
//! characters. As a convenience, callers may instead supply one or more
//! named tags ("lower", "digits", ...) which expand to well-known character
//! sets before the request is built. Tags concatenate in the order given and
//! duplicates across tags are kept - the provider weights its picks by the
//! supplied alphabet, so de-duplicating would silently change distribution.
//!
//! A string that matches no tag passes through as a literal alphabet, so
//! callers that already hold the exact character set need no escape hatch.
//! The 1..=80 length constraint still applies to the expanded result before
//! anything is transmitted.

use randorg_core::{Error, Result};
use serde_json::Value;

/// Well-known character sets, addressable by tag
const ALPHABETS: &[(&str, &str)] = &[
    ("lower", "abcdefghijklmnopqrstuvwxyz"),
    ("upper", "ABCDEFGHIJKLMNOPQRSTUVWXYZ"),
    (
        "letters",
        "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ",
    ),
    ("digits", "0123456789"),
    ("hexdigits", "0123456789abcdefABCDEF"),
    ("octdigits", "01234567"),
    ("punctuation", "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~"),
    (
        "printable",
        "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~ \t\n\r\x0b\x0c",
    ),
    ("whitespace", " \t\n\r\x0b\x0c"),
];

/// Immutable tag → character-set table
#[derive(Debug, Clone, Copy)]
pub struct AlphabetTable {
    entries: &'static [(&'static str, &'static str)],
}

impl AlphabetTable {
    /// The built-in named alphabets
    pub fn builtin() -> Self {
        Self { entries: ALPHABETS }
    }

    /// Look up a tag, returning its literal character set
    pub fn get(&self, tag: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == tag)
            .map(|(_, chars)| *chars)
    }

    /// Expand a `characters` value into the final alphabet string
    ///
    /// Accepts a single string or an array of strings. Each element is
    /// looked up as a tag and expanded; elements that are not known tags
    /// are taken as literal characters. Results concatenate in order.
    pub fn expand(&self, value: &Value) -> Result<String> {
        match value {
            Value::String(s) => Ok(self.expand_one(s)),
            Value::Array(items) => {
                let mut out = String::new();
                for item in items {
                    let tag = item.as_str().ok_or_else(|| {
                        Error::InvalidParams(format!(
                            "characters list may only contain strings, got {}",
                            item
                        ))
                    })?;
                    out.push_str(&self.expand_one(tag));
                }
                Ok(out)
            }
            other => Err(Error::InvalidParams(format!(
                "characters must be a string or list of strings, got {}",
                other
            ))),
        }
    }

    fn expand_one(&self, tag: &str) -> String {
        match self.get(tag) {
            Some(chars) => chars.to_string(),
            None => tag.to_string(),
        }
    }
}

impl Default for AlphabetTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lower_is_the_26_letter_alphabet() {
        let table = AlphabetTable::builtin();
        let expanded = table.expand(&json!("lower")).unwrap();
        assert_eq!(expanded, "abcdefghijklmnopqrstuvwxyz");
        assert_eq!(expanded.len(), 26);
    }

    #[test]
    fn test_tag_concatenation_preserves_order_and_duplicates() {
        let table = AlphabetTable::builtin();
        let expanded = table.expand(&json!(["digits", "hexdigits"])).unwrap();
        // hexdigits repeats 0-9; duplicates are kept
        assert_eq!(expanded, "01234567890123456789abcdefABCDEF");
    }

    #[test]
    fn test_unknown_tag_passes_through_as_literal() {
        let table = AlphabetTable::builtin();
        let expanded = table.expand(&json!("abc123")).unwrap();
        assert_eq!(expanded, "abc123");
    }

    #[test]
    fn test_mixed_tags_and_literals() {
        let table = AlphabetTable::builtin();
        let expanded = table.expand(&json!(["lower", "!?"])).unwrap();
        assert_eq!(expanded, "abcdefghijklmnopqrstuvwxyz!?");
    }

    #[test]
    fn test_whitespace_set() {
        let table = AlphabetTable::builtin();
        assert_eq!(table.get("whitespace"), Some(" \t\n\r\x0b\x0c"));
    }

    #[test]
    fn test_printable_is_digits_letters_punctuation_whitespace() {
        let table = AlphabetTable::builtin();
        let composed = format!(
            "{}{}{}{}{}",
            table.get("digits").unwrap(),
            table.get("lower").unwrap(),
            table.get("upper").unwrap(),
            table.get("punctuation").unwrap(),
            table.get("whitespace").unwrap(),
        );
        assert_eq!(table.get("printable"), Some(composed.as_str()));
    }

    #[test]
    fn test_non_string_element_is_rejected() {
        let table = AlphabetTable::builtin();
        let result = table.expand(&json!(["lower", 3]));
        assert!(matches!(result, Err(Error::InvalidParams(_))));
    }

    #[test]
    fn test_non_string_value_is_rejected() {
        let table = AlphabetTable::builtin();
        assert!(table.expand(&json!(42)).is_err());
    }
}
