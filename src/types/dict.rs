//! Dict: an insertion-ordered multimap from locale to strings.

use crate::types::Locale;
use indexmap::IndexMap;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A multimap of localized strings: each locale maps to zero or more
/// strings, in insertion order. Locale key order is preserved as well, so
/// a `Dict` round-trips through JSON byte-for-byte stable.
///
/// Wire form: a JSON object keyed by locale tag (`""` for the root
/// locale), each value an array of strings:
///
/// ```json
/// {"it": ["ciao", "buongiorno"], "": ["hello"]}
/// ```
///
/// Decoding validates every entry: a `null` value or a non-string array
/// element is a decode error, never silently an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dict {
    strings: IndexMap<Locale, Vec<String>>,
}

impl Dict {
    /// Create an empty Dict.
    pub fn new() -> Self {
        Dict {
            strings: IndexMap::new(),
        }
    }

    /// Create a Dict holding the given strings under one locale.
    pub fn of<I, S>(locale: Locale, strings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Dict::new().with_all(locale, strings)
    }

    /// Create a Dict holding the given strings under the root locale.
    pub fn of_root<I, S>(strings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Dict::of(Locale::Root, strings)
    }

    /// Return this Dict with one more string appended under `locale`.
    pub fn with(mut self, locale: Locale, string: impl Into<String>) -> Self {
        self.strings.entry(locale).or_default().push(string.into());
        self
    }

    /// Return this Dict with all given strings appended under `locale`.
    pub fn with_all<I, S>(mut self, locale: Locale, strings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.strings
            .entry(locale)
            .or_default()
            .extend(strings.into_iter().map(Into::into));
        self
    }

    /// The strings stored under `locale`, in insertion order. Empty slice
    /// when the locale is absent.
    pub fn get(&self, locale: &Locale) -> &[String] {
        self.strings.get(locale).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether any strings are stored under `locale`.
    pub fn contains(&self, locale: &Locale) -> bool {
        self.strings.contains_key(locale)
    }

    /// The locales present, in insertion order.
    pub fn locales(&self) -> impl Iterator<Item = &Locale> {
        self.strings.keys()
    }

    /// Iterate over `(locale, strings)` entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Locale, &[String])> {
        self.strings.iter().map(|(l, v)| (l, v.as_slice()))
    }

    /// Number of locales present.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Whether no locale is present at all.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// First string stored under `locale`, falling back to the root locale
    /// when the requested one is absent or empty.
    pub fn translation(&self, locale: &Locale) -> Option<&str> {
        self.get(locale)
            .first()
            .or_else(|| self.get(&Locale::Root).first())
            .map(String::as_str)
    }
}

impl Serialize for Dict {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Key by wire tag and lean on indexmap's order-preserving serde
        // support for the rest.
        let wire: IndexMap<&str, &Vec<String>> = self
            .strings
            .iter()
            .map(|(locale, strings)| (locale.wire_tag(), strings))
            .collect();
        wire.serialize(serializer)
    }
}

struct DictVisitor;

impl<'de> Visitor<'de> for DictVisitor {
    type Value = Dict;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object of locale tags to arrays of strings")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Dict, A::Error> {
        let mut dict = Dict::new();
        while let Some(key) = map.next_key::<String>()? {
            let locale = Locale::from_tag(&key).map_err(de::Error::custom)?;
            // Vec<String> rejects null values and non-string elements; name
            // the offending locale key in the error.
            let strings = map.next_value::<Vec<String>>().map_err(|e| {
                de::Error::custom(format!("invalid strings for locale '{key}': {e}"))
            })?;
            dict = dict.with_all(locale, strings);
        }
        Ok(dict)
    }
}

impl<'de> Deserialize<'de> for Dict {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DictVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn it() -> Locale {
        Locale::from_tag("it").unwrap()
    }

    fn fr() -> Locale {
        Locale::from_tag("fr").unwrap()
    }

    // ==================== Construction Tests ====================

    #[test]
    fn test_new_is_empty() {
        let dict = Dict::new();
        assert!(dict.is_empty());
        assert_eq!(dict.len(), 0);
    }

    #[test]
    fn test_of_root() {
        let dict = Dict::of_root(["a", "b"]);
        assert_eq!(dict.get(&Locale::Root), ["a", "b"]);
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_with_appends_in_order() {
        let dict = Dict::new().with(it(), "ciao").with(it(), "buongiorno");
        assert_eq!(dict.get(&it()), ["ciao", "buongiorno"]);
    }

    #[test]
    fn test_get_absent_locale_is_empty_slice() {
        let dict = Dict::of(it(), ["ciao"]);
        assert!(dict.get(&fr()).is_empty());
        assert!(!dict.contains(&fr()));
    }

    #[test]
    fn test_translation_falls_back_to_root() {
        let dict = Dict::of_root(["hello"]).with(it(), "ciao");
        assert_eq!(dict.translation(&it()), Some("ciao"));
        assert_eq!(dict.translation(&fr()), Some("hello"));
        assert_eq!(Dict::new().translation(&fr()), None);
    }

    // ==================== Wire Contract Tests ====================

    #[test]
    fn test_serialize_preserves_key_and_value_order() {
        let dict = Dict::of(it(), ["b", "a"]).with(Locale::Root, "c");
        let json = serde_json::to_string(&dict).unwrap();
        assert_eq!(json, r#"{"it":["b","a"],"":["c"]}"#);
    }

    #[test]
    fn test_round_trip() {
        let dict = Dict::of_root(["a", "b"])
            .with(fr(), "bonjour")
            .with_all(it(), ["ciao", "salve"]);
        let json = serde_json::to_string(&dict).unwrap();
        let back: Dict = serde_json::from_str(&json).unwrap();
        assert_eq!(dict, back);
    }

    #[test]
    fn test_empty_object_decodes_to_empty_dict() {
        let dict: Dict = serde_json::from_str("{}").unwrap();
        assert_eq!(dict, Dict::new());
    }

    #[test]
    fn test_null_entry_fails_decode() {
        let result: Result<Dict, _> = serde_json::from_str(r#"{"it":null}"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("it"), "error should name the locale: {err}");
    }

    #[test]
    fn test_non_string_element_fails_decode() {
        let result: Result<Dict, _> = serde_json::from_str(r#"{"it":["a",5]}"#);
        assert!(result.is_err());
        let result: Result<Dict, _> = serde_json::from_str(r#"{"it":["a",null]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_bad_locale_key_fails_decode() {
        let result: Result<Dict, _> = serde_json::from_str(r#"{"not a tag":["a"]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_non_object_fails_decode() {
        let result: Result<Dict, _> = serde_json::from_str("[]");
        assert!(result.is_err());
    }

    #[test]
    fn test_duplicate_keys_merge_in_order() {
        let dict: Dict = serde_json::from_str(r#"{"it":["a"],"it":["b"]}"#).unwrap();
        assert_eq!(dict.get(&it()), ["a", "b"]);
    }
}
