//! Locale type: a validated language tag or the root sentinel.
//!
//! This module also carries the locale wire contract, which deliberately
//! diverges from what a generic mapping would do: the root locale is
//! written as the empty string `""`, and a JSON `null` always decodes back
//! to the root locale instead of collapsing to a missing value. That keeps
//! round-tripping total regardless of which write path produced the JSON
//! (the custom writer emits `""`; reflection-style writers may emit `null`).

use crate::error::LocaleError;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A language/region identifier, or the distinguished root locale.
///
/// The root locale means "no specific locale / language-neutral". It is a
/// real value, not an absent one: it must survive a JSON round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Locale {
    /// The language-neutral sentinel. Wire form: `""` (or `null` on input).
    Root,

    /// A canonicalized language tag, e.g. `"it"` or `"fr-FR"`. Never empty.
    Tag(String),
}

impl Locale {
    /// Parse a language tag into a Locale.
    ///
    /// The empty string parses to [`Locale::Root`]. Otherwise the tag must
    /// be `language["-"subtag…]` with 1-8 ASCII alphanumerics per subtag
    /// and an alphabetic 2-8 letter language subtag. `_` separators are
    /// accepted and canonicalized to `-`; the language subtag is lowercased
    /// and two-letter region subtags are uppercased, so `"IT_ch"` parses to
    /// the same value as `"it-CH"`.
    ///
    /// # Returns
    /// * `Ok(Locale)` for the empty string or a well-formed tag
    /// * `Err(LocaleError)` carrying the rejected tag otherwise
    pub fn from_tag(tag: &str) -> Result<Locale, LocaleError> {
        if tag.is_empty() {
            return Ok(Locale::Root);
        }

        let mut canonical: Vec<String> = Vec::new();
        for (i, subtag) in tag.split(['-', '_']).enumerate() {
            if subtag.is_empty()
                || subtag.len() > 8
                || !subtag.bytes().all(|b| b.is_ascii_alphanumeric())
            {
                return Err(LocaleError::new(tag));
            }
            if i == 0 {
                // Language subtag: alphabetic, at least two letters.
                if subtag.len() < 2 || !subtag.bytes().all(|b| b.is_ascii_alphabetic()) {
                    return Err(LocaleError::new(tag));
                }
                canonical.push(subtag.to_ascii_lowercase());
            } else if subtag.len() == 2 && subtag.bytes().all(|b| b.is_ascii_alphabetic()) {
                // Region subtag.
                canonical.push(subtag.to_ascii_uppercase());
            } else {
                canonical.push(subtag.to_ascii_lowercase());
            }
        }

        Ok(Locale::Tag(canonical.join("-")))
    }

    /// The canonical written form of this locale: `""` for root, the
    /// canonicalized tag otherwise.
    pub fn wire_tag(&self) -> &str {
        match self {
            Locale::Root => "",
            Locale::Tag(tag) => tag,
        }
    }

    /// Whether this is the root (language-neutral) locale.
    pub fn is_root(&self) -> bool {
        matches!(self, Locale::Root)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_tag())
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.wire_tag())
    }
}

struct LocaleVisitor;

impl<'de> Visitor<'de> for LocaleVisitor {
    type Value = Locale;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a locale tag string or null")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Locale, E> {
        Locale::from_tag(value).map_err(de::Error::custom)
    }

    // JSON null means the root locale, never a missing value.
    fn visit_unit<E: de::Error>(self) -> Result<Locale, E> {
        Ok(Locale::Root)
    }

    fn visit_none<E: de::Error>(self) -> Result<Locale, E> {
        Ok(Locale::Root)
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LocaleVisitor)
    }
}
