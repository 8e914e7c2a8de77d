//! LocalizedString: a single string in a single locale.

use crate::types::Locale;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable `(locale, string)` pair.
///
/// Wire form: `{"locale": tag, "string": text}`. Both fields are required
/// on decode; a missing field or a `null` string is a decode error, never a
/// silently defaulted value. A `null` locale is accepted and resolves to
/// the root locale through [`Locale`]'s own decode rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedString {
    locale: Locale,
    string: String,
}

impl LocalizedString {
    /// Create a LocalizedString for the given locale.
    pub fn of(locale: Locale, string: impl Into<String>) -> Self {
        LocalizedString {
            locale,
            string: string.into(),
        }
    }

    /// Create a language-neutral LocalizedString (root locale).
    pub fn root(string: impl Into<String>) -> Self {
        LocalizedString::of(Locale::Root, string)
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn string(&self) -> &str {
        &self.string
    }
}

impl fmt::Display for LocalizedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string)
    }
}
