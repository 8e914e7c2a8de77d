//! Error taxonomy for the commons JSON codecs.
//!
//! Three failure families exist: serialization failures (a value cannot be
//! turned into JSON), deserialization failures (the JSON text is malformed
//! or missing/mistyping a required field; the offending input travels with
//! the error), and locale decode failures (a token that is neither `null`
//! nor a string where a locale is expected). All are returned synchronously
//! from the failing call; nothing is retried or recovered internally.

use thiserror::Error;

/// Errors produced by the JSON engine and the facade.
#[derive(Debug, Error)]
pub enum JsonError {
    /// The value could not be serialized to JSON.
    #[error("couldn't serialize provided value to JSON")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    /// The JSON text could not be deserialized into the target type.
    /// Carries the offending input for diagnostics.
    #[error("couldn't deserialize provided JSON: {input}")]
    Deserialize {
        input: String,
        #[source]
        source: serde_json::Error,
    },

    /// A registered codec rejected the value or the JSON tree.
    #[error("codec error for {type_name}: {detail}")]
    Codec {
        type_name: &'static str,
        detail: String,
    },
}

impl JsonError {
    /// Shorthand for a codec rejection.
    pub fn codec(type_name: &'static str, detail: impl Into<String>) -> Self {
        JsonError::Codec {
            type_name,
            detail: detail.into(),
        }
    }
}

/// A language tag that could not be parsed into a [`crate::Locale`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unparseable locale tag: '{tag}'")]
pub struct LocaleError {
    /// The rejected tag, as received.
    pub tag: String,
}

impl LocaleError {
    pub fn new(tag: impl Into<String>) -> Self {
        LocaleError { tag: tag.into() }
    }
}

/// A version string that is not `major.minor.patch[-pre]`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid semantic version: '{input}'")]
pub struct SemVersionError {
    /// The rejected version string, as received.
    pub input: String,
}
