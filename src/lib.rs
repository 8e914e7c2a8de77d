//! JSON codecs for shared commons value types.
//!
//! This crate carries the custom encode/decode rules for a small family of
//! value types used across the commons libraries: a localized-string
//! multimap ([`Dict`]), a single-locale string pair ([`LocalizedString`]),
//! a source-location reference ([`Ref`]), and a validation-error record
//! ([`ValidationError`]).
//!
//! # Architecture
//!
//! - `types`: the value types and their wire representations
//! - `engine`: a configurable JSON engine with per-type codec overrides
//! - `module`: the named, versioned bundle that installs all codecs
//! - `jsonizer`: a convenience facade over a pre-configured engine
//! - `semver`: build-metadata version stamping for the module identity
//! - `error`: the error taxonomy shared by all of the above
//!
//! # Example
//!
//! ```rust
//! use commons_json::{Jsonizer, LocalizedString, Locale};
//!
//! let ls = LocalizedString::of(Locale::from_tag("it").unwrap(), "ciao");
//! let json = Jsonizer::of().to_json(&ls).unwrap();
//! let back: LocalizedString = Jsonizer::of().from_json(&json).unwrap();
//! assert_eq!(ls, back);
//! ```

pub mod engine;
pub mod error;
pub mod jsonizer;
pub mod module;
pub mod semver;
pub mod types;

pub use engine::{FnCodec, JsonCodec, JsonEngine, SerdeCodec};
pub use error::{JsonError, LocaleError, SemVersionError};
pub use jsonizer::Jsonizer;
pub use module::CommonsModule;
pub use semver::SemVersion;
pub use types::{Dict, ErrorLevel, Locale, LocalizedString, Ref, ValidationError};
