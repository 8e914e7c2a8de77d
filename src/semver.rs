//! Semantic version handling for module identity stamping.
//!
//! The codec module carries the version of the crate it ships with, read
//! from Cargo package metadata at compile time. The version only affects
//! the module object's identity, never the wire format.

use crate::error::SemVersionError;
use std::fmt;

/// A semantic version: `major.minor.patch` plus an optional pre-release
/// tag, e.g. `1.2.0` or `0.4.0-beta.1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SemVersion {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Option<String>,
}

impl SemVersion {
    /// Create a SemVersion from its parts.
    pub fn new(major: u64, minor: u64, patch: u64, pre_release: Option<&str>) -> Self {
        SemVersion {
            major,
            minor,
            patch,
            pre_release: pre_release.map(str::to_string),
        }
    }

    /// Parse a `major.minor.patch[-pre]` string.
    ///
    /// # Returns
    /// * `Ok(SemVersion)` for a well-formed version
    /// * `Err(SemVersionError)` carrying the rejected input otherwise
    pub fn parse(input: &str) -> Result<SemVersion, SemVersionError> {
        let reject = || SemVersionError {
            input: input.to_string(),
        };

        let (core, pre_release) = match input.split_once('-') {
            Some((core, pre)) => (core, Some(pre)),
            None => (input, None),
        };

        if let Some(pre) = pre_release {
            let valid = !pre.is_empty()
                && pre
                    .bytes()
                    .all(|b| b.is_ascii_alphanumeric() || b == b'.' || b == b'-');
            if !valid {
                return Err(reject());
            }
        }

        let mut numbers = core.split('.');
        let mut next_number = || -> Result<u64, SemVersionError> {
            let part = numbers.next().ok_or_else(reject)?;
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(reject());
            }
            part.parse().map_err(|_| reject())
        };

        let major = next_number()?;
        let minor = next_number()?;
        let patch = next_number()?;
        if numbers.next().is_some() {
            return Err(reject());
        }

        Ok(SemVersion {
            major,
            minor,
            patch,
            pre_release: pre_release.map(str::to_string),
        })
    }

    /// The version of this crate, read from Cargo package metadata.
    ///
    /// # Panics
    /// Panics if the package version in the build metadata is not valid
    /// semver. That is a build configuration error, not a runtime
    /// condition.
    pub fn of_build() -> SemVersion {
        SemVersion::parse(env!("CARGO_PKG_VERSION"))
            .expect("CARGO_PKG_VERSION is not a valid semantic version")
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn pre_release(&self) -> Option<&str> {
        self.pre_release.as_deref()
    }
}

impl fmt::Display for SemVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.pre_release {
            write!(f, "-{pre}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        let v = SemVersion::parse("1.2.3").unwrap();
        assert_eq!(v, SemVersion::new(1, 2, 3, None));
        assert_eq!(v.major(), 1);
        assert_eq!(v.minor(), 2);
        assert_eq!(v.patch(), 3);
        assert_eq!(v.pre_release(), None);
    }

    #[test]
    fn test_parse_pre_release() {
        let v = SemVersion::parse("0.4.0-beta.1").unwrap();
        assert_eq!(v, SemVersion::new(0, 4, 0, Some("beta.1")));
        assert_eq!(v.pre_release(), Some("beta.1"));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in ["", "1", "1.2", "1.2.3.4", "a.b.c", "1.2.x", "1.2.3-", "1..3"] {
            let err = SemVersion::parse(input).unwrap_err();
            assert_eq!(err.input, input);
        }
    }

    #[test]
    fn test_display_round_trip() {
        for input in ["1.2.3", "0.4.0-beta.1", "10.0.1-rc-2"] {
            let v = SemVersion::parse(input).unwrap();
            assert_eq!(v.to_string(), input);
            assert_eq!(SemVersion::parse(&v.to_string()).unwrap(), v);
        }
    }

    #[test]
    fn test_of_build_matches_package_version() {
        let v = SemVersion::of_build();
        assert_eq!(v.to_string(), env!("CARGO_PKG_VERSION"));
    }
}
