//! Validation error records reported against document positions.

use crate::types::Ref;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a [`ValidationError`].
///
/// Wire form: the uppercase variant name. Unknown names fail decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ErrorLevel {
    Info,
    Warn,
    Error,
    Severe,
}

impl fmt::Display for ErrorLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorLevel::Info => "INFO",
            ErrorLevel::Warn => "WARN",
            ErrorLevel::Error => "ERROR",
            ErrorLevel::Severe => "SEVERE",
        };
        f.write_str(name)
    }
}

/// An immutable validation finding: where it happened ([`Ref`]), how bad it
/// is, a machine-readable error code, and a human-readable message template
/// with its ordered arguments.
///
/// Wire form: `{"ref": …, "level": "INFO", "errorCode": …, "message": …,
/// "args": […]}`. All fields are required on decode; `ref` nests through
/// the [`Ref`] codec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    #[serde(rename = "ref")]
    reference: Ref,
    level: ErrorLevel,
    #[serde(rename = "errorCode")]
    error_code: String,
    message: String,
    args: Vec<String>,
}

impl ValidationError {
    /// Create a ValidationError.
    pub fn of<I, S>(
        reference: Ref,
        level: ErrorLevel,
        error_code: impl Into<String>,
        message: impl Into<String>,
        args: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ValidationError {
            reference,
            level,
            error_code: error_code.into(),
            message: message.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn reference(&self) -> &Ref {
        &self.reference
    }

    pub fn level(&self) -> ErrorLevel {
        self.level
    }

    pub fn error_code(&self) -> &str {
        &self.error_code
    }

    /// The raw message template, placeholders unexpanded.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The message with each `{}` placeholder replaced by the next
    /// argument. Leftover placeholders or arguments pass through untouched.
    pub fn formatted_message(&self) -> String {
        let mut out = String::with_capacity(self.message.len());
        let mut rest = self.message.as_str();
        let mut args = self.args.iter();
        while let Some(pos) = rest.find("{}") {
            let (head, tail) = rest.split_at(pos);
            out.push_str(head);
            match args.next() {
                Some(arg) => out.push_str(arg),
                None => out.push_str("{}"),
            }
            rest = &tail[2..];
        }
        out.push_str(rest);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ValidationError {
        ValidationError::of(
            Ref::of_path("$a.b"),
            ErrorLevel::Info,
            "2",
            "expected {} but got {}",
            ["x", "b"],
        )
    }

    #[test]
    fn test_round_trip() {
        let ve = sample();
        let json = serde_json::to_string(&ve).unwrap();
        let back: ValidationError = serde_json::from_str(&json).unwrap();
        assert_eq!(ve, back);
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        let obj = json.as_object().unwrap();
        for field in ["ref", "level", "errorCode", "message", "args"] {
            assert!(obj.contains_key(field), "missing wire field {field}");
        }
        assert_eq!(obj["level"], "INFO");
    }

    #[test]
    fn test_level_round_trip() {
        for level in [
            ErrorLevel::Info,
            ErrorLevel::Warn,
            ErrorLevel::Error,
            ErrorLevel::Severe,
        ] {
            let json = serde_json::to_string(&level).unwrap();
            assert_eq!(json, format!("\"{level}\""));
            let back: ErrorLevel = serde_json::from_str(&json).unwrap();
            assert_eq!(back, level);
        }
    }

    #[test]
    fn test_unknown_level_fails_decode() {
        let result: Result<ErrorLevel, _> = serde_json::from_str("\"FATAL\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_ref_fails_decode() {
        let result: Result<ValidationError, _> = serde_json::from_str(
            r#"{"level":"INFO","errorCode":"2","message":"m","args":[]}"#,
        );
        let err = result.unwrap_err().to_string();
        assert!(err.contains("ref"), "{err}");
    }

    #[test]
    fn test_formatted_message_substitutes_in_order() {
        assert_eq!(sample().formatted_message(), "expected x but got b");
    }

    #[test]
    fn test_formatted_message_leftover_placeholder() {
        let ve = ValidationError::of(
            Ref::of_path("$"),
            ErrorLevel::Warn,
            "1",
            "{} and {}",
            ["only"],
        );
        assert_eq!(ve.formatted_message(), "only and {}");
    }
}
