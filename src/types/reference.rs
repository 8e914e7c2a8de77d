//! Ref: a position inside a document.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable reference to a position inside a document: which document,
/// where in its physical layout, and where in its logical (JSON path)
/// structure.
///
/// Wire form: `{"documentId": …, "physicalRow": …, "physicalColumn": …,
/// "jsonPath": …}`. All four fields are required on decode. Negative row
/// or column mean "not applicable / unknown" and pass through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ref {
    document_id: String,
    physical_row: i64,
    physical_column: i64,
    json_path: String,
}

impl Ref {
    /// Create a fully specified Ref.
    pub fn of(
        document_id: impl Into<String>,
        physical_row: i64,
        physical_column: i64,
        json_path: impl Into<String>,
    ) -> Self {
        Ref {
            document_id: document_id.into(),
            physical_row,
            physical_column,
            json_path: json_path.into(),
        }
    }

    /// Create a Ref carrying only a JSON path: empty document id, unknown
    /// physical position.
    pub fn of_path(json_path: impl Into<String>) -> Self {
        Ref::of("", -1, -1, json_path)
    }

    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    pub fn physical_row(&self) -> i64 {
        self.physical_row
    }

    pub fn physical_column(&self) -> i64 {
        self.physical_column
    }

    pub fn json_path(&self) -> &str {
        &self.json_path
    }
}

impl fmt::Display for Ref {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{}:{} {}",
            self.document_id, self.physical_row, self.physical_column, self.json_path
        )
    }
}
