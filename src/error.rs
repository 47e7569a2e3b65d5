use std::collections::BTreeSet;

use thiserror::Error;

/// Everything that can go wrong between receiving an upload and rendering
/// the screened table.
#[derive(Error, Debug)]
pub enum ScreenError {
    /// No `file` part in the form, or an empty filename.
    #[error("{0}")]
    Upload(String),

    /// The uploaded bytes are not delimited UTF-8 text with a header row.
    #[error("{0}")]
    Parse(String),

    #[error("Missing columns in CSV: {}", join_set(.0))]
    MissingColumns(BTreeSet<String>),

    #[error("Cannot compare '{value}' in column '{column}' (row {row}) with a number")]
    Filtering {
        column: String,
        row: usize,
        value: String,
    },
}

impl ScreenError {
    /// Whether the failure is blamed on the request rather than on processing.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ScreenError::Upload(_) | ScreenError::Parse(_))
    }
}

fn join_set(set: &BTreeSet<String>) -> String {
    set.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

pub type Result<T> = std::result::Result<T, ScreenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_columns_message_lists_fields_sorted() {
        let missing: BTreeSet<String> = ["roce", "peg_ratio"].iter().map(|s| s.to_string()).collect();
        let err = ScreenError::MissingColumns(missing);
        assert_eq!(err.to_string(), "Missing columns in CSV: peg_ratio, roce");
        assert!(!err.is_client_error());
    }

    #[test]
    fn parse_error_is_client_error() {
        assert!(ScreenError::Parse("bad".into()).is_client_error());
        assert!(ScreenError::Upload("No file part".into()).is_client_error());
    }
}
