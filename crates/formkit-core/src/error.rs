//! Error types for formkit

use thiserror::Error;

/// Main error type for formkit operations
#[derive(Error, Debug)]
pub enum FormError {
    /// A selected file could not be read by the platform file facility
    #[error("Failed to read file: {0}")]
    FileRead(String),

    /// Schema configuration could not be parsed
    #[error("Invalid schema config: {0}")]
    Config(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Form values could not be converted into the domain shape
    #[error("Conversion error: {0}")]
    Conversion(String),

    /// One or more fields failed validation
    #[error("Validation failed: {}", format_issues(.0))]
    Validation(Vec<FieldIssue>),
}

/// A single validation problem attached to a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Field name the issue belongs to
    pub field: String,
    /// Human readable message shown under the field
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

fn format_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|i| format!("{}: {}", i.field, i.message))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for formkit operations
pub type Result<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_lists_every_issue() {
        let err = FormError::Validation(vec![
            FieldIssue::new("title", "required"),
            FieldIssue::new("category", "unknown category"),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: title: required, category: unknown category"
        );
    }

    #[test]
    fn file_read_error_names_the_file() {
        let err = FormError::FileRead("cover.png".to_string());
        assert!(err.to_string().contains("cover.png"));
    }
}
