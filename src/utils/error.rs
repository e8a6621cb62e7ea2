//! Error handling for table extraction
//!
//! This module provides a unified error type and result type for all
//! extraction operations.

use std::fmt;

/// Extraction error type
#[derive(Debug, Clone)]
pub enum ExtractError {
    /// No table was detected - the sparse table had no rows after grouping
    NoTableDetected,
    /// Invalid input - the detection payload could not be parsed
    InvalidInput { message: String },
    /// Internal error
    InternalError { message: String },
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::NoTableDetected => {
                write!(f, "No table detected in the analyzed document")
            }
            ExtractError::InvalidInput { message } => {
                write!(f, "Invalid input: {}", message)
            }
            ExtractError::InternalError { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for ExtractError {}

impl From<serde_json::Error> for ExtractError {
    fn from(err: serde_json::Error) -> Self {
        ExtractError::InvalidInput {
            message: err.to_string(),
        }
    }
}

/// Result type for extraction operations
pub type ExtractResult<T> = Result<T, ExtractError>;

// Convenience constructors for errors
impl ExtractError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ExtractError::InvalidInput {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ExtractError::InternalError {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_table_display() {
        let err = ExtractError::NoTableDetected;
        assert!(err.to_string().contains("No table detected"));
    }

    #[test]
    fn test_invalid_input_display() {
        let err = ExtractError::invalid("unexpected token");
        let msg = err.to_string();
        assert!(msg.contains("Invalid input"));
        assert!(msg.contains("unexpected token"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let err: ExtractError = json_err.into();
        assert!(matches!(err, ExtractError::InvalidInput { .. }));
    }
}
