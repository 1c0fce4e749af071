use thiserror::Error;

/// Result type alias using CdError
pub type Result<T> = std::result::Result<T, CdError>;

/// Error taxonomy for the changelog diff extension
///
/// The diff computation itself is infallible; errors arise only at the
/// snapshot-parsing and column-registration boundaries. Each variant maps to
/// a stable `ERR_*` code for programmatic handling and test assertions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CdError {
    /// Stored snapshot JSON is neither `null` nor an object
    #[error("invalid snapshot: expected JSON object or null, got {found}")]
    InvalidSnapshot { found: String },

    /// A column with the same key is already registered on the table
    #[error("column already registered: {key}")]
    DuplicateColumn { key: String },

    /// Internal invariant failure
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl CdError {
    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            CdError::InvalidSnapshot { .. } => "ERR_INVALID_SNAPSHOT",
            CdError::DuplicateColumn { .. } => "ERR_DUPLICATE_COLUMN",
            CdError::Internal { .. } => "ERR_INTERNAL",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        let invalid = CdError::InvalidSnapshot {
            found: "array".to_string(),
        };
        let duplicate = CdError::DuplicateColumn {
            key: "human_summary".to_string(),
        };
        assert_eq!(invalid.code(), "ERR_INVALID_SNAPSHOT");
        assert_eq!(duplicate.code(), "ERR_DUPLICATE_COLUMN");
    }

    #[test]
    fn test_display_carries_context() {
        let err = CdError::DuplicateColumn {
            key: "human_summary".to_string(),
        };
        assert_eq!(err.to_string(), "column already registered: human_summary");
    }
}
