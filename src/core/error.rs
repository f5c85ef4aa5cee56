//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Invalid minimum level supplied at construction or via the mutator
    #[error("invalid log level '{given}', expected one of: debug, info, warn, error, fatal")]
    InvalidLevel { given: String },

    /// Invalid output format supplied at construction
    #[error("invalid output format '{given}', expected one of: text, jsonl")]
    InvalidFormat { given: String },
}

impl LoggerError {
    /// Create an invalid-level configuration error
    pub fn invalid_level(given: impl Into<String>) -> Self {
        LoggerError::InvalidLevel {
            given: given.into(),
        }
    }

    /// Create an invalid-format configuration error
    pub fn invalid_format(given: impl Into<String>) -> Self {
        LoggerError::InvalidFormat {
            given: given.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::invalid_level("verbose");
        assert!(matches!(err, LoggerError::InvalidLevel { .. }));

        let err = LoggerError::invalid_format("xml");
        assert!(matches!(err, LoggerError::InvalidFormat { .. }));
    }

    #[test]
    fn test_error_display_enumerates_valid_sets() {
        let err = LoggerError::invalid_level("verbose");
        assert_eq!(
            err.to_string(),
            "invalid log level 'verbose', expected one of: debug, info, warn, error, fatal"
        );

        let err = LoggerError::invalid_format("xml");
        assert_eq!(
            err.to_string(),
            "invalid output format 'xml', expected one of: text, jsonl"
        );
    }
}
