//! Error types for ClauseGuard

/// Result type alias using ClauseGuard's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for ClauseGuard operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A document decoder could not produce text
    #[error("extraction error: {0}")]
    Extraction(String),

    /// Uploaded file does not carry a supported suffix
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Invalid risk rule table
    #[error("rule table error: {0}")]
    Rules(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a new extraction error
    pub fn extraction(msg: impl Into<String>) -> Self {
        Self::Extraction(msg.into())
    }

    /// Create a new unsupported format error
    pub fn unsupported_format(msg: impl Into<String>) -> Self {
        Self::UnsupportedFormat(msg.into())
    }

    /// Create a new rule table error
    pub fn rules(msg: impl Into<String>) -> Self {
        Self::Rules(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Short machine-readable kind, used as a metrics label
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Extraction(_) => "extraction",
            Self::UnsupportedFormat(_) => "unsupported_format",
            Self::Rules(_) => "rules",
            Self::Config(_) => "config",
            Self::Io(_) => "io",
            Self::Yaml(_) => "yaml",
            Self::Serialization(_) => "serialization",
        }
    }

    /// Whether the error was caused by the submitted document rather than the service
    pub fn is_document_error(&self) -> bool {
        matches!(self, Self::Extraction(_) | Self::UnsupportedFormat(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::extraction("page 2 has no extractable text");
        assert_eq!(
            err.to_string(),
            "extraction error: page 2 has no extractable text"
        );
        assert_eq!(err.kind(), "extraction");
        assert!(err.is_document_error());
    }

    #[test]
    fn test_rules_error_is_not_document_error() {
        let err = Error::rules("duplicate trigger phrase");
        assert!(!err.is_document_error());
        assert_eq!(err.kind(), "rules");
    }
}
