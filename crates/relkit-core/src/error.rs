//! Error types for relkit

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using RelkitError
pub type Result<T> = std::result::Result<T, RelkitError>;

/// Main error type for relkit operations
#[derive(Debug, Error)]
pub enum RelkitError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Version-related errors
    #[error(transparent)]
    Version(#[from] VersionError),

    /// Version file adapter errors
    #[error(transparent)]
    Adapter(#[from] AdapterError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The user declined or aborted an interactive prompt
    #[error("Operation cancelled by user")]
    Cancelled,

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<ParseError> for RelkitError {
    fn from(err: ParseError) -> Self {
        Self::Version(VersionError::Parse(err))
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Version string parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Fewer than two numeric components after normalization
    #[error("Version '{0}' needs at least a major and a minor component")]
    TooFewComponents(String),

    /// A component is not a number, or the components have an unsupported shape
    #[error("Invalid version format '{input}': {reason}")]
    InvalidFormat { input: String, reason: String },
}

impl ParseError {
    /// Create an `InvalidFormat` error
    pub fn invalid(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Version calculation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    /// Failed to parse a version string
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A calculator precondition does not hold for the given version
    #[error("Invalid version state: {0}")]
    InvalidState(String),

    /// The calculation needs a decision only the caller can make
    #[error("Missing external input: {0}")]
    MissingExternalInput(String),

    /// Build code is not a non-negative integer
    #[error("Invalid build code '{0}'")]
    InvalidBuildCode(String),
}

/// Version file adapter errors
#[derive(Debug, Error)]
pub enum AdapterError {
    /// Version file not found
    #[error("Version file not found at {0}")]
    FileNotFound(PathBuf),

    /// Key missing from the version file
    #[error("Key '{key}' not found in {path}")]
    KeyNotFound { key: String, path: PathBuf },

    /// File type no adapter handles
    #[error("Unsupported version file: {0}")]
    UnsupportedFile(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RelkitError {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_lifts_into_version_error() {
        let err: RelkitError = ParseError::TooFewComponents("1".to_string()).into();
        assert!(matches!(
            err,
            RelkitError::Version(VersionError::Parse(ParseError::TooFewComponents(_)))
        ));
    }

    #[test]
    fn test_error_messages() {
        let err = ParseError::invalid("1.x", "component 'x' is not a number");
        assert_eq!(
            err.to_string(),
            "Invalid version format '1.x': component 'x' is not a number"
        );

        let err = VersionError::InvalidState("minor 12 exceeds 9".to_string());
        assert_eq!(err.to_string(), "Invalid version state: minor 12 exceeds 9");
    }
}
