use thiserror::Error;

use crate::domain::Field;

/// Exit code for a successful run.
pub const EXIT_OK: i32 = 0;

/// Exit code when an input is not a valid semantic version.
pub const EXIT_INVALID_VERSION: i32 = 1;

/// Exit code for every other failure.
pub const EXIT_OTHER: i32 = 2;

/// Unified error type for semver-tool operations
#[derive(Error, Debug)]
pub enum SemverError {
    #[error("Invalid version: '{0}' does not match the semver scheme 'X.Y.Z(-PRERELEASE)(+BUILD)'")]
    InvalidVersion(String),

    #[error("Unknown field: '{0}'")]
    UnknownField(String),

    #[error("Failed to render version as JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Cannot increment {0}: value would overflow")]
    Overflow(Field),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in semver-tool
pub type Result<T> = std::result::Result<T, SemverError>;

impl SemverError {
    /// Create an invalid version error for the offending input
    pub fn invalid_version(input: impl Into<String>) -> Self {
        SemverError::InvalidVersion(input.into())
    }

    /// Create an unknown field error
    pub fn unknown_field(name: impl Into<String>) -> Self {
        SemverError::UnknownField(name.into())
    }

    /// Create an argument error with context
    pub fn argument(msg: impl Into<String>) -> Self {
        SemverError::InvalidArgument(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        SemverError::Config(msg.into())
    }

    /// Process exit code the CLI reports for this error.
    ///
    /// Invalid versions get their own code so scripts can tell them apart
    /// from usage mistakes.
    pub fn exit_code(&self) -> i32 {
        match self {
            SemverError::InvalidVersion(_) => EXIT_INVALID_VERSION,
            _ => EXIT_OTHER,
        }
    }
}
