use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Error type covering the different failure cases that can occur when the
/// converter ingests, reshapes, or emits data.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Wrapper for IO failures such as reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when JSON parsing fails. The message carries serde_json's line
    /// and column information.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors bubbled up from the CSV serializer.
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    /// Raised when the parsed document is not one of the supported shapes.
    #[error("unsupported document shape: {0}")]
    Shape(String),

    /// Raised when the requested text encoding label is not recognised.
    #[error("unknown encoding label '{0}'")]
    UnknownEncoding(String),

    /// Raised when command line arguments are structurally invalid.
    #[error("invalid argument: {0}")]
    Usage(String),

    /// Raised when the user provides a path that does not exist.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

impl ConvertError {
    /// Process exit code the CLI reports for this error: 1 for OS-level
    /// failures, 2 for data and usage errors, 99 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConvertError::Io(_) | ConvertError::MissingInput(_) => 1,
            ConvertError::Csv(error) => match error.kind() {
                csv::ErrorKind::Io(_) => 1,
                _ => 2,
            },
            ConvertError::Json(_)
            | ConvertError::Shape(_)
            | ConvertError::UnknownEncoding(_)
            | ConvertError::Usage(_) => 2,
            ConvertError::Logging(_) => 99,
        }
    }
}
