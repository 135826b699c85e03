use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Target not found: {0}")]
    TargetNotFound(String),

    #[error("Target is not a directory: {0}")]
    NotADirectory(String),

    #[error("Failed to read file: {path}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report: {path}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScanError>;
