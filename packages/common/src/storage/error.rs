use thiserror::Error;

/// Errors that can occur during blob storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The requested blob was not found.
    #[error("blob not found: {0}")]
    NotFound(String),

    /// The declared content type is not on the allow-list.
    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),

    /// The filename cannot be used as (part of) a stored name.
    #[error("invalid filename: {0}")]
    InvalidFilename(&'static str),

    /// An I/O error occurred.
    #[error("storage IO error: {0}")]
    Io(#[from] std::io::Error),
}
