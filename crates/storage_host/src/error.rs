//! Error taxonomy for object-store operations.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failure of one object-store operation, carrying the provider's message.
///
/// Every variant surfaces to the user only as a transient notification; no
/// operation is retried automatically and none is fatal to the session.
pub enum StoreError {
    /// A folder listing request failed.
    #[error("list failed: {0}")]
    List(String),
    /// An upload request failed.
    #[error("upload failed: {0}")]
    Upload(String),
    /// A download request failed.
    #[error("download failed: {0}")]
    Download(String),
}

impl StoreError {
    /// Returns the provider message without the operation prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::List(msg) | Self::Upload(msg) | Self::Download(msg) => msg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_operation_and_message() {
        let err = StoreError::Upload("bucket quota exceeded".to_string());
        assert_eq!(err.to_string(), "upload failed: bucket quota exceeded");
        assert_eq!(err.message(), "bucket quota exceeded");
    }
}
