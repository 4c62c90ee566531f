use thiserror::Error;

use crate::domain::errors::ValidationError;

/// Errors that can occur during gateway storage operations
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// Client supplied input that failed validation; nothing reached the backend
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Upload payload exceeds the enforced size cap
    #[error("File too large: {size} bytes (max: {max})")]
    InvalidObjectSize { size: u64, max: u64 },

    /// The backend returned a key this gateway cannot represent
    #[error("Invalid object key from store '{key}': {reason}")]
    InvalidStoredKey { key: String, reason: ValidationError },

    /// Storage backend error, message passed through as reported by the backend
    #[error("{message}")]
    StorageBackendError { message: String },
}

impl StorageError {
    pub fn backend(message: impl Into<String>) -> Self {
        StorageError::StorageBackendError {
            message: message.into(),
        }
    }

    /// True when the error stems from caller input rather than the backend
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            StorageError::Validation(_) | StorageError::InvalidObjectSize { .. }
        )
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_message_is_passed_through_verbatim() {
        let err = StorageError::backend("The specified bucket does not exist");
        assert_eq!(err.to_string(), "The specified bucket does not exist");
        assert!(!err.is_client_error());
    }

    #[test]
    fn validation_and_size_errors_are_client_errors() {
        assert!(StorageError::from(ValidationError::MissingFileName).is_client_error());
        assert!(StorageError::InvalidObjectSize { size: 10, max: 5 }.is_client_error());
    }
}
