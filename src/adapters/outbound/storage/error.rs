use crate::domain::{errors::StorageError, value_objects::ObjectKey};

/// Convert object_store errors to domain storage errors.
///
/// Backend failures are not distinguished by kind; the backend's own message
/// travels through unchanged.
impl From<object_store::Error> for StorageError {
    fn from(err: object_store::Error) -> Self {
        StorageError::backend(err.to_string())
    }
}

/// Parse a key reported by the backend into a domain key
pub(crate) fn key_from_store(location: &object_store::path::Path) -> Result<ObjectKey, StorageError> {
    let raw = location.to_string();
    ObjectKey::new(raw.clone()).map_err(|reason| StorageError::InvalidStoredKey { key: raw, reason })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_store_errors_become_backend_errors() {
        let err = object_store::Error::Generic {
            store: "S3",
            source: "Access Denied".into(),
        };
        let storage_err = StorageError::from(err);

        assert!(matches!(storage_err, StorageError::StorageBackendError { .. }));
        assert!(storage_err.to_string().contains("Access Denied"));
    }

    #[test]
    fn stored_keys_round_trip() {
        let path = object_store::path::Path::from("20240101T000000_a.txt");
        assert_eq!(key_from_store(&path).unwrap().as_str(), "20240101T000000_a.txt");
    }
}
