use crate::domain::{errors::StorageResult, value_objects::ObjectKey};
use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Port for object storage operations
/// This abstracts the actual storage backend (S3, S3-compatible, in-memory)
#[async_trait]
pub trait ObjectStore: Send + Sync + 'static {
    /// Store object data under `key`, replacing anything already there
    async fn put_object(
        &self,
        key: &ObjectKey,
        data: Bytes,
        content_type: Option<&str>,
    ) -> StorageResult<()>;

    /// List objects in key order, stopping after `max_results` entries
    async fn list_objects(&self, max_results: Option<usize>) -> StorageResult<Vec<ObjectInfo>>;

    /// Get a pre-signed GET URL for object access.
    /// The object is not required to exist.
    async fn get_presigned_url(&self, key: &ObjectKey, expires_in: Duration)
        -> StorageResult<String>;

    /// Delete object data. Deleting an absent key is not an error.
    async fn delete_object(&self, key: &ObjectKey) -> StorageResult<()>;
}

/// Information about an object in storage
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectInfo {
    pub key: ObjectKey,
    pub size: u64,
    pub last_modified: DateTime<Utc>,
}
