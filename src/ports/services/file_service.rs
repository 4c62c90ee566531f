use crate::domain::{
    errors::StorageResult,
    models::{BackendLocation, DownloadLink, StoredObject, UploadRequest, UploadedFile},
    value_objects::ObjectKey,
};
use async_trait::async_trait;

/// Port for the gateway's file operations.
/// Each call maps to exactly one backend request.
#[async_trait]
pub trait FileService: Send + Sync + 'static {
    /// Bucket and region this service is bound to
    fn location(&self) -> &BackendLocation;

    /// Store an uploaded file under a freshly generated timestamped key
    async fn upload_file(&self, request: UploadRequest) -> StorageResult<UploadedFile>;

    /// List the first page of stored files
    async fn list_files(&self) -> StorageResult<Vec<StoredObject>>;

    /// Issue a signed download link without checking that the key exists
    async fn create_download_link(&self, key: &ObjectKey) -> StorageResult<DownloadLink>;

    /// Delete a stored file
    async fn delete_file(&self, key: &ObjectKey) -> StorageResult<()>;

    /// Best-effort check that the bucket is reachable with the configured credentials
    async fn verify_access(&self) -> StorageResult<()>;
}
