use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info};

use crate::{
    domain::{
        errors::{StorageError, StorageResult},
        models::{
            BackendLocation, DOWNLOAD_LINK_TTL, DownloadLink, MAX_UPLOAD_BYTES, StoredObject,
            UploadRequest, UploadedFile,
        },
        value_objects::ObjectKey,
    },
    ports::{
        services::FileService,
        storage::{ObjectInfo, ObjectStore},
    },
};

/// Entries returned by one listing, matching a single S3 ListObjectsV2 page
pub const LIST_PAGE_SIZE: usize = 1000;

/// Implementation of FileService on top of an ObjectStore port
#[derive(Clone)]
pub struct FileServiceImpl {
    store: Arc<dyn ObjectStore>,
    location: BackendLocation,
}

impl FileServiceImpl {
    /// Create a new FileServiceImpl instance
    pub fn new(store: Arc<dyn ObjectStore>, location: BackendLocation) -> Self {
        Self { store, location }
    }

    fn to_stored_object(&self, info: ObjectInfo) -> StoredObject {
        StoredObject {
            url: self.location.public_url(&info.key),
            key: info.key,
            size: info.size,
            last_modified: info.last_modified,
        }
    }
}

#[async_trait]
impl FileService for FileServiceImpl {
    fn location(&self) -> &BackendLocation {
        &self.location
    }

    async fn upload_file(&self, request: UploadRequest) -> StorageResult<UploadedFile> {
        if request.size() > MAX_UPLOAD_BYTES {
            return Err(StorageError::InvalidObjectSize {
                size: request.size(),
                max: MAX_UPLOAD_BYTES,
            });
        }

        let key = ObjectKey::timestamped(&request.file_name, Utc::now())?;
        debug!(key = %key, content_type = request.content_type(), "storing upload");

        let size = request.size();
        self.store
            .put_object(&key, request.data.clone(), Some(request.content_type()))
            .await?;

        info!(key = %key, size, "file uploaded");
        Ok(UploadedFile {
            url: self.location.public_url(&key),
            key,
            size,
        })
    }

    async fn list_files(&self) -> StorageResult<Vec<StoredObject>> {
        let objects = self.store.list_objects(Some(LIST_PAGE_SIZE)).await?;

        Ok(objects
            .into_iter()
            .map(|info| self.to_stored_object(info))
            .collect())
    }

    async fn create_download_link(&self, key: &ObjectKey) -> StorageResult<DownloadLink> {
        let url = self.store.get_presigned_url(key, DOWNLOAD_LINK_TTL).await?;

        Ok(DownloadLink {
            key: key.clone(),
            url,
            expires_in: DOWNLOAD_LINK_TTL,
        })
    }

    async fn delete_file(&self, key: &ObjectKey) -> StorageResult<()> {
        self.store.delete_object(key).await?;
        info!(key = %key, "file deleted");
        Ok(())
    }

    async fn verify_access(&self) -> StorageResult<()> {
        self.store.list_objects(Some(1)).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::BucketName;
    use bytes::Bytes;
    use std::{
        sync::{
            Mutex,
            atomic::{AtomicUsize, Ordering},
        },
        time::Duration,
    };

    /// Records every backend call and fails on demand
    #[derive(Default)]
    struct RecordingStore {
        calls: AtomicUsize,
        fail: bool,
        last_put: Mutex<Option<(String, Option<String>, usize)>>,
        last_limit: Mutex<Option<usize>>,
    }

    impl RecordingStore {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        fn hit(&self) -> StorageResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(StorageError::backend("connection refused"))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl ObjectStore for RecordingStore {
        async fn put_object(
            &self,
            key: &ObjectKey,
            data: Bytes,
            content_type: Option<&str>,
        ) -> StorageResult<()> {
            self.hit()?;
            *self.last_put.lock().unwrap() =
                Some((key.to_string(), content_type.map(str::to_string), data.len()));
            Ok(())
        }

        async fn list_objects(&self, max_results: Option<usize>) -> StorageResult<Vec<ObjectInfo>> {
            self.hit()?;
            *self.last_limit.lock().unwrap() = max_results;
            Ok(Vec::new())
        }

        async fn get_presigned_url(
            &self,
            key: &ObjectKey,
            expires_in: Duration,
        ) -> StorageResult<String> {
            self.hit()?;
            Ok(format!("https://signed.example/{}?expires={}", key, expires_in.as_secs()))
        }

        async fn delete_object(&self, _key: &ObjectKey) -> StorageResult<()> {
            self.hit()
        }
    }

    fn service(store: Arc<RecordingStore>) -> FileServiceImpl {
        let location =
            BackendLocation::new(BucketName::new("test-bucket".to_string()).unwrap(), "us-east-2")
                .unwrap();
        FileServiceImpl::new(store, location)
    }

    fn upload(name: &str, data: &'static [u8]) -> UploadRequest {
        UploadRequest {
            file_name: name.to_string(),
            content_type: None,
            data: Bytes::from_static(data),
        }
    }

    #[tokio::test]
    async fn upload_generates_timestamped_key_and_public_url() {
        let store = Arc::new(RecordingStore::default());
        let svc = service(store.clone());

        let stored = svc.upload_file(upload("notes.txt", b"hello")).await.unwrap();

        let (_, name) = stored.key.upload_parts().unwrap();
        assert_eq!(name, "notes.txt");
        assert_eq!(stored.size, 5);
        assert_eq!(
            stored.url,
            format!("https://test-bucket.s3.us-east-2.amazonaws.com/{}", stored.key)
        );

        let (put_key, content_type, len) = store.last_put.lock().unwrap().clone().unwrap();
        assert_eq!(put_key, stored.key.to_string());
        assert_eq!(content_type.as_deref(), Some("application/octet-stream"));
        assert_eq!(len, 5);
    }

    #[tokio::test]
    async fn upload_without_file_name_skips_backend() {
        let store = Arc::new(RecordingStore::default());
        let svc = service(store.clone());

        let err = svc.upload_file(upload("", b"data")).await.unwrap_err();

        assert!(err.is_client_error());
        assert_eq!(store.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn listing_requests_a_single_page() {
        let store = Arc::new(RecordingStore::default());
        let svc = service(store.clone());

        assert!(svc.list_files().await.unwrap().is_empty());
        assert_eq!(*store.last_limit.lock().unwrap(), Some(LIST_PAGE_SIZE));
    }

    #[tokio::test]
    async fn download_link_uses_fixed_ttl() {
        let svc = service(Arc::new(RecordingStore::default()));
        let key = ObjectKey::new("20240101T000000_a.txt".to_string()).unwrap();

        let link = svc.create_download_link(&key).await.unwrap();

        assert_eq!(link.expires_in, Duration::from_secs(3600));
        assert!(link.url.ends_with("expires=3600"));
    }

    #[tokio::test]
    async fn backend_failures_surface_unchanged() {
        let svc = service(Arc::new(RecordingStore::failing()));
        let key = ObjectKey::new("k".to_string()).unwrap();

        let errors = vec![
            svc.upload_file(upload("a.txt", b"x")).await.unwrap_err(),
            svc.list_files().await.unwrap_err(),
            svc.create_download_link(&key).await.unwrap_err(),
            svc.delete_file(&key).await.unwrap_err(),
            svc.verify_access().await.unwrap_err(),
        ];

        for err in errors {
            assert!(!err.is_client_error());
            assert_eq!(err.to_string(), "connection refused");
        }
    }
}
