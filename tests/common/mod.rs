#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use bytes::Bytes;
use file_gateway::{
    AppBuilder, AppConfig, AppState, ApacheObjectStoreAdapter, ObjectInfo, ObjectKey, ObjectStore,
    S3Config, StorageError, StorageResult, create_router, create_s3_store,
};
use object_store::memory::InMemory;
use std::{
    path::PathBuf,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

pub const BUCKET: &str = "test-bucket";
pub const REGION: &str = "us-east-2";

pub fn test_config() -> AppConfig {
    AppConfig {
        storage: S3Config {
            bucket: BUCKET.to_string(),
            region: REGION.to_string(),
            access_key: Some("AKIDEXAMPLE".to_string()),
            secret_key: Some("wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY".to_string()),
            endpoint: None,
        },
    }
}

pub fn static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public")
}

pub fn server_with_store(store: Arc<dyn ObjectStore>) -> TestServer {
    let services = AppBuilder::new(test_config())
        .with_object_store(store)
        .build()
        .unwrap();
    let state = AppState::new(Arc::new(services.file_service));

    TestServer::new(create_router(state, static_dir())).unwrap()
}

/// In-memory objects with URLs signed by an offline S3 client
pub fn in_memory_server() -> TestServer {
    let signer = create_s3_store(&test_config().storage).unwrap();
    let adapter = ApacheObjectStoreAdapter::new(Arc::new(InMemory::new()), signer);

    server_with_store(Arc::new(adapter))
}

/// Backend stand-in that refuses every call and counts attempts
#[derive(Default)]
pub struct UnreachableStore {
    pub calls: AtomicUsize,
}

impl UnreachableStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn refuse<T>(&self) -> StorageResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StorageError::backend(
            "error sending request for url (https://s3.us-east-2.amazonaws.com/test-bucket): connection refused",
        ))
    }
}

#[async_trait]
impl ObjectStore for UnreachableStore {
    async fn put_object(
        &self,
        _key: &ObjectKey,
        _data: Bytes,
        _content_type: Option<&str>,
    ) -> StorageResult<()> {
        self.refuse()
    }

    async fn list_objects(&self, _max_results: Option<usize>) -> StorageResult<Vec<ObjectInfo>> {
        self.refuse()
    }

    async fn get_presigned_url(
        &self,
        _key: &ObjectKey,
        _expires_in: Duration,
    ) -> StorageResult<String> {
        self.refuse()
    }

    async fn delete_object(&self, _key: &ObjectKey) -> StorageResult<()> {
        self.refuse()
    }
}
