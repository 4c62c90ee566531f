//! S3 client construction using the object_store crate
//!
//! The `AmazonS3` client built here serves both data operations and
//! presigned URL generation.

use object_store::aws::{AmazonS3, AmazonS3Builder};
use std::sync::Arc;

use crate::domain::errors::StorageError;

/// Configuration for S3 storage backend
#[derive(Clone)]
pub struct S3Config {
    pub bucket: String,
    pub region: String,
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
    /// Custom endpoint for S3-compatible stores (MinIO, LocalStack)
    pub endpoint: Option<String>,
}

impl std::fmt::Debug for S3Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S3Config")
            .field("bucket", &self.bucket)
            .field("region", &self.region)
            .field("access_key", &self.access_key)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

/// Create an S3 store from configuration
pub fn create_s3_store(config: &S3Config) -> Result<Arc<AmazonS3>, StorageError> {
    let mut builder = AmazonS3Builder::new()
        .with_bucket_name(&config.bucket)
        .with_region(&config.region);

    if let Some(access_key) = &config.access_key {
        builder = builder.with_access_key_id(access_key);
    }

    if let Some(secret_key) = &config.secret_key {
        builder = builder.with_secret_access_key(secret_key);
    }

    if let Some(endpoint) = &config.endpoint {
        builder = builder
            .with_endpoint(endpoint)
            .with_allow_http(endpoint.starts_with("http://"));
    }

    let store = builder.build()?;

    Ok(Arc::new(store))
}
