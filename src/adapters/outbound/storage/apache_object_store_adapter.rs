use async_trait::async_trait;
use bytes::Bytes;
use futures::{StreamExt, TryStreamExt};
use http::Method;
use object_store::{
    Attribute, Attributes, ObjectMeta, ObjectStore as ApacheObjectStore, PutOptions, PutPayload,
    path::Path as ObjectPath, signer::Signer,
};
use std::{sync::Arc, time::Duration};
use tracing::warn;

use crate::{
    adapters::outbound::storage::error::key_from_store,
    domain::{
        errors::{StorageError, StorageResult, ValidationError},
        value_objects::ObjectKey,
    },
    ports::storage::{ObjectInfo, ObjectStore},
};

/// Adapter that implements our ObjectStore trait using Apache object_store.
///
/// Data operations go to `inner`; presigned URLs come from `signer`. For S3
/// both are the same `AmazonS3` client.
#[derive(Debug, Clone)]
pub struct ApacheObjectStoreAdapter {
    inner: Arc<dyn ApacheObjectStore>,
    signer: Arc<dyn Signer>,
}

impl ApacheObjectStoreAdapter {
    pub fn new(store: Arc<dyn ApacheObjectStore>, signer: Arc<dyn Signer>) -> Self {
        Self {
            inner: store,
            signer,
        }
    }

    /// Build an adapter whose store also signs its own URLs
    pub fn from_signing_store<S>(store: Arc<S>) -> Self
    where
        S: ApacheObjectStore + Signer,
    {
        Self {
            inner: store.clone(),
            signer: store,
        }
    }

    /// Keys are stored verbatim. `Path::from` would percent-encode
    /// characters such as `[`, `%` or `#`, so listings would no longer
    /// return the key the client was given.
    fn to_object_path(key: &ObjectKey) -> StorageResult<ObjectPath> {
        ObjectPath::parse(key.as_str()).map_err(|e| {
            StorageError::Validation(ValidationError::UnstorableObjectKey {
                key: key.to_string(),
                reason: e.to_string(),
            })
        })
    }

    /// Entries whose key cannot be represented are skipped, not fatal
    fn to_object_info(meta: ObjectMeta) -> Option<ObjectInfo> {
        match key_from_store(&meta.location) {
            Ok(key) => Some(ObjectInfo {
                key,
                size: meta.size,
                last_modified: meta.last_modified,
            }),
            Err(e) => {
                warn!(error = %e, "skipping stored object");
                None
            }
        }
    }
}

#[async_trait]
impl ObjectStore for ApacheObjectStoreAdapter {
    async fn put_object(
        &self,
        key: &ObjectKey,
        data: Bytes,
        content_type: Option<&str>,
    ) -> StorageResult<()> {
        let path = Self::to_object_path(key)?;

        let mut attributes = Attributes::new();
        if let Some(ct) = content_type {
            attributes.insert(Attribute::ContentType, ct.to_string().into());
        }
        let options = PutOptions {
            attributes,
            ..Default::default()
        };

        self.inner
            .put_opts(&path, PutPayload::from(data), options)
            .await?;

        Ok(())
    }

    async fn list_objects(&self, max_results: Option<usize>) -> StorageResult<Vec<ObjectInfo>> {
        let metas: Vec<ObjectMeta> = self
            .inner
            .list(None)
            .take(max_results.unwrap_or(usize::MAX))
            .try_collect()
            .await?;

        Ok(metas.into_iter().filter_map(Self::to_object_info).collect())
    }

    async fn get_presigned_url(
        &self,
        key: &ObjectKey,
        expires_in: Duration,
    ) -> StorageResult<String> {
        let path = Self::to_object_path(key)?;

        let url = self
            .signer
            .signed_url(Method::GET, &path, expires_in)
            .await?;

        Ok(url.to_string())
    }

    async fn delete_object(&self, key: &ObjectKey) -> StorageResult<()> {
        let path = Self::to_object_path(key)?;

        match self.inner.delete(&path).await {
            Ok(()) | Err(object_store::Error::NotFound { .. }) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
