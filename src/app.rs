use std::sync::Arc;

use crate::{
    adapters::outbound::storage::{ApacheObjectStoreAdapter, S3Config, create_s3_store},
    domain::{
        errors::ValidationError,
        models::BackendLocation,
        value_objects::BucketName,
    },
    ports::storage::ObjectStore,
    services::FileServiceImpl,
};

/// Configuration for the application
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage: S3Config,
}

/// Application services container
pub struct AppServices {
    pub file_service: FileServiceImpl,
}

/// Application builder for dependency injection
pub struct AppBuilder {
    config: AppConfig,
    object_store: Option<Arc<dyn ObjectStore>>,
}

impl AppBuilder {
    /// Create a new application builder
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            object_store: None,
        }
    }

    /// Use an already constructed store instead of building an S3 client
    pub fn with_object_store(mut self, store: Arc<dyn ObjectStore>) -> Self {
        self.object_store = Some(store);
        self
    }

    /// Resolve the bucket/region pair the gateway reports and links to
    pub fn location(&self) -> Result<BackendLocation, AppError> {
        let storage = &self.config.storage;
        BucketName::new(storage.bucket.clone())
            .and_then(|bucket| BackendLocation::new(bucket, storage.region.clone()))
            .map_err(AppError::from)
    }

    /// Build the complete application with services
    pub fn build(self) -> Result<AppServices, AppError> {
        let location = self.location()?;

        let store = match self.object_store {
            Some(store) => store,
            None => self.create_storage_adapter()?,
        };

        Ok(AppServices {
            file_service: FileServiceImpl::new(store, location),
        })
    }

    fn create_storage_adapter(&self) -> Result<Arc<dyn ObjectStore>, AppError> {
        let s3 = create_s3_store(&self.config.storage).map_err(|e| AppError::StorageInit {
            message: e.to_string(),
        })?;

        Ok(Arc::new(ApacheObjectStoreAdapter::from_signing_store(s3)))
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Storage initialization error: {message}")]
    StorageInit { message: String },
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Configuration {
            message: err.to_string(),
        }
    }
}
