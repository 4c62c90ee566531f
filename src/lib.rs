pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export key types for convenience

// Domain types - core business entities and value objects
pub use domain::{
    BackendLocation,
    BucketName,
    DomainValidationError,
    DownloadLink,
    // Value objects
    ObjectKey,
    // Errors
    StorageError,
    StorageResult,
    // Models
    StoredObject,
    UploadRequest,
    UploadedFile,
};

// Port types - interfaces for external systems
pub use ports::{FileService, ObjectInfo, ObjectStore};

// Service implementations - business logic
pub use services::FileServiceImpl;

// Application factory and configuration
pub use app::{AppBuilder, AppConfig, AppError, AppServices};

// Adapter types - infrastructure implementations
pub use adapters::inbound::http::router::{AppState, create_router};
pub use adapters::outbound::storage::{ApacheObjectStoreAdapter, S3Config, create_s3_store};

// Public facade for easy construction
pub mod prelude {
    pub use crate::{
        ApacheObjectStoreAdapter, AppBuilder, AppConfig, AppServices, AppState, BucketName,
        FileService, FileServiceImpl, ObjectKey, ObjectStore, S3Config, create_router,
    };
}
