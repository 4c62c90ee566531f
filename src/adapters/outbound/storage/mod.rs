// Infrastructure error conversions
pub mod error;

// Storage implementations
pub mod apache_object_store_adapter;

// Provider-specific implementations
pub mod s3;

// Re-export key types
pub use apache_object_store_adapter::ApacheObjectStoreAdapter;
pub use s3::{S3Config, create_s3_store};
