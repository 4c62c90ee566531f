use bytes::Bytes;
use chrono::{DateTime, Utc};
use std::time::Duration;

use crate::domain::value_objects::ObjectKey;

/// Largest payload accepted by an upload (100 MiB)
pub const MAX_UPLOAD_BYTES: u64 = 100 * 1024 * 1024;

/// Validity window of a signed download link
pub const DOWNLOAD_LINK_TTL: Duration = Duration::from_secs(3600);

/// Content type recorded when the client declares none
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// A single file handed to the gateway for storage
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl UploadRequest {
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }

    pub fn content_type(&self) -> &str {
        self.content_type.as_deref().unwrap_or(DEFAULT_CONTENT_TYPE)
    }
}

/// Outcome of a successful upload
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub key: ObjectKey,
    pub size: u64,
    pub url: String,
}

/// An object as it exists in the bucket, with its public access URL
#[derive(Debug, Clone, PartialEq)]
pub struct StoredObject {
    pub key: ObjectKey,
    pub size: u64,
    pub last_modified: DateTime<Utc>,
    pub url: String,
}

/// A signed, time-limited link to read one object
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadLink {
    pub key: ObjectKey,
    pub url: String,
    pub expires_in: Duration,
}
