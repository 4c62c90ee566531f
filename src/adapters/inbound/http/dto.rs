use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use crate::domain::models::{DownloadLink, StoredObject, UploadedFile};

/// DTO for the health check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponseDto {
    pub status: String,
    pub service: String,
    pub bucket: String,
    pub region: String,
}

/// DTO for a completed upload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponseDto {
    pub success: bool,
    pub message: String,
    pub filename: String,
    pub size: u64,
    pub url: String,
}

/// DTO for one entry of a file listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDto {
    pub name: String,
    pub size: u64,
    pub last_modified: String,
    pub url: String,
}

/// DTO for file list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListFilesResponseDto {
    pub success: bool,
    pub files: Vec<FileDto>,
    pub count: usize,
}

/// DTO for a signed download link
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadLinkResponseDto {
    pub success: bool,
    pub url: String,
}

/// DTO for a completed deletion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponseDto {
    pub success: bool,
    pub message: String,
}

/// DTO for error responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponseDto {
    pub success: bool,
    pub error: String,
}

// Conversion implementations

impl From<StoredObject> for FileDto {
    fn from(object: StoredObject) -> Self {
        FileDto {
            name: object.key.to_string(),
            size: object.size,
            // same shape as JavaScript's Date.toISOString()
            last_modified: object
                .last_modified
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            url: object.url,
        }
    }
}

impl From<Vec<StoredObject>> for ListFilesResponseDto {
    fn from(objects: Vec<StoredObject>) -> Self {
        let files: Vec<FileDto> = objects.into_iter().map(FileDto::from).collect();
        ListFilesResponseDto {
            success: true,
            count: files.len(),
            files,
        }
    }
}

impl From<UploadedFile> for UploadResponseDto {
    fn from(file: UploadedFile) -> Self {
        UploadResponseDto {
            success: true,
            message: "File uploaded successfully".to_string(),
            filename: file.key.to_string(),
            size: file.size,
            url: file.url,
        }
    }
}

impl From<DownloadLink> for DownloadLinkResponseDto {
    fn from(link: DownloadLink) -> Self {
        DownloadLinkResponseDto {
            success: true,
            url: link.url,
        }
    }
}

impl DeleteResponseDto {
    pub fn deleted(key: &str) -> Self {
        DeleteResponseDto {
            success: true,
            message: format!("File {} deleted successfully", key),
        }
    }
}

impl ErrorResponseDto {
    pub fn new(message: impl Into<String>) -> Self {
        ErrorResponseDto {
            success: false,
            error: message.into(),
        }
    }
}
