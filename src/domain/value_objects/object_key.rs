use chrono::{DateTime, Utc};

use crate::domain::errors::ValidationError;

/// Format of the upload timestamp prefixed to every generated key.
///
/// This is ISO-8601 with the `-` and `:` separators and the fractional
/// seconds removed, so keys sort chronologically.
pub const UPLOAD_TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%S";

const MAX_KEY_LEN: usize = 1024;

/// A validated object key (path) in the storage system
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectKey(String);

impl ObjectKey {
    /// Create a new ObjectKey with validation
    pub fn new(value: String) -> Result<Self, ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::EmptyObjectKey);
        }

        if value.len() > MAX_KEY_LEN {
            return Err(ValidationError::ObjectKeyTooLong {
                actual: value.len(),
                max: MAX_KEY_LEN,
            });
        }

        if let Some(c) = value.chars().find(|c| c.is_control()) {
            return Err(ValidationError::InvalidObjectKeyCharacter(c));
        }

        if value.starts_with('/') {
            return Err(ValidationError::ObjectKeyStartsWithSlash);
        }

        if value.contains("//") {
            return Err(ValidationError::ObjectKeyContainsDoubleSlash);
        }

        Ok(Self(value))
    }

    /// Build the key for a fresh upload: `<timestamp>_<original filename>`.
    ///
    /// Two uploads of the same file name within the same second produce the
    /// same key; the later one overwrites the earlier.
    pub fn timestamped(file_name: &str, uploaded_at: DateTime<Utc>) -> Result<Self, ValidationError> {
        if file_name.is_empty() {
            return Err(ValidationError::MissingFileName);
        }

        let stamp = uploaded_at.format(UPLOAD_TIMESTAMP_FORMAT);
        ObjectKey::new(format!("{}_{}", stamp, file_name))
    }

    /// Get the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split a generated key back into its timestamp and original file name
    pub fn upload_parts(&self) -> Option<(&str, &str)> {
        let (stamp, name) = self.0.split_once('_')?;
        let looks_like_stamp = stamp.len() == 15
            && stamp.char_indices().all(|(i, c)| {
                if i == 8 {
                    c == 'T'
                } else {
                    c.is_ascii_digit()
                }
            });

        looks_like_stamp.then_some((stamp, name))
    }
}

impl std::fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
