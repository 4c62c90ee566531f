use crate::domain::{
    errors::ValidationError,
    value_objects::{BucketName, ObjectKey},
};

/// Where this deployment stores its objects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendLocation {
    bucket: BucketName,
    region: String,
}

impl BackendLocation {
    pub fn new(bucket: BucketName, region: impl Into<String>) -> Result<Self, ValidationError> {
        let region = region.into();
        if region.trim().is_empty() {
            return Err(ValidationError::EmptyRegion);
        }
        Ok(Self { bucket, region })
    }

    pub fn bucket(&self) -> &BucketName {
        &self.bucket
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Virtual-hosted style URL of an object.
    ///
    /// The key is inserted as-is; clients depend on this exact shape.
    pub fn public_url(&self, key: &ObjectKey) -> String {
        format!(
            "https://{}.s3.{}.amazonaws.com/{}",
            self.bucket, self.region, key
        )
    }
}
