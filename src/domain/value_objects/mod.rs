mod bucket_name;
mod object_key;

pub use bucket_name::BucketName;
pub use object_key::{ObjectKey, UPLOAD_TIMESTAMP_FORMAT};
