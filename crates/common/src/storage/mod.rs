mod blob_types;

pub use blob_types::{FileUpload, PresignedMethod, PresignedUrlRequest, StorageAck, UploadedFile};

use std::{fmt::Debug, future::Future};

/// Blob storage collaborator holding form attachments and exports.
pub trait BlobStore: Clone + Debug + Send + Sync {
    /// Returns a time-limited URL granting `request.method` on `request.key`
    fn generate_presigned_url(
        &self,
        request: PresignedUrlRequest,
    ) -> impl Future<Output = Result<String, StorageError>> + Send;
    fn upload_file(
        &self,
        upload: FileUpload,
    ) -> impl Future<Output = Result<UploadedFile, StorageError>> + Send;
    fn copy_file(
        &self,
        source_key: &str,
        destination_key: &str,
    ) -> impl Future<Output = Result<StorageAck, StorageError>> + Send;
    fn delete_file(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<StorageAck, StorageError>> + Send;
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    #[error("Object not found: {0}")]
    NotFound(String),
    #[error("Access denied: {0}")]
    AccessDenied(String),
    #[error("Storage backend error: {0}")]
    Backend(String),
}
