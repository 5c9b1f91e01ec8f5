use crate::{
    config::MockStorageConfig,
    storage::{
        BlobStore, FileUpload, PresignedUrlRequest, StorageAck, StorageError, UploadedFile,
    },
    testing::Stub,
};

/// Arguments recorded for a `copy_file` call
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CopyFileCall {
    pub source_key: String,
    pub destination_key: String,
}

/// Mock blob store for testing
#[derive(Clone, Debug)]
pub struct MockBlobStore {
    pub generate_presigned_url: Stub<PresignedUrlRequest, String, StorageError>,
    pub upload_file: Stub<FileUpload, UploadedFile, StorageError>,
    pub copy_file: Stub<CopyFileCall, StorageAck, StorageError>,
    pub delete_file: Stub<String, StorageAck, StorageError>,
}

impl Default for MockBlobStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBlobStore {
    pub fn new() -> Self {
        Self::from_config(&MockStorageConfig::default())
    }

    pub fn from_config(config: &MockStorageConfig) -> Self {
        Self {
            generate_presigned_url: Stub::resolving(
                "generate_presigned_url",
                config.presigned_url.clone(),
            ),
            upload_file: Stub::resolving(
                "upload_file",
                UploadedFile {
                    key: config.file_key.clone(),
                },
            ),
            copy_file: Stub::resolving("copy_file", StorageAck::ok()),
            delete_file: Stub::resolving("delete_file", StorageAck::ok()),
        }
    }

    /// Keys passed to `delete_file`, oldest first
    pub fn deleted_keys(&self) -> Vec<String> {
        self.delete_file.calls()
    }

    pub fn reset(&self) {
        self.generate_presigned_url.reset();
        self.upload_file.reset();
        self.copy_file.reset();
        self.delete_file.reset();
    }
}

impl BlobStore for MockBlobStore {
    fn generate_presigned_url(
        &self,
        request: PresignedUrlRequest,
    ) -> impl Future<Output = Result<String, StorageError>> + Send {
        let result = self.generate_presigned_url.invoke(request);
        async move { result }
    }

    fn upload_file(
        &self,
        upload: FileUpload,
    ) -> impl Future<Output = Result<UploadedFile, StorageError>> + Send {
        let result = self.upload_file.invoke(upload);
        async move { result }
    }

    fn copy_file(
        &self,
        source_key: &str,
        destination_key: &str,
    ) -> impl Future<Output = Result<StorageAck, StorageError>> + Send {
        let result = self.copy_file.invoke(CopyFileCall {
            source_key: source_key.to_string(),
            destination_key: destination_key.to_string(),
        });
        async move { result }
    }

    fn delete_file(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<StorageAck, StorageError>> + Send {
        let result = self.delete_file.invoke(key.to_string());
        async move { result }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_responses() {
        let store = MockBlobStore::new();

        let url = store
            .generate_presigned_url(PresignedUrlRequest::get("key1"))
            .await
            .unwrap();
        assert_eq!(url, "https://s3.example.com/file");

        let uploaded = store
            .upload_file(FileUpload::new("application/pdf", b"%PDF-1.7".to_vec()))
            .await
            .unwrap();
        assert_eq!(
            uploaded,
            UploadedFile {
                key: "test-file-key".to_string()
            }
        );

        let copied = store.copy_file("a", "b").await.unwrap();
        assert!(copied.success);

        let deleted = store.delete_file("key1").await.unwrap();
        assert!(deleted.success);
    }

    #[tokio::test]
    async fn test_upload_ignores_requested_key() {
        let store = MockBlobStore::new();
        let upload = FileUpload::new("text/csv", "a,b\n1,2").with_key("exports/form-1.csv");

        let uploaded = store.upload_file(upload.clone()).await.unwrap();
        assert_eq!(uploaded.key, "test-file-key");
        assert_eq!(store.upload_file.last_call(), Some(upload));
    }

    #[tokio::test]
    async fn test_records_copy_and_delete_arguments() {
        let store = MockBlobStore::new();

        store
            .copy_file("forms/1/logo.png", "forms/2/logo.png")
            .await
            .unwrap();
        store.delete_file("key1").await.unwrap();
        store.delete_file("key2").await.unwrap();

        assert_eq!(
            store.copy_file.calls(),
            vec![CopyFileCall {
                source_key: "forms/1/logo.png".to_string(),
                destination_key: "forms/2/logo.png".to_string(),
            }]
        );
        assert_eq!(
            store.deleted_keys(),
            vec!["key1".to_string(), "key2".to_string()]
        );
    }

    #[tokio::test]
    async fn test_delete_rejection_reaches_caller() {
        let store = MockBlobStore::new();
        let error = StorageError::AccessDenied("key1".to_string());
        store.delete_file.rejects(error.clone());

        let result = store.delete_file("key1").await;
        assert_eq!(result, Err(error));
        assert_eq!(store.deleted_keys(), vec!["key1".to_string()]);
    }

    #[tokio::test]
    async fn test_presigned_url_computed_from_request() {
        let store = MockBlobStore::new();
        store
            .generate_presigned_url
            .responds_with(|request: &PresignedUrlRequest| {
                Ok(format!(
                    "https://s3.example.com/{}?ttl={}",
                    request.key,
                    request.expires_in.num_seconds()
                ))
            });

        let url = store
            .generate_presigned_url(PresignedUrlRequest::put("uploads/a.png"))
            .await
            .unwrap();
        assert_eq!(url, "https://s3.example.com/uploads/a.png?ttl=900");
    }

    #[tokio::test]
    async fn test_from_config_and_reset() {
        let store = MockBlobStore::from_config(&MockStorageConfig {
            presigned_url: "http://localhost:9000/bucket/file".to_string(),
            file_key: "fixture-key".to_string(),
        });
        store
            .upload_file
            .rejects(StorageError::Backend("quota exceeded".to_string()));
        assert!(
            store
                .upload_file(FileUpload::new("text/plain", "x"))
                .await
                .is_err()
        );

        store.reset();
        assert_eq!(store.upload_file.call_count(), 0);
        let uploaded = store
            .upload_file(FileUpload::new("text/plain", "x"))
            .await
            .unwrap();
        assert_eq!(uploaded.key, "fixture-key");
        assert_eq!(
            store
                .generate_presigned_url(PresignedUrlRequest::get("k"))
                .await
                .unwrap(),
            "http://localhost:9000/bucket/file"
        );
    }
}
