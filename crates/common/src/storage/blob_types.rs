use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Default lifetime of a presigned URL: 15 minutes
const DEFAULT_PRESIGNED_EXPIRY_MINUTES: i64 = 15;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresignedMethod {
    Get,
    Put,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PresignedUrlRequest {
    pub key: String,
    pub method: PresignedMethod,
    #[serde(rename = "expires_in_ms", with = "duration_millis")]
    pub expires_in: Duration,
}

impl PresignedUrlRequest {
    /// Download URL for `key` with the default expiry
    pub fn get(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            method: PresignedMethod::Get,
            expires_in: Duration::minutes(DEFAULT_PRESIGNED_EXPIRY_MINUTES),
        }
    }

    /// Upload URL for `key` with the default expiry
    pub fn put(key: impl Into<String>) -> Self {
        Self {
            method: PresignedMethod::Put,
            ..Self::get(key)
        }
    }

    pub fn with_expiry(self, expires_in: Duration) -> Self {
        Self { expires_in, ..self }
    }
}

/// Durations travel as whole milliseconds. Out-of-range values fail to deserialize.
mod duration_millis {
    use chrono::Duration;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(duration.num_milliseconds())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let millis = i64::deserialize(deserializer)?;
        Duration::try_milliseconds(millis)
            .ok_or_else(|| D::Error::custom(format!("expiry out of range: {millis} ms")))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FileUpload {
    /// Requested object key. The store assigns one when absent.
    pub key: Option<String>,
    pub content_type: String,
    pub body: Vec<u8>,
}

impl FileUpload {
    pub fn new(content_type: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            key: None,
            content_type: content_type.into(),
            body: body.into(),
        }
    }

    pub fn with_key(self, key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            ..self
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub key: String,
}

/// Acknowledgement returned by copy and delete
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageAck {
    pub success: bool,
}

impl StorageAck {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presigned_request_defaults() {
        let request = PresignedUrlRequest::get("key1");
        assert_eq!(request.method, PresignedMethod::Get);
        assert_eq!(request.expires_in, Duration::minutes(15));

        let request =
            PresignedUrlRequest::put("key1").with_expiry(Duration::milliseconds(1500));
        assert_eq!(request.method, PresignedMethod::Put);
        assert_eq!(request.key, "key1");
        assert_eq!(request.expires_in, Duration::milliseconds(1500));
    }

    #[test]
    fn test_presigned_request_expiry_wire_format() {
        let request = PresignedUrlRequest::get("k").with_expiry(Duration::seconds(30));
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["expires_in_ms"], 30_000);

        let parsed: PresignedUrlRequest = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, request);
    }

    #[test]
    fn test_presigned_request_rejects_out_of_range_expiry() {
        let result = serde_json::from_str::<PresignedUrlRequest>(
            r#"{"key":"k","method":"Get","expires_in_ms":-9223372036854775808}"#,
        );
        let err = result.unwrap_err();
        assert!(err.to_string().contains("expiry out of range"));

        // The largest representable value still parses
        let parsed: PresignedUrlRequest = serde_json::from_str(
            r#"{"key":"k","method":"Get","expires_in_ms":9223372036854775807}"#,
        )
        .unwrap();
        assert_eq!(parsed.expires_in.num_milliseconds(), i64::MAX);
    }

    #[test]
    fn test_storage_ack_wire_shape() {
        let json = serde_json::to_value(StorageAck::ok()).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true }));

        let json = serde_json::to_value(UploadedFile {
            key: "test-file-key".to_string(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "key": "test-file-key" }));
    }
}
