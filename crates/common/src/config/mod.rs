mod doubles_config;

pub use doubles_config::{
    DEFAULT_FILE_KEY, DEFAULT_PRESIGNED_URL, DoublesConfig, MockEmailConfig, MockStorageConfig,
};
