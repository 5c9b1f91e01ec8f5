use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// Canned values handed out by the collaborator doubles
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct DoublesConfig {
    #[serde(default)]
    pub email: MockEmailConfig,

    #[serde(default)]
    pub storage: MockStorageConfig,
}

impl DoublesConfig {
    /// Load configuration from multiple sources in order of priority:
    /// 1. Configuration file (doubles.toml, doubles.yaml, doubles.json)
    /// 2. Environment variables (prefixed with FORMHUB_DOUBLES__)
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name("doubles").required(false))
            .add_source(Environment::with_prefix("FORMHUB_DOUBLES").separator("__"))
            .build()?;

        let doubles_config: Self = config.try_deserialize()?;

        doubles_config.validate()?;

        Ok(doubles_config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name(path))
            .add_source(Environment::with_prefix("FORMHUB_DOUBLES").separator("__"))
            .build()?;

        let doubles_config: Self = config.try_deserialize()?;

        doubles_config.validate()?;

        Ok(doubles_config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.email.validate()?;
        self.storage.validate()?;
        Ok(())
    }
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct MockEmailConfig {
    /// Message id reported by `send_email`. None reports no id.
    #[serde(default)]
    pub message_id: Option<String>,
}

impl MockEmailConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.message_id {
            Some(id) if id.trim().is_empty() => Err(ConfigError::Message(
                "Mock email message_id cannot be blank".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MockStorageConfig {
    /// URL returned by `generate_presigned_url`
    #[serde(default = "default_presigned_url")]
    pub presigned_url: String,

    /// Key returned by `upload_file`
    #[serde(default = "default_file_key")]
    pub file_key: String,
}

impl Default for MockStorageConfig {
    fn default() -> Self {
        Self {
            presigned_url: default_presigned_url(),
            file_key: default_file_key(),
        }
    }
}

impl MockStorageConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let host = self
            .presigned_url
            .strip_prefix("https://")
            .or_else(|| self.presigned_url.strip_prefix("http://"))
            .map(|rest| rest.split(['/', '?', '#']).next().unwrap_or_default());

        match host {
            None => {
                return Err(ConfigError::Message(format!(
                    "Mock presigned_url must be an http(s) URL: {:?}",
                    self.presigned_url
                )));
            }
            Some("") => {
                return Err(ConfigError::Message(format!(
                    "Mock presigned_url has no host: {:?}",
                    self.presigned_url
                )));
            }
            Some(_) => {}
        }

        if self.file_key.is_empty() {
            return Err(ConfigError::Message(
                "Mock file_key cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

pub const DEFAULT_PRESIGNED_URL: &str = "https://s3.example.com/file";
pub const DEFAULT_FILE_KEY: &str = "test-file-key";

fn default_presigned_url() -> String {
    DEFAULT_PRESIGNED_URL.to_string()
}

fn default_file_key() -> String {
    DEFAULT_FILE_KEY.to_string()
}
