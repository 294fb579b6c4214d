use std::path::PathBuf;

use thiserror::Error;

use crate::model::ids::Region;

pub const DEFAULT_QUEUE_TYPE: &str = "RANKED_SOLO_5x5";
pub const DEFAULT_HOST_TEMPLATE: &str = "https://{region}.api.riotgames.com";
pub const DEFAULT_DATA_DIR: &str = "data";

const PROCESSED_DIR: &str = "processed";
const INTERIM_DIR: &str = "interim";

/// Settings for talking to the Riot API, passed to the client at construction.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub queue_type: String,
    /// Base URL of the platform host, `{region}` is replaced by the requested region.
    pub host_template: String,
    /// Read the league document from this file instead of requesting it.
    pub local_file: Option<PathBuf>,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            queue_type: DEFAULT_QUEUE_TYPE.to_string(),
            host_template: DEFAULT_HOST_TEMPLATE.to_string(),
            local_file: None,
        }
    }

    pub fn with_queue_type(mut self, queue_type: impl Into<String>) -> Self {
        self.queue_type = queue_type.into();
        self
    }

    pub fn with_host_template(mut self, host_template: impl Into<String>) -> Self {
        self.host_template = host_template.into();
        self
    }

    pub fn with_local_file(mut self, local_file: Option<PathBuf>) -> Self {
        self.local_file = local_file;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.local_file.is_none() && self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        if self.queue_type.trim().is_empty() {
            return Err(ConfigError::MissingQueueType);
        }
        if !(self.host_template.starts_with("http://") || self.host_template.starts_with("https://")) {
            return Err(ConfigError::InvalidHostTemplate(self.host_template.clone()));
        }
        Ok(())
    }

    pub fn host_for(&self, region: &Region) -> String {
        self.host_template
            .replace("{region}", region.as_str())
            .trim_end_matches('/')
            .to_string()
    }
}

/// Output locations below the data directory.
#[derive(Debug, Clone)]
pub struct DataDirs {
    root: PathBuf,
}

impl DataDirs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn processed(&self) -> PathBuf {
        self.root.join(PROCESSED_DIR)
    }

    pub fn interim(&self) -> PathBuf {
        self.root.join(INTERIM_DIR)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No API key configured, pass --api-key or set RIOT_API_KEY")]
    MissingApiKey,
    #[error("Queue type must not be empty")]
    MissingQueueType,
    #[error("Host template {0:?} must start with http:// or https://")]
    InvalidHostTemplate(String),
}
