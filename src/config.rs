use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::convert::OnFail;
use crate::feed::TRAJECTORY_FEATURE_INDEX;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub airframe: AirframeConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub feed: FeedConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AirframeConfig {
    pub model: Option<String>,
    pub ident: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
        }
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from(".")
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    #[serde(default = "default_feature_index")]
    pub feature_index: usize,
    #[serde(default)]
    pub on_fail: OnFail,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            feature_index: default_feature_index(),
            on_fail: OnFail::default(),
        }
    }
}

fn default_feature_index() -> usize {
    TRAJECTORY_FEATURE_INDEX
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)?;
        Ok(config)
    }
}
