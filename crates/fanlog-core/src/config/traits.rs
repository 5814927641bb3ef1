//! Configuration source trait

use async_trait::async_trait;

use super::configuration::LogConfiguration;

/// Somewhere a `LogConfiguration` can be loaded from and stored to
///
/// Implementations:
/// - `MemoryConfigurationSource`: In-memory for testing
/// - `FileConfigurationSource`: YAML file (~/.config/fanlog/logging.yaml)
#[async_trait]
pub trait ConfigurationSource: Send + Sync {
    /// Human-readable name of this source
    fn name(&self) -> &str;

    /// Load the configuration
    async fn load(&self) -> ConfigResult<LogConfiguration>;

    /// Persist a configuration
    async fn store(&self, configuration: &LogConfiguration) -> ConfigResult<()>;
}

/// Errors that can occur while loading or storing a configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(String),

    #[error("Configuration error: {0}")]
    Other(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
