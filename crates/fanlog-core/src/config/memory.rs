//! In-memory configuration source

use async_trait::async_trait;
use parking_lot::RwLock;

use super::configuration::LogConfiguration;
use super::traits::{ConfigResult, ConfigurationSource};

/// In-memory configuration source for testing
#[derive(Debug, Default)]
pub struct MemoryConfigurationSource {
    configuration: RwLock<LogConfiguration>,
}

impl MemoryConfigurationSource {
    /// Create a source holding the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source holding `configuration`
    pub fn with_configuration(configuration: LogConfiguration) -> Self {
        Self {
            configuration: RwLock::new(configuration),
        }
    }

    /// Replace the held configuration directly
    pub fn set(&self, configuration: LogConfiguration) {
        *self.configuration.write() = configuration;
    }
}

#[async_trait]
impl ConfigurationSource for MemoryConfigurationSource {
    fn name(&self) -> &str {
        "memory"
    }

    async fn load(&self) -> ConfigResult<LogConfiguration> {
        Ok(self.configuration.read().clone())
    }

    async fn store(&self, configuration: &LogConfiguration) -> ConfigResult<()> {
        self.set(configuration.clone());
        Ok(())
    }
}
