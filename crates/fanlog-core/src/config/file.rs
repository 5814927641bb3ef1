//! File-based configuration source (YAML)
//!
//! The user-level file lives at `<config dir>/fanlog/logging.yaml`.

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use parking_lot::RwLock;

use super::configuration::LogConfiguration;
use super::traits::{ConfigError, ConfigResult, ConfigurationSource};

/// YAML file holding a `LogConfiguration`
///
/// A missing file loads as `LogConfiguration::default()`. Fields absent from
/// the file keep their default values.
///
/// # Example
///
/// ```no_run
/// use fanlog_core::config::FileConfigurationSource;
///
/// let user = FileConfigurationSource::user();
/// let project = FileConfigurationSource::new("/srv/app/logging.yaml");
/// ```
pub struct FileConfigurationSource {
    path: PathBuf,
    cache: RwLock<Option<LogConfiguration>>,
}

impl FileConfigurationSource {
    /// Create a source for a specific path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: RwLock::new(None),
        }
    }

    /// User-level source (~/.config/fanlog/logging.yaml)
    pub fn user() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        Self::new(config_dir.join("fanlog").join("logging.yaml"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn read(&self) -> ConfigResult<LogConfiguration> {
        if !self.path.exists() {
            return Ok(LogConfiguration::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(LogConfiguration::default());
        }

        serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::Yaml(format!("Failed to parse {}: {}", self.path.display(), e)))
    }

    fn write(&self, configuration: &LogConfiguration) -> ConfigResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_yaml::to_string(configuration)
            .map_err(|e| ConfigError::Yaml(format!("Failed to serialize configuration: {}", e)))?;
        fs::write(&self.path, content)?;

        *self.cache.write() = Some(configuration.clone());
        Ok(())
    }

    fn cached(&self) -> ConfigResult<LogConfiguration> {
        if let Some(configuration) = self.cache.read().as_ref() {
            return Ok(configuration.clone());
        }

        let configuration = self.read()?;
        *self.cache.write() = Some(configuration.clone());
        Ok(configuration)
    }

    /// Re-read the file, dropping the cached copy
    pub fn reload(&self) -> ConfigResult<LogConfiguration> {
        let configuration = self.read()?;
        *self.cache.write() = Some(configuration.clone());
        Ok(configuration)
    }

    /// Export the current configuration as pretty JSON
    pub fn export_json(&self) -> ConfigResult<String> {
        let configuration = self.cached()?;
        Ok(serde_json::to_string_pretty(&configuration)?)
    }

    /// Replace the file contents with a JSON-encoded configuration
    pub fn import_json(&self, json: &str) -> ConfigResult<()> {
        let configuration: LogConfiguration = serde_json::from_str(json)?;
        self.write(&configuration)
    }
}

impl std::fmt::Debug for FileConfigurationSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileConfigurationSource")
            .field("path", &self.path)
            .field("exists", &self.exists())
            .finish()
    }
}

#[async_trait]
impl ConfigurationSource for FileConfigurationSource {
    fn name(&self) -> &str {
        "file"
    }

    async fn load(&self) -> ConfigResult<LogConfiguration> {
        self.cached()
    }

    async fn store(&self, configuration: &LogConfiguration) -> ConfigResult<()> {
        self.write(configuration)
    }
}
