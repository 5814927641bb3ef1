//! Logger configuration and the sources it can be loaded from
//!
//! - `LogConfiguration`: every enable/format/path setting
//! - `MemoryConfigurationSource`: In-memory for testing
//! - `FileConfigurationSource`: YAML file-based

mod configuration;
mod traits;
mod memory;
mod file;

pub use configuration::{
    fragment_path, LogConfiguration, DEFAULT_COLLECTIVIZATION_FILE_NAME, DEFAULT_LOG_FOLDER,
    FRAGMENT_EXTENSION,
};
pub use traits::{ConfigError, ConfigResult, ConfigurationSource};
pub use memory::MemoryConfigurationSource;
pub use file::FileConfigurationSource;
