//! Logger configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::{TimeFormat, TimeZoneKind};

/// Default file name of the collectivized log file
pub const DEFAULT_COLLECTIVIZATION_FILE_NAME: &str = "fanlog.log";

/// Default folder for both the collectivized and the fragmented files
pub const DEFAULT_LOG_FOLDER: &str = "logs";

/// Extension appended to every fragmented file name
pub const FRAGMENT_EXTENSION: &str = "log";

/// Every enable/format/path setting of a logger
///
/// The same type serves two roles:
/// - the instance configuration installed with `Logger::setup`
/// - the per-call override passed to `Logger::log`, whose flags are OR-ed
///   with the instance flags (see `logger::EffectiveFlags`)
///
/// `LogConfiguration::default()` is the instance default (console on and
/// formatted, files off). `LogConfiguration::none()` has every flag off and is
/// the neutral override.
///
/// # Example
///
/// ```
/// use fanlog_core::config::LogConfiguration;
///
/// let config = LogConfiguration::default()
///     .with_name("app")
///     .with_collectivization(true, true)
///     .with_collectivization_file("/var/log/app", "app.log");
///
/// assert_eq!(
///     config.collectivization_file_path(),
///     std::path::PathBuf::from("/var/log/app/app.log")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfiguration {
    /// Written as `[name] ` in front of decorated lines; omitted when empty
    pub name: String,

    /// Master switch
    pub is_enabled: bool,
    /// Umbrella format flag, implied by any sink format flag
    pub is_format_enabled: bool,
    pub time_zone: TimeZoneKind,
    /// Layout of the timestamp inside decorated lines
    pub time_format: TimeFormat,

    pub is_console_enabled: bool,
    pub is_console_format_enabled: bool,

    /// Umbrella file flag, implied by any of the three file strategies
    pub is_file_enabled: bool,
    /// Umbrella file format flag, implied by any file strategy format flag
    pub is_file_format_enabled: bool,

    pub is_file_collectivization_enabled: bool,
    pub is_file_collectivization_format_enabled: bool,
    pub file_collectivization_file_name: String,
    pub file_collectivization_folder_path: PathBuf,

    pub is_file_fragmentation_enabled: bool,
    pub is_file_fragmentation_format_enabled: bool,
    /// Layout used to derive a fragment file name from the current time
    pub file_fragmentation_file_name_format: TimeFormat,
    pub file_fragmentation_folder_path: PathBuf,

    /// A non-empty `file_custom_output_paths` enables the custom sink even
    /// when this flag is false
    pub is_file_custom_enabled: bool,
    pub is_file_custom_format_enabled: bool,
    pub file_custom_output_paths: Vec<PathBuf>,
}

impl Default for LogConfiguration {
    fn default() -> Self {
        Self {
            name: String::new(),
            is_enabled: true,
            is_format_enabled: true,
            time_zone: TimeZoneKind::Local,
            time_format: TimeFormat::FullTimestamp,
            is_console_enabled: true,
            is_console_format_enabled: true,
            is_file_enabled: false,
            is_file_format_enabled: false,
            is_file_collectivization_enabled: false,
            is_file_collectivization_format_enabled: false,
            file_collectivization_file_name: DEFAULT_COLLECTIVIZATION_FILE_NAME.to_string(),
            file_collectivization_folder_path: PathBuf::from(DEFAULT_LOG_FOLDER),
            is_file_fragmentation_enabled: false,
            is_file_fragmentation_format_enabled: false,
            file_fragmentation_file_name_format: TimeFormat::Date,
            file_fragmentation_folder_path: PathBuf::from(DEFAULT_LOG_FOLDER),
            is_file_custom_enabled: false,
            is_file_custom_format_enabled: false,
            file_custom_output_paths: Vec::new(),
        }
    }
}

impl LogConfiguration {
    /// Create the instance default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with every flag off and no paths
    ///
    /// OR-merging it with an instance configuration changes nothing, which
    /// makes it the neutral per-call override.
    pub fn none() -> Self {
        Self {
            is_enabled: false,
            is_format_enabled: false,
            is_console_enabled: false,
            is_console_format_enabled: false,
            file_collectivization_file_name: String::new(),
            file_collectivization_folder_path: PathBuf::new(),
            file_fragmentation_folder_path: PathBuf::new(),
            ..Self::default()
        }
    }

    /// Set the name printed in front of decorated lines
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the master switch
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.is_enabled = enabled;
        self
    }

    /// Set the umbrella format flag
    pub fn with_format(mut self, formatted: bool) -> Self {
        self.is_format_enabled = formatted;
        self
    }

    pub fn with_time_zone(mut self, zone: TimeZoneKind) -> Self {
        self.time_zone = zone;
        self
    }

    pub fn with_time_format(mut self, format: TimeFormat) -> Self {
        self.time_format = format;
        self
    }

    /// Enable/disable the console sink and its formatting
    pub fn with_console(mut self, enabled: bool, formatted: bool) -> Self {
        self.is_console_enabled = enabled;
        self.is_console_format_enabled = formatted;
        self
    }

    /// Set the umbrella file flags
    pub fn with_file(mut self, enabled: bool, formatted: bool) -> Self {
        self.is_file_enabled = enabled;
        self.is_file_format_enabled = formatted;
        self
    }

    /// Enable/disable the collectivized file and its formatting
    pub fn with_collectivization(mut self, enabled: bool, formatted: bool) -> Self {
        self.is_file_collectivization_enabled = enabled;
        self.is_file_collectivization_format_enabled = formatted;
        self
    }

    /// Set where the collectivized file lives
    pub fn with_collectivization_file(
        mut self,
        folder: impl Into<PathBuf>,
        file_name: impl Into<String>,
    ) -> Self {
        self.file_collectivization_folder_path = folder.into();
        self.file_collectivization_file_name = file_name.into();
        self
    }

    /// Enable/disable the fragmented files and their formatting
    pub fn with_fragmentation(mut self, enabled: bool, formatted: bool) -> Self {
        self.is_file_fragmentation_enabled = enabled;
        self.is_file_fragmentation_format_enabled = formatted;
        self
    }

    /// Set the fragment folder and the time layout that names each fragment
    pub fn with_fragmentation_file(
        mut self,
        folder: impl Into<PathBuf>,
        name_format: TimeFormat,
    ) -> Self {
        self.file_fragmentation_folder_path = folder.into();
        self.file_fragmentation_file_name_format = name_format;
        self
    }

    /// Enable/disable the custom files and their formatting
    pub fn with_custom(mut self, enabled: bool, formatted: bool) -> Self {
        self.is_file_custom_enabled = enabled;
        self.is_file_custom_format_enabled = formatted;
        self
    }

    /// Replace the custom output paths
    pub fn with_custom_paths<P: Into<PathBuf>>(mut self, paths: impl IntoIterator<Item = P>) -> Self {
        self.file_custom_output_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Append one custom output path
    pub fn add_custom_path(&mut self, path: impl Into<PathBuf>) {
        self.file_custom_output_paths.push(path.into());
    }

    /// Collectivized file path: folder joined with the fixed file name
    pub fn collectivization_file_path(&self) -> PathBuf {
        self.file_collectivization_folder_path
            .join(&self.file_collectivization_file_name)
    }

    /// Fragment path for an already formatted time bucket
    pub fn fragmentation_file_path(&self, bucket: &str) -> PathBuf {
        fragment_path(&self.file_fragmentation_folder_path, bucket)
    }
}

/// `folder/<bucket>.log`
pub fn fragment_path(folder: &Path, bucket: &str) -> PathBuf {
    folder.join(format!("{}.{}", bucket, FRAGMENT_EXTENSION))
}
