//! Installed configuration

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use once_cell::sync::OnceCell;

use crate::config::LogConfiguration;
use crate::sinks::FragmentTarget;

/// A configuration as installed by `Logger::setup`
///
/// Holds the collectivized file path, resolved once at install time and
/// stable for the lifetime of this configuration.
#[derive(Debug)]
pub(crate) struct ActiveConfiguration {
    pub(crate) configuration: LogConfiguration,
    collectivization_path: OnceCell<PathBuf>,
}

impl ActiveConfiguration {
    pub(crate) fn install(configuration: LogConfiguration) -> Self {
        let active = Self {
            configuration,
            collectivization_path: OnceCell::new(),
        };
        active.collectivization_path();
        active
    }

    pub(crate) fn collectivization_path(&self) -> &PathBuf {
        self.collectivization_path
            .get_or_init(|| self.configuration.collectivization_file_path())
    }

    /// Fragment a call issued at `at` writes to
    pub(crate) fn fragment_target(&self, at: DateTime<Utc>) -> FragmentTarget {
        FragmentTarget::new(
            self.configuration.file_fragmentation_folder_path.clone(),
            self.configuration.file_fragmentation_file_name_format.clone(),
            self.configuration.time_zone,
            at,
        )
    }
}
