//! Per-call flag merge
//!
//! Every flag that governs a call is the OR of the per-call override, the
//! instance configuration and, for umbrella flags, the flags they cover.

use std::path::PathBuf;

use crate::config::LogConfiguration;
use crate::sinks::SinkKind;

/// OR-merge one flag
///
/// `implied` lists the effective flags that switch this one on by themselves.
pub fn resolve(override_flag: bool, instance_flag: bool, implied: &[bool]) -> bool {
    override_flag || instance_flag || implied.iter().any(|flag| *flag)
}

/// Effective enable and format flags of one sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SinkFlags {
    pub enabled: bool,
    pub formatted: bool,
}

impl SinkFlags {
    pub fn new(enabled: bool, formatted: bool) -> Self {
        Self { enabled, formatted }
    }

    /// Enabled and asking for the decorated line
    pub fn wants_decoration(&self) -> bool {
        self.enabled && self.formatted
    }
}

/// The merged flags governing one call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EffectiveFlags {
    /// Master switch; not implied by any sink
    pub enabled: bool,
    /// Umbrella format flag
    pub formatted: bool,
    pub console: SinkFlags,
    /// Umbrella over the three file strategies
    pub file: SinkFlags,
    pub collectivization: SinkFlags,
    pub fragmentation: SinkFlags,
    pub custom: SinkFlags,
}

impl EffectiveFlags {
    /// Merge a per-call override with the instance configuration
    pub fn resolve(overrides: &LogConfiguration, instance: &LogConfiguration) -> Self {
        let console = SinkFlags::new(
            resolve(overrides.is_console_enabled, instance.is_console_enabled, &[]),
            resolve(overrides.is_console_format_enabled, instance.is_console_format_enabled, &[]),
        );

        let collectivization = SinkFlags::new(
            resolve(
                overrides.is_file_collectivization_enabled,
                instance.is_file_collectivization_enabled,
                &[],
            ),
            resolve(
                overrides.is_file_collectivization_format_enabled,
                instance.is_file_collectivization_format_enabled,
                &[],
            ),
        );

        let fragmentation = SinkFlags::new(
            resolve(
                overrides.is_file_fragmentation_enabled,
                instance.is_file_fragmentation_enabled,
                &[],
            ),
            resolve(
                overrides.is_file_fragmentation_format_enabled,
                instance.is_file_fragmentation_format_enabled,
                &[],
            ),
        );

        let has_custom_paths = !overrides.file_custom_output_paths.is_empty()
            || !instance.file_custom_output_paths.is_empty();
        let custom = SinkFlags::new(
            resolve(
                overrides.is_file_custom_enabled,
                instance.is_file_custom_enabled,
                &[has_custom_paths],
            ),
            resolve(
                overrides.is_file_custom_format_enabled,
                instance.is_file_custom_format_enabled,
                &[],
            ),
        );

        let file = SinkFlags::new(
            resolve(
                overrides.is_file_enabled,
                instance.is_file_enabled,
                &[collectivization.enabled, fragmentation.enabled, custom.enabled],
            ),
            resolve(
                overrides.is_file_format_enabled,
                instance.is_file_format_enabled,
                &[collectivization.formatted, fragmentation.formatted, custom.formatted],
            ),
        );

        Self {
            enabled: resolve(overrides.is_enabled, instance.is_enabled, &[]),
            formatted: resolve(
                overrides.is_format_enabled,
                instance.is_format_enabled,
                &[console.formatted, file.formatted],
            ),
            console,
            file,
            collectivization,
            fragmentation,
            custom,
        }
    }

    /// Flags of one delivery sink
    pub fn sink(&self, kind: SinkKind) -> SinkFlags {
        match kind {
            SinkKind::Console => self.console,
            SinkKind::Collectivized => self.collectivization,
            SinkKind::Fragmented => self.fragmentation,
            SinkKind::Custom => self.custom,
        }
    }

    /// Sinks that fire for this call, in dispatch order
    pub fn active_sinks(&self) -> Vec<SinkKind> {
        if !self.enabled {
            return Vec::new();
        }
        [
            SinkKind::Console,
            SinkKind::Collectivized,
            SinkKind::Fragmented,
            SinkKind::Custom,
        ]
        .into_iter()
        .filter(|kind| self.sink(*kind).enabled)
        .collect()
    }

    /// Whether any firing sink needs the decorated line
    pub fn needs_decoration(&self) -> bool {
        self.active_sinks()
            .into_iter()
            .any(|kind| self.sink(kind).wants_decoration())
    }
}

/// Name for one call: the override's when set, else the instance's
pub fn merged_name<'a>(overrides: &'a LogConfiguration, instance: &'a LogConfiguration) -> &'a str {
    if overrides.name.is_empty() {
        &instance.name
    } else {
        &overrides.name
    }
}

/// Custom paths for one call: the instance list, then override paths it lacks
pub fn merged_custom_paths(overrides: &LogConfiguration, instance: &LogConfiguration) -> Vec<PathBuf> {
    let mut paths = instance.file_custom_output_paths.clone();
    for path in &overrides.file_custom_output_paths {
        if !paths.contains(path) {
            paths.push(path.clone());
        }
    }
    paths
}
