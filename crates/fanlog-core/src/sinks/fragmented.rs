//! Fragmented file sink: time-bucketed files with no rotation timer

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::config::fragment_path;
use crate::fs::FileSystem;
use crate::time::format_instant;
use crate::types::{TimeFormat, TimeZoneKind};

use super::error::{SinkError, SinkResult};
use super::traits::{SinkKind, SinkWriter};

/// Where a fragment goes and how it is named
///
/// `at` is the instant of the log call the write belongs to, the same one
/// the line's timestamp was rendered from, so a write that waits in the queue
/// across a bucket boundary still lands in its call's bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentTarget {
    pub folder: PathBuf,
    /// Layout that turns `at` into a file name
    pub name_format: TimeFormat,
    pub zone: TimeZoneKind,
    pub at: DateTime<Utc>,
}

impl FragmentTarget {
    pub fn new(
        folder: impl Into<PathBuf>,
        name_format: TimeFormat,
        zone: TimeZoneKind,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            folder: folder.into(),
            name_format,
            zone,
            at,
        }
    }

    /// `folder/<formatted at>.log`
    pub fn path(&self) -> PathBuf {
        let bucket = format_instant(self.at, &self.name_format, self.zone);
        fragment_path(&self.folder, &bucket)
    }
}

/// Appends each line to `folder/<formatted call instant>.log`
///
/// The path is derived on every write, so a new file starts whenever the
/// formatted instant changes (daily files with `DATE`, hourly with
/// `DATE_HOUR`, ...).
#[derive(Clone)]
pub struct FragmentedFileSink {
    fs: Arc<dyn FileSystem>,
}

impl FragmentedFileSink {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }
}

impl std::fmt::Debug for FragmentedFileSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FragmentedFileSink").finish_non_exhaustive()
    }
}

impl SinkWriter for FragmentedFileSink {
    type Target = FragmentTarget;

    fn kind(&self) -> SinkKind {
        SinkKind::Fragmented
    }

    fn write(&self, target: &FragmentTarget, text: &str) -> SinkResult<()> {
        let path = target.path();
        self.fs
            .append(&path, text)
            .map_err(|e| SinkError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MemoryFileSystem;
    use chrono::{Duration, TimeZone};

    fn morning() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap()
    }

    fn target_at(at: DateTime<Utc>) -> FragmentTarget {
        FragmentTarget::new("frag", TimeFormat::Date, TimeZoneKind::Utc, at)
    }

    #[test]
    fn test_same_bucket_same_file() {
        let fs = Arc::new(MemoryFileSystem::new());
        let sink = FragmentedFileSink::new(fs.clone());

        sink.write(&target_at(morning()), "morning\n").unwrap();
        sink.write(&target_at(morning() + Duration::hours(10)), "evening\n")
            .unwrap();

        assert_eq!(fs.paths(), vec![PathBuf::from("frag/2024-05-01.log")]);
        assert_eq!(
            fs.read(&PathBuf::from("frag/2024-05-01.log")),
            Some("morning\nevening\n".to_string())
        );
    }

    #[test]
    fn test_new_bucket_new_file() {
        let fs = Arc::new(MemoryFileSystem::new());
        let sink = FragmentedFileSink::new(fs.clone());

        let first = target_at(morning());
        let second = target_at(morning() + Duration::days(1));
        sink.write(&first, "day one\n").unwrap();
        sink.write(&second, "day two\n").unwrap();

        assert_ne!(first.path(), second.path());
        assert_eq!(fs.len(), 2);
        assert_eq!(second.path(), PathBuf::from("frag/2024-05-02.log"));
    }

    #[test]
    fn test_hourly_buckets() {
        let target = FragmentTarget::new(
            "frag",
            TimeFormat::DateHour,
            TimeZoneKind::Utc,
            morning() + Duration::minutes(59),
        );
        let next = FragmentTarget {
            at: morning() + Duration::minutes(61),
            ..target.clone()
        };
        assert_ne!(target.path(), next.path());
    }
}
