//! Timestamp rendering

use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, Utc};
use parking_lot::Mutex;

use crate::types::{TimeFormat, TimeZoneKind};

/// Returned when a custom pattern cannot be rendered
pub const INVALID_TIME_FORMAT: &str = "INVALID_TIME_FORMAT";

/// Source of "now", rendered into strings
///
/// Implementations:
/// - `SystemTimeFormatter`: the wall clock
/// - `ManualTimeFormatter`: a settable instant for tests
pub trait TimeFormatter: Send + Sync {
    /// Current instant
    fn now(&self) -> DateTime<Utc>;

    /// Render the current instant
    fn format(&self, format: &TimeFormat, zone: TimeZoneKind) -> String {
        format_instant(self.now(), format, zone)
    }
}

/// Render an instant in the given zone and layout
///
/// Never fails: a custom pattern chrono rejects yields [`INVALID_TIME_FORMAT`].
pub fn format_instant(instant: DateTime<Utc>, format: &TimeFormat, zone: TimeZoneKind) -> String {
    match zone {
        TimeZoneKind::Utc => render(&instant, format),
        TimeZoneKind::Local => render(&instant.with_timezone(&Local), format),
    }
}

fn render<Tz>(instant: &DateTime<Tz>, format: &TimeFormat) -> String
where
    Tz: chrono::TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match format {
        TimeFormat::Unix => instant.timestamp().to_string(),
        TimeFormat::UnixMillis => instant.timestamp_millis().to_string(),
        TimeFormat::Rfc2822 => instant.to_rfc2822(),
        other => match other.pattern() {
            Some(pattern) => render_pattern(instant, pattern),
            None => INVALID_TIME_FORMAT.to_string(),
        },
    }
}

fn render_pattern<Tz>(instant: &DateTime<Tz>, pattern: &str) -> String
where
    Tz: chrono::TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return INVALID_TIME_FORMAT.to_string();
    }

    // `DelayedFormat` reports missing fields through fmt::Error, so write
    // instead of `to_string()`.
    let mut out = String::new();
    match write!(out, "{}", instant.format_with_items(items.into_iter())) {
        Ok(()) => out,
        Err(_) => INVALID_TIME_FORMAT.to_string(),
    }
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeFormatter;

impl SystemTimeFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl TimeFormatter for SystemTimeFormatter {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to
///
/// Useful for testing bucketed file names and path stability.
#[derive(Debug)]
pub struct ManualTimeFormatter {
    instant: Mutex<DateTime<Utc>>,
}

impl ManualTimeFormatter {
    /// Create a clock frozen at `instant`
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self {
            instant: Mutex::new(instant),
        }
    }

    /// Jump to an instant
    pub fn set(&self, instant: DateTime<Utc>) {
        *self.instant.lock() = instant;
    }

    /// Move forward by `delta`
    pub fn advance(&self, delta: chrono::Duration) {
        let mut guard = self.instant.lock();
        *guard += delta;
    }
}

impl Default for ManualTimeFormatter {
    fn default() -> Self {
        Self::new(DateTime::<Utc>::default())
    }
}

impl TimeFormatter for ManualTimeFormatter {
    fn now(&self) -> DateTime<Utc> {
        *self.instant.lock()
    }
}
