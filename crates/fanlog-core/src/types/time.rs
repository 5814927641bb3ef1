//! Time zone and timestamp format selectors

use serde::{Deserialize, Serialize};

/// Which clock a timestamp is rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeZoneKind {
    #[default]
    Local,
    Utc,
}

impl TimeZoneKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeZoneKind::Local => "LOCAL",
            TimeZoneKind::Utc => "UTC",
        }
    }
}

impl std::fmt::Display for TimeZoneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Timestamp layout
///
/// Used both for the timestamp inside a decorated line and for deriving the
/// file name of a fragmented log file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeFormat {
    /// `2024-05-01T13:45:12.345+02:00`
    Iso8601,
    /// `2024-05-01 13:45:12.345`
    #[default]
    FullTimestamp,
    /// `2024-05-01`
    Date,
    /// `13:45:12`
    Time,
    /// `2024-05-01_13`
    DateHour,
    /// `20240501134512`
    Compact,
    /// `Wed, 1 May 2024 13:45:12 +0200`
    Rfc2822,
    /// Seconds since the epoch
    Unix,
    /// Milliseconds since the epoch
    UnixMillis,
    /// Any strftime pattern
    Custom(String),
}

impl TimeFormat {
    /// strftime pattern backing this format, if it has one
    pub fn pattern(&self) -> Option<&str> {
        match self {
            TimeFormat::Iso8601 => Some("%Y-%m-%dT%H:%M:%S%.3f%:z"),
            TimeFormat::FullTimestamp => Some("%Y-%m-%d %H:%M:%S%.3f"),
            TimeFormat::Date => Some("%Y-%m-%d"),
            TimeFormat::Time => Some("%H:%M:%S"),
            TimeFormat::DateHour => Some("%Y-%m-%d_%H"),
            TimeFormat::Compact => Some("%Y%m%d%H%M%S"),
            TimeFormat::Custom(pattern) => Some(pattern.as_str()),
            TimeFormat::Rfc2822 | TimeFormat::Unix | TimeFormat::UnixMillis => None,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TimeFormat::Iso8601 => "ISO8601",
            TimeFormat::FullTimestamp => "FULL_TIMESTAMP",
            TimeFormat::Date => "DATE",
            TimeFormat::Time => "TIME",
            TimeFormat::DateHour => "DATE_HOUR",
            TimeFormat::Compact => "COMPACT",
            TimeFormat::Rfc2822 => "RFC2822",
            TimeFormat::Unix => "UNIX",
            TimeFormat::UnixMillis => "UNIX_MILLIS",
            TimeFormat::Custom(_) => "CUSTOM",
        }
    }
}

impl std::fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeFormat::Custom(pattern) => write!(f, "CUSTOM({})", pattern),
            other => f.write_str(other.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns() {
        assert_eq!(TimeFormat::Date.pattern(), Some("%Y-%m-%d"));
        assert_eq!(TimeFormat::Unix.pattern(), None);
        assert_eq!(TimeFormat::Custom("%H".into()).pattern(), Some("%H"));
    }

    #[test]
    fn test_display() {
        assert_eq!(TimeFormat::Iso8601.to_string(), "ISO8601");
        assert_eq!(TimeFormat::Custom("%Y".into()).to_string(), "CUSTOM(%Y)");
        assert_eq!(TimeZoneKind::Utc.to_string(), "UTC");
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&TimeFormat::FullTimestamp).unwrap(), "\"FULL_TIMESTAMP\"");
        assert_eq!(serde_json::to_string(&TimeZoneKind::Local).unwrap(), "\"LOCAL\"");

        let custom: TimeFormat = serde_json::from_str(r#"{"CUSTOM":"%Y"}"#).unwrap();
        assert_eq!(custom, TimeFormat::Custom("%Y".into()));
    }
}
