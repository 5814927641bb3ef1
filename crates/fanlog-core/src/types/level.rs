//! Log levels

use serde::{Deserialize, Serialize};

/// Severity label attached to a log line
///
/// Levels only select the label written into a decorated line. No level is
/// ever filtered out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    All,
    Info,
    Debug,
    Warning,
    Success,
    Critical,
    Exception,
    HighlightedInfo,
}

impl LogLevel {
    /// Every level, in declaration order
    pub const ALL_LEVELS: [LogLevel; 8] = [
        LogLevel::All,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Warning,
        LogLevel::Success,
        LogLevel::Critical,
        LogLevel::Exception,
        LogLevel::HighlightedInfo,
    ];

    /// Label written between brackets in a decorated line
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::All => "ALL",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Warning => "WARNING",
            LogLevel::Success => "SUCCESS",
            LogLevel::Critical => "CRITICAL",
            LogLevel::Exception => "EXCEPTION",
            LogLevel::HighlightedInfo => "HIGHLIGHTED_INFO",
        }
    }

    /// Parse a label back into a level (case insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        let upper = name.trim().to_uppercase();
        Self::ALL_LEVELS
            .iter()
            .copied()
            .find(|level| level.as_str() == upper)
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_labels() {
        assert_eq!(LogLevel::Info.to_string(), "INFO");
        assert_eq!(LogLevel::HighlightedInfo.to_string(), "HIGHLIGHTED_INFO");
        assert_eq!(LogLevel::Exception.as_str(), "EXCEPTION");
    }

    #[test]
    fn test_from_name() {
        assert_eq!(LogLevel::from_name("warning"), Some(LogLevel::Warning));
        assert_eq!(LogLevel::from_name(" Critical "), Some(LogLevel::Critical));
        assert_eq!(LogLevel::from_name("trace"), None);

        for level in LogLevel::ALL_LEVELS {
            assert_eq!(LogLevel::from_name(level.as_str()), Some(level));
        }
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&LogLevel::HighlightedInfo).unwrap();
        assert_eq!(json, "\"HIGHLIGHTED_INFO\"");
    }
}
