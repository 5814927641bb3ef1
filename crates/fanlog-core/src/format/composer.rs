//! Decorated line builder

use crate::types::LogLevel;

/// Builds the human-readable line shared by every formatted sink
///
/// Layout: `[name] [timestamp] [LEVEL]\t<text>\n`. The `[name] ` part is left
/// out entirely when the name is empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatComposer;

impl FormatComposer {
    pub fn new() -> Self {
        Self
    }

    /// Compose a decorated line
    pub fn compose(&self, text: &str, level: LogLevel, name: &str, timestamp: &str) -> String {
        compose(text, level, name, timestamp)
    }
}

/// Free-function form of [`FormatComposer::compose`]
pub fn compose(text: &str, level: LogLevel, name: &str, timestamp: &str) -> String {
    let label = level.as_str();
    let mut line =
        String::with_capacity(name.len() + timestamp.len() + label.len() + text.len() + 12);

    if !name.is_empty() {
        line.push('[');
        line.push_str(name);
        line.push_str("] ");
    }
    line.push('[');
    line.push_str(timestamp);
    line.push_str("] [");
    line.push_str(label);
    line.push_str("]\t");
    line.push_str(text);
    line.push('\n');
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_with_name() {
        let line = compose("boot ok", LogLevel::Info, "app", "2024-05-01 13:45:12.000");
        assert_eq!(line, "[app] [2024-05-01 13:45:12.000] [INFO]\tboot ok\n");
    }

    #[test]
    fn test_compose_without_name() {
        let line = compose("disk low", LogLevel::Warning, "", "12:00:00");
        assert_eq!(line, "[12:00:00] [WARNING]\tdisk low\n");
    }

    #[test]
    fn test_text_is_not_altered() {
        let text = "multi\nline\twith  spaces ";
        let line = FormatComposer::new().compose(text, LogLevel::Debug, "svc", "t");
        assert_eq!(line, format!("[svc] [t] [DEBUG]\t{}\n", text));
    }
}
