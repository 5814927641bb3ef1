//! Sink trait definition

use super::error::SinkResult;

/// Identifies one of the four delivery strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SinkKind {
    Console,
    Collectivized,
    Fragmented,
    Custom,
}

impl SinkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SinkKind::Console => "console",
            SinkKind::Collectivized => "collectivized",
            SinkKind::Fragmented => "fragmented",
            SinkKind::Custom => "custom",
        }
    }
}

impl std::fmt::Display for SinkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A write strategy for one destination
///
/// Every sink is append-only: it never truncates and never reads back what
/// it wrote. Re-invoking `write` appends the text again.
///
/// `Target` is whatever the sink needs to find its destination for one write:
/// nothing for the console, a fixed path for the collectivized file, a folder
/// and time layout for fragments, a list of paths for custom files.
pub trait SinkWriter: Send + Sync {
    type Target: Send + Sync + 'static;

    /// Which strategy this is
    fn kind(&self) -> SinkKind;

    /// Append `text` to the destination described by `target`
    fn write(&self, target: &Self::Target, text: &str) -> SinkResult<()>;
}
