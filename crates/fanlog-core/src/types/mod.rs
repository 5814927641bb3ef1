//! Core enums shared by configuration, formatting and sinks

mod level;
mod time;

pub use level::LogLevel;
pub use time::{TimeFormat, TimeZoneKind};
